mod bitmap;
mod svg;
mod types;

pub use types::{Align, Layout, RenderError, RenderOptions, TextOp};

use crate::font::{load_font, FontFace};
use crate::locale;
use crate::model::{sorted_view, BirthdayEntry};
use crate::platform;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, ImageReader, RgbImage};
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Nom du fichier image produit (remplacé à chaque rendu).
pub const OUTPUT_FILE_NAME: &str = "birthdays_current.jpg";
/// Boîte dans laquelle tient l'aperçu.
pub const PREVIEW_BOX: (u32, u32) = (400, 500);

/// Rendu avec les options par défaut, écrit sur le Bureau.
pub fn render<P: AsRef<Path>>(entries: &[BirthdayEntry], background: P) -> Result<PathBuf, RenderError> {
    Renderer::new(RenderOptions::default()).render(entries, background)
}

/// Lignes à dessiner pour `entries` (ordre d'insertion).
///
/// Le mois affiché est celui de la PREMIÈRE entrée saisie, pas celui de la vue
/// triée ni le plus fréquent.
pub fn layout_text(layout: &Layout, entries: &[BirthdayEntry]) -> Vec<TextOp> {
    let mut ops = vec![TextOp {
        text: locale::TITLE.to_string(),
        size: layout.title_size,
        align: Align::Center,
        top: layout.title_top,
    }];

    if let Some(month) = entries.first().and_then(|e| locale::month_name(e.month())) {
        ops.push(TextOp {
            text: month.to_string(),
            size: layout.title_size,
            align: Align::Center,
            top: layout.month_top,
        });
    }

    let mut top = layout.list_top;
    for (i, entry) in sorted_view(entries).iter().enumerate() {
        ops.push(TextOp {
            text: format!("{}. {} — {}", i + 1, entry.name(), entry.date()),
            size: layout.list_size,
            align: Align::Left(layout.list_left),
            top,
        });
        top = top.saturating_add(layout.line_height);
    }
    ops
}

/// Moteur de rendu : police chargée une fois, réutilisable pour plusieurs rendus.
#[derive(Debug)]
pub struct Renderer {
    options: RenderOptions,
    font: FontFace,
}

impl Renderer {
    pub fn new(options: RenderOptions) -> Self {
        let font = load_font(&options.font);
        Self { options, font }
    }

    /// Utilise une police déjà chargée ; `options.font` est ignoré.
    pub fn with_font(options: RenderOptions, font: FontFace) -> Self {
        Self { options, font }
    }

    pub fn font(&self) -> &FontFace {
        &self.font
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Répertoire de sortie effectif.
    pub fn output_dir(&self) -> PathBuf {
        self.options
            .output_dir
            .clone()
            .unwrap_or_else(platform::desktop_dir)
    }

    /// Dessine le titre, le mois et la liste triée sur le fond, puis écrit le
    /// JPEG dans le répertoire de sortie. Ne modifie pas `entries`.
    pub fn render<P: AsRef<Path>>(
        &self,
        entries: &[BirthdayEntry],
        background: P,
    ) -> Result<PathBuf, RenderError> {
        let background = background.as_ref();
        let mut canvas = load_background(background)?;
        let ops = layout_text(&self.options.layout, entries);
        match &self.font {
            FontFace::Outline { db, family } => svg::draw(&mut canvas, &ops, db, family)?,
            FontFace::Bitmap => bitmap::draw(&mut canvas, &ops),
        }

        let dir = self.output_dir();
        fs::create_dir_all(&dir).map_err(|source| RenderError::Io {
            path: dir.clone(),
            source,
        })?;
        let out = dir.join(OUTPUT_FILE_NAME);
        write_jpeg(&canvas, &out, self.options.layout.jpeg_quality)?;
        tracing::debug!(path = %out.display(), lines = entries.len(), "image rendered");
        Ok(out)
    }
}

fn load_background(path: &Path) -> Result<RgbImage, RenderError> {
    let load_err = |source| RenderError::BackgroundLoad {
        path: path.to_path_buf(),
        source,
    };
    let img = ImageReader::open(path)
        .and_then(|r| r.with_guessed_format())
        .map_err(|e| load_err(image::ImageError::IoError(e)))?
        .decode()
        .map_err(load_err)?;
    Ok(img.to_rgb8())
}

/// Écriture atomique (fichier temporaire puis renommage).
fn write_jpeg(canvas: &RgbImage, path: &Path, quality: u8) -> Result<(), RenderError> {
    let io_err = |source| RenderError::Io {
        path: path.to_path_buf(),
        source,
    };
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir).map_err(io_err)?;
    {
        let mut writer = BufWriter::new(tmp.as_file_mut());
        JpegEncoder::new_with_quality(&mut writer, quality).encode_image(canvas)?;
        writer.flush().map_err(io_err)?;
    }
    tmp.as_file().sync_all().map_err(io_err)?;
    tmp.persist(path).map_err(|e| io_err(e.error))?;
    Ok(())
}

/// Écrit un aperçu réduit de `source` (tient dans 400×500, proportions
/// conservées, jamais agrandi). Le format suit l'extension de `dest`.
pub fn write_preview<S: AsRef<Path>, D: AsRef<Path>>(source: S, dest: D) -> Result<PathBuf, RenderError> {
    let (source, dest) = (source.as_ref(), dest.as_ref());
    let img = image::open(source).map_err(|e| RenderError::Preview {
        path: source.to_path_buf(),
        source: e,
    })?;
    let (max_w, max_h) = PREVIEW_BOX;
    let img = if img.width() > max_w || img.height() > max_h {
        img.resize(max_w, max_h, FilterType::Lanczos3)
    } else {
        img
    };
    DynamicImage::ImageRgb8(img.to_rgb8())
        .save(dest)
        .map_err(|e| RenderError::Preview {
            path: dest.to_path_buf(),
            source: e,
        })?;
    Ok(dest.to_path_buf())
}
