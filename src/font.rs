use crate::platform::platform_font_path;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use usvg::fontdb;

/// Choix de police demandé par l'appelant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FontPreference {
    /// Police de la plateforme courante (voir [`platform_font_path`]).
    #[default]
    Auto,
    /// Fichier TTF/OTF explicite.
    File(PathBuf),
    /// Police bitmap intégrée, sans chargement.
    Bitmap,
}

/// Police effectivement utilisée pour le rendu.
#[derive(Clone)]
pub enum FontFace {
    /// Police vectorielle, dessinée via un calque SVG.
    Outline {
        db: Arc<fontdb::Database>,
        family: String,
    },
    /// Police bitmap 5×7 intégrée, toujours disponible.
    Bitmap,
}

impl FontFace {
    pub fn is_bitmap(&self) -> bool {
        matches!(self, FontFace::Bitmap)
    }

    pub fn family(&self) -> Option<&str> {
        match self {
            FontFace::Outline { family, .. } => Some(family),
            FontFace::Bitmap => None,
        }
    }
}

impl fmt::Debug for FontFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontFace::Outline { db, family } => f
                .debug_struct("Outline")
                .field("family", family)
                .field("faces", &db.len())
                .finish(),
            FontFace::Bitmap => f.write_str("Bitmap"),
        }
    }
}

/// Échec de chargement ; toujours rattrapé par [`load_font`].
#[derive(Error, Debug)]
pub enum FontLoadError {
    #[error("reading font {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("no usable face in {}", .path.display())]
    NoFace { path: PathBuf },
    #[error("no system font available")]
    NoSystemFont,
}

/// Charge la police demandée. N'échoue jamais : fichier, puis polices
/// système, puis police bitmap intégrée.
pub fn load_font(preference: &FontPreference) -> FontFace {
    match preference {
        FontPreference::Bitmap => FontFace::Bitmap,
        FontPreference::Auto => load_with_fallback(platform_font_path(std::env::consts::OS)),
        FontPreference::File(path) => load_with_fallback(path),
    }
}

fn load_with_fallback(path: &Path) -> FontFace {
    match load_font_file(path) {
        Ok(face) => return face,
        Err(err) => tracing::warn!(%err, "font file unusable, trying system fonts"),
    }
    match load_system_font() {
        Ok(face) => face,
        Err(err) => {
            tracing::warn!(%err, "falling back to built-in bitmap font");
            FontFace::Bitmap
        }
    }
}

pub fn load_font_file(path: &Path) -> Result<FontFace, FontLoadError> {
    let data = std::fs::read(path).map_err(|source| FontLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut db = fontdb::Database::new();
    db.load_font_data(data);
    let family = first_family(&db).ok_or_else(|| FontLoadError::NoFace {
        path: path.to_path_buf(),
    })?;
    tracing::debug!(path = %path.display(), %family, "font loaded");
    Ok(FontFace::Outline {
        db: Arc::new(db),
        family,
    })
}

pub fn load_system_font() -> Result<FontFace, FontLoadError> {
    let mut db = fontdb::Database::new();
    db.load_system_fonts();
    let family = sans_serif_family(&db)
        .or_else(|| first_family(&db))
        .ok_or(FontLoadError::NoSystemFont)?;
    tracing::debug!(%family, faces = db.len(), "system font selected");
    Ok(FontFace::Outline {
        db: Arc::new(db),
        family,
    })
}

fn sans_serif_family(db: &fontdb::Database) -> Option<String> {
    let query = fontdb::Query {
        families: &[fontdb::Family::SansSerif],
        ..Default::default()
    };
    let id = db.query(&query)?;
    db.face(id)?.families.first().map(|(name, _)| name.clone())
}

fn first_family(db: &fontdb::Database) -> Option<String> {
    db.faces()
        .find_map(|face| face.families.first().map(|(name, _)| name.clone()))
}
