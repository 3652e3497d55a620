use crate::font::FontPreference;
use std::path::PathBuf;
use thiserror::Error;

/// Positions fixes (pixels) et tailles de police du rendu.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub title_size: f32,
    pub title_top: u32,
    pub month_top: u32,
    pub list_size: f32,
    pub list_left: u32,
    pub list_top: u32,
    pub line_height: u32,
    pub jpeg_quality: u8,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            title_size: 60.0,
            title_top: 250,
            month_top: 330,
            list_size: 30.0,
            list_left: 170,
            list_top: 450,
            line_height: 50,
            jpeg_quality: 95,
        }
    }
}

/// Options de rendu ; `output_dir: None` = Bureau de l'utilisateur.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    pub layout: Layout,
    pub font: FontPreference,
    pub output_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    /// Centré horizontalement sur le canevas.
    Center,
    /// Aligné à gauche à l'abscisse donnée.
    Left(u32),
}

/// Une ligne de texte à dessiner ; `top` est le haut de la ligne.
#[derive(Debug, Clone, PartialEq)]
pub struct TextOp {
    pub text: String,
    pub size: f32,
    pub align: Align,
    pub top: u32,
}

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("cannot open background {}: {source}", .path.display())]
    BackgroundLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("building text overlay: {0}")]
    Svg(#[from] usvg::Error),
    #[error("cannot allocate a {width}x{height} canvas")]
    Canvas { width: u32, height: u32 },
    #[error("writing {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("encoding image: {0}")]
    Encode(#[from] image::ImageError),
    #[error("preview of {}: {source}", .path.display())]
    Preview {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}
