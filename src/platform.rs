use directories::{BaseDirs, UserDirs};
use image::{ImageResult, Rgb, RgbImage};
use std::path::{Path, PathBuf};

/// Fond par défaut, dans le répertoire courant.
pub const DEFAULT_BACKGROUND: &str = "background.jpg";
/// Taille du fond blanc créé quand aucun fond n'existe.
pub const DEFAULT_CANVAS: (u32, u32) = (800, 1000);

/// Police à essayer en premier, par identifiant de plateforme
/// (`std::env::consts::OS`).
const PLATFORM_FONTS: &[(&str, &str)] = &[
    ("windows", "dehinted-DarumadropOne.ttf"),
    ("macos", "dehinted-DarumadropOne.ttf"),
];
const DEFAULT_PLATFORM_FONT: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf";

/// Fichier de police associé à la plateforme `os`.
pub fn platform_font_path(os: &str) -> &'static Path {
    let path = PLATFORM_FONTS
        .iter()
        .find(|(key, _)| *key == os)
        .map(|(_, path)| *path)
        .unwrap_or(DEFAULT_PLATFORM_FONT);
    Path::new(path)
}

/// Répertoire Bureau de l'utilisateur ; à défaut `~/Desktop`, puis `.`.
pub fn desktop_dir() -> PathBuf {
    if let Some(dir) = UserDirs::new().and_then(|d| d.desktop_dir().map(Path::to_path_buf)) {
        return dir;
    }
    match BaseDirs::new() {
        Some(base) => base.home_dir().join("Desktop"),
        None => {
            tracing::warn!("no home directory found, using current directory as desktop");
            PathBuf::from(".")
        }
    }
}

/// Crée un fond blanc 800×1000 à `path` s'il n'existe pas encore.
pub fn ensure_background<P: AsRef<Path>>(path: P) -> ImageResult<PathBuf> {
    let path = path.as_ref();
    if !path.exists() {
        let (w, h) = DEFAULT_CANVAS;
        RgbImage::from_pixel(w, h, Rgb([255, 255, 255])).save(path)?;
        tracing::debug!(path = %path.display(), "default background created");
    }
    Ok(path.to_path_buf())
}
