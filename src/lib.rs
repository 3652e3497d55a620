#![forbid(unsafe_code)]
//! Birthdays — liste d'anniversaires (jour.mois) imprimée sur une image.
//!
//! - Saisie validée `JJ.MM` (sans contrôle du nombre de jours par mois).
//! - Vue triée par (mois, jour), stable.
//! - Rendu JPEG sur un fond, export texte numéroté.
//! - Pas de base de données : l'état ne survit que via l'export texte.

pub mod date;
pub mod font;
pub mod io;
pub mod locale;
pub mod model;
pub mod platform;
pub mod render;

pub use date::{validate, DayMonth};
pub use font::{load_font, FontFace, FontLoadError, FontPreference};
pub use io::{export_roster_txt, import_roster_txt, ExportError, ImportError};
pub use model::{sorted_view, BirthdayEntry, Roster, ValidationError};
pub use platform::{desktop_dir, ensure_background};
pub use render::{render, write_preview, Layout, RenderError, RenderOptions, Renderer};
