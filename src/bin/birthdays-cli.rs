#![forbid(unsafe_code)]
use anyhow::{Context, Result};
use birthdays::{
    io, locale,
    model::Roster,
    platform::{self, DEFAULT_BACKGROUND},
    render::{write_preview, RenderOptions, Renderer},
    FontPreference,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI minimaliste : liste d'anniversaires, image et export texte
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Fichier texte du roster (`nom,date`, ordre de saisie), chargé s'il existe
    #[arg(long, global = true, default_value = io::ROSTER_FILE_NAME)]
    roster: PathBuf,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Ajouter une personne
    Add {
        #[arg(long)]
        name: String,
        /// JJ.MM
        #[arg(long)]
        date: String,
    },

    /// Afficher la liste (ordre de saisie)
    List {
        /// Sortie JSON (feature `serde`)
        #[arg(long)]
        json: bool,
    },

    /// Générer l'image sur le Bureau
    Render {
        /// Image de fond (créée en blanc 800×1000 si absente)
        #[arg(long, default_value = DEFAULT_BACKGROUND)]
        background: PathBuf,
        /// Répertoire de sortie (défaut : Bureau)
        #[arg(long)]
        out_dir: Option<PathBuf>,
        /// Fichier de police TTF/OTF
        #[arg(long, conflicts_with = "bitmap_font")]
        font: Option<PathBuf>,
        /// Forcer la police bitmap intégrée
        #[arg(long)]
        bitmap_font: bool,
        /// Écrire aussi un aperçu réduit (400×500 max)
        #[arg(long)]
        preview: Option<PathBuf>,
    },

    /// Sauvegarder la liste triée et numérotée
    Export {
        /// Fichier de sortie (défaut : ./birthdays.txt)
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Importer des personnes depuis un CSV `name,date`
    #[cfg(feature = "serde")]
    Import {
        #[arg(long)]
        csv: PathBuf,
    },
}

/// État explicite de la session : roster et fichier qui le porte.
struct Session {
    roster: Roster,
    path: PathBuf,
}

impl Session {
    fn open(path: PathBuf) -> Result<Self> {
        let roster = if path.exists() {
            io::import_roster_txt(&path)
                .with_context(|| format!("loading roster {}", path.display()))?
        } else {
            Roster::new()
        };
        Ok(Self { roster, path })
    }

    fn save(&self) -> Result<()> {
        io::save_roster_txt(&self.path, self.roster.entries())?;
        Ok(())
    }
}

#[cfg(feature = "serde")]
fn print_json(roster: &Roster) -> Result<()> {
    println!("{}", io::roster_to_json(roster)?);
    Ok(())
}

#[cfg(not(feature = "serde"))]
fn print_json(_roster: &Roster) -> Result<()> {
    anyhow::bail!("JSON output requires the `serde` feature")
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let mut session = Session::open(cli.roster)?;

    let code = match cli.cmd {
        Commands::Add { name, date } => {
            session.roster.append(&name, date)?;
            session.save()?;
            0
        }
        Commands::List { json } => {
            if json {
                print_json(&session.roster)?;
            } else {
                for line in session.roster.display_lines() {
                    println!("{line}");
                }
            }
            0
        }
        Commands::Render {
            background,
            out_dir,
            font,
            bitmap_font,
            preview,
        } => {
            if session.roster.is_empty() {
                eprintln!("{}", locale::EMPTY_ROSTER_RENDER);
                // Code 2 = WARNING
                2
            } else {
                let background = platform::ensure_background(&background)
                    .with_context(|| format!("creating background {}", background.display()))?;
                let font = match (font, bitmap_font) {
                    (_, true) => FontPreference::Bitmap,
                    (Some(path), false) => FontPreference::File(path),
                    (None, false) => FontPreference::Auto,
                };
                let renderer = Renderer::new(RenderOptions {
                    font,
                    output_dir: out_dir,
                    ..Default::default()
                });
                let out = renderer.render(session.roster.entries(), &background)?;
                println!("{}", out.display());
                if let Some(dest) = preview {
                    write_preview(&out, &dest)?;
                }
                0
            }
        }
        Commands::Export { out } => {
            if session.roster.is_empty() {
                eprintln!("{}", locale::EMPTY_ROSTER_EXPORT);
                2
            } else {
                let out = match out {
                    Some(path) => path,
                    None => std::env::current_dir()?.join(io::EXPORT_FILE_NAME),
                };
                io::export_roster_txt(&out, session.roster.entries())?;
                println!("{}", out.display());
                0
            }
        }
        #[cfg(feature = "serde")]
        Commands::Import { csv } => {
            let entries = io::import_entries_csv(&csv)?;
            let count = entries.len();
            for entry in entries {
                session.roster.push(entry);
            }
            session.save()?;
            println!("imported {count} entries");
            0
        }
    };

    std::process::exit(code);
}
