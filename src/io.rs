use crate::model::{sorted_view, BirthdayEntry, Roster, ValidationError};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

/// Nom du fichier texte par défaut (répertoire courant).
pub const EXPORT_FILE_NAME: &str = "birthdays.txt";
/// Fichier qui porte le roster entre deux lancements de la CLI.
pub const ROSTER_FILE_NAME: &str = "roster.txt";

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("writing {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("line {line}: expected `name,date`")]
    Parse { line: usize },
    #[error("line {line}: {source}")]
    Invalid {
        line: usize,
        #[source]
        source: ValidationError,
    },
    #[cfg(feature = "serde")]
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

/// Lignes `<rang>. <nom>,<date>` de la vue triée.
pub fn export_lines(entries: &[BirthdayEntry]) -> Vec<String> {
    sorted_view(entries)
        .iter()
        .enumerate()
        .map(|(i, e)| format!("{}. {},{}", i + 1, e.name(), e.date()))
        .collect()
}

/// Export texte trié et numéroté (UTF-8), remplacement atomique du fichier.
pub fn export_roster_txt<P: AsRef<Path>>(path: P, entries: &[BirthdayEntry]) -> Result<(), ExportError> {
    let path = path.as_ref();
    write_lines(path, export_lines(entries))?;
    tracing::debug!(path = %path.display(), count = entries.len(), "roster exported");
    Ok(())
}

/// Lignes `<nom>,<date>` dans l'ordre d'insertion, sans rang.
pub fn roster_lines(entries: &[BirthdayEntry]) -> Vec<String> {
    entries
        .iter()
        .map(|e| format!("{},{}", e.name(), e.date()))
        .collect()
}

/// Sauvegarde à plat du roster, ordre d'insertion conservé (relu par
/// [`import_roster_txt`]). Remplacement atomique.
pub fn save_roster_txt<P: AsRef<Path>>(path: P, entries: &[BirthdayEntry]) -> Result<(), ExportError> {
    let path = path.as_ref();
    write_lines(path, roster_lines(entries))?;
    tracing::debug!(path = %path.display(), count = entries.len(), "roster saved");
    Ok(())
}

fn write_lines(path: &Path, lines: Vec<String>) -> Result<(), ExportError> {
    let mut body = String::new();
    for line in lines {
        body.push_str(&line);
        body.push('\n');
    }
    write_atomic(path, body.as_bytes()).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn write_atomic(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.flush()?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Relit un fichier de roster ou d'export (`[<rang>. ]<nom>,<date>` par ligne),
/// lignes gardées dans l'ordre du fichier.
///
/// Le rang est optionnel, le nom peut contenir des virgules (coupure sur la
/// dernière), les lignes vides sont ignorées.
pub fn import_roster_txt<P: AsRef<Path>>(path: P) -> Result<Roster, ImportError> {
    let path = path.as_ref();
    let data = fs::read_to_string(path).map_err(|source| ImportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_roster_txt(&data)
}

pub fn parse_roster_txt(data: &str) -> Result<Roster, ImportError> {
    let mut roster = Roster::new();
    for (idx, raw) in data.lines().enumerate() {
        let line = idx + 1;
        let raw = raw.trim();
        if raw.is_empty() {
            continue;
        }
        let (name, date) = strip_rank(raw)
            .rsplit_once(',')
            .ok_or(ImportError::Parse { line })?;
        roster
            .append(name, date)
            .map_err(|source| ImportError::Invalid { line, source })?;
    }
    Ok(roster)
}

fn strip_rank(line: &str) -> &str {
    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return line;
    }
    match line[digits..].strip_prefix(". ") {
        Some(rest) => rest,
        None => line,
    }
}

/// Import CSV avec en-tête `name,date`. Tout ou rien : la première ligne
/// invalide interrompt l'import et rien n'est ajouté.
#[cfg(feature = "serde")]
pub fn import_entries_csv<P: AsRef<Path>>(path: P) -> Result<Vec<BirthdayEntry>, ImportError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)?;
    let mut out = Vec::new();
    for (idx, rec) in rdr.records().enumerate() {
        let rec = rec?;
        // ligne 1 = en-tête
        let line = idx + 2;
        let name = rec.get(0).ok_or(ImportError::Parse { line })?;
        let date = rec.get(1).ok_or(ImportError::Parse { line })?;
        let entry = BirthdayEntry::new(name, date)
            .map_err(|source| ImportError::Invalid { line, source })?;
        out.push(entry);
    }
    Ok(out)
}

/// Export JSON (jolie mise en forme) du roster, ordre d'insertion.
#[cfg(feature = "serde")]
pub fn roster_to_json(roster: &Roster) -> serde_json::Result<String> {
    serde_json::to_string_pretty(roster)
}
