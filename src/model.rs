use crate::date::DayMonth;
use crate::locale;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Refus d'une entrée à la saisie ; le roster n'est jamais modifié.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("name must not be empty")]
    EmptyName,
    #[error("invalid date {0:?}: expected DD.MM")]
    InvalidDate(String),
}

/// Anniversaire validé (nom non vide, date `JJ.MM` plausible).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "EntryRecord", into = "EntryRecord")
)]
pub struct BirthdayEntry {
    name: String,
    date: String,
    key: DayMonth,
}

impl BirthdayEntry {
    /// Valide puis construit une entrée. Nom et date sont nettoyés (`trim`).
    pub fn new<N: AsRef<str>, D: Into<String>>(name: N, date: D) -> Result<Self, ValidationError> {
        let name = name.as_ref().trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        let date = date.into().trim().to_owned();
        let key = DayMonth::parse(&date).ok_or_else(|| ValidationError::InvalidDate(date.clone()))?;
        Ok(Self {
            name: name.to_owned(),
            date,
            key,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Date telle que saisie, sans espaces autour.
    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn day_month(&self) -> DayMonth {
        self.key
    }

    pub fn month(&self) -> u8 {
        self.key.month()
    }

    pub fn day(&self) -> u8 {
        self.key.day()
    }
}

/// Forme sérialisée d'une entrée ; la désérialisation repasse par la validation.
#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct EntryRecord {
    name: String,
    date: String,
}

#[cfg(feature = "serde")]
impl TryFrom<EntryRecord> for BirthdayEntry {
    type Error = ValidationError;

    fn try_from(rec: EntryRecord) -> Result<Self, Self::Error> {
        BirthdayEntry::new(rec.name, rec.date)
    }
}

#[cfg(feature = "serde")]
impl From<BirthdayEntry> for EntryRecord {
    fn from(entry: BirthdayEntry) -> Self {
        Self {
            name: entry.name,
            date: entry.date,
        }
    }
}

/// Vue triée par `(mois, jour)`, stable sur les égalités (ordre d'insertion).
pub fn sorted_view(entries: &[BirthdayEntry]) -> Vec<BirthdayEntry> {
    let mut sorted = entries.to_vec();
    sorted.sort_by_key(BirthdayEntry::day_month);
    sorted
}

/// Liste ordonnée des anniversaires (ordre d'insertion).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Roster {
    entries: Vec<BirthdayEntry>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ajoute une entrée validée ; en cas d'erreur le roster reste inchangé.
    pub fn append<N: AsRef<str>, D: Into<String>>(
        &mut self,
        name: N,
        date: D,
    ) -> Result<(), ValidationError> {
        let entry = BirthdayEntry::new(name, date)?;
        self.entries.push(entry);
        Ok(())
    }

    pub fn push(&mut self, entry: BirthdayEntry) {
        self.entries.push(entry);
    }

    /// Vue triée recalculée à chaque appel.
    pub fn sorted_view(&self) -> Vec<BirthdayEntry> {
        sorted_view(&self.entries)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Entrées dans l'ordre d'insertion.
    pub fn entries(&self) -> &[BirthdayEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &BirthdayEntry> {
        self.entries.iter()
    }

    /// Lignes d'affichage `nom — date` (ordre d'insertion), ou le texte
    /// « liste vide » si aucune entrée.
    pub fn display_lines(&self) -> Vec<String> {
        if self.entries.is_empty() {
            return vec![locale::EMPTY_LIST.to_string()];
        }
        self.entries
            .iter()
            .map(|e| format!("{} — {}", e.name(), e.date()))
            .collect()
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a BirthdayEntry;
    type IntoIter = std::slice::Iter<'a, BirthdayEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
