/// Couple jour/mois extrait d'une chaîne `JJ.MM`.
///
/// L'ordre des champs (mois puis jour) donne directement la clé de tri
/// `(month, day)` via `Ord`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayMonth {
    month: u8,
    day: u8,
}

impl DayMonth {
    /// Parse `JJ.MM` : exactement deux jetons séparés par un point, entiers,
    /// jour dans 1..=31 et mois dans 1..=12.
    ///
    /// Le nombre de jours du mois n'est PAS vérifié : `31.02` est accepté.
    pub fn parse(s: &str) -> Option<Self> {
        let mut tokens = s.split('.');
        let (day, month) = match (tokens.next(), tokens.next(), tokens.next()) {
            (Some(d), Some(m), None) => (parse_int(d)?, parse_int(m)?),
            _ => return None,
        };
        if !(1..=31).contains(&day) || !(1..=12).contains(&month) {
            return None;
        }
        Some(Self {
            month: month as u8,
            day: day as u8,
        })
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    pub fn month(&self) -> u8 {
        self.month
    }
}

/// Vrai si `s` est une date `JJ.MM` plausible (voir [`DayMonth::parse`]).
pub fn validate(s: &str) -> bool {
    DayMonth::parse(s).is_some()
}

/// Signe optionnel puis chiffres ASCII ; pas de séparateur `_`.
fn parse_int(token: &str) -> Option<i64> {
    token.trim().parse::<i64>().ok()
}
