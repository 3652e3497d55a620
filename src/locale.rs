//! Textes fixes (locale russe unique, pas de framework i18n).

/// Titre dessiné en haut de l'image.
pub const TITLE: &str = "Дни рождения";

/// Ligne affichée à la place d'une liste vide.
pub const EMPTY_LIST: &str = "Список пуст.";

/// Avertissement quand on demande une image sans aucune entrée.
pub const EMPTY_ROSTER_RENDER: &str = "Список именинников пуст.";

/// Avertissement quand on demande un export sans aucune entrée.
pub const EMPTY_ROSTER_EXPORT: &str = "Список пуст, сохранять нечего.";

pub const MONTHS: [&str; 12] = [
    "Январь",
    "Февраль",
    "Март",
    "Апрель",
    "Май",
    "Июнь",
    "Июль",
    "Август",
    "Сентябрь",
    "Октябрь",
    "Ноябрь",
    "Декабрь",
];

/// Nom du mois `month` (1 = janvier), `None` hors de 1..=12.
pub fn month_name(month: u8) -> Option<&'static str> {
    match month {
        1..=12 => Some(MONTHS[usize::from(month) - 1]),
        _ => None,
    }
}
