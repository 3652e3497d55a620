#![forbid(unsafe_code)]
use birthdays::{validate, BirthdayEntry, Roster, ValidationError};

fn names(entries: &[BirthdayEntry]) -> Vec<&str> {
    entries.iter().map(BirthdayEntry::name).collect()
}

#[test]
fn validate_accepts_every_day_month_in_range() {
    for month in 1..=12 {
        for day in 1..=31 {
            let s = format!("{day:02}.{month:02}");
            assert!(validate(&s), "{s} should be valid");
        }
    }
    assert!(validate("5.6"));
    assert!(validate(" 5 . 6 "));
}

#[test]
fn validate_rejects_out_of_range_and_malformed() {
    for s in [
        "00.01", "32.01", "15.00", "15.13", "-1.05", "", "15", "15.", ".03", "15.03.2000",
        "aa.bb", "15/03", "1.5.", "15,03",
    ] {
        assert!(!validate(s), "{s:?} should be invalid");
    }
}

#[test]
fn validate_takes_plain_decimal_tokens_only() {
    assert!(validate("+5.03"));
    assert!(validate("005.03"));
    for s in ["1_5.03", "15.0_3", "0x0F.03", "1e1.03", "١٥.03"] {
        assert!(!validate(s), "{s:?} should be invalid");
    }
}

#[test]
fn validate_does_not_check_days_per_month() {
    assert!(validate("31.02"));
    assert!(validate("31.04"));
    assert!(validate("29.02"));
}

#[test]
fn append_trims_name_and_keeps_date_text() {
    let mut roster = Roster::new();
    roster.append("  Anna Petrova  ", "7.3").unwrap();
    let entry = &roster.entries()[0];
    assert_eq!(entry.name(), "Anna Petrova");
    assert_eq!(entry.date(), "7.3");
    assert_eq!((entry.day(), entry.month()), (7, 3));
}

#[test]
fn append_strips_spaces_around_date() {
    let mut roster = Roster::new();
    roster.append("X", " 5.06 ").unwrap();
    roster.append("Y", "\t01.02\n").unwrap();
    assert_eq!(roster.entries()[0].date(), "5.06");
    assert_eq!(roster.entries()[1].date(), "01.02");
    assert_eq!(roster.display_lines(), ["X — 5.06", "Y — 01.02"]);
}

#[test]
fn failed_append_leaves_roster_unchanged() {
    let mut roster = Roster::new();
    roster.append("Alice", "15.03").unwrap();

    assert_eq!(roster.append("", "05.06"), Err(ValidationError::EmptyName));
    assert_eq!(roster.append("   ", "05.06"), Err(ValidationError::EmptyName));
    assert_eq!(
        roster.append("Eve", "32.01"),
        Err(ValidationError::InvalidDate("32.01".into()))
    );
    assert_eq!(roster.len(), 1);
}

#[test]
fn append_accepts_impossible_february_date() {
    let mut roster = Roster::new();
    roster.append("Dana", "31.02").unwrap();
    assert_eq!(roster.len(), 1);
}

#[test]
fn sorted_view_orders_by_month_then_day_and_is_stable() {
    let mut roster = Roster::new();
    roster.append("Alice", "15.03").unwrap();
    roster.append("Bob", "02.01").unwrap();
    roster.append("Cara", "02.01").unwrap();

    let sorted = roster.sorted_view();
    assert_eq!(names(&sorted), ["Bob", "Cara", "Alice"]);
    // l'ordre d'insertion n'est pas touché
    assert_eq!(names(roster.entries()), ["Alice", "Bob", "Cara"]);
}

#[test]
fn sorted_view_is_a_sorted_permutation() {
    let mut roster = Roster::new();
    let input = [
        ("A", "31.12"),
        ("B", "1.1"),
        ("C", "15.06"),
        ("D", "01.06"),
        ("E", "15.06"),
        ("F", "28.02"),
        ("G", "1.01"),
    ];
    for (name, date) in input {
        roster.append(name, date).unwrap();
    }

    let sorted = roster.sorted_view();
    assert_eq!(sorted.len(), roster.len());
    for entry in roster.entries() {
        assert!(sorted.contains(entry));
    }
    for pair in sorted.windows(2) {
        assert!((pair[0].month(), pair[0].day()) <= (pair[1].month(), pair[1].day()));
    }
    assert_eq!(names(&sorted), ["B", "G", "F", "D", "C", "E", "A"]);
    assert_eq!(roster.sorted_view(), sorted);
}

#[test]
fn display_lines_show_placeholder_when_empty() {
    let mut roster = Roster::new();
    assert!(roster.is_empty());
    assert_eq!(roster.display_lines(), ["Список пуст."]);

    roster.append("Bob", "02.01").unwrap();
    roster.append("Alice", "15.03").unwrap();
    assert_eq!(roster.display_lines(), ["Bob — 02.01", "Alice — 15.03"]);
}

#[cfg(feature = "serde")]
#[test]
fn json_roundtrip_revalidates_entries() {
    let mut roster = Roster::new();
    roster.append("Анна", "08.03").unwrap();
    let json = serde_json::to_string(&roster).unwrap();
    assert_eq!(json, r#"[{"name":"Анна","date":"08.03"}]"#);

    let back: Roster = serde_json::from_str(&json).unwrap();
    assert_eq!(back, roster);

    let bad = serde_json::from_str::<Roster>(r#"[{"name":"X","date":"40.01"}]"#);
    assert!(bad.is_err());
}
