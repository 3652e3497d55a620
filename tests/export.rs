#![forbid(unsafe_code)]
use birthdays::io::{export_lines, parse_roster_txt, roster_lines, save_roster_txt, ImportError};
use birthdays::{export_roster_txt, import_roster_txt, Roster, ValidationError};
use std::fs;
use tempfile::tempdir;

fn sample() -> Roster {
    let mut roster = Roster::new();
    roster.append("Alice", "15.03").unwrap();
    roster.append("Bob", "02.01").unwrap();
    roster.append("Cara", "02.01").unwrap();
    roster
}

#[test]
fn export_writes_sorted_numbered_lines() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("birthdays.txt");
    export_roster_txt(&path, sample().entries()).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    insta::assert_snapshot!(contents.trim_end(), @r"
    1. Bob,02.01
    2. Cara,02.01
    3. Alice,15.03
    ");
    assert!(contents.ends_with('\n'));
}

#[test]
fn export_overwrites_and_is_idempotent() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("birthdays.txt");
    fs::write(&path, "stale content that is much longer than the export\n".repeat(10)).unwrap();

    let roster = sample();
    export_roster_txt(&path, roster.entries()).unwrap();
    let first = fs::read(&path).unwrap();
    export_roster_txt(&path, roster.entries()).unwrap();
    let second = fs::read(&path).unwrap();
    assert_eq!(first, second);

    let text = String::from_utf8(first).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), roster.len());
    for (i, line) in lines.iter().enumerate() {
        assert!(line.starts_with(&format!("{}. ", i + 1)), "{line}");
    }
}

#[test]
fn export_of_empty_roster_writes_empty_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("empty.txt");
    export_roster_txt(&path, &[]).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "");
}

#[test]
fn export_fails_when_directory_is_missing() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing").join("birthdays.txt");
    let err = export_roster_txt(&path, sample().entries()).unwrap_err();
    assert!(err.to_string().contains("birthdays.txt"));
}

#[test]
fn export_keeps_utf8_names() {
    let mut roster = Roster::new();
    roster.append("Иванов Иван Иванович", "12.04").unwrap();
    assert_eq!(export_lines(roster.entries()), ["1. Иванов Иван Иванович,12.04"]);
}

#[test]
fn reimport_returns_sorted_roster() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("birthdays.txt");
    let mut roster = sample();
    roster.append("Smith, John", "01.12").unwrap();
    export_roster_txt(&path, roster.entries()).unwrap();

    let back = import_roster_txt(&path).unwrap();
    assert_eq!(back.entries(), roster.sorted_view().as_slice());
}

#[test]
fn saved_roster_keeps_insertion_order() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("roster.txt");
    let mut roster = sample();
    roster.append("Smith, John", "01.12").unwrap();
    roster.append("Dan", " 7.3 ").unwrap();
    save_roster_txt(&path, roster.entries()).unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "Alice,15.03\nBob,02.01\nCara,02.01\nSmith, John,01.12\nDan,7.3\n"
    );
    assert_eq!(import_roster_txt(&path).unwrap(), roster);
}

#[test]
fn roster_lines_are_unranked() {
    assert_eq!(roster_lines(sample().entries()), ["Alice,15.03", "Bob,02.01", "Cara,02.01"]);
    assert!(roster_lines(&[]).is_empty());
}

#[test]
fn parse_accepts_unranked_lines_and_skips_blanks() {
    let roster = parse_roster_txt("Bob,02.01\n\n  2. Cara , 02.01 \n").unwrap();
    let pairs: Vec<(&str, &str)> = roster.iter().map(|e| (e.name(), e.date())).collect();
    assert_eq!(pairs, [("Bob", "02.01"), ("Cara", "02.01")]);
}

#[test]
fn parse_reports_line_numbers() {
    let err = parse_roster_txt("1. Bob,02.01\nno comma here\n").unwrap_err();
    assert!(matches!(err, ImportError::Parse { line: 2 }));

    let err = parse_roster_txt("1. Bob,02.01\n2. Eve,45.01\n").unwrap_err();
    assert!(matches!(
        err,
        ImportError::Invalid {
            line: 2,
            source: ValidationError::InvalidDate(_)
        }
    ));
}

#[cfg(feature = "serde")]
#[test]
fn csv_import_validates_every_row() {
    use birthdays::io::import_entries_csv;
    use birthdays::BirthdayEntry;

    let dir = tempdir().unwrap();
    let ok = dir.path().join("ok.csv");
    fs::write(&ok, "name,date\nAlice,15.03\n\"Smith, John\",01.12\n").unwrap();
    let entries = import_entries_csv(&ok).unwrap();
    let names: Vec<&str> = entries.iter().map(BirthdayEntry::name).collect();
    assert_eq!(names, ["Alice", "Smith, John"]);

    let bad = dir.path().join("bad.csv");
    fs::write(&bad, "name,date\nAlice,15.03\n,01.12\n").unwrap();
    let err = import_entries_csv(&bad).unwrap_err();
    assert!(matches!(
        err,
        ImportError::Invalid {
            line: 3,
            source: ValidationError::EmptyName
        }
    ));
}
