use chrono::NaiveDate;
use contacts::error::ErrorKind;
use contacts::model::*;
use contacts::ops::contact_ops;
use contacts::queries::birthday_queries::DEFAULT_WINDOW_DAYS;
use contacts::queries::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn with_birthdays(entries: &[(&str, &str)]) -> Directory {
    let mut dir = Directory::new();
    for (i, (name, birthday)) in entries.iter().enumerate() {
        let phone = format!("{:010}", i);
        contact_ops::add_contact(&mut dir, name, &phone, Some(*birthday)).unwrap();
    }
    dir
}

// ==========================================================================
// CONTACT QUERIES
// ==========================================================================

#[test]
fn phones_of_known_contact() {
    let dir = with_birthdays(&[("Anna", "15.03.1990")]);
    let phones = contact_queries::phones_of(&dir, "Anna").unwrap();
    assert_eq!(phones.len(), 1);
}

#[test]
fn phones_of_unknown_contact() {
    let dir = Directory::new();
    let err = contact_queries::phones_of(&dir, "Anna").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn birthday_of_contact_without_birthday() {
    let mut dir = Directory::new();
    contact_ops::add_contact(&mut dir, "Anna", "1234567890", None).unwrap();
    assert_eq!(contact_queries::birthday_of(&dir, "Anna").unwrap(), None);
}

// ==========================================================================
// UPCOMING BIRTHDAYS
// ==========================================================================

#[test]
fn birthday_tomorrow_on_weekday() {
    // 15.03.2024 is a Friday
    let dir = with_birthdays(&[("Anna", "15.03.1990")]);
    let upcoming = dir.upcoming_birthdays(date(2024, 3, 14), DEFAULT_WINDOW_DAYS);
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].contact.name(), "Anna");
    assert_eq!(upcoming[0].congratulation_date, date(2024, 3, 15));
}

#[test]
fn saturday_birthday_congratulated_on_monday() {
    // 15.03.2025 is a Saturday
    let dir = with_birthdays(&[("Anna", "15.03.1990")]);
    let upcoming = dir.upcoming_birthdays(date(2025, 3, 14), DEFAULT_WINDOW_DAYS);
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].occurrence, date(2025, 3, 15));
    assert_eq!(upcoming[0].congratulation_date, date(2025, 3, 17));
    // stored birthday is untouched
    assert_eq!(upcoming[0].contact.birthday(), Some(date(1990, 3, 15)));
}

#[test]
fn window_is_inclusive_on_both_ends() {
    let dir = with_birthdays(&[
        ("Today", "10.06.1980"),
        ("LastDay", "17.06.1985"),
        ("TooLate", "18.06.1985"),
    ]);
    let upcoming = dir.upcoming_birthdays(date(2024, 6, 10), 7);
    let names: Vec<&str> = upcoming.iter().map(|u| u.contact.name()).collect();
    assert_eq!(names, vec!["Today", "LastDay"]);
}

#[test]
fn passed_birthdays_are_excluded() {
    let dir = with_birthdays(&[("Anna", "13.03.1990")]);
    assert!(dir.upcoming_birthdays(date(2024, 3, 14), 7).is_empty());
}

#[test]
fn window_wraps_into_next_year() {
    let dir = with_birthdays(&[("Anna", "02.01.1990")]);
    let upcoming = dir.upcoming_birthdays(date(2024, 12, 30), 7);
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].occurrence, date(2025, 1, 2));
}

#[test]
fn contacts_without_birthday_are_skipped() {
    let mut dir = Directory::new();
    contact_ops::add_contact(&mut dir, "Anna", "1234567890", None).unwrap();
    assert!(dir.upcoming_birthdays(date(2024, 3, 14), 7).is_empty());
}

#[test]
fn ordered_by_congratulation_date_then_name() {
    // 2025: 15.03 Sat, 16.03 Sun, 17.03 Mon, 14.03 Fri
    let dir = with_birthdays(&[
        ("Zoe", "17.03.1990"),
        ("Mike", "15.03.1990"),
        ("Anna", "16.03.1990"),
        ("Bob", "14.03.1990"),
    ]);
    let upcoming = dir.upcoming_birthdays(date(2025, 3, 14), 7);
    let names: Vec<&str> = upcoming.iter().map(|u| u.contact.name()).collect();
    assert_eq!(names, vec!["Bob", "Anna", "Mike", "Zoe"]);
    assert!(upcoming[1..]
        .iter()
        .all(|u| u.congratulation_date == date(2025, 3, 17)));
}

#[test]
fn upcoming_is_idempotent() {
    let dir = with_birthdays(&[("Anna", "15.03.1990"), ("Bob", "18.03.1991")]);
    let today = date(2025, 3, 14);
    assert_eq!(dir.upcoming_birthdays(today, 7), dir.upcoming_birthdays(today, 7));
}

#[test]
fn leap_day_birthday_in_common_year() {
    let dir = with_birthdays(&[("Leap", "29.02.2000")]);
    let upcoming = dir.upcoming_birthdays(date(2023, 2, 25), 7);
    assert_eq!(upcoming.len(), 1);
    // 28.02.2023 is a Tuesday
    assert_eq!(upcoming[0].congratulation_date, date(2023, 2, 28));
}

#[test]
fn saturday_on_last_window_day_is_listed_with_monday_date() {
    // 15.03.2025 is a Saturday, exactly seven days after 08.03.2025
    let dir = with_birthdays(&[("Anna", "15.03.1990")]);
    let upcoming = dir.upcoming_birthdays(date(2025, 3, 8), 7);
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].occurrence, date(2025, 3, 15));
    assert_eq!(upcoming[0].congratulation_date, date(2025, 3, 17));
}

#[test]
fn upcoming_carries_stored_birthday() {
    let dir = with_birthdays(&[("Anna", "15.03.1990")]);
    let upcoming = dir.upcoming_birthdays(date(2025, 3, 14), 7);
    assert_eq!(upcoming[0].birthday, date(1990, 3, 15));
}

#[test]
fn padded_name_query_finds_contact() {
    let dir = with_birthdays(&[("Anna", "15.03.1990")]);
    assert_eq!(
        contact_queries::birthday_of(&dir, " Anna ").unwrap(),
        Some(date(1990, 3, 15))
    );
}
