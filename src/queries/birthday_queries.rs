use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::model::{Contact, Directory};

/// Default look-ahead for birthday reminders, in days.
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// A contact whose birthday falls inside the reminder window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub contact: Contact,
    /// The stored birthday, birth year included.
    pub birthday: NaiveDate,
    /// The actual anniversary this year (or next).
    pub occurrence: NaiveDate,
    /// The day to send congratulations; weekend occurrences move to Monday.
    pub congratulation_date: NaiveDate,
}

/// The birthday's month/day in `year`. Feb 29 falls back to Feb 28 in common years.
pub fn anniversary_in(birthday: NaiveDate, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
}

/// First anniversary on or after `today`.
pub fn next_occurrence(birthday: NaiveDate, today: NaiveDate) -> Option<NaiveDate> {
    let this_year = anniversary_in(birthday, today.year())?;
    if this_year < today {
        anniversary_in(birthday, today.year() + 1)
    } else {
        Some(this_year)
    }
}

/// Saturday and Sunday roll forward to the following Monday.
pub fn congratulation_date(occurrence: NaiveDate) -> NaiveDate {
    match occurrence.weekday() {
        Weekday::Sat => occurrence + Duration::days(2),
        Weekday::Sun => occurrence + Duration::days(1),
        _ => occurrence,
    }
}

/// Contacts whose next birthday lies in `[today, today + window_days]`, ordered by
/// congratulation date and then by name.
pub fn upcoming_birthdays(
    directory: &Directory,
    today: NaiveDate,
    window_days: u32,
) -> Vec<UpcomingBirthday> {
    let mut results: Vec<UpcomingBirthday> = directory
        .all()
        .iter()
        .filter_map(|contact| {
            let birthday = contact.birthday()?;
            let occurrence = next_occurrence(birthday, today)?;
            if (occurrence - today).num_days() > i64::from(window_days) {
                return None;
            }
            Some(UpcomingBirthday {
                contact: contact.clone(),
                birthday,
                occurrence,
                congratulation_date: congratulation_date(occurrence),
            })
        })
        .collect();

    results.sort_by(|a, b| {
        a.congratulation_date
            .cmp(&b.congratulation_date)
            .then_with(|| a.contact.name().cmp(b.contact.name()))
    });

    results
}
