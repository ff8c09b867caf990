use chrono::NaiveDate;

use crate::error::{ContactsError, ContactsResult};

/// Number of digits every phone number must have.
pub const PHONE_DIGITS: usize = 10;

/// Text layout of birthdays, both accepted and rendered.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// Validates that a string is not blank (empty or whitespace-only).
/// Returns the trimmed string on success.
pub fn non_blank(value: &str, field: &str) -> ContactsResult<String> {
    let trimmed = value.trim().to_string();
    if trimmed.is_empty() {
        Err(ContactsError::BlankField {
            field: field.to_string(),
        })
    } else {
        Ok(trimmed)
    }
}

/// Validates that an integer is positive (> 0).
pub fn positive(value: i64, field: &str) -> ContactsResult<i64> {
    if value <= 0 {
        Err(ContactsError::NonPositive {
            field: field.to_string(),
        })
    } else {
        Ok(value)
    }
}

/// Validates a phone number: exactly `PHONE_DIGITS` ASCII digits, nothing else.
pub fn phone_number(value: &str) -> ContactsResult<String> {
    if value.len() == PHONE_DIGITS && value.bytes().all(|b| b.is_ascii_digit()) {
        Ok(value.to_string())
    } else {
        Err(ContactsError::InvalidPhone {
            value: value.to_string(),
            digits: PHONE_DIGITS,
        })
    }
}

/// Parses a `DD.MM.YYYY` date. Calendar-invalid dates (31.04) are rejected.
pub fn date(value: &str) -> ContactsResult<NaiveDate> {
    let invalid = || ContactsError::InvalidDate {
        value: value.to_string(),
    };

    // chrono accepts single-digit fields, so check the layout first.
    let bytes = value.as_bytes();
    let layout_ok = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            2 | 5 => *b == b'.',
            _ => b.is_ascii_digit(),
        });
    if !layout_ok {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| invalid())
}
