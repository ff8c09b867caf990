use chrono::NaiveDate;
use std::fmt;

use super::phone::Phone;
use crate::error::{ContactsError, ContactsResult};
use crate::validation::{self, DATE_FORMAT};

/// Renders a date in the same `DD.MM.YYYY` layout birthdays are entered in.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// One person in the address book.
///
/// The name is fixed at construction because the directory keys contacts by it.
/// Phones keep insertion order. Rejecting a phone the contact already has is left
/// to the caller; `add_phone` only checks the format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    name: String,
    phones: Vec<Phone>,
    birthday: Option<NaiveDate>,
}

impl Contact {
    pub fn create(name: &str) -> ContactsResult<Self> {
        Ok(Self {
            name: validation::non_blank(name, "name")?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<NaiveDate> {
        self.birthday
    }

    pub fn add_phone(&mut self, value: &str) -> ContactsResult<()> {
        let phone = Phone::parse(value)?;
        self.phones.push(phone);
        Ok(())
    }

    pub fn find_phone(&self, value: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == value)
    }

    /// Replaces `old` with `new` in place. The new value is validated before the
    /// lookup, so a malformed replacement is reported even when `old` is missing.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> ContactsResult<()> {
        let replacement = Phone::parse(new)?;
        let slot = self
            .phones
            .iter_mut()
            .find(|p| p.as_str() == old)
            .ok_or_else(|| ContactsError::PhoneNotFound {
                phone: old.to_string(),
            })?;
        *slot = replacement;
        Ok(())
    }

    pub fn remove_phone(&mut self, value: &str) -> ContactsResult<Phone> {
        let pos = self
            .phones
            .iter()
            .position(|p| p.as_str() == value)
            .ok_or_else(|| ContactsError::PhoneNotFound {
                phone: value.to_string(),
            })?;
        Ok(self.phones.remove(pos))
    }

    /// Parses and stores the birthday, replacing any previous one.
    pub fn add_birthday(&mut self, text: &str) -> ContactsResult<NaiveDate> {
        let date = validation::date(text)?;
        self.birthday = Some(date);
        Ok(date)
    }

    /// Phones joined with ", " for display.
    pub fn phone_list(&self) -> String {
        self.phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Contact name: {}, phones: {}", self.name, self.phone_list())?;
        if let Some(bd) = self.birthday {
            write!(f, ", birthday: {}", format_date(bd))?;
        }
        Ok(())
    }
}
