use chrono::NaiveDate;
use std::collections::HashMap;

use super::contact::Contact;
use crate::error::{ContactsError, ContactsResult};
use crate::queries::birthday_queries::{self, UpcomingBirthday};

/// All contacts, keyed by exact (case-sensitive) name.
///
/// Contacts are kept in insertion order for listing; `index` maps each name to its
/// slot. There is no removal, so slots never shift.
#[derive(Debug, Default)]
pub struct Directory {
    contacts: Vec<Contact>,
    index: HashMap<String, usize>,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn find(&self, name: &str) -> Option<&Contact> {
        self.index.get(name).and_then(|&i| self.contacts.get(i))
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Contact> {
        match self.index.get(name) {
            Some(&i) => self.contacts.get_mut(i),
            None => None,
        }
    }

    pub fn add(&mut self, contact: Contact) -> ContactsResult<()> {
        if self.index.contains_key(contact.name()) {
            return Err(ContactsError::AlreadyExists {
                name: contact.name().to_string(),
            });
        }
        self.index
            .insert(contact.name().to_string(), self.contacts.len());
        self.contacts.push(contact);
        Ok(())
    }

    pub fn all(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn upcoming_birthdays(&self, today: NaiveDate, window_days: u32) -> Vec<UpcomingBirthday> {
        birthday_queries::upcoming_birthdays(self, today, window_days)
    }
}
