use chrono::NaiveDate;

use crate::error::{ContactsError, ContactsResult};
use crate::model::{Contact, Directory, Phone};

pub fn get_contact<'a>(directory: &'a Directory, name: &str) -> ContactsResult<&'a Contact> {
    let name = name.trim();
    directory
        .find(name)
        .ok_or_else(|| ContactsError::ContactNotFound {
            name: name.to_string(),
        })
}

pub fn phones_of<'a>(directory: &'a Directory, name: &str) -> ContactsResult<&'a [Phone]> {
    get_contact(directory, name).map(Contact::phones)
}

/// `Ok(None)` means the contact exists but has no birthday set.
pub fn birthday_of(directory: &Directory, name: &str) -> ContactsResult<Option<NaiveDate>> {
    get_contact(directory, name).map(Contact::birthday)
}
