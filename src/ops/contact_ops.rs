use chrono::NaiveDate;
use tracing::debug;

use crate::error::{ContactsError, ContactsResult};
use crate::model::{Contact, Directory, Phone};
use crate::validation;

/// What `add_contact` did with the given name and phone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new contact was created.
    Added,
    /// The phone was appended to an existing contact.
    Updated,
    /// The contact already had this exact phone; nothing changed.
    Duplicate,
}

/// Upserts a contact by name.
///
/// The birthday is only applied when the contact is new. A brand-new contact is
/// fully validated before it is inserted, so a bad phone or birthday leaves the
/// directory untouched. Names are trimmed before the lookup, the same way
/// `Contact::create` stores them.
pub fn add_contact(
    directory: &mut Directory,
    name: &str,
    phone: &str,
    birthday: Option<&str>,
) -> ContactsResult<AddOutcome> {
    let name = validation::non_blank(name, "name")?;
    let name = name.as_str();

    if let Some(existing) = directory.find_mut(name) {
        if existing.find_phone(phone).is_some() {
            debug!(name, phone, "phone already present");
            return Ok(AddOutcome::Duplicate);
        }
        existing.add_phone(phone)?;
        debug!(name, phone, "phone appended");
        return Ok(AddOutcome::Updated);
    }

    let mut contact = Contact::create(name)?;
    contact.add_phone(phone)?;
    if let Some(text) = birthday {
        contact.add_birthday(text)?;
    }
    directory.add(contact)?;
    debug!(name, phone, "contact added");
    Ok(AddOutcome::Added)
}

pub fn change_phone(
    directory: &mut Directory,
    name: &str,
    old_phone: &str,
    new_phone: &str,
) -> ContactsResult<()> {
    contact_mut(directory, name)?.edit_phone(old_phone, new_phone)?;
    debug!(name, old_phone, new_phone, "phone edited");
    Ok(())
}

pub fn remove_phone(directory: &mut Directory, name: &str, phone: &str) -> ContactsResult<Phone> {
    let removed = contact_mut(directory, name)?.remove_phone(phone)?;
    debug!(name, phone, "phone removed");
    Ok(removed)
}

pub fn set_birthday(directory: &mut Directory, name: &str, text: &str) -> ContactsResult<NaiveDate> {
    let date = contact_mut(directory, name)?.add_birthday(text)?;
    debug!(name, %date, "birthday set");
    Ok(date)
}

fn contact_mut<'a>(directory: &'a mut Directory, name: &str) -> ContactsResult<&'a mut Contact> {
    let name = name.trim();
    directory
        .find_mut(name)
        .ok_or_else(|| ContactsError::ContactNotFound {
            name: name.to_string(),
        })
}
