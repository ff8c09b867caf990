use std::fmt;

use crate::error::ContactsResult;
use crate::validation;

/// A validated phone number. Equality is exact string equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone {
    value: String,
}

impl Phone {
    pub fn parse(value: &str) -> ContactsResult<Self> {
        Ok(Self {
            value: validation::phone_number(value)?,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}
