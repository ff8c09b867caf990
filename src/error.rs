use thiserror::Error;

/// Broad category of a failure, as seen by the command layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Format,
    NotFound,
    Conflict,
    ArgumentCount,
}

#[derive(Debug, Error)]
pub enum ContactsError {
    #[error("{field} cannot be blank")]
    BlankField { field: String },

    #[error("{field} must be positive")]
    NonPositive { field: String },

    #[error("Invalid phone number '{value}': must be exactly {digits} digits")]
    InvalidPhone { value: String, digits: usize },

    #[error("Invalid date '{value}': use DD.MM.YYYY")]
    InvalidDate { value: String },

    #[error("Phone number not found: {phone}")]
    PhoneNotFound { phone: String },

    #[error("Contact not found: {name}")]
    ContactNotFound { name: String },

    #[error("Contact already exists: {name}")]
    AlreadyExists { name: String },

    #[error("Usage: {usage}")]
    ArgumentCount { usage: &'static str },
}

impl ContactsError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::BlankField { .. }
            | Self::NonPositive { .. }
            | Self::InvalidPhone { .. }
            | Self::InvalidDate { .. } => ErrorKind::Format,
            Self::PhoneNotFound { .. } | Self::ContactNotFound { .. } => ErrorKind::NotFound,
            Self::AlreadyExists { .. } => ErrorKind::Conflict,
            Self::ArgumentCount { .. } => ErrorKind::ArgumentCount,
        }
    }
}

pub type ContactsResult<T> = Result<T, ContactsError>;
