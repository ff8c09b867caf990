pub mod phone;
pub mod contact;
pub mod directory;

// Re-exports for convenience
pub use phone::Phone;
pub use contact::Contact;
pub use directory::Directory;
