/// all lector-client functionality for the `history` commands
pub mod reading_history;

/// all lector-client functionality for the `profile` commands
pub mod user;

/// all lector-client functionality for the `digest` commands
pub mod digest;
