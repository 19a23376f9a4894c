// Shared utilities: configuration, errors, validation
pub mod config;
pub mod error;
pub mod validation;
