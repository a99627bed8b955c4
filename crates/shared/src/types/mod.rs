//! Common types used across the application.

pub mod date;
pub mod id;
pub mod locale;

pub use id::*;
pub use locale::Locale;
