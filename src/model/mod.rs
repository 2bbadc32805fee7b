//! Domain model types (pure).
//!
//! All types in this module are plain data: card records from the catalog,
//! user intents, and error taxonomies.

pub mod card;
pub mod error;
pub mod key_action;

// Re-export for convenience
pub use card::{Card, CardPage, CardSet, Stat};
pub use error::{AppError, FetchError};
pub use key_action::KeyAction;
