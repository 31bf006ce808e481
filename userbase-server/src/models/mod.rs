//! Domain models with validation at construction
//!
//! Request bodies are decoded leniently into [`UserPayload`] and only become
//! a [`NewUser`] once every field passes validation. Invalid input returns
//! [`ValidationError`], never a panic.

pub mod user;
pub mod validation;

pub use user::{NewUser, User, UserId, UserPayload};
pub use validation::ValidationError;
