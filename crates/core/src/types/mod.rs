//! Newtype wrappers for domain values.

mod email;
mod id;

pub use email::{Email, EmailError};
pub use id::{ProjectId, UserId};
