//! Domain types for the portfolio API.
//!
//! These types represent validated domain objects separate from database row
//! types. JSON encoding of list/map-valued project fields is an adapter
//! concern and never appears here.

pub mod contact;
pub mod event;
pub mod profile;
pub mod project;
pub mod user;

pub use contact::ContactRecord;
pub use event::{EventMetadata, EventRecord, EventStat};
pub use profile::{Profile, ProfilePatch};
pub use project::{NewProject, Project, ProjectLinks};
pub use user::User;
