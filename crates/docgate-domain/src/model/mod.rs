//! Data model for read authorization.

mod grant;
mod resource;
mod session;

pub use grant::{Grant, SubjectMatcher};
pub use resource::{Document, RelatedRef, Relationship, Resource};
pub use session::Principal;
