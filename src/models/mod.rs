//! Data models for the Content Studio application.
//!
//! Field names serialize in camelCase to match the browser client.

mod content;
mod generation;
mod project;
mod user;

pub use content::*;
pub use generation::*;
pub use project::*;
pub use user::*;
