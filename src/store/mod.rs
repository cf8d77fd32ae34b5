//! In-memory stores for projects, content files and users.
//!
//! Each store owns an insertion-ordered map behind a `tokio::sync::RwLock` and is
//! shared through `AppState`. A store method holds its lock for the whole
//! read-modify-write, so single operations are atomic; separate requests that
//! touch the same record resolve last-write-wins.

mod content;
mod lifecycle;
mod projects;
mod query;
mod users;

pub use content::*;
pub use projects::*;
pub use query::*;
pub use users::*;

use chrono::{DateTime, Utc};

/// Generate a new opaque record id.
pub(crate) fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Current time, never earlier than `previous`, so `createdAt <= updatedAt` holds
/// even if the wall clock steps backwards.
pub(crate) fn refreshed_at(previous: DateTime<Utc>) -> DateTime<Utc> {
    Utc::now().max(previous)
}
