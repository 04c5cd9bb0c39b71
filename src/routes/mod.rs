pub mod db_info;
mod entry;
pub mod health;
pub mod posts;
pub mod todos;
pub mod users;

use chrono::{SecondsFormat, Utc};

pub use entry::{app, router};

/// Millisecond-precision UTC timestamp, e.g. `2026-01-01T00:00:00.000Z`.
pub(crate) fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
