//! The billing-period model: an independently recorded invoiced span.
//!
//! Bills are not derived from punches. `query bills` correlates the two only
//! by overlapping timestamps, never by a stored relationship.

use serde::Serialize;

/// One invoiced span for a client. `end` is the primary key; `start` must be
/// strictly older. Both bounds are inclusive Unix seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bill {
    pub start: i64,
    pub end: i64,
    pub client: String,
    pub note: Option<String>,
}

impl Bill {
    pub fn new(start: i64, end: i64, client: &str, note: Option<&str>) -> Self {
        Bill {
            start,
            end,
            client: client.to_string(),
            note: crate::libs::punch::normalize_note(note),
        }
    }

    pub fn note_or_na(&self) -> &str {
        self.note.as_deref().unwrap_or("n/a")
    }
}
