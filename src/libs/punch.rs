//! The punch model: a single timestamped in/out event for a client.

use chrono::Local;
use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

static CLIENT_RE: OnceLock<Regex> = OnceLock::new();

/// One clock event. `stamp` is Unix seconds and the sole identifier of a
/// punch; per client, stamps must strictly alternate in/out starting with
/// a punch-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Punch {
    pub stamp: i64,
    pub is_start: bool,
    pub client: String,
    pub note: Option<String>,
}

impl Punch {
    pub fn new(stamp: i64, is_start: bool, client: &str, note: Option<&str>) -> Self {
        Punch {
            stamp,
            is_start,
            client: client.to_string(),
            note: normalize_note(note),
        }
    }

    /// A punch stamped with the current wall-clock time.
    pub fn now(is_start: bool, client: &str, note: Option<&str>) -> Self {
        Self::new(Local::now().timestamp(), is_start, client, note)
    }

    pub fn status_str(&self) -> &'static str {
        if self.is_start {
            "in"
        } else {
            "out"
        }
    }

    /// Note text for display; absent notes render as `n/a`.
    pub fn note_or_na(&self) -> &str {
        self.note.as_deref().unwrap_or("n/a")
    }
}

/// Trims a note and maps whitespace-only text to `None`, so the store only
/// ever holds NULL or non-empty annotations.
pub fn normalize_note(note: Option<&str>) -> Option<String> {
    note.map(str::trim).filter(|n| !n.is_empty()).map(String::from)
}

/// A client name is alphanumeric with internal hyphen/underscore runs; it
/// may not be empty or begin with a separator.
pub fn is_valid_client(client: &str) -> bool {
    let re = CLIENT_RE.get_or_init(|| {
        Regex::new("^[A-Za-z0-9]+(-*[A-Za-z0-9])*(_*[A-Za-z0-9])*$").unwrap()
    });
    re.is_match(client)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_names() {
        assert!(is_valid_client("acme"));
        assert!(is_valid_client("acme-2"));
        assert!(is_valid_client("big_corp"));
        assert!(is_valid_client("a--b__c"));
        assert!(!is_valid_client(""));
        assert!(!is_valid_client("-acme"));
        assert!(!is_valid_client("_acme"));
        assert!(!is_valid_client("acme corp"));
        assert!(!is_valid_client("acme;drop"));
    }

    #[test]
    fn notes_are_normalized() {
        assert_eq!(normalize_note(Some("  hi  ")), Some("hi".to_string()));
        assert_eq!(normalize_note(Some("   ")), None);
        assert_eq!(normalize_note(None), None);
    }
}
