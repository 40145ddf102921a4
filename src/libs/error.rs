//! Tagged error kinds for the punch ledger.
//!
//! Every fallible operation in the crate surfaces one of these kinds so that
//! callers (and tests) can distinguish user mistakes from a corrupted ledger
//! or a broken store without parsing message strings.

use std::path::PathBuf;
use thiserror::Error;

/// The environment variable naming the SQLite store file.
pub const DB_ENV_VAR: &str = "PUNCH_CARD";

pub type Result<T> = std::result::Result<T, PunchError>;

#[derive(Error, Debug)]
pub enum PunchError {
    /// Malformed command-line input: invalid client syntax, bad timestamp,
    /// or a no-op request (e.g. seeking a punch-out to its own stamp).
    #[error("invalid input: {0}")]
    Validation(String),

    /// More than one match where exactly one is required: several clients
    /// punched in at once, or duplicate stamps matching a corrective edit.
    #[error("ambiguous state: {0}")]
    AmbiguousState(String),

    /// No punch, bill, or session matched a targeted operation.
    #[error("not found: {0}")]
    NotFound(String),

    /// FROM/TO (or SEEK_TO vs. session start) out of order.
    #[error("invalid range: expected {from} to be an older stamp than {to}")]
    InvalidRange { from: i64, to: i64 },

    /// The punch sequence for a client no longer alternates in/out, or an
    /// edit would orphan later history. Never repaired silently.
    #[error("inconsistent ledger for '{client}' at {stamp}: {detail}")]
    InconsistentLedger { client: String, stamp: i64, detail: String },

    /// Underlying SQLite failure.
    #[error("punch store: {0}")]
    Store(#[from] rusqlite::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Store-discovery failures, each reported distinctly.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("$PUNCH_CARD is not set")]
    EnvUnset,

    #[error("$PUNCH_CARD is set but empty")]
    EnvEmpty,

    #[error("$PUNCH_CARD names a missing store '{}'; run `punch create`", .0.display())]
    StoreMissing(PathBuf),

    #[error("$PUNCH_CARD must name a regular file, got '{}'", .0.display())]
    NotAFile(PathBuf),
}

impl PunchError {
    pub fn validation(detail: impl Into<String>) -> Self {
        PunchError::Validation(detail.into())
    }

    pub fn not_found(what: impl Into<String>) -> Self {
        PunchError::NotFound(what.into())
    }

    pub fn ambiguous(detail: impl Into<String>) -> Self {
        PunchError::AmbiguousState(detail.into())
    }
}
