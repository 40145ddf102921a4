//! Display implementation for punch application messages.
//!
//! The single place where message variants become terminal text; commands
//! never format user-facing strings themselves.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // === PUNCH MESSAGES ===
            Message::PunchedIn { client, stamp } => {
                write!(f, "Punched in to '{}' at {}", client, stamp)
            }
            Message::PunchedOut { client, stamp } => {
                write!(f, "Punched out of '{}' at {}", client, stamp)
            }

            // === STATUS / QUERY MESSAGES ===
            Message::NotOnClock => write!(f, "Not on the clock."),
            Message::StatusLine { client, so_far } => {
                write!(f, "{}: {} so far", client, so_far)
            }
            Message::NoPayPeriods => write!(f, "No pay-periods closed, yet."),
            Message::ReportHeader { client, tz, limited } => {
                write!(f, "Report on '{}' (in {}){}:", client, tz, limited)
            }
            Message::StrayPunchOut { stamp, note } => {
                write!(f, "  [ERROR: stray punch-out!] at {} (note: '{}')", stamp, note)
            }
            Message::CurrentlyWorking(so_far) => {
                write!(f, "Note: currently punched-in & working; {} so far", so_far)
            }
            Message::ReportSummary { total, sessions } => {
                write!(f, "Summary: Worked {} over {} sessions", total, sessions)
            }
            Message::ReportEmpty(client) => {
                write!(f, "Warning: no records found for '{}'.", client)
            }

            // === BILL MESSAGES ===
            Message::BillDryRun { client, from, to, note } => write!(
                f,
                "DRY RUN(-d): will create bill for '{}':\n  from '{}'\n  to   '{}'\n  NOTE: {}",
                client, from, to, note
            ),
            Message::BillRecorded { client, from, to } => {
                write!(f, "Recorded pay period for '{}': {} to {}", client, from, to)
            }

            // === CORRECTIVE EDIT MESSAGES ===
            Message::DryRunNoChanges => {
                write!(f, "[-d]ry-run: finishing early; NO changes written")
            }
            Message::SessionClosing { client, session } => {
                write!(f, "Closing '{}' session, resulting in:\n{}", client, session)
            }
            Message::SeekShifting { direction, client, offset } => {
                write!(f, "{}ing '{}' session's close by {}", direction, client, offset)
            }
            Message::NoteAmended(stamp) => write!(f, "Note amended on punch at {}", stamp),
            Message::NoteCleared(stamp) => write!(f, "Note cleared on punch at {}", stamp),
            Message::WouldDelete(what) => write!(f, "Would delete {}", what),
            Message::Deleted(what) => write!(f, "Deleted {}", what),
            Message::Done => write!(f, "Done."),

            // === STORE MESSAGES ===
            Message::StoreCreated(path) => write!(f, "Created empty punch store at {}", path),
            Message::StoreExists(path) => {
                write!(f, "Punch store already exists at {}", path)
            }
        }
    }
}
