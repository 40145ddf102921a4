//! Session reconstruction from a client's ordered punch sequence.
//!
//! A session is a derived entity: a matched (punch-in, punch-out) pair. The
//! walk pairs each punch-in with the next punch-out and is deterministic for
//! a given sequence; callers must feed punches ordered by stamp ascending.
//!
//! Edge-case policy:
//! - a *leading* punch-out is a data anomaly: it contributes no session but
//!   is kept visible for diagnostics (`Ledger::stray_out`);
//! - two consecutive punch-ins, or a stray punch-out after history exists,
//!   is a malformed ledger and fails reconstruction outright;
//! - a trailing unmatched punch-in is the open session, accruing against
//!   "now".

use crate::libs::error::{PunchError, Result};
use crate::libs::punch::Punch;
use chrono::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub start: i64,
    pub stop: i64,
    pub note_start: Option<String>,
    pub note_stop: Option<String>,
}

impl Session {
    pub fn from_pair(start: &Punch, stop: &Punch) -> Self {
        Session {
            start: start.stamp,
            stop: stop.stamp,
            note_start: start.note.clone(),
            note_stop: stop.note.clone(),
        }
    }

    pub fn duration(&self) -> Duration {
        Duration::seconds(self.stop - self.start)
    }

    /// Start and stop notes joined for display, `; `-separated when both
    /// are present.
    pub fn notes(&self) -> Option<String> {
        match (&self.note_start, &self.note_stop) {
            (Some(a), Some(b)) => Some(format!("{}; {}", a, b)),
            (Some(a), None) => Some(a.clone()),
            (None, Some(b)) => Some(b.clone()),
            (None, None) => None,
        }
    }
}

/// The most recent punch-in with no following punch-out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenSession {
    pub start: i64,
    pub note: Option<String>,
}

impl OpenSession {
    pub fn accrued(&self, now: i64) -> Duration {
        Duration::seconds(now - self.start)
    }
}

/// Everything derivable from one client's punch sequence.
#[derive(Debug, Default, Clone)]
pub struct Ledger {
    pub sessions: Vec<Session>,
    pub open: Option<OpenSession>,
    pub stray_out: Option<Punch>,
}

impl Ledger {
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty() && self.open.is_none() && self.stray_out.is_none()
    }

    /// Sum of closed-session durations only.
    pub fn closed_total(&self) -> Duration {
        Duration::seconds(self.sessions.iter().map(|s| s.stop - s.start).sum())
    }

    /// Sum of closed-session durations plus open accrual against `now`.
    pub fn total(&self, now: i64) -> Duration {
        let open = self.open.as_ref().map(|o| now - o.start).unwrap_or(0);
        self.closed_total() + Duration::seconds(open)
    }
}

/// Walks `punches` (one client, stamp ascending) pairing ins with outs.
pub fn reconstruct(punches: &[Punch]) -> Result<Ledger> {
    let mut ledger = Ledger::default();
    let mut pending: Option<&Punch> = None;

    for (idx, punch) in punches.iter().enumerate() {
        if punch.is_start {
            if let Some(open) = pending {
                return Err(PunchError::InconsistentLedger {
                    client: punch.client.clone(),
                    stamp: punch.stamp,
                    detail: format!("punch-in follows unclosed punch-in at {}", open.stamp),
                });
            }
            pending = Some(punch);
        } else {
            match pending.take() {
                Some(open) => ledger.sessions.push(Session::from_pair(open, punch)),
                None if idx == 0 => ledger.stray_out = Some(punch.clone()),
                None => {
                    return Err(PunchError::InconsistentLedger {
                        client: punch.client.clone(),
                        stamp: punch.stamp,
                        detail: "punch-out with no matching punch-in".to_string(),
                    })
                }
            }
        }
    }

    ledger.open = pending.map(|p| OpenSession {
        start: p.stamp,
        note: p.note.clone(),
    });
    Ok(ledger)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn punch(stamp: i64, is_start: bool) -> Punch {
        Punch::new(stamp, is_start, "acme", None)
    }

    #[test]
    fn alternating_sequence_yields_half_as_many_sessions() {
        let punches = vec![
            punch(100, true),
            punch(200, false),
            punch(300, true),
            punch(400, false),
        ];
        let ledger = reconstruct(&punches).unwrap();
        assert_eq!(ledger.sessions.len(), 2);
        assert!(ledger.open.is_none());
        assert_eq!(ledger.total(1000), Duration::seconds(200));
    }

    #[test]
    fn odd_count_leaves_an_open_session() {
        let punches = vec![punch(100, true), punch(200, false), punch(300, true)];
        let ledger = reconstruct(&punches).unwrap();
        assert_eq!(ledger.sessions.len(), 1);
        let open = ledger.open.unwrap();
        assert_eq!(open.start, 300);
        assert_eq!(open.accrued(500), Duration::seconds(200));
        // total = closed (100) + open accrual (200)
        let punches = vec![punch(100, true), punch(200, false), punch(300, true)];
        assert_eq!(reconstruct(&punches).unwrap().total(500), Duration::seconds(300));
    }

    #[test]
    fn leading_punch_out_is_an_anomaly_not_an_error() {
        let punches = vec![punch(50, false), punch(100, true), punch(200, false)];
        let ledger = reconstruct(&punches).unwrap();
        assert_eq!(ledger.stray_out.as_ref().unwrap().stamp, 50);
        assert_eq!(ledger.sessions.len(), 1);
    }

    #[test]
    fn double_punch_in_is_malformed() {
        let punches = vec![punch(100, true), punch(200, true)];
        let err = reconstruct(&punches).unwrap_err();
        assert!(matches!(
            err,
            PunchError::InconsistentLedger { stamp: 200, .. }
        ));
    }

    #[test]
    fn interior_stray_punch_out_is_malformed() {
        let punches = vec![punch(100, true), punch(200, false), punch(300, false)];
        assert!(matches!(
            reconstruct(&punches).unwrap_err(),
            PunchError::InconsistentLedger { stamp: 300, .. }
        ));
    }

    #[test]
    fn session_notes_join() {
        let a = Punch::new(1, true, "x", Some("start note"));
        let b = Punch::new(2, false, "x", Some("stop note"));
        let session = Session::from_pair(&a, &b);
        assert_eq!(session.notes().unwrap(), "start note; stop note");
    }
}
