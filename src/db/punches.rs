//! Punchcard table access.
//!
//! `punch` (Unix seconds) is the primary key, `status` is 1 for a punch-in
//! and 0 for a punch-out. Every read feeding session reconstruction carries
//! an explicit `ORDER BY punch` so derived output never depends on store
//! return order. Corrective edits that issue more than one statement run
//! inside a single transaction.

use super::db::Db;
use crate::libs::error::{PunchError, Result};
use crate::libs::punch::Punch;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;

pub const SCHEMA_PUNCHCARD: &str = "CREATE TABLE IF NOT EXISTS punchcard (
    punch   INTEGER NOT NULL PRIMARY KEY,
    status  INTEGER NOT NULL,
    project TEXT NOT NULL,
    note    TEXT
);";

const INSERT_PUNCH: &str = "INSERT INTO punchcard (punch, status, project, note) VALUES (?1, ?2, ?3, ?4)";
const SELECT_ALL: &str = "SELECT punch, status, project, note FROM punchcard ORDER BY punch ASC";
const SELECT_FOR_CLIENT: &str =
    "SELECT punch, status, project, note FROM punchcard WHERE project = ?1 AND punch > ?2 ORDER BY punch ASC";
const SELECT_LAST_FOR_CLIENT: &str =
    "SELECT punch, status, project, note FROM punchcard WHERE project = ?1 ORDER BY punch DESC LIMIT 1";
const SELECT_LAST_TWO_FOR_CLIENT: &str =
    "SELECT punch, status, project, note FROM punchcard WHERE project = ?1 ORDER BY punch DESC LIMIT 2";
const SELECT_EARLIEST_FOR_CLIENT: &str =
    "SELECT punch, status, project, note FROM punchcard WHERE project = ?1 ORDER BY punch ASC LIMIT 1";
const SELECT_LATEST_PER_CLIENT: &str = "SELECT p.punch, p.status, p.project, p.note
    FROM punchcard p
    JOIN (SELECT project, MAX(punch) AS last FROM punchcard GROUP BY project) l
    ON p.project = l.project AND p.punch = l.last
    ORDER BY p.project ASC";
const SELECT_CLIENTS: &str = "SELECT DISTINCT project FROM punchcard ORDER BY project ASC";
const SELECT_AT_STAMP_WITH_STATUS: &str =
    "SELECT punch, status, project, note FROM punchcard WHERE punch = ?1 AND status = ?2";
const SELECT_AT_STAMP_FOR_CLIENT: &str =
    "SELECT punch, status, project, note FROM punchcard WHERE project = ?1 AND punch = ?2";
const SELECT_NEXT_FOR_CLIENT: &str =
    "SELECT punch, status, project, note FROM punchcard WHERE project = ?1 AND punch > ?2 ORDER BY punch ASC LIMIT 1";
const SELECT_PREV_IN_FOR_CLIENT: &str =
    "SELECT punch, status, project, note FROM punchcard WHERE project = ?1 AND punch < ?2 AND status = 1 ORDER BY punch DESC LIMIT 1";
const COUNT_AFTER_FOR_CLIENT: &str = "SELECT COUNT(*) FROM punchcard WHERE project = ?1 AND punch > ?2";
const UPDATE_STAMP: &str = "UPDATE punchcard SET punch = ?1 WHERE punch = ?2 AND project = ?3";
const UPDATE_NOTE: &str = "UPDATE punchcard SET note = ?1 WHERE punch = ?2";
const DELETE_AT: &str = "DELETE FROM punchcard WHERE project = ?1 AND punch = ?2";

/// What `delete punch` resolved its AT argument to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PunchDeletion {
    /// AT names the client's final punch-out; removing it re-opens the
    /// session.
    ReopenSession { stop: Punch },
    /// AT names a punch-in; the whole session goes, punch-out included when
    /// one exists.
    Session { start: Punch, stop: Option<Punch> },
}

/// Validated plan for shifting an existing punch-out.
#[derive(Debug, Clone)]
pub struct ShiftPlan {
    pub original: Punch,
    pub session_start: i64,
    pub seek_to: i64,
}

impl ShiftPlan {
    /// "Rewind" when the close moves earlier, "Fast-forward" otherwise.
    pub fn direction(&self) -> &'static str {
        if self.seek_to < self.original.stamp {
            "Rewind"
        } else {
            "Fast-forward"
        }
    }

    pub fn offset_seconds(&self) -> i64 {
        (self.seek_to - self.original.stamp).abs()
    }
}

pub struct Punches {
    conn: Connection,
}

fn row_to_punch(row: &Row) -> rusqlite::Result<Punch> {
    Ok(Punch {
        stamp: row.get(0)?,
        is_start: row.get::<_, i64>(1)? == 1,
        client: row.get(2)?,
        note: row.get(3)?,
    })
}

impl Punches {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        db.conn.execute(SCHEMA_PUNCHCARD, [])?;
        Ok(Punches { conn: db.conn })
    }

    pub fn open(path: &Path) -> Result<Self> {
        let db = Db::open(path)?;
        db.conn.execute(SCHEMA_PUNCHCARD, [])?;
        Ok(Punches { conn: db.conn })
    }

    pub fn insert(&mut self, punch: &Punch) -> Result<()> {
        self.conn.execute(
            INSERT_PUNCH,
            params![punch.stamp, punch.is_start as i64, punch.client, punch.note],
        )?;
        Ok(())
    }

    /// Full ledger, stamp ascending.
    pub fn fetch_all(&mut self) -> Result<Vec<Punch>> {
        let mut stmt = self.conn.prepare(SELECT_ALL)?;
        let punches = stmt
            .query_map([], row_to_punch)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(punches)
    }

    /// One client's punches with stamp strictly after `from`, ascending.
    pub fn fetch_for(&mut self, client: &str, from: i64) -> Result<Vec<Punch>> {
        let mut stmt = self.conn.prepare(SELECT_FOR_CLIENT)?;
        let punches = stmt
            .query_map(params![client, from], row_to_punch)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(punches)
    }

    pub fn last_for(&mut self, client: &str) -> Result<Option<Punch>> {
        let punch = self
            .conn
            .query_row(SELECT_LAST_FOR_CLIENT, params![client], row_to_punch)
            .optional()?;
        Ok(punch)
    }

    /// The client's two latest punches, newest first.
    pub fn last_two_for(&mut self, client: &str) -> Result<Vec<Punch>> {
        let mut stmt = self.conn.prepare(SELECT_LAST_TWO_FOR_CLIENT)?;
        let punches = stmt
            .query_map(params![client], row_to_punch)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(punches)
    }

    pub fn earliest_for(&mut self, client: &str) -> Result<Option<Punch>> {
        let punch = self
            .conn
            .query_row(SELECT_EARLIEST_FOR_CLIENT, params![client], row_to_punch)
            .optional()?;
        Ok(punch)
    }

    /// The newest punch of every client, ordered by client name.
    pub fn latest_per_client(&mut self) -> Result<Vec<Punch>> {
        let mut stmt = self.conn.prepare(SELECT_LATEST_PER_CLIENT)?;
        let punches = stmt
            .query_map([], row_to_punch)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(punches)
    }

    pub fn clients(&mut self) -> Result<Vec<String>> {
        let mut stmt = self.conn.prepare(SELECT_CLIENTS)?;
        let clients = stmt
            .query_map([], |row| row.get(0))?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(clients)
    }

    /// The unique punch at `stamp` with the given direction. `stamp` is the
    /// primary key, but the uniqueness check stays explicit so a corrective
    /// edit can never act on an unexpected second match.
    pub fn unique_at(&mut self, stamp: i64, is_start: bool, label: &str) -> Result<Punch> {
        let mut stmt = self.conn.prepare(SELECT_AT_STAMP_WITH_STATUS)?;
        let matches = stmt
            .query_map(params![stamp, is_start as i64], row_to_punch)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        if matches.len() > 1 {
            return Err(PunchError::ambiguous(format!(
                "{} punches share {} {}",
                matches.len(),
                label,
                stamp
            )));
        }
        matches
            .into_iter()
            .next()
            .ok_or_else(|| PunchError::not_found(format!("no punch matching {} {}", label, stamp)))
    }

    pub fn at_for_client(&mut self, client: &str, stamp: i64) -> Result<Option<Punch>> {
        let punch = self
            .conn
            .query_row(SELECT_AT_STAMP_FOR_CLIENT, params![client, stamp], row_to_punch)
            .optional()?;
        Ok(punch)
    }

    /// Replaces (or clears, when `note` is None) the note of the punch at
    /// exactly `stamp`. Exactly one row must be touched.
    pub fn amend_note(&mut self, stamp: i64, note: Option<&str>) -> Result<()> {
        let affected = self.conn.execute(UPDATE_NOTE, params![note, stamp])?;
        match affected {
            0 => Err(PunchError::not_found(format!("no punch at TARGET_STAMP {}", stamp))),
            1 => Ok(()),
            n => Err(PunchError::ambiguous(format!(
                "amend touched {} punches at {}",
                n, stamp
            ))),
        }
    }

    /// Close form of seek: locates the unique still-open punch-in at
    /// `still_open` and (unless `dry_run`) inserts a punch-out at `seek_to`.
    /// Returns the punch-in and the synthesized punch-out.
    pub fn close_open_session(
        &mut self,
        still_open: i64,
        seek_to: i64,
        dry_run: bool,
    ) -> Result<(Punch, Punch)> {
        if seek_to <= still_open {
            return Err(PunchError::InvalidRange {
                from: still_open,
                to: seek_to,
            });
        }
        let open = self.unique_at(still_open, true, "STILL_OPEN")?;

        // The punch-in must actually be open: nothing for this client may
        // follow it.
        let later: i64 =
            self.conn
                .query_row(COUNT_AFTER_FOR_CLIENT, params![open.client, open.stamp], |row| {
                    row.get(0)
                })?;
        if later > 0 {
            return Err(PunchError::InconsistentLedger {
                client: open.client.clone(),
                stamp: open.stamp,
                detail: "punch-in at STILL_OPEN is not the client's latest punch".to_string(),
            });
        }

        let closing = Punch::new(seek_to, false, &open.client, None);
        if !dry_run {
            self.conn.execute(
                INSERT_PUNCH,
                params![closing.stamp, 0i64, closing.client, closing.note],
            )?;
        }
        Ok((open, closing))
    }

    /// Shift form of seek: moves the punch-out at `faulty` to `seek_to`.
    /// Validation and the update run in one transaction so a crash cannot
    /// leave the stamp shifted without its scope check.
    pub fn shift_punch_out(&mut self, faulty: i64, seek_to: i64, dry_run: bool) -> Result<ShiftPlan> {
        if faulty == seek_to {
            return Err(PunchError::validation(
                "no effective change requested: FAULTY_STAMP equals SEEK_TO",
            ));
        }

        let tx = self.conn.transaction()?;

        let matches = {
            let mut stmt = tx.prepare(SELECT_AT_STAMP_WITH_STATUS)?;
            let found = stmt
                .query_map(params![faulty, 0i64], row_to_punch)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            found
        };
        if matches.len() > 1 {
            return Err(PunchError::ambiguous(format!(
                "{} punch-outs share FAULTY_STAMP {}",
                matches.len(),
                faulty
            )));
        }
        let original = matches.into_iter().next().ok_or_else(|| {
            PunchError::not_found(format!("no punch-out matching FAULTY_STAMP {}", faulty))
        })?;

        let session_start = tx
            .query_row(
                SELECT_PREV_IN_FOR_CLIENT,
                params![original.client, faulty],
                row_to_punch,
            )
            .optional()?
            .ok_or_else(|| PunchError::InconsistentLedger {
                client: original.client.clone(),
                stamp: faulty,
                detail: "no opening punch-in precedes this punch-out".to_string(),
            })?;

        if seek_to <= session_start.stamp {
            return Err(PunchError::InvalidRange {
                from: session_start.stamp,
                to: seek_to,
            });
        }

        if !dry_run {
            tx.execute(UPDATE_STAMP, params![seek_to, faulty, original.client])?;
            tx.commit()?;
        }

        Ok(ShiftPlan {
            original,
            session_start: session_start.stamp,
            seek_to,
        })
    }

    /// Resolves and (unless `dry_run`) applies `delete punch CLIENT AT`.
    /// Session-pair removal happens inside one transaction.
    pub fn delete_punch(&mut self, client: &str, at: i64, dry_run: bool) -> Result<PunchDeletion> {
        let tx = self.conn.transaction()?;

        let target = tx
            .query_row(SELECT_AT_STAMP_FOR_CLIENT, params![client, at], row_to_punch)
            .optional()?
            .ok_or_else(|| {
                PunchError::not_found(format!("no punch for '{}' at {}", client, at))
            })?;

        let plan = if target.is_start {
            let next = tx
                .query_row(SELECT_NEXT_FOR_CLIENT, params![client, at], row_to_punch)
                .optional()?;
            match next {
                Some(p) if p.is_start => {
                    return Err(PunchError::InconsistentLedger {
                        client: client.to_string(),
                        stamp: p.stamp,
                        detail: "punch-in follows the targeted punch-in".to_string(),
                    })
                }
                stop => PunchDeletion::Session { start: target, stop },
            }
        } else {
            let later: i64 =
                tx.query_row(COUNT_AFTER_FOR_CLIENT, params![client, at], |row| row.get(0))?;
            if later > 0 {
                return Err(PunchError::InconsistentLedger {
                    client: client.to_string(),
                    stamp: at,
                    detail: "deleting this punch-out would orphan later punches".to_string(),
                });
            }
            PunchDeletion::ReopenSession { stop: target }
        };

        if !dry_run {
            match &plan {
                PunchDeletion::ReopenSession { stop } => {
                    tx.execute(DELETE_AT, params![client, stop.stamp])?;
                }
                PunchDeletion::Session { start, stop } => {
                    tx.execute(DELETE_AT, params![client, start.stamp])?;
                    if let Some(stop) = stop {
                        tx.execute(DELETE_AT, params![client, stop.stamp])?;
                    }
                }
            }
            tx.commit()?;
        }

        Ok(plan)
    }
}
