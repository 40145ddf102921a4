//! Paychecks table access.
//!
//! `endclusive` is the primary key. Client filtering for `query bills` is
//! built from repeated placeholders, never spliced values.

use super::db::Db;
use crate::libs::bill::Bill;
use crate::libs::error::{PunchError, Result};
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};
use std::path::Path;

pub const SCHEMA_PAYCHECKS: &str = "CREATE TABLE IF NOT EXISTS paychecks (
    endclusive   INTEGER NOT NULL PRIMARY KEY,
    startclusive INTEGER NOT NULL,
    project      TEXT NOT NULL,
    note         TEXT
);";

const INSERT_BILL: &str =
    "INSERT INTO paychecks (endclusive, startclusive, project, note) VALUES (?1, ?2, ?3, ?4)";
const SELECT_ALL: &str =
    "SELECT endclusive, startclusive, project, note FROM paychecks ORDER BY endclusive ASC";
const SELECT_LATEST_FOR_CLIENT: &str =
    "SELECT endclusive, startclusive, project, note FROM paychecks WHERE project = ?1 ORDER BY endclusive DESC LIMIT 1";
const SELECT_BY_START: &str =
    "SELECT endclusive, startclusive, project, note FROM paychecks WHERE project = ?1 AND startclusive = ?2";
const DELETE_BY_START: &str = "DELETE FROM paychecks WHERE project = ?1 AND startclusive = ?2";

pub struct Bills {
    conn: Connection,
}

fn row_to_bill(row: &Row) -> rusqlite::Result<Bill> {
    Ok(Bill {
        end: row.get(0)?,
        start: row.get(1)?,
        client: row.get(2)?,
        note: row.get(3)?,
    })
}

impl Bills {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        db.conn.execute(SCHEMA_PAYCHECKS, [])?;
        Ok(Bills { conn: db.conn })
    }

    pub fn open(path: &Path) -> Result<Self> {
        let db = Db::open(path)?;
        db.conn.execute(SCHEMA_PAYCHECKS, [])?;
        Ok(Bills { conn: db.conn })
    }

    pub fn insert(&mut self, bill: &Bill) -> Result<()> {
        self.conn.execute(
            INSERT_BILL,
            params![bill.end, bill.start, bill.client, bill.note],
        )?;
        Ok(())
    }

    pub fn latest_for(&mut self, client: &str) -> Result<Option<Bill>> {
        let bill = self
            .conn
            .query_row(SELECT_LATEST_FOR_CLIENT, params![client], row_to_bill)
            .optional()?;
        Ok(bill)
    }

    /// All billing periods ordered by end stamp, optionally narrowed to a
    /// client subset via a placeholder-built `IN` clause.
    pub fn fetch(&mut self, clients: &[String]) -> Result<Vec<Bill>> {
        if clients.is_empty() {
            let mut stmt = self.conn.prepare(SELECT_ALL)?;
            let bills = stmt
                .query_map([], row_to_bill)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            return Ok(bills);
        }

        let placeholders = vec!["?"; clients.len()].join(", ");
        let query = format!(
            "SELECT endclusive, startclusive, project, note FROM paychecks
             WHERE project IN ({}) ORDER BY endclusive ASC",
            placeholders
        );
        let mut stmt = self.conn.prepare(&query)?;
        let bills = stmt
            .query_map(params_from_iter(clients.iter()), row_to_bill)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(bills)
    }

    /// Resolves and (unless `dry_run`) removes the billing period keyed by
    /// client + start stamp.
    pub fn delete_bill(&mut self, client: &str, start: i64, dry_run: bool) -> Result<Bill> {
        let bill = self
            .conn
            .query_row(SELECT_BY_START, params![client, start], row_to_bill)
            .optional()?
            .ok_or_else(|| {
                PunchError::not_found(format!("no bill for '{}' starting at {}", client, start))
            })?;

        if !dry_run {
            self.conn.execute(DELETE_BY_START, params![client, start])?;
        }
        Ok(bill)
    }
}
