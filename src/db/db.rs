//! Core connection handling for the punch store.

use crate::libs::config::Config;
use crate::libs::error::Result;
use crate::libs::messages::Message;
use crate::msg_success;
use rusqlite::Connection;
use std::path::Path;

pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the store named by `$PUNCH_CARD`. The file must already exist;
    /// `punch create` bootstraps a fresh one.
    pub fn new() -> Result<Db> {
        let config = Config::from_env()?;
        let path = config.resolved()?;
        Self::open(path)
    }

    /// Opens (or creates) a store at an explicit path. Used by `create` and
    /// by tests that avoid the environment entirely.
    pub fn open(path: &Path) -> Result<Db> {
        let conn = Connection::open(path)?;
        Ok(Db { conn })
    }

    /// Creates a fresh store at the configured path with both tables in
    /// place; reports and leaves an existing file untouched.
    pub fn bootstrap() -> Result<()> {
        let config = Config::from_env()?;
        if config.db_path.exists() {
            msg_success!(Message::StoreExists(config.db_path.display().to_string()));
            return Ok(());
        }
        let db = Self::open(&config.db_path)?;
        db.conn.execute(crate::db::punches::SCHEMA_PUNCHCARD, [])?;
        db.conn.execute(crate::db::bills::SCHEMA_PAYCHECKS, [])?;
        msg_success!(Message::StoreCreated(config.db_path.display().to_string()));
        Ok(())
    }
}
