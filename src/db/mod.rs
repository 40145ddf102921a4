//! Database layer for the punch application.
//!
//! Two append-mostly SQLite tables back the whole tool: `punchcard` holds
//! alternating in/out events per client, `paychecks` holds recorded billing
//! periods. Each module owns its table's schema and statements; connections
//! come from [`db::Db`], resolved through `$PUNCH_CARD`.

/// Core connection management and store bootstrap.
pub mod db;

/// Punch ledger operations, including the corrective seek/delete edits.
pub mod punches;

/// Billing-period operations.
pub mod bills;
