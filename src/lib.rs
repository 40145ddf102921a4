//! # Punch - a personal punch-clock
//!
//! A command-line utility for logging time worked on any client and
//! reconstructing billable sessions from the punch ledger.
//!
//! ## Features
//!
//! - **Punch Tracking**: Punch in/out per client, with implied-client and
//!   implied-direction inference when arguments are omitted
//! - **Session Reconstruction**: Derives (start, stop, duration) sessions
//!   from the alternating punch sequence, surfacing ledger anomalies
//! - **Billing Periods**: Records invoiced spans with implied FROM/TO bounds
//! - **Corrective Edits**: seek/amend/delete repair past mistakes with
//!   dry-run previews and transactional writes
//! - **Reporting**: Per-client reports, status, CSV-like and JSON dumps,
//!   bill listings
//!
//! ## Usage
//!
//! ```rust,no_run
//! use punch::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
