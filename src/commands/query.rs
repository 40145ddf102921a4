use crate::db::bills::Bills;
use crate::db::punches::Punches;
use crate::libs::error::PunchError;
use crate::libs::punch::{is_valid_client, Punch};
use crate::libs::session;
use crate::libs::view::{SummaryRow, View};
use anyhow::Context;
use chrono::Local;
use clap::{Args, Subcommand};
use std::collections::BTreeMap;

#[derive(Debug, Args)]
pub struct QueryArgs {
    #[command(subcommand)]
    query: Option<QueryCmd>,
}

impl QueryArgs {
    /// Bare `punch` runs a status check; bare `punch query` dumps.
    pub fn status() -> Self {
        QueryArgs {
            query: Some(QueryCmd::Status),
        }
    }
}

#[derive(Debug, Subcommand)]
enum QueryCmd {
    /// Running time on any currently punched-into clients
    Status,
    /// All clients with ledger records
    List,
    /// Full ledger dump plus a per-project session summary (the default)
    Dump {
        /// Emit the ledger as JSON instead of CSV-like lines
        #[arg(short, long)]
        json: bool,
    },
    /// Sessions and running total for one client
    Report {
        client: String,
        /// Only punches strictly after this Unix stamp
        from: Option<i64>,
    },
    /// Recorded billing periods, optionally narrowed to some clients
    Bills { clients: Vec<String> },
}

pub fn cmd(args: QueryArgs) -> anyhow::Result<()> {
    match args.query.unwrap_or(QueryCmd::Dump { json: false }) {
        QueryCmd::Status => status(),
        QueryCmd::List => list(),
        QueryCmd::Dump { json } => dump(json),
        QueryCmd::Report { client, from } => report(&client, from.unwrap_or(0)),
        QueryCmd::Bills { clients } => bills(clients),
    }
}

fn status() -> anyhow::Result<()> {
    let latest = Punches::new()?.latest_per_client()?;
    View::status(&latest, Local::now().timestamp());
    Ok(())
}

fn list() -> anyhow::Result<()> {
    for client in Punches::new()?.clients()? {
        println!("{}", client);
    }
    Ok(())
}

fn dump(json: bool) -> anyhow::Result<()> {
    let punches = Punches::new()?.fetch_all()?;
    if json {
        println!("{}", serde_json::to_string_pretty(&punches)?);
        return Ok(());
    }

    View::dump(&punches);

    let mut by_project: BTreeMap<String, Vec<Punch>> = BTreeMap::new();
    for punch in punches {
        by_project.entry(punch.client.clone()).or_default().push(punch);
    }
    let mut rows = Vec::with_capacity(by_project.len());
    for (project, punches) in by_project {
        let ledger = session::reconstruct(&punches)
            .with_context(|| format!("reconstructing sessions for '{}'", project))?;
        // Summary counts closed work only; open accrual shows up as WORKING.
        rows.push(SummaryRow {
            project,
            sessions: ledger.sessions.len(),
            working: ledger.open.is_some(),
            total: ledger.closed_total(),
        });
    }
    println!();
    View::summary(&rows);
    Ok(())
}

fn report(client: &str, from: i64) -> anyhow::Result<()> {
    if !is_valid_client(client) {
        return Err(PunchError::validation(format!("invalid CLIENT: '{}'", client)).into());
    }
    let punches = Punches::new()?.fetch_for(client, from)?;
    let ledger = session::reconstruct(&punches)?;
    View::report(client, from, &ledger, Local::now().timestamp());
    Ok(())
}

fn bills(clients: Vec<String>) -> anyhow::Result<()> {
    for client in &clients {
        if !is_valid_client(client) {
            return Err(PunchError::validation(format!("invalid CLIENT: '{}'", client)).into());
        }
    }
    let bills = Bills::new()?.fetch(&clients)?;
    View::bills(&bills);
    Ok(())
}
