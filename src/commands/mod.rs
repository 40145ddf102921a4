//! Command-line interface and subcommand dispatch.
//!
//! Each subcommand lives in its own module with a `cmd(args)` entry point;
//! this module only parses and routes. Running `punch` with no subcommand is
//! a status query, same as `punch query status`.

use clap::{Parser, Subcommand};

pub mod amend;
pub mod bill;
pub mod create;
pub mod delete;
pub mod punch;
pub mod query;
pub mod seek;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Punch in or out of work on a client", visible_alias = "p")]
    Punch(punch::PunchArgs),
    #[command(about = "Record a billing period", arg_required_else_help = true)]
    Bill(bill::BillArgs),
    #[command(about = "Query punches, sessions, and bills", visible_alias = "q")]
    Query(query::QueryArgs),
    #[command(about = "Repair a mistaken punch timestamp", visible_alias = "s")]
    Seek(seek::SeekArgs),
    #[command(about = "Rewrite or clear the note on a punch", visible_alias = "a")]
    Amend(amend::AmendArgs),
    #[command(about = "Delete a billing period or a punch/session", visible_alias = "d")]
    Delete(delete::DeleteArgs),
    #[command(about = "Create an empty punch store at $PUNCH_CARD")]
    Create,
}

#[derive(Debug, Parser)]
#[command(author, version, about = "Logs & reports time worked on any project", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

impl Cli {
    pub fn menu() -> anyhow::Result<()> {
        if crate::libs::messages::macros::is_debug_mode() {
            let filter = tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
            let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
        }

        let cli = Self::parse();
        match cli.command {
            Some(Commands::Punch(args)) => punch::cmd(args),
            Some(Commands::Bill(args)) => bill::cmd(args),
            Some(Commands::Query(args)) => query::cmd(args),
            Some(Commands::Seek(args)) => seek::cmd(args),
            Some(Commands::Amend(args)) => amend::cmd(args),
            Some(Commands::Delete(args)) => delete::cmd(args),
            Some(Commands::Create) => create::cmd(),
            None => query::cmd(query::QueryArgs::status()),
        }
    }
}
