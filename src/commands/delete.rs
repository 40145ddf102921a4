use crate::db::bills::Bills;
use crate::db::punches::{PunchDeletion, Punches};
use crate::libs::error::PunchError;
use crate::libs::formatter::format_stamp;
use crate::libs::messages::Message;
use crate::libs::punch::is_valid_client;
use crate::{msg_print, msg_stderr, msg_success};
use clap::{Args, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum DeleteTarget {
    Bill,
    Punch,
}

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// What AT refers to: a billing period's start or a punch's stamp
    #[arg(value_enum)]
    target: DeleteTarget,
    client: String,
    /// Resolve and validate the deletion without writing
    #[arg(short = 'd', long)]
    dry_run: bool,
    /// Unix stamp identifying the record
    at: i64,
}

pub fn cmd(args: DeleteArgs) -> anyhow::Result<()> {
    if !is_valid_client(&args.client) {
        return Err(PunchError::validation(format!("invalid CLIENT: '{}'", args.client)).into());
    }

    let description = match args.target {
        DeleteTarget::Bill => {
            let bill = Bills::new()?.delete_bill(&args.client, args.at, args.dry_run)?;
            format!(
                "bill for '{}' from {} to {}",
                bill.client,
                format_stamp(bill.start),
                format_stamp(bill.end)
            )
        }
        DeleteTarget::Punch => {
            let plan = Punches::new()?.delete_punch(&args.client, args.at, args.dry_run)?;
            match plan {
                PunchDeletion::ReopenSession { stop } => format!(
                    "punch-out for '{}' at {} (re-opens the session)",
                    stop.client,
                    format_stamp(stop.stamp)
                ),
                PunchDeletion::Session { start, stop } => match stop {
                    Some(stop) => format!(
                        "session for '{}' from {} to {}",
                        start.client,
                        format_stamp(start.stamp),
                        format_stamp(stop.stamp)
                    ),
                    None => format!(
                        "open session for '{}' started at {}",
                        start.client,
                        format_stamp(start.stamp)
                    ),
                },
            }
        }
    };

    if args.dry_run {
        msg_print!(Message::WouldDelete(description));
        msg_stderr!(Message::DryRunNoChanges);
    } else {
        msg_success!(Message::Deleted(description));
    }
    Ok(())
}
