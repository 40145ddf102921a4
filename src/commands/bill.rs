use crate::db::bills::Bills;
use crate::db::punches::Punches;
use crate::libs::bill::Bill;
use crate::libs::error::PunchError;
use crate::libs::formatter::format_stamp;
use crate::libs::messages::Message;
use crate::libs::punch::is_valid_client;
use crate::libs::resolver;
use crate::{msg_stderr, msg_success};
use clap::Args;

#[derive(Debug, Args)]
pub struct BillArgs {
    /// Client the pay period belongs to
    client: String,
    /// Preview the bill without writing it
    #[arg(short = 'd', long)]
    dry_run: bool,
    /// Inclusive start stamp; defaults to the previous bill's end, else the
    /// client's earliest punch
    #[arg(short, long)]
    from: Option<i64>,
    /// Inclusive end stamp; defaults to the client's most recent punch-out
    #[arg(short, long)]
    to: Option<i64>,
    /// Annotation stored with the bill
    #[arg(short, long)]
    note: Option<String>,
}

pub fn cmd(args: BillArgs) -> anyhow::Result<()> {
    if !is_valid_client(&args.client) {
        return Err(PunchError::validation(format!("invalid CLIENT: '{}'", args.client)).into());
    }

    let mut punches = Punches::new()?;
    let mut bills = Bills::new()?;

    let from = match args.from {
        Some(stamp) => stamp,
        None => resolver::implied_from(&mut bills, &mut punches, &args.client)?,
    };
    let to = match args.to {
        Some(stamp) => stamp,
        None => resolver::implied_to(&mut punches, &args.client)?,
    };
    resolver::check_range(from, to)?;

    let bill = Bill::new(from, to, &args.client, args.note.as_deref());

    if args.dry_run {
        msg_stderr!(Message::BillDryRun {
            client: bill.client,
            from: format_stamp(from),
            to: format_stamp(to),
            note: bill.note.unwrap_or_else(|| "n/a".to_string()),
        });
        return Ok(());
    }

    bills.insert(&bill)?;
    msg_success!(Message::BillRecorded {
        client: bill.client,
        from: format_stamp(from),
        to: format_stamp(to),
    });
    Ok(())
}
