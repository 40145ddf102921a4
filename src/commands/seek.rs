use crate::db::punches::Punches;
use crate::libs::error::PunchError;
use crate::libs::formatter::format_duration;
use crate::libs::messages::Message;
use crate::libs::session::Session;
use crate::libs::view::View;
use crate::{msg_print, msg_stderr};
use chrono::Duration;
use clap::Args;

#[derive(Debug, Args)]
pub struct SeekArgs {
    /// Corrected timestamp the punch should move to, or the session close at
    seek_to: i64,
    /// Stamp of the faulty punch-out to shift
    #[arg(required_unless_present = "still_open", conflicts_with = "still_open")]
    faulty_stamp: Option<i64>,
    /// Close the open session whose punch-in sits at this stamp instead
    #[arg(short = 'c', long)]
    still_open: Option<i64>,
    /// Validate and preview without writing
    #[arg(short = 'd', long)]
    dry_run: bool,
}

pub fn cmd(args: SeekArgs) -> anyhow::Result<()> {
    let mut punches = Punches::new()?;

    match (args.still_open, args.faulty_stamp) {
        (Some(still_open), _) => {
            let (open, closing) = punches.close_open_session(still_open, args.seek_to, args.dry_run)?;
            let session = Session::from_pair(&open, &closing);
            msg_print!(Message::SessionClosing {
                client: open.client.clone(),
                session: View::session_line(&session),
            });
        }
        (None, Some(faulty)) => {
            let plan = punches.shift_punch_out(faulty, args.seek_to, args.dry_run)?;
            msg_print!(Message::SeekShifting {
                direction: plan.direction(),
                client: plan.original.client.clone(),
                offset: format_duration(&Duration::seconds(plan.offset_seconds())),
            });
        }
        (None, None) => {
            // clap enforces this already; kept for non-CLI callers.
            return Err(
                PunchError::validation("require FAULTY_STAMP or -c STILL_OPEN").into(),
            );
        }
    }

    if args.dry_run {
        msg_stderr!(Message::DryRunNoChanges);
        return Ok(());
    }
    msg_print!(Message::Done);
    Ok(())
}
