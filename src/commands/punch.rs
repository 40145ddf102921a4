use crate::db::punches::Punches;
use crate::libs::error::PunchError;
use crate::libs::messages::Message;
use crate::libs::punch::{is_valid_client, Punch};
use crate::libs::resolver;
use crate::msg_success;
use clap::Args;

#[derive(Debug, Args)]
pub struct PunchArgs {
    /// Client to punch against; omit to punch out of the only active session
    client: Option<String>,
    /// Annotation stored with this punch
    #[arg(short, long)]
    note: Option<String>,
}

pub fn cmd(args: PunchArgs) -> anyhow::Result<()> {
    let mut punches = Punches::new()?;

    // An implied client means an active session was found, so the direction
    // is forced to punch-out; an explicit client flips its latest record.
    let (client, is_start) = match &args.client {
        Some(client) => {
            if !is_valid_client(client) {
                return Err(PunchError::validation(format!("invalid CLIENT: '{}'", client)).into());
            }
            let is_start = resolver::implied_direction(&mut punches, client)?;
            (client.clone(), is_start)
        }
        None => (resolver::implied_client(&mut punches)?, false),
    };

    let punch = Punch::now(is_start, &client, args.note.as_deref());
    punches.insert(&punch)?;

    let message = if is_start {
        Message::PunchedIn {
            client,
            stamp: punch.stamp,
        }
    } else {
        Message::PunchedOut {
            client,
            stamp: punch.stamp,
        }
    };
    msg_success!(message);
    Ok(())
}
