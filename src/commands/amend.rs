use crate::db::punches::Punches;
use crate::libs::messages::Message;
use crate::libs::punch::normalize_note;
use crate::msg_success;
use clap::Args;

#[derive(Debug, Args)]
pub struct AmendArgs {
    /// Stamp of the punch whose note to rewrite
    target_stamp: i64,
    /// Replacement note; omit to clear the existing note
    #[arg(trailing_var_arg = true)]
    note: Vec<String>,
}

pub fn cmd(args: AmendArgs) -> anyhow::Result<()> {
    let note = normalize_note(Some(&args.note.join(" ")));

    Punches::new()?.amend_note(args.target_stamp, note.as_deref())?;

    let message = match note {
        Some(_) => Message::NoteAmended(args.target_stamp),
        None => Message::NoteCleared(args.target_stamp),
    };
    msg_success!(message);
    Ok(())
}
