//! Implied-argument resolution.
//!
//! Several subcommands let the user omit an argument and infer it from the
//! current store state. Each inference has exactly one source and fails
//! explicitly when it is ambiguous or undiscoverable; nothing here guesses.

use crate::db::bills::Bills;
use crate::db::punches::Punches;
use crate::libs::error::{PunchError, Result};

/// The client to punch against when none was named: the unique client whose
/// latest punch is a punch-in.
pub fn implied_client(punches: &mut Punches) -> Result<String> {
    let latest = punches.latest_per_client()?;
    let mut on_clock = latest.into_iter().filter(|p| p.is_start);

    match (on_clock.next(), on_clock.next()) {
        (None, _) => Err(PunchError::not_found(
            "implying one CLIENT is on clock, but none are",
        )),
        (Some(only), None) => Ok(only.client),
        (Some(first), Some(second)) => Err(PunchError::ambiguous(format!(
            "implying one CLIENT is on clock, but found 2: '{}' & '{}'",
            first.client, second.client
        ))),
    }
}

/// Punch direction for an explicit client: the opposite of the latest
/// punch, or a punch-in when no history exists.
pub fn implied_direction(punches: &mut Punches, client: &str) -> Result<bool> {
    Ok(match punches.last_for(client)? {
        Some(last) => !last.is_start,
        None => true,
    })
}

/// FROM bound of a new bill: the end of the client's latest billing period,
/// else the earliest punch (all of history is owed).
pub fn implied_from(bills: &mut Bills, punches: &mut Punches, client: &str) -> Result<i64> {
    if let Some(bill) = bills.latest_for(client)? {
        return Ok(bill.end);
    }
    match punches.earliest_for(client)? {
        Some(punch) => Ok(punch.stamp),
        None => Err(PunchError::not_found(format!(
            "implied '{}' FROM impossible without work or payperiod history",
            client
        ))),
    }
}

/// TO bound of a new bill: the client's most recent punch-out, skipping a
/// trailing open punch-in. Two punch-ins in the window means the ledger no
/// longer alternates, which fails fast rather than guessing.
pub fn implied_to(punches: &mut Punches, client: &str) -> Result<i64> {
    let latest_two = punches.last_two_for(client)?;

    if latest_two.len() == 2 && latest_two.iter().all(|p| p.is_start) {
        return Err(PunchError::InconsistentLedger {
            client: client.to_string(),
            stamp: latest_two[0].stamp,
            detail: "two consecutive punch-ins".to_string(),
        });
    }

    latest_two
        .into_iter()
        .find(|p| !p.is_start)
        .map(|p| p.stamp)
        .ok_or_else(|| {
            PunchError::not_found(format!(
                "implied TO stamp for '{}', but no full work records found",
                client
            ))
        })
}

/// FROM must be strictly older than TO, implied or explicit alike.
pub fn check_range(from: i64, to: i64) -> Result<()> {
    if from >= to {
        return Err(PunchError::InvalidRange { from, to });
    }
    Ok(())
}
