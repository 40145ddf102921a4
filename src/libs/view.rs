//! Console rendering for reports, dumps, and bill listings.
//!
//! Pure presentation: everything here takes already-resolved data and prints
//! it. The ledger dump stays CSV-like (one punch per line) so it can be
//! piped; summaries and bill listings use terminal tables.

use crate::libs::bill::Bill;
use crate::libs::formatter::{
    format_duration, format_session_stop, format_stamp, tz_context, DURATION_COL_WIDTH,
};
use crate::libs::messages::Message;
use crate::libs::punch::Punch;
use crate::libs::session::{Ledger, Session};
use crate::{msg_print, msg_stderr};
use chrono::Duration;
use prettytable::{row, Table};

/// One line of the per-project dump summary.
pub struct SummaryRow {
    pub project: String,
    pub sessions: usize,
    pub working: bool,
    pub total: Duration,
}

pub struct View {}

impl View {
    /// `client: <dur> so far` for every punched-in client; a stderr notice
    /// when nobody is on the clock.
    pub fn status(latest_per_client: &[Punch], now: i64) {
        let mut on_clock = false;
        for punch in latest_per_client.iter().filter(|p| p.is_start) {
            on_clock = true;
            msg_print!(Message::StatusLine {
                client: punch.client.clone(),
                so_far: format_duration(&Duration::seconds(now - punch.stamp)),
            });
        }
        if !on_clock {
            msg_stderr!(Message::NotOnClock);
        }
    }

    /// CSV-like ledger dump, one punch per line, stamp ascending.
    pub fn dump(punches: &[Punch]) {
        println!("Punch [{}], Status, Project, Note", tz_context());
        for punch in punches {
            println!(
                "{}, {:>3}, {}, {}",
                format_stamp(punch.stamp),
                punch.status_str(),
                punch.client,
                punch.note_or_na()
            );
        }
    }

    /// Per-project summary table appended to the dump.
    pub fn summary(rows: &[SummaryRow]) {
        let mut table = Table::new();
        table.add_row(row!["PROJECT", "SESSIONS", "STATUS", "WORKED"]);
        for entry in rows {
            let status = if entry.working { "WORKING" } else { "n/a" };
            table.add_row(row![
                entry.project,
                entry.sessions,
                status,
                format_duration(&entry.total)
            ]);
        }
        table.printstd();
    }

    /// Billing-period listing, end stamp ascending.
    pub fn bills(bills: &[Bill]) {
        if bills.is_empty() {
            msg_print!(Message::NoPayPeriods);
            return;
        }
        let mut table = Table::new();
        table.add_row(row!["BILLED", format!("FROM ({})", tz_context()), "TO", "NOTE"]);
        for bill in bills {
            table.add_row(row![
                bill.client,
                format_stamp(bill.start),
                format_stamp(bill.end),
                bill.note_or_na()
            ]);
        }
        table.printstd();
    }

    /// One session rendered for a report or a seek preview.
    pub fn session_line(session: &Session) -> String {
        let duration = session.duration();
        let notes = session
            .notes()
            .map(|n| format!(" {}", n))
            .unwrap_or_default();
        format!(
            "{:>width$} from {} to {}{}",
            format_duration(&duration),
            format_stamp(session.start),
            format_session_stop(session.stop, &duration),
            notes,
            width = DURATION_COL_WIDTH
        )
    }

    /// Per-client report: sessions, anomaly marker, open-session accrual,
    /// running total.
    pub fn report(client: &str, from: i64, ledger: &Ledger, now: i64) {
        let limited = if from > 0 {
            format!(" from {}", format_stamp(from))
        } else {
            String::new()
        };
        msg_print!(Message::ReportHeader {
            client: client.to_string(),
            tz: tz_context(),
            limited,
        });

        if let Some(stray) = &ledger.stray_out {
            msg_print!(Message::StrayPunchOut {
                stamp: stray.stamp,
                note: stray.note_or_na().to_string(),
            });
        }

        for session in &ledger.sessions {
            println!("{}", Self::session_line(session));
        }

        if let Some(open) = &ledger.open {
            msg_print!(Message::CurrentlyWorking(format_duration(&open.accrued(now))));
        }

        if ledger.is_empty() {
            msg_stderr!(Message::ReportEmpty(client.to_string()));
        } else {
            msg_print!(Message::ReportSummary {
                total: format_duration(&ledger.total(now)),
                sessions: ledger.sessions.len(),
            });
        }
    }
}
