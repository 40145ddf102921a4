//! All user-facing message variants, one enum to keep wording in one place.

#[derive(Debug, Clone)]
pub enum Message {
    // === PUNCH MESSAGES ===
    PunchedIn { client: String, stamp: i64 },
    PunchedOut { client: String, stamp: i64 },

    // === STATUS / QUERY MESSAGES ===
    NotOnClock,
    StatusLine { client: String, so_far: String },
    NoPayPeriods,
    ReportHeader { client: String, tz: String, limited: String },
    StrayPunchOut { stamp: i64, note: String },
    CurrentlyWorking(String), // accrued duration
    ReportSummary { total: String, sessions: usize },
    ReportEmpty(String), // client

    // === BILL MESSAGES ===
    BillDryRun {
        client: String,
        from: String,
        to: String,
        note: String,
    },
    BillRecorded { client: String, from: String, to: String },

    // === CORRECTIVE EDIT MESSAGES ===
    DryRunNoChanges,
    SessionClosing { client: String, session: String },
    SeekShifting {
        direction: &'static str, // "Rewind" | "Fast-forward"
        client: String,
        offset: String,
    },
    NoteAmended(i64),
    NoteCleared(i64),
    WouldDelete(String),
    Deleted(String),
    Done,

    // === STORE MESSAGES ===
    StoreCreated(String),
    StoreExists(String),
}
