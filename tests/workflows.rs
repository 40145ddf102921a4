#[cfg(test)]
mod tests {
    use punch::db::bills::Bills;
    use punch::db::punches::Punches;
    use punch::libs::punch::Punch;
    use punch::libs::{resolver, session};
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct WorkflowTestContext {
        _temp_dir: TempDir,
        db_path: PathBuf,
    }

    impl TestContext for WorkflowTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db_path = temp_dir.path().join("punch.db");
            WorkflowTestContext {
                _temp_dir: temp_dir,
                db_path,
            }
        }
    }

    fn add(punches: &mut Punches, stamp: i64, is_start: bool, client: &str) {
        punches.insert(&Punch::new(stamp, is_start, client, None)).unwrap();
    }

    #[test_context(WorkflowTestContext)]
    #[test]
    fn test_alternating_ledger_reconstructs_half_as_many_sessions(ctx: &mut WorkflowTestContext) {
        let mut punches = Punches::open(&ctx.db_path).unwrap();
        let stamps = [100, 200, 300, 400, 500, 600, 700];
        for (i, stamp) in stamps.iter().enumerate() {
            add(&mut punches, *stamp, i % 2 == 0, "acme");
        }

        let ledger = session::reconstruct(&punches.fetch_for("acme", 0).unwrap()).unwrap();
        assert_eq!(ledger.sessions.len(), stamps.len() / 2);
        assert!(ledger.open.is_some());

        // 3 closed sessions of 100s each, plus 300s of open accrual at t=1000.
        assert_eq!(ledger.total(1000).num_seconds(), 600);
    }

    #[test_context(WorkflowTestContext)]
    #[test]
    fn test_bill_bounds_resolve_from_the_whole_unbilled_history(ctx: &mut WorkflowTestContext) {
        let mut punches = Punches::open(&ctx.db_path).unwrap();
        let mut bills = Bills::open(&ctx.db_path).unwrap();
        for (stamp, is_start) in [(100, true), (200, false), (300, true), (400, false)] {
            add(&mut punches, stamp, is_start, "acme");
        }

        let from = resolver::implied_from(&mut bills, &mut punches, "acme").unwrap();
        let to = resolver::implied_to(&mut punches, "acme").unwrap();
        assert_eq!((from, to), (100, 400));
        resolver::check_range(from, to).unwrap();
    }

    #[test_context(WorkflowTestContext)]
    #[test]
    fn test_punch_out_then_reopen_then_close_elsewhere(ctx: &mut WorkflowTestContext) {
        let mut punches = Punches::open(&ctx.db_path).unwrap();

        // A fumbled close: punched out too early, delete re-opens, seek
        // closes the session at the right stamp.
        add(&mut punches, 1000, true, "acme");
        add(&mut punches, 1100, false, "acme");
        punches.delete_punch("acme", 1100, false).unwrap();
        punches.close_open_session(1000, 2000, false).unwrap();

        let ledger = session::reconstruct(&punches.fetch_for("acme", 0).unwrap()).unwrap();
        assert_eq!(ledger.sessions.len(), 1);
        assert_eq!(ledger.sessions[0].stop, 2000);
        assert!(ledger.open.is_none());
    }

    #[test_context(WorkflowTestContext)]
    #[test]
    fn test_implied_client_tracks_the_only_open_session(ctx: &mut WorkflowTestContext) {
        let mut punches = Punches::open(&ctx.db_path).unwrap();
        add(&mut punches, 100, true, "acme");
        add(&mut punches, 200, false, "acme");
        add(&mut punches, 300, true, "globex");

        assert_eq!(resolver::implied_client(&mut punches).unwrap(), "globex");
    }
}
