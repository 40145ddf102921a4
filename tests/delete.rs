#[cfg(test)]
mod tests {
    use punch::db::bills::Bills;
    use punch::db::punches::{PunchDeletion, Punches};
    use punch::libs::bill::Bill;
    use punch::libs::error::PunchError;
    use punch::libs::punch::Punch;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct DeleteTestContext {
        _temp_dir: TempDir,
        db_path: PathBuf,
    }

    impl TestContext for DeleteTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db_path = temp_dir.path().join("punch.db");
            DeleteTestContext {
                _temp_dir: temp_dir,
                db_path,
            }
        }
    }

    fn add(punches: &mut Punches, stamp: i64, is_start: bool, client: &str) {
        punches.insert(&Punch::new(stamp, is_start, client, None)).unwrap();
    }

    #[test_context(DeleteTestContext)]
    #[test]
    fn test_deleting_punch_in_removes_the_session_pair(ctx: &mut DeleteTestContext) {
        let mut punches = Punches::open(&ctx.db_path).unwrap();
        add(&mut punches, 100, true, "acme");
        add(&mut punches, 200, false, "acme");

        let plan = punches.delete_punch("acme", 100, false).unwrap();
        assert!(matches!(
            plan,
            PunchDeletion::Session { ref start, stop: Some(ref stop) }
                if start.stamp == 100 && stop.stamp == 200
        ));
        assert!(punches.fetch_all().unwrap().is_empty());
    }

    #[test_context(DeleteTestContext)]
    #[test]
    fn test_deleting_open_punch_in_removes_just_it(ctx: &mut DeleteTestContext) {
        let mut punches = Punches::open(&ctx.db_path).unwrap();
        add(&mut punches, 100, true, "acme");

        let plan = punches.delete_punch("acme", 100, false).unwrap();
        assert!(matches!(plan, PunchDeletion::Session { stop: None, .. }));
        assert!(punches.fetch_all().unwrap().is_empty());
    }

    #[test_context(DeleteTestContext)]
    #[test]
    fn test_deleting_final_punch_out_reopens_session(ctx: &mut DeleteTestContext) {
        let mut punches = Punches::open(&ctx.db_path).unwrap();
        add(&mut punches, 100, true, "acme");
        add(&mut punches, 200, false, "acme");

        let plan = punches.delete_punch("acme", 200, false).unwrap();
        assert!(matches!(plan, PunchDeletion::ReopenSession { ref stop } if stop.stamp == 200));

        let remaining = punches.fetch_all().unwrap();
        assert_eq!(remaining.len(), 1);
        assert!(remaining[0].is_start);
    }

    #[test_context(DeleteTestContext)]
    #[test]
    fn test_deleting_punch_out_with_later_history_fails(ctx: &mut DeleteTestContext) {
        let mut punches = Punches::open(&ctx.db_path).unwrap();
        add(&mut punches, 100, true, "acme");
        add(&mut punches, 200, false, "acme");
        add(&mut punches, 300, true, "acme");

        let err = punches.delete_punch("acme", 200, false).unwrap_err();
        assert!(matches!(err, PunchError::InconsistentLedger { stamp: 200, .. }));
        assert_eq!(punches.fetch_all().unwrap().len(), 3);
    }

    #[test_context(DeleteTestContext)]
    #[test]
    fn test_deleting_unknown_punch_is_not_found(ctx: &mut DeleteTestContext) {
        let mut punches = Punches::open(&ctx.db_path).unwrap();
        add(&mut punches, 100, true, "acme");

        let err = punches.delete_punch("acme", 999, false).unwrap_err();
        assert!(matches!(err, PunchError::NotFound(_)));

        // Wrong client is also a miss; the stamp alone is not enough.
        let err = punches.delete_punch("globex", 100, false).unwrap_err();
        assert!(matches!(err, PunchError::NotFound(_)));
    }

    #[test_context(DeleteTestContext)]
    #[test]
    fn test_dry_run_resolves_the_plan_but_keeps_rows(ctx: &mut DeleteTestContext) {
        let mut punches = Punches::open(&ctx.db_path).unwrap();
        add(&mut punches, 100, true, "acme");
        add(&mut punches, 200, false, "acme");

        let plan = punches.delete_punch("acme", 100, true).unwrap();
        assert!(matches!(plan, PunchDeletion::Session { .. }));
        assert_eq!(punches.fetch_all().unwrap().len(), 2);
    }

    #[test_context(DeleteTestContext)]
    #[test]
    fn test_dry_run_surfaces_the_same_errors(ctx: &mut DeleteTestContext) {
        let mut punches = Punches::open(&ctx.db_path).unwrap();
        add(&mut punches, 100, true, "acme");
        add(&mut punches, 200, false, "acme");
        add(&mut punches, 300, true, "acme");

        let err = punches.delete_punch("acme", 200, true).unwrap_err();
        assert!(matches!(err, PunchError::InconsistentLedger { .. }));
    }

    #[test_context(DeleteTestContext)]
    #[test]
    fn test_delete_bill_by_client_and_start(ctx: &mut DeleteTestContext) {
        let mut bills = Bills::open(&ctx.db_path).unwrap();
        bills.insert(&Bill::new(100, 400, "acme", Some("april"))).unwrap();
        bills.insert(&Bill::new(500, 900, "acme", None)).unwrap();

        let removed = bills.delete_bill("acme", 100, false).unwrap();
        assert_eq!(removed.end, 400);

        let remaining = bills.fetch(&[]).unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].start, 500);
    }

    #[test_context(DeleteTestContext)]
    #[test]
    fn test_delete_bill_missing_is_not_found(ctx: &mut DeleteTestContext) {
        let mut bills = Bills::open(&ctx.db_path).unwrap();
        let err = bills.delete_bill("acme", 100, false).unwrap_err();
        assert!(matches!(err, PunchError::NotFound(_)));
    }

    #[test_context(DeleteTestContext)]
    #[test]
    fn test_delete_bill_dry_run_keeps_the_row(ctx: &mut DeleteTestContext) {
        let mut bills = Bills::open(&ctx.db_path).unwrap();
        bills.insert(&Bill::new(100, 400, "acme", None)).unwrap();

        bills.delete_bill("acme", 100, true).unwrap();
        assert_eq!(bills.fetch(&[]).unwrap().len(), 1);
    }
}
