#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use eodlog::db::reports::Reports;
    use eodlog::libs::error::StoreError;
    use eodlog::libs::report::{ReportFilter, TaskEntry};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ReportTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for ReportTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ReportTestContext { _temp_dir: temp_dir }
        }
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test_context(ReportTestContext)]
    #[test]
    fn test_save_report_records_sum_of_task_times(_ctx: &mut ReportTestContext) {
        let mut reports = Reports::new().unwrap();

        let tasks = vec![
            TaskEntry::new("Fix login flow", 1.5, "Completed"),
            TaskEntry::new("Review PR", 0.75, "Completed"),
            TaskEntry::new("Plan sprint", 2.0, "In Progress"),
        ];
        let id = reports.save(date("2024-03-01"), "Acme Co", "acme-sum", "Jane Doe", &tasks).unwrap();

        let saved = reports
            .fetch(&ReportFilter {
                client_key: Some("acme-sum".to_string()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(saved.len(), 1);
        let report = &saved[0];
        assert_eq!(report.report.id, Some(id));
        assert!((report.report.total_hours - 4.25).abs() < 1e-9);
        assert_eq!(report.tasks.len(), 3);
        assert_eq!(report.client_name, "Acme Co");
        assert_eq!(report.report.reporter_name, "Jane Doe");
    }

    #[test_context(ReportTestContext)]
    #[test]
    fn test_save_report_rejects_empty_task_list(_ctx: &mut ReportTestContext) {
        let mut reports = Reports::new().unwrap();

        let err = reports.save(date("2024-03-01"), "Acme Co", "acme-empty", "Jane Doe", &[]).unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
    }

    #[test_context(ReportTestContext)]
    #[test]
    fn test_save_report_rejects_non_positive_task_time(_ctx: &mut ReportTestContext) {
        let mut reports = Reports::new().unwrap();

        let tasks = vec![TaskEntry::new("Zero effort", 0.0, "Completed")];
        let err = reports.save(date("2024-03-01"), "Acme Co", "acme-zero", "Jane Doe", &tasks).unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));

        // Nothing was written for that client.
        let saved = reports
            .fetch(&ReportFilter {
                client_key: Some("acme-zero".to_string()),
                ..Default::default()
            })
            .unwrap();
        assert!(saved.is_empty());
    }

    #[test_context(ReportTestContext)]
    #[test]
    fn test_fetch_orders_by_date_descending(_ctx: &mut ReportTestContext) {
        let mut reports = Reports::new().unwrap();
        let tasks = vec![TaskEntry::new("Work", 1.0, "Completed")];

        reports.save(date("2024-01-05"), "Orderly", "order-test", "Jane Doe", &tasks).unwrap();
        reports.save(date("2024-02-10"), "Orderly", "order-test", "Jane Doe", &tasks).unwrap();
        reports.save(date("2024-01-20"), "Orderly", "order-test", "Jane Doe", &tasks).unwrap();

        let fetched = reports
            .fetch(&ReportFilter {
                client_key: Some("order-test".to_string()),
                ..Default::default()
            })
            .unwrap();
        let dates: Vec<String> = fetched.iter().map(|r| r.report.date.format("%Y-%m-%d").to_string()).collect();
        assert_eq!(dates, vec!["2024-02-10", "2024-01-20", "2024-01-05"]);
    }

    #[test_context(ReportTestContext)]
    #[test]
    fn test_fetch_on_empty_store_is_not_an_error(_ctx: &mut ReportTestContext) {
        let mut reports = Reports::new().unwrap();

        let fetched = reports
            .fetch(&ReportFilter {
                client_key: Some("nobody-logged-this".to_string()),
                ..Default::default()
            })
            .unwrap();
        assert!(fetched.is_empty());
    }

    #[test_context(ReportTestContext)]
    #[test]
    fn test_delete_removes_report_and_its_tasks(_ctx: &mut ReportTestContext) {
        let mut reports = Reports::new().unwrap();
        let tasks = vec![TaskEntry::new("Doomed work", 2.0, "Completed"), TaskEntry::new("More doomed work", 1.0, "Cancelled")];

        let id = reports.save(date("2024-04-01"), "Gone Inc", "gone-inc", "Jane Doe", &tasks).unwrap();
        reports.delete(id).unwrap();

        let fetched = reports
            .fetch(&ReportFilter {
                client_key: Some("gone-inc".to_string()),
                ..Default::default()
            })
            .unwrap();
        assert!(fetched.iter().all(|r| r.report.id != Some(id)));

        // Cascade: no task rows left for the deleted report.
        let mut tasks_table = eodlog::db::tasks::Tasks::new().unwrap();
        let orphans = tasks_table.fetch_for_reports(&[id]).unwrap();
        assert!(orphans.is_empty());
    }

    #[test_context(ReportTestContext)]
    #[test]
    fn test_delete_of_unknown_id_is_a_no_op(_ctx: &mut ReportTestContext) {
        let mut reports = Reports::new().unwrap();

        // Indistinguishable from success.
        reports.delete(987_654).unwrap();
    }

    #[test_context(ReportTestContext)]
    #[test]
    fn test_unresolved_client_key_falls_back_to_the_key(_ctx: &mut ReportTestContext) {
        let mut reports = Reports::new().unwrap();
        let tasks = vec![TaskEntry::new("Imported work", 1.0, "Completed")];

        // insert_row bypasses the client upsert, as the import path may.
        let id = reports.insert_row(date("2024-05-01"), "never-registered", "Jane Doe", 1.0).unwrap();
        eodlog::db::tasks::Tasks::new().unwrap().insert_batch(id, &tasks).unwrap();

        let fetched = reports
            .fetch(&ReportFilter {
                client_key: Some("never-registered".to_string()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(fetched.len(), 1);
        assert_eq!(fetched[0].client_name, "never-registered");
    }
}
