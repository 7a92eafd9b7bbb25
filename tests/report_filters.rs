#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use eodlog::db::reports::Reports;
    use eodlog::libs::report::{ReportFilter, TaskEntry};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct FilterTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for FilterTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            FilterTestContext { _temp_dir: temp_dir }
        }
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn seed(reports: &mut Reports, day: &str, client_key: &str) -> i64 {
        let tasks = vec![TaskEntry::new("Seeded work", 1.0, "Completed")];
        reports.save(date(day), client_key, client_key, "Jane Doe", &tasks).unwrap()
    }

    #[test_context(FilterTestContext)]
    #[test]
    fn test_empty_filter_returns_the_same_set_as_unfiltered_fetch(_ctx: &mut FilterTestContext) {
        let mut reports = Reports::new().unwrap();
        seed(&mut reports, "2024-01-01", "eq-all");
        seed(&mut reports, "2024-01-02", "eq-all");

        let unfiltered = reports.fetch(&ReportFilter::default()).unwrap();
        let filtered = reports
            .fetch(&ReportFilter {
                client_key: None,
                start_date: None,
                end_date: None,
            })
            .unwrap();

        let unfiltered_ids: Vec<Option<i64>> = unfiltered.iter().map(|r| r.report.id).collect();
        let filtered_ids: Vec<Option<i64>> = filtered.iter().map(|r| r.report.id).collect();
        assert_eq!(unfiltered_ids, filtered_ids);
        assert!(unfiltered.len() >= 2);
    }

    #[test_context(FilterTestContext)]
    #[test]
    fn test_date_range_is_inclusive_on_both_ends(_ctx: &mut FilterTestContext) {
        let mut reports = Reports::new().unwrap();
        let first = seed(&mut reports, "2024-01-01", "range-test");
        let second = seed(&mut reports, "2024-01-15", "range-test");
        let third = seed(&mut reports, "2024-02-01", "range-test");

        let fetched = reports
            .fetch(&ReportFilter {
                client_key: Some("range-test".to_string()),
                start_date: Some(date("2024-01-01")),
                end_date: Some(date("2024-01-31")),
            })
            .unwrap();

        let ids: Vec<i64> = fetched.iter().filter_map(|r| r.report.id).collect();
        assert_eq!(ids.len(), 2);
        assert!(ids.contains(&first));
        assert!(ids.contains(&second));
        assert!(!ids.contains(&third));
    }

    #[test_context(FilterTestContext)]
    #[test]
    fn test_client_filter_restricts_to_one_client(_ctx: &mut FilterTestContext) {
        let mut reports = Reports::new().unwrap();
        let ours = seed(&mut reports, "2024-03-01", "client-a");
        let theirs = seed(&mut reports, "2024-03-01", "client-b");

        let fetched = reports
            .fetch(&ReportFilter {
                client_key: Some("client-a".to_string()),
                ..Default::default()
            })
            .unwrap();

        let ids: Vec<i64> = fetched.iter().filter_map(|r| r.report.id).collect();
        assert!(ids.contains(&ours));
        assert!(!ids.contains(&theirs));
    }

    #[test_context(FilterTestContext)]
    #[test]
    fn test_open_ended_ranges(_ctx: &mut FilterTestContext) {
        let mut reports = Reports::new().unwrap();
        let early = seed(&mut reports, "2024-06-01", "open-range");
        let late = seed(&mut reports, "2024-06-20", "open-range");

        let from_only = reports
            .fetch(&ReportFilter {
                client_key: Some("open-range".to_string()),
                start_date: Some(date("2024-06-10")),
                end_date: None,
            })
            .unwrap();
        let ids: Vec<i64> = from_only.iter().filter_map(|r| r.report.id).collect();
        assert_eq!(ids, vec![late]);

        let to_only = reports
            .fetch(&ReportFilter {
                client_key: Some("open-range".to_string()),
                start_date: None,
                end_date: Some(date("2024-06-10")),
            })
            .unwrap();
        let ids: Vec<i64> = to_only.iter().filter_map(|r| r.report.id).collect();
        assert_eq!(ids, vec![early]);
    }

    #[test_context(FilterTestContext)]
    #[test]
    fn test_no_match_returns_empty_not_error(_ctx: &mut FilterTestContext) {
        let mut reports = Reports::new().unwrap();
        seed(&mut reports, "2024-07-01", "lonely-client");

        let fetched = reports
            .fetch(&ReportFilter {
                client_key: Some("lonely-client".to_string()),
                start_date: Some(date("2030-01-01")),
                end_date: Some(date("2030-12-31")),
            })
            .unwrap();
        assert!(fetched.is_empty());
    }
}
