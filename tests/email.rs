#[cfg(test)]
mod tests {
    use eodlog::libs::email;
    use eodlog::libs::report::TaskEntry;

    #[test]
    fn test_subject_line() {
        assert_eq!(email::subject("Jane Doe", "2024-01-15"), "Jane Doe's End-of-Day Report – 2024-01-15");
    }

    #[test]
    fn test_body_with_no_tasks() {
        assert_eq!(email::body("Acme Co", &[], "Jane Doe"), "No tasks were logged today.");
    }

    #[test]
    fn test_body_lists_tasks_with_durations_and_total() {
        let tasks = vec![TaskEntry::new("Fix login flow", 1.5, "Completed"), TaskEntry::new("Plan sprint", 0.5, "In Progress")];
        let body = email::body("Acme Co", &tasks, "Jane Doe");

        assert!(body.starts_with("Hey Acme Co,"));
        assert!(body.contains("Fix login flow – 1 hour 30 minutes (Completed ✅)"));
        assert!(body.contains("Plan sprint – 30 minutes (In Progress 🔄)"));
        assert!(body.contains("Total Time: 2 hours"));
        assert!(body.trim_end().ends_with("Jane Doe"));
    }
}
