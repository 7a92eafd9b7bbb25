//! End-of-day email text generation.
//!
//! Pure formatting over a task list; no I/O. The persistence layer treats
//! these helpers as external collaborators, so they only consume the domain
//! types and produce text.

use crate::libs::formatter::{format_hours_minutes, status_emoji};
use crate::libs::report::{total_hours, TaskEntry};

/// Builds the email subject line, e.g.
/// `"Jane Doe's End-of-Day Report – 2025-01-15"`.
pub fn subject(reporter_name: &str, date: &str) -> String {
    format!("{}'s End-of-Day Report – {}", reporter_name, date)
}

/// Builds the email body: a greeting, one line per task with a humanized
/// duration and a status emoji, the total time, and a friendly closing.
pub fn body(client_name: &str, tasks: &[TaskEntry], reporter_name: &str) -> String {
    if tasks.is_empty() {
        return "No tasks were logged today.".to_string();
    }

    let mut body = format!("Hey {},\n\nHere's what I've completed today:\n\n", client_name);

    for task in tasks {
        body.push_str(&format!(
            "{} – {} ({} {})\n\n",
            task.name,
            format_hours_minutes(task.time),
            task.status,
            status_emoji(&task.status)
        ));
    }

    body.push_str(&format!("Total Time: {}\n\n", format_hours_minutes(total_hours(tasks))));
    body.push_str(&format!(
        "If there's anything else you need, just let me know!\n\nHave a great rest of your day! 😊\n\n{}",
        reporter_name
    ));

    body
}
