use chrono::{DateTime, Utc};

/// Current instant from the browser clock
pub fn now() -> DateTime<Utc> {
    let millis = js_sys::Date::now();
    DateTime::from_timestamp_millis(millis as i64).unwrap_or_default()
}

/// Format a deadline for display (e.g., "June 27, 2025")
pub fn format_deadline_for_display(deadline: DateTime<Utc>) -> String {
    deadline.format("%B %-d, %Y").to_string()
}
