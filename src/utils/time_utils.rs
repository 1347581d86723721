use chrono::{Local, TimeZone, Utc};

/// Formats an epoch-seconds timestamp as an "HH:MM" bucket label for the
/// chart x-axis.
pub fn epoch_sec_to_hhmm(epoch_sec: i64) -> String {
    // Utc.timestamp_opt() safely handles the conversion; invalid timestamps
    // become an empty label instead of a panic mid-render.
    if let chrono::LocalResult::Single(datetime) = Utc.timestamp_opt(epoch_sec, 0) {
        datetime.format("%H:%M").to_string()
    } else {
        String::new()
    }
}

/// Wall clock in local time, for the top-bar display only.
pub fn clock_now() -> String {
    Local::now().format("%H:%M:%S").to_string()
}
