//! Clock and date helpers used by the status card.

use chrono::{DateTime, Local};

/// "HH:MM:SS"
pub fn clock_str(t: &DateTime<Local>) -> String {
    t.format("%H:%M:%S").to_string()
}

/// "Monday, June 2"
pub fn long_date_str(t: &DateTime<Local>) -> String {
    t.format("%A, %B %-d").to_string()
}

pub fn hm_str(t: &DateTime<Local>) -> String {
    t.format("%H:%M").to_string()
}
