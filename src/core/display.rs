//! Human-readable rendering of the attendance state.

use super::attendance::AttendanceState;
use crate::models::session::AttendanceSession;
use crate::utils::colors::{colorize_in, status_dot};
use crate::utils::formatting::bold;
use crate::utils::mins2readable;
use crate::utils::table::{Column, Table};
use crate::utils::time::{clock_str, hm_str, long_date_str};
use chrono::{DateTime, Local};

pub const ACTIVE_LABEL: &str = "Active Session";
pub const INACTIVE_LABEL: &str = "No Active Session";

pub fn status_label(state: &AttendanceState) -> &'static str {
    if state.current_session.is_some() {
        ACTIVE_LABEL
    } else {
        INACTIVE_LABEL
    }
}

/// Time card: clock, date, status and, for an open session, its start and
/// elapsed time.
pub fn status_card(state: &AttendanceState, now: DateTime<Local>) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", bold(&clock_str(&now))));
    out.push_str(&format!("{}\n", long_date_str(&now)));
    out.push_str(&format!(
        "{} {}\n",
        status_dot(state.current_session.is_some()),
        status_label(state)
    ));

    if let Some(open) = &state.current_session {
        out.push_str(&format!(
            "   In since : {}\n",
            colorize_in(&hm_str(&open.punch_in))
        ));
        out.push_str(&format!(
            "   Elapsed  : {}\n",
            mins2readable(open.minutes(now))
        ));
    }

    out
}

/// Sessions closed during this run, most recent first.
pub fn history_table(history: &[AttendanceSession], now: DateTime<Local>) -> Table {
    let mut table = Table::new(vec![
        Column::new("ID", 14),
        Column::new("IN", 17),
        Column::new("OUT", 17),
        Column::new("WORKED", 8),
    ]);

    for s in history {
        table.add_row(vec![
            s.id.clone(),
            s.punch_in_str(),
            s.punch_out_str(),
            mins2readable(s.minutes(now)),
        ]);
    }

    table
}
