use chrono::{DateTime, Local};
use serde::Serialize;

/// One work interval. Open while `punch_out` is `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttendanceSession {
    pub id: String,
    pub punch_in: DateTime<Local>,
    pub punch_out: Option<DateTime<Local>>,
}

impl AttendanceSession {
    /// Open a session at `now`; the id is derived from the same instant
    /// (milliseconds since the epoch).
    pub fn open_at(now: DateTime<Local>) -> Self {
        Self {
            id: now.timestamp_millis().to_string(),
            punch_in: now,
            punch_out: None,
        }
    }

    pub fn open_now() -> Self {
        Self::open_at(Local::now())
    }

    /// Closed copy of this session. The original is left untouched.
    pub fn closed_at(&self, when: DateTime<Local>) -> Self {
        Self {
            punch_out: Some(when),
            ..self.clone()
        }
    }

    pub fn is_open(&self) -> bool {
        self.punch_out.is_none()
    }

    /// Worked minutes up to `punch_out`, or up to `now` for an open session.
    pub fn minutes(&self, now: DateTime<Local>) -> i64 {
        let end = self.punch_out.unwrap_or(now);
        (end - self.punch_in).num_minutes()
    }

    pub fn punch_in_str(&self) -> String {
        self.punch_in.format("%Y-%m-%d %H:%M").to_string()
    }

    pub fn punch_out_str(&self) -> String {
        self.punch_out
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "--:--".to_string())
    }
}
