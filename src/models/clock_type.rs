use serde::Serialize;

/// Kind of attendance event sent to the remote service.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ClockType {
    ClockIn,
    ClockOut,
}

impl ClockType {
    /// Wire value of the `type` field ("clock_in" | "clock_out")
    pub fn as_str(&self) -> &'static str {
        match self {
            ClockType::ClockIn => "clock_in",
            ClockType::ClockOut => "clock_out",
        }
    }

    /// Wire value of the `clock_in` flag
    pub fn is_clock_in(&self) -> bool {
        matches!(self, ClockType::ClockIn)
    }

    /// Message surfaced when the server rejects the event without a reason.
    pub fn failure_message(&self) -> &'static str {
        match self {
            ClockType::ClockIn => "Failed to punch in",
            ClockType::ClockOut => "Failed to punch out",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ClockType::ClockIn => "punch in",
            ClockType::ClockOut => "punch out",
        }
    }
}
