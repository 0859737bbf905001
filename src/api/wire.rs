//! JSON bodies exchanged with the remote services.

use crate::models::clock_type::ClockType;
use crate::models::location::Coordinates;
use crate::models::user::User;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Exact message the status endpoint uses for an open clock-in.
pub const CLOCKED_IN_MESSAGE: &str = "Employee is currently clocked in";

#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub data: LoginData,
}

/// Fields are copied as sent; missing or null values become empty strings.
#[derive(Debug, Deserialize)]
pub struct LoginData {
    #[serde(default)]
    pub id: Value,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Render an id the backend may send as a string or as any JSON number.
pub fn id_to_string(id: &Value) -> String {
    match id {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

impl From<LoginResponse> for User {
    fn from(r: LoginResponse) -> Self {
        User {
            id: id_to_string(&r.data.id),
            name: r.data.name.unwrap_or_default(),
            email: r.data.email.unwrap_or_default(),
        }
    }
}

/// Body of the status endpoint. Fields keep whatever JSON type the server
/// used; a body without them simply reports "not clocked in".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatusReply {
    pub status: Value,
    pub message: Value,
}

impl StatusReply {
    pub fn new(status: Value, message: Value) -> Self {
        Self { status, message }
    }

    pub fn clocked_in() -> Self {
        Self::new(Value::from(200), Value::from(CLOCKED_IN_MESSAGE))
    }

    /// Pick `status` and `message` out of any JSON document.
    pub fn from_value(body: &Value) -> Self {
        Self::new(
            body.get("status").cloned().unwrap_or(Value::Null),
            body.get("message").cloned().unwrap_or(Value::Null),
        )
    }

    pub fn is_clocked_in(&self) -> bool {
        self.status.as_f64() == Some(200.0) && self.message.as_str() == Some(CLOCKED_IN_MESSAGE)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClockRequest {
    pub employee_id: String,
    #[serde(rename = "type")]
    pub kind: ClockType,
    pub clock_in: bool,
    pub latitude: f64,
    pub longitude: f64,
}

impl ClockRequest {
    pub fn new(employee_id: &str, kind: ClockType, at: Coordinates) -> Self {
        Self {
            employee_id: employee_id.to_string(),
            kind,
            clock_in: kind.is_clock_in(),
            latitude: at.latitude,
            longitude: at.longitude,
        }
    }
}

/// Optional error body of a rejected request.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    /// Server message if the body carried a non-empty one.
    pub fn parse_message(body: &str) -> Option<String> {
        serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.trim().is_empty())
    }
}
