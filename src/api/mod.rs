//! Remote collaborators: the login service and the attendance service.
//!
//! The stores only talk to the network through these traits, so tests can
//! swap in scripted implementations.

pub mod http;
pub mod wire;

use crate::errors::AppResult;
use crate::models::user::User;
use wire::{ClockRequest, StatusReply};

pub use http::HttpClient;

pub trait AuthService {
    /// Exchange credentials for the user's identity.
    fn authenticate(&self, email: &str, password: &str) -> AppResult<User>;
}

pub trait AttendanceService {
    /// Current clock-in status of an employee.
    fn status(&self, employee_id: &str) -> AppResult<StatusReply>;

    /// Record a clock-in or clock-out event.
    fn record(&self, request: &ClockRequest) -> AppResult<()>;
}
