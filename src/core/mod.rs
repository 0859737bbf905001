pub mod attendance;
pub mod auth;
pub mod config;
pub mod context;
pub mod display;

pub use attendance::{AttendanceState, AttendanceStore};
pub use auth::{AuthState, AuthStore};
pub use context::AppContext;
