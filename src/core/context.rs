//! Owned application context handed to the UI layer.

use super::attendance::{AttendanceState, AttendanceStore};
use super::auth::{AuthState, AuthStore};
use crate::api::{AttendanceService, AuthService, HttpClient};
use crate::config::Config;
use crate::errors::AppResult;
use crate::geo::{self, LocationProvider};
use crate::models::location::Coordinates;

/// Both stores plus the geolocation provider.
///
/// Attendance operations read the user from the auth store here and pass it
/// down explicitly; the stores never reach into each other.
pub struct AppContext<A, T> {
    pub auth: AuthStore<A>,
    pub attendance: AttendanceStore<T>,
    locator: Box<dyn LocationProvider>,
}

impl AppContext<HttpClient, HttpClient> {
    /// Context wired to the real services described by `cfg`.
    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        let client = HttpClient::from_config(cfg)?;
        let position = Coordinates::from_parts(cfg.latitude, cfg.longitude);
        Ok(Self::new(client.clone(), client, geo::provider_for(position)))
    }
}

impl<A: AuthService, T: AttendanceService> AppContext<A, T> {
    pub fn new(auth: A, attendance: T, locator: Box<dyn LocationProvider>) -> Self {
        Self {
            auth: AuthStore::new(auth),
            attendance: AttendanceStore::new(attendance),
            locator,
        }
    }

    pub fn login(&mut self, email: &str, password: &str) -> bool {
        self.auth.login(email, password)
    }

    pub fn logout(&mut self) {
        self.auth.logout();
    }

    pub fn check_status(&mut self) -> AppResult<()> {
        self.attendance.check_status(self.auth.current_user())
    }

    pub fn punch_in(&mut self) -> AppResult<()> {
        self.attendance.punch_in(self.auth.current_user(), &*self.locator)
    }

    pub fn punch_out(&mut self) -> AppResult<()> {
        self.attendance.punch_out(self.auth.current_user(), &*self.locator)
    }

    pub fn auth_state(&self) -> &AuthState {
        self.auth.state()
    }

    pub fn attendance_state(&self) -> &AttendanceState {
        self.attendance.state()
    }
}
