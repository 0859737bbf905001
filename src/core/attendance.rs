//! Attendance state: the open session mirrored from the server and the
//! sessions closed during this process.

use crate::api::AttendanceService;
use crate::api::wire::ClockRequest;
use crate::errors::{AppError, AppResult};
use crate::geo::LocationProvider;
use crate::models::clock_type::ClockType;
use crate::models::session::AttendanceSession;
use crate::models::user::User;
use chrono::Local;
use tracing::{debug, warn};

/// Snapshot of the attendance state.
///
/// `history` is most-recent-first and never contains `current_session`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttendanceState {
    pub current_session: Option<AttendanceSession>,
    pub history: Vec<AttendanceSession>,
}

impl AttendanceState {
    fn with_current(&self, current: Option<AttendanceSession>) -> Self {
        Self {
            current_session: current,
            history: self.history.clone(),
        }
    }

    /// Close the current session and move it to the front of the history.
    /// Without a current session the snapshot is returned unchanged.
    fn closed(&self) -> Self {
        match &self.current_session {
            None => self.clone(),
            Some(open) => {
                let mut history = Vec::with_capacity(self.history.len() + 1);
                history.push(open.closed_at(Local::now()));
                history.extend(self.history.iter().cloned());
                Self {
                    current_session: None,
                    history,
                }
            }
        }
    }
}

pub struct AttendanceStore<S> {
    service: S,
    state: AttendanceState,
}

impl<S: AttendanceService> AttendanceStore<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            state: AttendanceState::default(),
        }
    }

    /// Start from an existing snapshot instead of the empty state.
    pub fn with_state(service: S, state: AttendanceState) -> Self {
        Self { service, state }
    }

    pub fn state(&self) -> &AttendanceState {
        &self.state
    }

    pub fn current_session(&self) -> Option<&AttendanceSession> {
        self.state.current_session.as_ref()
    }

    pub fn history(&self) -> &[AttendanceSession] {
        &self.state.history
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Reconcile the local session with the server's clock-in status.
    ///
    /// Any failure clears the current session before being returned.
    pub fn check_status(&mut self, user: Option<&User>) -> AppResult<()> {
        match self.fetch_status(user) {
            Ok(clocked_in) => {
                let current = clocked_in.then(AttendanceSession::open_now);
                self.state = self.state.with_current(current);
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "status check failed, clearing current session");
                self.state = self.state.with_current(None);
                Err(e)
            }
        }
    }

    fn fetch_status(&self, user: Option<&User>) -> AppResult<bool> {
        let user = user.ok_or(AppError::Unauthenticated)?;
        let reply = self.service.status(&user.id)?;
        debug!(
            status = ?reply.status,
            message = ?reply.message,
            "attendance status received"
        );
        Ok(reply.is_clocked_in())
    }

    pub fn punch_in(
        &mut self,
        user: Option<&User>,
        locator: &dyn LocationProvider,
    ) -> AppResult<()> {
        self.send_event(ClockType::ClockIn, user, locator)?;
        self.state = self.state.with_current(Some(AttendanceSession::open_now()));
        Ok(())
    }

    /// On success the open session, if any, is closed and prepended to the
    /// history. With no open session the state stays as it is.
    pub fn punch_out(
        &mut self,
        user: Option<&User>,
        locator: &dyn LocationProvider,
    ) -> AppResult<()> {
        self.send_event(ClockType::ClockOut, user, locator)?;
        self.state = self.state.closed();
        Ok(())
    }

    /// Position first, then identity; nothing goes out if either is missing.
    fn send_event(
        &self,
        kind: ClockType,
        user: Option<&User>,
        locator: &dyn LocationProvider,
    ) -> AppResult<()> {
        let position = locator.current_position()?;
        let user = user.ok_or(AppError::Unauthenticated)?;

        let request = ClockRequest::new(&user.id, kind, position);
        self.service.record(&request).inspect_err(|e| {
            warn!(error = %e, kind = kind.as_str(), "attendance event failed");
        })
    }
}
