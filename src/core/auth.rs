//! Authentication state.

use crate::api::AuthService;
use crate::models::user::User;
use tracing::{debug, info};

/// Snapshot of the authentication state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthState {
    pub is_authenticated: bool,
    pub user: Option<User>,
}

impl AuthState {
    pub fn signed_in(user: User) -> Self {
        Self {
            is_authenticated: true,
            user: Some(user),
        }
    }
}

pub struct AuthStore<S> {
    service: S,
    state: AuthState,
}

impl<S: AuthService> AuthStore<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            state: AuthState::default(),
        }
    }

    pub fn state(&self) -> &AuthState {
        &self.state
    }

    pub fn current_user(&self) -> Option<&User> {
        self.state.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.is_authenticated
    }

    /// Authenticate against the login service.
    ///
    /// Returns `true` and replaces the state on success. Every failure kind
    /// is collapsed into `false` and leaves the previous state in place.
    pub fn login(&mut self, email: &str, password: &str) -> bool {
        match self.service.authenticate(email, password) {
            Ok(user) => {
                info!(user_id = %user.id, "login succeeded");
                self.state = AuthState::signed_in(user);
                true
            }
            Err(e) => {
                debug!(error = %e, "login failed");
                false
            }
        }
    }

    pub fn logout(&mut self) {
        self.state = AuthState::default();
    }

    pub fn service(&self) -> &S {
        &self.service
    }
}
