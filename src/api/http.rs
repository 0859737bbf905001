//! reqwest-backed implementation of the service traits.

use super::wire::{ClockRequest, ErrorBody, LoginRequest, LoginResponse, StatusReply};
use super::{AttendanceService, AuthService};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::user::User;
use reqwest::StatusCode;
use reqwest::blocking::Client;
use std::time::Duration;
use tracing::debug;

#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    login_url: String,
    attendance_url: String,
}

impl HttpClient {
    pub fn new(login_url: &str, attendance_url: &str, timeout: Duration) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("rpresence/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            login_url: login_url.to_string(),
            attendance_url: attendance_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        Self::new(
            &cfg.login_url,
            &cfg.attendance_url,
            Duration::from_secs(cfg.timeout_secs),
        )
    }

    fn status_url(&self) -> String {
        format!("{}/status", self.attendance_url)
    }
}

impl AuthService for HttpClient {
    fn authenticate(&self, email: &str, password: &str) -> AppResult<User> {
        debug!(url = %self.login_url, "sending login request");

        let response = self
            .client
            .post(&self.login_url)
            .json(&LoginRequest { email, password })
            .send()?;

        // Only a plain 200 counts as a successful login.
        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().unwrap_or_default();
            return Err(AppError::Rejected(
                ErrorBody::parse_message(&body)
                    .unwrap_or_else(|| format!("login refused with HTTP {}", status.as_u16())),
            ));
        }

        let body = response.text()?;
        let parsed: LoginResponse = serde_json::from_str(&body)?;
        Ok(parsed.into())
    }
}

impl AttendanceService for HttpClient {
    fn status(&self, employee_id: &str) -> AppResult<StatusReply> {
        let url = self.status_url();
        debug!(url = %url, employee_id, "querying attendance status");

        // The HTTP status code is not consulted: the body carries its own.
        // Only a body that is not JSON at all is an error.
        let body = self
            .client
            .get(&url)
            .query(&[("employee_id", employee_id)])
            .send()?
            .text()?;

        let value: serde_json::Value = serde_json::from_str(&body)?;
        Ok(StatusReply::from_value(&value))
    }

    fn record(&self, request: &ClockRequest) -> AppResult<()> {
        debug!(
            url = %self.attendance_url,
            employee_id = %request.employee_id,
            kind = request.kind.as_str(),
            "sending attendance event"
        );

        let response = self
            .client
            .post(&self.attendance_url)
            .json(request)
            .send()?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().unwrap_or_default();
        debug!(status = status.as_u16(), "attendance event rejected");
        Err(AppError::Rejected(
            ErrorBody::parse_message(&body)
                .unwrap_or_else(|| request.kind.failure_message().to_string()),
        ))
    }
}
