//! Builds a logged-in context for the commands that talk to the services.

use crate::api::HttpClient;
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::AppContext;
use crate::errors::{AppError, AppResult};

pub type HttpContext = AppContext<HttpClient, HttpClient>;

/// Credentials from the command line (or environment), e-mail falling back
/// to the config file.
pub fn credentials(cli: &Cli, cfg: &Config) -> AppResult<(String, String)> {
    let email = cli
        .email
        .clone()
        .or_else(|| cfg.email.clone())
        .ok_or_else(|| AppError::Credentials("no e-mail given (--email)".into()))?;
    let password = cli
        .password
        .clone()
        .ok_or_else(|| AppError::Credentials("no password given (--password)".into()))?;
    Ok((email, password))
}

/// Fresh context for this run, already logged in.
pub fn signed_in(cli: &Cli, cfg: &Config) -> AppResult<HttpContext> {
    let (email, password) = credentials(cli, cfg)?;
    let mut ctx = AppContext::from_config(cfg)?;

    if !ctx.login(&email, &password) {
        return Err(AppError::LoginFailed);
    }

    Ok(ctx)
}
