use crate::cli::commands::session;
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{field, success};

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let ctx = session::signed_in(cli, cfg)?;
    let user = ctx
        .auth_state()
        .user
        .as_ref()
        .ok_or(AppError::Unauthenticated)?;

    success(format!("Logged in as {}", user.name));
    field("ID", &user.id);
    field("E-mail", &user.email);
    Ok(())
}
