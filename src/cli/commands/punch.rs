use crate::cli::commands::session;
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::display::{history_table, status_card};
use crate::errors::AppResult;
use crate::models::clock_type::ClockType;
use crate::ui::messages::{success, warning};
use chrono::Local;

/// Handle `in` / `out`.
///
/// The local session is first reconciled with the server so that a punch
/// out can close the session opened by an earlier run. A failed status
/// check is reported but does not block the punch.
pub fn handle(cli: &Cli, cfg: &Config, kind: ClockType) -> AppResult<()> {
    let mut ctx = session::signed_in(cli, cfg)?;

    if let Err(e) = ctx.check_status() {
        warning(format!("Could not read current status: {}", e));
    }

    match kind {
        ClockType::ClockIn => ctx.punch_in()?,
        ClockType::ClockOut => ctx.punch_out()?,
    }

    let now = Local::now();
    success(format!("Recorded {}", kind.label()));

    let closed = history_table(&ctx.attendance_state().history, now);
    if !closed.is_empty() {
        print!("{}", closed.render());
    }
    print!("{}", status_card(ctx.attendance_state(), now));
    Ok(())
}
