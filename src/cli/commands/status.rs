use crate::cli::commands::session;
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::display::status_card;
use crate::errors::AppResult;
use crate::ui::messages::header;
use chrono::Local;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let mut ctx = session::signed_in(cli, cfg)?;
    ctx.check_status()?;

    header("Attendance status");
    print!("{}", status_card(ctx.attendance_state(), Local::now()));
    Ok(())
}
