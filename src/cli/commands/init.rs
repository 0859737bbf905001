use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// Creates `~/.rpresence/rpresence.conf` with default endpoints. With
/// `--test` nothing is written.
pub fn handle(cli: &Cli) -> AppResult<()> {
    info("Initializing rPresence…");

    let path = Config::init_all(cli.test)?;

    if cli.test {
        info(format!("Test mode: {} left untouched", path.display()));
    } else {
        success(format!("Config file: {}", path.display()));
    }
    Ok(())
}
