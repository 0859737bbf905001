//! rPresence main entrypoint.

use rpresence::run;
use rpresence::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
