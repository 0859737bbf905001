/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const GREEN: &str = "\x1b[32m";

/// Green dot for an active session, grey otherwise.
pub fn status_dot(active: bool) -> String {
    if active {
        format!("{GREEN}●{RESET}")
    } else {
        format!("{GREY}●{RESET}")
    }
}

/// Green punch-in time; placeholders ("--:--" or empty) stay grey.
pub fn colorize_in(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "--:--" {
        format!("{GREY}{value}{RESET}")
    } else {
        format!("{GREEN}{value}{RESET}")
    }
}
