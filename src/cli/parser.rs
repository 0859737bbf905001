use clap::{ArgAction, Parser, Subcommand};

/// Command-line interface definition for rPresence
#[derive(Parser)]
#[command(
    name = "rpresence",
    version = env!("CARGO_PKG_VERSION"),
    about = "Punch in and out against a remote attendance service, with geolocation",
    long_about = None
)]
pub struct Cli {
    /// Account e-mail (falls back to the `email` config entry)
    #[arg(global = true, long, env = "RPRESENCE_EMAIL")]
    pub email: Option<String>,

    /// Account password
    #[arg(
        global = true,
        long,
        env = "RPRESENCE_PASSWORD",
        hide_env_values = true
    )]
    pub password: Option<String>,

    /// Override the login endpoint
    #[arg(global = true, long = "login-url")]
    pub login_url: Option<String>,

    /// Override the attendance endpoint
    #[arg(global = true, long = "attendance-url")]
    pub attendance_url: Option<String>,

    /// Latitude reported for punch in/out
    #[arg(global = true, long = "lat", allow_negative_numbers = true)]
    pub latitude: Option<f64>,

    /// Longitude reported for punch in/out
    #[arg(global = true, long = "lon", allow_negative_numbers = true)]
    pub longitude: Option<f64>,

    /// Increase diagnostic output (-v debug, -vv trace)
    #[arg(global = true, short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file with default values
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        /// Specify the editor to use (overrides $EDITOR/$VISUAL)
        #[arg(long = "editor")]
        editor: Option<String>,
    },

    /// Check the credentials and show the account
    Login,

    /// Show whether the account is currently clocked in
    Status,

    /// Punch in (start a work session)
    In,

    /// Punch out (close the current work session)
    Out,
}
