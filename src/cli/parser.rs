use clap::{Parser, Subcommand};

/// Command-line interface definition for rClockInOut
#[derive(Parser)]
#[command(
    name = "rclockinout",
    version = env!("CARGO_PKG_VERSION"),
    about = "Clock in and out of tasks from a small window; sessions are logged to a CSV file",
    long_about = None
)]
pub struct Cli {
    /// Override the session log file (useful for tests or a second log)
    #[arg(global = true, long = "file", value_name = "FILE")]
    pub file: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Opens the window when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the clock-in / clock-out window (default)
    Gui,

    /// Print the recorded sessions
    List {
        #[arg(long = "raw", help = "Print one plain line per entry instead of a table")]
        raw: bool,
    },

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

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },
}
