use clap::{Parser, Subcommand};

/// Command-line interface definition for timeshortcuts
#[derive(Parser)]
#[command(
    name = "timeshortcuts",
    version = env!("CARGO_PKG_VERSION"),
    about = "Quick time selector: pick a named time-of-day shortcut and write it into a time field",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Run in test mode (no config file writes, host journal printed)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default configuration file
    Init,

    /// Show or check the configuration
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check shortcuts and formats for problems")]
        check: bool,
    },

    /// Show the shortcut menu
    List {
        #[arg(long = "json", help = "Print the menu as JSON")]
        json: bool,
    },

    /// Decode a shortcut code (e.g. 10.2 → 10:20, -1 → now)
    Decode {
        #[arg(allow_negative_numbers = true)]
        code: String,
    },

    /// Encode a time of day (HH:MM) into a shortcut code
    Encode { time: String },

    /// Activate a shortcut and write its time into a field slot
    Pick {
        /// Menu index of the shortcut (see `list`)
        index: usize,

        #[arg(long = "slot", default_value_t = 0, help = "Target field slot")]
        slot: usize,

        #[arg(
            long = "at",
            value_name = "HH:MM",
            help = "Pin the current time used by the 'now' shortcut"
        )]
        at: Option<String>,

        #[arg(
            long = "format",
            value_name = "PATTERN",
            help = "Override the time input formats (repeatable, first one renders)"
        )]
        format: Vec<String>,
    },
}
