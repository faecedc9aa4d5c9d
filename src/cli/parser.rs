use clap::{Parser, Subcommand};

/// Command-line interface definition for CamelCube
#[derive(Parser)]
#[command(
    name = "camelcube",
    version = env!("CARGO_PKG_VERSION"),
    about = "A speedcubing timer for the terminal that remembers your best solve",
    long_about = None
)]
pub struct Cli {
    /// Override the record file path (useful for tests or a second profile)
    #[arg(global = true, long = "file")]
    pub file: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Defaults to the interactive menu
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Clone)]
pub enum Commands {
    /// Open the main menu (solve timer / cube solver)
    Menu,

    /// Open the solve timer directly
    Timer,

    /// Cube solver (not available yet)
    Solver,

    /// Show the current and previous best times
    Best,

    /// Submit a solve time without the interactive timer
    Submit {
        /// Solve time in seconds (e.g. 12.345)
        #[arg(allow_negative_numbers = true)]
        time: f64,

        /// Skip the solve instead of counting it
        #[arg(long)]
        skip: bool,
    },

    /// Initialize the configuration and the record file
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

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

    /// Print the internal log
    Log {
        #[arg(long = "print", help = "Print the internal event log")]
        print: bool,
    },

    /// Create a backup copy of the record file
    Backup {
        /// Destination file path
        #[arg(long, value_name = "FILE")]
        dest: String,

        /// Compress the backup into a .zip archive
        #[arg(long)]
        compress: bool,

        /// Overwrite the destination without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}
