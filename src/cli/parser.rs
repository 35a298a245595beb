use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for rCheckin
/// CLI application to register a check-in at the current location
#[derive(Parser)]
#[command(
    name = "rcheckin",
    version = env!("CARGO_PKG_VERSION"),
    about = "Register a check-in (ponto) at your current location",
    long_about = None
)]
pub struct Cli {
    /// Override diagnostics database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Show debug diagnostics on stderr
    #[arg(global = true, long, short = 'v', conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only report errors on stderr
    #[arg(global = true, long, short = 'q')]
    pub quiet: bool,

    /// Disable ANSI colours in screens and messages
    #[arg(global = true, long = "no-color")]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by the screens that run the check-in flow.
#[derive(Args, Debug, Clone, Default)]
pub struct FlowArgs {
    /// Screen profile: basic (seconds, no street) or street (street name, minutes)
    #[arg(long, short = 'p')]
    pub profile: Option<String>,

    /// Register and confirm without prompting
    #[arg(long, conflicts_with = "cancel")]
    pub confirm: bool,

    /// Register, then cancel the confirmation dialog
    #[arg(long)]
    pub cancel: bool,

    /// Latitude served by the location provider
    #[arg(long, allow_hyphen_values = true)]
    pub lat: Option<f64>,

    /// Longitude served by the location provider
    #[arg(long, allow_hyphen_values = true)]
    pub lon: Option<f64>,

    /// Fix accuracy in metres
    #[arg(long)]
    pub accuracy: Option<f64>,

    /// Answer the permission request with "denied"
    #[arg(long)]
    pub deny: bool,

    /// Make the location fetch fail
    #[arg(long = "fail-fix")]
    pub fail_fix: bool,

    /// Street returned by reverse geocoding
    #[arg(long, conflicts_with = "no_street")]
    pub street: Option<String>,

    /// Reverse geocoding finds nothing
    #[arg(long = "no-street")]
    pub no_street: bool,

    /// Make reverse geocoding fail
    #[arg(long = "fail-geocode")]
    pub fail_geocode: bool,

    /// Simulated provider latency in milliseconds
    #[arg(long = "delay-ms")]
    pub delay_ms: Option<u64>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the diagnostics database and configuration
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their default values")]
        migrate: bool,

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

    /// Open the home screen (MARCAR PONTO)
    Home(FlowArgs),

    /// Open the location screen directly and register a check-in
    Checkin(FlowArgs),

    /// Print the internal diagnostics log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
