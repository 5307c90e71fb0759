//! Clap derive structures for the `fleetreg` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// fleetreg -- operator console for the fleet-registration suite
#[derive(Debug, Parser)]
#[command(
    name = "fleetreg",
    version,
    about = "Administer the vehicle registry from the command line",
    long_about = "Operator console for the fleet-registration suite.\n\n\
        Talks to the registry service configured via FLEETREG_BASE_URL or\n\
        the config file. Against an unset or local origin, commands are\n\
        served from the built-in offline dataset, so everything works\n\
        without a deployed backend.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Registry service base URL (overrides config)
    #[arg(long, short = 'c', env = "FLEETREG_BASE_URL", global = true)]
    pub server: Option<String>,

    /// Console to act as: admin, police, dvla, or supervisor
    #[arg(long, short = 'P', env = "FLEETREG_PORTAL", global = true)]
    pub portal: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "FLEETREG_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    /// Request timeout in seconds
    #[arg(long, env = "FLEETREG_TIMEOUT", global = true)]
    pub timeout: Option<u64>,

    /// Fail on network errors instead of serving offline data
    #[arg(long, global = true)]
    pub no_offline_fallback: bool,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Log in, log out, register, or inspect the session
    Auth(AuthArgs),

    /// List and look up registered vehicles
    #[command(alias = "veh", alias = "v")]
    Vehicles(VehiclesArgs),

    /// Record and review traffic violations
    #[command(alias = "viol")]
    Violations(ViolationsArgs),

    /// DVLA registry: vehicle records, renewals, fines, analytics
    Dvla(DvlaArgs),

    /// Cross-console statistics
    Stats(StatsArgs),

    /// Manage the configuration file
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Auth ─────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct AuthArgs {
    #[command(subcommand)]
    pub command: AuthCommand,
}

#[derive(Debug, Subcommand)]
pub enum AuthCommand {
    /// Authenticate against the configured portal
    Login {
        /// Account username
        username: String,

        /// Password (prompted when omitted)
        #[arg(long)]
        password: Option<String>,
    },

    /// End the current session
    Logout,

    /// Register a new account on the configured portal
    Register {
        /// Account username
        username: String,

        /// Display name for the account
        #[arg(long)]
        full_name: String,

        /// Password (prompted when omitted)
        #[arg(long)]
        password: Option<String>,
    },

    /// Show whether a session is held and for which role
    Status,
}

// ── Vehicles ─────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct VehiclesArgs {
    #[command(subcommand)]
    pub command: VehiclesCommand,
}

#[derive(Debug, Subcommand)]
pub enum VehiclesCommand {
    /// List all visible vehicles
    #[command(alias = "ls")]
    List,

    /// Look up one vehicle by registration number
    Lookup {
        /// Registration number (e.g. "LD63 KWF")
        reg_number: String,
    },
}

// ── Violations ───────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ViolationsArgs {
    #[command(subcommand)]
    pub command: ViolationsCommand,
}

#[derive(Debug, Subcommand)]
pub enum ViolationsCommand {
    /// List the violation review queue
    #[command(alias = "ls")]
    List,

    /// Record a new violation
    Submit {
        /// Registration number of the offending vehicle
        reg_number: String,

        /// Violation category (e.g. speeding, parking, red_light)
        #[arg(long = "type")]
        violation_type: String,

        /// Where the violation occurred
        #[arg(long)]
        location: String,

        /// Free-text details
        #[arg(long)]
        description: Option<String>,

        /// Proposed fine amount
        #[arg(long)]
        fine: Option<f64>,
    },

    /// Approve a pending violation
    Approve {
        /// Violation id
        id: i64,
    },

    /// Reject a pending violation
    Reject {
        /// Violation id
        id: i64,

        /// Reason for rejection
        #[arg(long)]
        reason: Option<String>,
    },
}

// ── DVLA ─────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct DvlaArgs {
    #[command(subcommand)]
    pub command: DvlaCommand,
}

#[derive(Debug, Subcommand)]
pub enum DvlaCommand {
    /// Manage vehicle registry records
    Vehicles(DvlaVehiclesArgs),

    /// Submit a registration renewal
    Renew {
        /// Registration number to renew
        reg_number: String,

        /// Renewal period in months
        #[arg(long, default_value = "12")]
        months: u32,
    },

    /// Manage fines held against vehicles
    Fines(DvlaFinesArgs),

    /// Registry-wide analytics
    Analytics,
}

#[derive(Debug, Args)]
pub struct DvlaVehiclesArgs {
    #[command(subcommand)]
    pub command: DvlaVehiclesCommand,
}

#[derive(Debug, Subcommand)]
pub enum DvlaVehiclesCommand {
    /// List the vehicle registry
    #[command(alias = "ls")]
    List,

    /// Create a vehicle record
    Create {
        /// Registration number
        reg_number: String,

        /// Registered keeper
        #[arg(long)]
        owner: String,

        #[arg(long)]
        make: String,

        #[arg(long)]
        model: String,

        #[arg(long)]
        colour: String,

        #[arg(long)]
        year: i32,
    },

    /// Replace a vehicle record
    Update {
        /// Record id
        id: i64,

        /// Registration number
        reg_number: String,

        /// Registered keeper
        #[arg(long)]
        owner: String,

        #[arg(long)]
        make: String,

        #[arg(long)]
        model: String,

        #[arg(long)]
        colour: String,

        #[arg(long)]
        year: i32,
    },

    /// Delete a vehicle record
    Delete {
        /// Record id
        id: i64,
    },
}

#[derive(Debug, Args)]
pub struct DvlaFinesArgs {
    #[command(subcommand)]
    pub command: DvlaFinesCommand,
}

#[derive(Debug, Subcommand)]
pub enum DvlaFinesCommand {
    /// List fines
    #[command(alias = "ls")]
    List,

    /// Mark a fine as cleared
    Clear {
        /// Fine id
        id: i64,
    },
}

// ── Stats ────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct StatsArgs {
    #[command(subcommand)]
    pub command: StatsCommand,
}

#[derive(Debug, Subcommand)]
pub enum StatsCommand {
    /// Violation counts by status and type
    Violations,

    /// Per-officer recording and review counts
    Officers,
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Write a default config file
    Init,

    /// Print the config file path
    Path,

    /// Print the effective configuration
    Show,
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
