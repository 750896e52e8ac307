//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ncprivacy", version)]
#[command(about = "Inspect and clean the macOS Notification Center database", long_about = None)]
pub(crate) struct Cli {
    /// Custom database path (defaults to the current user's Notification Center database)
    #[arg(long, global = true, value_name = "PATH")]
    pub db_path: Option<PathBuf>,

    #[command(flatten)]
    pub filter: FilterArgs,

    /// JSON output
    #[arg(long, global = true)]
    pub json: bool,

    /// Only log warnings and errors
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, global = true, value_name = "PATH")]
    pub logfile: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Identifier filter shared by every database command.
#[derive(Args, Clone, Debug, Default)]
pub(crate) struct FilterArgs {
    /// Only include identifiers matching PATTERN (SQL GLOB, repeatable)
    #[arg(
        short,
        long,
        visible_alias = "identifiers",
        value_name = "PATTERN",
        global = true
    )]
    pub include: Vec<String>,

    /// Exclude identifiers matching PATTERN (SQL GLOB, repeatable)
    #[arg(
        short,
        long,
        visible_alias = "excludes",
        value_name = "PATTERN",
        global = true
    )]
    pub exclude: Vec<String>,

    /// Do not skip private identifiers (those starting with an underscore)
    #[arg(long, global = true)]
    pub not_skip_private: bool,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// List applications from table <app>
    LsApps,

    /// Delete applications from table <app> (the app_deleted trigger cleans up
    /// rows related to them in other tables)
    RmApps {
        /// Show how many applications would be deleted without deleting
        #[arg(short = 'n', long)]
        dry_run: bool,
    },

    /// Count applications in table <app>
    CountApps,

    /// List notification records from table <record>
    LsRecords {
        /// Only records delivered at or after DATE (YYYY-MM-DD[ HH:MM:SS] local time, or RFC 3339)
        #[arg(long, value_name = "DATE")]
        start: Option<String>,

        /// Only records delivered at or before DATE (a bare date covers the whole day)
        #[arg(long, value_name = "DATE")]
        stop: Option<String>,

        /// Only records whose title, subtitle or body matches REGEX
        #[arg(short, long, value_name = "REGEX")]
        search: Option<String>,
    },

    /// Delete records from tables <record, delivered, displayed, requests, snoozed>
    #[command(visible_alias = "rm-privacy-records")]
    Rm {
        /// Show how many rows would be deleted without deleting
        #[arg(short = 'n', long)]
        dry_run: bool,
    },

    /// Count records in tables <record, delivered, displayed, requests, snoozed>
    #[command(visible_alias = "count-privacy-records")]
    Count,

    /// Inspect the settings file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show the settings file location and effective values
    Show,

    /// Print the settings file path
    Path,
}
