//! ncprivacy: inspect and clean the macOS Notification Center database.

mod cli_types;
mod commands;
mod dates;
mod error;
mod logger;
mod output;
mod settings;

use clap::Parser;

use cli_types::{Cli, Commands, ConfigAction};
use commands::CommandContext;
use commands::records::RecordArgs;
use error::CliError;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logger::init(cli.quiet, cli.verbose, cli.logfile.as_deref()) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    if let Err(e) = run(cli) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let settings = settings::load_settings()?;

    // Config commands never touch the database, so the path is resolved
    // only for the others.
    let context = || -> Result<CommandContext, CliError> {
        Ok(CommandContext {
            db_path: commands::resolve_db_path(cli.db_path.as_deref(), &settings)?,
            filter: settings.filter(&cli.filter),
            json: cli.json,
        })
    };

    match &cli.command {
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::run_config_show(&settings, cli.json),
            ConfigAction::Path => {
                commands::config::run_config_path();
                Ok(())
            }
        },
        Commands::LsApps => commands::apps::run_ls_apps(&context()?),
        Commands::RmApps { dry_run } => commands::apps::run_rm_apps(&context()?, *dry_run),
        Commands::CountApps => commands::apps::run_count_apps(&context()?),
        Commands::LsRecords {
            start,
            stop,
            search,
        } => commands::records::run_ls_records(
            &context()?,
            &RecordArgs {
                start: start.clone(),
                stop: stop.clone(),
                search: search.clone(),
            },
        ),
        Commands::Rm { dry_run } => commands::privacy::run_rm(&context()?, *dry_run),
        Commands::Count => commands::privacy::run_count(&context()?),
    }
}
