use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::error::CliError;
use crate::output;
use crate::settings::{self, Settings};

/// `config show`: where settings come from and what they resolve to.
pub(crate) fn run_config_show(settings: &Settings, as_json: bool) -> Result<(), CliError> {
    if as_json {
        return output::print_json(settings);
    }

    let path = settings::settings_path();
    let status = if path.exists() {
        format!("{}", "(exists)".if_supports_color(Stdout, |t| t.green()))
    } else {
        format!("{}", "(not found)".if_supports_color(Stdout, |t| t.dimmed()))
    };
    println!(
        "Settings file: {} {status}",
        path.display().if_supports_color(Stdout, |t| t.cyan())
    );

    let db_path = settings
        .db_path
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(platform default)".to_string());
    println!("  db_path:      {db_path}");
    println!("  excludes:     {}", settings.excludes.join(", "));
    println!("  skip_private: {}", settings.skip_private());
    Ok(())
}

/// `config path`: print the settings file location.
pub(crate) fn run_config_path() {
    println!("{}", settings::settings_path().display());
}
