//! Log setup: `env_logger` on stderr, optionally teed into a file.
//!
//! Command results (tables, JSON, counts) go to stdout with `println!`;
//! everything routed through `log` lands on stderr so it never corrupts
//! machine-readable output.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use env_logger::{Builder, Target};
use log::{Level, LevelFilter};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use crate::error::CliError;

/// Install the global logger.
///
/// `quiet` keeps warnings and errors only; `verbose` enables debug output
/// with timestamps and targets. `RUST_LOG` overrides either.
pub(crate) fn init(quiet: bool, verbose: bool, logfile: Option<&Path>) -> Result<(), CliError> {
    let level = if verbose {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    };

    let mut builder = Builder::new();
    builder.filter_level(level).parse_default_env();

    builder.format(move |buf, record| {
        let prefix = match record.level() {
            Level::Error => Some(format!(
                "{}",
                "error:".if_supports_color(Stderr, |t| t.red())
            )),
            Level::Warn => Some(format!(
                "{}",
                "warning:".if_supports_color(Stderr, |t| t.yellow())
            )),
            _ => None,
        };

        if verbose {
            write!(
                buf,
                "{} {:<5} {}: ",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target()
            )?;
        }
        match prefix {
            Some(prefix) if !verbose => writeln!(buf, "{prefix} {}", record.args()),
            _ => writeln!(buf, "{}", record.args()),
        }
    });

    if let Some(path) = logfile {
        let file = File::create(path)?;
        builder.target(Target::Pipe(Box::new(Tee::new(file))));
    } else {
        builder.target(Target::Stderr);
    }

    builder
        .try_init()
        .map_err(|e| CliError::other(format!("Failed to initialize logging: {e}")))
}

/// Writes to stderr and, with ANSI escapes stripped, to a log file.
struct Tee {
    file: strip_ansi_escapes::Writer<File>,
}

impl Tee {
    fn new(file: File) -> Self {
        Self {
            file: strip_ansi_escapes::Writer::new(file),
        }
    }
}

impl Write for Tee {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::stderr().write_all(buf)?;
        self.file.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()?;
        self.file.flush()
    }
}
