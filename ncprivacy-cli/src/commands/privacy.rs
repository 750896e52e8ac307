use ncprivacy_db::AccessMode;

use super::CommandContext;
use crate::error::CliError;
use crate::output;

/// `rm`: delete the selected applications' rows from every privacy table.
pub(crate) fn run_rm(ctx: &CommandContext, dry_run: bool) -> Result<(), CliError> {
    if dry_run {
        let conn = ctx.open(AccessMode::ReadOnly)?;
        let count = ncprivacy_db::count_privacy_records(&conn, &ctx.filter)?;
        log::info!("Dry run: {count} row(s) would be deleted");
        return output::print_count(count, ctx.json);
    }

    let conn = ctx.open(AccessMode::ReadWrite)?;
    let deleted = ncprivacy_db::rm_privacy_records(&conn, &ctx.filter)?;
    output::print_deleted(deleted, ctx.json)
}

/// `count`: total rows across the privacy tables for the selected applications.
pub(crate) fn run_count(ctx: &CommandContext) -> Result<(), CliError> {
    let conn = ctx.open(AccessMode::ReadOnly)?;
    let count = ncprivacy_db::count_privacy_records(&conn, &ctx.filter)?;
    output::print_count(count, ctx.json)
}
