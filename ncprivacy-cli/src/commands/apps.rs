use ncprivacy_db::AccessMode;

use super::CommandContext;
use crate::error::CliError;
use crate::output;

/// `ls-apps`: print the applications selected by the filter.
pub(crate) fn run_ls_apps(ctx: &CommandContext) -> Result<(), CliError> {
    let conn = ctx.open(AccessMode::ReadOnly)?;
    let apps = ncprivacy_db::list_apps(&conn, &ctx.filter)?;
    log::debug!("{} application(s) matched", apps.len());
    output::print_apps(&apps, ctx.json)
}

/// `count-apps`: print how many applications the filter selects.
pub(crate) fn run_count_apps(ctx: &CommandContext) -> Result<(), CliError> {
    let conn = ctx.open(AccessMode::ReadOnly)?;
    let count = ncprivacy_db::count_apps(&conn, &ctx.filter)?;
    output::print_count(count, ctx.json)
}

/// `rm-apps`: delete the selected applications. Dependent rows are removed
/// by the database's own triggers.
pub(crate) fn run_rm_apps(ctx: &CommandContext, dry_run: bool) -> Result<(), CliError> {
    if dry_run {
        let conn = ctx.open(AccessMode::ReadOnly)?;
        let count = ncprivacy_db::count_apps(&conn, &ctx.filter)?;
        log::info!("Dry run: {count} application(s) would be deleted");
        return output::print_count(count, ctx.json);
    }

    let conn = ctx.open(AccessMode::ReadWrite)?;
    let deleted = ncprivacy_db::rm_apps(&conn, &ctx.filter)?;
    log::debug!("Deleted {deleted} application(s)");
    output::print_deleted(deleted, ctx.json)
}
