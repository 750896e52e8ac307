use ncprivacy_db::{AccessMode, DateRange, RecordQuery};
use regex::Regex;

use super::CommandContext;
use crate::dates::{Bound, parse_date};
use crate::error::CliError;
use crate::output::{self, RecordView};

/// Arguments of `ls-records` as given on the command line.
pub(crate) struct RecordArgs {
    pub start: Option<String>,
    pub stop: Option<String>,
    pub search: Option<String>,
}

impl RecordArgs {
    fn date_range(&self) -> Result<DateRange, CliError> {
        let start = self
            .start
            .as_deref()
            .map(|s| parse_date(s, Bound::Start))
            .transpose()?;
        let stop = self
            .stop
            .as_deref()
            .map(|s| parse_date(s, Bound::Stop))
            .transpose()?;
        Ok(DateRange::new(start, stop)?)
    }

    fn search_pattern(&self) -> Result<Option<Regex>, CliError> {
        self.search
            .as_deref()
            .map(|pattern| {
                Regex::new(pattern).map_err(|e| {
                    CliError::invalid_argument(format!("bad search pattern '{pattern}': {e}"))
                })
            })
            .transpose()
    }
}

/// `ls-records`: stream matching records, decoding each payload for display.
pub(crate) fn run_ls_records(ctx: &CommandContext, args: &RecordArgs) -> Result<(), CliError> {
    let range = args.date_range()?;
    let search = args.search_pattern()?;

    let conn = ctx.open(AccessMode::ReadOnly)?;
    let mut query = RecordQuery::prepare(&conn, &ctx.filter, &range)?;
    if let Some(pattern) = search {
        query = query.with_search(pattern);
    }

    let mut views = Vec::new();
    let mut num = 0;
    for record in query.iter()? {
        let record = record?;
        let view = RecordView::from_record(&record);
        num += 1;
        if ctx.json {
            views.push(view);
        } else {
            if num > 1 {
                println!();
            }
            println!("{}", output::format_record(num, &record, &view));
        }
    }

    log::debug!("{num} record(s) listed");
    if ctx.json {
        output::print_json(&views)?;
    }
    Ok(())
}
