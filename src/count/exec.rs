use super::{count_revisions, print_counts};
use crate::git::{capture_success, rev_list_args, CommandRunner};
use crate::model::Filters;
use anyhow::Context;
use std::io::Write;

/// List revisions through `runner`, count them per date and print the
/// result to `out`.
///
/// Nothing is printed unless the listing exits with status 0.
pub fn exec<R, W>(runner: &R, filters: &Filters, bars: bool, out: &mut W) -> anyhow::Result<()>
where
    R: CommandRunner + ?Sized,
    W: Write,
{
    let argv = rev_list_args(filters);
    log::debug!("running {argv:?}");

    let output = capture_success(runner, &argv)?;
    let counts = count_revisions(&output);
    drop(output);
    log::debug!("{} commits on {} distinct dates", counts.total(), counts.len());

    print_counts(out, &counts, bars).context("Failed to write revision counts")?;
    out.flush().context("Failed to flush output")?;
    Ok(())
}
