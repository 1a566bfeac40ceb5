use std::path::Path;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::export;
use crate::plan::{self, WorkUnit};
use crate::wowy_fetch::ResultRow;

#[derive(Debug, Default)]
pub struct RunSummary {
    pub calls: usize,
    pub files_written: usize,
}

/// Drives the full 120-unit batch for one season. The fetch function is a
/// parameter so tests can substitute a canned source for the live API.
///
/// Any fetch error aborts the run; files written by earlier units remain.
pub fn run_onoff<F>(
    year: u32,
    out_root: &Path,
    pacing: Duration,
    mut fetch: F,
) -> Result<RunSummary>
where
    F: FnMut(&WorkUnit) -> Result<Vec<ResultRow>>,
{
    let units = plan::enumerate_units(year);
    let mut summary = RunSummary::default();

    for (idx, unit) in units.iter().enumerate() {
        let rows = fetch(unit).with_context(|| {
            format!(
                "fetch failed for {} ({} / {})",
                unit.team.abbrev,
                unit.perspective.as_param(),
                unit.filter.label()
            )
        })?;
        summary.calls += 1;

        let table = export::build_table(rows, unit);
        let path = unit.output_path(out_root);
        export::write_csv(&path, &table)?;
        summary.files_written += 1;
        println!("  saved {} ({} rows)", unit.file_name(), table.rows.len());

        if !pacing.is_zero() && idx + 1 < units.len() {
            thread::sleep(pacing);
        }
    }

    Ok(summary)
}
