use anyhow::Result;

use pbp_onoff::config::FetchConfig;
use pbp_onoff::season::{current_season_year, season_label, validate_year};
use pbp_onoff::season_totals;

/// Updates the four league-wide totals files with the target year's row.
/// A target that still fails after retries is skipped so the other files
/// stay fresh.
fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let year = validate_year(parse_year_arg().unwrap_or_else(current_season_year))?;
    let cfg = FetchConfig::from_env();

    println!(
        "=== PBPStats season totals: {} season ===",
        season_label(year)
    );

    let summary = season_totals::run_totals(year, &cfg.output_dir, cfg.pacing(), |target| {
        season_totals::fetch_totals(&cfg, year, target)
    })?;

    println!(
        "Done: {} files updated, {} skipped.",
        summary.files_written, summary.skipped
    );
    Ok(())
}

fn parse_year_arg() -> Option<u32> {
    let args = std::env::args().skip(1).collect::<Vec<_>>();
    for (idx, arg) in args.iter().enumerate() {
        if let Some(raw) = arg.strip_prefix("--year=") {
            if let Ok(year) = raw.trim().parse::<u32>() {
                return Some(year);
            }
        }
        if arg == "--year"
            && let Some(next) = args.get(idx + 1)
            && let Ok(year) = next.trim().parse::<u32>()
        {
            return Some(year);
        }
    }
    None
}
