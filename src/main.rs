use std::time::Instant;

use anyhow::Result;

use pbp_onoff::config::FetchConfig;
use pbp_onoff::season::{current_season_year, season_label, validate_year};
use pbp_onoff::teams::NBA_TEAMS;
use pbp_onoff::{run, wowy_fetch};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let year = validate_year(parse_year_arg().unwrap_or_else(current_season_year))?;
    let cfg = FetchConfig::from_env();
    let total_calls = NBA_TEAMS.len() * 2 * 2;

    println!("=== PBPStats on/off fetch: {} season ===", season_label(year));
    println!(
        "{} calls ({} teams x 2 perspectives x 2 filter modes)",
        total_calls,
        NBA_TEAMS.len()
    );

    let start = Instant::now();
    let summary = run::run_onoff(year, &cfg.output_dir, cfg.pacing(), |unit| {
        wowy_fetch::fetch_wowy(&cfg, unit)
    })?;

    println!(
        "Done in {}s: {} calls, {} files in {}",
        start.elapsed().as_secs(),
        summary.calls,
        summary.files_written,
        cfg.output_dir.join(year.to_string()).display()
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
