use anyhow::{Result, ensure};
use chrono::{Datelike, Utc};

/// The league's first season ran 1946-47, so 1947 is the earliest year a
/// season can be keyed by.
const FIRST_SEASON_YEAR: u32 = 1947;

/// PBPStats labels a season by its span, e.g. year 2026 -> "2025-26".
pub fn season_label(year: u32) -> String {
    format!("{}-{:02}", year - 1, year % 100)
}

/// Guards the `--year` flag: a year before the league existed has no season
/// label and would only produce garbage file names.
pub fn validate_year(year: u32) -> Result<u32> {
    ensure!(
        year >= FIRST_SEASON_YEAR,
        "season year {year} is before the league's first season ({FIRST_SEASON_YEAR})"
    );
    Ok(year)
}

/// NBA seasons span two calendar years and are keyed by the later one.
/// Oct-Dec belong to the upcoming season, Jan-Sep to the current one.
pub fn current_season_year() -> u32 {
    let now = Utc::now();
    let year = now.year() as u32;
    if now.month() >= 10 { year + 1 } else { year }
}
