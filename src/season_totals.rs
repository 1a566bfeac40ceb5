use std::fs;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::config::FetchConfig;
use crate::export::render_value;
use crate::http_client::http_client;
use crate::plan::LEVERAGE_BANDS;
use crate::retry::with_retries;
use crate::season::season_label;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeasonType {
    RegularSeason,
    Playoffs,
}

impl SeasonType {
    pub fn as_param(self) -> &'static str {
        match self {
            SeasonType::RegularSeason => "Regular Season",
            SeasonType::Playoffs => "Playoffs",
        }
    }
}

/// One league-wide totals file: a (season type, leverage) combination.
#[derive(Debug, Clone, Copy)]
pub struct TotalsTarget {
    pub season_type: SeasonType,
    pub leverage: bool,
}

impl TotalsTarget {
    pub fn file_name(&self) -> &'static str {
        match (self.season_type, self.leverage) {
            (SeasonType::RegularSeason, false) => "season_totals.csv",
            (SeasonType::Playoffs, false) => "season_totals_playoffs.csv",
            (SeasonType::RegularSeason, true) => "season_totals_leverage.csv",
            (SeasonType::Playoffs, true) => "season_totals_playoffs_leverage.csv",
        }
    }

    pub fn output_path(&self, out_root: &Path) -> PathBuf {
        out_root.join(self.file_name())
    }

    pub fn label(&self) -> String {
        format!(
            "{}{}",
            self.season_type.as_param(),
            if self.leverage { " (leverage)" } else { "" }
        )
    }
}

pub const TOTALS_TARGETS: [TotalsTarget; 4] = [
    TotalsTarget {
        season_type: SeasonType::RegularSeason,
        leverage: false,
    },
    TotalsTarget {
        season_type: SeasonType::Playoffs,
        leverage: false,
    },
    TotalsTarget {
        season_type: SeasonType::RegularSeason,
        leverage: true,
    },
    TotalsTarget {
        season_type: SeasonType::Playoffs,
        leverage: true,
    },
];

#[derive(Debug, Deserialize)]
struct TotalsResponse {
    single_row_table_data: Map<String, Value>,
}

/// Fetches one league-wide totals row, retrying transient failures.
pub fn fetch_totals(cfg: &FetchConfig, year: u32, target: TotalsTarget) -> Result<Map<String, Value>> {
    let client = http_client()?;

    let mut params = vec![
        ("Season", season_label(year)),
        ("SeasonType", target.season_type.as_param().to_string()),
        ("Type", "Team".to_string()),
    ];
    if target.leverage {
        params.push(("Leverage", LEVERAGE_BANDS.to_string()));
    }

    let label = format!("totals {}", target.label());
    with_retries(cfg, &label, || {
        let resp = client
            .get(&cfg.totals_url)
            .query(&params)
            .send()
            .context("request failed")?;
        let status = resp.status();
        let body = resp.text().context("failed reading body")?;
        if !status.is_success() {
            return Err(anyhow!("http {status}: {body}"));
        }
        parse_totals_json(&body)
    })
}

#[derive(Debug, Default)]
pub struct TotalsSummary {
    pub calls: usize,
    pub files_written: usize,
    pub skipped: usize,
}

/// Drives the four totals targets in order, pausing between requests so the
/// API sees the same pacing as the on/off batch. A target whose fetch fails
/// is skipped so the other files stay fresh; the fetch function is injected
/// so tests can substitute a canned source.
pub fn run_totals<F>(
    year: u32,
    out_root: &Path,
    pacing: Duration,
    mut fetch: F,
) -> Result<TotalsSummary>
where
    F: FnMut(TotalsTarget) -> Result<Map<String, Value>>,
{
    let mut summary = TotalsSummary::default();
    for (idx, target) in TOTALS_TARGETS.iter().enumerate() {
        println!("--- {} ---", target.label());
        summary.calls += 1;
        match fetch(*target) {
            Ok(row) => {
                let path = target.output_path(out_root);
                let count = upsert_totals_csv(&path, &row, year)?;
                summary.files_written += 1;
                println!("  saved {} ({count} rows)", target.file_name());
            }
            Err(err) => {
                eprintln!("[WARN] skipping {}: {err}", target.file_name());
                summary.skipped += 1;
            }
        }
        if !pacing.is_zero() && idx + 1 < TOTALS_TARGETS.len() {
            thread::sleep(pacing);
        }
    }
    Ok(summary)
}

pub fn parse_totals_json(raw: &str) -> Result<Map<String, Value>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Err(anyhow!("empty totals response"));
    }
    let parsed: TotalsResponse = serde_json::from_str(trimmed).context("invalid totals json")?;
    Ok(parsed.single_row_table_data)
}

/// Replaces the target year's row in a long-lived totals file: any existing
/// rows for that year are dropped, the fresh row is appended, rows are sorted
/// by year, and the derived columns are recomputed across the whole file.
/// Returns the row count after the rewrite.
pub fn upsert_totals_csv(path: &Path, fresh: &Map<String, Value>, year: u32) -> Result<usize> {
    let (mut columns, mut rows) = load_existing(path)?;
    rows.retain(|row| cell(&columns, row, "year").and_then(parse_num) != Some(year as f64));

    let mut fresh_cells: Vec<(String, String)> = fresh
        .iter()
        .map(|(key, value)| (key.clone(), render_value(value)))
        .collect();
    fresh_cells.push(("year".to_string(), year.to_string()));

    for (key, _) in &fresh_cells {
        ensure_column(&mut columns, &mut rows, key);
    }

    let mut new_row = vec![String::new(); columns.len()];
    for (key, value) in fresh_cells {
        if let Some(idx) = columns.iter().position(|col| *col == key) {
            new_row[idx] = value;
        }
    }
    rows.push(new_row);

    rows.sort_by(|a, b| {
        let ya = cell(&columns, a, "year").and_then(parse_num).unwrap_or(0.0);
        let yb = cell(&columns, b, "year").and_then(parse_num).unwrap_or(0.0);
        ya.total_cmp(&yb)
    });

    add_derived_columns(&mut columns, &mut rows);

    write_table(path, &columns, &rows)?;
    Ok(rows.len())
}

/// `FTA_Rate` and `TOV%` depend on other columns, so they are recomputed for
/// every row on every rewrite rather than trusted from the previous file.
fn add_derived_columns(columns: &mut Vec<String>, rows: &mut Vec<Vec<String>>) {
    let fta_rate_idx = ensure_column(columns, rows, "FTA_Rate");
    let tov_idx = ensure_column(columns, rows, "TOV%");

    for row in rows.iter_mut() {
        let fg3a = cell(columns, row, "FG3A").and_then(parse_num);
        let fg2a = cell(columns, row, "FG2A").and_then(parse_num);
        let fta = cell(columns, row, "FTA").and_then(parse_num);
        let turnovers = cell(columns, row, "Turnovers").and_then(parse_num);
        let off_reb = cell(columns, row, "OffRebounds").and_then(parse_num);

        let (Some(fg3a), Some(fg2a), Some(fta), Some(turnovers), Some(off_reb)) =
            (fg3a, fg2a, fta, turnovers, off_reb)
        else {
            row[fta_rate_idx] = String::new();
            row[tov_idx] = String::new();
            continue;
        };

        let fga = fg3a + fg2a;
        row[fta_rate_idx] = if fga > 0.0 {
            (fta / fga).to_string()
        } else {
            String::new()
        };
        let possessions = fga + 0.44 * fta + turnovers - off_reb;
        row[tov_idx] = if possessions > 0.0 {
            (100.0 * turnovers / possessions).to_string()
        } else {
            String::new()
        };
    }
}

fn load_existing(path: &Path) -> Result<(Vec<String>, Vec<Vec<String>>)> {
    if !path.exists() {
        return Ok((Vec::new(), Vec::new()));
    }
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed opening {}", path.display()))?;
    let columns = reader
        .headers()
        .with_context(|| format!("failed reading header of {}", path.display()))?
        .iter()
        .map(|col| col.to_string())
        .collect::<Vec<_>>();
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.with_context(|| format!("failed reading {}", path.display()))?;
        let mut row = record.iter().map(|val| val.to_string()).collect::<Vec<_>>();
        row.resize(columns.len(), String::new());
        rows.push(row);
    }
    Ok((columns, rows))
}

fn write_table(path: &Path, columns: &[String], rows: &[Vec<String>]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed creating {}", parent.display()))?;
    }
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed opening {}", path.display()))?;
    writer.write_record(columns)?;
    for row in rows {
        writer.write_record(row)?;
    }
    writer
        .flush()
        .with_context(|| format!("failed writing {}", path.display()))?;
    Ok(())
}

fn ensure_column(columns: &mut Vec<String>, rows: &mut Vec<Vec<String>>, name: &str) -> usize {
    if let Some(idx) = columns.iter().position(|col| col == name) {
        return idx;
    }
    columns.push(name.to_string());
    for row in rows.iter_mut() {
        row.push(String::new());
    }
    columns.len() - 1
}

fn cell<'a>(columns: &[String], row: &'a [String], name: &str) -> Option<&'a str> {
    let idx = columns.iter().position(|col| col == name)?;
    row.get(idx).map(|val| val.as_str())
}

fn parse_num(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}
