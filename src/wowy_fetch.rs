use anyhow::{Context, Result, anyhow};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::config::FetchConfig;
use crate::http_client::http_client;
use crate::plan::WorkUnit;
use crate::retry::with_retries;

/// One row of the WOWY table, transcribed verbatim. The API decides the
/// columns; we never interpret them.
pub type ResultRow = Map<String, Value>;

#[derive(Debug, Deserialize)]
struct WowyResponse {
    multi_row_table_data: Vec<ResultRow>,
}

/// Fetches the on/off rows for one work unit, retrying transient failures.
/// Exhausting the retry budget is an error; the caller decides whether that
/// ends the run.
pub fn fetch_wowy(cfg: &FetchConfig, unit: &WorkUnit) -> Result<Vec<ResultRow>> {
    let client = http_client()?;
    let label = format!(
        "{} ({} / {})",
        unit.team.abbrev,
        unit.perspective.as_param(),
        unit.filter.label()
    );
    with_retries(cfg, &label, || try_fetch(client, cfg, unit))
}

fn try_fetch(
    client: &reqwest::blocking::Client,
    cfg: &FetchConfig,
    unit: &WorkUnit,
) -> Result<Vec<ResultRow>> {
    let resp = client
        .get(&cfg.wowy_url)
        .query(&unit.query_params())
        .send()
        .context("request failed")?;

    let status = resp.status();
    let body = resp.text().context("failed reading body")?;
    if !status.is_success() {
        return Err(anyhow!("http {status}: {body}"));
    }

    parse_wowy_json(&body)
}

pub fn parse_wowy_json(raw: &str) -> Result<Vec<ResultRow>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Err(anyhow!("empty wowy response"));
    }
    let parsed: WowyResponse = serde_json::from_str(trimmed).context("invalid wowy json")?;
    Ok(parsed.multi_row_table_data)
}
