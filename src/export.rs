use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;

use crate::plan::{Perspective, WorkUnit};
use crate::season::season_label;
use crate::wowy_fetch::ResultRow;

/// Columns stamped onto every row so a file is self-describing when files
/// from several runs are concatenated downstream.
const PROVENANCE_COLUMNS: [&str; 4] = ["team_id", "year", "season", "team_vs"];

/// Older seasons predate corner-three tracking; downstream consumers expect
/// the column to exist, zero-filled.
const CORNER3_COLUMN: &str = "Corner3FGM";

#[derive(Debug)]
pub struct TeamTable {
    pub columns: Vec<String>,
    pub rows: Vec<ResultRow>,
}

impl TeamTable {
    pub fn cell(&self, row: &ResultRow, column: &str) -> String {
        match row.get(column) {
            Some(value) => render_value(value),
            None => String::new(),
        }
    }
}

/// Builds the output table for one work unit: the API columns in
/// first-appearance order, then the provenance columns, then a zero-filled
/// `Corner3FGM` if the payload lacked one.
pub fn build_table(mut rows: Vec<ResultRow>, unit: &WorkUnit) -> TeamTable {
    let mut columns: Vec<String> = Vec::new();
    for row in &rows {
        for key in row.keys() {
            if !columns.iter().any(|col| col == key) {
                columns.push(key.clone());
            }
        }
    }

    let season = season_label(unit.year);
    let team_vs = unit.perspective == Perspective::Opponent;
    for row in &mut rows {
        row.insert("team_id".to_string(), Value::from(unit.team.id));
        row.insert("year".to_string(), Value::from(unit.year));
        row.insert("season".to_string(), Value::from(season.clone()));
        row.insert("team_vs".to_string(), Value::from(team_vs));
    }
    for name in PROVENANCE_COLUMNS {
        if !columns.iter().any(|col| col == name) {
            columns.push(name.to_string());
        }
    }

    if !columns.iter().any(|col| col == CORNER3_COLUMN) {
        columns.push(CORNER3_COLUMN.to_string());
        for row in &mut rows {
            row.insert(CORNER3_COLUMN.to_string(), Value::from(0));
        }
    }

    TeamTable { columns, rows }
}

/// Writes header + data rows, replacing any previous file at the path.
pub fn write_csv(path: &Path, table: &TeamTable) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed creating {}", parent.display()))?;
    }

    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed opening {}", path.display()))?;
    writer.write_record(&table.columns)?;
    for row in &table.rows {
        writer.write_record(table.columns.iter().map(|col| table.cell(row, col)))?;
    }
    writer
        .flush()
        .with_context(|| format!("failed writing {}", path.display()))?;
    Ok(())
}

/// Scalar cells the way pandas would print them, so re-generated files diff
/// cleanly against the historical ones.
pub(crate) fn render_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::Number(num) => num.to_string(),
        other => other.to_string(),
    }
}
