use std::path::{Path, PathBuf};

use crate::season::season_label;
use crate::teams::{NBA_TEAMS, TeamInfo};

pub const LEVERAGE_BANDS: &str = "Medium,High,VeryHigh";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Perspective {
    Team,
    Opponent,
}

impl Perspective {
    pub fn as_param(self) -> &'static str {
        match self {
            Perspective::Team => "Team",
            Perspective::Opponent => "Opponent",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    Leverage,
    All,
}

impl FilterMode {
    pub fn label(self) -> &'static str {
        match self {
            FilterMode::Leverage => "leverage",
            FilterMode::All => "non-leverage",
        }
    }
}

/// One fetch: a single (team, perspective, filter) combination for a season.
#[derive(Debug, Clone, Copy)]
pub struct WorkUnit {
    pub year: u32,
    pub team: &'static TeamInfo,
    pub perspective: Perspective,
    pub filter: FilterMode,
}

impl WorkUnit {
    /// `{team_id}[_vs][_leverage].csv`
    pub fn file_name(&self) -> String {
        let mut name = self.team.id.to_string();
        if self.perspective == Perspective::Opponent {
            name.push_str("_vs");
        }
        if self.filter == FilterMode::Leverage {
            name.push_str("_leverage");
        }
        name.push_str(".csv");
        name
    }

    pub fn output_path(&self, out_root: &Path) -> PathBuf {
        out_root.join(self.year.to_string()).join(self.file_name())
    }

    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("TeamId", self.team.id.to_string()),
            ("Season", season_label(self.year)),
            ("SeasonType", "Regular Season".to_string()),
            ("Type", self.perspective.as_param().to_string()),
        ];
        if self.filter == FilterMode::Leverage {
            params.push(("Leverage", LEVERAGE_BANDS.to_string()));
        }
        params
    }
}

/// The full batch for one season: leverage block first, then unfiltered, with
/// the team perspective before the opponent perspective inside each block.
pub fn enumerate_units(year: u32) -> Vec<WorkUnit> {
    let mut units = Vec::with_capacity(NBA_TEAMS.len() * 4);
    for filter in [FilterMode::Leverage, FilterMode::All] {
        for perspective in [Perspective::Team, Perspective::Opponent] {
            for team in NBA_TEAMS {
                units.push(WorkUnit {
                    year,
                    team,
                    perspective,
                    filter,
                });
            }
        }
    }
    units
}
