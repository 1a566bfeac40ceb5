use std::collections::HashSet;
use std::path::Path;

use pbp_onoff::plan::{self, FilterMode, Perspective};
use pbp_onoff::season::{season_label, validate_year};
use pbp_onoff::teams::NBA_TEAMS;

#[test]
fn full_batch_is_120_units() {
    let units = plan::enumerate_units(2026);
    assert_eq!(units.len(), 120);
    assert_eq!(NBA_TEAMS.len(), 30);
}

#[test]
fn every_unit_has_a_distinct_output_path() {
    let root = Path::new("data");
    let paths = plan::enumerate_units(2026)
        .iter()
        .map(|unit| unit.output_path(root))
        .collect::<HashSet<_>>();
    assert_eq!(paths.len(), 120);
}

#[test]
fn output_paths_are_deterministic() {
    let root = Path::new("data");
    let first = plan::enumerate_units(2026)
        .iter()
        .map(|unit| unit.output_path(root))
        .collect::<Vec<_>>();
    let second = plan::enumerate_units(2026)
        .iter()
        .map(|unit| unit.output_path(root))
        .collect::<Vec<_>>();
    assert_eq!(first, second);
}

#[test]
fn file_names_encode_perspective_and_filter() {
    let units = plan::enumerate_units(2026);
    let lakers = units
        .iter()
        .filter(|unit| unit.team.abbrev == "LAL")
        .collect::<Vec<_>>();
    assert_eq!(lakers.len(), 4);

    let names = lakers
        .iter()
        .map(|unit| unit.file_name())
        .collect::<HashSet<_>>();
    for expected in [
        "1610612747.csv",
        "1610612747_vs.csv",
        "1610612747_leverage.csv",
        "1610612747_vs_leverage.csv",
    ] {
        assert!(names.contains(expected), "missing {expected}");
    }

    let unit = lakers
        .iter()
        .find(|unit| {
            unit.perspective == Perspective::Opponent && unit.filter == FilterMode::Leverage
        })
        .unwrap();
    assert_eq!(
        unit.output_path(Path::new("data")),
        Path::new("data/2026/1610612747_vs_leverage.csv")
    );
}

#[test]
fn leverage_filter_is_present_exactly_when_requested() {
    for unit in plan::enumerate_units(2026) {
        let params = unit.query_params();
        let leverage = params.iter().find(|(name, _)| *name == "Leverage");
        match unit.filter {
            FilterMode::Leverage => {
                assert_eq!(
                    leverage.map(|(_, value)| value.as_str()),
                    Some("Medium,High,VeryHigh")
                );
            }
            FilterMode::All => assert!(leverage.is_none()),
        }
    }
}

#[test]
fn query_params_carry_season_and_type() {
    let units = plan::enumerate_units(2026);
    let unit = units
        .iter()
        .find(|unit| unit.perspective == Perspective::Opponent)
        .unwrap();
    let params = unit.query_params();

    let get = |name: &str| {
        params
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    };
    assert_eq!(get("Season"), Some("2025-26"));
    assert_eq!(get("SeasonType"), Some("Regular Season"));
    assert_eq!(get("Type"), Some("Opponent"));
    assert_eq!(get("TeamId"), Some(unit.team.id.to_string().as_str()));
}

#[test]
fn season_labels_span_two_calendar_years() {
    assert_eq!(season_label(2026), "2025-26");
    assert_eq!(season_label(2005), "2004-05");
    assert_eq!(season_label(2000), "1999-00");
}

#[test]
fn years_before_the_first_season_are_rejected() {
    assert!(validate_year(0).is_err());
    assert!(validate_year(1946).is_err());
    assert_eq!(validate_year(1947).unwrap(), 1947);
    assert_eq!(validate_year(2026).unwrap(), 2026);
}
