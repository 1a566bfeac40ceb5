use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::anyhow;

use pbp_onoff::run::run_onoff;
use pbp_onoff::wowy_fetch::parse_wowy_json;

fn temp_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("pbp_onoff_{tag}_{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    dir
}

fn canned_rows() -> Vec<pbp_onoff::wowy_fetch::ResultRow> {
    parse_wowy_json(
        r#"{"multi_row_table_data": [
            {"Name": "X On", "Minutes": 900},
            {"Name": "X Off", "Minutes": 700}
        ]}"#,
    )
    .unwrap()
}

fn csv_files_in(dir: &PathBuf) -> Vec<PathBuf> {
    let mut files = fs::read_dir(dir)
        .expect("season dir should exist")
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "csv"))
        .collect::<Vec<_>>();
    files.sort();
    files
}

#[test]
fn complete_run_makes_120_calls_and_120_files() {
    let root = temp_dir("batch_full");
    let mut calls = 0usize;

    let summary = run_onoff(2026, &root, Duration::ZERO, |_unit| {
        calls += 1;
        Ok(canned_rows())
    })
    .expect("run should succeed");

    assert_eq!(calls, 120);
    assert_eq!(summary.calls, 120);
    assert_eq!(summary.files_written, 120);

    let files = csv_files_in(&root.join("2026"));
    assert_eq!(files.len(), 120);

    // Two canned rows plus the header line.
    let contents = fs::read_to_string(&files[0]).unwrap();
    assert_eq!(contents.lines().count(), 3);
}

#[test]
fn rerun_overwrites_the_same_files() {
    let root = temp_dir("batch_rerun");

    run_onoff(2026, &root, Duration::ZERO, |_unit| Ok(canned_rows())).unwrap();
    run_onoff(2026, &root, Duration::ZERO, |_unit| Ok(canned_rows())).unwrap();

    let files = csv_files_in(&root.join("2026"));
    assert_eq!(files.len(), 120);
    for path in files {
        let contents = fs::read_to_string(path).unwrap();
        assert_eq!(contents.lines().count(), 3);
    }
}

#[test]
fn transport_failure_stops_the_run() {
    let root = temp_dir("batch_fail");
    let mut calls = 0usize;

    let result = run_onoff(2026, &root, Duration::ZERO, |_unit| {
        calls += 1;
        if calls == 7 {
            Err(anyhow!("connection reset"))
        } else {
            Ok(canned_rows())
        }
    });

    let err = result.expect_err("run should abort on the failed unit");
    assert!(format!("{err:#}").contains("connection reset"));
    // The failed unit stops the batch: nothing after call 7 runs, and only the
    // six files written before the failure exist.
    assert_eq!(calls, 7);
    assert_eq!(csv_files_in(&root.join("2026")).len(), 6);
}
