use anyhow::anyhow;

use pbp_onoff::config::FetchConfig;
use pbp_onoff::retry::with_retries;

fn cfg(max_retries: u32) -> FetchConfig {
    FetchConfig {
        max_retries,
        retry_delay_ms: 0,
        ..FetchConfig::default()
    }
}

#[test]
fn first_success_makes_a_single_attempt() {
    let mut attempts = 0;
    let result = with_retries(&cfg(5), "test call", || {
        attempts += 1;
        Ok(42)
    });
    assert_eq!(result.unwrap(), 42);
    assert_eq!(attempts, 1);
}

#[test]
fn transient_failures_are_retried_until_success() {
    let mut attempts = 0;
    let result = with_retries(&cfg(5), "test call", || {
        attempts += 1;
        if attempts < 3 {
            Err(anyhow!("connection reset"))
        } else {
            Ok("payload")
        }
    });
    assert_eq!(result.unwrap(), "payload");
    assert_eq!(attempts, 3);
}

#[test]
fn exhaustion_stops_at_the_budget_and_reports_the_last_error() {
    let mut attempts = 0;
    let result: anyhow::Result<()> = with_retries(&cfg(3), "test call", || {
        attempts += 1;
        Err(anyhow!("failure {attempts}"))
    });
    assert_eq!(attempts, 3);
    let err = result.unwrap_err();
    assert_eq!(err.to_string(), "failure 3");
}
