use std::env;

use pbp_onoff::config::FetchConfig;

// Env mutation is process-global, so everything lives in one test.
#[test]
fn env_overrides_are_parsed_and_bad_values_fall_back() {
    unsafe {
        env::set_var("FETCH_MAX_RETRIES", "3");
        env::set_var("FETCH_SLEEP_MS", "250");
    }
    let cfg = FetchConfig::from_env();
    assert_eq!(cfg.max_retries, 3);
    assert_eq!(cfg.sleep_ms, 250);

    // A value that does not fit u32 is ignored rather than truncated.
    unsafe {
        env::set_var("FETCH_MAX_RETRIES", "6000000000");
    }
    assert_eq!(FetchConfig::from_env().max_retries, 5);

    // Zero retries would mean zero attempts; clamp to one.
    unsafe {
        env::set_var("FETCH_MAX_RETRIES", "0");
    }
    assert_eq!(FetchConfig::from_env().max_retries, 1);

    unsafe {
        env::remove_var("FETCH_MAX_RETRIES");
        env::remove_var("FETCH_SLEEP_MS");
    }
}
