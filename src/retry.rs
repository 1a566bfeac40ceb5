use std::thread;

use anyhow::{Result, anyhow};

use crate::config::FetchConfig;

/// Runs one API call up to the configured attempt budget, with a fixed delay
/// between attempts. The last error is carried so exhaustion reports the real
/// failure rather than a generic message.
pub fn with_retries<T, F>(cfg: &FetchConfig, label: &str, mut attempt_fn: F) -> Result<T>
where
    F: FnMut() -> Result<T>,
{
    let mut last_err = None;
    for attempt in 1..=cfg.max_retries {
        match attempt_fn() {
            Ok(value) => return Ok(value),
            Err(err) => {
                eprintln!(
                    "[WARN] attempt {attempt}/{} failed for {label}: {err}",
                    cfg.max_retries
                );
                last_err = Some(err);
                if attempt < cfg.max_retries {
                    thread::sleep(cfg.retry_delay());
                }
            }
        }
    }

    Err(last_err.unwrap_or_else(|| anyhow!("no attempts made for {label}")))
}
