use std::env;
use std::path::PathBuf;
use std::time::Duration;

const WOWY_URL: &str = "https://api.pbpstats.com/get-wowy-stats/nba";
const TOTALS_URL: &str = "https://api.pbpstats.com/get-totals/nba";

#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub wowy_url: String,
    pub totals_url: String,
    pub output_dir: PathBuf,
    pub sleep_ms: u64,
    pub max_retries: u32,
    pub retry_delay_ms: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            wowy_url: WOWY_URL.to_string(),
            totals_url: TOTALS_URL.to_string(),
            output_dir: PathBuf::from("data"),
            sleep_ms: 1000,
            max_retries: 5,
            retry_delay_ms: 3000,
        }
    }
}

impl FetchConfig {
    /// Reads overrides from the environment. Call `dotenvy::dotenv()` first so
    /// a local `.env` file is honored.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            wowy_url: env_string("WOWY_BASE_URL").unwrap_or(defaults.wowy_url),
            totals_url: env_string("TOTALS_BASE_URL").unwrap_or(defaults.totals_url),
            output_dir: env_string("OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.output_dir),
            sleep_ms: env_u64("FETCH_SLEEP_MS").unwrap_or(defaults.sleep_ms),
            max_retries: env_u32("FETCH_MAX_RETRIES")
                .map(|v| v.max(1))
                .unwrap_or(defaults.max_retries),
            retry_delay_ms: env_u64("FETCH_RETRY_DELAY_MS").unwrap_or(defaults.retry_delay_ms),
        }
    }

    pub fn pacing(&self) -> Duration {
        Duration::from_millis(self.sleep_ms)
    }

    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }
}

fn env_string(name: &str) -> Option<String> {
    let val = env::var(name).ok()?;
    let trimmed = val.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_string())
}

fn env_u64(name: &str) -> Option<u64> {
    env::var(name).ok().and_then(|val| val.parse::<u64>().ok())
}

fn env_u32(name: &str) -> Option<u32> {
    env::var(name).ok().and_then(|val| val.parse::<u32>().ok())
}
