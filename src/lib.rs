pub mod config;
pub mod export;
pub mod http_client;
pub mod plan;
pub mod retry;
pub mod run;
pub mod season;
pub mod season_totals;
pub mod teams;
pub mod wowy_fetch;
