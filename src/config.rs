// src/config.rs

use std::{env, path::PathBuf, time::Duration};
use tracing::warn;

use crate::fetch::ReportSource;
use crate::render::DEFAULT_TITLE;

pub const DEFAULT_SOURCE: &str = "simulation_results.csv";
pub const DEFAULT_OUTPUT: &str = "dashboard.html";
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// How `report_summary` prints the parsed report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl OutputFormat {
    /// `json` (any case) selects JSON; anything else falls back to the table.
    pub fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("json") {
            Self::Json
        } else {
            Self::Table
        }
    }
}

/// Runtime settings for the dashboard binaries.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub source: ReportSource,
    pub output: PathBuf,
    pub log_level: String,
    pub fetch_timeout: Duration,
    pub title: String,
    pub output_format: OutputFormat,
}

impl Config {
    /// Positional args win over env vars: `<source> [output]`.
    pub fn from_env_and_args() -> Self {
        let args: Vec<String> = env::args().skip(1).collect();
        Self::from_lookup(|key| env::var(key).ok(), &args)
    }

    /// Build from an arbitrary variable lookup, so tests need not touch the
    /// process environment.
    pub fn from_lookup<F>(lookup: F, args: &[String]) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let source = args
            .first()
            .cloned()
            .or_else(|| lookup("REPORT_SOURCE"))
            .unwrap_or_else(|| DEFAULT_SOURCE.to_string());
        let output = args
            .get(1)
            .cloned()
            .or_else(|| lookup("DASHBOARD_OUT"))
            .unwrap_or_else(|| DEFAULT_OUTPUT.to_string());

        let fetch_timeout = match lookup("FETCH_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                warn!(value = %raw, "invalid FETCH_TIMEOUT_SECS; using default");
                DEFAULT_TIMEOUT_SECS
            }),
            None => DEFAULT_TIMEOUT_SECS,
        };

        Self {
            source: ReportSource::parse(&source),
            output: PathBuf::from(output),
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            fetch_timeout: Duration::from_secs(fetch_timeout),
            title: lookup("DASHBOARD_TITLE").unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            output_format: lookup("FORMAT")
                .map(|f| OutputFormat::parse(&f))
                .unwrap_or_default(),
        }
    }
}
