// src/fetch.rs

use anyhow::{anyhow, Context, Result};
use reqwest::{Client, StatusCode};
use std::{
    fmt,
    path::{Path, PathBuf},
    time::Duration,
};
use tracing::{debug, info};
use url::Url;

use crate::report::{parse_report, ReportDocument};

/// Where the simulation report comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportSource {
    Url(Url),
    File(PathBuf),
}

impl ReportSource {
    /// `http(s)://...` is fetched over the network; anything else is a path.
    pub fn parse(raw: &str) -> Self {
        match Url::parse(raw) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Self::Url(url),
            _ => Self::File(PathBuf::from(raw)),
        }
    }
}

impl fmt::Display for ReportSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url(url) => write!(f, "{}", url),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

fn status_error(status: StatusCode) -> anyhow::Error {
    anyhow!("HTTP error! Status: {}", status.as_u16())
}

/// GET the report once; a non-success status is an error.
pub async fn fetch_report_text(client: &Client, url: &Url) -> Result<String> {
    let resp = client
        .get(url.clone())
        .send()
        .await
        .with_context(|| format!("GET {}", url))?;

    let status = resp.status();
    if !status.is_success() {
        return Err(status_error(status));
    }

    resp.text()
        .await
        .with_context(|| format!("reading body from {}", url))
}

async fn read_report_file(path: &Path) -> Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("reading report file {}", path.display()))
}

/// Load the raw report text from `source`.
#[tracing::instrument(level = "info", skip(source), fields(source = %source))]
pub async fn load_report(source: &ReportSource, timeout: Duration) -> Result<String> {
    let text = match source {
        ReportSource::Url(url) => {
            let client = Client::builder()
                .timeout(timeout)
                .build()
                .context("building HTTP client")?;
            fetch_report_text(&client, url).await?
        }
        ReportSource::File(path) => read_report_file(path).await?,
    };
    debug!(bytes = text.len(), "report loaded");
    Ok(text)
}

/// Load and parse in one go.
pub async fn load_and_parse(source: &ReportSource, timeout: Duration) -> Result<ReportDocument> {
    let text = load_report(source, timeout).await?;
    let doc = parse_report(&text);
    info!(
        sections = doc.sections.len(),
        timestamp = doc.timestamp.as_deref().unwrap_or("-"),
        "report parsed"
    );
    Ok(doc)
}
