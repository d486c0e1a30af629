// src/report/types.rs

use chrono::NaiveDateTime;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Format the simulation writes into its `Timestamp,` line.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One data record, keyed by the owning section's headers (in header order).
pub type Row = IndexMap<String, String>;

/// A named block of tabular data inside the report.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Column names, from the first comma line after the section name.
    pub headers: Vec<String>,
    /// Each data line, one value per header.
    pub rows: Vec<Row>,
}

impl Section {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Values of one column, in row order. Yields nothing for an unknown column.
    pub fn column<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.rows
            .iter()
            .filter_map(move |row| row.get(name).map(String::as_str))
    }
}

/// Result of parsing one simulation report.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportDocument {
    /// Value of the last `Timestamp,<value>` line, if any.
    pub timestamp: Option<String>,
    /// Sections in order of first appearance.
    pub sections: IndexMap<String, Section>,
}

impl ReportDocument {
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    /// The timestamp as a datetime, when it follows `TIMESTAMP_FORMAT`.
    pub fn generated_at(&self) -> Option<NaiveDateTime> {
        let ts = self.timestamp.as_deref()?;
        NaiveDateTime::parse_from_str(ts, TIMESTAMP_FORMAT).ok()
    }
}
