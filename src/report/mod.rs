// src/report/mod.rs
//
// Section-aware parsing of the simulation's CSV report. The report is a
// sequence of blocks: an upper-case section name, a header line, then data
// lines, plus a free-standing `Timestamp,<value>` line.

pub mod classify;
pub mod parse;
pub mod types;

pub use classify::{classify_line, LineKind};
pub use parse::{parse_report, ParseState};
pub use types::{ReportDocument, Row, Section, TIMESTAMP_FORMAT};

/// Section names the simulation writes.
pub mod names {
    pub const SIMULATION_RESULTS: &str = "SIMULATION_RESULTS";
    pub const CLOUDLET_EXECUTION_SUMMARY: &str = "CLOUDLET_EXECUTION_SUMMARY";
    pub const VM_EXECUTION_DETAILS: &str = "VM_EXECUTION_DETAILS";
    pub const AUTO_SCALING_STATISTICS: &str = "AUTO_SCALING_STATISTICS";
    pub const DETAILED_SCALING_EVENTS: &str = "DETAILED_SCALING_EVENTS";
    pub const CURRENT_VM_UTILIZATION: &str = "CURRENT_VM_UTILIZATION";
}
