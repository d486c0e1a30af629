// src/dashboard/mod.rs

pub mod coerce;
pub mod palette;

use indexmap::IndexMap;
use serde::Serialize;
use tracing::warn;

use crate::report::{names, ReportDocument, Section};
use coerce::{display_or_dash, leading_float, leading_int};
pub use palette::Palette;

/// Headline numbers from `CLOUDLET_EXECUTION_SUMMARY`, as display text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CloudletSummary {
    pub total_cloudlets: String,
    pub executed_cloudlets: String,
    pub average_execution_time: String,
}

impl CloudletSummary {
    /// Reads the first summary row; `None` if the section is missing or empty.
    pub fn from_document(doc: &ReportDocument) -> Option<Self> {
        let row = non_empty(doc, names::CLOUDLET_EXECUTION_SUMMARY)?
            .rows
            .first()?;
        let field = |name: &str| display_or_dash(row.get(name).map(String::as_str));
        Some(Self {
            total_cloudlets: field("Total_Cloudlets"),
            executed_cloudlets: field("Executed_Cloudlets"),
            average_execution_time: field("Average_Execution_Time"),
        })
    }
}

/// Sum of `Scaling_Events` over all VMs.
///
/// Empty cells count as zero; cells without a leading integer are skipped.
/// The sum saturates at the `i64` bounds.
pub fn total_scaling_events(doc: &ReportDocument) -> Option<i64> {
    let section = non_empty(doc, names::AUTO_SCALING_STATISTICS)?;
    let total = section
        .column("Scaling_Events")
        .filter_map(|raw| {
            if raw.trim().is_empty() {
                return Some(0);
            }
            let parsed = leading_int(raw);
            if parsed.is_none() {
                warn!(value = raw, "ignoring non-numeric Scaling_Events");
            }
            parsed
        })
        .fold(0i64, i64::saturating_add);
    Some(total)
}

/// CPU utilization samples of one VM; `None` marks a non-numeric sample.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UtilizationSeries {
    pub vm_id: String,
    pub samples: Vec<Option<f64>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UtilizationChart {
    /// `Sample 1..=N`, N being the longest series.
    pub labels: Vec<String>,
    pub series: Vec<UtilizationSeries>,
}

/// Groups `CURRENT_VM_UTILIZATION` by `VM_ID`, in order of first appearance.
pub fn utilization_series(doc: &ReportDocument) -> Option<UtilizationChart> {
    let section = non_empty(doc, names::CURRENT_VM_UTILIZATION)?;

    let mut by_vm: IndexMap<String, Vec<Option<f64>>> = IndexMap::new();
    for row in &section.rows {
        let vm_id = row.get("VM_ID").cloned().unwrap_or_default();
        let sample = row.get("CPU_Utilization").and_then(|v| leading_float(v));
        by_vm.entry(vm_id).or_default().push(sample);
    }

    let longest = by_vm.values().map(Vec::len).max().unwrap_or(0);
    let labels = (1..=longest).map(|i| format!("Sample {}", i)).collect();
    let series = by_vm
        .into_iter()
        .map(|(vm_id, samples)| UtilizationSeries { vm_id, samples })
        .collect();
    Some(UtilizationChart { labels, series })
}

/// One scaling decision: at time `x` the VM changed by `y` PEs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScalingPoint {
    pub x: i64,
    pub y: i64,
    pub utilization: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScalingTimeline {
    pub vm_id: String,
    pub points: Vec<ScalingPoint>,
}

/// Groups `DETAILED_SCALING_EVENTS` by `VM_ID`, in order of first appearance.
pub fn scaling_timeline(doc: &ReportDocument) -> Option<Vec<ScalingTimeline>> {
    let section = non_empty(doc, names::DETAILED_SCALING_EVENTS)?;

    let mut by_vm: IndexMap<String, Vec<ScalingPoint>> = IndexMap::new();
    for (idx, row) in section.rows.iter().enumerate() {
        let int = |name: &str| row.get(name).and_then(|v| leading_int(v));
        let (Some(x), Some(new_pes), Some(old_pes)) = (int("Time"), int("New_PEs"), int("Old_PEs"))
        else {
            warn!(row = idx, "skipping scaling event with non-numeric time or PEs");
            continue;
        };
        let Some(delta) = new_pes.checked_sub(old_pes) else {
            warn!(row = idx, new_pes, old_pes, "skipping scaling event with out-of-range PE change");
            continue;
        };
        let vm_id = row.get("VM_ID").cloned().unwrap_or_default();
        by_vm.entry(vm_id).or_default().push(ScalingPoint {
            x,
            y: delta,
            utilization: row.get("CPU_Utilization").and_then(|v| leading_float(v)),
        });
    }

    Some(
        by_vm
            .into_iter()
            .map(|(vm_id, points)| ScalingTimeline { vm_id, points })
            .collect(),
    )
}

/// Everything the dashboard page shows, derived once from a document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub timestamp: Option<String>,
    pub summary: Option<CloudletSummary>,
    pub total_scaling_events: Option<i64>,
    pub utilization: Option<UtilizationChart>,
    pub timeline: Option<Vec<ScalingTimeline>>,
}

impl Dashboard {
    pub fn from_document(doc: &ReportDocument) -> Self {
        Self {
            timestamp: doc.timestamp.clone(),
            summary: CloudletSummary::from_document(doc),
            total_scaling_events: total_scaling_events(doc),
            utilization: utilization_series(doc),
            timeline: scaling_timeline(doc),
        }
    }
}

fn non_empty<'a>(doc: &'a ReportDocument, name: &str) -> Option<&'a Section> {
    doc.section(name).filter(|s| !s.is_empty())
}
