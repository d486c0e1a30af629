// src/render/charts.rs
//
// Chart.js configurations for the two dashboard charts.

use serde_json::{json, Value};

use crate::dashboard::{Palette, ScalingTimeline, UtilizationChart};

/// Bar chart of CPU utilization samples per VM.
pub fn utilization_chart_config(chart: &UtilizationChart, palette: &Palette) -> Value {
    let datasets: Vec<Value> = chart
        .series
        .iter()
        .enumerate()
        .map(|(i, s)| {
            json!({
                "label": format!("VM {}", s.vm_id),
                "data": s.samples,
                "backgroundColor": palette.fill(i),
                "borderColor": palette.border(i),
                "borderWidth": 1,
            })
        })
        .collect();

    json!({
        "type": "bar",
        "data": {
            "labels": chart.labels,
            "datasets": datasets,
        },
        "options": {
            "responsive": true,
            "maintainAspectRatio": false,
            "plugins": {
                "title": { "display": true, "text": "VM CPU Utilization Samples (%)" },
                "legend": { "position": "top" },
            },
            "scales": {
                "y": {
                    "beginAtZero": true,
                    "max": 100,
                    "title": { "display": true, "text": "CPU Utilization (%)" },
                },
            },
        },
    })
}

/// Scatter chart of PE changes over simulation time, one dataset per VM.
pub fn scaling_chart_config(timeline: &[ScalingTimeline], palette: &Palette) -> Value {
    let datasets: Vec<Value> = timeline
        .iter()
        .enumerate()
        .map(|(i, vm)| {
            json!({
                "label": format!("VM {}", vm.vm_id),
                "data": vm.points,
                "backgroundColor": palette.fill(i),
                "borderColor": palette.border(i),
                "borderWidth": 1,
                "pointRadius": 6,
                "pointHoverRadius": 8,
            })
        })
        .collect();

    json!({
        "type": "scatter",
        "data": { "datasets": datasets },
        "options": {
            "responsive": true,
            "maintainAspectRatio": false,
            "plugins": {
                "title": { "display": true, "text": "VM Scaling Events Timeline" },
                "legend": { "position": "top" },
            },
            "scales": {
                "x": { "title": { "display": true, "text": "Simulation Time" } },
                "y": {
                    "title": { "display": true, "text": "PE Change" },
                    "ticks": { "stepSize": 1 },
                },
            },
        },
    })
}

/// Tooltip callback for the scaling chart; attached on the page since JSON
/// cannot carry functions.
pub const SCALING_TOOLTIP_JS: &str = r#"function (context) {
    const p = context.raw;
    const util = p.utilization == null ? "n/a" : p.utilization.toFixed(2) + "%";
    return context.dataset.label + ": " + (p.y > 0 ? "+" : "") + p.y +
        " PEs at time " + p.x + " (Util: " + util + ")";
}"#;
