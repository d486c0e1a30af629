// src/render/mod.rs
//
// Self-contained HTML for the simulation dashboard. Rendering is a pure
// function of the parsed document and the options passed in.

pub mod charts;
pub mod table;

use serde_json::Value;

use crate::dashboard::{Dashboard, Palette};
use crate::report::{names, ReportDocument};
pub use charts::{scaling_chart_config, utilization_chart_config};
pub use table::render_table;

pub const DEFAULT_TITLE: &str = "Cloud Simulation Dashboard";
pub const DEFAULT_CHART_JS_URL: &str = "https://cdn.jsdelivr.net/npm/chart.js";

#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub title: String,
    pub palette: Palette,
    pub chart_js_url: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            palette: Palette::default(),
            chart_js_url: DEFAULT_CHART_JS_URL.to_string(),
        }
    }
}

/// Tables shown below the charts: (section, element id, heading).
const TABLES: &[(&str, &str, &str)] = &[
    (names::VM_EXECUTION_DETAILS, "vm-execution", "VM Execution Details"),
    (names::AUTO_SCALING_STATISTICS, "auto-scaling", "Auto-Scaling Statistics"),
    (names::DETAILED_SCALING_EVENTS, "scaling-events", "Detailed Scaling Events"),
    (names::CURRENT_VM_UTILIZATION, "vm-utilization", "Current VM Utilization"),
];

/// Render the full dashboard page for a parsed report.
pub fn render_dashboard(doc: &ReportDocument, opts: &RenderOptions) -> String {
    let dash = Dashboard::from_document(doc);

    let charts = [
        dash.utilization
            .as_ref()
            .map(|c| ("utilization-chart", utilization_chart_config(c, &opts.palette), false)),
        dash.timeline
            .as_ref()
            .map(|t| ("scaling-timeline-chart", scaling_chart_config(t, &opts.palette), true)),
    ];
    let chart_html: String = charts
        .iter()
        .flatten()
        .map(|(id, cfg, tooltip)| render_chart(id, cfg, *tooltip))
        .collect();

    let tables: String = TABLES
        .iter()
        .filter_map(|(section, id, heading)| {
            doc.section(section).map(|s| {
                format!(
                    "<div class=\"panel\" id=\"{id}\">\n<h2>{heading}</h2>\n{table}\n</div>\n",
                    id = id,
                    heading = heading,
                    table = render_table(&s.headers, &s.rows),
                )
            })
        })
        .collect();

    let generated = dash
        .timestamp
        .as_deref()
        .filter(|ts| !ts.is_empty())
        .map(|ts| format!("Generated on: {}", escape_html(ts)))
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title}</title>
<style>{css}</style>
<script src="{chart_js}"></script>
</head>
<body>
<div class="container">
<header>
<h1>{title}</h1>
<p id="timestamp">{generated}</p>
</header>
{metrics}
{charts}
{tables}
</div>
</body>
</html>
"#,
        title = escape_html(&opts.title),
        css = CSS,
        chart_js = escape_html(&opts.chart_js_url),
        generated = generated,
        metrics = render_metrics(&dash),
        charts = chart_html,
        tables = tables,
    )
}

/// Page shown when the report could not be loaded.
pub fn render_error_page(source: &str, error: &anyhow::Error, opts: &RenderOptions) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<title>{title}</title>
<style>{css}</style>
</head>
<body>
<div class="container">
<div class="panel">
<h2>Error loading simulation data</h2>
<p>Please make sure {source} exists and is accessible.</p>
<p>Error details: {details}</p>
</div>
</div>
</body>
</html>
"#,
        title = escape_html(&opts.title),
        css = CSS,
        source = escape_html(source),
        details = escape_html(&format!("{:#}", error)),
    )
}

fn render_metrics(dash: &Dashboard) -> String {
    let summary = dash.summary.as_ref();
    let cards = [
        ("total-cloudlets", "Total Cloudlets", summary.map(|s| s.total_cloudlets.clone())),
        ("executed-cloudlets", "Executed Cloudlets", summary.map(|s| s.executed_cloudlets.clone())),
        ("avg-execution-time", "Avg Execution Time", summary.map(|s| s.average_execution_time.clone())),
        ("total-scaling-events", "Total Scaling Events", dash.total_scaling_events.map(|n| n.to_string())),
    ];

    let mut out = String::from("<div class=\"metrics\">\n");
    for (id, label, value) in cards {
        out.push_str(&format!(
            "<div class=\"metric\"><span class=\"label\">{}</span><span class=\"value\" id=\"{}\">{}</span></div>\n",
            label,
            id,
            escape_html(value.as_deref().unwrap_or("-")),
        ));
    }
    out.push_str("</div>");
    out
}

fn render_chart(id: &str, config: &Value, scaling_tooltip: bool) -> String {
    let install_tooltip = if scaling_tooltip {
        format!(
            "cfg.options.plugins.tooltip = {{ callbacks: {{ label: {} }} }};\n",
            charts::SCALING_TOOLTIP_JS
        )
    } else {
        String::new()
    };
    format!(
        "<div class=\"panel chart\">\n<canvas id=\"{id}\"></canvas>\n<script>\n(function () {{\nconst cfg = {cfg};\n{tooltip}new Chart(document.getElementById(\"{id}\").getContext(\"2d\"), cfg);\n}})();\n</script>\n</div>\n",
        id = id,
        cfg = script_safe_json(config),
        tooltip = install_tooltip,
    )
}

/// JSON that cannot terminate the surrounding `<script>` element.
fn script_safe_json(value: &Value) -> String {
    value.to_string().replace("</", "<\\/")
}

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 8);
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

const CSS: &str = "body{font-family:system-ui,sans-serif;background:#f4f6f8;color:#2c3e50;margin:0}\
.container{max-width:1200px;margin:0 auto;padding:20px}\
header h1{margin-bottom:4px}#timestamp{color:#7f8c8d;margin-top:0}\
.metrics{display:flex;gap:16px;flex-wrap:wrap;margin:20px 0}\
.metric{flex:1;min-width:180px;background:#fff;border-radius:8px;padding:16px;box-shadow:0 1px 3px rgba(0,0,0,.1)}\
.metric .label{display:block;font-size:.85em;color:#7f8c8d}.metric .value{font-size:1.8em;font-weight:600}\
.panel{background:#fff;border-radius:8px;padding:16px;margin-bottom:20px;box-shadow:0 1px 3px rgba(0,0,0,.1);overflow-x:auto}\
.chart{height:360px}\
table{border-collapse:collapse;width:100%}th,td{padding:8px 12px;border-bottom:1px solid #ecf0f1;text-align:left}\
th{background:#34495e;color:#fff}";
