// src/render/table.rs

use crate::report::Row;

use super::escape_html;

/// Column title as shown to users: `CPU_Utilization` → `CPU Utilization`.
pub fn display_header(header: &str) -> String {
    header.replace('_', " ")
}

/// Render rows as an HTML table, one cell per header in header order.
pub fn render_table(headers: &[String], rows: &[Row]) -> String {
    let mut out = String::with_capacity(64 + rows.len() * headers.len() * 16);
    out.push_str("<table>\n<thead>\n<tr>");
    for header in headers {
        out.push_str("<th>");
        out.push_str(&escape_html(&display_header(header)));
        out.push_str("</th>");
    }
    out.push_str("</tr>\n</thead>\n<tbody>\n");

    for row in rows {
        out.push_str("<tr>");
        for header in headers {
            let value = row.get(header).map(String::as_str).unwrap_or_default();
            out.push_str("<td>");
            out.push_str(&escape_html(value));
            out.push_str("</td>");
        }
        out.push_str("</tr>\n");
    }

    out.push_str("</tbody>\n</table>");
    out
}
