// src/report/parse.rs

use tracing::{debug, trace};

use super::classify::{classify_line, LineKind};
use super::types::{ReportDocument, Row, Section};

/// Parser state threaded through the fold over report lines.
#[derive(Debug, Default)]
pub struct ParseState {
    doc: ReportDocument,
    /// Name of the section that comma lines are attached to.
    current: Option<String>,
}

impl ParseState {
    /// Apply one raw line. Blank lines leave the state untouched.
    pub fn step(mut self, raw: &str) -> Self {
        // U+FEFF is not Unicode whitespace but a saved report may start with it
        let line = raw.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
        if line.is_empty() {
            return self;
        }

        match classify_line(line) {
            LineKind::SectionHeader(name) => self.open_section(name),
            LineKind::TimestampLine(value) => self.doc.timestamp = Some(value.to_string()),
            LineKind::HeaderOrDataLine(line) => self.push_line(line),
            LineKind::Unrecognized => trace!(line, "skipping unrecognized line"),
        }
        self
    }

    pub fn finish(self) -> ReportDocument {
        self.doc
    }

    fn open_section(&mut self, name: &str) {
        // IndexMap::insert keeps the original position of an existing key
        if let Some(previous) = self.doc.sections.insert(name.to_string(), Section::default()) {
            debug!(
                section = name,
                discarded_rows = previous.rows.len(),
                "section reopened; previous contents reset"
            );
        }
        self.current = Some(name.to_string());
    }

    fn push_line(&mut self, line: &str) {
        let Some(name) = self.current.as_deref() else {
            trace!(line, "comma line before any section; discarded");
            return;
        };
        let Some(section) = self.doc.sections.get_mut(name) else {
            return;
        };

        if section.headers.is_empty() {
            section.headers = line.split(',').map(|h| h.trim().to_string()).collect();
            return;
        }

        // data tokens are kept as-is; only the whole line was trimmed
        let mut values = line.split(',');
        let row: Row = section
            .headers
            .iter()
            .map(|h| (h.clone(), values.next().unwrap_or_default().to_string()))
            .collect();
        section.rows.push(row);
    }
}

/// Parse the full text of a simulation report.
///
/// Total over any input: malformed lines are dropped, short rows are padded
/// with empty strings and long rows are truncated to the header count.
#[tracing::instrument(level = "debug", skip(text), fields(bytes = text.len()))]
pub fn parse_report(text: &str) -> ReportDocument {
    let doc = text
        .split('\n')
        .fold(ParseState::default(), ParseState::step)
        .finish();
    debug!(
        sections = doc.sections.len(),
        has_timestamp = doc.timestamp.is_some(),
        "parsed report"
    );
    doc
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::{EnvFilter, FmtSubscriber};

    fn init_test_logging() {
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(
                EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| EnvFilter::new("info,simdash::report=trace")),
            )
            .with_test_writer()
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    }

    fn row(pairs: &[(&str, &str)]) -> Row {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn parses_summary_example() {
        init_test_logging();
        let doc = parse_report(
            "SUMMARY\nTotal_Cloudlets,Executed_Cloudlets\n100,95\nTimestamp,2024-06-01\n",
        );

        let summary = doc.section("SUMMARY").expect("SUMMARY section");
        assert_eq!(summary.headers, vec!["Total_Cloudlets", "Executed_Cloudlets"]);
        assert_eq!(
            summary.rows,
            vec![row(&[("Total_Cloudlets", "100"), ("Executed_Cloudlets", "95")])]
        );
        assert_eq!(doc.timestamp.as_deref(), Some("2024-06-01"));
    }

    #[test]
    fn k_data_lines_give_k_rows() {
        let mut text = String::from("VM_EXECUTION_DETAILS\nVM_ID,Execution_Time,Cloudlet_Count\n");
        for i in 0..7 {
            text.push_str(&format!("{},{}.5,{}\n", i, i * 10, i + 1));
        }
        let doc = parse_report(&text);
        let section = doc.section("VM_EXECUTION_DETAILS").unwrap();
        assert_eq!(section.rows.len(), 7);
        for r in &section.rows {
            let keys: Vec<&String> = r.keys().collect();
            assert_eq!(keys, vec!["VM_ID", "Execution_Time", "Cloudlet_Count"]);
        }
        assert_eq!(section.rows[3]["Execution_Time"], "30.5");
    }

    #[test]
    fn short_rows_are_padded_with_empty_strings() {
        let doc = parse_report("S\nA,B,C\n1,\n1,2\n");
        let rows = &doc.section("S").unwrap().rows;
        assert_eq!(rows[0], row(&[("A", "1"), ("B", ""), ("C", "")]));
        assert_eq!(rows[1], row(&[("A", "1"), ("B", "2"), ("C", "")]));
    }

    #[test]
    fn long_rows_drop_extra_fields() {
        let doc = parse_report("S\nA,B\n1,2,3,4\n");
        assert_eq!(doc.section("S").unwrap().rows, vec![row(&[("A", "1"), ("B", "2")])]);
    }

    #[test]
    fn header_tokens_are_trimmed_but_data_tokens_are_not() {
        let doc = parse_report("S\n A , B \n1, 2\n");
        let section = doc.section("S").unwrap();
        assert_eq!(section.headers, vec!["A", "B"]);
        assert_eq!(section.rows[0], row(&[("A", "1"), ("B", " 2")]));
    }

    #[test]
    fn timestamp_is_independent_of_position() {
        let before = parse_report("Timestamp,2024-01-01 10:00:00\nS\nA,B\n1,2\n");
        let inside = parse_report("S\nA,B\nTimestamp,2024-01-01 10:00:00\n1,2\n");
        let after = parse_report("S\nA,B\n1,2\n\nTimestamp,2024-01-01 10:00:00");
        for doc in [&before, &inside, &after] {
            assert_eq!(doc.timestamp.as_deref(), Some("2024-01-01 10:00:00"));
            assert_eq!(doc.section("S").unwrap().rows.len(), 1);
        }
    }

    #[test]
    fn last_timestamp_wins() {
        let doc = parse_report("Timestamp,first\nTimestamp,second\n");
        assert_eq!(doc.timestamp.as_deref(), Some("second"));
        assert!(doc.sections.is_empty());
    }

    #[test]
    fn blank_lines_do_not_reset_the_current_section() {
        let doc = parse_report("\n\nS\n\n   \nA,B\n\n1,2\n\r\n3,4\n\n");
        assert_eq!(doc.sections.len(), 1);
        let section = doc.section("S").unwrap();
        assert_eq!(section.headers, vec!["A", "B"]);
        assert_eq!(section.rows.len(), 2);
    }

    #[test]
    fn repeated_section_name_resets_that_section() {
        let doc = parse_report("S\nA,B\n1,2\n3,4\nT\nX,Y\n9,8\nS\n");
        assert_eq!(doc.sections.len(), 2);
        // reopened section keeps its original position
        let names: Vec<&String> = doc.sections.keys().collect();
        assert_eq!(names, vec!["S", "T"]);

        let s = doc.section("S").unwrap();
        assert!(s.headers.is_empty());
        assert!(s.rows.is_empty());
    }

    #[test]
    fn reopened_section_takes_new_headers() {
        let doc = parse_report("S\nA,B\n1,2\nS\nC,D\n5,6\n");
        let s = doc.section("S").unwrap();
        assert_eq!(s.headers, vec!["C", "D"]);
        assert_eq!(s.rows, vec![row(&[("C", "5"), ("D", "6")])]);
    }

    #[test]
    fn byte_order_mark_is_not_part_of_the_section_name() {
        let doc = parse_report("\u{feff}SIMULATION_RESULTS\r\nCURRENT_VM_UTILIZATION\r\nVM_ID,CPU_Utilization\r\n0,50\r\n");
        let names: Vec<&str> = doc.sections.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["SIMULATION_RESULTS", "CURRENT_VM_UTILIZATION"]);
        assert_eq!(doc.section("CURRENT_VM_UTILIZATION").unwrap().rows[0]["CPU_Utilization"], "50");
    }

    #[test]
    fn duplicate_header_keeps_first_position_and_last_value() {
        let doc = parse_report("S\nA,B,A\n1,2,3\n");
        let s = doc.section("S").unwrap();
        assert_eq!(s.headers, vec!["A", "B", "A"]);
        assert_eq!(s.rows, vec![row(&[("A", "3"), ("B", "2")])]);
        let keys: Vec<&String> = s.rows[0].keys().collect();
        assert_eq!(keys, vec!["A", "B"]);

        let doc = parse_report("S\nA,A\n1,2\n");
        assert_eq!(doc.section("S").unwrap().rows, vec![row(&[("A", "2")])]);
    }

    #[test]
    fn comma_line_before_any_section_is_discarded() {
        let doc = parse_report("123,456\nS\nA,B\n1,2\n");
        assert_eq!(doc.sections.len(), 1);
        let s = doc.section("S").unwrap();
        assert_eq!(s.headers, vec!["A", "B"]);
        assert_eq!(s.rows.len(), 1);

        let only_data = parse_report("123,456\n789,10\n");
        assert!(only_data.sections.is_empty());
        assert!(only_data.timestamp.is_none());
    }

    #[test]
    fn digit_only_line_opens_a_section() {
        let doc = parse_report("S\nA,B\n1,2\n42\n3,4\n");
        // "42" opens a new section and "3,4" becomes its header line
        assert_eq!(doc.section("S").unwrap().rows.len(), 1);
        assert_eq!(doc.section("42").unwrap().headers, vec!["3", "4"]);
    }

    #[test]
    fn sections_keep_first_appearance_order() {
        let doc = parse_report("ZETA\nA,B\nALPHA\nC,D\nMIDDLE\n");
        let names: Vec<&String> = doc.sections.keys().collect();
        assert_eq!(names, vec!["ZETA", "ALPHA", "MIDDLE"]);
    }

    #[test]
    fn empty_input_gives_empty_document() {
        assert_eq!(parse_report(""), ReportDocument::default());
        assert_eq!(parse_report("\n \n"), ReportDocument::default());
    }

    #[test]
    fn parses_full_simulation_report() {
        init_test_logging();
        let text = "SIMULATION_RESULTS\n\
Timestamp,2025-02-11 09:15:42\n\
\n\
CLOUDLET_EXECUTION_SUMMARY\n\
Total_Cloudlets,Executed_Cloudlets,Average_Execution_Time\n\
20,20,41.3\n\
\n\
VM_EXECUTION_DETAILS\n\
VM_ID,Execution_Time,Cloudlet_Count\n\
0,48.1,4\n\
1,47.9,4\n\
\n\
AUTO_SCALING_STATISTICS\n\
VM_ID,Original_PEs,Final_PEs,Scaling_Events\n\
0,2,3,1\n\
1,2,4,2\n\
\n\
DETAILED_SCALING_EVENTS\n\
Time,VM_ID,CPU_Utilization,Old_PEs,New_PEs,Old_Host,New_Host\n\
12,1,74.2,2,3,0,0\n\
19,0,78.8,2,3,0,1\n\
\n\
CURRENT_VM_UTILIZATION\n\
VM_ID,CPU_Utilization\n\
0,62.5\n\
1,58\n";
        let doc = parse_report(text);

        let names: Vec<&str> = doc.sections.keys().map(String::as_str).collect();
        assert_eq!(
            names,
            vec![
                "SIMULATION_RESULTS",
                "CLOUDLET_EXECUTION_SUMMARY",
                "VM_EXECUTION_DETAILS",
                "AUTO_SCALING_STATISTICS",
                "DETAILED_SCALING_EVENTS",
                "CURRENT_VM_UTILIZATION",
            ]
        );
        assert!(doc.section("SIMULATION_RESULTS").unwrap().headers.is_empty());
        assert_eq!(doc.timestamp.as_deref(), Some("2025-02-11 09:15:42"));
        assert!(doc.generated_at().is_some());
        assert_eq!(doc.section("DETAILED_SCALING_EVENTS").unwrap().rows[1]["New_Host"], "1");
    }
}
