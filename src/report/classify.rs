// src/report/classify.rs

/// Prefix of the document-level generation time line.
pub const TIMESTAMP_PREFIX: &str = "Timestamp,";

/// What a single trimmed report line means to the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// A line with no lowercase letters and no comma opens a section.
    ///
    /// This is a heuristic: a line made only of digits or punctuation
    /// (e.g. `12345`) also qualifies, and is treated as a section name.
    SectionHeader(&'a str),
    /// `Timestamp,<value>`; carries the trimmed first field after the comma.
    TimestampLine(&'a str),
    /// A comma line; the parser decides header vs data from its state.
    HeaderOrDataLine(&'a str),
    Unrecognized,
}

/// Classify one line. The caller trims it and skips blanks first.
///
/// Checks run in order: section header, timestamp, header/data.
pub fn classify_line(line: &str) -> LineKind<'_> {
    let has_comma = line.contains(',');

    if !has_comma && line.to_uppercase() == line {
        return LineKind::SectionHeader(line);
    }

    if let Some(rest) = line.strip_prefix(TIMESTAMP_PREFIX) {
        let value = rest.split(',').next().unwrap_or_default().trim();
        return LineKind::TimestampLine(value);
    }

    // "Timestamps,..." and friends are neither timestamp nor data
    if has_comma && !line.starts_with("Timestamp") {
        return LineKind::HeaderOrDataLine(line);
    }

    LineKind::Unrecognized
}
