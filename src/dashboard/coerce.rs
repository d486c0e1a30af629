// src/dashboard/coerce.rs
//
// Best-effort numeric coercion of report fields. The report carries numbers
// as loosely formatted text ("41.3", " 2", "74.2%"), so these read the
// leading numeric part and ignore the rest.

/// Leading integer of `raw` after trimming: `"12.7"` → 12, `"-3 PEs"` → -3.
pub fn leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim();
    let sign_len = usize::from(s.starts_with(['+', '-']));
    let digits = s[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits == 0 {
        return None;
    }
    s[..sign_len + digits].parse().ok()
}

/// Leading decimal number of `raw` after trimming: `"74.25%"` → 74.25.
pub fn leading_float(raw: &str) -> Option<f64> {
    let s = raw.trim();
    let candidate_len = s
        .bytes()
        .take_while(|b| b.is_ascii_digit() || matches!(*b, b'+' | b'-' | b'.' | b'e' | b'E'))
        .count();

    // longest prefix that still parses
    (1..=candidate_len)
        .rev()
        .find_map(|end| s[..end].parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

/// Display value for a metric card: the trimmed text, or `-` when empty.
pub fn display_or_dash(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => "-".to_string(),
    }
}
