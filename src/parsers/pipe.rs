//! Pipe-separated record parsing.
//!
//! Several validator queries print their findings as `|`-separated rows so
//! that structured payloads survive the text boundary:
//!
//! ```text
//! /path/to/file.rb|12|do_thing|param,option,return
//! ```
//!
//! Rows with fewer fields than requested are skipped silently.

use super::OffenseCandidate;

/// Split one line into exactly `min_fields`-or-more pipe fields.
///
/// Returns `None` when the line has too few fields to be a record.
pub fn fields(line: &str, min_fields: usize) -> Option<Vec<&str>> {
    let parts: Vec<&str> = line.split('|').map(str::trim).collect();
    if parts.len() < min_fields {
        return None;
    }
    Some(parts)
}

/// Parse `location|line|method` rows, handing any further fields to
/// `finish` so each family can interpret its own payload.
pub fn method_rows(
    text: &str,
    min_fields: usize,
    finish: impl Fn(&mut OffenseCandidate, &[&str]),
) -> Vec<OffenseCandidate> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| {
            let parts = fields(line, min_fields)?;
            let mut candidate = OffenseCandidate {
                location: parts[0].to_string(),
                line: parts[1].parse().unwrap_or(0),
                method_name: Some(parts[2].to_string()),
                ..Default::default()
            };
            finish(&mut candidate, &parts);
            Some(candidate)
        })
        .collect()
}
