/// Canonical grouping key for a raw test name: trimmed, lower-cased.
///
/// Returns `None` when nothing is left after trimming; such results cannot
/// be grouped.
pub fn canonical_name(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_lowercase())
}

/// Whether two raw names refer to the same biomarker.
pub fn same_biomarker(a: &str, b: &str) -> bool {
    match (canonical_name(a), canonical_name(b)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}
