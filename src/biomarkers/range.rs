use crate::config::EngineConfig;
use crate::models::ReferenceRange;

/// Parse a free-text reference range with the default open-ended factor.
///
/// Supported shapes, checked in this order on the trimmed text:
/// - `"a-b"` → `(a, b)`, split on the first `-`
/// - `"<b"` → `(0, b)`
/// - `">a"` → `(a, a * 2)`; the upper bound is a display heuristic only
///
/// Anything else yields `None`. Negative lower bounds (`"-5--2"`) are not
/// supported because the split happens on the first `-`.
pub fn parse_range(text: &str) -> Option<ReferenceRange> {
    parse_range_with(text, &EngineConfig::default())
}

pub fn parse_range_with(text: &str, config: &EngineConfig) -> Option<ReferenceRange> {
    let text = text.trim();

    if let Some((low, high)) = text.split_once('-') {
        return Some(ReferenceRange {
            min: parse_bound(low)?,
            max: parse_bound(high)?,
        });
    }

    if let Some(rest) = text.strip_prefix('<') {
        return Some(ReferenceRange {
            min: 0.0,
            max: parse_bound(rest)?,
        });
    }

    if let Some(rest) = text.strip_prefix('>') {
        let low = parse_bound(rest)?;
        return Some(ReferenceRange {
            min: low,
            max: low * config.open_ended_upper_factor,
        });
    }

    None
}

fn parse_bound(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(min: f64, max: f64) -> Option<ReferenceRange> {
        Some(ReferenceRange { min, max })
    }

    #[test]
    fn closed_range() {
        assert_eq!(parse_range("12.0-15.5"), range(12.0, 15.5));
        assert_eq!(parse_range(" 70 - 99 "), range(70.0, 99.0));
    }

    #[test]
    fn less_than() {
        assert_eq!(parse_range("<200"), range(0.0, 200.0));
        assert_eq!(parse_range("< 5.7"), range(0.0, 5.7));
    }

    #[test]
    fn greater_than_doubles_for_upper_bound() {
        assert_eq!(parse_range(">40"), range(40.0, 80.0));
        assert_eq!(parse_range(" > 60 "), range(60.0, 120.0));
    }

    #[test]
    fn greater_than_uses_configured_factor() {
        let config = EngineConfig {
            open_ended_upper_factor: 1.5,
            ..Default::default()
        };
        assert_eq!(parse_range_with(">40", &config), range(40.0, 60.0));
    }

    #[test]
    fn free_text_is_none() {
        assert_eq!(parse_range("not a range"), None);
        assert_eq!(parse_range(""), None);
        assert_eq!(parse_range("negative"), None);
        assert_eq!(parse_range("<"), None);
        assert_eq!(parse_range(">high"), None);
    }

    #[test]
    fn half_parsed_hyphen_range_is_none() {
        assert_eq!(parse_range("12-"), None);
        assert_eq!(parse_range("low-15"), None);
    }

    #[test]
    fn negative_lower_bound_is_not_supported() {
        // First '-' is the sign of the lower bound, leaving an empty left side.
        assert_eq!(parse_range("-5--2"), None);
        assert_eq!(parse_range("-3-3"), None);
    }

    #[test]
    fn hyphen_takes_precedence_over_comparators() {
        // "<-5" contains '-', so the comparator branch is never reached.
        assert_eq!(parse_range("<-5"), None);
    }

    #[test]
    fn inverted_bounds_are_returned_as_written() {
        assert_eq!(parse_range("15-12"), range(15.0, 12.0));
    }
}
