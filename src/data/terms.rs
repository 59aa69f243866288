//! Tenure-range expression parsing
//!
//! Parses the free-form term strings from the presidents API ("1933-1945",
//! "1841", "2021-present") into start/end year pairs. The core parser is pure
//! and takes the current year as a parameter; only the convenience wrapper
//! reads the wall clock.

use chrono::{Datelike, Local};
use thiserror::Error;

use super::TenureRange;

/// Marker the API uses for a term that has not ended
const ONGOING_MARKER: &str = "present";

/// Errors that can occur when parsing a tenure-range expression
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TenureParseError {
    /// The expression was empty or all whitespace
    #[error("empty tenure expression")]
    Empty,

    /// A year segment was not a well-formed integer
    #[error("invalid year segment '{0}'")]
    InvalidYear(String),

    /// The parsed start year came after the end year
    #[error("reversed tenure range: {start}-{end}")]
    Reversed {
        /// Parsed start year
        start: i32,
        /// Parsed end year
        end: i32,
    },
}

/// Parses a tenure-range expression against an explicit current year.
///
/// Rules, in order:
/// - An expression containing "present" takes the segment before the first
///   `-` as the start year and the given `current_year` as the end year.
/// - Otherwise the expression splits on `-`: a single segment means a
///   one-year term (start == end); with two or more segments the first two
///   are the start and end years (any further segments are ignored).
///
/// # Arguments
/// * `expression` - The tenure-range expression to parse
/// * `current_year` - Calendar year substituted for ongoing terms
///
/// # Returns
/// * `Ok(TenureRange)` with `start_year <= end_year`
/// * `Err(TenureParseError)` for empty input, malformed year segments, or a
///   reversed range
pub fn parse_tenure_with_year(
    expression: &str,
    current_year: i32,
) -> Result<TenureRange, TenureParseError> {
    let expression = expression.trim();
    if expression.is_empty() {
        return Err(TenureParseError::Empty);
    }

    let mut segments = expression.split('-');
    let first = segments.next().unwrap_or_default();

    let (start_year, end_year) = if expression.contains(ONGOING_MARKER) {
        (parse_year(first)?, current_year)
    } else {
        let start = parse_year(first)?;
        let end = match segments.next() {
            Some(second) => parse_year(second)?,
            None => start,
        };
        (start, end)
    };

    if start_year > end_year {
        return Err(TenureParseError::Reversed {
            start: start_year,
            end: end_year,
        });
    }

    Ok(TenureRange {
        start_year,
        end_year,
    })
}

/// Parses a tenure-range expression using the local calendar year for
/// ongoing terms.
pub fn parse_tenure(expression: &str) -> Result<TenureRange, TenureParseError> {
    parse_tenure_with_year(expression, Local::now().year())
}

/// Parses a single year segment into an integer
fn parse_year(segment: &str) -> Result<i32, TenureParseError> {
    segment
        .trim()
        .parse::<i32>()
        .map_err(|_| TenureParseError::InvalidYear(segment.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_YEAR: i32 = 2026;

    #[test]
    fn test_parse_two_year_range() {
        let range = parse_tenure_with_year("1933-1945", TEST_YEAR).unwrap();
        assert_eq!(range.start_year, 1933);
        assert_eq!(range.end_year, 1945);
    }

    #[test]
    fn test_parse_single_year_is_start_and_end() {
        let range = parse_tenure_with_year("1841", TEST_YEAR).unwrap();
        assert_eq!(range.start_year, 1841);
        assert_eq!(range.end_year, 1841);
    }

    #[test]
    fn test_parse_present_uses_current_year() {
        let range = parse_tenure_with_year("2021-present", TEST_YEAR).unwrap();
        assert_eq!(range.start_year, 2021);
        assert_eq!(range.end_year, TEST_YEAR);
    }

    #[test]
    fn test_parse_extra_segments_are_ignored() {
        // Only the first two segments count
        let range = parse_tenure_with_year("1885-1889-1893", TEST_YEAR).unwrap();
        assert_eq!(range.start_year, 1885);
        assert_eq!(range.end_year, 1889);
    }

    #[test]
    fn test_parse_surrounding_whitespace_is_tolerated() {
        let range = parse_tenure_with_year("  1789-1797 ", TEST_YEAR).unwrap();
        assert_eq!(range.start_year, 1789);
        assert_eq!(range.end_year, 1797);
    }

    #[test]
    fn test_parse_empty_expression_fails() {
        assert_eq!(
            parse_tenure_with_year("", TEST_YEAR),
            Err(TenureParseError::Empty)
        );
        assert_eq!(
            parse_tenure_with_year("   ", TEST_YEAR),
            Err(TenureParseError::Empty)
        );
    }

    #[test]
    fn test_parse_non_numeric_segment_fails() {
        assert_eq!(
            parse_tenure_with_year("abc-1945", TEST_YEAR),
            Err(TenureParseError::InvalidYear("abc".to_string()))
        );
        assert_eq!(
            parse_tenure_with_year("1933-abc", TEST_YEAR),
            Err(TenureParseError::InvalidYear("abc".to_string()))
        );
    }

    #[test]
    fn test_parse_trailing_separator_fails() {
        assert_eq!(
            parse_tenure_with_year("1933-", TEST_YEAR),
            Err(TenureParseError::InvalidYear(String::new()))
        );
    }

    #[test]
    fn test_parse_bare_present_fails() {
        // "present" with no leading year has no start to anchor on
        assert_eq!(
            parse_tenure_with_year("present", TEST_YEAR),
            Err(TenureParseError::InvalidYear("present".to_string()))
        );
    }

    #[test]
    fn test_parse_reversed_range_fails() {
        assert_eq!(
            parse_tenure_with_year("1945-1933", TEST_YEAR),
            Err(TenureParseError::Reversed {
                start: 1945,
                end: 1933
            })
        );
    }

    #[test]
    fn test_parse_present_start_after_current_year_fails() {
        assert_eq!(
            parse_tenure_with_year("2030-present", TEST_YEAR),
            Err(TenureParseError::Reversed {
                start: 2030,
                end: TEST_YEAR
            })
        );
    }

    #[test]
    fn test_parse_tenure_wrapper_resolves_present() {
        let range = parse_tenure("2021-present").unwrap();
        assert_eq!(range.start_year, 2021);
        assert!(range.end_year >= 2021);
    }
}
