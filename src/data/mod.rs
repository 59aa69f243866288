//! Core data models for the presidential term dataset
//!
//! This module contains the typed representation of the records served by the
//! presidents API, along with the tenure parsing and fetch client built on
//! top of them.

pub mod presidents;
pub mod terms;

pub use presidents::{FetchError, PresidentsClient, DEFAULT_API_URL};
pub use terms::{parse_tenure, parse_tenure_with_year, TenureParseError};

use serde::{Deserialize, Serialize};

/// A single presidential term as served by the API
///
/// `years_in_office` keeps the wire form of the tenure-range expression
/// (e.g. "1933-1945" or "2021-present"); parsing into years happens via
/// [`terms::parse_tenure`]. Records are immutable once fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermRecord {
    /// Full name of the president
    pub name: String,
    /// Tenure-range expression, e.g. "1789-1797" or "2021-present"
    #[serde(rename = "yearsInOffice")]
    pub years_in_office: String,
}

/// Start and end of a single term, in calendar years
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenureRange {
    /// First calendar year of the term
    pub start_year: i32,
    /// Last calendar year of the term (the current year for ongoing terms)
    pub end_year: i32,
}

impl TenureRange {
    /// Length of the term in whole years
    pub fn length(&self) -> i32 {
        self.end_year - self.start_year
    }

    /// Whether both years carry real values
    ///
    /// The upstream dataset uses zero as a stand-in for an unknown year;
    /// such ranges are excluded from aggregation.
    pub fn has_known_years(&self) -> bool {
        self.start_year != 0 && self.end_year != 0
    }
}
