//! Tenure statistics derived from term records
//!
//! Computes per-record tenure lengths, the average years in office, and the
//! histogram that backs the dashboard chart. All aggregation runs over the
//! copy read back from the document store, never the raw fetch result.

use tracing::warn;

use crate::data::{parse_tenure_with_year, TermRecord};
use crate::search::search_by_name;

/// Computes the tenure length in years for each record
///
/// Records whose expression fails to parse are skipped with a warning, as
/// are records where either parsed year is zero (the dataset's marker for an
/// unknown year). Malformed input therefore never fails the run.
pub fn tenure_lengths(records: &[TermRecord], current_year: i32) -> Vec<i32> {
    records
        .iter()
        .filter_map(|record| {
            match parse_tenure_with_year(&record.years_in_office, current_year) {
                Ok(range) if range.has_known_years() => Some(range.length()),
                Ok(_) => None,
                Err(err) => {
                    warn!(
                        name = %record.name,
                        expression = %record.years_in_office,
                        %err,
                        "skipping unparseable tenure expression"
                    );
                    None
                }
            }
        })
        .collect()
}

/// Arithmetic mean of the given tenure lengths
///
/// Returns `0.0` for an empty input rather than dividing by zero.
pub fn average_tenure(lengths: &[i32]) -> f64 {
    if lengths.is_empty() {
        return 0.0;
    }
    lengths.iter().sum::<i32>() as f64 / lengths.len() as f64
}

/// Frequency distribution of tenure lengths at one-year bucket width
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Histogram {
    /// (tenure length, count) pairs covering min..=max of the input
    pub buckets: Vec<(i32, u64)>,
}

impl Histogram {
    /// Builds a histogram spanning the observed min..=max lengths
    ///
    /// An empty input produces an empty histogram (no buckets), which the
    /// renderers display as "no data" rather than an error.
    pub fn from_lengths(lengths: &[i32]) -> Self {
        let (Some(&min), Some(&max)) = (lengths.iter().min(), lengths.iter().max()) else {
            return Self::default();
        };

        let mut buckets: Vec<(i32, u64)> = (min..=max).map(|length| (length, 0)).collect();
        for &length in lengths {
            buckets[(length - min) as usize].1 += 1;
        }

        Self { buckets }
    }

    /// Whether the histogram has no buckets at all
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Total number of counted records
    pub fn total(&self) -> u64 {
        self.buckets.iter().map(|(_, count)| count).sum()
    }

    /// Largest single bucket count, used to scale rendered bars
    pub fn max_count(&self) -> u64 {
        self.buckets
            .iter()
            .map(|(_, count)| *count)
            .max()
            .unwrap_or(0)
    }
}

/// Everything the renderers need from one run
#[derive(Debug, Clone)]
pub struct TermReport {
    /// The records the statistics were computed from
    pub records: Vec<TermRecord>,
    /// Years in office per counted record
    pub tenure_lengths: Vec<i32>,
    /// Mean years in office across counted records
    pub average: f64,
    /// Distribution of years in office
    pub histogram: Histogram,
    /// The active search query
    pub query: String,
    /// Records matching the query, in input order
    pub matches: Vec<TermRecord>,
}

impl TermReport {
    /// Derives the full report from a record collection
    ///
    /// # Arguments
    /// * `records` - Term records, typically read back from the store
    /// * `query` - Name fragment to search for
    /// * `current_year` - Calendar year substituted for ongoing terms
    pub fn from_records(records: Vec<TermRecord>, query: &str, current_year: i32) -> Self {
        let lengths = tenure_lengths(&records, current_year);
        let average = average_tenure(&lengths);
        let histogram = Histogram::from_lengths(&lengths);
        let matches = search_by_name(&records, query)
            .into_iter()
            .cloned()
            .collect();

        Self {
            records,
            tenure_lengths: lengths,
            average,
            histogram,
            query: query.to_string(),
            matches,
        }
    }
}
