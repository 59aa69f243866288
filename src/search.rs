//! Name search over term records

use crate::data::TermRecord;

/// Returns the records whose name contains `query`, ignoring case.
///
/// Input ordering is preserved and an empty query matches every record.
pub fn search_by_name<'a>(records: &'a [TermRecord], query: &str) -> Vec<&'a TermRecord> {
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|record| record.name.to_lowercase().contains(&needle))
        .collect()
}
