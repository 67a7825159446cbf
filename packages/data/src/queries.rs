//! Read-only queries over [`AccidentData`].

use std::collections::{BTreeMap, BTreeSet};

use accident_map_accident_models::{AccidentSeverity, SeverityCount};

use crate::AccidentData;

/// Distinct LGA names from the severity table, in first-seen order.
#[must_use]
pub fn lga_names(data: &AccidentData) -> Vec<&str> {
    let mut seen = BTreeSet::new();
    data.severity_records()
        .iter()
        .map(|r| r.lga_name.as_str())
        .filter(|name| seen.insert(*name))
        .collect()
}

/// Sums accident counts per severity code for one LGA.
///
/// Matching is exact. Results are ordered by ascending severity code. An
/// unknown LGA yields an empty breakdown. Sums saturate at `u64::MAX`.
#[must_use]
pub fn severity_breakdown(data: &AccidentData, lga_name: &str) -> Vec<SeverityCount> {
    let mut totals: BTreeMap<i64, u64> = BTreeMap::new();

    for record in data
        .severity_records()
        .iter()
        .filter(|r| r.lga_name == lga_name)
    {
        let total = totals.entry(record.severity).or_default();
        *total = total.saturating_add(record.accident_count);
    }

    log::debug!(
        "Severity breakdown for {lga_name:?}: {} severity levels",
        totals.len()
    );

    totals
        .into_iter()
        .map(|(severity, accident_count)| SeverityCount {
            severity,
            label: AccidentSeverity::label_for_code(severity),
            accident_count,
        })
        .collect()
}
