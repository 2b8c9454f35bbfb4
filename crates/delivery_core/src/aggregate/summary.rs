//! Status counters and recent-delivery selection.
//!
//! # Invariants
//! - `by_status` always holds one entry per `DeliveryStatus`.
//! - `total` equals the input length and the sum of `by_status`.

use crate::model::delivery::{DeliveryRecord, DeliveryStatus};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Dashboard counters over a record snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeliverySummary {
    pub total: usize,
    pub by_status: BTreeMap<DeliveryStatus, usize>,
}

impl DeliverySummary {
    /// Count for one status; zero when no record has it.
    pub fn count(&self, status: DeliveryStatus) -> usize {
        self.by_status.get(&status).copied().unwrap_or(0)
    }
}

impl Default for DeliverySummary {
    fn default() -> Self {
        Self {
            total: 0,
            by_status: DeliveryStatus::ALL.into_iter().map(|s| (s, 0)).collect(),
        }
    }
}

/// Counts records in a single pass.
pub fn summarize(records: &[DeliveryRecord]) -> DeliverySummary {
    let mut summary = DeliverySummary::default();
    for record in records {
        summary.total += 1;
        *summary.by_status.entry(record.status).or_insert(0) += 1;
    }
    summary
}

/// Returns up to `limit` records, newest expected date first.
///
/// Within one day, later times come first and records without a time come
/// last. Ties keep input order.
pub fn recent(records: &[DeliveryRecord], limit: usize) -> Vec<DeliveryRecord> {
    let mut ordered: Vec<&DeliveryRecord> = records.iter().collect();
    ordered.sort_by(|a, b| {
        b.expected_date
            .cmp(&a.expected_date)
            .then_with(|| match (a.time, b.time) {
                (Some(left), Some(right)) => right.cmp(&left),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            })
    });
    ordered.into_iter().take(limit).cloned().collect()
}
