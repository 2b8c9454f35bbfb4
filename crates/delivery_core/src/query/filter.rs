//! Multi-criteria delivery filter.
//!
//! # Responsibility
//! - Match records by free text, status and expected date.
//! - Keep malformed criteria non-fatal: they match nothing instead of failing.
//!
//! # Invariants
//! - A record passes only when all three predicates hold.
//! - Output preserves input order; input is never mutated.
//! - Search text is matched literally, without trimming.

use crate::model::delivery::{DeliveryRecord, DeliveryStatus};
use chrono::NaiveDate;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Status criterion of a history query.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StatusFilter {
    /// Matches every status.
    #[default]
    Any,
    /// Matches exactly this status.
    Only(DeliveryStatus),
    /// Code that does not name a status; matches nothing.
    Unknown(String),
}

impl StatusFilter {
    /// Decodes a status selector from view input.
    ///
    /// Empty, `all` and `any` select every status.
    pub fn parse(value: &str) -> Self {
        let trimmed = value.trim();
        if trimmed.is_empty()
            || trimmed.eq_ignore_ascii_case("all")
            || trimmed.eq_ignore_ascii_case("any")
        {
            return Self::Any;
        }
        match DeliveryStatus::parse(trimmed) {
            Some(status) => Self::Only(status),
            None => Self::Unknown(trimmed.to_string()),
        }
    }

    fn matches(&self, status: DeliveryStatus) -> bool {
        match self {
            Self::Any => true,
            Self::Only(expected) => *expected == status,
            Self::Unknown(_) => false,
        }
    }
}

/// Date criterion of a history query.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DateFilter {
    #[default]
    Unset,
    /// Matches records expected on this exact day.
    On(NaiveDate),
    /// Input that is not a `YYYY-MM-DD` date; matches nothing.
    Invalid(String),
}

impl DateFilter {
    /// Decodes a date selector from view input. Blank input means unset.
    pub fn parse(value: &str) -> Self {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Self::Unset;
        }
        match NaiveDate::parse_from_str(trimmed, DATE_FORMAT) {
            Ok(date) => Self::On(date),
            Err(_) => Self::Invalid(trimmed.to_string()),
        }
    }

    fn matches(&self, date: NaiveDate) -> bool {
        match self {
            Self::Unset => true,
            Self::On(expected) => *expected == date,
            Self::Invalid(_) => false,
        }
    }
}

/// Filter criteria for the delivery history view.
///
/// The default value matches every record.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DeliveryFilter {
    /// Case-insensitive substring over recipient or origin.
    pub search_text: String,
    pub status: StatusFilter,
    pub date: DateFilter,
}

impl DeliveryFilter {
    /// Builds criteria from raw view inputs.
    pub fn from_raw(search_text: impl Into<String>, status: &str, date: &str) -> Self {
        Self {
            search_text: search_text.into(),
            status: StatusFilter::parse(status),
            date: DateFilter::parse(date),
        }
    }

    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    pub fn with_status(mut self, status: DeliveryStatus) -> Self {
        self.status = StatusFilter::Only(status);
        self
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = DateFilter::On(date);
        self
    }

    /// Returns whether any criterion narrows the result.
    pub fn is_active(&self) -> bool {
        !self.search_text.is_empty()
            || self.status != StatusFilter::Any
            || self.date != DateFilter::Unset
    }

    /// Resets every criterion to its match-all default.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Evaluates all criteria against one record.
    pub fn matches(&self, record: &DeliveryRecord) -> bool {
        self.passes(&self.search_text.to_lowercase(), record)
    }

    fn passes(&self, needle: &str, record: &DeliveryRecord) -> bool {
        self.status.matches(record.status)
            && self.date.matches(record.expected_date)
            && matches_text(needle, record)
    }
}

/// Returns records passing `criteria`, in input order.
pub fn filter(records: &[DeliveryRecord], criteria: &DeliveryFilter) -> Vec<DeliveryRecord> {
    filter_refs(records, criteria)
        .into_iter()
        .cloned()
        .collect()
}

/// Borrowing variant of [`filter`].
pub fn filter_refs<'a>(
    records: &'a [DeliveryRecord],
    criteria: &DeliveryFilter,
) -> Vec<&'a DeliveryRecord> {
    let needle = criteria.search_text.to_lowercase();
    records
        .iter()
        .filter(|record| criteria.passes(&needle, record))
        .collect()
}

/// Human-readable result count for an active filter.
pub fn result_count_label(count: usize) -> String {
    if count == 1 {
        "1 result found".to_string()
    } else {
        format!("{count} results found")
    }
}

fn matches_text(needle: &str, record: &DeliveryRecord) -> bool {
    if needle.is_empty() {
        return true;
    }
    record.recipient.to_lowercase().contains(needle)
        || record.origin.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::{result_count_label, DateFilter, DeliveryFilter, StatusFilter};
    use crate::model::delivery::DeliveryStatus;
    use chrono::NaiveDate;

    #[test]
    fn status_filter_parse_handles_all_and_unknown() {
        assert_eq!(StatusFilter::parse("all"), StatusFilter::Any);
        assert_eq!(StatusFilter::parse(" ANY "), StatusFilter::Any);
        assert_eq!(StatusFilter::parse(""), StatusFilter::Any);
        assert_eq!(
            StatusFilter::parse("entregue"),
            StatusFilter::Only(DeliveryStatus::Delivered)
        );
        assert_eq!(
            StatusFilter::parse("shipped"),
            StatusFilter::Unknown("shipped".to_string())
        );
    }

    #[test]
    fn date_filter_parse_marks_malformed_input() {
        assert_eq!(DateFilter::parse("  "), DateFilter::Unset);
        assert_eq!(
            DateFilter::parse("2025-11-15"),
            DateFilter::On(NaiveDate::from_ymd_opt(2025, 11, 15).unwrap())
        );
        assert_eq!(
            DateFilter::parse("15/11/2025"),
            DateFilter::Invalid("15/11/2025".to_string())
        );
    }

    #[test]
    fn is_active_and_clear() {
        let mut criteria = DeliveryFilter::default();
        assert!(!criteria.is_active());

        criteria = criteria.with_search(" ");
        assert!(criteria.is_active());

        criteria = criteria.with_status(DeliveryStatus::Delayed);
        criteria.clear();
        assert_eq!(criteria, DeliveryFilter::default());
    }

    #[test]
    fn result_count_label_pluralizes() {
        assert_eq!(result_count_label(0), "0 results found");
        assert_eq!(result_count_label(1), "1 result found");
        assert_eq!(result_count_label(6), "6 results found");
    }
}
