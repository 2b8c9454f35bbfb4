//! Submission validation for new delivery records.
//!
//! # Responsibility
//! - Check raw form input before it becomes a `DeliveryRecord`.
//! - Report the first failing field instead of coercing bad input.
//!
//! # Invariants
//! - Required fields are checked in order: recipient, origin,
//!   expected_date, status.
//! - An unknown status is rejected, never mapped to a default.
//! - Validation never touches the store.

use crate::model::delivery::{DeliveryId, DeliveryRecord, DeliveryStatus};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMATS: [&str; 2] = ["%H:%M", "%H:%M:%S"];

/// Validation failure for a delivery submission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    /// A required field is empty or absent.
    #[error("missing required field `{field}`")]
    MissingField { field: &'static str },
    /// Status is not one of the known delivery statuses.
    #[error("invalid status `{value}`; expected pending|delivered|delayed")]
    InvalidStatus { value: String },
    #[error("invalid expected date `{value}`; expected YYYY-MM-DD")]
    InvalidDate { value: String },
    #[error("invalid time `{value}`; expected HH:MM")]
    InvalidTime { value: String },
}

/// Raw submission as entered in the registration form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliverySubmission {
    pub recipient: String,
    pub origin: String,
    pub expected_date: String,
    pub status: String,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Submission that passed validation, with typed fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidSubmission {
    pub recipient: String,
    pub origin: String,
    pub expected_date: NaiveDate,
    pub status: DeliveryStatus,
    pub time: Option<NaiveTime>,
    pub notes: Option<String>,
}

impl DeliverySubmission {
    /// Creates a submission pre-filled with status `pending`, matching the
    /// form default.
    pub fn new(
        recipient: impl Into<String>,
        origin: impl Into<String>,
        expected_date: impl Into<String>,
    ) -> Self {
        Self {
            recipient: recipient.into(),
            origin: origin.into(),
            expected_date: expected_date.into(),
            status: DeliveryStatus::Pending.as_str().to_string(),
            time: None,
            notes: None,
        }
    }

    /// Validates the submission and returns typed, trimmed values.
    ///
    /// # Errors
    /// - `MissingField` when a required field is blank.
    /// - `InvalidDate` / `InvalidStatus` / `InvalidTime` for undecodable values.
    pub fn validate(&self) -> Result<ValidSubmission, SubmissionError> {
        let recipient = required("recipient", &self.recipient)?;
        let origin = required("origin", &self.origin)?;
        let date_text = required("expected_date", &self.expected_date)?;
        let expected_date = NaiveDate::parse_from_str(date_text, DATE_FORMAT).map_err(|_| {
            SubmissionError::InvalidDate {
                value: date_text.to_string(),
            }
        })?;
        let status_text = required("status", &self.status)?;
        let status =
            DeliveryStatus::parse(status_text).ok_or_else(|| SubmissionError::InvalidStatus {
                value: status_text.to_string(),
            })?;
        let time = match optional(self.time.as_deref()) {
            Some(value) => Some(parse_time(value)?),
            None => None,
        };

        Ok(ValidSubmission {
            recipient: recipient.to_string(),
            origin: origin.to_string(),
            expected_date,
            status,
            time,
            notes: optional(self.notes.as_deref()).map(str::to_string),
        })
    }
}

impl ValidSubmission {
    /// Builds a record with a generated ID.
    pub fn into_record(self) -> DeliveryRecord {
        self.into_record_with_id(DeliveryId::new_v4())
    }

    /// Builds a record with a caller-provided ID.
    pub fn into_record_with_id(self, id: DeliveryId) -> DeliveryRecord {
        let mut record = DeliveryRecord::with_id(id, self.recipient, self.origin, self.expected_date)
            .with_status(self.status);
        record.time = self.time;
        record.notes = self.notes;
        record
    }
}

fn required<'a>(field: &'static str, value: &'a str) -> Result<&'a str, SubmissionError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(SubmissionError::MissingField { field });
    }
    Ok(trimmed)
}

fn optional(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

fn parse_time(value: &str) -> Result<NaiveTime, SubmissionError> {
    TIME_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(value, format).ok())
        .ok_or_else(|| SubmissionError::InvalidTime {
            value: value.to_string(),
        })
}
