//! Delivery record model.
//!
//! # Responsibility
//! - Define the record shared by dashboard and history projections.
//! - Provide the canonical status codes used on the wire and in legacy data.
//!
//! # Invariants
//! - `id` is stable and never reassigned after construction.
//! - `set_status` is the only mutation the lifecycle allows.
//! - Any status is reachable from any other; no transition table is enforced.
//! - `recipient` and `origin` are never blank; `validate()` checks this and
//!   deserialization rejects records that fail it.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use thiserror::Error;
use uuid::Uuid;

/// Stable identifier for a delivery record.
pub type DeliveryId = Uuid;

/// Lifecycle state of a delivery.
///
/// Declaration order is also the `Ord` order used for summary keys.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryStatus {
    /// Registered, not yet handed over.
    #[default]
    #[serde(alias = "pendente")]
    Pending,
    /// Handed over to the recipient.
    #[serde(alias = "entregue")]
    Delivered,
    /// Past its expected date or blocked on site.
    #[serde(alias = "atrasada")]
    Delayed,
}

impl DeliveryStatus {
    /// All statuses in dashboard display order.
    pub const ALL: [DeliveryStatus; 3] = [
        DeliveryStatus::Delivered,
        DeliveryStatus::Pending,
        DeliveryStatus::Delayed,
    ];

    /// Canonical wire code.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Delivered => "delivered",
            Self::Delayed => "delayed",
        }
    }

    /// Decodes a canonical or legacy status code.
    ///
    /// Accepts `pending|delivered|delayed` and the older
    /// `pendente|entregue|atrasada` codes, ignoring ASCII case and
    /// surrounding whitespace. Returns `None` for anything else.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pending" | "pendente" => Some(Self::Pending),
            "delivered" | "entregue" => Some(Self::Delivered),
            "delayed" | "atrasada" => Some(Self::Delayed),
            _ => None,
        }
    }
}

impl Display for DeliveryStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Record-level invariant violation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordValidationError {
    /// A required text field is empty or whitespace only.
    #[error("delivery {id} has blank required field `{field}`")]
    MissingField { id: DeliveryId, field: &'static str },
}

/// Canonical delivery record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DeliveryRecordWire")]
pub struct DeliveryRecord {
    id: DeliveryId,
    /// Person or company receiving the delivery.
    pub recipient: String,
    /// Sender, supplier or distribution center.
    pub origin: String,
    pub status: DeliveryStatus,
    /// Calendar day the delivery is expected on.
    pub expected_date: NaiveDate,
    /// Presentational time of day; never used for matching.
    pub time: Option<NaiveTime>,
    pub notes: Option<String>,
}

/// Unchecked wire shape; converted through `DeliveryRecord::validate`.
#[derive(Deserialize)]
struct DeliveryRecordWire {
    id: DeliveryId,
    recipient: String,
    origin: String,
    status: DeliveryStatus,
    expected_date: NaiveDate,
    #[serde(default)]
    time: Option<NaiveTime>,
    #[serde(default)]
    notes: Option<String>,
}

impl TryFrom<DeliveryRecordWire> for DeliveryRecord {
    type Error = RecordValidationError;

    fn try_from(wire: DeliveryRecordWire) -> Result<Self, Self::Error> {
        let record = Self {
            id: wire.id,
            recipient: wire.recipient,
            origin: wire.origin,
            status: wire.status,
            expected_date: wire.expected_date,
            time: wire.time,
            notes: wire.notes,
        };
        record.validate()?;
        Ok(record)
    }
}

impl DeliveryRecord {
    /// Creates a pending record with a generated stable ID.
    pub fn new(
        recipient: impl Into<String>,
        origin: impl Into<String>,
        expected_date: NaiveDate,
    ) -> Self {
        Self::with_id(Uuid::new_v4(), recipient, origin, expected_date)
    }

    /// Creates a pending record with a caller-provided stable ID.
    ///
    /// Used by import and seed paths where identity already exists.
    pub fn with_id(
        id: DeliveryId,
        recipient: impl Into<String>,
        origin: impl Into<String>,
        expected_date: NaiveDate,
    ) -> Self {
        Self {
            id,
            recipient: recipient.into(),
            origin: origin.into(),
            status: DeliveryStatus::default(),
            expected_date,
            time: None,
            notes: None,
        }
    }

    pub fn id(&self) -> DeliveryId {
        self.id
    }

    /// Checks record invariants. Store write paths call this before insert.
    ///
    /// # Errors
    /// - `MissingField` when `recipient` or `origin` is blank.
    pub fn validate(&self) -> Result<(), RecordValidationError> {
        for (field, value) in [("recipient", &self.recipient), ("origin", &self.origin)] {
            if value.trim().is_empty() {
                return Err(RecordValidationError::MissingField { id: self.id, field });
            }
        }
        Ok(())
    }

    /// Moves the record to `status`. Every transition is allowed.
    pub fn set_status(&mut self, status: DeliveryStatus) {
        self.status = status;
    }

    /// Builder-style status override used at creation time.
    pub fn with_status(mut self, status: DeliveryStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_time(mut self, time: NaiveTime) -> Self {
        self.time = Some(time);
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}
