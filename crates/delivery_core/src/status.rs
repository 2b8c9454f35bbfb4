//! Status presentation metadata.
//!
//! # Responsibility
//! - Map a delivery status to the label and severity a view renders.
//! - Decode raw status codes from external or legacy data without failing.
//!
//! # Invariants
//! - `classify` is total over `DeliveryStatus`.
//! - Unrecognized raw codes resolve to the `pending` presentation.

use crate::model::delivery::DeliveryStatus;
use log::debug;
use serde::Serialize;

/// Visual severity of a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Ok,
    Warning,
    Critical,
}

/// Display metadata for one status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusBadge {
    pub label: &'static str,
    pub severity: Severity,
}

/// Returns display metadata for `status`.
pub fn classify(status: DeliveryStatus) -> StatusBadge {
    match status {
        DeliveryStatus::Delivered => StatusBadge {
            label: "Delivered",
            severity: Severity::Ok,
        },
        DeliveryStatus::Pending => StatusBadge {
            label: "Pending",
            severity: Severity::Warning,
        },
        DeliveryStatus::Delayed => StatusBadge {
            label: "Delayed",
            severity: Severity::Critical,
        },
    }
}

/// Classifies a raw status code, falling back to `pending` when the code is
/// not recognized.
pub fn classify_code(code: &str) -> StatusBadge {
    match DeliveryStatus::parse(code) {
        Some(status) => classify(status),
        None => {
            debug!(
                "event=status_fallback module=status status=ok code_len={}",
                code.len()
            );
            classify(DeliveryStatus::Pending)
        }
    }
}
