//! Delivery domain model.
//!
//! # Responsibility
//! - Define the canonical delivery record and its status enumeration.
//! - Define the submission contract a form must satisfy before a record exists.
//!
//! # Invariants
//! - Every record is identified by a stable `DeliveryId`.
//! - Status is always one of the closed `DeliveryStatus` values.
//! - Records are never deleted; only their status changes.

pub mod delivery;
pub mod submission;
