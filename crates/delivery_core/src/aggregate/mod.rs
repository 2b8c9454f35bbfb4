//! Dashboard aggregation.
//!
//! # Responsibility
//! - Count records by status for dashboard cards.
//! - Select the most recent deliveries for the dashboard list.

pub mod summary;
