//! Core domain logic for delivery tracking.
//! This crate owns the record model, filtering and dashboard aggregation;
//! storage and presentation are supplied by callers.

pub mod aggregate;
pub mod config;
pub mod logging;
pub mod model;
pub mod query;
pub mod repo;
pub mod service;
pub mod status;

pub use aggregate::summary::{recent, summarize, DeliverySummary};
pub use config::{ConfigError, CoreConfig};
pub use logging::{default_log_level, init_from_config, init_logging, logging_status, LoggingError};
pub use model::delivery::{DeliveryId, DeliveryRecord, DeliveryStatus, RecordValidationError};
pub use model::submission::{DeliverySubmission, SubmissionError, ValidSubmission};
pub use query::filter::{
    filter, filter_refs, result_count_label, DateFilter, DeliveryFilter, StatusFilter,
};
pub use repo::delivery_repo::{
    DeliveryRepository, InMemoryDeliveryRepository, RepoError, RepoResult,
};
pub use repo::seed::{sample_deliveries, sample_id};
pub use service::delivery_service::{Dashboard, DeliveryService, ServiceError};
pub use status::{classify, classify_code, Severity, StatusBadge};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
