//! Delivery use-case service.
//!
//! # Responsibility
//! - Provide submit/history/dashboard entry points for view adapters.
//! - Delegate storage to a `DeliveryRepository` implementation.
//!
//! # Invariants
//! - Submissions are validated before the store sees them.
//! - Query and aggregation run over a fresh store snapshot per call.
//! - Log lines carry IDs and counts only, never recipient or notes text.

use crate::aggregate::summary::{recent, summarize, DeliverySummary};
use crate::model::delivery::{DeliveryId, DeliveryRecord, DeliveryStatus};
use crate::model::submission::{DeliverySubmission, SubmissionError};
use crate::query::filter::{filter, DeliveryFilter};
use crate::repo::delivery_repo::{DeliveryRepository, RepoError, RepoResult};
use log::{info, warn};
use serde::Serialize;
use thiserror::Error;

/// Service error for delivery use-cases.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// Submission was rejected; no record was created.
    #[error(transparent)]
    Submission(#[from] SubmissionError),
    #[error(transparent)]
    Repo(#[from] RepoError),
    /// Write succeeded but read-back disagrees.
    #[error("inconsistent delivery state: {0}")]
    InconsistentState(&'static str),
}

/// Dashboard projection: counters plus the most recent deliveries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dashboard {
    pub summary: DeliverySummary,
    pub recent: Vec<DeliveryRecord>,
}

/// Delivery service facade over repository implementations.
pub struct DeliveryService<R: DeliveryRepository> {
    repo: R,
}

impl<R: DeliveryRepository> DeliveryService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Validates a submission and stores the resulting record.
    ///
    /// Validation errors are returned unchanged and block creation.
    pub fn submit(&self, submission: &DeliverySubmission) -> Result<DeliveryRecord, ServiceError> {
        let valid = match submission.validate() {
            Ok(valid) => valid,
            Err(err) => {
                warn!(
                    "event=delivery_submit module=service status=error error_code=validation error={}",
                    err
                );
                return Err(err.into());
            }
        };

        let record = valid.into_record();
        let id = self.repo.add(record)?;
        let stored = self
            .repo
            .get(id)?
            .ok_or(ServiceError::InconsistentState(
                "created delivery not found in read-back",
            ))?;

        info!(
            "event=delivery_submit module=service status=ok id={} delivery_status={}",
            id, stored.status
        );
        Ok(stored)
    }

    /// Moves an existing delivery to `status`.
    pub fn set_status(&self, id: DeliveryId, status: DeliveryStatus) -> Result<(), ServiceError> {
        self.repo.update_status(id, status)?;
        info!(
            "event=delivery_status module=service status=ok id={} delivery_status={}",
            id, status
        );
        Ok(())
    }

    pub fn get(&self, id: DeliveryId) -> RepoResult<Option<DeliveryRecord>> {
        self.repo.get(id)
    }

    /// Filtered history over the current store snapshot.
    pub fn history(&self, criteria: &DeliveryFilter) -> RepoResult<Vec<DeliveryRecord>> {
        let records = self.repo.list()?;
        let matched = filter(&records, criteria);
        info!(
            "event=delivery_history module=service status=ok scanned={} matched={} filtered={}",
            records.len(),
            matched.len(),
            criteria.is_active()
        );
        Ok(matched)
    }

    /// Dashboard counters and up to `recent_limit` recent deliveries.
    pub fn dashboard(&self, recent_limit: usize) -> RepoResult<Dashboard> {
        let records = self.repo.list()?;
        Ok(Dashboard {
            summary: summarize(&records),
            recent: recent(&records, recent_limit),
        })
    }
}
