//! Delivery repository contract and in-memory store.
//!
//! # Invariants
//! - `list` returns records in insertion order.
//! - `id` values are unique within one store.
//! - Only `update_status` mutates an existing record.
//! - Write paths must call `DeliveryRecord::validate()` before inserting.

use crate::model::delivery::{DeliveryId, DeliveryRecord, DeliveryStatus, RecordValidationError};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use thiserror::Error;

pub type RepoResult<T> = Result<T, RepoError>;

/// Store-level error for delivery records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepoError {
    #[error("delivery not found: {0}")]
    NotFound(DeliveryId),
    #[error("delivery already exists: {0}")]
    DuplicateId(DeliveryId),
    /// Record breaks a model invariant and was not stored.
    #[error(transparent)]
    Validation(#[from] RecordValidationError),
    /// A writer panicked while holding the store lock.
    #[error("delivery store lock poisoned")]
    Poisoned,
}

/// Capability the core requires from a record store.
pub trait DeliveryRepository {
    fn list(&self) -> RepoResult<Vec<DeliveryRecord>>;
    fn get(&self, id: DeliveryId) -> RepoResult<Option<DeliveryRecord>>;
    fn add(&self, record: DeliveryRecord) -> RepoResult<DeliveryId>;
    fn update_status(&self, id: DeliveryId, status: DeliveryStatus) -> RepoResult<()>;
}

impl<R: DeliveryRepository + ?Sized> DeliveryRepository for &R {
    fn list(&self) -> RepoResult<Vec<DeliveryRecord>> {
        (**self).list()
    }

    fn get(&self, id: DeliveryId) -> RepoResult<Option<DeliveryRecord>> {
        (**self).get(id)
    }

    fn add(&self, record: DeliveryRecord) -> RepoResult<DeliveryId> {
        (**self).add(record)
    }

    fn update_status(&self, id: DeliveryId, status: DeliveryStatus) -> RepoResult<()> {
        (**self).update_status(id, status)
    }
}

/// Process-local store backed by a locked vector.
#[derive(Debug, Default)]
pub struct InMemoryDeliveryRepository {
    records: RwLock<Vec<DeliveryRecord>>,
}

impl InMemoryDeliveryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from existing records.
    ///
    /// # Errors
    /// - `DuplicateId` when two records share an ID.
    /// - `Validation` when a record has a blank recipient or origin.
    pub fn with_records(records: impl IntoIterator<Item = DeliveryRecord>) -> RepoResult<Self> {
        let repo = Self::new();
        for record in records {
            repo.add(record)?;
        }
        Ok(repo)
    }

    pub fn len(&self) -> RepoResult<usize> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> RepoResult<bool> {
        Ok(self.read()?.is_empty())
    }

    fn read(&self) -> RepoResult<RwLockReadGuard<'_, Vec<DeliveryRecord>>> {
        self.records.read().map_err(|_| RepoError::Poisoned)
    }

    fn write(&self) -> RepoResult<RwLockWriteGuard<'_, Vec<DeliveryRecord>>> {
        self.records.write().map_err(|_| RepoError::Poisoned)
    }
}

impl DeliveryRepository for InMemoryDeliveryRepository {
    fn list(&self) -> RepoResult<Vec<DeliveryRecord>> {
        Ok(self.read()?.clone())
    }

    fn get(&self, id: DeliveryId) -> RepoResult<Option<DeliveryRecord>> {
        Ok(self.read()?.iter().find(|record| record.id() == id).cloned())
    }

    fn add(&self, record: DeliveryRecord) -> RepoResult<DeliveryId> {
        record.validate()?;

        let mut records = self.write()?;
        let id = record.id();
        if records.iter().any(|existing| existing.id() == id) {
            return Err(RepoError::DuplicateId(id));
        }
        records.push(record);
        Ok(id)
    }

    fn update_status(&self, id: DeliveryId, status: DeliveryStatus) -> RepoResult<()> {
        let mut records = self.write()?;
        let record = records
            .iter_mut()
            .find(|record| record.id() == id)
            .ok_or(RepoError::NotFound(id))?;
        record.set_status(status);
        Ok(())
    }
}
