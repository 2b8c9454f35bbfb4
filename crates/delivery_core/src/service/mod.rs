//! Core use-case services.
//!
//! # Responsibility
//! - Compose validation, query and aggregation with a record store.
//! - Keep view adapters decoupled from store details.

pub mod delivery_service;
