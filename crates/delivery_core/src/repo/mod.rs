//! Record store contract and in-memory implementation.
//!
//! # Responsibility
//! - Define the capability the core needs from an external record store.
//! - Provide an in-memory store and sample data for the CLI and tests.
//!
//! # Invariants
//! - Stores reject duplicate IDs on insert.
//! - Reads hand out snapshots; callers never hold a reference into the store.

pub mod delivery_repo;
pub mod seed;
