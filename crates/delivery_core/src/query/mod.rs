//! History query entry points.
//!
//! # Responsibility
//! - Turn view inputs into explicit, immutable filter criteria.
//! - Apply criteria over a caller-supplied record snapshot.

pub mod filter;
