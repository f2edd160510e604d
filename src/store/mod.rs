//! Realtime-database store access.
//!
//! The readings live in a hosted realtime database whose REST surface answers
//! a single GET per collection with a JSON snapshot of every child node. This
//! module wraps that contract: [`StoreClient`] performs the read-only query,
//! [`Snapshot`] and [`ChildNode`] give ordered, typed access to the raw tree,
//! and [`SnapshotSource`] is the seam the sync layer consumes so tests can
//! substitute a fake store.

mod client;
mod error;
mod snapshot;

pub use client::StoreClient;
pub use error::StoreError;
pub use snapshot::{ChildNode, Snapshot, SnapshotSource};
