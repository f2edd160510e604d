//! Single-shot fetch of the whole reading collection.

use std::sync::Arc;

use tokio::task::JoinHandle;

use super::transform::reading_from_node;
use crate::models::ReadingList;
use crate::store::{SnapshotSource, StoreError};

/// Orchestrates one fetch of the reading collection per invocation.
///
/// Each invocation runs Idle → Fetching → Delivered or Failed, with exactly
/// one terminal outcome. Invocations are independent: no caching, no
/// deduplication of concurrent calls, no retry. When calls overlap, each
/// delivers on its own and the consumer keeps whichever result arrived last.
pub struct ReadingSync<S> {
    source: Arc<S>,
}

impl<S> Clone for ReadingSync<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
        }
    }
}

impl<S> ReadingSync<S>
where
    S: SnapshotSource + Send + Sync + 'static,
{
    pub fn new(source: S) -> Self {
        Self {
            source: Arc::new(source),
        }
    }

    /// Fetches the collection once and returns the full ordered list.
    ///
    /// An empty collection resolves to an empty list, not an error.
    pub async fn fetch_all(&self) -> Result<ReadingList, StoreError> {
        let snapshot = self.source.fetch_snapshot().await?;
        Ok(snapshot.children().iter().map(reading_from_node).collect())
    }

    /// Callback form of [`fetch_all`](Self::fetch_all) for display layers.
    ///
    /// Returns immediately; the fetch runs on the runtime. On success
    /// `on_complete` is invoked exactly once with the full list. On failure
    /// the cause is logged at warning level and `on_complete` is never
    /// invoked, so the consumer's previously published list stays as it is.
    ///
    /// The returned handle lets callers await completion; dropping it does
    /// not cancel the fetch.
    pub fn fetch_all_with<F>(&self, on_complete: F) -> JoinHandle<()>
    where
        F: FnOnce(ReadingList) + Send + 'static,
    {
        let source = Arc::clone(&self.source);
        tokio::spawn(async move {
            match source.fetch_snapshot().await {
                Ok(snapshot) => {
                    let readings: ReadingList =
                        snapshot.children().iter().map(reading_from_node).collect();
                    on_complete(readings);
                }
                Err(e) => {
                    tracing::warn!("Failed to fetch readings: {}", e);
                }
            }
        })
    }
}
