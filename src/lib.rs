//! Tempview Library
//!
//! Client for a small weather-station setup: sensor readings (temperature,
//! humidity, timestamp) live in a realtime database; this crate fetches the
//! collection over its REST surface, normalizes each raw child node into a
//! typed [`Reading`], and hands the ordered list to a display layer.

pub mod config;
pub mod models;
pub mod store;
pub mod sync;

pub use config::{Config, ConfigError};
pub use models::{Reading, ReadingList, NOT_AVAILABLE};
pub use store::{ChildNode, Snapshot, SnapshotSource, StoreClient, StoreError};
pub use sync::{reading_from_node, ReadingSync};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
