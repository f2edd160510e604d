//! Reading synchronization.
//!
//! Pulls the reading collection from the store in a single batch and turns
//! it into the typed list the display layer renders:
//! 1. [`ReadingSync`] performs one snapshot fetch per invocation
//! 2. [`reading_from_node`] normalizes each raw child into a [`Reading`](crate::Reading)
//! 3. The assembled list is delivered to the consumer exactly once; a failed
//!    fetch is logged and delivers nothing, leaving previously published
//!    data untouched

mod fetcher;
mod transform;

pub use fetcher::ReadingSync;
pub use transform::reading_from_node;
