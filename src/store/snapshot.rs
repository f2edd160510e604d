//! Point-in-time snapshots of the reading collection.
//!
//! The REST surface returns the whole collection in one of three shapes: a
//! JSON object keyed by push id, a JSON array (when the writer used numeric
//! keys), or `null` when the collection is empty. [`Snapshot::from_value`]
//! normalizes all of them into an ordered list of [`ChildNode`]s. Push ids
//! sort lexicographically in insertion order, so object key order is
//! chronological.

use std::future::Future;

use serde_json::Value;

use super::error::StoreError;

/// An immutable, point-in-time read of the whole reading collection.
#[derive(Debug, Clone)]
pub struct Snapshot {
    children: Vec<ChildNode>,
}

impl Snapshot {
    /// Builds a snapshot from the raw JSON the store returned.
    ///
    /// Array holes (`null` entries) are skipped, matching how the database
    /// SDKs iterate children. Any other non-container root yields an empty
    /// snapshot.
    pub fn from_value(value: Value) -> Self {
        let children = match value {
            Value::Object(map) => map
                .into_iter()
                .map(|(_, child)| ChildNode::new(child))
                .collect(),
            Value::Array(items) => items
                .into_iter()
                .filter(|child| !child.is_null())
                .map(ChildNode::new)
                .collect(),
            _ => Vec::new(),
        };
        Self { children }
    }

    pub fn empty() -> Self {
        Self {
            children: Vec::new(),
        }
    }

    /// Child nodes in the store's iteration order at fetch time.
    pub fn children(&self) -> &[ChildNode] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// One raw child node: an untyped mapping that may be missing any field or
/// hold a value of the wrong shape.
#[derive(Debug, Clone)]
pub struct ChildNode {
    value: Value,
}

impl ChildNode {
    pub(crate) fn new(value: Value) -> Self {
        Self { value }
    }

    /// Raw field lookup. `None` when this node is not an object or the key
    /// is absent.
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.value.get(key)
    }

    /// Integer-typed field read. `None` for an absent key, a non-numeric
    /// value, or a number that is not exactly representable as `i64`
    /// (fractional readings do not round, they are treated as invalid).
    pub fn integer(&self, key: &str) -> Option<i64> {
        self.field(key).and_then(Value::as_i64)
    }

    /// String-typed field read. `None` for an absent key or a non-string
    /// value.
    pub fn string(&self, key: &str) -> Option<&str> {
        self.field(key).and_then(Value::as_str)
    }
}

/// Read-only snapshot query over the reading collection.
///
/// Implemented by [`StoreClient`](super::StoreClient) against the real store
/// and by in-test fakes. One call resolves the whole collection in a single
/// batch; there is no incremental or streaming delivery.
pub trait SnapshotSource {
    fn fetch_snapshot(&self) -> impl Future<Output = Result<Snapshot, StoreError>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_object_collection_in_key_order() {
        let snapshot = Snapshot::from_value(json!({
            "-Nc1": {"temperatura": 1},
            "-Na1": {"temperatura": 2},
            "-Nb1": {"temperatura": 3},
        }));

        assert_eq!(snapshot.len(), 3);
        let temps: Vec<_> = snapshot
            .children()
            .iter()
            .map(|c| c.integer("temperatura").unwrap())
            .collect();
        // serde_json maps iterate in sorted key order, which for push ids
        // is insertion order.
        assert_eq!(temps, vec![2, 3, 1]);
    }

    #[test]
    fn test_array_collection_skips_holes() {
        let snapshot = Snapshot::from_value(json!([
            {"temperatura": 1},
            null,
            {"temperatura": 2},
        ]));

        assert_eq!(snapshot.len(), 2);
    }

    #[test]
    fn test_null_collection_is_empty() {
        let snapshot = Snapshot::from_value(json!(null));
        assert!(snapshot.is_empty());
    }

    #[test]
    fn test_scalar_root_is_empty() {
        let snapshot = Snapshot::from_value(json!("oops"));
        assert!(snapshot.is_empty());
    }

    #[test]
    fn test_integer_accessor() {
        let node = ChildNode::new(json!({"temperatura": 23, "umidade": "60", "nivel": 23.5}));

        assert_eq!(node.integer("temperatura"), Some(23));
        // wrong shape: string where an integer is expected
        assert_eq!(node.integer("umidade"), None);
        // fractional values are not integers
        assert_eq!(node.integer("nivel"), None);
        // absent key
        assert_eq!(node.integer("pressao"), None);
    }

    #[test]
    fn test_string_accessor() {
        let node = ChildNode::new(json!({"data": "2024-01-01", "hora": 10}));

        assert_eq!(node.string("data"), Some("2024-01-01"));
        assert_eq!(node.string("hora"), None);
        assert_eq!(node.string("dia"), None);
    }

    #[test]
    fn test_non_object_child_has_no_fields() {
        let node = ChildNode::new(json!(42));

        assert!(node.field("temperatura").is_none());
        assert!(node.integer("temperatura").is_none());
        assert!(node.string("data").is_none());
    }
}
