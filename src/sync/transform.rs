//! Raw child node → typed reading.

use crate::models::{Reading, NOT_AVAILABLE};
use crate::store::ChildNode;

/// Field names as the sensor firmware writes them.
const FIELD_TEMPERATURE: &str = "temperatura";
const FIELD_HUMIDITY: &str = "umidade";
const FIELD_DATE: &str = "data";
const FIELD_TIME: &str = "hora";

/// Normalizes one raw child node into a [`Reading`].
///
/// Total and side-effect free: a missing field or a value of the wrong shape
/// degrades to the `"N/A"` sentinel in that position, never to an error.
/// Temperature and humidity are integer-typed in the store and are rendered
/// as decimal text; fractional numbers count as wrong-shaped.
pub fn reading_from_node(node: &ChildNode) -> Reading {
    Reading {
        temperature: integer_text(node, FIELD_TEMPERATURE),
        humidity: integer_text(node, FIELD_HUMIDITY),
        date: string_text(node, FIELD_DATE),
        time: string_text(node, FIELD_TIME),
    }
}

fn integer_text(node: &ChildNode, key: &str) -> String {
    match node.integer(key) {
        Some(value) => value.to_string(),
        None => NOT_AVAILABLE.to_string(),
    }
}

fn string_text(node: &ChildNode, key: &str) -> String {
    match node.string(key) {
        Some(value) => value.to_string(),
        None => NOT_AVAILABLE.to_string(),
    }
}
