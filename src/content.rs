//! Structured content bodies and the recursive content formatter.
//!
//! A pack file's contents are modeled as a closed sum type so the recursive
//! formatter is an exhaustive match instead of runtime type inspection.
//! Mappings keep insertion order, which is also the serialization order.

use std::io::Write;

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use serde_json::ser::PrettyFormatter;

use crate::context::Context;
use crate::error::Result;
use crate::render::render_str;

/// One node of a pack file's content body.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Mapping(IndexMap<String, Body>),
    Sequence(Vec<Body>),
}

impl Body {
    pub fn text(value: impl Into<String>) -> Self {
        Body::Text(value.into())
    }

    pub fn int(value: i64) -> Self {
        Body::Int(value)
    }

    pub fn map<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Body)>,
    {
        Body::Mapping(entries.into_iter().map(|(key, value)| (key.into(), value)).collect())
    }

    pub fn seq<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Body>,
    {
        Body::Sequence(items.into_iter().collect())
    }
}

impl Serialize for Body {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Body::Text(value) => serializer.serialize_str(value),
            Body::Int(value) => serializer.serialize_i64(*value),
            Body::Float(value) => serializer.serialize_f64(*value),
            Body::Bool(value) => serializer.serialize_bool(*value),
            Body::Mapping(map) => {
                let mut state = serializer.serialize_map(Some(map.len()))?;
                for (key, value) in map {
                    state.serialize_entry(key, value)?;
                }
                state.end()
            }
            Body::Sequence(items) => {
                let mut state = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    state.serialize_element(item)?;
                }
                state.end()
            }
        }
    }
}

/// Substitutes every text leaf of `body` against the context.
///
/// Returns a new body of identical shape: mappings keep their keys and key
/// order, sequences keep their length, scalar leaves pass through unchanged.
/// The input is never mutated; descriptors are reused across entries, and
/// formatting one entry must not leak into the next.
pub fn format_body(body: &Body, context: &Context) -> Result<Body> {
    match body {
        Body::Text(template) => Ok(Body::Text(render_str(template, context)?)),
        Body::Mapping(map) => {
            let mut formatted = IndexMap::with_capacity(map.len());
            for (key, value) in map {
                formatted.insert(key.clone(), format_body(value, context)?);
            }
            Ok(Body::Mapping(formatted))
        }
        Body::Sequence(items) => {
            let mut formatted = Vec::with_capacity(items.len());
            for item in items {
                formatted.push(format_body(item, context)?);
            }
            Ok(Body::Sequence(formatted))
        }
        Body::Int(_) | Body::Float(_) | Body::Bool(_) => Ok(body.clone()),
    }
}

/// Serializes a body as JSON with 4-space indentation.
pub fn write_json<W: Write>(writer: W, body: &Body) -> Result<()> {
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
    body.serialize(&mut serializer)?;
    Ok(())
}
