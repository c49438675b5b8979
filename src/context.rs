//! Substitution context for template rendering.
//! A context is an explicit, immutable mapping from placeholder names to
//! values; extending it always produces a new context so descriptors can be
//! re-rendered against different entries without interference.

use serde::Serialize;
use serde_json::Value;

use crate::error::{Error, Result};

/// Placeholder values available while rendering one pack file.
///
/// Contexts are assembled fresh per descriptor invocation and read-only from
/// the formatter's side: the formatter only looks names up, it never writes.
#[derive(Debug, Clone, Default)]
pub struct Context {
    values: serde_json::Map<String, Value>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the context with `key` bound to `value`.
    ///
    /// Consumes the receiver, so extending a shared base context requires an
    /// explicit `clone()` at the call site.
    pub fn insert(mut self, key: impl Into<String>, value: impl Serialize) -> Result<Self> {
        self.values.insert(key.into(), serde_json::to_value(value)?);
        Ok(self)
    }

    /// Looks up a dotted placeholder path such as `entry.internal_name`.
    ///
    /// # Errors
    /// * `Error::MissingKeyError` if any path segment is absent or an
    ///   intermediate value is not an object
    pub fn resolve(&self, placeholder: &str) -> Result<&Value> {
        let mut current: Option<&Value> = None;

        for segment in placeholder.split('.') {
            current = match current {
                None => self.values.get(segment),
                Some(Value::Object(map)) => map.get(segment),
                Some(_) => None,
            };

            if current.is_none() {
                return Err(Error::MissingKeyError { placeholder: placeholder.to_string() });
            }
        }

        current.ok_or_else(|| Error::MissingKeyError { placeholder: placeholder.to_string() })
    }

    /// Resolves a placeholder to its interpolated string form.
    ///
    /// Strings pass through unchanged, numbers and booleans are stringified.
    /// Compound values cannot be interpolated into a template string.
    pub fn resolve_scalar(&self, placeholder: &str) -> Result<String> {
        match self.resolve(placeholder)? {
            Value::String(value) => Ok(value.clone()),
            Value::Number(value) => Ok(value.to_string()),
            Value::Bool(value) => Ok(value.to_string()),
            Value::Null | Value::Array(_) | Value::Object(_) => Err(Error::TemplateError(
                format!("placeholder '{placeholder}' does not name a scalar value"),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> Context {
        Context::new()
            .insert("name", "dusk")
            .unwrap()
            .insert("count", 3)
            .unwrap()
            .insert("entry", serde_json::json!({"internal_name": "dusk", "custom_model_data": 7}))
            .unwrap()
    }

    #[test]
    fn test_resolve_top_level() {
        let context = context();
        assert_eq!(context.resolve("name").unwrap(), "dusk");
    }

    #[test]
    fn test_resolve_dotted_path() {
        let context = context();
        assert_eq!(context.resolve("entry.internal_name").unwrap(), "dusk");
        assert_eq!(context.resolve_scalar("entry.custom_model_data").unwrap(), "7");
    }

    #[test]
    fn test_resolve_missing_key() {
        let context = context();
        match context.resolve("entry.unknown") {
            Err(Error::MissingKeyError { placeholder }) => {
                assert_eq!(placeholder, "entry.unknown")
            }
            _ => panic!("Expected MissingKeyError variant"),
        }
    }

    #[test]
    fn test_resolve_through_scalar_fails() {
        let context = context();
        assert!(context.resolve("name.inner").is_err());
    }

    #[test]
    fn test_resolve_scalar_rejects_compound() {
        let context = context();
        match context.resolve_scalar("entry") {
            Err(Error::TemplateError(_)) => (),
            _ => panic!("Expected TemplateError variant"),
        }
    }

    #[test]
    fn test_insert_does_not_touch_original() {
        let base = context();
        let extended = base.clone().insert("index", 0).unwrap();
        assert!(base.resolve("index").is_err());
        assert!(extended.resolve("index").is_ok());
    }
}
