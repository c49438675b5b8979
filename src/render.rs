//! Placeholder substitution for template strings and path templates.
//!
//! The grammar is deliberately small: `{name}` or `{dotted.path}` resolved
//! against the substitution context, with `{{` and `}}` as literal-brace
//! escapes. No expressions, no filters.

use std::path::PathBuf;

use crate::context::Context;
use crate::error::{Error, Result};

/// Renders one template string against the context.
///
/// # Errors
/// * `Error::MissingKeyError` if a placeholder has no value in the context
/// * `Error::TemplateError` for empty, unterminated or unmatched braces
/// * `Error::EncodingError` if the rendered result contains characters that
///   cannot be written to pack output
pub fn render_str(template: &str, context: &Context) -> Result<String> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(pos) = rest.find(['{', '}']) {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        if let Some(after) = tail.strip_prefix("{{") {
            out.push('{');
            rest = after;
        } else if let Some(after) = tail.strip_prefix("}}") {
            out.push('}');
            rest = after;
        } else if tail.starts_with('}') {
            return Err(Error::TemplateError(format!(
                "unmatched '}}' in template {template:?}"
            )));
        } else {
            let inner = &tail[1..];
            let end = inner.find(['{', '}']).ok_or_else(|| {
                Error::TemplateError(format!("unterminated placeholder in template {template:?}"))
            })?;
            if !inner[end..].starts_with('}') {
                return Err(Error::TemplateError(format!(
                    "unterminated placeholder in template {template:?}"
                )));
            }

            let name = &inner[..end];
            if name.is_empty() {
                return Err(Error::TemplateError(format!(
                    "empty placeholder in template {template:?}"
                )));
            }

            out.push_str(&context.resolve_scalar(name)?);
            rest = &inner[end + 1..];
        }
    }
    out.push_str(rest);

    check_encodable(&out)?;
    Ok(out)
}

/// Renders each path segment independently and joins them into one path.
///
/// Joining is plain `PathBuf::push`: segments are not normalized, and a
/// segment containing separators or `..` passes through as the catalog
/// author wrote it.
pub fn render_path(segments: &[String], context: &Context) -> Result<PathBuf> {
    let mut path = PathBuf::new();
    for segment in segments {
        path.push(render_str(segment, context)?);
    }
    Ok(path)
}

/// Best-effort scan for the placeholder names a template references.
///
/// Used for catalog validation; malformed templates report their errors at
/// render time instead.
pub fn placeholders(template: &str) -> Vec<String> {
    let mut names = Vec::new();
    let mut rest = template;

    while let Some(pos) = rest.find('{') {
        let tail = &rest[pos..];
        if let Some(after) = tail.strip_prefix("{{") {
            rest = after;
            continue;
        }

        let inner = &tail[1..];
        match inner.find(['{', '}']) {
            Some(end) if inner[end..].starts_with('}') => {
                if end > 0 {
                    names.push(inner[..end].to_string());
                }
                rest = &inner[end + 1..];
            }
            _ => break,
        }
    }

    names
}

// UTF-8 output streams cannot reject well-formed text, so the one encoding
// failure left to guard against is interior NUL, which neither the
// filesystem nor pack consumers accept.
fn check_encodable(value: &str) -> Result<()> {
    if value.contains('\u{0}') {
        return Err(Error::EncodingError { value: value.to_string() });
    }
    Ok(())
}
