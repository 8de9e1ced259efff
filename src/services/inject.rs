//! Injection of the child records into the report targets.
//!
//! Two strategies are supported:
//!
//! - Structural: parse the target and set `children` on its root object.
//! - Marker: splice a `"children": [...],` line directly after the first line
//!   containing a marker string, then parse the result. Without the marker the
//!   file is left as it was.
//!
//! Either way the output is re-serialized with one-space indentation, which
//! also proves it is still valid JSON.

use crate::InjectMode;
use crate::Result;
use crate::io::json::{REPORT_INDENT, WIDGET_INDENT, parse_json, to_indented_string};
use crate::models::ChildRecord;
use serde_json::Value;
use std::path::Path;

pub const CHILDREN_KEY: &str = "children";

/// Serialized report target and whether the children were actually added
#[derive(Debug, Clone)]
pub struct Injection {
    pub contents: String,
    pub injected: bool,
}

/// Inject `children` into the report target `text` read from `path`.
pub fn inject_children(
    path: &Path,
    text: &str,
    children: &[ChildRecord],
    mode: &InjectMode,
) -> Result<Injection> {
    let (value, injected) = match mode {
        InjectMode::Structural => {
            let mut value = parse_json(path, text)?;
            let injected = set_children(&mut value, children);
            if !injected {
                log::warn!(
                    "{}: root is not a JSON object, children not injected",
                    path.display()
                );
            }
            (value, injected)
        }
        InjectMode::Marker(marker) => match splice_after_marker(path, text, marker, children)? {
            Some(spliced) => (parse_json(path, &spliced)?, true),
            None => {
                log::warn!(
                    "{}: marker {marker:?} not found, children not injected",
                    path.display()
                );
                (parse_json(path, text)?, false)
            }
        },
    };

    Ok(Injection {
        contents: to_indented_string(path, &value, REPORT_INDENT)?,
        injected,
    })
}

/// Set the `children` field of a root object. Returns false for any other root.
pub fn set_children(value: &mut Value, children: &[ChildRecord]) -> bool {
    let Value::Object(root) = value else {
        return false;
    };
    let records = children
        .iter()
        .map(|child| Value::Object(child.fields.clone()))
        .collect();
    root.insert(CHILDREN_KEY.to_string(), Value::Array(records));
    true
}

/// Insert the children fragment after the first line containing `marker`.
/// Returns `None` when no line matches.
pub fn splice_after_marker(
    path: &Path,
    text: &str,
    marker: &str,
    children: &[ChildRecord],
) -> Result<Option<String>> {
    let lines: Vec<&str> = text.split('\n').collect();
    let Some(position) = lines.iter().position(|line| line.contains(marker)) else {
        return Ok(None);
    };

    // The fragment ends with a comma: the marker always precedes another member.
    let payload = to_indented_string(path, children, WIDGET_INDENT)?;
    let fragment = format!("\"{CHILDREN_KEY}\": {payload},");

    let mut spliced: Vec<&str> = Vec::with_capacity(lines.len() + 1);
    spliced.extend_from_slice(&lines[..=position]);
    spliced.push(&fragment);
    spliced.extend_from_slice(&lines[position + 1..]);

    Ok(Some(spliced.join("\n")))
}
