//! JSON file reading and indentation-controlled serialization

use crate::{Error, Result};
use serde::Serialize;
use serde_json::Value;
use serde_json::ser::PrettyFormatter;
use std::path::Path;

/// Indentation of the report targets (`data/*.json`).
pub const REPORT_INDENT: &[u8] = b" ";

/// Indentation of the statistics widgets and of the injected fragment.
pub const WIDGET_INDENT: &[u8] = b"    ";

/// Read a file as UTF-8 text.
pub fn read_text(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| Error::File {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse JSON text, attributing failures to `path`.
pub fn parse_json(path: &Path, text: &str) -> Result<Value> {
    serde_json::from_str(text).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Read and parse a JSON file.
pub fn read_json(path: &Path) -> Result<Value> {
    let text = read_text(path)?;
    parse_json(path, &text)
}

/// Serialize `value` pretty-printed with the given indentation unit.
pub fn to_indented_string<T: Serialize + ?Sized>(
    path: &Path,
    value: &T,
    indent: &[u8],
) -> Result<String> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(indent));
    value
        .serialize(&mut serializer)
        .map_err(|source| Error::Json {
            path: path.to_path_buf(),
            source,
        })?;

    // serde_json only emits valid UTF-8
    String::from_utf8(buf).map_err(|e| Error::Report {
        path: path.to_path_buf(),
        message: format!("serializer produced invalid UTF-8: {e}"),
    })
}
