//! Loading and tallying child test records

use crate::io::json::read_json;
use crate::models::{ChildRecord, Outcome, Tally};
use crate::{Error, Result};
use serde_json::Value;
use std::path::Path;

/// Load `childrenObject.json`: a JSON array whose elements are all objects.
pub fn load_children(path: &Path) -> Result<Vec<ChildRecord>> {
    let Value::Array(items) = read_json(path)? else {
        return Err(Error::Report {
            path: path.to_path_buf(),
            message: "expected a JSON array of child records".to_string(),
        });
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(fields) => Ok(ChildRecord { fields }),
            other => Err(Error::Report {
                path: path.to_path_buf(),
                message: format!("child record {index} is not an object: {other}"),
            }),
        })
        .collect()
}

/// Count passed and failed records. Any other status is tallied as ignored.
#[must_use]
pub fn tally(children: &[ChildRecord]) -> Tally {
    let mut tally = Tally::default();
    for child in children {
        let outcome = child.outcome();
        if outcome == Outcome::Other {
            log::warn!(
                "Ignoring child {} with status {:?}",
                child.id().unwrap_or("<no id>"),
                child.status()
            );
        }
        tally.record(outcome);
    }
    tally
}
