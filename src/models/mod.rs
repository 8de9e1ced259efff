//! Data models for child test records and outcome tallies

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One executed test's outcome entry from `childrenObject.json`.
///
/// Only `status` is interpreted; every field (including `status`) is kept
/// as-is so the record can be injected back into the report unmodified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChildRecord {
    pub fields: Map<String, Value>,
}

impl ChildRecord {
    /// Identifier of the record: Allure's `uid`, falling back to `id`.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.fields
            .get("uid")
            .or_else(|| self.fields.get("id"))
            .and_then(Value::as_str)
    }

    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.fields.get("status").and_then(Value::as_str)
    }

    #[must_use]
    pub fn outcome(&self) -> Outcome {
        match self.status() {
            Some("passed") => Outcome::Passed,
            Some("failed") => Outcome::Failed,
            _ => Outcome::Other,
        }
    }
}

/// Classification of a child record's `status`. Matching is exact and
/// case-sensitive; anything else is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Passed,
    Failed,
    Other,
}

/// Pass/fail counts derived from the child records
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub passed: u64,
    pub failed: u64,
    /// Records whose status was neither `passed` nor `failed`
    pub ignored: u64,
}

impl Tally {
    /// Tests counted towards the statistics. Ignored records are excluded.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.passed + self.failed
    }

    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Passed => self.passed += 1,
            Outcome::Failed => self.failed += 1,
            Outcome::Other => self.ignored += 1,
        }
    }
}
