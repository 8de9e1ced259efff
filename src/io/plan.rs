//! Deferred filesystem writes, executed together once every output is known.
//!
//! Operations are applied in parallel and joined before `execute` returns, so
//! the report tree is fully written by the time a caller sees `Ok`. When
//! several operations fail, the error of the earliest one in plan order is
//! returned.

use crate::{Error, Result};
use rayon::prelude::*;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Write `contents` to `path`, replacing any existing file.
    Write { path: PathBuf, contents: Vec<u8> },
    /// Copy `from` byte-for-byte to `to`, replacing any existing file.
    Copy { from: PathBuf, to: PathBuf },
}

impl Operation {
    #[must_use]
    pub fn destination(&self) -> &Path {
        match self {
            Operation::Write { path, .. } => path,
            Operation::Copy { to, .. } => to,
        }
    }

    fn apply(&self) -> Result<u64> {
        let dest = self.destination();
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent).map_err(|source| Error::File {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        match self {
            Operation::Write { path, contents } => {
                fs::write(path, contents).map_err(|source| Error::File {
                    path: path.clone(),
                    source,
                })?;
                log::debug!("Wrote {} ({} bytes)", path.display(), contents.len());
                Ok(contents.len() as u64)
            }
            Operation::Copy { from, to } => {
                let mut reader = File::open(from).map_err(|source| Error::File {
                    path: from.clone(),
                    source,
                })?;
                let mut writer = File::create(to).map_err(|source| Error::File {
                    path: to.clone(),
                    source,
                })?;
                let bytes = io::copy(&mut reader, &mut writer).map_err(|source| Error::File {
                    path: to.clone(),
                    source,
                })?;
                log::debug!("Copied {} -> {}", from.display(), to.display());
                Ok(bytes)
            }
        }
    }
}

/// Outcome of executing a plan
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlanReport {
    pub written: usize,
    pub copied: usize,
    pub bytes: u64,
}

#[derive(Debug, Default)]
pub struct WritePlan {
    operations: Vec<Operation>,
}

impl WritePlan {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_write(&mut self, path: PathBuf, contents: impl Into<Vec<u8>>) {
        self.operations.push(Operation::Write {
            path,
            contents: contents.into(),
        });
    }

    pub fn push_copy(&mut self, from: PathBuf, to: PathBuf) {
        self.operations.push(Operation::Copy { from, to });
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Apply every operation and wait for all of them.
    pub fn execute(&self) -> Result<PlanReport> {
        let results: Vec<Result<u64>> = self.operations.par_iter().map(Operation::apply).collect();

        let mut report = PlanReport::default();
        for (operation, result) in self.operations.iter().zip(results) {
            report.bytes = report.bytes.saturating_add(result?);
            match operation {
                Operation::Write { .. } => report.written += 1,
                Operation::Copy { .. } => report.copied += 1,
            }
        }

        Ok(report)
    }
}
