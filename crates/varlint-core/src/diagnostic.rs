use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::path::PathBuf;

use crate::location::Location;

/// Implemented by every rule to describe what it reports.
pub trait Violation {
    fn name(&self) -> String;
    fn body(&self) -> String;
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ViolationData {
    pub name: String,
    pub body: String,
}

impl<T: Violation> From<T> for ViolationData {
    fn from(value: T) -> Self {
        Self { name: value.name(), body: value.body() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Diagnostic {
    // The name and message of the violated rule.
    pub message: ViolationData,
    pub filename: PathBuf,
    pub location: Location,
}

impl Diagnostic {
    pub fn new<T: Into<ViolationData>>(message: T, filename: PathBuf, location: Location) -> Self {
        Self { message: message.into(), filename, location }
    }
}

// Sort by file first, then position, then rule name so that the output is
// stable regardless of the order in which files were checked.
impl Ord for Diagnostic {
    fn cmp(&self, other: &Self) -> Ordering {
        self.filename
            .cmp(&other.filename)
            .then(self.location.cmp(&other.location))
            .then(self.message.name.cmp(&other.message.name))
            .then(self.message.body.cmp(&other.message.body))
    }
}

impl PartialOrd for Diagnostic {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
