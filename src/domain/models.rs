use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// `project => [alias, ...]`, in maintainers file line order.
pub type ProjectMaintainers = BTreeMap<String, Vec<String>>;

/// `alias => summed fraction of every project the alias maintains`.
pub type OwnershipShare = BTreeMap<String, f64>;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// The subset of a GitHub organization repository we care about.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Repository {
    pub name: String,
    #[serde(default = "default_branch")]
    pub default_branch: String,
    #[serde(default)]
    pub archived: bool,
}

fn default_branch() -> String {
    "master".to_string()
}

impl Repository {
    #[cfg(test)]
    pub(crate) fn new(name: &str, default_branch: &str) -> Self {
        Self {
            name: name.to_string(),
            default_branch: default_branch.to_string(),
            archived: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    NoMaintainers { project: String },
    UnknownMaintainer { project: String, alias: String },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::NoMaintainers { project } => {
                write!(f, "project has no maintainers: {}", project)
            }
            Violation::UnknownMaintainer { project, alias } => {
                write!(f, "project '{}' has an unknown maintainer: {}", project, alias)
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    pub failed: bool,
    pub violations: Vec<Violation>,
}

impl ValidationResult {
    pub fn passed(&self) -> bool {
        !self.failed
    }

    pub fn messages(&self) -> Vec<String> {
        self.violations.iter().map(|v| v.to_string()).collect()
    }
}

#[derive(Serialize, Clone, Debug)]
pub struct ShareRow {
    pub maintainer: String,
    pub share: f64,
}

#[derive(Serialize)]
pub struct GraphReport {
    pub output: String,
    pub maintainers: Vec<ShareRow>,
}
