//! Dependency-to-project affinity.

use serde::{Deserialize, Serialize};

/// Which project(s) a dependency's vendor bundle belongs to.
///
/// A dependency with no affinity entry belongs to every project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Affinity {
    One(String),
    Many(Vec<String>),
}

impl Affinity {
    /// True when this affinity includes the given project.
    pub fn includes(&self, project: &str) -> bool {
        match self {
            Affinity::One(name) => name == project,
            Affinity::Many(names) => names.iter().any(|name| name == project),
        }
    }
}
