//! Build targets: named artifact-producing units within a project.

use serde_json::Value;

use crate::capability::CapabilitySet;

/// One named artifact-producing unit (the server bundle, the web bundle).
///
/// Created once per declared target before synthesis runs. The accumulated
/// configuration starts empty and is refined in place by each applicable
/// plugin pass; only the merge engine mutates it.
#[derive(Debug, Clone)]
pub struct BuildTarget {
    /// Unique name within the project.
    pub name: String,

    /// Parent project this target belongs to.
    pub project: String,

    /// Capability tags, immutable once attached.
    pub capabilities: CapabilitySet,

    /// Explicitly pinned dev-server port, trusted as already unique.
    pub dev_port: Option<u16>,

    /// Accumulated configuration object.
    pub config: Value,
}

impl BuildTarget {
    pub fn new(
        name: impl Into<String>,
        project: impl Into<String>,
        capabilities: CapabilitySet,
    ) -> Self {
        Self {
            name: name.into(),
            project: project.into(),
            capabilities,
            dev_port: None,
            config: Value::Null,
        }
    }

    /// Pin the dev-server port instead of taking one from the allocator.
    pub fn with_dev_port(mut self, port: u16) -> Self {
        self.dev_port = Some(port);
        self
    }
}
