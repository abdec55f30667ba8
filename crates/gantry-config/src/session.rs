//! Per-invocation build session: registry, modes, and cross-target queries.

use std::net::IpAddr;
use std::path::PathBuf;

use indexmap::IndexMap;
use rustc_hash::FxHashMap;

use crate::deps::Affinity;
use crate::options::Options;
use crate::target::BuildTarget;

/// Orchestration state for one build invocation.
///
/// The target registry is read-only during synthesis except for each
/// target's accumulated configuration. Registry order is declaration
/// order, so synthesis order is deterministic.
#[derive(Debug, Clone)]
pub struct BuildSession {
    /// Development mode.
    pub dev: bool,

    /// Test mode; suppresses SSR and switches the computed node env.
    pub test: bool,

    pub options: Options,

    /// Project root, the base for module resolution paths.
    pub project_dir: PathBuf,

    /// Registry of declared targets, keyed by target name.
    pub targets: IndexMap<String, BuildTarget>,

    /// Full dependency manifest, in manifest order.
    pub dependencies: Vec<String>,

    /// Dependency name -> project affinity; absent means every project.
    pub dep_platforms: FxHashMap<String, Affinity>,

    /// Overrides network-address detection during backend URL resolution.
    pub machine_addr: Option<IpAddr>,
}

impl BuildSession {
    pub fn new(project_dir: impl Into<PathBuf>, options: Options) -> Self {
        Self {
            dev: false,
            test: false,
            options,
            project_dir: project_dir.into(),
            targets: IndexMap::new(),
            dependencies: Vec::new(),
            dep_platforms: FxHashMap::default(),
            machine_addr: None,
        }
    }

    pub fn dev(mut self, dev: bool) -> Self {
        self.dev = dev;
        self
    }

    pub fn test(mut self, test: bool) -> Self {
        self.test = test;
        self
    }

    /// Fix the address substituted into backend URL templates in dev.
    pub fn machine_addr(mut self, addr: IpAddr) -> Self {
        self.machine_addr = Some(addr);
        self
    }

    /// Register a declared target.
    pub fn target(mut self, target: BuildTarget) -> Self {
        self.register(target);
        self
    }

    pub fn register(&mut self, target: BuildTarget) {
        self.targets.insert(target.name.clone(), target);
    }

    /// Set the full dependency manifest, keeping manifest order.
    pub fn dependencies<I, S>(mut self, deps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dependencies = deps.into_iter().map(Into::into).collect();
        self
    }

    /// Record a dependency's project affinity.
    pub fn dep_platform(mut self, dep: impl Into<String>, affinity: Affinity) -> Self {
        self.dep_platforms.insert(dep.into(), affinity);
        self
    }

    /// True when any registered target carries the capability tag.
    ///
    /// Short-circuits on the first match.
    pub fn any_target_has(&self, tag: &str) -> bool {
        self.targets
            .values()
            .any(|target| target.capabilities.has(tag))
    }
}
