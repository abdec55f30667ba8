//! Capability tags and platform derivation.
//!
//! Every build target carries an immutable set of capability tags
//! ("does this target need behavior X"). Exactly one primary [`Platform`]
//! is derived from the set by a fixed precedence rule.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Primary platform a build target compiles for.
///
/// Derived from capability tags by fixed precedence: `dll` wins over
/// `server`, which wins over `web`, which wins over `react-native`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Platform {
    Dll,
    Server,
    Web,
    ReactNative,
}

impl Platform {
    /// Platforms in precedence order, most specific first.
    pub const PRECEDENCE: [Platform; 4] = [
        Platform::Dll,
        Platform::Server,
        Platform::Web,
        Platform::ReactNative,
    ];

    /// The capability tag this platform is derived from.
    pub fn tag(&self) -> &'static str {
        match self {
            Platform::Dll => "dll",
            Platform::Server => "server",
            Platform::Web => "web",
            Platform::ReactNative => "react-native",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// Immutable set of capability tags attached to a build target.
///
/// Tags are unordered and unique; insertion order never affects platform
/// derivation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CapabilitySet {
    tags: BTreeSet<String>,
}

impl CapabilitySet {
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }

    /// True iff the set contains `tag`.
    pub fn has(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    /// True iff the set contains at least one of the given tags.
    pub fn has_any<'a, I>(&self, tags: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        tags.into_iter().any(|tag| self.has(tag))
    }

    /// The primary platform derived by the fixed precedence rule.
    ///
    /// Fails with [`ConfigError::PlatformUndetermined`] when no known
    /// platform tag is present; there is no best-effort fallback.
    pub fn platform(&self) -> Result<Platform> {
        Platform::PRECEDENCE
            .into_iter()
            .find(|platform| self.has(platform.tag()))
            .ok_or_else(|| ConfigError::PlatformUndetermined {
                tags: self.tags.iter().cloned().collect(),
            })
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for CapabilitySet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}
