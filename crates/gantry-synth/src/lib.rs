//! # gantry-synth
//!
//! Deterministic bundler-configuration synthesis for a set of cooperating
//! build targets inside one project.
//!
//! Each target declares capability tags ("web", "server", "dll",
//! "react-native"); the engine maps those tags plus a handful of global
//! options to an ordered configuration fragment per target, resolves the
//! concerns no single target can decide alone (unique dev-server ports,
//! vendor dependency partitioning, whether a sibling already serves HTML),
//! and deep-merges each fragment into the target's accumulated
//! configuration. The bundler itself is an external collaborator; this
//! crate only produces the configuration it consumes.
//!
//! ## Quick start
//!
//! ```
//! use gantry_config::{BuildSession, BuildTarget, CapabilitySet, Options};
//! use gantry_synth::{PortAllocator, synthesize};
//!
//! let mut session = BuildSession::new(".", Options::default())
//!     .dev(true)
//!     .target(BuildTarget::new(
//!         "web",
//!         "app",
//!         CapabilitySet::new(["webpack", "web"]),
//!     ));
//!
//! let mut ports = PortAllocator::new();
//! let report = synthesize(&mut session, &mut ports)?;
//! assert_eq!(report.configured, ["web"]);
//! # Ok::<(), gantry_synth::Error>(())
//! ```

pub mod compose;
pub mod driver;
pub mod fragment;
pub mod merge;
pub mod net;
pub mod plugins;
pub mod ports;
pub mod vendor;

// Logging utilities (optional, enabled with "logging" feature)
#[cfg(feature = "logging")]
pub mod logging;

#[cfg(feature = "logging")]
pub use logging::{LogLevel, init_logging, init_logging_from_env};

pub use compose::compose;
pub use driver::{BUNDLER_TAG, SynthReport, TargetFailure, synthesize};
pub use fragment::{DevServerSettings, Fragment, OutputSettings};
pub use merge::merge_config;
pub use plugins::{DefineMap, DefineValue, PluginDescriptor};
pub use ports::{DEV_PORT_BASE, PortAllocator};
pub use vendor::partition;

/// Error types for synthesis operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error from the declarative model (platform derivation, options).
    #[error(transparent)]
    Config(#[from] gantry_config::ConfigError),

    /// The platform-settings branch matched no known capability.
    /// Fatal for that target only; sibling targets still process.
    #[error("unknown platform target for `{target}` (capability set [{}])", tags.join(", "))]
    UnknownPlatformTarget { target: String, tags: Vec<String> },

    /// The resolved backend URL could not be parsed.
    #[error("invalid backend URL `{url}`: {source}")]
    InvalidBackendUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// A composed fragment failed to serialize.
    #[error("failed to serialize configuration fragment: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type alias for synthesis operations.
pub type Result<T> = std::result::Result<T, Error>;
