//! # gantry-config
//!
//! Declarative model for multi-target bundler configuration synthesis.
//!
//! This crate holds everything the synthesis engine consumes but does not
//! decide itself: capability tag sets and the platform they derive to,
//! build targets and their accumulated configuration, global build options,
//! the dependency affinity table, and the per-invocation [`BuildSession`]
//! that ties them together.

pub mod capability;
pub mod deps;
pub mod error;
pub mod options;
pub mod session;
pub mod target;

// Re-export main types
pub use capability::{CapabilitySet, Platform};
pub use deps::Affinity;
pub use error::{ConfigError, Result};
pub use options::{ADDRESS_PLACEHOLDER, Options};
pub use session::BuildSession;
pub use target::BuildTarget;
