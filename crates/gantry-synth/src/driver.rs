//! Synthesis driver: composes and commits configuration for every
//! bundler-managed target in a session.

use gantry_config::BuildSession;
use tracing::{debug, info, warn};

use crate::ports::PortAllocator;
use crate::{Error, Result, compose, merge};

/// Capability tag marking a target as bundler-managed.
pub const BUNDLER_TAG: &str = "webpack";

/// Outcome of one synthesis run.
#[derive(Debug, Default)]
pub struct SynthReport {
    /// Targets whose configuration was composed and committed.
    pub configured: Vec<String>,

    /// Targets skipped for lack of the bundler capability.
    pub skipped: Vec<String>,

    /// Per-target composition failures; sibling targets still processed.
    pub failures: Vec<TargetFailure>,
}

/// One target's composition failure, with enough context to report it.
#[derive(Debug)]
pub struct TargetFailure {
    pub target: String,
    pub error: Error,
}

/// Compose and commit configuration for every bundler-managed target.
///
/// Option validation failures abort the whole invocation, since options
/// are process-wide. Per-target composition errors are collected in the
/// report instead; composition is deterministic, so no retries.
pub fn synthesize(session: &mut BuildSession, ports: &mut PortAllocator) -> Result<SynthReport> {
    session.options.validate()?;

    let mut report = SynthReport::default();
    let names: Vec<String> = session.targets.keys().cloned().collect();

    for name in names {
        let Some(target) = session.targets.get(&name) else {
            continue;
        };
        if !target.capabilities.has(BUNDLER_TAG) {
            debug!("skipping `{name}`: not bundler-managed");
            report.skipped.push(name);
            continue;
        }

        match compose::compose(target, session, ports).and_then(|fragment| fragment.into_value()) {
            Ok(update) => {
                if let Some(target) = session.targets.get_mut(&name) {
                    merge::merge_config(&mut target.config, &update);
                    info!("configuration committed for `{name}`");
                    report.configured.push(name);
                }
            }
            Err(error) => {
                warn!("composition failed for `{name}`: {error}");
                report.failures.push(TargetFailure {
                    target: name,
                    error,
                });
            }
        }
    }

    Ok(report)
}
