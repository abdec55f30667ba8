//! Vendor-bundle dependency partitioning.

use gantry_config::Affinity;
use rustc_hash::FxHashMap;

/// Dependencies belonging to `project`'s vendor bundle.
///
/// A dependency is kept when its affinity entry is absent, names the
/// project, or lists it. Output keeps manifest order: downstream vendor
/// bundle hashing depends on stable entry ordering.
pub fn partition(
    manifest: &[String],
    affinities: &FxHashMap<String, Affinity>,
    project: &str,
) -> Vec<String> {
    manifest
        .iter()
        .filter(|dep| {
            affinities
                .get(dep.as_str())
                .is_none_or(|affinity| affinity.includes(project))
        })
        .cloned()
        .collect()
}
