//! Tests for the declarative model as consumed from the orchestration layer.

use gantry_config::{
    Affinity, BuildSession, BuildTarget, CapabilitySet, ConfigError, Options, Platform,
};
use pretty_assertions::assert_eq;
use rustc_hash::FxHashMap;
use serde_json::json;

fn options_from_orchestration() -> Options {
    serde_json::from_value(json!({
        "backendUrl": "http://{ip}:8080/graphql",
        "dllBuildDir": "build/dll",
        "frontendBuildDir": "build/client",
        "backendBuildDir": "build/server",
        "ssr": true,
    }))
    .expect("options deserialize")
}

#[test]
fn a_declared_project_resolves_every_target_platform() {
    let session = BuildSession::new(".", options_from_orchestration())
        .target(BuildTarget::new(
            "web1",
            "app",
            CapabilitySet::new(["webpack", "web", "apollo"]),
        ))
        .target(BuildTarget::new(
            "api",
            "app",
            CapabilitySet::new(["webpack", "server", "apollo"]),
        ))
        .target(BuildTarget::new(
            "vendor",
            "app",
            CapabilitySet::new(["webpack", "dll"]),
        ))
        .target(BuildTarget::new(
            "mobile",
            "app",
            CapabilitySet::new(["webpack", "react-native", "android"]),
        ));

    let platforms: Vec<Platform> = session
        .targets
        .values()
        .map(|target| target.capabilities.platform().expect("platform"))
        .collect();

    assert_eq!(
        platforms,
        [
            Platform::Web,
            Platform::Server,
            Platform::Dll,
            Platform::ReactNative
        ]
    );
}

#[test]
fn sibling_queries_see_the_whole_registry() {
    let mut session = BuildSession::new(".", options_from_orchestration()).target(
        BuildTarget::new("web1", "app", CapabilitySet::new(["webpack", "web"])),
    );
    assert!(!session.any_target_has("server"));

    session.register(BuildTarget::new(
        "api",
        "app",
        CapabilitySet::new(["webpack", "server"]),
    ));
    assert!(session.any_target_has("server"));
}

#[test]
fn affinity_table_deserializes_names_and_lists() {
    let table: FxHashMap<String, Affinity> = serde_json::from_value(json!({
        "express": "server-app",
        "react": ["web-app", "mobile-app"],
    }))
    .expect("affinity table deserialize");

    assert!(table["express"].includes("server-app"));
    assert!(!table["express"].includes("web-app"));
    assert!(table["react"].includes("mobile-app"));
}

#[test]
fn a_pinned_port_survives_target_construction() {
    let target = BuildTarget::new("web1", "app", CapabilitySet::new(["webpack", "web"]))
        .with_dev_port(8081);
    assert_eq!(target.dev_port, Some(8081));
    // The accumulated configuration starts empty.
    assert!(target.config.is_null());
}

#[test]
fn platformless_targets_report_their_capability_set() {
    let target = BuildTarget::new("docs", "app", CapabilitySet::new(["webpack", "static-site"]));
    let err = target.capabilities.platform().expect_err("no platform");
    assert_eq!(
        err,
        ConfigError::PlatformUndetermined {
            tags: vec!["static-site".into(), "webpack".into()],
        }
    );
    assert!(err.to_string().contains("static-site"));
}

#[test]
fn option_validation_names_the_missing_key() {
    let mut options = options_from_orchestration();
    options.frontend_build_dir.clear();
    assert_eq!(
        options.validate().expect_err("invalid options"),
        ConfigError::MissingOption("frontendBuildDir")
    );
}
