//! End-to-end tests for the synthesis driver.

use std::net::{IpAddr, Ipv4Addr};

use gantry_config::{BuildSession, BuildTarget, CapabilitySet, ConfigError, Options};
use gantry_synth::{Error, PortAllocator, synthesize};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

fn session() -> BuildSession {
    let options = Options {
        backend_url: "http://{ip}:8080/graphql".into(),
        ..Options::default()
    };
    BuildSession::new("/project", options)
        .dev(true)
        .machine_addr(IpAddr::V4(Ipv4Addr::new(192, 168, 1, 10)))
}

fn target(name: &str, tags: &[&str]) -> BuildTarget {
    BuildTarget::new(name, "app", CapabilitySet::new(tags.iter().copied()))
}

#[test]
fn synthesis_commits_configuration_per_bundler_managed_target() {
    let mut session = session()
        .target(target("web1", &["webpack", "web"]))
        .target(target("api", &["webpack", "server"]));
    let mut ports = PortAllocator::new();

    let report = synthesize(&mut session, &mut ports).expect("synthesize");

    assert_eq!(report.configured, ["web1", "api"]);
    assert!(report.skipped.is_empty());
    assert!(report.failures.is_empty());

    let web = &session.targets["web1"].config;
    assert_eq!(web["name"], json!("web1"));
    assert!(web["plugins"].as_array().is_some_and(|list| !list.is_empty()));
    // The web target sees the server sibling and leaves HTML to it.
    assert!(
        !web["plugins"]
            .as_array()
            .unwrap()
            .iter()
            .any(|plugin| plugin["plugin"] == json!("HtmlWebpackPlugin"))
    );

    let api = &session.targets["api"].config;
    assert_eq!(api["target"], json!("node"));
}

#[test]
fn targets_without_the_bundler_capability_are_skipped() {
    let mut session = session()
        .target(target("docs", &["static-site"]))
        .target(target("web1", &["webpack", "web"]));
    let mut ports = PortAllocator::new();

    let report = synthesize(&mut session, &mut ports).expect("synthesize");

    assert_eq!(report.skipped, ["docs"]);
    assert_eq!(report.configured, ["web1"]);
    assert_eq!(session.targets["docs"].config, Value::Null);
}

#[test]
fn a_platformless_target_fails_alone() {
    let mut session = session()
        .target(target("broken", &["webpack"]))
        .target(target("web1", &["webpack", "web"]));
    let mut ports = PortAllocator::new();

    let report = synthesize(&mut session, &mut ports).expect("synthesize");

    assert_eq!(report.configured, ["web1"]);
    assert_eq!(report.failures.len(), 1);
    let failure = &report.failures[0];
    assert_eq!(failure.target, "broken");
    assert!(matches!(
        failure.error,
        Error::Config(ConfigError::PlatformUndetermined { .. })
    ));
    assert_eq!(session.targets["broken"].config, Value::Null);
}

#[test]
fn missing_options_abort_the_whole_invocation() {
    let mut session = session().target(target("web1", &["webpack", "web"]));
    session.options.backend_url = String::new();
    let mut ports = PortAllocator::new();

    let err = synthesize(&mut session, &mut ports).unwrap_err();
    assert!(matches!(
        err,
        Error::Config(ConfigError::MissingOption("backendUrl"))
    ));
    assert_eq!(session.targets["web1"].config, Value::Null);
}

#[test]
fn ports_are_stable_across_targets_within_a_run() {
    let mut session = session()
        .target(target("web1", &["webpack", "web"]))
        .target(target("web2", &["webpack", "web"]).with_dev_port(9090))
        .target(target("web3", &["webpack", "web"]));
    let mut ports = PortAllocator::new();

    synthesize(&mut session, &mut ports).expect("synthesize");

    assert_eq!(
        session.targets["web1"].config["devServer"]["port"],
        json!(3000)
    );
    // The pin bypasses the allocator; the cursor never sees it.
    assert_eq!(
        session.targets["web2"].config["devServer"]["port"],
        json!(9090)
    );
    assert_eq!(
        session.targets["web3"].config["devServer"]["port"],
        json!(3001)
    );
}

#[test]
fn a_second_pass_replaces_the_plugin_list_wholesale() {
    let mut session = session().target(target("web1", &["webpack", "web"]));
    let mut ports = PortAllocator::new();

    synthesize(&mut session, &mut ports).expect("first pass");
    let first_len = session.targets["web1"].config["plugins"]
        .as_array()
        .unwrap()
        .len();

    synthesize(&mut session, &mut ports).expect("second pass");
    let second_len = session.targets["web1"].config["plugins"]
        .as_array()
        .unwrap()
        .len();

    // Identical fragments make the second merge idempotent rather than
    // additive.
    assert_eq!(first_len, second_len);
}

#[test]
fn dll_target_receives_the_partitioned_vendor_entry() {
    let mut session = session()
        .target(target("vendor", &["webpack", "dll"]))
        .dependencies(["left-pad", "lodash"]);
    let mut ports = PortAllocator::new();

    synthesize(&mut session, &mut ports).expect("synthesize");

    let config = &session.targets["vendor"].config;
    assert_eq!(config["entry"]["vendor"], json!(["left-pad", "lodash"]));
    assert_eq!(config["plugins"].as_array().unwrap().len(), 2);
}
