//! Backend URL resolution and machine-address detection.

use std::net::{IpAddr, Ipv4Addr, UdpSocket};
use std::sync::OnceLock;

use gantry_config::ADDRESS_PLACEHOLDER;
use url::Url;

use crate::{Error, Result};

/// Best-effort detection of the machine's own network address.
///
/// Connects a UDP socket toward a public address to learn the preferred
/// outbound interface; no packet is sent. The result is cached for the
/// process lifetime and falls back to loopback.
pub fn machine_addr() -> IpAddr {
    static ADDR: OnceLock<IpAddr> = OnceLock::new();
    *ADDR.get_or_init(|| detect().unwrap_or(IpAddr::V4(Ipv4Addr::LOCALHOST)))
}

fn detect() -> Option<IpAddr> {
    let socket = UdpSocket::bind(("0.0.0.0", 0)).ok()?;
    socket.connect(("8.8.8.8", 80)).ok()?;
    socket.local_addr().ok().map(|addr| addr.ip())
}

/// Resolve a backend URL template for the given mode.
///
/// The [`ADDRESS_PLACEHOLDER`] becomes the machine address in dev and the
/// literal loopback hostname otherwise. Pure given the same inputs, so
/// resolution under identical mode flags is idempotent.
pub fn resolve_backend_url(template: &str, dev: bool, addr: Option<IpAddr>) -> String {
    let host = if dev {
        addr.unwrap_or_else(machine_addr).to_string()
    } else {
        "localhost".to_string()
    };
    template.replace(ADDRESS_PLACEHOLDER, &host)
}

/// Scheme + host[:port] of a resolved URL, the dev-server proxy target.
pub fn base_url(resolved: &str) -> Result<String> {
    let url = parse(resolved)?;
    let mut base = format!("{}://{}", url.scheme(), url.host_str().unwrap_or("localhost"));
    if let Some(port) = url.port() {
        base.push_str(&format!(":{port}"));
    }
    Ok(base)
}

/// Host component of a resolved URL.
pub fn host_of(resolved: &str) -> Result<String> {
    let url = parse(resolved)?;
    Ok(url.host_str().unwrap_or("localhost").to_string())
}

fn parse(resolved: &str) -> Result<Url> {
    Url::parse(resolved).map_err(|source| Error::InvalidBackendUrl {
        url: resolved.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEMPLATE: &str = "http://{ip}:8080/graphql";

    #[test]
    fn non_dev_resolution_uses_the_loopback_hostname() {
        assert_eq!(
            resolve_backend_url(TEMPLATE, false, None),
            "http://localhost:8080/graphql"
        );
    }

    #[test]
    fn dev_resolution_substitutes_the_machine_address() {
        let addr = IpAddr::V4(Ipv4Addr::new(192, 168, 1, 10));
        assert_eq!(
            resolve_backend_url(TEMPLATE, true, Some(addr)),
            "http://192.168.1.10:8080/graphql"
        );
    }

    #[test]
    fn dev_resolution_without_override_leaves_no_placeholder() {
        let resolved = resolve_backend_url(TEMPLATE, true, None);
        assert!(!resolved.contains(ADDRESS_PLACEHOLDER));
    }

    #[test]
    fn resolution_is_idempotent_under_identical_flags() {
        let first = resolve_backend_url(TEMPLATE, true, None);
        let second = resolve_backend_url(TEMPLATE, true, None);
        assert_eq!(first, second);
    }

    #[test]
    fn base_url_keeps_scheme_host_and_port() {
        assert_eq!(
            base_url("https://10.0.0.2:8080/graphql").unwrap(),
            "https://10.0.0.2:8080"
        );
        assert_eq!(
            base_url("http://localhost/graphql").unwrap(),
            "http://localhost"
        );
    }

    #[test]
    fn unparseable_url_is_reported_with_the_offending_value() {
        let err = base_url("not a url").unwrap_err();
        assert!(err.to_string().contains("not a url"));
    }

    #[test]
    fn host_of_extracts_the_hostname() {
        assert_eq!(host_of("http://localhost:8080").unwrap(), "localhost");
        assert_eq!(host_of("http://192.168.1.10:8080").unwrap(), "192.168.1.10");
    }
}
