//! Global build options shared by every target in a session.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Placeholder token replaced when a backend URL template is resolved.
pub const ADDRESS_PLACEHOLDER: &str = "{ip}";

/// Process-wide build options consumed from the orchestration layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Options {
    /// Backend URL template; [`ADDRESS_PLACEHOLDER`] is substituted at
    /// resolution time.
    pub backend_url: String,

    /// Where the vendor dll bundle and its manifest are written.
    pub dll_build_dir: PathBuf,

    /// Root for web and mobile bundle output.
    pub frontend_build_dir: PathBuf,

    /// Where the server bundle is written.
    pub backend_build_dir: PathBuf,

    /// Server-side rendering flag, suppressed under the test mode.
    #[serde(default)]
    pub ssr: bool,
}

impl Options {
    /// Reject empty required options.
    ///
    /// Options are process-wide, so a failure here is fatal for the whole
    /// invocation rather than a single target.
    pub fn validate(&self) -> Result<()> {
        if self.backend_url.trim().is_empty() {
            return Err(ConfigError::MissingOption("backendUrl"));
        }
        if self.dll_build_dir.as_os_str().is_empty() {
            return Err(ConfigError::MissingOption("dllBuildDir"));
        }
        if self.frontend_build_dir.as_os_str().is_empty() {
            return Err(ConfigError::MissingOption("frontendBuildDir"));
        }
        if self.backend_build_dir.as_os_str().is_empty() {
            return Err(ConfigError::MissingOption("backendBuildDir"));
        }
        Ok(())
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            backend_url: format!("http://{ADDRESS_PLACEHOLDER}:8080"),
            dll_build_dir: PathBuf::from("build/dll"),
            frontend_build_dir: PathBuf::from("build/client"),
            backend_build_dir: PathBuf::from("build/server"),
            ssr: false,
        }
    }
}
