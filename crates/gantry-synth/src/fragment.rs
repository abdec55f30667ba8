//! Composed configuration fragments and their settings blocks.
//!
//! A [`Fragment`] is one composition pass's full output for a target. It
//! is never mutated after construction; the merge engine folds its
//! serialized form into the target's accumulated configuration. Field
//! names serialize to the bundler's camelCase key surface.

use std::path::PathBuf;

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use crate::plugins::PluginDescriptor;

/// Entry map: chunk name -> ordered module list.
pub type EntryMap = IndexMap<String, Vec<String>>;

/// Module rule section, empty at this layer (loader plugins fill it).
#[derive(Debug, Clone, Default, Serialize)]
pub struct ModuleSettings {
    pub rules: Vec<Value>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResolveSettings {
    pub modules: Vec<PathBuf>,
}

#[derive(Debug, Clone, Serialize)]
pub struct WatchSettings {
    pub ignored: String,
}

/// Output block for one target.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub devtool_module_filename_template: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub devtool_fallback_module_filename_template: Option<String>,

    pub filename: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_map_filename: Option<String>,

    pub path: PathBuf,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_path: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub library: Option<String>,
}

impl OutputSettings {
    /// Output block served from the root public path.
    pub fn new(filename: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            devtool_module_filename_template: None,
            devtool_fallback_module_filename_template: None,
            filename: filename.into(),
            source_map_filename: None,
            path: path.into(),
            public_path: Some("/".into()),
            library: None,
        }
    }
}

/// Node global emulation flags for server bundles.
#[derive(Debug, Clone, Serialize)]
pub struct NodeSettings {
    #[serde(rename = "__dirname")]
    pub dirname: bool,

    #[serde(rename = "__filename")]
    pub filename: bool,
}

/// Externalize node-resolvable dependencies, bundling only the
/// allow-listed name prefixes the runtime cannot resolve as plain modules.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeExternals {
    pub bundle: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyRule {
    pub target: String,
    pub log_level: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSettings {
    pub colors: bool,
    pub chunk_modules: bool,
}

/// Dev-server block attached to web and mobile fragments.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DevServerSettings {
    pub hot: bool,
    pub content_base: String,
    pub public_path: String,
    pub headers: IndexMap<String, String>,
    pub quiet: bool,
    pub no_info: bool,
    pub stats: StatsSettings,
    pub port: u16,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy: Option<IndexMap<String, ProxyRule>>,
}

impl DevServerSettings {
    /// Base dev-server block shared by every platform.
    pub fn new(port: u16) -> Self {
        let mut headers = IndexMap::new();
        headers.insert("Access-Control-Allow-Origin".to_string(), "*".to_string());
        Self {
            hot: true,
            content_base: "/".into(),
            public_path: "/".into(),
            headers,
            quiet: false,
            no_info: true,
            stats: StatsSettings {
                colors: true,
                chunk_modules: false,
            },
            port,
            proxy: None,
        }
    }
}

/// One composition pass's full output for a target.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Fragment {
    pub name: String,
    pub devtool: String,
    pub module: ModuleSettings,
    pub resolve: ResolveSettings,
    pub watch_options: WatchSettings,
    pub bail: bool,
    pub plugins: Vec<PluginDescriptor>,
    pub entry: EntryMap,
    pub output: OutputSettings,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub node: Option<NodeSettings>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub externals: Option<NodeExternals>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dev_server: Option<DevServerSettings>,
}

impl Fragment {
    /// Serialize for the merge engine.
    pub fn into_value(self) -> crate::Result<Value> {
        Ok(serde_json::to_value(self)?)
    }
}
