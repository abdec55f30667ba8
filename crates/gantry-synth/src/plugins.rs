//! Plugin descriptors emitted into composed configuration fragments.
//!
//! A descriptor names the bundler plugin to instantiate plus its options;
//! the external bundler collaborator interprets them. Descriptors are
//! plain values, so fragments stay immutable after composition.

use std::path::PathBuf;

use indexmap::IndexMap;
use serde::Serialize;

/// Ordered compile-time define map.
pub type DefineMap = IndexMap<String, DefineValue>;

/// One replacement value in a define map.
///
/// `Code` holds raw replacement source, so string constants carry their
/// own quotes (`"\"production\""`).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DefineValue {
    Bool(bool),
    Code(String),
}

impl DefineValue {
    /// Replacement that expands to a string literal.
    pub fn quoted(value: impl AsRef<str>) -> Self {
        Self::Code(format!("\"{}\"", value.as_ref()))
    }
}

impl From<bool> for DefineValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// Module predicate for vendor chunk splitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ChunkPredicate {
    /// Any module resolved from the project's dependency install directory.
    NodeModules,
}

/// Descriptor for one bundler plugin in a fragment's plugin list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "plugin", content = "options")]
pub enum PluginDescriptor {
    /// Module-naming aid for readable dev output.
    #[serde(rename = "NamedModulesPlugin")]
    NamedModules,

    #[serde(rename = "HotModuleReplacementPlugin")]
    HotModuleReplacement,

    #[serde(rename = "NoEmitOnErrorsPlugin")]
    NoEmitOnErrors,

    #[serde(rename = "UglifyJsPlugin")]
    Uglify { minimize: bool },

    #[serde(rename = "LoaderOptionsPlugin")]
    LoaderOptions { minimize: bool },

    #[serde(rename = "ModuleConcatenationPlugin")]
    ModuleConcatenation,

    /// Compile-time constant substitution.
    #[serde(rename = "DefinePlugin")]
    Define(DefineMap),

    /// Vendor library declaration pointing at the dll manifest.
    #[serde(rename = "DllPlugin")]
    Dll { name: String, path: PathBuf },

    /// Source prepended to emitted chunks.
    #[serde(rename = "BannerPlugin", rename_all = "camelCase")]
    Banner {
        banner: String,
        raw: bool,
        entry_only: bool,
    },

    /// Asset manifest emission.
    #[serde(rename = "ManifestPlugin", rename_all = "camelCase")]
    Manifest { file_name: String },

    /// HTML document emission from a project-supplied template.
    #[serde(rename = "HtmlWebpackPlugin")]
    Html { template: PathBuf, inject: String },

    /// Vendor chunk splitting.
    #[serde(rename = "CommonsChunkPlugin", rename_all = "camelCase")]
    CommonsChunk {
        name: String,
        filename: String,
        min_chunks: ChunkPredicate,
    },
}
