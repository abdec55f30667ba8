//! Fragment composition: the mode × platform decision tree.
//!
//! Composition is split into two pure mapping functions composed
//! explicitly: [`mode_plugins`] keyed by build mode, and the platform
//! settings in [`settings`] keyed by the derived platform. The only
//! side-effecting dependency is the port allocator.

mod mode;
mod settings;

pub use mode::mode_plugins;

use gantry_config::{BuildSession, BuildTarget, Platform};
use tracing::debug;

use crate::Result;
use crate::fragment::{
    EntryMap, Fragment, ModuleSettings, OutputSettings, ResolveSettings, WatchSettings,
};
use crate::ports::PortAllocator;

const DEVTOOL_DEV: &str = "#cheap-module-source-map";
const DEVTOOL_PROD: &str = "#source-map";

/// Compose the configuration fragment for one target.
///
/// Deterministic given its inputs; the port allocator is the one
/// documented side effect. A platform-resolution failure aborts only this
/// target's configuration.
pub fn compose(
    target: &BuildTarget,
    session: &BuildSession,
    ports: &mut PortAllocator,
) -> Result<Fragment> {
    let platform = target.capabilities.platform()?;
    debug!(
        "composing fragment for `{}` (platform {}, dev {})",
        target.name, platform, session.dev
    );

    let plugins = mode_plugins(session.dev, platform);
    match platform {
        // The dll path discards the mode plugin list entirely.
        Platform::Dll => settings::dll(target, session),
        Platform::Server => settings::server(target, session, plugins),
        Platform::Web | Platform::ReactNative => {
            settings::client(target, session, platform, plugins, ports)
        }
    }
}

/// Node environment string derived from the global mode flags.
pub(crate) fn node_env(dev: bool, test: bool) -> &'static str {
    if dev {
        if test { "test" } else { "development" }
    } else {
        "production"
    }
}

/// Base block every composition pass starts from.
pub(crate) fn base_fragment(
    target: &BuildTarget,
    session: &BuildSession,
    plugins: Vec<crate::plugins::PluginDescriptor>,
    entry: EntryMap,
    output: OutputSettings,
) -> Fragment {
    Fragment {
        name: target.name.clone(),
        devtool: if session.dev { DEVTOOL_DEV } else { DEVTOOL_PROD }.to_string(),
        module: ModuleSettings::default(),
        resolve: ResolveSettings {
            modules: vec![
                session.project_dir.join("node_modules"),
                "node_modules".into(),
            ],
        },
        watch_options: WatchSettings {
            ignored: "build".into(),
        },
        bail: !session.dev,
        plugins,
        entry,
        output,
        target: None,
        node: None,
        externals: None,
        dev_server: None,
    }
}
