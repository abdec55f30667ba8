//! Platform-axis settings: entries, outputs, externals, dev servers.

use gantry_config::{BuildSession, BuildTarget, Platform};
use indexmap::IndexMap;

use super::{base_fragment, node_env};
use crate::fragment::{
    DevServerSettings, EntryMap, Fragment, NodeExternals, NodeSettings, OutputSettings, ProxyRule,
};
use crate::plugins::{ChunkPredicate, DefineMap, DefineValue, PluginDescriptor};
use crate::ports::PortAllocator;
use crate::{Error, Result, net, vendor};

const SERVER_ENTRY: &str = "./src/server/index.js";
const CLIENT_ENTRY: &str = "./src/client/index.js";
const MOBILE_ENTRY: &str = "./src/mobile/index.js";

/// Hot-reload shims prepended to dev entries. The server shim is
/// signal-driven except on Windows, which lacks the signal and polls.
const HOT_SIGNAL_SHIM: &str = "webpack/hot/signal.js";
const HOT_POLL_SHIM: &str = "webpack/hot/poll?1000";
const HOT_CLIENT_SHIM: &str = "webpack-hot-middleware/client";

const HTML_TEMPLATE: &str = "html-plugin-template.ejs";
const MOBILE_BUNDLE: &str = "index.mobile.bundle";

/// Packages the server runtime cannot resolve as plain modules; these are
/// bundled instead of externalized.
const SERVER_BUNDLED_PREFIXES: [&str; 2] = ["webpack", "react-native"];

const ANDROID_DEV_PORT: u16 = 3010;
const MOBILE_DEV_PORT: u16 = 3020;

/// Vendor bundle settings: a two-plugin list (define map and dll
/// declaration) plus the partitioned dependency entry.
pub(super) fn dll(target: &BuildTarget, session: &BuildSession) -> Result<Fragment> {
    let library = format!("vendor_{}", target.project);

    let mut defines = DefineMap::new();
    defines.insert("__DEV__".into(), DefineValue::Bool(session.dev));
    defines.insert(
        "process.env.NODE_ENV".into(),
        DefineValue::quoted(node_env(session.dev, session.test)),
    );

    let plugins = vec![
        PluginDescriptor::Define(defines),
        PluginDescriptor::Dll {
            name: library.clone(),
            path: session
                .options
                .dll_build_dir
                .join(format!("{library}_dll.json")),
        },
    ];

    let mut entry = EntryMap::new();
    entry.insert(
        "vendor".into(),
        vendor::partition(&session.dependencies, &session.dep_platforms, &target.project),
    );

    let output = OutputSettings {
        public_path: None,
        library: Some(library.clone()),
        ..OutputSettings::new(
            format!("{library}.[hash]_dll.js"),
            session.options.dll_build_dir.clone(),
        )
    };

    let mut fragment = base_fragment(target, session, plugins, entry, output);
    // Vendor bundles keep cheap source maps even in production.
    fragment.devtool = super::DEVTOOL_DEV.to_string();
    Ok(fragment)
}

/// Server bundle settings: node execution target, externalized
/// dependencies, and a signal/poll hot-reload shim in dev.
pub(super) fn server(
    target: &BuildTarget,
    session: &BuildSession,
    mut plugins: Vec<PluginDescriptor>,
) -> Result<Fragment> {
    let backend_url =
        net::resolve_backend_url(&session.options.backend_url, session.dev, session.machine_addr);

    plugins.push(PluginDescriptor::Banner {
        banner: "require(\"source-map-support\").install();".into(),
        raw: true,
        entry_only: false,
    });

    let mut defines = DefineMap::new();
    defines.insert("__CLIENT__".into(), DefineValue::Bool(false));
    defines.insert("__SERVER__".into(), DefineValue::Bool(true));
    defines.insert("__SSR__".into(), DefineValue::Bool(ssr(session)));
    defines.insert("__DEV__".into(), DefineValue::Bool(session.dev));
    defines.insert(
        "process.env.NODE_ENV".into(),
        DefineValue::quoted(node_env(session.dev, session.test)),
    );
    defines.insert("__BACKEND_URL__".into(), DefineValue::quoted(&backend_url));
    plugins.push(PluginDescriptor::Define(defines));

    let mut modules = Vec::new();
    if session.dev {
        modules.push(
            if cfg!(windows) {
                HOT_POLL_SHIM
            } else {
                HOT_SIGNAL_SHIM
            }
            .to_string(),
        );
    }
    modules.push(SERVER_ENTRY.to_string());
    let mut entry = EntryMap::new();
    entry.insert("index".into(), modules);

    let output = OutputSettings {
        devtool_module_filename_template: session.dev.then(|| "../../[resource-path]".to_string()),
        devtool_fallback_module_filename_template: session
            .dev
            .then(|| "../../[resource-path];[hash]".to_string()),
        source_map_filename: Some("[name].[chunkhash].js.map".into()),
        ..OutputSettings::new("[name].js", session.options.backend_build_dir.clone())
    };

    let mut fragment = base_fragment(target, session, plugins, entry, output);
    fragment.target = Some("node".into());
    fragment.node = Some(NodeSettings {
        dirname: true,
        filename: true,
    });
    fragment.externals = Some(NodeExternals {
        bundle: SERVER_BUNDLED_PREFIXES.map(String::from).to_vec(),
    });
    Ok(fragment)
}

/// Client settings shared by the web and mobile paths: the client define
/// map, then per-capability entry, output and dev-server blocks.
pub(super) fn client(
    target: &BuildTarget,
    session: &BuildSession,
    platform: Platform,
    mut plugins: Vec<PluginDescriptor>,
    ports: &mut PortAllocator,
) -> Result<Fragment> {
    let backend_url =
        net::resolve_backend_url(&session.options.backend_url, session.dev, session.machine_addr);

    let mut defines = DefineMap::new();
    defines.insert("__CLIENT__".into(), DefineValue::Bool(true));
    defines.insert("__SERVER__".into(), DefineValue::Bool(false));
    defines.insert("__SSR__".into(), DefineValue::Bool(ssr(session)));
    defines.insert("__DEV__".into(), DefineValue::Bool(session.dev));
    defines.insert(
        "process.env.NODE_ENV".into(),
        DefineValue::quoted(node_env(session.dev, session.test)),
    );
    // Same-origin web clients defer to runtime-relative URLs; baking the
    // backend URL in is only needed cross-host or off-web.
    if platform != Platform::Web || net::host_of(&backend_url)? != "localhost" {
        defines.insert("__BACKEND_URL__".into(), DefineValue::quoted(&backend_url));
    }
    plugins.push(PluginDescriptor::Define(defines));

    if target.capabilities.has("web") {
        plugins.push(PluginDescriptor::Manifest {
            file_name: "assets.json".into(),
        });
        // Skip HTML emission when a sibling server target already serves
        // the document.
        if !session.any_target_has("server") {
            plugins.push(PluginDescriptor::Html {
                template: HTML_TEMPLATE.into(),
                inject: "body".into(),
            });
        }
        if !session.dev {
            plugins.push(PluginDescriptor::CommonsChunk {
                name: "vendor".into(),
                filename: "[name].[hash].js".into(),
                min_chunks: ChunkPredicate::NodeModules,
            });
        }
        web(target, session, plugins, &backend_url, ports)
    } else if target.capabilities.has("react-native") {
        mobile(target, session, plugins)
    } else {
        // Platform precedence should have matched one of the arms above.
        Err(Error::UnknownPlatformTarget {
            target: target.name.clone(),
            tags: target.capabilities.iter().map(String::from).collect(),
        })
    }
}

fn web(
    target: &BuildTarget,
    session: &BuildSession,
    plugins: Vec<PluginDescriptor>,
    backend_url: &str,
    ports: &mut PortAllocator,
) -> Result<Fragment> {
    let mut modules = Vec::new();
    if session.dev {
        modules.push(HOT_CLIENT_SHIM.to_string());
    }
    modules.push(CLIENT_ENTRY.to_string());
    let mut entry = EntryMap::new();
    entry.insert("index".into(), modules);

    let output = OutputSettings::new(
        "[name].[hash].js",
        session.options.frontend_build_dir.join("web"),
    );

    let mut dev_server = DevServerSettings::new(ports.allocate(&target.name, target.dev_port));
    let mut proxy = IndexMap::new();
    proxy.insert(
        "!/*.hot-update.{json,js}".to_string(),
        ProxyRule {
            target: net::base_url(backend_url)?,
            log_level: "info".into(),
        },
    );
    dev_server.proxy = Some(proxy);

    let mut fragment = base_fragment(target, session, plugins, entry, output);
    fragment.dev_server = Some(dev_server);
    Ok(fragment)
}

fn mobile(
    target: &BuildTarget,
    session: &BuildSession,
    plugins: Vec<PluginDescriptor>,
) -> Result<Fragment> {
    let mut entry = EntryMap::new();
    entry.insert("index".into(), vec![MOBILE_ENTRY.to_string()]);

    let output = OutputSettings::new(
        MOBILE_BUNDLE,
        session.options.frontend_build_dir.join(&target.name),
    );

    let mut dev_server = DevServerSettings::new(if target.capabilities.has("android") {
        ANDROID_DEV_PORT
    } else {
        MOBILE_DEV_PORT
    });
    dev_server.hot = false;

    let mut fragment = base_fragment(target, session, plugins, entry, output);
    fragment.dev_server = Some(dev_server);
    Ok(fragment)
}

fn ssr(session: &BuildSession) -> bool {
    session.options.ssr && !session.test
}
