//! Mode-axis plugin selection, applied before platform settings.

use gantry_config::Platform;

use crate::plugins::PluginDescriptor;

/// Plugins selected by build mode, independent of platform settings.
///
/// Dev builds get the module-naming aid, plus hot replacement and
/// no-emit-on-errors on platforms with a running process to patch.
/// Production builds get minification and module concatenation.
pub fn mode_plugins(dev: bool, platform: Platform) -> Vec<PluginDescriptor> {
    let mut plugins = Vec::new();
    if dev {
        plugins.push(PluginDescriptor::NamedModules);
        if matches!(platform, Platform::Server | Platform::Web) {
            plugins.push(PluginDescriptor::HotModuleReplacement);
            plugins.push(PluginDescriptor::NoEmitOnErrors);
        }
    } else {
        plugins.push(PluginDescriptor::Uglify { minimize: true });
        plugins.push(PluginDescriptor::LoaderOptions { minimize: true });
        plugins.push(PluginDescriptor::ModuleConcatenation);
    }
    plugins
}
