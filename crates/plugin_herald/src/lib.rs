//! Herald: a sample plugin wired through the whole Meridian API surface.
//!
//! Herald does what most shipped plugins do on startup: declare metadata,
//! register with the host's plugin registry, load its locale dictionary
//! (embedded defaults, overridable by a file next to the server), and
//! expose the dictionary as a service. Its one feature is greeting players
//! in their locale.

use anyhow::Context;
use meridian_locale::{
    ConfigDictionary, Dictionary, Locale, ResourceProvider,
};
use meridian_plugin_api::{PluginContainer, PluginInstance, PluginMetadata, PluginRegistry};
use meridian_text::{SimpleTextFormatter, TemplateApplier, Text, TextFormatter};
use std::borrow::Cow;
use std::sync::Arc;
use tracing::info;

/// Locale documents compiled into the plugin. The file of the same name,
/// if present next to the server, takes precedence.
const MESSAGES: &str = "\
[en]
greeting = \"Welcome to the server, {player}!\"
farewell = \"Goodbye, {player}.\"

[de]
greeting = \"Willkommen auf dem Server, {player}!\"
";

const MESSAGES_FILE: &str = "herald.toml";

/// Locales Herald ships messages for.
const SHIPPED_LOCALES: [&str; 2] = ["en", "de"];

/// The Herald plugin instance.
pub struct HeraldPlugin;

impl HeraldPlugin {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HeraldPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl ResourceProvider for HeraldPlugin {
    fn embedded_resource(&self, name: &str) -> Option<Cow<'static, [u8]>> {
        (name == MESSAGES_FILE).then(|| Cow::Borrowed(MESSAGES.as_bytes()))
    }
}

impl PluginInstance for HeraldPlugin {}

/// A bootstrapped Herald: the registered container plus the live instance
/// the host must keep alive.
pub struct Herald {
    pub container: Arc<PluginContainer>,
    pub instance: Arc<HeraldPlugin>,
}

/// Registers Herald with `registry`, loads its dictionary, and exposes it
/// as a service.
pub fn bootstrap(registry: &PluginRegistry) -> anyhow::Result<Herald> {
    let instance = Arc::new(HeraldPlugin::new());
    let subject: Arc<dyn ResourceProvider> = instance.clone();

    let default_locale = Locale::new("en")?;
    let mut dictionary =
        ConfigDictionary::from_path(subject, default_locale, format!("config/{MESSAGES_FILE}"));
    for tag in SHIPPED_LOCALES {
        let locale = Locale::new(tag)?;
        dictionary
            .load(&locale)
            .with_context(|| format!("loading herald messages for {locale}"))?;
    }

    let metadata = PluginMetadata::new("herald")
        .with_name("Herald")
        .with_version(env!("CARGO_PKG_VERSION"))
        .with_description("Greets players in their own locale")
        .with_author("Meridian Team");

    let dyn_instance: Arc<dyn PluginInstance> = instance.clone();
    let container = registry.register(metadata, Some(&dyn_instance))?;
    container
        .services()
        .register::<dyn Dictionary>(Arc::new(dictionary));

    info!(parent: &container.logger(), "herald ready");
    Ok(Herald {
        container,
        instance,
    })
}

/// Composes a localized greeting for `player`.
///
/// Unknown locales and missing keys fall back through the dictionary's
/// default locale; a plugin with no dictionary at all still produces the
/// stock English line.
pub fn greet(dictionary: &dyn Dictionary, player: &str, locale: &Locale) -> Text {
    let template = dictionary
        .get("greeting", locale)
        .unwrap_or_else(|| "Welcome to the server, {player}!".to_string());

    let mut formatter = SimpleTextFormatter::new();
    formatter.push(TemplateApplier::new(template).with_parameter("player", player));
    formatter.format()
}
