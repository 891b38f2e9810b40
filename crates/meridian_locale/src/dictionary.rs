//! The locale dictionary: lazy per-locale loading with a bundle cache.

use crate::bundle::ConfigResourceBundle;
use crate::error::DictionaryError;
use crate::locale::Locale;
use crate::source::{PathResolver, ResourceProvider, SourceResolver};
use std::collections::HashMap;
use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;
use toml::Value;
use tracing::debug;

/// Read side of a per-plugin localization resource provider.
///
/// Lookups are pure reads over already-loaded bundles and never perform
/// I/O, which is what makes a dictionary safe to hand out as a shared
/// service once its locales are loaded.
pub trait Dictionary: Send + Sync {
    /// The locale consulted when the requested one has no entry.
    fn default_locale(&self) -> &Locale;

    /// Looks up the message at `key` (a dotted path) for `locale`, falling
    /// through to the default locale's bundle. Absent is a value here, not
    /// an error.
    fn get(&self, key: &str, locale: &Locale) -> Option<String>;

    /// Looks up `key` in the default locale.
    fn get_default(&self, key: &str) -> Option<String> {
        let locale = self.default_locale().clone();
        self.get(key, &locale)
    }
}

/// How the resolved document maps onto a bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceLayout {
    /// One document shared by all locales, with one sub-table per locale
    /// keyed by its canonical tag. A missing sub-table yields an empty
    /// bundle, not an error.
    #[default]
    SharedDocument,
    /// The resolver produces a separate document per locale; the document
    /// root is the bundle.
    DocumentPerLocale,
}

/// The concrete dictionary: a locale-keyed bundle cache over a pluggable
/// source resolver.
///
/// Per locale, the state moves `UNLOADED -> LOADED` on the first successful
/// [`load`](Self::load) and stays `LOADED` from then on. Later loads and
/// [`set_bundle`](Self::set_bundle) replace the bundle, and nothing evicts
/// one. A failed load leaves the cache exactly as it was.
///
/// There is no internal synchronization; mutation requires `&mut self` and
/// the host serializes access, typically from its main thread.
pub struct ConfigDictionary {
    subject: Arc<dyn ResourceProvider>,
    default_locale: Locale,
    resolver: Box<dyn SourceResolver>,
    layout: SourceLayout,
    bundles: HashMap<Locale, ConfigResourceBundle>,
}

impl ConfigDictionary {
    /// Creates a dictionary over an arbitrary resolver, using the shared
    /// document layout.
    pub fn new(
        subject: Arc<dyn ResourceProvider>,
        default_locale: Locale,
        resolver: impl SourceResolver + 'static,
    ) -> Self {
        Self {
            subject,
            default_locale,
            resolver: Box::new(resolver),
            layout: SourceLayout::default(),
            bundles: HashMap::new(),
        }
    }

    /// Creates the default dictionary wiring: a [`PathResolver`] that reads
    /// `path` from disk and falls back to the subject's embedded resource
    /// of the same file name.
    pub fn from_path(
        subject: Arc<dyn ResourceProvider>,
        default_locale: Locale,
        path: impl Into<PathBuf>,
    ) -> Self {
        let resolver = PathResolver::new(path, subject.clone());
        Self::new(subject, default_locale, resolver)
    }

    /// Overrides how resolved documents map onto bundles.
    pub fn with_layout(mut self, layout: SourceLayout) -> Self {
        self.layout = layout;
        self
    }

    /// The owning plugin instance this dictionary localizes for.
    pub fn subject(&self) -> &Arc<dyn ResourceProvider> {
        &self.subject
    }

    /// Resolves, parses, and caches the bundle for `locale`, returning the
    /// configuration node that was cached.
    ///
    /// The resolver supplies the raw source; the document is parsed as TOML
    /// and narrowed per the [`SourceLayout`]. On success the previous bundle
    /// for the locale (if any) is overwritten. On failure nothing is cached.
    pub fn load(&mut self, locale: &Locale) -> Result<Value, DictionaryError> {
        debug!(locale = %locale, "loading dictionary source");
        let mut source = self.resolver.resolve(locale)?;
        let mut raw = String::new();
        source.read_to_string(&mut raw)?;
        let document: Value = toml::from_str(&raw)?;

        let node = match self.layout {
            SourceLayout::SharedDocument => document
                .get(locale.as_str())
                .cloned()
                .unwrap_or_else(|| Value::Table(toml::map::Map::new())),
            SourceLayout::DocumentPerLocale => document,
        };

        let replaced = self
            .bundles
            .insert(locale.clone(), ConfigResourceBundle::new(node.clone()))
            .is_some();
        debug!(locale = %locale, replaced, "cached dictionary bundle");
        Ok(node)
    }

    /// The cached configuration node for `locale`, if one has been loaded.
    pub fn get_node(&self, locale: &Locale) -> Option<&Value> {
        self.bundles.get(locale).map(ConfigResourceBundle::node)
    }

    /// The cached bundle for `locale`, if one has been loaded.
    pub fn get_bundle(&self, locale: &Locale) -> Option<&ConfigResourceBundle> {
        self.bundles.get(locale)
    }

    /// Injects a bundle directly, overwriting any cached one for `locale`.
    pub fn set_bundle(&mut self, locale: Locale, bundle: ConfigResourceBundle) {
        self.bundles.insert(locale, bundle);
    }

    /// Locales with a cached bundle.
    pub fn loaded_locales(&self) -> impl Iterator<Item = &Locale> {
        self.bundles.keys()
    }
}

impl Dictionary for ConfigDictionary {
    fn default_locale(&self) -> &Locale {
        &self.default_locale
    }

    fn get(&self, key: &str, locale: &Locale) -> Option<String> {
        if let Some(message) = self
            .bundles
            .get(locale)
            .and_then(|bundle| bundle.string(key))
        {
            return Some(message.to_owned());
        }
        if locale != &self.default_locale {
            return self
                .bundles
                .get(&self.default_locale)
                .and_then(|bundle| bundle.string(key))
                .map(str::to_owned);
        }
        None
    }
}

/// No-op dictionary sentinel.
///
/// Handed to callers asking for the dictionary of a plugin that never
/// registered one, so localization can be treated as always available.
/// Every lookup is absent.
#[derive(Debug, Clone)]
pub struct NullDictionary {
    default_locale: Locale,
}

impl NullDictionary {
    pub fn new() -> Self {
        Self {
            // "en" is a valid tag by construction.
            default_locale: Locale::new("en").expect("static locale tag"),
        }
    }
}

impl Default for NullDictionary {
    fn default() -> Self {
        Self::new()
    }
}

impl Dictionary for NullDictionary {
    fn default_locale(&self) -> &Locale {
        &self.default_locale
    }

    fn get(&self, _key: &str, _locale: &Locale) -> Option<String> {
        None
    }
}
