//! Plugin identity: metadata, containers, and the instance contract.

use crate::services::ServiceManager;
use meridian_locale::ResourceProvider;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::{Arc, Weak};
use tracing::Span;

/// Contract for a live plugin object managed by the host.
///
/// The supertrait is what lets any plugin instance act as the subject of
/// its own dictionary: locale documents the plugin compiled in are served
/// through [`ResourceProvider::embedded_resource`].
pub trait PluginInstance: ResourceProvider + 'static {}

/// Cloneable handle naming a plugin instance in diagnostics.
///
/// Carried by [`RegistryError::PluginNotFound`](crate::RegistryError) so
/// the error names the exact instance the caller passed, without requiring
/// plugin objects to implement `Debug`.
#[derive(Clone)]
pub struct InstanceHandle(Arc<dyn PluginInstance>);

impl InstanceHandle {
    pub(crate) fn new(instance: Arc<dyn PluginInstance>) -> Self {
        Self(instance)
    }

    /// The instance this handle names.
    pub fn instance(&self) -> &Arc<dyn PluginInstance> {
        &self.0
    }
}

impl fmt::Debug for InstanceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "InstanceHandle({:p})",
            Arc::as_ptr(&self.0) as *const ()
        )
    }
}

impl fmt::Display for InstanceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<plugin instance at {:p}>",
            Arc::as_ptr(&self.0) as *const ()
        )
    }
}

/// Declared identity of a plugin.
///
/// Only the id is mandatory; everything else is optional metadata a plugin
/// may or may not declare. Ids are lowercase `[a-z][a-z0-9_-]*`.
///
/// Buildable in code or deserialized from a TOML manifest:
///
/// ```rust
/// use meridian_plugin_api::PluginMetadata;
///
/// let metadata = PluginMetadata::from_manifest(
///     r#"
///     id = "herald"
///     name = "Herald"
///     version = "0.1.0"
///     authors = ["Meridian Team"]
///     "#,
/// )
/// .unwrap();
/// assert_eq!(metadata.id, "herald");
/// assert_eq!(metadata.name.as_deref(), Some("Herald"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginMetadata {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub authors: Vec<String>,
}

impl PluginMetadata {
    /// Metadata carrying only an id.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            version: None,
            description: None,
            url: None,
            authors: Vec::new(),
        }
    }

    /// Parses metadata from a TOML manifest document.
    pub fn from_manifest(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Appends an author.
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.authors.push(author.into());
        self
    }

    /// Whether the id is well-formed.
    pub fn has_valid_id(&self) -> bool {
        let mut chars = self.id.chars();
        matches!(chars.next(), Some(c) if c.is_ascii_lowercase())
            && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-')
    }
}

/// Read-only accessor bundle for one registered plugin.
///
/// Containers are created by the registry and shared as
/// `Arc<PluginContainer>`. The instance reference is weak: `instance()`
/// returns `Some` only while the host still holds the plugin object, and
/// absence means the plugin is known but was never materialized or has
/// been reclaimed.
pub struct PluginContainer {
    metadata: PluginMetadata,
    services: Arc<ServiceManager>,
    instance: Option<Weak<dyn PluginInstance>>,
}

impl PluginContainer {
    pub(crate) fn new(
        metadata: PluginMetadata,
        instance: Option<&Arc<dyn PluginInstance>>,
    ) -> Self {
        Self {
            metadata,
            services: Arc::new(ServiceManager::new()),
            instance: instance.map(Arc::downgrade),
        }
    }

    pub fn id(&self) -> &str {
        &self.metadata.id
    }

    pub fn name(&self) -> Option<&str> {
        self.metadata.name.as_deref()
    }

    pub fn version(&self) -> Option<&str> {
        self.metadata.version.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.metadata.description.as_deref()
    }

    pub fn url(&self) -> Option<&str> {
        self.metadata.url.as_deref()
    }

    pub fn authors(&self) -> &[String] {
        &self.metadata.authors
    }

    pub fn metadata(&self) -> &PluginMetadata {
        &self.metadata
    }

    /// The per-plugin service registry.
    pub fn services(&self) -> &Arc<ServiceManager> {
        &self.services
    }

    /// The live plugin object, while the host still references it.
    pub fn instance(&self) -> Option<Arc<dyn PluginInstance>> {
        self.instance.as_ref()?.upgrade()
    }

    /// A tracing span keyed by the plugin id, for log lines attributable to
    /// this plugin.
    pub fn logger(&self) -> Span {
        tracing::info_span!("plugin", id = %self.metadata.id)
    }
}

impl fmt::Debug for PluginContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PluginContainer")
            .field("metadata", &self.metadata)
            .field("has_instance", &self.instance().is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestPlugin;

    impl ResourceProvider for TestPlugin {}
    impl PluginInstance for TestPlugin {}

    #[test]
    fn builder_accumulates_metadata() {
        let metadata = PluginMetadata::new("chronicle")
            .with_name("Chronicle")
            .with_version("1.2.0")
            .with_description("Keeps the server history")
            .with_url("https://example.invalid/chronicle")
            .with_author("Alice")
            .with_author("Bob");

        assert_eq!(metadata.id, "chronicle");
        assert_eq!(metadata.authors, ["Alice", "Bob"]);
        assert!(metadata.has_valid_id());
    }

    #[test]
    fn manifest_without_optional_fields_parses() {
        let metadata = PluginMetadata::from_manifest("id = \"bare\"\n").unwrap();
        assert_eq!(metadata.id, "bare");
        assert_eq!(metadata.name, None);
        assert!(metadata.authors.is_empty());
    }

    #[test]
    fn id_validation_rejects_bad_shapes() {
        for id in ["", "Upper", "9starts-with-digit", "has space", "ümlaut"] {
            assert!(
                !PluginMetadata::new(id).has_valid_id(),
                "expected {id:?} to be rejected"
            );
        }
        assert!(PluginMetadata::new("ok_id-2").has_valid_id());
    }

    #[test]
    fn instance_reference_is_weak() {
        let instance: Arc<dyn PluginInstance> = Arc::new(TestPlugin);
        let container = PluginContainer::new(PluginMetadata::new("weakling"), Some(&instance));

        assert!(container.instance().is_some());
        drop(instance);
        assert!(container.instance().is_none());
    }

    #[test]
    fn container_without_instance_reports_absent() {
        let container = PluginContainer::new(PluginMetadata::new("ghost"), None);
        assert!(container.instance().is_none());
    }
}
