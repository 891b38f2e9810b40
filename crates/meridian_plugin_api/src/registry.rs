//! The plugin registry: id lookups, reverse instance lookups, and
//! convenience delegation.

use crate::container::{InstanceHandle, PluginContainer, PluginInstance, PluginMetadata};
use crate::error::RegistryError;
use crate::services::ServiceManager;
use dashmap::DashMap;
use meridian_locale::{Dictionary, NullDictionary};
use std::sync::Arc;
use tracing::{debug, info};

/// Registry of every plugin known to the host.
///
/// The registry owns the containers; plugins themselves are referenced
/// weakly, so an entry here never keeps a reclaimed plugin object alive.
/// Registration happens once at load time; lookups are read-only and may
/// come from anywhere.
#[derive(Default)]
pub struct PluginRegistry {
    plugins: DashMap<String, Arc<PluginContainer>>,
    /// Instance data-pointer address -> plugin id, for reverse lookups.
    by_instance: DashMap<usize, String>,
}

impl PluginRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn instance_addr(instance: &Arc<dyn PluginInstance>) -> usize {
        Arc::as_ptr(instance) as *const () as usize
    }

    /// Registers a plugin, returning its container.
    ///
    /// Fails with [`RegistryError::InvalidId`] on a malformed id and
    /// [`RegistryError::DuplicateId`] when the id is already taken. Passing
    /// the live instance enables reverse lookups via
    /// [`from_instance`](Self::from_instance); metadata-only discovery
    /// passes `None`.
    pub fn register(
        &self,
        metadata: PluginMetadata,
        instance: Option<&Arc<dyn PluginInstance>>,
    ) -> Result<Arc<PluginContainer>, RegistryError> {
        if !metadata.has_valid_id() {
            return Err(RegistryError::InvalidId(metadata.id));
        }
        let id = metadata.id.clone();

        let container = Arc::new(PluginContainer::new(metadata, instance));
        match self.plugins.entry(id.clone()) {
            dashmap::mapref::entry::Entry::Occupied(_) => {
                return Err(RegistryError::DuplicateId(id));
            }
            dashmap::mapref::entry::Entry::Vacant(vacant) => {
                vacant.insert(container.clone());
            }
        }
        if let Some(instance) = instance {
            self.by_instance.insert(Self::instance_addr(instance), id.clone());
        }

        info!(
            plugin = %id,
            version = container.version().unwrap_or("unknown"),
            "registered plugin"
        );
        Ok(container)
    }

    /// Reverse lookup from a live plugin instance back to its container.
    ///
    /// Absent when the instance is unrecognized. The pointer index is
    /// verified against the container's own weak reference, so an address
    /// reclaimed and reused by the allocator can never resolve to a foreign
    /// plugin.
    pub fn from_instance(
        &self,
        instance: &Arc<dyn PluginInstance>,
    ) -> Option<Arc<PluginContainer>> {
        let id = self.by_instance.get(&Self::instance_addr(instance))?;
        let container = self.plugins.get(id.value())?.clone();
        let live = container.instance()?;
        Arc::ptr_eq(&live, instance).then_some(container)
    }

    /// Like [`from_instance`](Self::from_instance), but a miss is a hard
    /// [`RegistryError::PluginNotFound`], for callers who have already
    /// asserted the instance is a managed plugin.
    pub fn find(
        &self,
        instance: &Arc<dyn PluginInstance>,
    ) -> Result<Arc<PluginContainer>, RegistryError> {
        self.from_instance(instance)
            .ok_or_else(|| RegistryError::PluginNotFound(InstanceHandle::new(instance.clone())))
    }

    /// The container registered under `id`.
    pub fn plugin(&self, id: &str) -> Option<Arc<PluginContainer>> {
        self.plugins.get(id).map(|entry| entry.clone())
    }

    /// Every known container, in no particular order. May include plugins
    /// registered by foreign host systems.
    pub fn plugins(&self) -> Vec<Arc<PluginContainer>> {
        self.plugins.iter().map(|entry| entry.value().clone()).collect()
    }

    /// Whether a plugin with `id` is registered.
    pub fn is_loaded(&self, id: &str) -> bool {
        self.plugins.contains_key(id)
    }

    /// The id of the plugin owning `instance`.
    pub fn id_of(&self, instance: &Arc<dyn PluginInstance>) -> Result<String, RegistryError> {
        Ok(self.find(instance)?.id().to_owned())
    }

    /// The declared name of the plugin owning `instance`.
    pub fn name_of(
        &self,
        instance: &Arc<dyn PluginInstance>,
    ) -> Result<Option<String>, RegistryError> {
        Ok(self.find(instance)?.name().map(str::to_owned))
    }

    /// The declared version of the plugin owning `instance`.
    pub fn version_of(
        &self,
        instance: &Arc<dyn PluginInstance>,
    ) -> Result<Option<String>, RegistryError> {
        Ok(self.find(instance)?.version().map(str::to_owned))
    }

    /// The service manager of the plugin owning `instance`.
    pub fn services_of(
        &self,
        instance: &Arc<dyn PluginInstance>,
    ) -> Result<Arc<ServiceManager>, RegistryError> {
        Ok(self.find(instance)?.services().clone())
    }

    /// The dictionary service of the plugin owning `instance`.
    ///
    /// Falls back to a [`NullDictionary`] sentinel when the plugin
    /// registered none, so localization is always available to callers.
    pub fn dictionary(
        &self,
        instance: &Arc<dyn PluginInstance>,
    ) -> Result<Arc<dyn Dictionary>, RegistryError> {
        let container = self.find(instance)?;
        match container.services().provide_first::<dyn Dictionary>() {
            Some(dictionary) => Ok(dictionary),
            None => {
                debug!(
                    plugin = %container.id(),
                    "no dictionary service registered, using null dictionary"
                );
                Ok(Arc::new(NullDictionary::new()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use meridian_locale::{Locale, ResourceProvider};

    struct TestPlugin;

    impl ResourceProvider for TestPlugin {}
    impl PluginInstance for TestPlugin {}

    fn instance() -> Arc<dyn PluginInstance> {
        Arc::new(TestPlugin)
    }

    #[test]
    fn register_then_query_by_id() {
        let registry = PluginRegistry::new();
        registry
            .register(PluginMetadata::new("alpha").with_version("1.0.0"), None)
            .unwrap();

        assert!(registry.is_loaded("alpha"));
        assert!(!registry.is_loaded("beta"));
        assert_eq!(registry.plugin("alpha").unwrap().id(), "alpha");
        assert_eq!(registry.plugins().len(), 1);
    }

    #[test]
    fn duplicate_id_is_rejected() {
        let registry = PluginRegistry::new();
        registry.register(PluginMetadata::new("dup"), None).unwrap();
        let err = registry.register(PluginMetadata::new("dup"), None).unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateId(id) if id == "dup"));
    }

    #[test]
    fn invalid_id_is_rejected() {
        let registry = PluginRegistry::new();
        let err = registry
            .register(PluginMetadata::new("Not Valid"), None)
            .unwrap_err();
        assert!(matches!(err, RegistryError::InvalidId(_)));
    }

    #[test]
    fn from_instance_round_trips() {
        let registry = PluginRegistry::new();
        let plugin = instance();
        registry
            .register(PluginMetadata::new("tracked"), Some(&plugin))
            .unwrap();

        let container = registry.from_instance(&plugin).unwrap();
        assert_eq!(container.id(), "tracked");
        assert_eq!(registry.id_of(&plugin).unwrap(), "tracked");
    }

    #[test]
    fn unknown_instance_is_absent_or_not_found() {
        let registry = PluginRegistry::new();
        let stranger = instance();

        assert!(registry.from_instance(&stranger).is_none());
        let err = registry.find(&stranger).unwrap_err();
        assert!(matches!(err, RegistryError::PluginNotFound(_)));
    }

    #[test]
    fn not_found_error_carries_the_instance() {
        let registry = PluginRegistry::new();
        let stranger = instance();

        match registry.find(&stranger).unwrap_err() {
            RegistryError::PluginNotFound(handle) => {
                assert!(Arc::ptr_eq(handle.instance(), &stranger));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn reclaimed_instance_no_longer_resolves() {
        let registry = PluginRegistry::new();
        let plugin = instance();
        registry
            .register(PluginMetadata::new("shortlived"), Some(&plugin))
            .unwrap();

        // A clone of the Arc observed before the drop.
        let other_ref = plugin.clone();
        drop(plugin);
        assert!(registry.from_instance(&other_ref).is_some());

        drop(other_ref);
        let fresh = instance();
        assert!(registry.from_instance(&fresh).is_none());
    }

    #[test]
    fn dictionary_falls_back_to_null_sentinel() {
        let registry = PluginRegistry::new();
        let plugin = instance();
        registry
            .register(PluginMetadata::new("mute"), Some(&plugin))
            .unwrap();

        let dictionary = registry.dictionary(&plugin).unwrap();
        assert_eq!(dictionary.get("anything", &Locale::new("en").unwrap()), None);
    }

    #[test]
    fn dictionary_for_unknown_instance_is_not_found() {
        let registry = PluginRegistry::new();
        let stranger = instance();
        assert!(matches!(
            registry.dictionary(&stranger),
            Err(RegistryError::PluginNotFound(_))
        ));
    }
}
