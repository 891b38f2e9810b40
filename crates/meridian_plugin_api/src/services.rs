//! Per-plugin, type-keyed service registry.

use dashmap::DashMap;
use std::any::{Any, TypeId};
use std::sync::Arc;

/// Services a plugin exposes to the rest of the server, keyed by type.
///
/// A service type may be a concrete struct or a trait object: a plugin
/// registers its dictionary as `Arc<dyn Dictionary>` and consumers ask for
/// exactly that type. Multiple registrations of the same type append; the
/// first registration wins the [`provide_first`](Self::provide_first) slot.
///
/// ```rust
/// use meridian_plugin_api::ServiceManager;
/// use std::sync::Arc;
///
/// trait Greeter: Send + Sync {
///     fn greet(&self) -> String;
/// }
///
/// struct English;
/// impl Greeter for English {
///     fn greet(&self) -> String {
///         "hello".to_string()
///     }
/// }
///
/// let services = ServiceManager::new();
/// services.register::<dyn Greeter>(Arc::new(English));
///
/// let greeter = services.provide_first::<dyn Greeter>().unwrap();
/// assert_eq!(greeter.greet(), "hello");
/// ```
#[derive(Default)]
pub struct ServiceManager {
    services: DashMap<TypeId, Vec<Arc<dyn Any + Send + Sync>>>,
}

impl ServiceManager {
    pub fn new() -> Self {
        Self {
            services: DashMap::new(),
        }
    }

    /// Registers a service under type `S`.
    pub fn register<S>(&self, service: Arc<S>)
    where
        S: ?Sized + Send + Sync + 'static,
    {
        self.services
            .entry(TypeId::of::<S>())
            .or_default()
            .push(Arc::new(service));
    }

    /// The first service registered under type `S`.
    pub fn provide_first<S>(&self) -> Option<Arc<S>>
    where
        S: ?Sized + Send + Sync + 'static,
    {
        let entry = self.services.get(&TypeId::of::<S>())?;
        entry.first()?.downcast_ref::<Arc<S>>().cloned()
    }

    /// Every service registered under type `S`, in registration order.
    pub fn provide_all<S>(&self) -> Vec<Arc<S>>
    where
        S: ?Sized + Send + Sync + 'static,
    {
        self.services
            .get(&TypeId::of::<S>())
            .map(|entry| {
                entry
                    .iter()
                    .filter_map(|service| service.downcast_ref::<Arc<S>>().cloned())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Whether any service is registered under type `S`.
    pub fn is_registered<S>(&self) -> bool
    where
        S: ?Sized + Send + Sync + 'static,
    {
        self.services
            .get(&TypeId::of::<S>())
            .map_or(false, |entry| !entry.is_empty())
    }
}
