//! Registry error types.

use crate::container::InstanceHandle;

/// Errors produced by the plugin registry.
///
/// A registry *miss* is only an error on the [`find`] path; callers who
/// have not asserted the instance is managed use
/// [`from_instance`] and get `Option` instead.
///
/// [`find`]: crate::PluginRegistry::find
/// [`from_instance`]: crate::PluginRegistry::from_instance
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// The given instance is not a managed plugin. Carries a handle to the
    /// offending instance.
    #[error("plugin not found for instance {0}")]
    PluginNotFound(InstanceHandle),
    /// A plugin with this id is already registered.
    #[error("plugin id {0:?} is already registered")]
    DuplicateId(String),
    /// The declared id is not lowercase `[a-z][a-z0-9_-]*`.
    #[error("invalid plugin id {0:?}")]
    InvalidId(String),
}
