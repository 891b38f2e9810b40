//! # Meridian Plugin API
//!
//! Plugin identity and registry for the Meridian game-server plugin
//! ecosystem. This crate defines what the host and other plugins may know
//! about a plugin. It does not load plugins, isolate them, or resolve
//! dependencies between them; that machinery lives in the embedding host.
//!
//! ## Core Concepts
//!
//! - **Metadata**: [`PluginMetadata`] is the declared identity of a plugin:
//!   a mandatory id plus optional name, version, description, url, and
//!   authors. Buildable in code or deserialized from a TOML manifest.
//! - **Container**: [`PluginContainer`] is the read-only accessor bundle the
//!   registry hands out: metadata, a per-plugin [`ServiceManager`], a
//!   per-plugin tracing span, and a weak reference to the live plugin
//!   object (absent when the plugin is known but not instantiated).
//! - **Registry**: [`PluginRegistry`] answers id lookups, reverse lookups
//!   from a live instance back to its container, and convenience queries
//!   that delegate through [`PluginRegistry::find`].
//!
//! Localization ties in through the service registry: a plugin that wants
//! to be localized registers its dictionary as a `dyn Dictionary` service,
//! and [`PluginRegistry::dictionary`] falls back to a no-op sentinel when
//! none was registered, so callers can treat localization as always
//! available.

mod container;
mod error;
mod registry;
mod services;

pub use container::{InstanceHandle, PluginContainer, PluginInstance, PluginMetadata};
pub use error::RegistryError;
pub use registry::PluginRegistry;
pub use services::ServiceManager;
