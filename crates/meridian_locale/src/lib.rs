//! # Meridian Locale
//!
//! Per-plugin localization support for the Meridian plugin ecosystem.
//! Each plugin owns a [`Dictionary`]: a locale-keyed store of parsed
//! configuration documents ("bundles") that message lookups read from.
//!
//! ## Core Concepts
//!
//! - **Locale**: A validated language/region tag ([`Locale`]) used as the
//!   bundle-map key. Tags are normalized on construction, so two spellings
//!   of the same locale always hash to the same bundle.
//! - **Bundle**: One immutable parsed TOML document per locale
//!   ([`ConfigResourceBundle`]), populated lazily on the first successful
//!   load and replaced wholesale on later loads.
//! - **Resolver strategy**: A pluggable [`SourceResolver`] that produces the
//!   raw byte source for a load request. The stock [`PathResolver`] checks a
//!   filesystem path first and falls back to a resource the plugin compiled
//!   in (the [`ResourceProvider`] contract).
//!
//! Loading is explicit and synchronous: [`ConfigDictionary::load`] performs
//! the only I/O in this crate, and lookups never touch the filesystem. The
//! host is expected to serialize access to a dictionary; mutation requires
//! `&mut self`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use meridian_locale::{ConfigDictionary, Dictionary, Locale, ResourceProvider};
//! use std::sync::Arc;
//!
//! struct MyPlugin;
//! impl ResourceProvider for MyPlugin {}
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let subject: Arc<dyn ResourceProvider> = Arc::new(MyPlugin);
//! let mut dictionary =
//!     ConfigDictionary::from_path(subject, Locale::new("en")?, "config/messages.toml");
//!
//! let locale = Locale::new("de_DE")?;
//! dictionary.load(&locale)?;
//! if let Some(message) = dictionary.get("greeting", &locale) {
//!     println!("{message}");
//! }
//! # Ok(())
//! # }
//! ```

mod bundle;
mod dictionary;
mod error;
mod locale;
mod source;

pub use bundle::ConfigResourceBundle;
pub use dictionary::{ConfigDictionary, Dictionary, NullDictionary, SourceLayout};
pub use error::DictionaryError;
pub use locale::{InvalidLocaleTag, Locale};
pub use source::{PathResolver, ResourceProvider, SourceResolver};
