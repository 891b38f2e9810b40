//! Dictionary error types.

use crate::locale::Locale;

/// Errors that can occur while loading a dictionary source.
///
/// Absent values (no bundle cached, no entry for a key) are represented as
/// `Option`, never as errors; this enum only covers `load` failures. A
/// failed load leaves the bundle cache untouched.
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    /// Reading the resolved source failed.
    #[error("I/O error reading dictionary source: {0}")]
    Io(#[from] std::io::Error),
    /// The source was read but could not be parsed as a configuration
    /// document.
    #[error("failed to parse dictionary source: {0}")]
    Parse(#[from] toml::de::Error),
    /// No stage of the resolver chain produced a source for the locale.
    #[error("no dictionary source found for locale {locale} at {path:?}")]
    ResourceNotFound {
        /// Locale the load was requested for.
        locale: Locale,
        /// Path or description of the location that was probed.
        path: String,
    },
}
