//! Source resolution strategies.
//!
//! A dictionary never knows where its bytes come from; it asks a
//! [`SourceResolver`] for a readable source and parses whatever comes back.
//! Closures implement the trait directly, so a per-locale source override is
//! just a `Fn(&Locale) -> ...` passed to the dictionary constructor.

use crate::error::DictionaryError;
use crate::locale::Locale;
use std::borrow::Cow;
use std::fs::File;
use std::io::{Cursor, Read};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

/// Pluggable strategy producing the raw byte source for a load request.
pub trait SourceResolver: Send + Sync {
    /// Resolves a readable source for `locale`, or fails with
    /// [`DictionaryError::ResourceNotFound`] when nothing can be found.
    fn resolve(&self, locale: &Locale) -> Result<Box<dyn Read + Send>, DictionaryError>;
}

impl<F> SourceResolver for F
where
    F: Fn(&Locale) -> Result<Box<dyn Read + Send>, DictionaryError> + Send + Sync,
{
    fn resolve(&self, locale: &Locale) -> Result<Box<dyn Read + Send>, DictionaryError> {
        (self)(locale)
    }
}

/// A subject that can serve resources compiled into the plugin itself.
///
/// This is the fallback half of the default resolver chain: plugins bundle
/// their stock locale documents with `include_str!`/`include_bytes!` and
/// hand them out by file name, so a dictionary still resolves when no file
/// has been unpacked next to the server.
pub trait ResourceProvider: Send + Sync {
    /// The bytes of an embedded resource, looked up by file name.
    fn embedded_resource(&self, _name: &str) -> Option<Cow<'static, [u8]>> {
        None
    }
}

/// Filesystem-first resolver with an embedded fallback.
///
/// Stage one opens the configured path if it exists on disk; stage two asks
/// the subject for an embedded resource named by the path's final segment.
/// Exactly one stage succeeds or the resolution fails. This is a
/// primary/fallback pair, not a search over multiple paths.
pub struct PathResolver {
    path: PathBuf,
    subject: Arc<dyn ResourceProvider>,
}

impl PathResolver {
    /// Creates a resolver over `path`, falling back to `subject`'s embedded
    /// resources.
    pub fn new(path: impl Into<PathBuf>, subject: Arc<dyn ResourceProvider>) -> Self {
        Self {
            path: path.into(),
            subject,
        }
    }

    /// The filesystem path probed by the primary stage.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl SourceResolver for PathResolver {
    fn resolve(&self, locale: &Locale) -> Result<Box<dyn Read + Send>, DictionaryError> {
        if self.path.exists() {
            debug!(path = %self.path.display(), "resolving dictionary source from filesystem");
            let file = File::open(&self.path)?;
            return Ok(Box::new(file));
        }

        let name = self
            .path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default();
        if let Some(bytes) = self.subject.embedded_resource(name) {
            debug!(resource = name, "resolving dictionary source from embedded resource");
            return Ok(Box::new(Cursor::new(bytes.into_owned())));
        }

        Err(DictionaryError::ResourceNotFound {
            locale: locale.clone(),
            path: self.path.display().to_string(),
        })
    }
}
