//! Locale identifiers.
//!
//! A [`Locale`] is an opaque language/region tag used purely as a map key:
//! equality and hashing matter, ordering does not. Tags are validated and
//! normalized at construction, which is what lets the bundle map promise it
//! never holds a malformed key.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error produced when a locale tag fails validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid locale tag: {0:?}")]
pub struct InvalidLocaleTag(pub String);

/// A validated, normalized language/region identifier.
///
/// The canonical form is `language` or `language_REGION`: a lowercase
/// ASCII language subtag (2 to 8 letters) optionally followed by an
/// uppercase region subtag (2 to 3 letters or digits). Both `-` and `_`
/// are accepted as separators on input.
///
/// # Examples
///
/// ```rust
/// use meridian_locale::Locale;
///
/// let locale = Locale::new("en-us").unwrap();
/// assert_eq!(locale.as_str(), "en_US");
/// assert_eq!(locale.language(), "en");
/// assert_eq!(locale.region(), Some("US"));
///
/// assert!(Locale::new("").is_err());
/// assert!(Locale::new("e").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Locale {
    tag: String,
    language_len: usize,
}

impl Locale {
    /// Parses and normalizes a locale tag.
    pub fn new(tag: impl AsRef<str>) -> Result<Self, InvalidLocaleTag> {
        let raw = tag.as_ref();
        let mut parts = raw.split(['-', '_']);

        let language = parts.next().unwrap_or_default();
        let region = parts.next();
        if parts.next().is_some() {
            return Err(InvalidLocaleTag(raw.to_string()));
        }

        if !(2..=8).contains(&language.len())
            || !language.chars().all(|c| c.is_ascii_alphabetic())
        {
            return Err(InvalidLocaleTag(raw.to_string()));
        }

        let mut tag = language.to_ascii_lowercase();
        let language_len = tag.len();

        if let Some(region) = region {
            if !(2..=3).contains(&region.len())
                || !region.chars().all(|c| c.is_ascii_alphanumeric())
            {
                return Err(InvalidLocaleTag(raw.to_string()));
            }
            tag.push('_');
            tag.push_str(&region.to_ascii_uppercase());
        }

        Ok(Self { tag, language_len })
    }

    /// The canonical string form, e.g. `"en"` or `"en_US"`.
    pub fn as_str(&self) -> &str {
        &self.tag
    }

    /// The language subtag, e.g. `"en"`.
    pub fn language(&self) -> &str {
        &self.tag[..self.language_len]
    }

    /// The region subtag, if one was given, e.g. `"US"`.
    pub fn region(&self) -> Option<&str> {
        self.tag.get(self.language_len + 1..)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tag)
    }
}

impl FromStr for Locale {
    type Err = InvalidLocaleTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Locale {
    type Error = InvalidLocaleTag;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.tag
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_case_and_separator() {
        let locale = Locale::new("EN-us").unwrap();
        assert_eq!(locale.as_str(), "en_US");
        assert_eq!(locale.language(), "en");
        assert_eq!(locale.region(), Some("US"));
    }

    #[test]
    fn language_only_tag_has_no_region() {
        let locale = Locale::new("de").unwrap();
        assert_eq!(locale.as_str(), "de");
        assert_eq!(locale.region(), None);
    }

    #[test]
    fn equivalent_spellings_are_equal() {
        assert_eq!(Locale::new("pt-BR").unwrap(), Locale::new("PT_br").unwrap());
    }

    #[test]
    fn rejects_malformed_tags() {
        for tag in ["", "e", "en_", "en_USSR", "en-US-x", "12", "en us"] {
            assert!(Locale::new(tag).is_err(), "expected {tag:?} to be rejected");
        }
    }

    #[test]
    fn numeric_region_is_accepted() {
        let locale = Locale::new("es-419").unwrap();
        assert_eq!(locale.as_str(), "es_419");
    }

    #[test]
    fn serde_round_trips_canonical_form() {
        let locale = Locale::new("fr-ca").unwrap();
        let json = serde_json::to_string(&locale).unwrap();
        assert_eq!(json, "\"fr_CA\"");
        let back: Locale = serde_json::from_str(&json).unwrap();
        assert_eq!(back, locale);
    }
}
