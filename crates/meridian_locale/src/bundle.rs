//! Parsed configuration bundles.

use toml::Value;

/// A cached, parsed configuration document for one locale.
///
/// Bundles are immutable once constructed; a dictionary replaces the whole
/// bundle when a locale is reloaded rather than mutating it in place.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigResourceBundle {
    node: Value,
}

impl ConfigResourceBundle {
    /// Wraps an already-parsed configuration tree.
    pub fn new(node: Value) -> Self {
        Self { node }
    }

    /// A bundle over an empty table. Used when a shared document carries no
    /// section for the requested locale.
    pub fn empty() -> Self {
        Self::new(Value::Table(toml::map::Map::new()))
    }

    /// The root of the wrapped configuration tree.
    pub fn node(&self) -> &Value {
        &self.node
    }

    /// Looks up a value by dotted path, e.g. `"commands.help.description"`.
    pub fn get(&self, path: &str) -> Option<&Value> {
        let mut node = &self.node;
        for segment in path.split('.') {
            node = node.as_table()?.get(segment)?;
        }
        Some(node)
    }

    /// Looks up a string value by dotted path.
    pub fn string(&self, path: &str) -> Option<&str> {
        self.get(path)?.as_str()
    }
}
