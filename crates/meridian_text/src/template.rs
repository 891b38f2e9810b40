//! The stock formatter element: a parameterized template.

use crate::text::{Text, TextRepresentable};
use std::collections::HashMap;

/// A template string with `{name}` placeholders and a parameter map.
///
/// Rendering substitutes parameters in a single pass; a placeholder with no
/// matching parameter is left in the output as-is, so a missing argument is
/// visible instead of silently vanishing. Substitution never recurses into
/// parameter values.
///
/// # Examples
///
/// ```rust
/// use meridian_text::{TemplateApplier, TextRepresentable};
///
/// let applier = TemplateApplier::new("{player} joined {channel}")
///     .with_parameter("player", "Alice");
/// assert_eq!(applier.to_text().as_str(), "Alice joined {channel}");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemplateApplier {
    template: String,
    parameters: HashMap<String, Text>,
}

impl TemplateApplier {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            parameters: HashMap::new(),
        }
    }

    /// Builder form of [`set_parameter`](Self::set_parameter).
    pub fn with_parameter(mut self, name: impl Into<String>, value: impl Into<Text>) -> Self {
        self.set_parameter(name, value);
        self
    }

    /// Sets a parameter, replacing any previous value under `name`.
    pub fn set_parameter(&mut self, name: impl Into<String>, value: impl Into<Text>) {
        self.parameters.insert(name.into(), value.into());
    }

    pub fn parameter(&self, name: &str) -> Option<&Text> {
        self.parameters.get(name)
    }

    pub fn template(&self) -> &str {
        &self.template
    }
}

impl TextRepresentable for TemplateApplier {
    fn to_text(&self) -> Text {
        let mut out = String::with_capacity(self.template.len());
        let mut rest = self.template.as_str();

        while let Some(start) = rest.find('{') {
            out.push_str(&rest[..start]);
            let tail = &rest[start..];
            match tail.find('}') {
                Some(end) => {
                    let name = &tail[1..end];
                    match self.parameters.get(name) {
                        Some(value) => out.push_str(value.as_str()),
                        None => out.push_str(&tail[..=end]),
                    }
                    rest = &tail[end + 1..];
                }
                None => {
                    // Unterminated placeholder; emit the remainder verbatim.
                    rest = tail;
                    break;
                }
            }
        }
        out.push_str(rest);

        Text::from(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_named_parameters() {
        let applier = TemplateApplier::new("Hello {player}, welcome to {server}!")
            .with_parameter("player", "Alice")
            .with_parameter("server", "Meridian");
        assert_eq!(
            applier.to_text().as_str(),
            "Hello Alice, welcome to Meridian!"
        );
    }

    #[test]
    fn unknown_placeholder_is_left_verbatim() {
        let applier = TemplateApplier::new("Hello {player}");
        assert_eq!(applier.to_text().as_str(), "Hello {player}");
    }

    #[test]
    fn substitution_is_a_single_pass() {
        // A parameter value containing a placeholder must not be expanded.
        let applier = TemplateApplier::new("{a}")
            .with_parameter("a", "{b}")
            .with_parameter("b", "boom");
        assert_eq!(applier.to_text().as_str(), "{b}");
    }

    #[test]
    fn unterminated_placeholder_is_preserved() {
        let applier = TemplateApplier::new("broken {name").with_parameter("name", "x");
        assert_eq!(applier.to_text().as_str(), "broken {name");
    }

    #[test]
    fn set_parameter_replaces_by_name() {
        let mut applier = TemplateApplier::new("{who}").with_parameter("who", "old");
        applier.set_parameter("who", "new");
        assert_eq!(applier.to_text().as_str(), "new");
        assert_eq!(applier.parameter("who"), Some(&Text::from("new")));
    }

    #[test]
    fn equality_covers_template_and_parameters() {
        let a = TemplateApplier::new("{x}").with_parameter("x", "1");
        let b = TemplateApplier::new("{x}").with_parameter("x", "1");
        let c = TemplateApplier::new("{x}").with_parameter("x", "2");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
