//! # Meridian Text
//!
//! Text composition for the Meridian plugin ecosystem: an immutable
//! [`Text`] value, the [`TextRepresentable`] contract, and a
//! [`TextFormatter`]: an ordered, mutable sequence of text-producing
//! elements reduced to a single value on demand.
//!
//! A formatter is plain mutable state with no internal synchronization;
//! mutation requires `&mut self` and the host serializes access. Snapshots
//! taken with [`TextFormatter::all`] are defensive copies, decoupled from
//! any later mutation of the live sequence.
//!
//! ```rust
//! use meridian_text::{SimpleTextFormatter, TemplateApplier, TextFormatter};
//!
//! let mut formatter = SimpleTextFormatter::new();
//! formatter.push(TemplateApplier::new("[{channel}] ").with_parameter("channel", "global"));
//! formatter.push(TemplateApplier::new("{player} joined").with_parameter("player", "Alice"));
//!
//! assert_eq!(formatter.format().as_str(), "[global] Alice joined");
//! ```

mod formatter;
mod template;
mod text;

pub use formatter::{IndexOutOfBounds, SimpleTextFormatter, TextFormatter};
pub use template::TemplateApplier;
pub use text::{Text, TextRepresentable};
