//! Ordered, mutable sequences of text-producing elements.

use crate::text::{Text, TextRepresentable};

/// Error produced when an insertion index is past the end of the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("insert index {index} out of bounds for formatter of length {len}")]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

/// An ordered, mutable sequence of text-producing elements that reduces to
/// a single [`Text`] value on demand.
///
/// Duplicates are permitted and order is significant; every mutation
/// preserves the relative order of the elements it keeps. All bulk
/// operations take `impl IntoIterator`, so a single element, a vector, or
/// any other iterable goes through one canonical code path with one
/// well-defined semantics.
pub trait TextFormatter<E>: TextRepresentable
where
    E: TextRepresentable + Clone + PartialEq,
{
    /// A defensive snapshot of the sequence. Mutating the formatter after
    /// the snapshot was taken never affects a previously returned copy.
    fn all(&self) -> Vec<E>;

    /// The element at `index`, if in range.
    fn get(&self, index: usize) -> Option<E> {
        self.all().get(index).cloned()
    }

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes every element.
    fn clear(&mut self);

    /// Appends `elements` in iteration order. Returns whether the sequence
    /// changed.
    fn add<I>(&mut self, elements: I) -> bool
    where
        I: IntoIterator<Item = E>;

    /// Appends a single element. Returns whether the sequence changed.
    fn push(&mut self, element: E) -> bool {
        self.add(Some(element))
    }

    /// Inserts `elements` starting at `index`, shifting later elements
    /// right. An out-of-range index is an error and leaves the sequence
    /// untouched; `index == len` appends.
    fn insert<I>(&mut self, index: usize, elements: I) -> Result<(), IndexOutOfBounds>
    where
        I: IntoIterator<Item = E>;

    /// Removes every occurrence of each given element. Returns whether the
    /// sequence changed.
    fn remove<I>(&mut self, elements: I) -> bool
    where
        I: IntoIterator<Item = E>;

    /// Removes every element not contained in `elements`, preserving the
    /// relative order of the survivors. Returns whether the sequence
    /// changed.
    fn retain<I>(&mut self, elements: I) -> bool
    where
        I: IntoIterator<Item = E>;

    /// Folds the sequence left to right, concatenating each element's text
    /// onto the empty value. Read-only; safe to call repeatedly.
    fn format(&self) -> Text {
        self.all()
            .iter()
            .fold(Text::empty(), |acc, element| acc.concat(&element.to_text()))
    }
}

/// The stock list-backed [`TextFormatter`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimpleTextFormatter<E> {
    parts: Vec<E>,
}

impl<E> SimpleTextFormatter<E>
where
    E: TextRepresentable + Clone + PartialEq,
{
    /// An empty formatter.
    pub fn new() -> Self {
        Self { parts: Vec::new() }
    }

    /// A formatter pre-filled with `len` default elements, for callers that
    /// assign meaning to fixed positions.
    pub fn sized(len: usize) -> Self
    where
        E: Default,
    {
        Self {
            parts: (0..len).map(|_| E::default()).collect(),
        }
    }

    /// Iterates over the live sequence without copying it.
    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.parts.iter()
    }
}

impl<E> TextFormatter<E> for SimpleTextFormatter<E>
where
    E: TextRepresentable + Clone + PartialEq,
{
    fn all(&self) -> Vec<E> {
        self.parts.clone()
    }

    fn len(&self) -> usize {
        self.parts.len()
    }

    fn clear(&mut self) {
        self.parts.clear();
    }

    fn add<I>(&mut self, elements: I) -> bool
    where
        I: IntoIterator<Item = E>,
    {
        let before = self.parts.len();
        self.parts.extend(elements);
        self.parts.len() != before
    }

    fn insert<I>(&mut self, index: usize, elements: I) -> Result<(), IndexOutOfBounds>
    where
        I: IntoIterator<Item = E>,
    {
        if index > self.parts.len() {
            return Err(IndexOutOfBounds {
                index,
                len: self.parts.len(),
            });
        }
        self.parts.splice(index..index, elements);
        Ok(())
    }

    fn remove<I>(&mut self, elements: I) -> bool
    where
        I: IntoIterator<Item = E>,
    {
        let targets: Vec<E> = elements.into_iter().collect();
        let before = self.parts.len();
        self.parts.retain(|part| !targets.contains(part));
        self.parts.len() != before
    }

    fn retain<I>(&mut self, elements: I) -> bool
    where
        I: IntoIterator<Item = E>,
    {
        let keep: Vec<E> = elements.into_iter().collect();
        let before = self.parts.len();
        self.parts.retain(|part| keep.contains(part));
        self.parts.len() != before
    }
}

impl<E> TextRepresentable for SimpleTextFormatter<E>
where
    E: TextRepresentable + Clone + PartialEq,
{
    fn to_text(&self) -> Text {
        self.format()
    }
}

impl<'a, E> IntoIterator for &'a SimpleTextFormatter<E>
where
    E: TextRepresentable + Clone + PartialEq,
{
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.parts.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn formatter(parts: &[&str]) -> SimpleTextFormatter<Text> {
        let mut formatter = SimpleTextFormatter::new();
        formatter.add(parts.iter().copied().map(Text::from));
        formatter
    }

    fn texts(formatter: &SimpleTextFormatter<Text>) -> Vec<String> {
        formatter.iter().map(|t| t.as_str().to_owned()).collect()
    }

    #[test]
    fn format_on_empty_formatter_is_empty_text() {
        let formatter: SimpleTextFormatter<Text> = SimpleTextFormatter::new();
        assert!(formatter.format().is_empty());
    }

    #[test]
    fn format_concatenates_left_to_right() {
        let formatter = formatter(&["a", "b", "c"]);
        let expected = Text::from("a")
            .concat(&Text::from("b"))
            .concat(&Text::from("c"));
        assert_eq!(formatter.format(), expected);
        assert_eq!(formatter.to_text(), expected);
        // Repeated calls observe the same sequence.
        assert_eq!(formatter.format(), expected);
    }

    #[test]
    fn snapshot_is_decoupled_from_later_mutation() {
        let mut formatter = formatter(&["a", "b"]);
        let snapshot = formatter.all();

        formatter.push(Text::from("c"));
        formatter.clear();

        assert_eq!(snapshot, vec![Text::from("a"), Text::from("b")]);
        assert!(formatter.is_empty());
    }

    #[test]
    fn insert_shifts_later_elements_right() {
        let mut formatter = formatter(&["a", "c"]);
        formatter.insert(1, Some(Text::from("b"))).unwrap();
        assert_eq!(texts(&formatter), ["a", "b", "c"]);

        // Appending at len is in range.
        formatter.insert(3, Some(Text::from("d"))).unwrap();
        assert_eq!(texts(&formatter), ["a", "b", "c", "d"]);
    }

    #[test]
    fn insert_of_many_preserves_iteration_order() {
        let mut formatter = formatter(&["a", "d"]);
        formatter
            .insert(1, [Text::from("b"), Text::from("c")])
            .unwrap();
        assert_eq!(texts(&formatter), ["a", "b", "c", "d"]);
    }

    #[test]
    fn out_of_range_insert_fails_and_leaves_sequence_untouched() {
        let mut formatter = formatter(&["a"]);
        let err = formatter.insert(5, Some(Text::from("x"))).unwrap_err();
        assert_eq!(err, IndexOutOfBounds { index: 5, len: 1 });
        assert_eq!(texts(&formatter), ["a"]);
    }

    #[test]
    fn remove_drops_every_occurrence_of_each_target() {
        let mut formatter = formatter(&["a", "b", "a", "c"]);
        assert!(formatter.remove(Some(Text::from("a"))));
        assert_eq!(texts(&formatter), ["b", "c"]);
        assert!(!formatter.remove(Some(Text::from("z"))));
    }

    #[test]
    fn equivalent_input_shapes_remove_identically() {
        let targets = [Text::from("a"), Text::from("c")];

        let mut via_array = formatter(&["a", "b", "c"]);
        via_array.remove(targets.clone());

        let mut via_vec = formatter(&["a", "b", "c"]);
        via_vec.remove(targets.to_vec());

        let mut via_iterator = formatter(&["a", "b", "c"]);
        via_iterator.remove(targets.iter().cloned());

        assert_eq!(via_array, via_vec);
        assert_eq!(via_vec, via_iterator);
        assert_eq!(texts(&via_array), ["b"]);
    }

    #[test]
    fn retain_keeps_only_listed_elements_in_order() {
        let mut formatter = formatter(&["a", "b", "c", "b", "d"]);
        assert!(formatter.retain([Text::from("b"), Text::from("d")]));
        assert_eq!(texts(&formatter), ["b", "b", "d"]);
        // Retaining the same set again changes nothing.
        assert!(!formatter.retain([Text::from("b"), Text::from("d")]));
    }

    #[test]
    fn sized_pre_fills_default_elements() {
        let formatter: SimpleTextFormatter<Text> = SimpleTextFormatter::sized(3);
        assert_eq!(formatter.len(), 3);
        assert!(formatter.format().is_empty());
    }

    #[test]
    fn get_is_positional() {
        let formatter = formatter(&["a", "b"]);
        assert_eq!(formatter.get(1), Some(Text::from("b")));
        assert_eq!(formatter.get(2), None);
    }
}
