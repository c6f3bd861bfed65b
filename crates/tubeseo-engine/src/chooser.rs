//! Pseudorandom ingredient selection.

use rand::Rng;

/// Picks an index into a non-empty list.
///
/// Production code uses [`RandomChooser`]; tests inject [`FixedChooser`] to
/// get reproducible suggestions.
pub trait Chooser: Send + Sync {
    /// Return an index in `0..len`. Only called with `len > 0`.
    fn choose_index(&self, len: usize) -> usize;
}

/// Uniform choice using the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomChooser;

impl Chooser for RandomChooser {
    fn choose_index(&self, len: usize) -> usize {
        rand::rng().random_range(0..len.max(1))
    }
}

/// Always picks the same position (wrapped to the list length).
#[derive(Debug, Default, Clone, Copy)]
pub struct FixedChooser(pub usize);

impl Chooser for FixedChooser {
    fn choose_index(&self, len: usize) -> usize {
        self.0 % len.max(1)
    }
}

/// Choose one item, or `None` for an empty slice.
pub fn choose<'a, T>(chooser: &dyn Chooser, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    items.get(chooser.choose_index(items.len()) % items.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_chooser_wraps() {
        let items = ["a", "b", "c"];
        assert_eq!(choose(&FixedChooser(0), &items), Some(&"a"));
        assert_eq!(choose(&FixedChooser(4), &items), Some(&"b"));
    }

    #[test]
    fn test_choose_empty_is_none() {
        let items: [&str; 0] = [];
        assert_eq!(choose(&RandomChooser, &items), None);
    }

    #[test]
    fn test_random_chooser_in_range() {
        let items = [1, 2, 3, 4, 5];
        for _ in 0..100 {
            assert!(choose(&RandomChooser, &items).is_some());
        }
    }
}
