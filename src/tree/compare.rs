//! Item ordering.

use std::cmp::Ordering;

/// A strict total order over the items stored in a tree.
///
/// Two items comparing [`Ordering::Equal`] are the same key: inserting the
/// second replaces the first.
///
/// Any `Fn(&T, &T) -> Ordering` closure is a comparator, which makes it easy
/// to order records by one of their fields:
///
/// ```rust
/// use ziptree::ZipTree;
///
/// let mut tree = ZipTree::with_comparator(|left: &(u32, char), right: &(u32, char)| {
///     left.0.cmp(&right.0)
/// });
/// tree.insert((2, 'b')).unwrap();
/// tree.insert((1, 'a')).unwrap();
///
/// assert_eq!(tree.get(&(2, ' ')), Some(&(2, 'b')));
/// assert_eq!(tree.min(), Some(&(1, 'a')));
/// ```
pub trait Comparator<T: ?Sized> {
    /// Compares two items.
    fn compare(&self, left: &T, right: &T) -> Ordering;
}

/// Orders items by their [`Ord`] implementation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NaturalOrder;

impl<T: Ord + ?Sized> Comparator<T> for NaturalOrder {
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        left.cmp(right)
    }
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        self(left, right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1, 2, Ordering::Less)]
    #[case(2, 2, Ordering::Equal)]
    #[case(3, 2, Ordering::Greater)]
    fn test_natural_order(#[case] left: i32, #[case] right: i32, #[case] expected: Ordering) {
        assert_eq!(NaturalOrder.compare(&left, &right), expected);
    }

    #[rstest]
    fn test_closure_comparator_reverses() {
        let reverse = |left: &i32, right: &i32| right.cmp(left);
        assert_eq!(reverse.compare(&1, &2), Ordering::Greater);
        assert_eq!(reverse.compare(&2, &1), Ordering::Less);
    }
}
