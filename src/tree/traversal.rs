//! In-order traversal.
//!
//! The visitor of every traversal returns a [`ControlFlow`]. A `Break` stops
//! the walk at once: it is threaded back through each pending recursive call
//! with `?` and handed to the caller, and no further node is visited.

use std::iter::FusedIterator;
use std::ops::ControlFlow;

use super::compare::Comparator;
use super::node::{Link, Node};

/// Visits every item in ascending order.
pub(crate) fn scan<T, B, F>(link: &Link<T>, visit: &mut F) -> ControlFlow<B>
where
    F: FnMut(&T) -> ControlFlow<B>,
{
    let Some(node) = link else {
        return ControlFlow::Continue(());
    };
    scan(&node.left, visit)?;
    visit(&node.item)?;
    scan(&node.right, visit)
}

/// Visits every item greater than or equal to `pivot` in ascending order.
///
/// The left subtree is entered only when it can hold such items.
pub(crate) fn ascend<T, C, B, F>(
    link: &Link<T>,
    pivot: &T,
    comparator: &C,
    visit: &mut F,
) -> ControlFlow<B>
where
    C: Comparator<T>,
    F: FnMut(&T) -> ControlFlow<B>,
{
    let Some(node) = link else {
        return ControlFlow::Continue(());
    };
    let order = comparator.compare(pivot, &node.item);
    if order.is_lt() {
        ascend(&node.left, pivot, comparator, visit)?;
    }
    if order.is_le() {
        visit(&node.item)?;
    }
    ascend(&node.right, pivot, comparator, visit)
}

/// Visits every item less than or equal to `pivot` in descending order.
///
/// The right subtree is entered only when it can hold such items.
pub(crate) fn descend<T, C, B, F>(
    link: &Link<T>,
    pivot: &T,
    comparator: &C,
    visit: &mut F,
) -> ControlFlow<B>
where
    C: Comparator<T>,
    F: FnMut(&T) -> ControlFlow<B>,
{
    let Some(node) = link else {
        return ControlFlow::Continue(());
    };
    let order = comparator.compare(&node.item, pivot);
    if order.is_lt() {
        descend(&node.right, pivot, comparator, visit)?;
    }
    if order.is_le() {
        visit(&node.item)?;
    }
    descend(&node.left, pivot, comparator, visit)
}

/// Returns the leftmost item of a subtree.
pub(crate) fn leftmost<T>(link: &Link<T>) -> Option<&T> {
    let mut node = link.as_deref()?;
    while let Some(left) = node.left.as_deref() {
        node = left;
    }
    Some(&node.item)
}

/// Returns the rightmost item of a subtree.
pub(crate) fn rightmost<T>(link: &Link<T>) -> Option<&T> {
    let mut node = link.as_deref()?;
    while let Some(right) = node.right.as_deref() {
        node = right;
    }
    Some(&node.item)
}

/// Finds the item equal to `key` without modifying anything.
pub(crate) fn search<'a, T, C>(link: &'a Link<T>, key: &T, comparator: &C) -> Option<&'a T>
where
    C: Comparator<T>,
{
    let mut current = link.as_deref();
    while let Some(node) = current {
        match comparator.compare(key, &node.item) {
            std::cmp::Ordering::Less => current = node.left.as_deref(),
            std::cmp::Ordering::Greater => current = node.right.as_deref(),
            std::cmp::Ordering::Equal => return Some(&node.item),
        }
    }
    None
}

/// An iterator over the items of a [`ZipTree`](super::ZipTree) in ascending order.
///
/// Created by [`ZipTree::iter`](super::ZipTree::iter). It walks the tree
/// lazily with an explicit stack of pending ancestors.
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(root: &'a Link<T>, length: usize) -> Self {
        let mut iterator = Self {
            stack: Vec::new(),
            remaining: length,
        };
        iterator.push_left_spine(root.as_deref());
        iterator
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(current) = node {
            self.stack.push(current);
            node = current.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        self.remaining = self.remaining.saturating_sub(1);
        Some(&node.item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}
