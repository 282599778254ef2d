use serde::{Deserialize, Serialize};

use crate::stack::Stack;
use crate::tree::Tree;

/// One frame of the path from a cursor back to the root.
///
/// Holds an ancestor's value together with that ancestor's siblings. The
/// ancestor's own children are not stored: moving up rebuilds them from the
/// cursor as `reverse(prev) ++ [focus] ++ next`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location<T> {
    /// Siblings before the ancestor, nearest first.
    prev: Stack<Tree<T>>,
    value: T,
    /// Siblings after the ancestor, nearest first.
    next: Stack<Tree<T>>,
}

impl<T> Location<T> {
    /// `prev` is given nearest first, `next` in document order.
    pub fn new<P, N>(value: T, prev: P, next: N) -> Self
    where
        P: IntoIterator<Item = Tree<T>>,
        N: IntoIterator<Item = Tree<T>>,
    {
        Self {
            prev: prev.into_iter().collect(),
            value,
            next: next.into_iter().collect(),
        }
    }

    pub(crate) fn from_stacks(prev: Stack<Tree<T>>, value: T, next: Stack<Tree<T>>) -> Self {
        Self { prev, value, next }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn prev(&self) -> &Stack<Tree<T>> {
        &self.prev
    }

    pub fn next(&self) -> &Stack<Tree<T>> {
        &self.next
    }

    /// Position of the ancestor among its siblings.
    pub fn index(&self) -> usize {
        self.prev.len()
    }

    pub fn map_value<F>(self, f: F) -> Self
    where
        F: FnOnce(T) -> T,
    {
        Self {
            prev: self.prev,
            value: f(self.value),
            next: self.next,
        }
    }

    pub(crate) fn into_parts(self) -> (Stack<Tree<T>>, T, Stack<Tree<T>>) {
        (self.prev, self.value, self.next)
    }
}

impl<T: Clone> Location<T> {
    /// Detaches the value of `tree`; its children are dropped.
    pub fn from_tree<P, N>(tree: &Tree<T>, prev: P, next: N) -> Self
    where
        P: IntoIterator<Item = Tree<T>>,
        N: IntoIterator<Item = Tree<T>>,
    {
        Self::new(tree.value().clone(), prev, next)
    }

    /// Siblings before the ancestor in document order.
    pub fn siblings_before(&self) -> Vec<Tree<T>> {
        self.prev.to_vec_reversed()
    }

    pub fn siblings_after(&self) -> Vec<Tree<T>> {
        self.next.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_counts_prev_siblings() {
        let loc = Location::new(
            3,
            vec![Tree::leaf(2), Tree::leaf(1)],
            vec![Tree::leaf(4)],
        );
        assert_eq!(loc.index(), 2);
        assert_eq!(loc.siblings_before(), vec![Tree::leaf(1), Tree::leaf(2)]);
        assert_eq!(loc.siblings_after(), vec![Tree::leaf(4)]);
    }

    #[test]
    fn test_map_value_keeps_siblings() {
        let loc = Location::new(3, vec![Tree::leaf(2)], Vec::new()).map_value(|v| v * 10);
        assert_eq!(*loc.value(), 30);
        assert_eq!(loc.index(), 1);
        assert!(loc.next().is_empty());
    }

    #[test]
    fn test_from_tree_drops_children() {
        let tree = Tree::with_children(7, vec![Tree::leaf(8)]);
        let loc = Location::from_tree(&tree, Vec::new(), Vec::new());
        assert_eq!(*loc.value(), 7);
        assert_eq!(loc.index(), 0);
    }
}
