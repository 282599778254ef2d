//! First cousins (children of piblings) and second cousins (grandchildren of
//! grandpiblings).
//!
//! Both climb to a fixed ancestor, take that ancestor's index as the
//! boundary and scan only the ancestor's siblings on the requested side of
//! it, descending back to the focus's depth. A search that runs out of
//! siblings on its side stops there; it never wraps around the boundary.

use tracing::trace;

use super::{always, Direction};
use crate::context::Context;
use crate::tree::Tree;

impl<T: Clone> Context<T> {
    pub fn first_cousin_where<P>(&self, direction: Direction, pred: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        let parent = self.parent()?;
        trace!(%direction, boundary = parent.index(), "first cousin");
        parent.seek_beside(direction, 1, pred)
    }

    pub fn second_cousin_where<P>(&self, direction: Direction, pred: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        let grandparent = self.grandparent()?;
        trace!(%direction, boundary = grandparent.index(), "second cousin");
        grandparent.seek_beside(direction, 2, pred)
    }

    pub fn first_first_cousin(&self) -> Option<Self> {
        self.first_cousin_where(Direction::First, always)
    }

    pub fn first_first_cousin_where<P>(&self, pred: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.first_cousin_where(Direction::First, pred)
    }

    pub fn previous_first_cousin(&self) -> Option<Self> {
        self.first_cousin_where(Direction::Previous, always)
    }

    pub fn previous_first_cousin_where<P>(&self, pred: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.first_cousin_where(Direction::Previous, pred)
    }

    pub fn next_first_cousin(&self) -> Option<Self> {
        self.first_cousin_where(Direction::Next, always)
    }

    pub fn next_first_cousin_where<P>(&self, pred: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.first_cousin_where(Direction::Next, pred)
    }

    pub fn last_first_cousin(&self) -> Option<Self> {
        self.first_cousin_where(Direction::Last, always)
    }

    pub fn last_first_cousin_where<P>(&self, pred: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.first_cousin_where(Direction::Last, pred)
    }

    pub fn first_second_cousin(&self) -> Option<Self> {
        self.second_cousin_where(Direction::First, always)
    }

    pub fn first_second_cousin_where<P>(&self, pred: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.second_cousin_where(Direction::First, pred)
    }

    pub fn previous_second_cousin(&self) -> Option<Self> {
        self.second_cousin_where(Direction::Previous, always)
    }

    pub fn previous_second_cousin_where<P>(&self, pred: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.second_cousin_where(Direction::Previous, pred)
    }

    pub fn next_second_cousin(&self) -> Option<Self> {
        self.second_cousin_where(Direction::Next, always)
    }

    pub fn next_second_cousin_where<P>(&self, pred: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.second_cousin_where(Direction::Next, pred)
    }

    pub fn last_second_cousin(&self) -> Option<Self> {
        self.second_cousin_where(Direction::Last, always)
    }

    pub fn last_second_cousin_where<P>(&self, pred: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.second_cousin_where(Direction::Last, pred)
    }
}

#[cfg(test)]
mod tests {
    use crate::context::Context;
    use crate::tree::Tree;
    use crate::util::testing::full_tree;

    //        1
    //    /   |   \
    //   2    3    4
    //  / \   |   / \
    // 5   6  7  8   9
    fn family() -> Context<i32> {
        Context::new(tree!(
            1,
            [
                tree!(2, [tree!(5), tree!(6)]),
                tree!(3, [tree!(7)]),
                tree!(4, [tree!(8), tree!(9)]),
            ]
        ))
    }

    #[test]
    fn test_first_cousins_on_both_sides() {
        let seven = family().follow(&[1, 0]).unwrap();
        assert_eq!(*seven.first_first_cousin().unwrap().value(), 5);
        assert_eq!(*seven.previous_first_cousin().unwrap().value(), 6);
        assert_eq!(*seven.next_first_cousin().unwrap().value(), 8);
        assert_eq!(*seven.last_first_cousin().unwrap().value(), 9);
    }

    #[test]
    fn test_first_cousins_stop_at_boundary() {
        let five = family().follow(&[0, 0]).unwrap();
        assert!(five.first_first_cousin().is_none());
        assert!(five.previous_first_cousin().is_none());
        assert_eq!(*five.last_first_cousin().unwrap().value(), 9);
        let bridged = five
            .next_first_cousin_where(|t: &Tree<i32>| *t.value() > 7)
            .unwrap();
        assert_eq!(*bridged.value(), 8);
        assert!(family().first_child().unwrap().first_first_cousin().is_none());
    }

    #[test]
    fn test_second_cousins() {
        // level-order numbers: 2,3 / 4..7 / 8..15
        let root = Context::new(full_tree(2, 3));
        let eight = root.follow(&[0, 0, 0]).unwrap();
        assert_eq!(*eight.next_second_cousin().unwrap().value(), 12);
        assert_eq!(*eight.last_second_cousin().unwrap().value(), 15);
        assert!(eight.first_second_cousin().is_none());

        let thirteen = root.follow(&[1, 0, 1]).unwrap();
        assert_eq!(*thirteen.first_second_cousin().unwrap().value(), 8);
        assert_eq!(*thirteen.previous_second_cousin().unwrap().value(), 11);
        assert!(thirteen.next_second_cousin().is_none());
        let even = thirteen
            .previous_second_cousin_where(|t: &Tree<usize>| t.value() % 2 == 0)
            .unwrap();
        assert_eq!(*even.value(), 10);
    }
}
