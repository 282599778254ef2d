//! Siblings of the parent (piblings), of the grandparent (grandpiblings), and
//! of the nearest ancestor that has a match (ancestral piblings).

use tracing::{debug, instrument};

use super::{always, Direction};
use crate::context::Context;
use crate::tree::Tree;

impl<T: Clone> Context<T> {
    pub fn pibling_where<P>(&self, direction: Direction, pred: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.parent()?.sibling_where(direction, pred)
    }

    pub fn grandpibling_where<P>(&self, direction: Direction, pred: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.grandparent()?.sibling_where(direction, pred)
    }

    /// Climbs from the parent toward the root and returns the first ancestor
    /// sibling in `direction` that satisfies `pred`.
    #[instrument(level = "trace", skip_all, fields(direction = %direction, depth = self.depth()))]
    pub fn ancestral_pibling_where<P>(&self, direction: Direction, pred: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        let mut ancestor = self.parent()?;
        loop {
            if let Some(found) = ancestor.sibling_where(direction, &pred) {
                debug!(depth = found.depth(), index = found.index(), "ancestral pibling found");
                return Some(found);
            }
            ancestor = ancestor.parent()?;
        }
    }

    pub fn first_pibling(&self) -> Option<Self> {
        self.pibling_where(Direction::First, always)
    }

    pub fn first_pibling_where<P>(&self, pred: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.pibling_where(Direction::First, pred)
    }

    pub fn previous_pibling(&self) -> Option<Self> {
        self.pibling_where(Direction::Previous, always)
    }

    pub fn previous_pibling_where<P>(&self, pred: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.pibling_where(Direction::Previous, pred)
    }

    pub fn next_pibling(&self) -> Option<Self> {
        self.pibling_where(Direction::Next, always)
    }

    pub fn next_pibling_where<P>(&self, pred: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.pibling_where(Direction::Next, pred)
    }

    pub fn last_pibling(&self) -> Option<Self> {
        self.pibling_where(Direction::Last, always)
    }

    pub fn last_pibling_where<P>(&self, pred: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.pibling_where(Direction::Last, pred)
    }

    pub fn first_grandpibling(&self) -> Option<Self> {
        self.grandpibling_where(Direction::First, always)
    }

    pub fn first_grandpibling_where<P>(&self, pred: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.grandpibling_where(Direction::First, pred)
    }

    pub fn previous_grandpibling(&self) -> Option<Self> {
        self.grandpibling_where(Direction::Previous, always)
    }

    pub fn previous_grandpibling_where<P>(&self, pred: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.grandpibling_where(Direction::Previous, pred)
    }

    pub fn next_grandpibling(&self) -> Option<Self> {
        self.grandpibling_where(Direction::Next, always)
    }

    pub fn next_grandpibling_where<P>(&self, pred: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.grandpibling_where(Direction::Next, pred)
    }

    pub fn last_grandpibling(&self) -> Option<Self> {
        self.grandpibling_where(Direction::Last, always)
    }

    pub fn last_grandpibling_where<P>(&self, pred: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.grandpibling_where(Direction::Last, pred)
    }

    pub fn first_ancestral_pibling(&self) -> Option<Self> {
        self.ancestral_pibling_where(Direction::First, always)
    }

    pub fn first_ancestral_pibling_where<P>(&self, pred: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.ancestral_pibling_where(Direction::First, pred)
    }

    pub fn previous_ancestral_pibling(&self) -> Option<Self> {
        self.ancestral_pibling_where(Direction::Previous, always)
    }

    pub fn previous_ancestral_pibling_where<P>(&self, pred: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.ancestral_pibling_where(Direction::Previous, pred)
    }

    pub fn next_ancestral_pibling(&self) -> Option<Self> {
        self.ancestral_pibling_where(Direction::Next, always)
    }

    pub fn next_ancestral_pibling_where<P>(&self, pred: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.ancestral_pibling_where(Direction::Next, pred)
    }

    pub fn last_ancestral_pibling(&self) -> Option<Self> {
        self.ancestral_pibling_where(Direction::Last, always)
    }

    pub fn last_ancestral_pibling_where<P>(&self, pred: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.ancestral_pibling_where(Direction::Last, pred)
    }
}

#[cfg(test)]
mod tests {
    use crate::context::Context;
    use crate::tree::Tree;
    use crate::util::testing::full_tree;

    #[test]
    fn test_piblings() {
        // 1 / 2 3 4 / 5..13
        let eight = Context::new(full_tree(3, 2)).follow(&[1, 0]).unwrap();
        assert_eq!(*eight.first_pibling().unwrap().value(), 2);
        assert_eq!(*eight.previous_pibling().unwrap().value(), 2);
        assert_eq!(*eight.next_pibling().unwrap().value(), 4);
        assert_eq!(*eight.last_pibling().unwrap().value(), 4);
        assert!(eight
            .first_pibling_where(|t: &Tree<usize>| *t.value() > 2)
            .is_none());
        assert!(eight.first_grandpibling().is_none());
    }

    #[test]
    fn test_grandpiblings() {
        // 1 / 2 3 / 4..7 / 8..15
        let root = Context::new(full_tree(2, 3));
        let ten = root.follow(&[0, 1, 0]).unwrap();
        assert_eq!(*ten.next_grandpibling().unwrap().value(), 3);
        assert_eq!(*ten.last_grandpibling().unwrap().value(), 3);
        assert!(ten.previous_grandpibling().is_none());
    }

    #[test]
    fn test_ancestral_piblings_climb() {
        let root = Context::new(full_tree(2, 3));
        let eight = root.follow(&[0, 0, 0]).unwrap();
        assert_eq!(*eight.next_ancestral_pibling().unwrap().value(), 5);
        assert!(eight.first_ancestral_pibling().is_none());
        let three = eight
            .next_ancestral_pibling_where(|t: &Tree<usize>| *t.value() == 3)
            .unwrap();
        assert_eq!(three.depth(), 1);

        let ten = root.follow(&[0, 1, 0]).unwrap();
        assert_eq!(*ten.first_ancestral_pibling().unwrap().value(), 4);
        assert!(root.first_ancestral_pibling().is_none());
    }
}
