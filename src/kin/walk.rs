//! Depth-synchronized walk shared by every search that looks for nodes at a
//! fixed depth: bridged grandchild searches, niblings, cousins and extended
//! cousins.
//!
//! The walk starts on a node of a *scope row*, descends toward the target
//! depth, tests the predicate there and otherwise advances to the next node in
//! walk order. It climbs back up when a subtree is exhausted but never above
//! the scope row, and at the scope row it never moves onto or past the
//! boundary index. Everything is an explicit loop.

use tracing::trace;

use super::{has_children, Direction};
use crate::context::Context;
use crate::tree::Tree;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Orientation {
    /// Left to right: first child, next sibling.
    Forward,
    /// Right to left: last child, previous sibling.
    Backward,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Bound {
    Unbounded,
    /// Only indices strictly below the boundary.
    Before(usize),
    /// Only indices strictly above the boundary.
    After(usize),
}

impl Bound {
    fn admits(self, index: usize) -> bool {
        match self {
            Bound::Unbounded => true,
            Bound::Before(boundary) => index < boundary,
            Bound::After(boundary) => index > boundary,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Scope {
    pub depth: usize,
    pub bound: Bound,
}

impl Scope {
    /// The children row of `ctx`'s focus.
    pub(crate) fn below<T>(ctx: &Context<T>) -> Self {
        Self {
            depth: ctx.depth() + 1,
            bound: Bound::Unbounded,
        }
    }

    /// `ctx`'s own row, restricted to the side `direction` points at.
    pub(crate) fn beside<T>(ctx: &Context<T>, direction: Direction) -> Self {
        let bound = if direction.is_leftward() {
            Bound::Before(ctx.index())
        } else {
            Bound::After(ctx.index())
        };
        Self {
            depth: ctx.depth(),
            bound,
        }
    }
}

impl<T: Clone> Context<T> {
    /// First child going forward, last child going backward.
    pub(crate) fn inward_child(&self, orientation: Orientation) -> Option<Self> {
        match orientation {
            Orientation::Forward => self.descend_into(0),
            Orientation::Backward => self.descend_into(self.focus.child_count().checked_sub(1)?),
        }
    }

    /// Adjacent sibling in walk order.
    pub(crate) fn step(&self, orientation: Orientation) -> Option<Self> {
        match orientation {
            Orientation::Forward => self.shift_right(1),
            Orientation::Backward => self.shift_left(1),
        }
    }

    /// Walks from `self` (a node of the scope row) until a node at `target`
    /// depth satisfies `pred`, or the scope is exhausted.
    pub(crate) fn seek<P>(
        &self,
        scope: Scope,
        target: usize,
        orientation: Orientation,
        pred: P,
    ) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        trace!(?scope, target, ?orientation, start = self.index(), "seek");
        let mut cursor = self.clone();
        loop {
            let depth = cursor.depth();
            if depth == target {
                if pred(cursor.focus()) {
                    trace!(depth, index = cursor.index(), "seek matched");
                    return Some(cursor);
                }
            } else if depth < target {
                if let Some(child) = cursor.inward_child(orientation) {
                    cursor = child;
                    continue;
                }
            }
            cursor = cursor.advance_within(scope, orientation)?;
        }
    }

    /// Next node in walk order without descending: the adjacent sibling, or
    /// the adjacent sibling of the nearest ancestor below the scope row that
    /// has one. At the scope row the boundary applies.
    fn advance_within(&self, scope: Scope, orientation: Orientation) -> Option<Self> {
        let mut node = self.clone();
        loop {
            if node.depth() <= scope.depth {
                let sibling = node.step(orientation)?;
                return scope.bound.admits(sibling.index()).then_some(sibling);
            }
            if let Some(sibling) = node.step(orientation) {
                return Some(sibling);
            }
            node = node.parent()?;
        }
    }

    /// Bridged descent: the first node `generations` levels below the focus
    /// that satisfies `pred`, sliding across siblings at every level.
    pub(crate) fn seek_below<P>(
        &self,
        generations: usize,
        orientation: Orientation,
        pred: P,
    ) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        if generations == 0 {
            return pred(self.focus()).then(|| self.clone());
        }
        let start = self.inward_child(orientation)?;
        start.seek(
            Scope::below(self),
            self.depth() + generations,
            orientation,
            pred,
        )
    }

    /// Searches the subtrees of the focus's siblings on the `direction` side,
    /// `generations` levels down. Siblings without children are skipped.
    pub(crate) fn seek_beside<P>(&self, direction: Direction, generations: usize, pred: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        if generations == 0 {
            return self.sibling_where(direction, pred);
        }
        let start = self.sibling_where(direction, has_children)?;
        start.seek(
            Scope::beside(self, direction),
            self.depth() + generations,
            direction.orientation(),
            pred,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kin::always;

    #[test]
    fn test_bound_admits() {
        assert!(Bound::Unbounded.admits(7));
        assert!(Bound::Before(2).admits(1));
        assert!(!Bound::Before(2).admits(2));
        assert!(Bound::After(2).admits(3));
        assert!(!Bound::After(2).admits(2));
    }

    //        0
    //    /   |    \
    //   1    2     3
    //   |         / \
    //   4        5   6
    #[test]
    fn test_seek_below_bridges_leaf_children() {
        let root = Context::new(tree!(
            0,
            [tree!(1, [tree!(4)]), tree!(2), tree!(3, [tree!(5), tree!(6)])]
        ));
        let forward = root
            .seek_below(2, Orientation::Forward, |t: &Tree<i32>| *t.value() > 4)
            .unwrap();
        assert_eq!(*forward.value(), 5);
        let backward = root.seek_below(2, Orientation::Backward, always).unwrap();
        assert_eq!(*backward.value(), 6);
        assert!(root.seek_below(3, Orientation::Forward, always).is_none());
    }

    #[test]
    fn test_seek_beside_respects_boundary() {
        // cursor on 2: nothing to its right has grandchildren, so a rightward
        // search must not wrap around to 1's subtree
        let root = Context::new(tree!(
            0,
            [tree!(1, [tree!(4)]), tree!(2), tree!(3)]
        ));
        let ctx = root.descend_into(1).unwrap();
        assert!(ctx.seek_beside(Direction::Next, 1, always).is_none());
        assert!(ctx.seek_beside(Direction::Last, 1, always).is_none());
        assert_eq!(*ctx.seek_beside(Direction::First, 1, always).unwrap().value(), 4);
    }
}
