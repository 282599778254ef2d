//! Extended cousins: nodes at the focus's depth anywhere on one side of the
//! focus's branch, whatever the generational distance.
//!
//! The search runs over *scope frames*: ancestors of the focus (parent up to
//! the root) that still have a sibling on the requested side. Each frame
//! bounds a depth-synchronized walk over that ancestor's siblings on that
//! side. Frames are tried shallowest first when the direction starts from an
//! extremity and deepest first when it starts from the focus, so a scope that
//! comes up empty escalates to the next wider one.

use std::fmt;

use tracing::{debug, instrument, trace};

use super::{always, Direction};
use crate::context::Context;
use crate::tree::Tree;

/// Position of an ancestor that bounds one extended cousin scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScopeFrame {
    pub depth: usize,
    pub index: usize,
}

impl fmt::Display for ScopeFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.depth, self.index)
    }
}

impl<T: Clone> Context<T> {
    /// Ancestors that bound a search in `direction`, in the order they are
    /// searched.
    fn scope_ancestors(&self, direction: Direction) -> Vec<Self> {
        let mut frames: Vec<Self> = self
            .ancestors()
            .filter(|ancestor| ancestor.has_sibling_toward(direction))
            .collect();
        // ancestors() yields deepest first
        if direction.from_extremity() {
            frames.reverse();
        }
        frames
    }

    /// The frames an extended cousin search in `direction` would visit.
    pub fn scope_frames(&self, direction: Direction) -> Vec<ScopeFrame> {
        self.scope_ancestors(direction)
            .iter()
            .map(|ancestor| ScopeFrame {
                depth: ancestor.depth(),
                index: ancestor.index(),
            })
            .collect()
    }

    #[instrument(level = "trace", skip_all, fields(direction = %direction, depth = self.depth(), index = self.index()))]
    pub fn extended_cousin_where<P>(&self, direction: Direction, pred: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        let target = self.depth();
        let scopes = self.scope_ancestors(direction);
        if scopes.is_empty() {
            debug!("no ancestor has a sibling in this direction");
            return None;
        }
        for ancestor in scopes {
            let frame = ScopeFrame {
                depth: ancestor.depth(),
                index: ancestor.index(),
            };
            trace!(%frame, "searching scope");
            if let Some(found) = ancestor.seek_beside(direction, target - frame.depth, &pred) {
                debug!(%frame, index = found.index(), "extended cousin found");
                return Some(found);
            }
            debug!(%frame, "scope exhausted, escalating");
        }
        None
    }

    pub fn extended_cousin(&self, direction: Direction) -> Option<Self> {
        self.extended_cousin_where(direction, always)
    }

    pub fn first_extended_cousin(&self) -> Option<Self> {
        self.extended_cousin_where(Direction::First, always)
    }

    pub fn first_extended_cousin_where<P>(&self, pred: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.extended_cousin_where(Direction::First, pred)
    }

    pub fn previous_extended_cousin(&self) -> Option<Self> {
        self.extended_cousin_where(Direction::Previous, always)
    }

    pub fn previous_extended_cousin_where<P>(&self, pred: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.extended_cousin_where(Direction::Previous, pred)
    }

    pub fn next_extended_cousin(&self) -> Option<Self> {
        self.extended_cousin_where(Direction::Next, always)
    }

    pub fn next_extended_cousin_where<P>(&self, pred: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.extended_cousin_where(Direction::Next, pred)
    }

    pub fn last_extended_cousin(&self) -> Option<Self> {
        self.extended_cousin_where(Direction::Last, always)
    }

    pub fn last_extended_cousin_where<P>(&self, pred: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.extended_cousin_where(Direction::Last, pred)
    }

    /// Extended cousin of the parent.
    pub fn extended_pibling_where<P>(&self, direction: Direction, pred: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.parent()?.extended_cousin_where(direction, pred)
    }

    pub fn extended_pibling(&self, direction: Direction) -> Option<Self> {
        self.extended_pibling_where(direction, always)
    }

    /// Child of an extended cousin. The cousin is chosen as the first one in
    /// `direction` that has a child matching `pred`; the child is its first
    /// match for `First`/`Next` and its last for `Previous`/`Last`.
    pub fn extended_nibling_where<P>(&self, direction: Direction, pred: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        let cousin = self.extended_cousin_where(direction, |candidate: &Tree<T>| {
            candidate.children().iter().any(|child| pred(child))
        })?;
        cousin.child_where(direction.orientation(), &pred)
    }

    pub fn extended_nibling(&self, direction: Direction) -> Option<Self> {
        self.extended_nibling_where(direction, always)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    //                 1
    //         /               \
    //        2                 3
    //      /   \            /     \
    //     4     5          6       7
    //    / \    |         / \      |
    //   8   9   10      11   12    13
    fn family() -> Context<i32> {
        Context::new(tree!(
            1,
            [
                tree!(2, [tree!(4, [tree!(8), tree!(9)]), tree!(5, [tree!(10)])]),
                tree!(3, [tree!(6, [tree!(11), tree!(12)]), tree!(7, [tree!(13)])]),
            ]
        ))
    }

    #[test]
    fn test_scope_frames_order() {
        // focus 12: parent 6 has a sibling to the right, 3 has one to the left
        let ctx = family().follow(&[1, 0, 1]).unwrap();
        assert_eq!(ctx.scope_frames(Direction::Next), vec![ScopeFrame { depth: 2, index: 0 }]);
        assert_eq!(ctx.scope_frames(Direction::First), vec![ScopeFrame { depth: 1, index: 1 }]);
        assert!(family().scope_frames(Direction::First).is_empty());
    }

    #[test]
    fn test_extended_cousins_from_inner_node() {
        let ctx = family().follow(&[1, 0, 1]).unwrap();
        assert_eq!(*ctx.first_extended_cousin().unwrap().value(), 8);
        assert_eq!(*ctx.previous_extended_cousin().unwrap().value(), 10);
        assert_eq!(*ctx.next_extended_cousin().unwrap().value(), 13);
        assert_eq!(*ctx.last_extended_cousin().unwrap().value(), 13);
    }

    #[test]
    fn test_escalates_to_wider_scope() {
        // focus 9: 4 has 5 to its right, nothing to its left below the root row
        let ctx = family().follow(&[0, 0, 1]).unwrap();
        assert!(ctx.first_extended_cousin().is_none());
        let beyond = ctx
            .next_extended_cousin_where(|t: &Tree<i32>| *t.value() > 10)
            .unwrap();
        assert_eq!(*beyond.value(), 11);
        assert_eq!(beyond.depth(), 3);
        assert_eq!(beyond.address(), vec![1, 0, 0]);
    }

    #[test]
    fn test_exhausted_predicate_is_none() {
        let ctx = family().follow(&[0, 1, 0]).unwrap();
        for direction in Direction::ALL {
            assert!(ctx
                .extended_cousin_where(direction, |t: &Tree<i32>| *t.value() > 100)
                .is_none());
        }
    }

    #[test]
    fn test_extended_pibling_and_nibling() {
        let ctx = family().follow(&[1, 1, 0]).unwrap();
        assert_eq!(*ctx.extended_pibling(Direction::First).unwrap().value(), 4);
        // 6 is the parent's own sibling, not a cousin of it
        assert_eq!(*ctx.extended_pibling(Direction::Previous).unwrap().value(), 5);

        let mid = family().follow(&[0, 1]).unwrap();
        assert_eq!(*mid.extended_nibling(Direction::Next).unwrap().value(), 11);
        assert_eq!(*mid.extended_nibling(Direction::Last).unwrap().value(), 13);
        assert!(mid.extended_nibling(Direction::Previous).is_none());
        let odd = mid
            .extended_nibling_where(Direction::Next, |t: &Tree<i32>| t.value() % 2 == 1)
            .unwrap();
        assert_eq!(*odd.value(), 11);
    }
}
