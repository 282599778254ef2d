use std::iter;

use super::always;
use super::walk::Orientation;
use crate::context::Context;
use crate::tree::Tree;

impl<T: Clone> Context<T> {
    pub(crate) fn child_where<P>(&self, orientation: Orientation, pred: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        let children = self.focus.children();
        let index = match orientation {
            Orientation::Forward => children.iter().position(|child| pred(child))?,
            Orientation::Backward => children.iter().rposition(|child| pred(child))?,
        };
        self.descend_into(index)
    }

    pub fn first_child(&self) -> Option<Self> {
        self.descend_into(0)
    }

    /// Leftmost child satisfying `pred`.
    pub fn first_child_where<P>(&self, pred: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.child_where(Orientation::Forward, pred)
    }

    pub fn last_child(&self) -> Option<Self> {
        self.inward_child(Orientation::Backward)
    }

    /// Rightmost child satisfying `pred`.
    pub fn last_child_where<P>(&self, pred: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.child_where(Orientation::Backward, pred)
    }

    pub fn child_at(&self, index: usize) -> Option<Self> {
        self.descend_into(index)
    }

    pub fn first_grandchild(&self) -> Option<Self> {
        self.first_grandchild_where(always)
    }

    /// Leftmost grandchild satisfying `pred`. When a child has no matching
    /// child of its own the search slides on to the next child.
    pub fn first_grandchild_where<P>(&self, pred: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.seek_below(2, Orientation::Forward, pred)
    }

    pub fn last_grandchild(&self) -> Option<Self> {
        self.last_grandchild_where(always)
    }

    pub fn last_grandchild_where<P>(&self, pred: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.seek_below(2, Orientation::Backward, pred)
    }

    pub fn first_great_grandchild(&self) -> Option<Self> {
        self.first_great_grandchild_where(always)
    }

    pub fn first_great_grandchild_where<P>(&self, pred: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.seek_below(3, Orientation::Forward, pred)
    }

    pub fn last_great_grandchild(&self) -> Option<Self> {
        self.last_great_grandchild_where(always)
    }

    pub fn last_great_grandchild_where<P>(&self, pred: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.seek_below(3, Orientation::Backward, pred)
    }

    /// Follows first children down to a leaf.
    pub fn leftmost_descendant(&self) -> Option<Self> {
        self.spine(Orientation::Forward, always)
    }

    /// Follows first children while they satisfy `pred` and stops on the
    /// deepest one that does.
    pub fn leftmost_descendant_while<P>(&self, pred: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.spine(Orientation::Forward, pred)
    }

    pub fn rightmost_descendant(&self) -> Option<Self> {
        self.spine(Orientation::Backward, always)
    }

    pub fn rightmost_descendant_while<P>(&self, pred: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.spine(Orientation::Backward, pred)
    }

    fn spine<P>(&self, orientation: Orientation, pred: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        let step = |ctx: &Self| {
            ctx.inward_child(orientation)
                .filter(|child| pred(child.focus()))
        };
        iter::successors(step(self), step).last()
    }
}
