//! Children (niblings), grandchildren (grand-niblings) and spine descendants
//! (descendant niblings) of the focus's siblings.

use std::iter;

use tracing::trace;

use super::{always, has_children, Direction};
use crate::context::Context;
use crate::tree::Tree;

impl<T: Clone> Context<T> {
    /// Child of a sibling on the `direction` side. Siblings without children
    /// are skipped; a sibling with no matching child hands over to the next
    /// one in the same direction.
    pub fn nibling_where<P>(&self, direction: Direction, pred: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.seek_beside(direction, 1, pred)
    }

    pub fn grand_nibling_where<P>(&self, direction: Direction, pred: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.seek_beside(direction, 2, pred)
    }

    /// Deepest node satisfying `pred` on the inner spine of the nearest
    /// sibling (in `direction`) that has children.
    ///
    /// The spine runs through first children for `First`/`Next` and last
    /// children for `Previous`/`Last`. Unlike the other searches this keeps
    /// the last match seen and only answers once the spine ends.
    pub fn descendant_nibling_where<P>(&self, direction: Direction, pred: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        let sibling = self.sibling_where(direction, has_children)?;
        let orientation = direction.orientation();
        let found = iter::successors(sibling.inward_child(orientation), |node| {
            node.inward_child(orientation)
        })
        .fold(None, |best, node| {
            if pred(node.focus()) {
                Some(node)
            } else {
                best
            }
        });
        trace!(%direction, found = found.is_some(), "descendant nibling");
        found
    }

    pub fn first_nibling(&self) -> Option<Self> {
        self.nibling_where(Direction::First, always)
    }

    pub fn first_nibling_where<P>(&self, pred: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.nibling_where(Direction::First, pred)
    }

    pub fn previous_nibling(&self) -> Option<Self> {
        self.nibling_where(Direction::Previous, always)
    }

    pub fn previous_nibling_where<P>(&self, pred: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.nibling_where(Direction::Previous, pred)
    }

    pub fn next_nibling(&self) -> Option<Self> {
        self.nibling_where(Direction::Next, always)
    }

    pub fn next_nibling_where<P>(&self, pred: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.nibling_where(Direction::Next, pred)
    }

    pub fn last_nibling(&self) -> Option<Self> {
        self.nibling_where(Direction::Last, always)
    }

    pub fn last_nibling_where<P>(&self, pred: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.nibling_where(Direction::Last, pred)
    }

    pub fn first_grand_nibling(&self) -> Option<Self> {
        self.grand_nibling_where(Direction::First, always)
    }

    pub fn first_grand_nibling_where<P>(&self, pred: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.grand_nibling_where(Direction::First, pred)
    }

    pub fn previous_grand_nibling(&self) -> Option<Self> {
        self.grand_nibling_where(Direction::Previous, always)
    }

    pub fn previous_grand_nibling_where<P>(&self, pred: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.grand_nibling_where(Direction::Previous, pred)
    }

    pub fn next_grand_nibling(&self) -> Option<Self> {
        self.grand_nibling_where(Direction::Next, always)
    }

    pub fn next_grand_nibling_where<P>(&self, pred: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.grand_nibling_where(Direction::Next, pred)
    }

    pub fn last_grand_nibling(&self) -> Option<Self> {
        self.grand_nibling_where(Direction::Last, always)
    }

    pub fn last_grand_nibling_where<P>(&self, pred: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.grand_nibling_where(Direction::Last, pred)
    }

    pub fn first_descendant_nibling(&self) -> Option<Self> {
        self.descendant_nibling_where(Direction::First, always)
    }

    pub fn first_descendant_nibling_where<P>(&self, pred: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.descendant_nibling_where(Direction::First, pred)
    }

    pub fn previous_descendant_nibling(&self) -> Option<Self> {
        self.descendant_nibling_where(Direction::Previous, always)
    }

    pub fn previous_descendant_nibling_where<P>(&self, pred: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.descendant_nibling_where(Direction::Previous, pred)
    }

    pub fn next_descendant_nibling(&self) -> Option<Self> {
        self.descendant_nibling_where(Direction::Next, always)
    }

    pub fn next_descendant_nibling_where<P>(&self, pred: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.descendant_nibling_where(Direction::Next, pred)
    }

    pub fn last_descendant_nibling(&self) -> Option<Self> {
        self.descendant_nibling_where(Direction::Last, always)
    }

    pub fn last_descendant_nibling_where<P>(&self, pred: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.descendant_nibling_where(Direction::Last, pred)
    }
}
