use super::{always, Direction};
use crate::context::Context;
use crate::stack::Stack;
use crate::tree::Tree;

/// Distance from the focus to the nearest (or farthest) matching sibling.
fn distance_to_match<T, P>(siblings: &Stack<Tree<T>>, farthest: bool, pred: &P) -> Option<usize>
where
    P: Fn(&Tree<T>) -> bool,
{
    let mut hits = siblings
        .iter()
        .enumerate()
        .filter(|&(_, sibling)| pred(sibling))
        .map(|(pos, _)| pos + 1);
    if farthest {
        hits.last()
    } else {
        hits.next()
    }
}

impl<T: Clone> Context<T> {
    /// Lateral move in `direction` to a sibling satisfying `pred`.
    ///
    /// Left searches only look at `prev`, right searches only at `next`.
    pub fn sibling_where<P>(&self, direction: Direction, pred: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        match direction {
            Direction::First => self.shift_left(distance_to_match(&self.prev, true, &pred)?),
            Direction::Previous => self.shift_left(distance_to_match(&self.prev, false, &pred)?),
            Direction::Next => self.shift_right(distance_to_match(&self.next, false, &pred)?),
            Direction::Last => self.shift_right(distance_to_match(&self.next, true, &pred)?),
        }
    }

    /// Leftmost sibling before the focus.
    pub fn first_sibling(&self) -> Option<Self> {
        self.sibling_where(Direction::First, always)
    }

    pub fn first_sibling_where<P>(&self, pred: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.sibling_where(Direction::First, pred)
    }

    pub fn previous_sibling(&self) -> Option<Self> {
        self.shift_left(1)
    }

    pub fn previous_sibling_where<P>(&self, pred: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.sibling_where(Direction::Previous, pred)
    }

    pub fn next_sibling(&self) -> Option<Self> {
        self.shift_right(1)
    }

    pub fn next_sibling_where<P>(&self, pred: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.sibling_where(Direction::Next, pred)
    }

    /// Rightmost sibling after the focus.
    pub fn last_sibling(&self) -> Option<Self> {
        self.sibling_where(Direction::Last, always)
    }

    pub fn last_sibling_where<P>(&self, pred: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.sibling_where(Direction::Last, pred)
    }

    /// Sibling at `index` in document order. The focus's own index is not a
    /// sibling, so asking for it yields `None`.
    pub fn sibling_at(&self, index: usize) -> Option<Self> {
        let own = self.index();
        if index < own {
            self.shift_left(own - index)
        } else if index > own {
            self.shift_right(index - own)
        } else {
            None
        }
    }

    pub(crate) fn has_sibling_toward(&self, direction: Direction) -> bool {
        if direction.is_leftward() {
            !self.prev.is_empty()
        } else {
            !self.next.is_empty()
        }
    }
}
