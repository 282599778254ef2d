//! Kinship navigation over a [`Context`](crate::context::Context).
//!
//! Every move takes `&self` and returns `Option<Context<T>>`; `None` means
//! the relation does not exist for this cursor. Predicate variants carry a
//! `_where` (or `_while`) suffix; the plain form accepts every node.
//!
//! Directional families share one convention:
//!
//! | direction  | side of the focus's branch | scan order                 |
//! |------------|----------------------------|----------------------------|
//! | `First`    | left                       | from the left extremity    |
//! | `Previous` | left                       | outward from the focus     |
//! | `Next`     | right                      | outward from the focus     |
//! | `Last`     | right                      | from the right extremity   |
//!
//! A search never crosses the focus's own branch to reach the other side.

use std::fmt;

use crate::tree::Tree;

pub mod ancestors;
pub mod cousins;
pub mod descendants;
pub mod extended;
pub mod niblings;
pub mod piblings;
pub mod siblings;
pub(crate) mod walk;

pub use extended::ScopeFrame;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    First,
    Previous,
    Next,
    Last,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::First,
        Direction::Previous,
        Direction::Next,
        Direction::Last,
    ];

    /// `First` and `Previous` search left of the focus.
    pub fn is_leftward(self) -> bool {
        matches!(self, Direction::First | Direction::Previous)
    }

    /// `First` and `Last` start from the tree's extremities.
    pub fn from_extremity(self) -> bool {
        matches!(self, Direction::First | Direction::Last)
    }

    pub fn mirror(self) -> Self {
        match self {
            Direction::First => Direction::Last,
            Direction::Previous => Direction::Next,
            Direction::Next => Direction::Previous,
            Direction::Last => Direction::First,
        }
    }

    pub(crate) fn orientation(self) -> walk::Orientation {
        match self {
            Direction::First | Direction::Next => walk::Orientation::Forward,
            Direction::Previous | Direction::Last => walk::Orientation::Backward,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::First => write!(f, "first"),
            Direction::Previous => write!(f, "previous"),
            Direction::Next => write!(f, "next"),
            Direction::Last => write!(f, "last"),
        }
    }
}

/// Predicate accepting every node.
pub fn always<T>(_: &Tree<T>) -> bool {
    true
}

pub fn has_children<T>(tree: &Tree<T>) -> bool {
    tree.has_children()
}
