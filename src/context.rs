//! The zipper: a focused node plus the positional context around it.
//!
//! `prev` and `next` are the focus's siblings, both stored nearest first, and
//! `path` holds one [`Location`] per ancestor, nearest ancestor first. Depth
//! and index fall out of the stack lengths, so both are O(1).

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::errors::{Side, StructureError, StructureResult};
use crate::location::Location;
use crate::stack::Stack;
use crate::tree::Tree;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Context<T> {
    pub(crate) focus: Tree<T>,
    pub(crate) prev: Stack<Tree<T>>,
    pub(crate) next: Stack<Tree<T>>,
    pub(crate) path: Stack<Location<T>>,
}

impl<T> Context<T> {
    /// Cursor on the root of `tree`.
    pub fn new(tree: Tree<T>) -> Self {
        Self {
            focus: tree,
            prev: Stack::new(),
            next: Stack::new(),
            path: Stack::new(),
        }
    }

    pub fn from_root(tree: Tree<T>) -> Self {
        Self::new(tree)
    }

    pub fn at_root(&self) -> bool {
        self.path.is_empty()
    }

    pub fn focus(&self) -> &Tree<T> {
        &self.focus
    }

    pub fn value(&self) -> &T {
        self.focus.value()
    }

    pub fn focused_children(&self) -> &[Tree<T>] {
        self.focus.children()
    }

    /// Siblings before the focus, nearest first.
    pub fn prev(&self) -> &Stack<Tree<T>> {
        &self.prev
    }

    /// Siblings after the focus, nearest first (document order).
    pub fn next(&self) -> &Stack<Tree<T>> {
        &self.next
    }

    /// Ancestor frames, nearest first. The root's frame comes last.
    pub fn path(&self) -> &Stack<Location<T>> {
        &self.path
    }

    pub fn depth(&self) -> usize {
        self.path.len()
    }

    pub fn index(&self) -> usize {
        self.prev.len()
    }

    /// Number of nodes in the focus's sibling row, the focus included.
    pub fn row_len(&self) -> usize {
        self.prev.len() + 1 + self.next.len()
    }

    /// Replaces the focus only; siblings and path are kept.
    pub fn set_focus(&self, focus: Tree<T>) -> Self {
        Self {
            focus,
            prev: self.prev.clone(),
            next: self.next.clone(),
            path: self.path.clone(),
        }
    }

    pub fn map_focus<F>(&self, f: F) -> Self
    where
        F: FnOnce(&Tree<T>) -> Tree<T>,
    {
        self.set_focus(f(&self.focus))
    }
}

impl<T: Clone> Context<T> {
    /// Rebuilds a cursor from stored path data.
    ///
    /// The chain is ordered like [`Context::path`]: innermost first. The
    /// innermost location describes the focus frame, so the focus becomes a
    /// leaf carrying that location's value and its siblings become the focus's
    /// siblings. The remaining locations form the path.
    #[instrument(level = "trace", skip_all)]
    pub fn from_location_chain<I>(chain: I) -> StructureResult<Self>
    where
        I: IntoIterator<Item = Location<T>>,
    {
        let mut chain = chain.into_iter();
        let innermost = chain.next().ok_or(StructureError::EmptyLocationChain)?;
        let (prev, value, next) = innermost.into_parts();
        Ok(Self {
            focus: Tree::leaf(value),
            prev,
            next,
            path: chain.collect(),
        })
    }

    /// Captures the current frame; this is what gets pushed onto the path
    /// when the cursor descends into the focus.
    pub fn current_location(&self) -> Location<T> {
        Location::from_stacks(
            self.prev.clone(),
            self.focus.value().clone(),
            self.next.clone(),
        )
    }

    /// Siblings before the focus in document order.
    pub fn siblings_before_focus(&self) -> Vec<Tree<T>> {
        self.prev.to_vec_reversed()
    }

    pub fn siblings_after_focus(&self) -> Vec<Tree<T>> {
        self.next.to_vec()
    }

    /// The focus's full sibling row in document order, focus included.
    pub(crate) fn reassembled_row(&self) -> Vec<Tree<T>> {
        let mut row = Vec::with_capacity(self.row_len());
        row.extend(self.prev.to_vec_reversed());
        row.push(self.focus.clone());
        row.extend(self.next.iter().cloned());
        row
    }

    /// Cursor on `children[index]` of the current focus.
    pub(crate) fn descend_into(&self, index: usize) -> Option<Self> {
        let children = self.focus.children();
        let focus = children.get(index)?.clone();
        Some(Self {
            focus,
            prev: Stack::new().push_all(children[..index].iter().cloned()),
            next: children[index + 1..].iter().cloned().collect(),
            path: self.path.push(self.current_location()),
        })
    }

    /// Moves `distance` positions to the left within the sibling row.
    pub(crate) fn shift_left(&self, distance: usize) -> Option<Self> {
        if distance == 0 {
            return Some(self.clone());
        }
        let (mut passed, prev) = self.prev.split_at(distance)?;
        let focus = passed.pop()?;
        Some(Self {
            focus,
            prev,
            next: self.next.push(self.focus.clone()).push_all(passed),
            path: self.path.clone(),
        })
    }

    /// Moves `distance` positions to the right within the sibling row.
    pub(crate) fn shift_right(&self, distance: usize) -> Option<Self> {
        if distance == 0 {
            return Some(self.clone());
        }
        let (mut passed, next) = self.next.split_at(distance)?;
        let focus = passed.pop()?;
        Some(Self {
            focus,
            prev: self.prev.push(self.focus.clone()).push_all(passed),
            next,
            path: self.path.clone(),
        })
    }

    /// Applies `f` to every sibling before the focus.
    ///
    /// A failing transform is a caller bug and surfaces as
    /// [`StructureError::SiblingTransform`] carrying the sibling's index.
    pub fn try_map_prev_siblings<F, E>(&self, mut f: F) -> StructureResult<Self>
    where
        F: FnMut(&Tree<T>) -> Result<Tree<T>, E>,
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        let index = self.index();
        Ok(Self {
            prev: map_siblings(&self.prev, Side::Before, |pos| index - 1 - pos, &mut f)?,
            ..self.clone()
        })
    }

    pub fn try_map_next_siblings<F, E>(&self, mut f: F) -> StructureResult<Self>
    where
        F: FnMut(&Tree<T>) -> Result<Tree<T>, E>,
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        let index = self.index();
        Ok(Self {
            next: map_siblings(&self.next, Side::After, |pos| index + 1 + pos, &mut f)?,
            ..self.clone()
        })
    }

    /// Both sides, nearest-first on the left, then nearest-first on the right.
    pub fn try_map_siblings<F, E>(&self, mut f: F) -> StructureResult<Self>
    where
        F: FnMut(&Tree<T>) -> Result<Tree<T>, E>,
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        self.try_map_prev_siblings(&mut f)?
            .try_map_next_siblings(&mut f)
    }
}

fn map_siblings<T, F, E, I>(
    siblings: &Stack<Tree<T>>,
    side: Side,
    index_of: I,
    f: &mut F,
) -> StructureResult<Stack<Tree<T>>>
where
    F: FnMut(&Tree<T>) -> Result<Tree<T>, E>,
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
    I: Fn(usize) -> usize,
{
    siblings
        .iter()
        .enumerate()
        .map(|(pos, sibling)| {
            f(sibling).map_err(|e| StructureError::SiblingTransform {
                side,
                index: index_of(pos),
                source: e.into(),
            })
        })
        .collect::<StructureResult<Vec<_>>>()
        .map(|mapped| mapped.into_iter().collect())
}
