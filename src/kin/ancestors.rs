use std::iter;

use tracing::instrument;

use crate::context::Context;
use crate::tree::Tree;

impl<T: Clone> Context<T> {
    /// Pops the nearest frame and rebuilds the parent around the focus's row.
    /// `None` at the root.
    pub fn parent(&self) -> Option<Self> {
        let (location, path) = self.path.pop()?;
        let focus = Tree::with_children(location.value().clone(), self.reassembled_row());
        Some(Self {
            focus,
            prev: location.prev().clone(),
            next: location.next().clone(),
            path,
        })
    }

    pub fn grandparent(&self) -> Option<Self> {
        self.parent()?.parent()
    }

    pub fn great_grandparent(&self) -> Option<Self> {
        self.grandparent()?.parent()
    }

    /// Proper ancestors, nearest first.
    pub fn ancestors(&self) -> impl Iterator<Item = Self> {
        iter::successors(self.parent(), Self::parent)
    }

    /// Nearest proper ancestor satisfying `pred`.
    #[instrument(level = "trace", skip_all, fields(depth = self.depth()))]
    pub fn find_parent<P>(&self, pred: P) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
    {
        self.ancestors().find(|ancestor| pred(ancestor.focus()))
    }
}
