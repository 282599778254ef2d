//! Generic combinators over moves.
//!
//! A move is any `Fn(&Context<T>) -> Option<Context<T>>`, so the kin methods
//! can be passed by path: `ctx.move_times(2, Context::next_sibling)`.

use tracing::{instrument, trace};

use crate::context::Context;
use crate::tree::Tree;

impl<T: Clone> Context<T> {
    /// Applies `step` `n` times. `None` as soon as one application fails;
    /// `n == 0` returns the cursor unchanged.
    pub fn move_times<F>(&self, n: usize, step: F) -> Option<Self>
    where
        F: Fn(&Self) -> Option<Self>,
    {
        (0..n).try_fold(self.clone(), |ctx, _| step(&ctx))
    }

    /// Climbs until the root. Always succeeds.
    pub fn to_root(&self) -> Self {
        let mut ctx = self.clone();
        while let Some(parent) = ctx.parent() {
            ctx = parent;
        }
        ctx
    }

    /// Reassembles the whole tree around the current focus.
    pub fn to_tree(&self) -> Tree<T> {
        self.to_root().focus
    }

    /// Tests the focus, then keeps applying `step` until the focus satisfies
    /// `pred` or `step` fails.
    #[instrument(level = "trace", skip_all, fields(depth = self.depth(), index = self.index()))]
    pub fn find<P, F>(&self, pred: P, step: F) -> Option<Self>
    where
        P: Fn(&Tree<T>) -> bool,
        F: Fn(&Self) -> Option<Self>,
    {
        let mut ctx = self.clone();
        let mut steps = 0usize;
        loop {
            if pred(ctx.focus()) {
                trace!(steps, "found");
                return Some(ctx);
            }
            ctx = step(&ctx)?;
            steps += 1;
        }
    }

    /// Descends by child indices, outermost first.
    pub fn follow(&self, indices: &[usize]) -> Option<Self> {
        indices
            .iter()
            .try_fold(self.clone(), |ctx, &index| ctx.child_at(index))
    }

    /// Child indices leading from the root to the focus; empty at the root.
    pub fn address(&self) -> Vec<usize> {
        if self.at_root() {
            return Vec::new();
        }
        // the root frame has no index of its own
        let mut address: Vec<usize> = self
            .path
            .iter()
            .take(self.depth() - 1)
            .map(|location| location.index())
            .collect();
        address.reverse();
        address.push(self.index());
        address
    }
}
