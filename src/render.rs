//! Text rendering of trees and cursors through `termtree`.

use std::fmt::{self, Display};

use itertools::Itertools;
use tracing::instrument;

use crate::config::RenderSettings;
use crate::context::Context;
use crate::tree::Tree;

const COLLAPSED: &str = "…";

pub fn tree_to_termtree<T: Display>(tree: &Tree<T>) -> termtree::Tree<String> {
    let leaves: Vec<_> = tree.children().iter().map(tree_to_termtree).collect();
    termtree::Tree::new(tree.value().to_string()).with_leaves(leaves)
}

/// Draws the whole tree around the cursor and marks the focus.
#[instrument(level = "debug", skip_all, fields(depth = ctx.depth(), index = ctx.index()))]
pub fn context_to_termtree<T>(ctx: &Context<T>, settings: &RenderSettings) -> termtree::Tree<String>
where
    T: Display + Clone,
{
    let address = ctx.address();
    let renderer = Renderer {
        settings,
        address: &address,
    };
    renderer.node(&ctx.to_tree(), 0, true)
}

struct Renderer<'a> {
    settings: &'a RenderSettings,
    address: &'a [usize],
}

impl Renderer<'_> {
    /// `on_path` is true while `tree` lies on the branch from the root to the
    /// focus; at `depth == address.len()` that node is the focus itself.
    fn node<T: Display>(&self, tree: &Tree<T>, depth: usize, on_path: bool) -> termtree::Tree<String> {
        let is_focus = on_path && depth == self.address.len();
        let mut rendered = termtree::Tree::new(self.label(tree, is_focus));
        let path_child = if on_path {
            self.address.get(depth).copied()
        } else {
            None
        };
        let collapsed = self.settings.max_depth.is_some_and(|max| depth >= max);

        let mut hidden = false;
        for (index, child) in tree.children().iter().enumerate() {
            let towards_focus = path_child == Some(index);
            if collapsed && !towards_focus {
                hidden = true;
                continue;
            }
            rendered.push(self.node(child, depth + 1, towards_focus));
        }
        if hidden {
            rendered.push(termtree::Tree::new(COLLAPSED.to_string()));
        }
        rendered
    }

    fn label<T: Display>(&self, tree: &Tree<T>, is_focus: bool) -> String {
        if !is_focus {
            return tree.value().to_string();
        }
        let mut label = format!("{}{}", self.settings.focus_marker, tree.value());
        if self.settings.show_location {
            label.push_str(&format!(" @[{}]", self.address.iter().join(".")));
        }
        label
    }
}

impl<T: Display> Display for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", tree_to_termtree(self))
    }
}

impl<T: Display + Clone> Display for Context<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", context_to_termtree(self, &RenderSettings::default()))
    }
}
