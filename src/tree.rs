use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
struct Node<T> {
    value: T,
    #[serde(default)]
    children: Vec<Tree<T>>,
}

/// Immutable n-ary tree node: a value and an ordered list of children.
///
/// Nodes are reference counted, so cloning a tree is O(1) and every clone
/// shares structure with the original. A "modified" tree is always a new value.
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tree<T> {
    node: Arc<Node<T>>,
}

impl<T> Tree<T> {
    pub fn leaf(value: T) -> Self {
        Self::with_children(value, Vec::new())
    }

    pub fn with_children<I>(value: T, children: I) -> Self
    where
        I: IntoIterator<Item = Tree<T>>,
    {
        Self {
            node: Arc::new(Node {
                value,
                children: children.into_iter().collect(),
            }),
        }
    }

    pub fn value(&self) -> &T {
        &self.node.value
    }

    pub fn children(&self) -> &[Tree<T>] {
        &self.node.children
    }

    pub fn is_leaf(&self) -> bool {
        self.node.children.is_empty()
    }

    pub fn has_children(&self) -> bool {
        !self.is_leaf()
    }

    pub fn child_count(&self) -> usize {
        self.node.children.len()
    }

    /// True when both handles point at the very same node.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.node, &other.node)
    }

    /// Number of levels, counting the root as one.
    pub fn height(&self) -> usize {
        let mut max_depth = 0;
        let mut stack = vec![(self, 1)];

        while let Some((node, depth)) = stack.pop() {
            max_depth = max_depth.max(depth);
            for child in node.children() {
                stack.push((child, depth + 1));
            }
        }

        max_depth
    }

    pub fn size(&self) -> usize {
        self.preorder().count()
    }

    /// Values of all leaves, left to right.
    pub fn leaf_values(&self) -> Vec<&T> {
        self.preorder()
            .filter(|node| node.is_leaf())
            .map(|node| node.value())
            .collect()
    }

    pub fn preorder(&self) -> PreOrderIter<'_, T> {
        PreOrderIter { stack: vec![self] }
    }

    pub fn postorder(&self) -> PostOrderIter<'_, T> {
        PostOrderIter {
            stack: vec![(self, false)],
        }
    }
}

impl<T: Clone> Tree<T> {
    /// Same value, new children.
    pub fn replace_children<I>(&self, children: I) -> Self
    where
        I: IntoIterator<Item = Tree<T>>,
    {
        Self::with_children(self.value().clone(), children)
    }

    pub fn map_value<F>(&self, f: F) -> Self
    where
        F: FnOnce(&T) -> T,
    {
        Self {
            node: Arc::new(Node {
                value: f(self.value()),
                children: self.node.children.clone(),
            }),
        }
    }
}

// Uniquely owned descendants are unwound through a worklist so that very deep
// trees do not recurse once per level.
impl<T> Drop for Node<T> {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(tree) = pending.pop() {
            if let Ok(mut node) = Arc::try_unwrap(tree.node) {
                pending.append(&mut node.children);
            }
        }
    }
}

impl<T> Clone for Tree<T> {
    fn clone(&self) -> Self {
        Self {
            node: Arc::clone(&self.node),
        }
    }
}

impl<T> From<T> for Tree<T> {
    fn from(value: T) -> Self {
        Self::leaf(value)
    }
}

impl<T: PartialEq> PartialEq for Tree<T> {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];
        while let Some((left, right)) = pending.pop() {
            if left.ptr_eq(right) {
                continue;
            }
            if left.value() != right.value() || left.child_count() != right.child_count() {
                return false;
            }
            pending.extend(left.children().iter().zip(right.children()));
        }
        true
    }
}

impl<T: Eq> Eq for Tree<T> {}

impl<T: fmt::Debug> fmt::Debug for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_leaf() {
            write!(f, "Tree({:?})", self.value())
        } else {
            f.debug_struct("Tree")
                .field("value", self.value())
                .field("children", &self.children())
                .finish()
        }
    }
}

pub struct PreOrderIter<'a, T> {
    stack: Vec<&'a Tree<T>>,
}

impl<'a, T> Iterator for PreOrderIter<'a, T> {
    type Item = &'a Tree<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.stack.pop()?;
        // Push children in reverse order for left-to-right traversal
        for child in current.children().iter().rev() {
            self.stack.push(child);
        }
        Some(current)
    }
}

pub struct PostOrderIter<'a, T> {
    stack: Vec<(&'a Tree<T>, bool)>,
}

impl<'a, T> Iterator for PostOrderIter<'a, T> {
    type Item = &'a Tree<T>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((current, visited)) = self.stack.pop() {
            if visited {
                return Some(current);
            }
            self.stack.push((current, true));
            for child in current.children().iter().rev() {
                self.stack.push((child, false));
            }
        }
        None
    }
}
