//! Immutable tree zipper with a kinship navigation algebra.
//!
//! A [`Context`] is a cursor over a shared, immutable [`Tree`]: the focused
//! node plus its siblings and the path of ancestor frames back to the root.
//! Every move borrows the cursor and returns a new one, or `None` when the
//! requested relation does not exist:
//!
//! ```
//! use treekin::{tree, Context};
//!
//! let root = Context::new(tree!(1, [tree!(2, [tree!(4)]), tree!(3, [tree!(5)])]));
//! let four = root.follow(&[0, 0]).unwrap();
//! assert_eq!(*four.next_first_cousin().unwrap().value(), 5);
//! assert_eq!(*four.parent().unwrap().value(), 2);
//! assert!(root.parent().is_none());
//! assert_eq!(four.to_tree(), root.to_tree());
//! ```
//!
//! Relations are grouped in [`kin`]: ancestors, descendants, siblings,
//! niblings, piblings, cousins and extended cousins. Generic combinators over
//! moves live in [`traversal`].

#[macro_use]
pub mod macros;

pub mod config;
pub mod context;
pub mod errors;
pub mod kin;
pub mod location;
pub mod render;
pub mod stack;
pub mod traversal;
pub mod tree;
pub mod util;

pub use context::Context;
pub use kin::Direction;
pub use location::Location;
pub use stack::Stack;
pub use tree::Tree;
