/// Builds a [`Tree`](crate::tree::Tree) literal.
///
/// ```
/// use treekin::tree;
///
/// // 1
/// // ├── 2
/// // └── 3
/// //     └── 4
/// let t = tree!(1, [tree!(2), tree!(3, [tree!(4)])]);
/// assert_eq!(t.size(), 4);
/// ```
#[macro_export]
macro_rules! tree {
    ($value:expr, [$($child:expr),* $(,)?]) => {
        $crate::tree::Tree::with_children($value, vec![$($child),*])
    };
    ($value:expr) => {
        $crate::tree::Tree::leaf($value)
    };
}
