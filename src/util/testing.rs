use std::env;
use std::sync::Once;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::context::Context;
use crate::tree::Tree;

static TEST_SETUP: Once = Once::new();

pub fn init_test_setup() {
    TEST_SETUP.call_once(|| {
        if env::var("RUST_LOG").is_err() {
            env::set_var("RUST_LOG", "treekin=debug");
        }
        // global logging subscriber, used by all tracing log macros
        setup_test_logging();
        info!("Test Setup complete");
    });
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");

    // Create a filter for noisy modules: walk steps are traced per node and
    // stay out unless RUST_LOG names them explicitly
    let noisy_modules = ["treekin::kin::walk"];
    let explicit = env::var("RUST_LOG").is_ok_and(|filter| filter.contains("walk"));
    let module_filter = filter_fn(move |metadata| {
        explicit
            || !noisy_modules
                .iter()
                .any(|name| metadata.target().starts_with(name))
    });

    // Set up the subscriber with environment filter
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    // Build and set the subscriber; span close events carry the busy/idle
    // timings of the instrumented searches
    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}

/// Complete tree where every inner node has `branching` children and the
/// leaves sit `depth` levels below the root.
///
/// Values are level-order numbers starting at 1, so child `j` of node `v`
/// carries `branching * (v - 1) + 2 + j`.
pub fn full_tree(branching: usize, depth: usize) -> Tree<usize> {
    fn build(value: usize, branching: usize, remaining: usize) -> Tree<usize> {
        if remaining == 0 {
            return Tree::leaf(value);
        }
        let children = (0..branching).map(|j| build(branching * (value - 1) + 2 + j, branching, remaining - 1));
        Tree::with_children(value, children)
    }
    build(1, branching, depth)
}

/// `1[2,3,4]` with the cursor on 3.
pub fn sibling_row() -> Context<i32> {
    Context::new(Tree::with_children(1, [2, 3, 4].map(Tree::leaf)))
        .child_at(1)
        .expect("1 has three children")
}

/// Cursor on 5 in the row `1 2 3(10 11 12) 4 5 6 7(13 14 15) 8 9` under a
/// root 0. Only 3 and 7 have children.
pub fn nibling_row() -> Context<i32> {
    let row = (1..=9).map(|value| match value {
        3 => Tree::with_children(3, [10, 11, 12].map(Tree::leaf)),
        7 => Tree::with_children(7, [13, 14, 15].map(Tree::leaf)),
        _ => Tree::leaf(value),
    });
    Context::new(Tree::with_children(0, row))
        .child_at(4)
        .expect("the row has nine nodes")
}

/// Every node reachable from `root`, in preorder.
pub fn all_positions<T: Clone>(root: &Context<T>) -> Vec<Context<T>> {
    let mut found = Vec::new();
    let mut pending = vec![root.clone()];
    while let Some(ctx) = pending.pop() {
        let children: Vec<_> = (0..ctx.focused_children().len())
            .filter_map(|index| ctx.child_at(index))
            .collect();
        pending.extend(children.into_iter().rev());
        found.push(ctx);
    }
    found
}
