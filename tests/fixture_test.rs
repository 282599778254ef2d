//! Cursors restored from TOML fixtures.

use std::fs;

use rstest::{fixture, rstest};
use serde::Deserialize;
use treekin::errors::StructureError;
use treekin::util::testing;
use treekin::{tree, Context, Location, Tree};

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

#[derive(Debug, Deserialize)]
struct Fixture {
    tree: Tree<i64>,
    chain: Vec<Location<i64>>,
}

#[fixture]
fn family() -> Fixture {
    let text = fs::read_to_string("tests/resources/trees/family.toml").unwrap();
    toml::from_str(&text).unwrap()
}

#[rstest]
fn given_toml_fixture_when_parsing_then_tree_shape_is_kept(family: Fixture) {
    let expected = tree!(
        1,
        [
            tree!(2, [tree!(5), tree!(6)]),
            tree!(3, [tree!(7)]),
            tree!(4, [tree!(8), tree!(9)]),
        ]
    );
    assert_eq!(family.tree, expected);
    assert_eq!(family.tree.height(), 3);
    assert_eq!(family.tree.leaf_values(), vec![&5, &6, &7, &8, &9]);
}

#[rstest]
fn given_location_chain_when_restoring_then_cursor_matches_navigation(family: Fixture) {
    let restored = Context::from_location_chain(family.chain).unwrap();
    let navigated = Context::new(family.tree.clone()).follow(&[1, 0]).unwrap();

    assert_eq!(*restored.value(), 7);
    assert_eq!(restored.depth(), 2);
    assert_eq!(restored.address(), navigated.address());
    assert_eq!(restored.to_tree(), family.tree);
    assert_eq!(restored, navigated);
    assert_eq!(*restored.next_first_cousin().unwrap().value(), 8);
}

#[rstest]
fn given_navigated_cursor_when_capturing_chain_then_restores_same_cursor(family: Fixture) {
    let ctx = Context::new(family.tree).follow(&[2, 1]).unwrap();
    let chain: Vec<Location<i64>> = std::iter::once(ctx.current_location())
        .chain(ctx.path().iter().cloned())
        .collect();
    // leaves restore exactly; inner nodes would come back without children
    assert_eq!(Context::from_location_chain(chain).unwrap(), ctx);
}

#[test]
fn given_empty_chain_when_restoring_then_structure_error() {
    let err = Context::<i64>::from_location_chain(Vec::new()).unwrap_err();
    assert!(matches!(err, StructureError::EmptyLocationChain));
    assert!(err.to_string().contains("empty location chain"));
}

#[rstest]
fn given_tree_when_serializing_to_toml_then_round_trips(family: Fixture) {
    #[derive(serde::Serialize, Deserialize)]
    struct Wrapper {
        tree: Tree<i64>,
    }
    let text = toml::to_string(&Wrapper {
        tree: family.tree.clone(),
    })
    .unwrap();
    let back: Wrapper = toml::from_str(&text).unwrap();
    assert_eq!(back.tree, family.tree);
}

#[test]
fn given_failing_sibling_transform_when_mapping_then_error_names_position() {
    let ctx = testing::sibling_row();
    let err = ctx
        .try_map_prev_siblings(|t: &Tree<i32>| {
            if *t.value() == 2 {
                Err("two is not allowed")
            } else {
                Ok(t.clone())
            }
        })
        .unwrap_err();
    match &err {
        StructureError::SiblingTransform { index, .. } => assert_eq!(*index, 0),
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(std::error::Error::source(&err).is_some());
}
