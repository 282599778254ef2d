//! Layered settings loading.
//!
//! Precedence: defaults < global file < local `.treekin.toml` < environment.
//! These tests pass explicit global paths and temp directories, so the user's
//! own config never leaks in. Environment overrides live in
//! `settings_env_test.rs` because they mutate process state.

use std::fs;
use std::path::Path;

use rstest::rstest;
use tempfile::TempDir;

use treekin::config::{local_config_path, RenderSettings, Settings};
use treekin::errors::SettingsError;
use treekin::render::context_to_termtree;
use treekin::util::testing;
use treekin::{tree, Context};

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

const GLOBAL: &str = "tests/resources/settings/global.toml";

fn local_dir_with(source: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::copy(source, local_config_path(dir.path())).unwrap();
    dir
}

// ============================================================
// Layering
// ============================================================

#[test]
fn given_no_files_when_loading_then_defaults() {
    let empty = TempDir::new().unwrap();
    let settings = Settings::load_from(None, Some(empty.path())).unwrap();
    assert_eq!(settings, Settings::default());
}

#[test]
fn given_global_only_when_loading_then_global_overrides_defaults() {
    let settings = Settings::load_from(Some(Path::new(GLOBAL)), None).unwrap();
    assert_eq!(settings.render.focus_marker, "=> ");
    assert_eq!(settings.render.max_depth, Some(4));
    assert!(!settings.render.show_location);
}

#[test]
fn given_global_and_local_when_loading_then_local_wins_per_field() {
    let local = local_dir_with("tests/resources/settings/local.toml");
    let settings = Settings::load_from(Some(Path::new(GLOBAL)), Some(local.path())).unwrap();
    // unset locally, inherited from global
    assert_eq!(settings.render.focus_marker, "=> ");
    assert_eq!(settings.render.max_depth, Some(1));
    assert!(settings.render.show_location);
}

#[rstest]
#[case("does/not/exist.toml")]
#[case("tests/resources/settings/missing.toml")]
fn given_missing_global_file_when_loading_then_it_is_skipped(#[case] global: &str) {
    let settings = Settings::load_from(Some(Path::new(global)), None).unwrap();
    assert_eq!(settings, Settings::default());
}

#[test]
fn given_malformed_local_file_when_loading_then_parse_error_names_file() {
    let local = local_dir_with("tests/resources/settings/broken.toml");
    let err = Settings::load_from(None, Some(local.path())).unwrap_err();
    match &err {
        SettingsError::Parse { path, .. } => assert!(path.ends_with(".treekin.toml")),
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.to_string().contains(".treekin.toml"));
}

// ============================================================
// Settings drive rendering
// ============================================================

#[test]
fn given_loaded_settings_when_rendering_then_marker_and_location_are_used() {
    let local = local_dir_with("tests/resources/settings/local.toml");
    let settings = Settings::load_from(Some(Path::new(GLOBAL)), Some(local.path())).unwrap();

    let ctx = Context::new(tree!(1, [tree!(2, [tree!(4)]), tree!(3, [tree!(5)])]))
        .follow(&[1, 0])
        .unwrap();
    let text = context_to_termtree(&ctx, &settings.render).to_string();
    assert!(text.contains("=> 5 @[1.0]"));
    // max_depth = 1 hides 2's child but keeps the focus branch
    assert!(!text.contains('4'));
}

#[test]
fn given_default_render_settings_when_displaying_context_then_same_as_explicit() {
    let ctx = Context::new(tree!("root", [tree!("a"), tree!("b")]))
        .last_child()
        .unwrap();
    let explicit = context_to_termtree(&ctx, &RenderSettings::default()).to_string();
    assert_eq!(ctx.to_string(), explicit);
    assert!(explicit.contains("> b"));
}
