//! Environment overrides for settings. Kept in a separate test binary
//! because the variables are process-wide.

use std::env;
use std::path::Path;

use treekin::config::Settings;
use treekin::errors::SettingsError;
use treekin::util::testing;

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

#[test]
fn given_env_overrides_when_loading_then_env_wins_over_files() {
    env::set_var("TREEKIN__RENDER__MAX_DEPTH", "2");
    env::set_var("TREEKIN__RENDER__SHOW_LOCATION", "true");

    let settings =
        Settings::load_from(Some(Path::new("tests/resources/settings/global.toml")), None).unwrap();
    assert_eq!(settings.render.max_depth, Some(2));
    assert!(settings.render.show_location);
    // not overridden, still from the global file
    assert_eq!(settings.render.focus_marker, "=> ");

    env::set_var("TREEKIN__RENDER__MAX_DEPTH", "deep");
    let err = Settings::load_from(None, None).unwrap_err();
    assert!(matches!(err, SettingsError::Environment(_)));

    env::remove_var("TREEKIN__RENDER__MAX_DEPTH");
    env::remove_var("TREEKIN__RENDER__SHOW_LOCATION");
    assert_eq!(Settings::load_from(None, None).unwrap(), Settings::default());
}
