//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use std::path::PathBuf;

use hazesite::config::AppConfig;
use serial_test::serial;

/// Fresh config directory under the system temp dir
fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("hazesite-config-{}-{}", name, std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("HAZE_WINDOW__TITLE", "Test From Env");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.window.title, "Test From Env");
    std::env::remove_var("HAZE_WINDOW__TITLE");
}

#[test]
#[serial]
fn test_default_file_matches_defaults() {
    std::env::remove_var("HAZE_WINDOW__TITLE");

    let cwd = std::env::current_dir().unwrap();
    assert!(cwd.join("config/default.toml").exists());

    let config = AppConfig::load().unwrap();
    let defaults = AppConfig::default();
    assert_eq!(config.intro, defaults.intro);
    assert_eq!(config.camera.fov, defaults.camera.fov);
    assert_eq!(config.site.content_root, defaults.site.content_root);
}

#[test]
#[serial]
fn test_user_file_overrides_default() {
    let dir = scratch_dir("user");
    std::fs::write(
        dir.join("default.toml"),
        "[site]\nbase_path = \"/\"\n[player]\nvolume = 1.0\n",
    )
    .unwrap();
    std::fs::write(
        dir.join("user.toml"),
        "[site]\nbase_path = \"hazesite\"\n",
    )
    .unwrap();

    let config = AppConfig::load_from(&dir).unwrap();
    assert_eq!(config.site.normalized_base_path(), "/hazesite/");
    assert_eq!(config.site.basename(), "/hazesite");
    assert_eq!(config.player.volume, 1.0);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
#[serial]
fn test_env_beats_files() {
    let dir = scratch_dir("env");
    std::fs::write(dir.join("user.toml"), "[intro]\ntotal_duration = 5.0\n").unwrap();

    std::env::set_var("HAZE_INTRO__TOTAL_DURATION", "4.0");
    let config = AppConfig::load_from(&dir);
    std::env::remove_var("HAZE_INTRO__TOTAL_DURATION");

    assert_eq!(config.unwrap().intro.total_duration, 4.0);
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
#[serial]
fn test_invalid_intro_rejected() {
    let dir = scratch_dir("invalid");
    std::fs::write(dir.join("user.toml"), "[intro]\nparticle_count = 0\n").unwrap();

    let result = AppConfig::load_from(&dir);
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("particle"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
#[serial]
fn test_missing_dir_uses_defaults() {
    let config = AppConfig::load_from("does/not/exist").unwrap();
    assert_eq!(config.window.title, "Haze's site...");
    assert_eq!(config.site.start_route, "/");
}
