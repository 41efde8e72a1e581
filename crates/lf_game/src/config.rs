//! Game tuning loaded from `assets/config.json`.
//!
//! Every field has a default matching the shipped tuning, so a missing file
//! or a partial file both produce a playable game. A file that exists but
//! fails to parse or validate is a hard error; silently ignoring a broken
//! config makes tuning sessions miserable.

use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct GameConfig {
    pub window_title: String,
    pub window_width: u32,
    pub window_height: u32,
    /// Vertical acceleration applied to the player every step.
    pub gravity: f32,
    pub player_speed: f32,
    pub player_width: f32,
    pub player_height: f32,
    pub platform_count: u32,
    /// Every n-th platform (0, n, 2n, ...) is a winning one.
    pub win_platform_stride: u32,
    /// When true, a landing keeps counting toward the outcome even after the
    /// player steps off the platform.
    pub sticky_outcome: bool,
    pub walk_frame_seconds: f32,
    pub player_sheet: String,
    pub platform_win: String,
    pub platform_lose: String,
    pub message_win: String,
    pub message_lose: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window_title: default_window_title(),
            window_width: 640,
            window_height: 480,
            gravity: -0.2,
            player_speed: 1.0,
            player_width: 0.9,
            player_height: 0.9,
            platform_count: 10,
            win_platform_stride: 3,
            sticky_outcome: true,
            walk_frame_seconds: 0.25,
            player_sheet: default_player_sheet(),
            platform_win: default_platform_win(),
            platform_lose: default_platform_lose(),
            message_win: default_message_win(),
            message_lose: default_message_lose(),
        }
    }
}

/// Load the config at `path`. A missing file is not an error: the defaults
/// are the shipped tuning and the game should boot without any config on
/// disk. A present-but-broken file is an error.
pub fn load_config(path: &Path) -> Result<GameConfig, String> {
    if !path.exists() {
        log::info!(
            "No config file at {}, using default tuning",
            path.display()
        );
        return Ok(GameConfig::default());
    }

    let raw = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config file {}: {e}", path.display()))?;
    let config: GameConfig = serde_json::from_str(&raw)
        .map_err(|e| format!("Failed to parse config JSON {}: {e}", path.display()))?;
    validate_config(&config)?;
    Ok(config)
}

fn validate_config(config: &GameConfig) -> Result<(), String> {
    if config.window_width == 0 || config.window_height == 0 {
        return Err(format!(
            "Config validation failed: window size {}x{} must be nonzero",
            config.window_width, config.window_height
        ));
    }
    if config.player_width <= 0.0 || config.player_height <= 0.0 {
        return Err(format!(
            "Config validation failed: player size {}x{} must be positive",
            config.player_width, config.player_height
        ));
    }
    if config.player_speed < 0.0 {
        return Err(format!(
            "Config validation failed: player_speed {} must not be negative",
            config.player_speed
        ));
    }
    if config.platform_count == 0 {
        return Err("Config validation failed: platform_count must be at least 1".to_string());
    }
    if config.win_platform_stride == 0 {
        return Err(
            "Config validation failed: win_platform_stride must be at least 1".to_string(),
        );
    }
    if config.walk_frame_seconds <= 0.0 {
        return Err(format!(
            "Config validation failed: walk_frame_seconds {} must be positive",
            config.walk_frame_seconds
        ));
    }
    Ok(())
}

fn default_window_title() -> String {
    "Landfall".to_string()
}

fn default_player_sheet() -> String {
    "assets/textures/doctor.png".to_string()
}

fn default_platform_win() -> String {
    "assets/textures/platformwin.png".to_string()
}

fn default_platform_lose() -> String {
    "assets/textures/platformlose.png".to_string()
}

fn default_message_win() -> String {
    "assets/textures/message_win.png".to_string()
}

fn default_message_lose() -> String {
    "assets/textures/message_lose.png".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_file_path(name_hint: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time before unix epoch")
            .as_nanos();
        std::env::temp_dir().join(format!(
            "landfall_config_test_{}_{}_{}.json",
            name_hint,
            std::process::id(),
            nanos
        ))
    }

    fn write_config_file(path: &Path, body: &str) {
        fs::write(path, body).expect("failed to write temp config file");
    }

    #[test]
    fn defaults_match_shipped_tuning() {
        let config = GameConfig::default();
        assert_eq!(config.window_width, 640);
        assert_eq!(config.window_height, 480);
        assert_eq!(config.gravity, -0.2);
        assert_eq!(config.player_speed, 1.0);
        assert_eq!(config.player_width, 0.9);
        assert_eq!(config.platform_count, 10);
        assert_eq!(config.win_platform_stride, 3);
        assert!(config.sticky_outcome);
        assert_eq!(config.walk_frame_seconds, 0.25);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let path = temp_file_path("missing");
        let _ = fs::remove_file(&path);

        let config = load_config(&path).expect("missing file should yield defaults");
        assert_eq!(config.window_title, "Landfall");
        assert_eq!(config.platform_count, 10);
    }

    #[test]
    fn partial_file_overrides_only_named_fields() {
        let path = temp_file_path("partial");
        let json = r#"
        {
          "gravity": -0.5,
          "platform_count": 6,
          "sticky_outcome": false
        }
        "#;

        write_config_file(&path, json);
        let config = load_config(&path).expect("partial config should load");
        assert_eq!(config.gravity, -0.5);
        assert_eq!(config.platform_count, 6);
        assert!(!config.sticky_outcome);
        // Untouched fields keep their defaults.
        assert_eq!(config.window_width, 640);
        assert_eq!(config.player_speed, 1.0);

        let _ = fs::remove_file(path);
    }

    #[test]
    fn rejects_zero_platform_count() {
        let path = temp_file_path("zero_platforms");
        write_config_file(&path, r#"{ "platform_count": 0 }"#);

        let err = load_config(&path).expect_err("zero platforms should fail");
        assert!(err.contains("platform_count"));

        let _ = fs::remove_file(path);
    }

    #[test]
    fn rejects_negative_player_speed() {
        let path = temp_file_path("negative_speed");
        write_config_file(&path, r#"{ "player_speed": -2.0 }"#);

        let err = load_config(&path).expect_err("negative speed should fail");
        assert!(err.contains("player_speed"));

        let _ = fs::remove_file(path);
    }

    #[test]
    fn rejects_nonpositive_walk_frame_seconds() {
        let path = temp_file_path("bad_frame_time");
        write_config_file(&path, r#"{ "walk_frame_seconds": 0.0 }"#);

        let err = load_config(&path).expect_err("zero frame time should fail");
        assert!(err.contains("walk_frame_seconds"));

        let _ = fs::remove_file(path);
    }

    #[test]
    fn rejects_malformed_json() {
        let path = temp_file_path("malformed");
        write_config_file(&path, "{ gravity: oops");

        let err = load_config(&path).expect_err("malformed JSON should fail");
        assert!(err.contains("Failed to parse config JSON"));

        let _ = fs::remove_file(path);
    }
}
