//! Scripted input sequences for driving a whole game deterministically.

use crate::world::PlayerIntent;
use glam::Vec2;
use lf_core::animation::Facing;
use lf_core::time::FIXED_TIMESTEP;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize, Clone)]
pub struct PlaythroughScript {
    #[serde(default = "default_dt")]
    pub fixed_dt: f32,
    pub frames: Vec<ScriptFrame>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ScriptFrame {
    #[serde(default)]
    pub move_x: f32,
    #[serde(default)]
    pub move_y: f32,
    #[serde(default = "default_repeat")]
    pub repeat: u32,
}

impl PlaythroughScript {
    /// Expand the frame list into one intent per fixed step. Facing follows
    /// the movement direction, horizontal axis first, matching how a player
    /// pressing those keys would turn.
    pub fn expanded_intents(&self) -> Vec<PlayerIntent> {
        let mut out = Vec::new();
        for frame in &self.frames {
            let movement = Vec2::new(
                frame.move_x.clamp(-1.0, 1.0),
                frame.move_y.clamp(-1.0, 1.0),
            );
            let facing = if movement.x < 0.0 {
                Some(Facing::Left)
            } else if movement.x > 0.0 {
                Some(Facing::Right)
            } else if movement.y > 0.0 {
                Some(Facing::Up)
            } else if movement.y < 0.0 {
                Some(Facing::Down)
            } else {
                None
            };
            for _ in 0..frame.repeat.max(1) {
                out.push(PlayerIntent { movement, facing });
            }
        }
        out
    }
}

pub fn load_playthrough_from_path(path: &Path) -> Result<PlaythroughScript, String> {
    let raw =
        fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
    let script: PlaythroughScript = serde_json::from_str(&raw)
        .map_err(|e| format!("Failed to parse playthrough JSON {}: {e}", path.display()))?;
    validate_playthrough(&script)?;
    Ok(script)
}

fn validate_playthrough(script: &PlaythroughScript) -> Result<(), String> {
    if script.fixed_dt <= 0.0 {
        return Err("Playthrough validation failed: fixed_dt must be > 0".to_string());
    }
    if script.frames.is_empty() {
        return Err("Playthrough validation failed: frames list is empty".to_string());
    }
    Ok(())
}

const fn default_dt() -> f32 {
    FIXED_TIMESTEP
}

const fn default_repeat() -> u32 {
    1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::outcome::GameOutcome;
    use crate::world::GameWorld;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_file_path(name_hint: &str) -> std::path::PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time before unix epoch")
            .as_nanos();
        std::env::temp_dir().join(format!(
            "landfall_playthrough_test_{}_{}_{}.json",
            name_hint,
            std::process::id(),
            nanos
        ))
    }

    fn run_script(script: &PlaythroughScript) -> GameWorld {
        let mut world = GameWorld::new(&GameConfig::default());
        for intent in script.expanded_intents() {
            world.set_player_intent(intent);
            world.step(script.fixed_dt);
            world.resolve_outcome();
        }
        world
    }

    #[test]
    fn script_file_parses_and_expands() {
        let path = temp_file_path("parse");
        fs::write(
            &path,
            r#"{
              "fixed_dt": 0.0166666,
              "frames": [
                { "move_x": 1.0, "repeat": 3 },
                { "move_y": -1.0, "repeat": 1 }
              ]
            }"#,
        )
        .expect("write playthrough file");

        let script = load_playthrough_from_path(&path).expect("script should load");
        let intents = script.expanded_intents();
        assert_eq!(intents.len(), 4);
        assert_eq!(intents[0].facing, Some(Facing::Right));
        assert_eq!(intents[3].movement.y, -1.0);
        assert_eq!(intents[3].facing, Some(Facing::Down));

        let _ = fs::remove_file(path);
    }

    #[test]
    fn script_rejects_empty_frames() {
        let path = temp_file_path("empty");
        fs::write(&path, r#"{ "frames": [] }"#).expect("write playthrough file");

        let err = load_playthrough_from_path(&path).expect_err("empty frames should fail");
        assert!(err.contains("frames list is empty"));

        let _ = fs::remove_file(path);
    }

    #[test]
    fn script_rejects_nonpositive_dt() {
        let path = temp_file_path("bad_dt");
        fs::write(
            &path,
            r#"{ "fixed_dt": 0.0, "frames": [ { "move_x": 1.0 } ] }"#,
        )
        .expect("write playthrough file");

        let err = load_playthrough_from_path(&path).expect_err("zero dt should fail");
        assert!(err.contains("fixed_dt must be > 0"));

        let _ = fs::remove_file(path);
    }

    #[test]
    fn scripted_free_fall_ends_in_a_win() {
        let path = temp_file_path("free_fall");
        // No movement: the spawn sits directly above a winning platform.
        fs::write(&path, r#"{ "frames": [ { "repeat": 600 } ] }"#)
            .expect("write playthrough file");

        let script = load_playthrough_from_path(&path).expect("script should load");
        let world = run_script(&script);
        assert_eq!(world.outcome, GameOutcome::Won);

        let _ = fs::remove_file(path);
    }

    #[test]
    fn scripted_run_is_deterministic() {
        let path = temp_file_path("deterministic");
        fs::write(
            &path,
            r#"{
              "frames": [
                { "move_x": 1.0, "repeat": 90 },
                { "move_x": -1.0, "repeat": 45 },
                { "repeat": 300 }
              ]
            }"#,
        )
        .expect("write playthrough file");

        let script = load_playthrough_from_path(&path).expect("script should load");
        let run_a = run_script(&script);
        let run_b = run_script(&script);

        assert!((run_a.player.position.x - run_b.player.position.x).abs() < 0.0001);
        assert!((run_a.player.position.y - run_b.player.position.y).abs() < 0.0001);
        assert!((run_a.player.velocity.x - run_b.player.velocity.x).abs() < 0.0001);
        assert!((run_a.player.velocity.y - run_b.player.velocity.y).abs() < 0.0001);
        assert_eq!(run_a.player.last_landing, run_b.player.last_landing);
        assert_eq!(run_a.outcome, run_b.outcome);

        let _ = fs::remove_file(path);
    }
}
