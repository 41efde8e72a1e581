//! Level assembly and per-step world state.
//!
//! The world owns the player, the platform row, and the game outcome. Frame
//! code feeds it intent once per frame and fixed steps from the accumulator;
//! the outcome is folded from the player's landing record once per frame
//! after stepping.

use crate::config::GameConfig;
use crate::entity::{Entity, PlatformKind};
use crate::outcome::GameOutcome;
use glam::{Vec2, Vec3};
use lf_core::animation::{Facing, SpriteSheet, WalkCycle, CYCLE_LEN, FACING_COUNT};
use std::sync::Arc;

pub const PLAYER_SPAWN: Vec3 = Vec3::new(-4.5, 4.5, 0.0);
pub const PLATFORM_ROW_Y: f32 = -3.0;

/// Walk tables for the character sheet, one row per `Facing` in index order.
/// The sheet is column-per-direction: down occupies column 0, left column 1,
/// up column 2, right column 3, with the stride frames running down the rows.
pub const WALK_FRAMES: [[usize; CYCLE_LEN]; FACING_COUNT] = [
    [1, 5, 9, 13],  // left
    [3, 7, 11, 15], // right
    [2, 6, 10, 14], // up
    [0, 4, 8, 12],  // down
];

const SHEET_COLS: u32 = 4;
const SHEET_ROWS: u32 = 4;

/// One frame's worth of player input, already mapped from raw keys.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlayerIntent {
    pub movement: Vec2,
    /// `None` keeps the current facing.
    pub facing: Option<Facing>,
}

pub struct GameWorld {
    pub player: Entity,
    pub platforms: Vec<Entity>,
    pub outcome: GameOutcome,
}

impl GameWorld {
    pub fn new(config: &GameConfig) -> Self {
        let mut player = Entity::new(Arc::from(config.player_sheet.as_str()));
        player.position = PLAYER_SPAWN;
        player.size = Vec2::new(config.player_width, config.player_height);
        player.speed = config.player_speed;
        player.acceleration = Vec3::new(0.0, config.gravity, 0.0);
        player.sticky_landing = config.sticky_outcome;
        player.animation = Some(WalkCycle::new(
            SpriteSheet::new(SHEET_COLS, SHEET_ROWS),
            WALK_FRAMES,
            config.walk_frame_seconds,
            Facing::Right,
        ));

        // Platforms form one centered row; every stride-th one is a winner.
        let row_offset = (config.platform_count - 1) as f32 * 0.5;
        let platforms = (0..config.platform_count)
            .map(|i| {
                let kind = if i % config.win_platform_stride == 0 {
                    PlatformKind::Win
                } else {
                    PlatformKind::Lose
                };
                let texture = match kind {
                    PlatformKind::Win => config.platform_win.as_str(),
                    PlatformKind::Lose => config.platform_lose.as_str(),
                };
                let mut platform = Entity::new(Arc::from(texture));
                platform.position = Vec3::new(i as f32 - row_offset, PLATFORM_ROW_Y, 0.0);
                platform.platform_kind = Some(kind);
                platform
            })
            .collect();

        Self {
            player,
            platforms,
            outcome: GameOutcome::Playing,
        }
    }

    /// Apply this frame's input to the player. Diagonal intent is normalized
    /// so two held keys never move faster than one.
    pub fn set_player_intent(&mut self, intent: PlayerIntent) {
        let mut movement = intent.movement;
        if movement.length() > 1.0 {
            movement = movement.normalize();
        }
        self.player.movement = movement;

        if let Some(facing) = intent.facing {
            if let Some(cycle) = &mut self.player.animation {
                cycle.facing = facing;
            }
        }
    }

    /// Run one fixed simulation step. Once the outcome is terminal the world
    /// freezes: no integration, no collision, no animation.
    pub fn step(&mut self, dt: f32) {
        if self.outcome.is_terminal() {
            return;
        }
        self.player.update(dt, &self.platforms);
    }

    /// Fold the player's landing record into the outcome. Returns true when
    /// the outcome changed, so callers know to rebuild anything derived from
    /// it (the end-game message, for one).
    pub fn resolve_outcome(&mut self) -> bool {
        let next = self.outcome.apply(self.player.last_landing);
        let changed = next != self.outcome;
        if changed {
            log::info!("Game outcome changed to '{next}'");
            self.outcome = next;
        }
        changed
    }
}
