//! Game entities and the fixed step that moves them.
//!
//! One entity type covers both the player and the platform tiles; platforms
//! simply never move and carry a `platform_kind` tag. The player's step runs
//! animation, integration, and collision resolution in a fixed order so that
//! a step is a single atomic unit of simulated time.

use crate::collision::{min_separation, Aabb, Separation};
use glam::{Vec2, Vec3};
use lf_core::animation::WalkCycle;
use std::sync::Arc;

/// What touching the top of a platform means for the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformKind {
    Win,
    Lose,
}

impl PlatformKind {
    pub fn label(self) -> &'static str {
        match self {
            PlatformKind::Win => "win",
            PlatformKind::Lose => "lose",
        }
    }
}

pub struct Entity {
    pub position: Vec3,
    pub velocity: Vec3,
    pub acceleration: Vec3,
    /// Input intent for the current frame. Only x drives physics; y takes part
    /// in normalization and facing.
    pub movement: Vec2,
    pub speed: f32,
    /// Full width/height of the collision box.
    pub size: Vec2,
    pub animation: Option<WalkCycle>,
    pub texture: Arc<str>,
    pub platform_kind: Option<PlatformKind>,
    /// Most recent qualifying top-contact, fed to the outcome machine.
    pub last_landing: Option<PlatformKind>,
    /// When false, the landing record is cleared at the start of every
    /// collision pass instead of persisting after contact is lost.
    pub sticky_landing: bool,
}

impl Entity {
    pub fn new(texture: Arc<str>) -> Self {
        Self {
            position: Vec3::ZERO,
            velocity: Vec3::ZERO,
            acceleration: Vec3::ZERO,
            movement: Vec2::ZERO,
            speed: 1.0,
            size: Vec2::ONE,
            animation: None,
            texture,
            platform_kind: None,
            last_landing: None,
            sticky_landing: true,
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_center_size(self.position.x, self.position.y, self.size.x, self.size.y)
    }

    /// Advance this entity by one fixed step of `dt` seconds against `others`.
    ///
    /// Order within a step: walk animation (only while there is horizontal
    /// intent), then integration, then collision resolution. `dt <= 0` is a
    /// complete no-op, so a zero-length step never perturbs state. An empty
    /// `others` slice skips resolution, which is how platforms would step if
    /// they ever moved.
    pub fn update(&mut self, dt: f32, others: &[Entity]) {
        if dt <= 0.0 {
            return;
        }

        let input_velocity = self.movement.x * self.speed;
        if input_velocity != 0.0 {
            if let Some(cycle) = &mut self.animation {
                cycle.advance(dt);
            }
        }

        self.velocity.x = input_velocity;
        self.velocity += self.acceleration * dt;
        self.position += self.velocity * dt;

        self.resolve_collisions(others);
    }

    fn resolve_collisions(&mut self, others: &[Entity]) {
        if !self.sticky_landing {
            self.last_landing = None;
        }

        let mut landed_this_step = false;
        for other in others {
            let separation = match min_separation(&self.aabb(), &other.aabb()) {
                Some(s) => s,
                None => continue,
            };

            match separation {
                Separation::PushX(push) => {
                    self.position.x += push;
                    self.velocity.x = 0.0;
                }
                Separation::PushY(push) => {
                    self.position.y += push;
                    self.velocity.y = 0.0;
                    // A landing is an upward push, meaning the platform sits
                    // below. The first qualifying contact in slice order owns
                    // the step's outcome; later platforms still get their
                    // positional correction.
                    if push > 0.0 && !landed_this_step {
                        if let Some(kind) = other.platform_kind {
                            self.last_landing = Some(kind);
                            landed_this_step = true;
                        }
                    }
                }
            }
        }
    }
}
