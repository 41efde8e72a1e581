//! Sprite-sheet walk-cycle animation.
//!
//! The character sheet is a uniform grid of cells. Each facing direction owns
//! a fixed table of cell indices, and the cycle steps through the active table
//! on a fixed interval while the character is walking. Tables are fixed-size
//! arrays indexed by `Facing`, so a cycle is plain value state with no
//! allocation and no per-frame lookup indirection.

/// Frames in one direction's walk table.
pub const CYCLE_LEN: usize = 4;

/// Number of facing directions (and walk tables).
pub const FACING_COUNT: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    Left,
    Right,
    Up,
    Down,
}

impl Facing {
    /// Index into a direction-major table.
    pub fn index(self) -> usize {
        match self {
            Facing::Left => 0,
            Facing::Right => 1,
            Facing::Up => 2,
            Facing::Down => 3,
        }
    }
}

/// Uniform cell grid over a texture. Maps a cell index to its UV rectangle.
#[derive(Debug, Clone, Copy)]
pub struct SpriteSheet {
    pub cols: u32,
    pub rows: u32,
}

impl SpriteSheet {
    pub fn new(cols: u32, rows: u32) -> Self {
        Self { cols, rows }
    }

    /// UV rectangle `[u0, v0, u1, v1]` of a cell, row-major, v = 0 at the top.
    pub fn frame_uv(&self, frame: usize) -> [f32; 4] {
        let col = (frame as u32 % self.cols) as f32;
        let row = (frame as u32 / self.cols) as f32;
        let w = 1.0 / self.cols as f32;
        let h = 1.0 / self.rows as f32;
        [col * w, row * h, (col + 1.0) * w, (row + 1.0) * h]
    }
}

/// Runtime state of one character's walk animation.
#[derive(Debug, Clone)]
pub struct WalkCycle {
    pub sheet: SpriteSheet,
    frames: [[usize; CYCLE_LEN]; FACING_COUNT],
    pub facing: Facing,
    cursor: usize,
    elapsed: f32,
    frame_seconds: f32,
}

impl WalkCycle {
    pub fn new(
        sheet: SpriteSheet,
        frames: [[usize; CYCLE_LEN]; FACING_COUNT],
        frame_seconds: f32,
        facing: Facing,
    ) -> Self {
        Self {
            sheet,
            frames,
            facing,
            cursor: 0,
            elapsed: 0.0,
            frame_seconds,
        }
    }

    /// Advance the cycle timer by `dt` seconds. When the per-frame interval is
    /// reached the cursor steps forward, wrapping modulo `CYCLE_LEN`, and the
    /// timer resets. Changing `facing` never touches the cursor, so a turning
    /// character keeps its stride phase.
    pub fn advance(&mut self, dt: f32) {
        self.elapsed += dt;
        if self.elapsed >= self.frame_seconds {
            self.cursor = (self.cursor + 1) % CYCLE_LEN;
            self.elapsed = 0.0;
        }
    }

    /// Sheet cell for the active facing at the current stride phase.
    pub fn current_frame(&self) -> usize {
        self.frames[self.facing.index()][self.cursor]
    }

    pub fn current_uv(&self) -> [f32; 4] {
        self.sheet.frame_uv(self.current_frame())
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }
}
