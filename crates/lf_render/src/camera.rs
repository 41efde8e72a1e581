use glam::{Mat4, Vec2};

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
}

/// Orthographic world camera with fixed half extents. The visible world region
/// is independent of window size; resizing stretches pixels rather than
/// revealing more of the scene.
pub struct Camera2D {
    pub position: Vec2,
    pub half_extent: Vec2,
}

impl Camera2D {
    pub fn new(half_width: f32, half_height: f32) -> Self {
        Self {
            position: Vec2::ZERO,
            half_extent: Vec2::new(half_width, half_height),
        }
    }

    pub fn build_uniform(&self) -> CameraUniform {
        let proj = Mat4::orthographic_rh(
            self.position.x - self.half_extent.x,
            self.position.x + self.half_extent.x,
            self.position.y - self.half_extent.y,
            self.position.y + self.half_extent.y,
            -1.0,
            1.0,
        );

        CameraUniform {
            view_proj: proj.to_cols_array_2d(),
        }
    }
}
