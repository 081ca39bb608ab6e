use crate::Vector2;

/// 2D camera: world position, rotation in radians, and zoom factor (1 = no zoom)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera2D {
    pub position: Vector2,
    pub rotation: f32,
    pub zoom: f32,
}

impl Camera2D {
    pub const fn at(position: Vector2) -> Self {
        Self {
            position,
            rotation: 0.0,
            zoom: 1.0,
        }
    }
}

impl Default for Camera2D {
    fn default() -> Self {
        Self::at(Vector2::ZERO)
    }
}
