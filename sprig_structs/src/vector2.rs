use glam::Vec2;
use std::fmt;

/// A simple 2D vector struct that holds (x,y) values
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector2({}, {})", self.x, self.y)
    }
}

impl Vector2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };
    pub const ONE: Self = Self { x: 1.0, y: 1.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline(always)]
    fn to_glam(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[inline(always)]
    fn from_glam(v: Vec2) -> Self {
        Self { x: v.x, y: v.y }
    }

    /// Rotate counter-clockwise by `radians` around the origin
    pub fn rotated(self, radians: f32) -> Self {
        Self::from_glam(Vec2::from_angle(radians).rotate(self.to_glam()))
    }

    /// Approximate equality, used when comparing projected coordinates
    pub fn abs_diff_eq(self, other: Self, max_abs_diff: f32) -> bool {
        self.to_glam().abs_diff_eq(other.to_glam(), max_abs_diff)
    }
}

impl std::ops::Add for Vector2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::from_glam(self.to_glam() + rhs.to_glam())
    }
}

impl std::ops::Sub for Vector2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::from_glam(self.to_glam() - rhs.to_glam())
    }
}

impl std::ops::Mul for Vector2 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self::from_glam(self.to_glam() * rhs.to_glam())
    }
}

impl std::ops::Div for Vector2 {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        Self::from_glam(self.to_glam() / rhs.to_glam())
    }
}

impl std::ops::Mul<f32> for Vector2 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self::from_glam(self.to_glam() * rhs)
    }
}
