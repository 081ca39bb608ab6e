use crate::{Camera2D, Vector2, Viewport};

/// World-space placement of a UI rectangle. `position` is the pivot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UiRect {
    pub position: Vector2,
    pub rotation: f32,
    pub scale: Vector2,
    pub size: Vector2,
}

impl UiRect {
    pub const fn new(position: Vector2, size: Vector2) -> Self {
        Self {
            position,
            rotation: 0.0,
            scale: Vector2::ONE,
            size,
        }
    }

    /// World point -> this rect's local space (pivot at the origin).
    pub fn world_to_local(&self, world: Vector2) -> Option<Vector2> {
        if self.scale.x == 0.0 || self.scale.y == 0.0 {
            return None;
        }
        Some((world - self.position).rotated(-self.rotation) / self.scale)
    }

    pub fn local_to_world(&self, local: Vector2) -> Vector2 {
        (local * self.scale).rotated(self.rotation) + self.position
    }
}

impl Default for UiRect {
    fn default() -> Self {
        Self::new(Vector2::ZERO, Vector2::new(100.0, 100.0))
    }
}

/// Screen pixel -> local point inside `rect`, going through the camera into world space.
pub fn screen_point_to_local_point_in_rect(
    rect: &UiRect,
    screen_point: Vector2,
    camera: &Camera2D,
    viewport: &Viewport,
) -> Option<Vector2> {
    let world = viewport.screen_to_world_2d(screen_point, camera)?;
    rect.world_to_local(world)
}

/// Local coordinate obtained by feeding the rect's own world position in as the
/// screen point. Used to place world objects over canvas elements.
pub fn canvas_element_local_position(
    rect: &UiRect,
    camera: &Camera2D,
    viewport: &Viewport,
) -> Option<Vector2> {
    screen_point_to_local_point_in_rect(rect, rect.position, camera, viewport)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn local_round_trips_through_world() {
        let rect = UiRect {
            position: Vector2::new(10.0, 20.0),
            rotation: FRAC_PI_2,
            scale: Vector2::new(2.0, 0.5),
            size: Vector2::new(50.0, 50.0),
        };
        let local = Vector2::new(3.0, -4.0);
        let world = rect.local_to_world(local);
        assert!(rect.world_to_local(world).unwrap().abs_diff_eq(local, 1e-4));
    }

    #[test]
    fn screen_center_lands_on_rect_pivot() {
        let viewport = Viewport::matching(800.0, 600.0);
        let camera = Camera2D::at(Vector2::new(5.0, 5.0));
        let rect = UiRect::new(Vector2::new(5.0, 5.0), Vector2::new(10.0, 10.0));
        let local =
            screen_point_to_local_point_in_rect(&rect, Vector2::new(400.0, 300.0), &camera, &viewport)
                .unwrap();
        assert!(local.abs_diff_eq(Vector2::ZERO, 1e-4));
    }

    #[test]
    fn canvas_element_uses_own_position_as_screen_point() {
        let viewport = Viewport::matching(800.0, 600.0);
        let camera = Camera2D::default();
        let rect = UiRect::new(Vector2::new(500.0, 300.0), Vector2::new(10.0, 10.0));
        // screen (500, 300) -> world (100, 0); local = world - pivot
        let local = canvas_element_local_position(&rect, &camera, &viewport).unwrap();
        assert!(local.abs_diff_eq(Vector2::new(-400.0, -300.0), 1e-3));
    }

    #[test]
    fn zero_scale_rect_has_no_local_space() {
        let rect = UiRect {
            scale: Vector2::new(0.0, 1.0),
            ..UiRect::default()
        };
        assert!(rect.world_to_local(Vector2::ONE).is_none());
    }
}
