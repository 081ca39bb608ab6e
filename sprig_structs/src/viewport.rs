use crate::{Camera2D, Vector2};

/// Window size in pixels plus the virtual resolution the game is authored at.
/// The virtual area is fitted inside the window preserving aspect ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub virtual_width: f32,
    pub virtual_height: f32,
    pub window_width: f32,
    pub window_height: f32,
}

impl Viewport {
    pub const fn new(
        virtual_width: f32,
        virtual_height: f32,
        window_width: f32,
        window_height: f32,
    ) -> Self {
        Self {
            virtual_width,
            virtual_height,
            window_width,
            window_height,
        }
    }

    /// Window matches the virtual resolution exactly.
    pub const fn matching(width: f32, height: f32) -> Self {
        Self::new(width, height, width, height)
    }

    fn is_degenerate(&self) -> bool {
        !(self.virtual_width > 0.0
            && self.virtual_height > 0.0
            && self.window_width > 0.0
            && self.window_height > 0.0)
    }

    fn aspect_scale(&self) -> (f32, f32) {
        let virtual_aspect = self.virtual_width / self.virtual_height;
        let window_aspect = self.window_width / self.window_height;

        if window_aspect > virtual_aspect {
            (virtual_aspect / window_aspect, 1.0)
        } else {
            (1.0, window_aspect / virtual_aspect)
        }
    }

    /// Screen pixel -> world position seen through `camera`.
    /// Returns `None` for a zero-sized viewport or a zero zoom.
    pub fn screen_to_world_2d(&self, screen_pos: Vector2, camera: &Camera2D) -> Option<Vector2> {
        if self.is_degenerate() || camera.zoom == 0.0 {
            return None;
        }
        let (scale_x, scale_y) = self.aspect_scale();

        // Normalize screen position to [0, 1]
        let normalized_x = screen_pos.x / self.window_width;
        let normalized_y = screen_pos.y / self.window_height;

        let virtual_pos = Vector2::new(
            (normalized_x - 0.5) * self.virtual_width * scale_x,
            (normalized_y - 0.5) * self.virtual_height * scale_y,
        );

        let zoomed = virtual_pos * (1.0 / camera.zoom);
        Some(zoomed.rotated(camera.rotation) + camera.position)
    }

    /// World position -> screen pixel; inverse of [`Viewport::screen_to_world_2d`].
    pub fn world_to_screen_2d(&self, world_pos: Vector2, camera: &Camera2D) -> Option<Vector2> {
        if self.is_degenerate() || camera.zoom == 0.0 {
            return None;
        }
        let (scale_x, scale_y) = self.aspect_scale();

        let virtual_pos = (world_pos - camera.position).rotated(-camera.rotation) * camera.zoom;

        let normalized_x = virtual_pos.x / (self.virtual_width * scale_x) + 0.5;
        let normalized_y = virtual_pos.y / (self.virtual_height * scale_y) + 0.5;

        Some(Vector2::new(
            normalized_x * self.window_width,
            normalized_y * self.window_height,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn screen_center_maps_to_camera_position() {
        let viewport = Viewport::matching(1920.0, 1080.0);
        let camera = Camera2D::at(Vector2::new(100.0, -50.0));
        let world = viewport
            .screen_to_world_2d(Vector2::new(960.0, 540.0), &camera)
            .unwrap();
        assert!(world.abs_diff_eq(camera.position, 1e-4));
    }

    #[test]
    fn zoom_shrinks_world_distance() {
        let viewport = Viewport::matching(200.0, 100.0);
        let camera = Camera2D {
            zoom: 2.0,
            ..Camera2D::default()
        };
        let world = viewport
            .screen_to_world_2d(Vector2::new(200.0, 50.0), &camera)
            .unwrap();
        assert!(world.abs_diff_eq(Vector2::new(50.0, 0.0), 1e-4));
    }

    #[test]
    fn world_to_screen_inverts_screen_to_world() {
        let viewport = Viewport::new(1920.0, 1080.0, 1280.0, 1024.0);
        let camera = Camera2D {
            position: Vector2::new(12.0, 34.0),
            rotation: FRAC_PI_2 / 3.0,
            zoom: 1.5,
        };
        let screen = Vector2::new(300.0, 700.0);
        let world = viewport.screen_to_world_2d(screen, &camera).unwrap();
        let back = viewport.world_to_screen_2d(world, &camera).unwrap();
        assert!(back.abs_diff_eq(screen, 1e-2));
    }

    #[test]
    fn degenerate_inputs_do_not_project() {
        let camera = Camera2D::default();
        assert!(
            Viewport::matching(0.0, 1080.0)
                .screen_to_world_2d(Vector2::ZERO, &camera)
                .is_none()
        );
        let flat = Camera2D {
            zoom: 0.0,
            ..camera
        };
        assert!(
            Viewport::matching(10.0, 10.0)
                .world_to_screen_2d(Vector2::ZERO, &flat)
                .is_none()
        );
    }
}
