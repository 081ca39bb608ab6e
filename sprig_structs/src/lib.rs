mod camera;
mod ui_rect;
mod vector2;
mod viewport;

pub use camera::Camera2D;
pub use ui_rect::{UiRect, canvas_element_local_position, screen_point_to_local_point_in_rect};
pub use vector2::Vector2;
pub use viewport::Viewport;
