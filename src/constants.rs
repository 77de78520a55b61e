use std::time::Duration;

pub const ADVANCE_DELAY: Duration = Duration::from_millis(500); // Wait between snapping the track and committing the next index
pub const TRANSITION_DURATION: Duration = Duration::from_millis(500); // Visual slide animation of the track
pub const INDICATOR_DURATION: f32 = 9.0;      // Seconds an indicator takes to fill before advancing

pub const RENDER_WIDTH: i32 = 1920;           // Width of the render texture
pub const RENDER_HEIGHT: i32 = 1080;          // Height of the render texture
pub const FPS: u32 = 60;                      // Frames per second

pub const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];
