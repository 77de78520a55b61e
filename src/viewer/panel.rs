use carousel::{Slide, TextColor};
use raylib::prelude::*;

const TITLE_SIZE: i32 = 56;
const SUBTITLE_SIZE: i32 = 28;
const MARGIN: i32 = 64;

/// A slide together with its loaded texture. Slides whose image failed to
/// load draw their text on a plain background.
pub struct Panel {
    pub slide: Slide,
    pub texture: Option<Texture2D>,
}

impl Panel {
    pub fn draw(&self, d: &mut impl RaylibDraw, x: i32, width: i32, height: i32) {
        d.draw_rectangle(x, 0, width, height, Color::new(245, 245, 247, 255));

        if let Some(texture) = &self.texture {
            // Fit the image into 90% of the panel
            let scale = (width as f32 * 0.9 / texture.width() as f32)
                .min(height as f32 * 0.9 / texture.height() as f32)
                .min(1.0);
            let draw_width = texture.width() as f32 * scale;
            let draw_height = texture.height() as f32 * scale;
            let position = Vector2::new(
                x as f32 + (width as f32 - draw_width) * 0.5,
                (height as f32 - draw_height) * 0.5,
            );
            d.draw_texture_ex(texture, position, 0.0, scale, Color::WHITE);
        }

        let color = to_color(self.slide.color);
        let mut y = MARGIN;
        for line in self.slide.title.lines() {
            d.draw_text(line, x + MARGIN, y, TITLE_SIZE, color);
            y += TITLE_SIZE + 8;
        }
        y += 8;
        for line in self.slide.subtitle.lines() {
            d.draw_text(line, x + MARGIN, y, SUBTITLE_SIZE, color);
            y += SUBTITLE_SIZE + 6;
        }
    }
}

fn to_color(color: TextColor) -> Color {
    Color::new(color.r, color.g, color.b, 255)
}
