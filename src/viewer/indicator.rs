use raylib::prelude::*;

const BAR_WIDTH: i32 = 48;
const BAR_HEIGHT: i32 = 4;
const BAR_GAP: i32 = 12;

/// One bar per slide. The active bar fills over `duration` seconds; the fill
/// completing is the transition-end signal.
pub struct IndicatorRow {
    count: usize,
    active: Option<usize>,
    elapsed: f32,
    duration: f32,
    signalled: bool,
}

impl IndicatorRow {
    pub fn new(count: usize, duration: f32) -> Self {
        Self { count, active: None, elapsed: 0.0, duration, signalled: false }
    }

    /// Restarts the fill on `active`.
    pub fn activate(&mut self, active: Option<usize>) {
        self.active = active;
        self.elapsed = 0.0;
        self.signalled = false;
    }

    /// Returns true once, on the frame the active bar fills up.
    pub fn update(&mut self, dt: f32) -> bool {
        if self.active.is_none() || self.signalled {
            return false;
        }
        self.elapsed += dt;
        if self.elapsed >= self.duration {
            self.signalled = true;
            return true;
        }
        false
    }

    pub fn progress(&self) -> f32 {
        (self.elapsed / self.duration).min(1.0)
    }

    pub fn draw(&self, d: &mut impl RaylibDraw, width: i32, height: i32) {
        let count = self.count as i32;
        let row_width = count * BAR_WIDTH + (count - 1).max(0) * BAR_GAP;
        let x0 = (width - row_width) / 2;
        let y = height - BAR_HEIGHT * 10;

        for i in 0..self.count {
            let x = x0 + i as i32 * (BAR_WIDTH + BAR_GAP);
            d.draw_rectangle(x, y, BAR_WIDTH, BAR_HEIGHT, Color::new(255, 255, 255, 80));

            let fill = match self.active {
                Some(active) if active == i => self.progress(),
                None if self.count == 1 => 1.0,
                _ => 0.0,
            };
            if fill > 0.0 {
                d.draw_rectangle(x, y, (BAR_WIDTH as f32 * fill) as i32, BAR_HEIGHT, Color::WHITE);
            }
        }
    }
}
