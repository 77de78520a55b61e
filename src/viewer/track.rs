use std::time::Duration;

use carousel::{Percent, Track};

/// Track that eases toward each new offset over the transition duration.
/// Returning to 0% snaps without animating, since the track wrapped.
pub struct AnimatedTrack {
    extent: Percent,
    from: Percent,
    to: Percent,
    elapsed: Duration,
    transition: Duration,
}

impl AnimatedTrack {
    pub fn new(transition: Duration) -> Self {
        Self {
            extent: Percent(100.0),
            from: Percent::ZERO,
            to: Percent::ZERO,
            elapsed: transition,
            transition,
        }
    }

    pub fn update(&mut self, dt: Duration) {
        self.elapsed = (self.elapsed + dt).min(self.transition);
    }

    /// Offset to draw this frame, in track percent.
    pub fn current(&self) -> Percent {
        if self.transition.is_zero() {
            return self.to;
        }
        let t = self.elapsed.as_secs_f32() / self.transition.as_secs_f32();
        let t = 1.0 - (1.0 - t).powi(3); // easeOutCubic
        Percent(self.from.value() + (self.to.value() - self.from.value()) * t)
    }

    pub fn extent(&self) -> Percent {
        self.extent
    }
}

impl Track for AnimatedTrack {
    fn set_extent(&mut self, extent: Percent) {
        self.extent = extent;
    }

    fn apply_offset(&mut self, offset: Percent) {
        if offset == Percent::ZERO {
            self.from = offset;
            self.elapsed = self.transition;
        } else {
            self.from = self.current();
            self.elapsed = Duration::ZERO;
        }
        self.to = offset;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRANSITION: Duration = Duration::from_millis(500);

    #[test]
    fn eases_to_target() {
        let mut track = AnimatedTrack::new(TRANSITION);
        track.apply_offset(Percent(-50.0));
        assert_eq!(track.current(), Percent::ZERO);

        track.update(Duration::from_millis(250));
        let halfway = track.current().value();
        assert!(halfway < -25.0 && halfway > -50.0, "{halfway}");

        track.update(Duration::from_millis(250));
        assert_eq!(track.current(), Percent(-50.0));
    }

    #[test]
    fn wrapping_snaps() {
        let mut track = AnimatedTrack::new(TRANSITION);
        track.apply_offset(Percent(-50.0));
        track.update(TRANSITION);

        track.apply_offset(Percent::ZERO);
        assert_eq!(track.current(), Percent::ZERO);
    }
}
