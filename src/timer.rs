use std::time::Duration;

/// One-shot countdown driven by frame deltas. Dropping it cancels it.
#[derive(Debug, Clone)]
pub struct OneShot {
    remaining: Duration,
    fired: bool,
}

impl OneShot {
    pub fn new(delay: Duration) -> Self {
        Self { remaining: delay, fired: false }
    }

    /// Advances the countdown. Returns true exactly once, on the tick that
    /// exhausts it.
    pub fn tick(&mut self, dt: Duration) -> bool {
        if self.fired {
            return false;
        }
        self.remaining = self.remaining.saturating_sub(dt);
        if self.remaining.is_zero() {
            self.fired = true;
        }
        self.fired
    }

    pub fn remaining(&self) -> Duration {
        self.remaining
    }
}

/// A scheduled commit of `next` once the timer fires.
#[derive(Debug, Clone)]
pub struct PendingAdvance {
    pub timer: OneShot,
    pub next: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_when_delay_elapses() {
        let mut timer = OneShot::new(Duration::from_millis(500));
        assert!(!timer.tick(Duration::from_millis(200)));
        assert!(!timer.tick(Duration::from_millis(200)));
        assert!(timer.tick(Duration::from_millis(200)));
        assert!(!timer.tick(Duration::from_millis(200)));
        assert_eq!(timer.remaining(), Duration::ZERO);
    }

    #[test]
    fn zero_delay_fires_on_first_tick() {
        let mut timer = OneShot::new(Duration::ZERO);
        assert!(timer.tick(Duration::ZERO));
    }
}
