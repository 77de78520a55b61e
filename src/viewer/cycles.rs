/// Counts full passes through the deck. Decks that never advance (zero or
/// one slide) count one pass per indicator duration, so `--cycles` still ends.
pub struct CycleCounter {
    completed: u32,
    duration: f32,
    idle: f32,
}

impl CycleCounter {
    pub fn new(duration: f32) -> Self {
        Self { completed: 0, duration, idle: 0.0 }
    }

    /// The transition out of `index` ended. Leaving the last slide closes a pass.
    pub fn on_transition_end(&mut self, index: usize, total: usize) {
        if total > 1 && index == total {
            self.completed += 1;
        }
    }

    pub fn update(&mut self, dt: f32, total: usize) {
        if total > 1 || self.duration <= 0.0 {
            return;
        }
        self.idle += dt;
        while self.idle >= self.duration {
            self.idle -= self.duration;
            self.completed += 1;
        }
    }

    pub fn completed(&self) -> u32 {
        self.completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pass_closes_when_leaving_last_slide() {
        let mut cycles = CycleCounter::new(9.0);
        for index in [1, 2, 3, 1, 2] {
            cycles.on_transition_end(index, 3);
        }
        assert_eq!(cycles.completed(), 1);

        cycles.on_transition_end(3, 3);
        assert_eq!(cycles.completed(), 2);
    }

    #[test]
    fn advancing_deck_ignores_elapsed_time() {
        let mut cycles = CycleCounter::new(1.0);
        cycles.update(10.0, 3);
        assert_eq!(cycles.completed(), 0);
    }

    #[test]
    fn static_decks_count_one_pass_per_duration() {
        for total in [0, 1] {
            let mut cycles = CycleCounter::new(2.0);
            cycles.update(1.5, total);
            assert_eq!(cycles.completed(), 0);
            cycles.update(1.0, total);
            assert_eq!(cycles.completed(), 1, "total {total}");
            cycles.update(4.0, total);
            assert_eq!(cycles.completed(), 3, "total {total}");
        }
    }
}
