#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Phase {
    Empty,            // No slides, nothing renders
    Static,           // A single slide never advances
    Uninitialized,    // Before the first advance commits
    Advancing(usize), // Cycling through 1..=total
}

/// Current slide index and the fixed slide count.
///
/// `index` is 0 until the first advance commits, then cycles through
/// `1..=total`.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct CarouselState {
    pub(crate) index: usize,
    pub(crate) total: usize,
}

impl CarouselState {
    pub fn new(total: usize) -> Self {
        Self { index: 0, total }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// The index the next advance commits. Always lands in `1..=total`.
    pub fn next_index(&self) -> usize {
        next_index(self.index, self.total)
    }

    /// Zero-based position of the highlighted indicator, if any.
    pub fn active_indicator(&self) -> Option<usize> {
        if self.index == 0 || self.total == 0 {
            None
        } else {
            Some((self.index - 1) % self.total)
        }
    }

    pub fn phase(&self) -> Phase {
        match (self.total, self.index) {
            (0, _) => Phase::Empty,
            (1, _) => Phase::Static,
            (_, 0) => Phase::Uninitialized,
            (_, index) => Phase::Advancing(index),
        }
    }

    pub(crate) fn commit(&mut self, index: usize) {
        debug_assert!(index <= self.total, "index {index} beyond total {}", self.total);
        self.index = index;
    }
}

pub fn next_index(index: usize, total: usize) -> usize {
    if total == 0 {
        return 0;
    }
    index % total + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_index_wraps_after_total() {
        let visited: Vec<usize> = (0..=4).map(|i| next_index(i, 4)).collect();
        assert_eq!(visited, vec![1, 2, 3, 4, 1]);
    }

    #[test]
    fn next_index_of_empty_deck_stays_zero() {
        assert_eq!(next_index(0, 0), 0);
    }

    #[test]
    fn indicator_follows_index() {
        let mut state = CarouselState::new(3);
        assert_eq!(state.active_indicator(), None);
        state.commit(1);
        assert_eq!(state.active_indicator(), Some(0));
        state.commit(3);
        assert_eq!(state.active_indicator(), Some(2));
    }

    #[test]
    fn phases() {
        assert_eq!(CarouselState::new(0).phase(), Phase::Empty);
        assert_eq!(CarouselState::new(1).phase(), Phase::Static);

        let mut state = CarouselState::new(3);
        assert_eq!(state.phase(), Phase::Uninitialized);
        state.commit(2);
        assert_eq!(state.phase(), Phase::Advancing(2));
    }
}
