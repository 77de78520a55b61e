//! Track geometry.
//!
//! Every offset is expressed as a percentage of the full track width, the
//! track being `total` viewports wide. The viewport basis is kept only for
//! [`viewport_offset`], which converts back with [`Percent::viewport_to_track`].

use std::fmt;

use crate::state::next_index;

#[derive(Debug, Default, PartialEq, PartialOrd, Clone, Copy)]
pub struct Percent(pub f32);

impl Percent {
    pub const ZERO: Percent = Percent(0.0);

    pub fn value(self) -> f32 {
        self.0
    }

    /// Fraction in `[-1, 1]` for the same amount.
    pub fn fraction(self) -> f32 {
        self.0 / 100.0
    }

    /// Re-expresses a viewport-relative offset against a track of `total`
    /// viewports.
    pub fn viewport_to_track(self, total: usize) -> Percent {
        if total == 0 {
            return Percent::ZERO;
        }
        Percent(self.0 / total as f32)
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // -0.0 prints as 0%
        let value = if self.0 == 0.0 { 0.0 } else { self.0 };
        if value.fract() == 0.0 {
            write!(f, "{value:.0}%")
        } else {
            write!(f, "{value:.2}%")
        }
    }
}

/// Track width: each slide gets an equal share.
pub fn track_extent(total: usize) -> Percent {
    Percent(total as f32 * 100.0)
}

/// Resting offset of the track while `index` is the committed index.
pub fn track_offset(index: usize, total: usize) -> Percent {
    if index == 0 || total == 0 {
        return Percent::ZERO;
    }
    let slot = (index - 1) % total;
    Percent(-(slot as f32) * 100.0 / total as f32)
}

/// Offset applied when the transition out of `outgoing` ends: the resting
/// position of the index about to be committed. Wrapping from `total` lands
/// back on 0%.
pub fn snap_offset(outgoing: usize, total: usize) -> Percent {
    track_offset(next_index(outgoing, total), total)
}

/// The same position as [`track_offset`] measured in viewports.
pub fn viewport_offset(index: usize) -> Percent {
    if index == 0 {
        return Percent::ZERO;
    }
    Percent((1.0 - index as f32) * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Percent, b: f32) -> bool {
        (a.value() - b).abs() < 1e-4
    }

    #[test]
    fn snap_returns_to_start_after_last_slide() {
        assert_eq!(snap_offset(3, 3), Percent::ZERO);
        assert_eq!(snap_offset(5, 5), Percent::ZERO);
    }

    #[test]
    fn snap_moves_one_share_per_index() {
        for total in 2..8 {
            for index in 1..total {
                let expected = -(index as f32) * 100.0 / total as f32;
                assert!(close(snap_offset(index, total), expected), "index {index} of {total}");
            }
        }
    }

    #[test]
    fn arming_snap_is_zero() {
        assert_eq!(snap_offset(0, 4), Percent::ZERO);
    }

    #[test]
    fn viewport_basis_agrees_with_track_basis() {
        for total in 1..8 {
            for index in 0..=total {
                let converted = viewport_offset(index).viewport_to_track(total);
                assert!(close(converted, track_offset(index, total).value()), "index {index} of {total}");
            }
        }
    }

    #[test]
    fn empty_track_never_divides() {
        assert_eq!(track_offset(1, 0), Percent::ZERO);
        assert_eq!(snap_offset(0, 0), Percent::ZERO);
        assert_eq!(track_extent(0), Percent::ZERO);
        assert_eq!(viewport_offset(2).viewport_to_track(0), Percent::ZERO);
    }

    #[test]
    fn display() {
        assert_eq!(snap_offset(1, 3).to_string(), "-33.33%");
        assert_eq!(track_extent(3).to_string(), "300%");
        assert_eq!(Percent(-0.0).to_string(), "0%");
    }
}
