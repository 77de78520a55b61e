//! The carousel controller: slide index, advance timer, and track writes.
//!
//! Flow of one cycle:
//! 1. The surface reports that the current transition ended.
//! 2. The controller snaps the track to the resting offset of the next index
//!    and schedules the commit of that index after `advance_delay`.
//! 3. [`Carousel::tick`] fires the commit; the surface re-renders the
//!    indicator and starts waiting for the next transition-end.

use std::time::Duration;

use tracing::{debug, trace};

use crate::config::CarouselConfig;
use crate::offset::{snap_offset, track_extent, track_offset, Percent};
use crate::slide::{Slide, SlideDeck};
use crate::state::CarouselState;
use crate::timer::{OneShot, PendingAdvance};
use crate::track::Track;

/// Everything the presentation surface needs for one render.
#[derive(Debug, Clone, PartialEq)]
pub struct Readout<'a> {
    pub index: usize,
    pub total: usize,
    pub slides: &'a [Slide],
    pub duration: f32,
    /// Resting offset of the committed index, in track percent.
    pub offset: Percent,
    /// Zero-based indicator to highlight.
    pub active: Option<usize>,
}

pub struct Carousel<T: Track> {
    slides: Vec<Slide>,
    state: CarouselState,
    config: CarouselConfig,
    track: Option<T>,
    pending: Option<PendingAdvance>,
}

impl<T: Track> Carousel<T> {
    pub fn new(deck: SlideDeck, config: CarouselConfig) -> Self {
        let slides = deck.slides;
        Self {
            state: CarouselState::new(slides.len()),
            slides,
            config,
            track: None,
            pending: None,
        }
    }

    /// Mounts the track the controller writes offsets to.
    pub fn attach(&mut self, track: T) {
        self.track = Some(track);
    }

    /// Unmounts the track, cancelling any scheduled advance.
    pub fn detach(&mut self) -> Option<T> {
        self.cancel();
        self.track.take()
    }

    /// Sizes the track and arms the first advance, restarting from index 0
    /// if the carousel was already running. Decks of zero or one slide never
    /// advance.
    pub fn initialize(&mut self) {
        let total = self.state.total;
        let Some(track) = self.track.as_mut() else {
            debug!("initialize before the track is attached, ignoring");
            return;
        };
        if total <= 1 {
            debug!(total, "nothing to advance");
            return;
        }

        let extent = track_extent(total);
        track.set_extent(extent);
        debug!(total, %extent, "track sized");

        self.cancel();
        self.state.commit(0);
        self.on_transition_end();
    }

    /// Handles the end of the surface's transition: snaps the track and
    /// schedules the next index.
    pub fn on_transition_end(&mut self) {
        let CarouselState { index, total } = self.state;
        let Some(track) = self.track.as_mut() else {
            debug!("transition ended without an attached track, ignoring");
            return;
        };
        if total <= 1 {
            return;
        }
        if let Some(pending) = &self.pending {
            debug!(next = pending.next, "advance already scheduled, ignoring transition end");
            return;
        }

        let offset = snap_offset(index, total);
        track.apply_offset(offset);

        let next = self.state.next_index();
        self.pending = Some(PendingAdvance { timer: OneShot::new(self.config.advance_delay), next });
        trace!(index, next, %offset, "advance scheduled");
    }

    /// Drives the pending advance. Returns the committed index when it fires.
    pub fn tick(&mut self, dt: Duration) -> Option<usize> {
        let pending = self.pending.as_mut()?;
        if !pending.timer.tick(dt) {
            return None;
        }
        let next = pending.next;
        self.pending = None;
        self.state.commit(next);
        debug!(index = next, total = self.state.total, "advanced");
        Some(next)
    }

    /// Drops the scheduled advance, if any.
    pub fn cancel(&mut self) {
        if let Some(pending) = self.pending.take() {
            debug!(next = pending.next, "scheduled advance cancelled");
        }
    }

    pub fn readout(&self) -> Option<Readout<'_>> {
        if self.slides.is_empty() {
            return None;
        }
        let CarouselState { index, total } = self.state;
        Some(Readout {
            index,
            total,
            slides: &self.slides,
            duration: self.config.duration,
            offset: track_offset(index, total),
            active: self.state.active_indicator(),
        })
    }

    pub fn state(&self) -> CarouselState {
        self.state
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn track(&self) -> Option<&T> {
        self.track.as_ref()
    }

    pub fn track_mut(&mut self) -> Option<&mut T> {
        self.track.as_mut()
    }
}
