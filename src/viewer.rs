use std::time::Duration;

use carousel::offset::track_extent;
use carousel::{Carousel, CarouselConfig, SlideDeck};
use raylib::prelude::*;
use tracing::{info, warn};

use crate::texture_loader::load_texture_with_exif_rotation;

pub mod cycles;
pub mod indicator;
pub mod panel;
pub mod track;

use cycles::CycleCounter;
use indicator::IndicatorRow;
use panel::Panel;
use track::AnimatedTrack;

/// Presentation surface: draws the panels and indicators, feeds frame time
/// to the controller and reports transition ends back to it.
pub struct Viewer {
    carousel: Carousel<AnimatedTrack>,
    panels: Vec<Panel>,
    indicators: IndicatorRow,
    cycles: CycleCounter,
}

impl Viewer {
    pub fn new(rl: &mut RaylibHandle, thread: &RaylibThread, deck: SlideDeck, config: CarouselConfig) -> Self {
        let panels = deck
            .slides
            .iter()
            .cloned()
            .map(|slide| {
                let texture = match load_texture_with_exif_rotation(rl, thread, &slide.image) {
                    Ok(texture) => Some(texture),
                    Err(e) => {
                        warn!("{e:#}");
                        None
                    }
                };
                Panel { slide, texture }
            })
            .collect::<Vec<_>>();

        let indicators = IndicatorRow::new(panels.len(), config.duration);
        let cycles = CycleCounter::new(config.duration);
        let track = AnimatedTrack::new(config.transition);

        let mut carousel = Carousel::new(deck, config);
        carousel.attach(track);
        carousel.initialize();
        info!(slides = panels.len(), "carousel ready");

        Self { carousel, panels, indicators, cycles }
    }

    pub fn update(&mut self, dt: f32) {
        let step = Duration::from_secs_f32(dt.max(0.0));

        if self.carousel.tick(step).is_some() {
            self.indicators.activate(self.carousel.state().active_indicator());
        }
        if let Some(track) = self.carousel.track_mut() {
            track.update(step);
        }
        let state = self.carousel.state();
        self.cycles.update(dt, state.total());
        if self.indicators.update(dt) {
            self.cycles.on_transition_end(state.index(), state.total());
            self.carousel.on_transition_end();
        }
    }

    /// Full cycles through every slide so far.
    pub fn completed_cycles(&self) -> u32 {
        self.cycles.completed()
    }

    pub fn draw(&self, d: &mut impl RaylibDraw, width: i32, height: i32) {
        d.clear_background(Color::BLACK);
        let Some(readout) = self.carousel.readout() else {
            return;
        };

        // Offsets are a share of the whole track, which spans `extent` viewports
        let (offset, extent) = match self.carousel.track() {
            Some(track) => (track.current(), track.extent()),
            None => (readout.offset, track_extent(readout.total)),
        };
        let shift = offset.fraction() * extent.fraction() * width as f32;

        for (i, panel) in self.panels.iter().enumerate() {
            let x = (i as f32 * width as f32 + shift).round() as i32;
            if x + width <= 0 || x >= width {
                continue;
            }
            panel.draw(d, x, width, height);
        }

        self.indicators.draw(d, width, height);
    }
}
