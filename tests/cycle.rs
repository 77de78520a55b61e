use std::path::PathBuf;
use std::time::Duration;

use carousel::{Carousel, CarouselConfig, Percent, Slide, SlideDeck, Text, TextColor, Track};

#[derive(Default)]
struct Surface {
    offsets: Vec<Percent>,
}

impl Track for Surface {
    fn set_extent(&mut self, _extent: Percent) {}

    fn apply_offset(&mut self, offset: Percent) {
        self.offsets.push(offset);
    }
}

fn product_deck() -> SlideDeck {
    let slide = |name: &str, color: TextColor| Slide {
        image: PathBuf::from(format!("{name}.png")),
        title: Text::from(name),
        subtitle: Text::default(),
        color,
    };
    SlideDeck::new(vec![
        slide("xPhone", TextColor::WHITE),
        slide("Tablet", TextColor::BLACK),
        slide("arPods", TextColor::BLACK),
    ])
}

fn close(a: Percent, b: f32) -> bool {
    (a.value() - b).abs() < 1e-3
}

#[test]
fn three_slides_visit_every_index_and_wrap() {
    let delay = Duration::from_millis(500);
    let mut carousel = Carousel::new(product_deck(), CarouselConfig::default());
    carousel.attach(Surface::default());
    carousel.initialize();

    assert_eq!(carousel.tick(delay), Some(1));

    let mut committed = Vec::new();
    let mut snaps = Vec::new();
    for _ in 0..7 {
        let outgoing = carousel.state().index();
        carousel.on_transition_end();
        let snap = *carousel.track().unwrap().offsets.last().unwrap();
        snaps.push((outgoing, snap));

        // Nothing commits before the delay has fully elapsed.
        assert_eq!(carousel.tick(delay - Duration::from_millis(1)), None);
        committed.push(carousel.tick(Duration::from_millis(1)).unwrap());
    }

    assert_eq!(committed, vec![2, 3, 1, 2, 3, 1, 2]);
    for (outgoing, snap) in snaps {
        match outgoing {
            3 => assert_eq!(snap, Percent::ZERO),
            1 => assert!(close(snap, -33.333), "{snap}"),
            2 => assert!(close(snap, -66.667), "{snap}"),
            other => panic!("unexpected outgoing index {other}"),
        }
    }
}

#[test]
fn frame_sized_ticks_commit_once_per_cycle() {
    let mut carousel = Carousel::new(product_deck(), CarouselConfig::default());
    carousel.attach(Surface::default());
    carousel.initialize();

    let frame = Duration::from_millis(16);
    let mut commits = Vec::new();
    for _ in 0..200 {
        if let Some(index) = carousel.tick(frame) {
            commits.push(index);
            carousel.on_transition_end();
        }
    }

    // 200 frames of 16 ms span six full 512 ms waits.
    assert_eq!(commits, vec![1, 2, 3, 1, 2, 3]);
}
