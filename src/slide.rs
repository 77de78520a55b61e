use std::fs;
use std::path::{Path, PathBuf};

use rand::seq::SliceRandom;
use serde::Deserialize;
use tracing::{debug, info};

use crate::config::ConfigOverrides;
use crate::constants::IMAGE_EXTENSIONS;
use crate::error::{CarouselError, Result};

/// Rich text reduced to its paragraphs.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawText")]
pub struct Text(pub Vec<String>);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawText {
    Line(String),
    Lines(Vec<String>),
}

impl From<RawText> for Text {
    fn from(raw: RawText) -> Self {
        match raw {
            RawText::Line(line) => Text(vec![line]),
            RawText::Lines(lines) => Text(lines),
        }
    }
}

impl From<&str> for Text {
    fn from(line: &str) -> Self {
        Text(vec![line.to_string()])
    }
}

impl Text {
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|line| line.is_empty())
    }
}

/// Text color, parsed from `#rgb` or `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct TextColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl TextColor {
    pub const WHITE: TextColor = TextColor { r: 0xff, g: 0xff, b: 0xff };
    pub const BLACK: TextColor = TextColor { r: 0, g: 0, b: 0 };

    pub fn parse(value: &str) -> Result<Self> {
        let invalid = || CarouselError::InvalidColor(value.to_string());
        let hex = value.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());
        match hex.len() {
            // #abc is shorthand for #aabbcc
            3 => {
                let (r, g, b) = (channel(&hex[0..1])?, channel(&hex[1..2])?, channel(&hex[2..3])?);
                Ok(Self { r: r * 0x11, g: g * 0x11, b: b * 0x11 })
            }
            6 => Ok(Self {
                r: channel(&hex[0..2])?,
                g: channel(&hex[2..4])?,
                b: channel(&hex[4..6])?,
            }),
            _ => Err(invalid()),
        }
    }
}

impl Default for TextColor {
    fn default() -> Self {
        Self::WHITE
    }
}

impl TryFrom<String> for TextColor {
    type Error = CarouselError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

/// One panel of the carousel.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Slide {
    pub image: PathBuf,
    pub title: Text,
    #[serde(default)]
    pub subtitle: Text,
    #[serde(default)]
    pub color: TextColor,
}

#[derive(Deserialize)]
struct Manifest {
    #[serde(flatten)]
    settings: ConfigOverrides,
    slides: Vec<Slide>,
}

/// Ordered slides plus whatever timing the source carried.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SlideDeck {
    pub slides: Vec<Slide>,
    pub settings: ConfigOverrides,
}

impl SlideDeck {
    pub fn new(slides: Vec<Slide>) -> Self {
        Self { slides, settings: ConfigOverrides::default() }
    }

    /// Reads a JSON manifest. Relative image paths resolve against the
    /// manifest's directory.
    pub fn from_manifest(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).map_err(|source| CarouselError::Io { path: path.to_path_buf(), source })?;
        let manifest: Manifest = serde_json::from_slice(&bytes)
            .map_err(|source| CarouselError::Manifest { path: path.to_path_buf(), source })?;

        let base = path.parent().unwrap_or_else(|| Path::new(""));
        let slides = manifest
            .slides
            .into_iter()
            .map(|mut slide| {
                if slide.image.is_relative() {
                    slide.image = base.join(&slide.image);
                }
                slide
            })
            .collect::<Vec<_>>();

        info!(manifest = %path.display(), slides = slides.len(), "loaded slide manifest");
        Ok(Self { slides, settings: manifest.settings })
    }

    /// One slide per image file, sorted by file name and titled after the
    /// file stem.
    pub fn from_directory(dir: &Path) -> Result<Self> {
        let paths = load_sorted_image_paths(dir)?;
        let slides = paths
            .into_iter()
            .map(|image| {
                let title = image
                    .file_stem()
                    .map(|stem| stem.to_string_lossy().into_owned())
                    .unwrap_or_default();
                Slide { image, title: Text(vec![title]), subtitle: Text::default(), color: TextColor::WHITE }
            })
            .collect::<Vec<_>>();

        info!(directory = %dir.display(), slides = slides.len(), "loaded slides from directory");
        Ok(Self::new(slides))
    }

    pub fn shuffle(&mut self) {
        self.slides.shuffle(&mut rand::rng());
        debug!("shuffled {} slides", self.slides.len());
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }
}

fn load_sorted_image_paths(dir: &Path) -> Result<Vec<PathBuf>> {
    let io_err = |source| CarouselError::Io { path: dir.to_path_buf(), source };
    let mut paths = Vec::new();

    for entry in fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        if !path.is_file() {
            continue;
        }
        let is_image = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()));
        if is_image {
            paths.push(path);
        }
    }

    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    if paths.is_empty() {
        Err(CarouselError::NoImages(dir.to_path_buf()))
    } else {
        Ok(paths)
    }
}
