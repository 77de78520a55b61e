use std::fs;
use std::io::Cursor;
use std::path::Path;

use anyhow::{Context, Result};
use exif::{In, Reader, Tag, Value};
use raylib::prelude::*;
use tracing::{debug, warn};

/// Loads an image, applies its EXIF orientation and uploads it as a texture.
pub fn load_texture_with_exif_rotation(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    image_path: &Path,
) -> Result<Texture2D> {
    let file_bytes = fs::read(image_path).with_context(|| format!("failed to read {}", image_path.display()))?;

    let extension = image_path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase();

    // EXIF is only read reliably from JPEG
    let orientation = if extension == "jpg" || extension == "jpeg" {
        read_orientation(&file_bytes).unwrap_or_else(|e| {
            warn!(image = %image_path.display(), "could not read EXIF data: {e}");
            1
        })
    } else {
        1
    };

    let mut image = Image::load_image_from_mem(&format!(".{extension}"), &file_bytes)
        .map_err(|e| anyhow::anyhow!("failed to decode {}: {e}", image_path.display()))?;

    // 1 = normal, 3 = 180 deg, 6 = 90 deg CW, 8 = 90 deg CCW. Flips are ignored.
    match orientation {
        3 => {
            image.rotate_cw();
            image.rotate_cw();
        }
        6 => image.rotate_cw(),
        8 => image.rotate_ccw(),
        _ => {}
    }
    if orientation != 1 {
        debug!(image = %image_path.display(), orientation, "applied EXIF rotation");
    }

    let texture = rl
        .load_texture_from_image(thread, &image)
        .map_err(|e| anyhow::anyhow!("failed to create texture for {}: {e}", image_path.display()))?;

    Ok(texture)
}

fn read_orientation(bytes: &[u8]) -> Result<u16, exif::Error> {
    let exif = Reader::new().read_from_container(&mut Cursor::new(bytes))?;
    let orientation = exif
        .get_field(Tag::Orientation, In::PRIMARY)
        .and_then(|field| match &field.value {
            Value::Short(values) => values.first().copied(),
            _ => None,
        })
        .unwrap_or(1);
    Ok(orientation)
}
