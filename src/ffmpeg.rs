use std::io::Write;
use std::path::Path;
use std::process::{Child, ChildStdin, Command, Stdio};

use anyhow::{Context, Result};
use raylib::prelude::*;
use tracing::{info, warn};

/// Pipes raw RGBA frames into an ffmpeg process encoding H.264.
pub struct Ffmpeg {
    process: Child,
    stdin: Option<ChildStdin>,
}

impl Ffmpeg {
    pub fn spawn(width: i32, height: i32, fps: u32, output: &Path) -> Result<Ffmpeg> {
        let mut process = Command::new("ffmpeg")
            .stdin(Stdio::piped())
            .args(["-loglevel", "error"])
            .arg("-y")
            .args(["-f", "rawvideo"])
            .args(["-pixel_format", "rgba"])
            .args(["-video_size", &format!("{width}x{height}")])
            .args(["-framerate", &fps.to_string()])
            .args(["-i", "-"])
            .args(["-c:v", "libx264"])
            .args(["-pix_fmt", "yuv420p"])
            .arg(output)
            .spawn()
            .context("failed to start ffmpeg")?;
        let stdin = process.stdin.take().context("failed to open ffmpeg stdin")?;
        info!(output = %output.display(), width, height, fps, "recording");
        Ok(Ffmpeg { process, stdin: Some(stdin) })
    }

    /// Writes one frame. Raylib images are bottom-up, ffmpeg expects top-down.
    pub fn write(&mut self, image: &Image) -> Result<()> {
        let stdin = self.stdin.as_mut().context("ffmpeg stdin already closed")?;
        let row_len = (image.width() * 4) as usize; // 4 bytes per pixel (RGBA)
        let image_len = row_len * image.height() as usize;

        // SAFETY: the framebuffer image is uncompressed RGBA8, so `data`
        // points at exactly width * height * 4 bytes owned by `image`.
        let pixels = unsafe { std::slice::from_raw_parts(image.data() as *const u8, image_len) };

        for row in pixels.chunks_exact(row_len).rev() {
            stdin.write_all(row).context("failed to write frame to ffmpeg")?;
        }
        Ok(())
    }
}

impl Drop for Ffmpeg {
    fn drop(&mut self) {
        // Closing stdin lets ffmpeg finish the file
        self.stdin = None;
        match self.process.wait() {
            Ok(status) if status.success() => info!("recording finished"),
            Ok(status) => warn!(%status, "ffmpeg exited with an error"),
            Err(e) => warn!("failed to wait for ffmpeg: {e}"),
        }
    }
}
