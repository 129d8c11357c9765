use std::path::{Path, PathBuf};

use crate::shared::frame::Frame;
use crate::video::domain::frame_sink::FrameSink;

/// Writes a stream as a numbered PNG sequence:
/// `<dir>/<stream>/<stream>_NNNNNN.png`.
///
/// The image format follows the frame's channel count (gray, RGB or
/// RGBA). File names use the frame's capture index so dropped or
/// limited runs keep their original numbering.
pub struct ImageSequenceSink {
    dir: PathBuf,
    stream: String,
    frames_written: usize,
}

impl ImageSequenceSink {
    pub fn new(output_dir: &Path, stream: &str) -> Self {
        Self {
            dir: output_dir.join(stream),
            stream: stream.to_string(),
            frames_written: 0,
        }
    }

    pub fn frames_written(&self) -> usize {
        self.frames_written
    }

    fn frame_path(&self, frame: &Frame) -> PathBuf {
        self.dir
            .join(format!("{}_{:06}.png", self.stream, frame.index()))
    }
}

impl FrameSink for ImageSequenceSink {
    fn stream(&self) -> &str {
        &self.stream
    }

    fn present(&mut self, frame: &Frame) -> Result<(), Box<dyn std::error::Error>> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.frame_path(frame);
        let (w, h) = (frame.width(), frame.height());
        let data = frame.data().to_vec();

        match frame.channels() {
            1 => image::GrayImage::from_raw(w, h, data)
                .ok_or("frame buffer does not match its dimensions")?
                .save(&path)?,
            3 => image::RgbImage::from_raw(w, h, data)
                .ok_or("frame buffer does not match its dimensions")?
                .save(&path)?,
            4 => image::RgbaImage::from_raw(w, h, data)
                .ok_or("frame buffer does not match its dimensions")?
                .save(&path)?,
            c => return Err(format!("cannot encode a {c}-channel frame as PNG").into()),
        }

        self.frames_written += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        log::info!(
            "stream '{}': {} frames written to {}",
            self.stream,
            self.frames_written,
            self.dir.display()
        );
        Ok(())
    }
}
