use std::path::Path;

use crate::shared::frame::Frame;
use crate::shared::video_metadata::VideoMetadata;
use crate::video::domain::frame_source::FrameSource;

/// Treats a still image as a one-frame stream.
///
/// Lets the same pipeline shell run over a single picture, reported as a
/// stream with `total_frames = 1` and `fps = 0`.
pub struct ImageFileSource {
    frame: Option<Frame>,
}

impl ImageFileSource {
    pub fn new() -> Self {
        Self { frame: None }
    }
}

impl Default for ImageFileSource {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameSource for ImageFileSource {
    fn open(&mut self, path: &Path) -> Result<VideoMetadata, Box<dyn std::error::Error>> {
        let img = image::open(path)?.to_rgb8();
        let (width, height) = (img.width(), img.height());
        self.frame = Some(Frame::new(img.into_raw(), width, height, 3, 0));

        Ok(VideoMetadata {
            width,
            height,
            fps: 0.0,
            total_frames: 1,
            codec: path
                .extension()
                .and_then(|e| e.to_str())
                .unwrap_or("image")
                .to_lowercase(),
            source_path: Some(path.to_path_buf()),
        })
    }

    fn frames(
        &mut self,
    ) -> Box<dyn Iterator<Item = Result<Frame, Box<dyn std::error::Error>>> + '_> {
        match self.frame.take() {
            Some(frame) => Box::new(std::iter::once(Ok(frame))),
            None => Box::new(std::iter::once(Err("ImageFileSource: not opened".into()))),
        }
    }

    fn close(&mut self) {
        self.frame = None;
    }
}
