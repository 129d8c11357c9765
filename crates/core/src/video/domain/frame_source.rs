use std::path::Path;

use crate::shared::frame::Frame;
use crate::shared::video_metadata::VideoMetadata;

/// Produces a lazy, finite sequence of frames from a video or image.
///
/// Implementations own the decoding details; the pipeline only sees
/// [`Frame`] and [`VideoMetadata`]. End of stream is iterator
/// exhaustion, never an error, and a source is not restartable
/// mid-stream.
pub trait FrameSource {
    /// Opens the source and returns its metadata.
    fn open(&mut self, path: &Path) -> Result<VideoMetadata, Box<dyn std::error::Error>>;

    /// Returns an iterator over frames in decode order.
    fn frames(
        &mut self,
    ) -> Box<dyn Iterator<Item = Result<Frame, Box<dyn std::error::Error>>> + '_>;

    /// Releases any resources held by the source.
    fn close(&mut self);
}
