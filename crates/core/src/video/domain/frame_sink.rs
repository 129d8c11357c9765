use crate::shared::frame::Frame;

/// Presents transformed frames for one named output stream.
///
/// Side-effect only: the pipeline never reads anything back. A sink is
/// constructed with its stream identity (directory, window name, ...)
/// and receives every output frame of that stream in order.
pub trait FrameSink {
    /// Name of the stream this sink presents.
    fn stream(&self) -> &str;

    fn present(&mut self, frame: &Frame) -> Result<(), Box<dyn std::error::Error>>;

    /// Called once after the last frame. Default: nothing to flush.
    fn finish(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        Ok(())
    }
}
