use crate::shared::error::TransformError;
use crate::shared::frame::Frame;

/// Domain interface for a pure frame-to-frame mapping.
///
/// Implementations never mutate their input; they return a new frame (or
/// an equivalent clone) and hold no frame state between calls. Any
/// configuration (tile sizes, chain membership) is fixed at
/// construction, so the same input always yields the same output.
pub trait Transformation {
    fn apply(&self, frame: &Frame) -> Result<Frame, TransformError>;
}
