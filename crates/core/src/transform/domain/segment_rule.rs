use crate::shared::error::TransformError;
use crate::shared::frame::Frame;
use crate::shared::rect::Rect;

/// Per-segment mutation rule invoked by a segmented transformation.
///
/// The rule receives the working buffer after all segments earlier in
/// iteration order have been mutated. It may *read* any pixel of the
/// buffer — including those already-flattened earlier segments, which is
/// what makes causal prediction possible — but must only *write* pixels
/// inside its own `rect`.
pub trait SegmentRule {
    /// Short name used in error messages and logs.
    fn label(&self) -> &'static str;

    fn transform_segment(&self, frame: &mut Frame, rect: &Rect) -> Result<(), TransformError>;
}
