use crate::shared::error::TransformError;
use crate::shared::frame::Frame;
use crate::shared::rect::Rect;
use crate::transform::domain::segment_rule::SegmentRule;

use super::stats;

/// Replaces every pixel of a tile with the tile's own per-channel mean —
/// block pixelation. Each tile becomes a flat color swatch, so the
/// output doubles as a block-energy probe.
///
/// Segments never read each other, so this rule is insensitive to the
/// iteration order.
pub struct AveragingRule;

impl SegmentRule for AveragingRule {
    fn label(&self) -> &'static str {
        "averaging"
    }

    fn transform_segment(&self, frame: &mut Frame, rect: &Rect) -> Result<(), TransformError> {
        if frame.channels() == 0 {
            return Err(TransformError::ShapeMismatch {
                transformation: "averaging",
                channels: 0,
            });
        }

        let means = stats::channel_means(frame, rect);
        stats::fill_rect(frame, rect, &stats::quantize(&means));
        Ok(())
    }
}
