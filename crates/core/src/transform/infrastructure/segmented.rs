use crate::shared::error::TransformError;
use crate::shared::frame::Frame;
use crate::transform::domain::segment_rule::SegmentRule;
use crate::transform::domain::segmentation::Segmentation;
use crate::transform::domain::transformation::Transformation;

/// Generic "map over tiles" operator: clones the input frame, then lets a
/// [`SegmentRule`] mutate each tile of the clone in the segmentation's
/// column-major order.
///
/// A tile dimension of 0 means "span the full frame along that axis" and
/// is resolved against each incoming frame, so the sentinel works even
/// when frame dimensions are unknown at construction. Pixels in the
/// uncovered remainder strips pass through from the clone unchanged.
///
/// Iteration order is a load-bearing contract: earlier tiles are already
/// mutated when a later tile is processed, which is what the causal
/// predictor rule relies on.
pub struct SegmentedTransformation {
    tile_width: u32,
    tile_height: u32,
    rule: Box<dyn SegmentRule>,
}

impl SegmentedTransformation {
    pub fn new(tile_width: u32, tile_height: u32, rule: Box<dyn SegmentRule>) -> Self {
        Self {
            tile_width,
            tile_height,
            rule,
        }
    }

    pub fn rule_label(&self) -> &'static str {
        self.rule.label()
    }
}

impl Transformation for SegmentedTransformation {
    fn apply(&self, frame: &Frame) -> Result<Frame, TransformError> {
        if frame.width() == 0 || frame.height() == 0 {
            return Err(TransformError::Configuration {
                reason: format!(
                    "frame dimensions must be positive, got {}x{}",
                    frame.width(),
                    frame.height()
                ),
            });
        }

        let tile_width = if self.tile_width == 0 {
            frame.width()
        } else {
            self.tile_width
        };
        let tile_height = if self.tile_height == 0 {
            frame.height()
        } else {
            self.tile_height
        };

        let segmentation = Segmentation::new(tile_width, tile_height)?;
        let mut output = frame.clone();

        for rect in segmentation.segments(frame.width(), frame.height()) {
            if !rect.fits_within(frame.width(), frame.height()) {
                return Err(TransformError::Geometry {
                    rect,
                    width: frame.width(),
                    height: frame.height(),
                });
            }
            self.rule.transform_segment(&mut output, &rect)?;
        }

        Ok(output)
    }
}
