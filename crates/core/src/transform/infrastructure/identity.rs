use crate::shared::error::TransformError;
use crate::shared::frame::Frame;
use crate::transform::domain::transformation::Transformation;

/// Passes frames through untouched. Useful as a chain element and as a
/// baseline stream when comparing outputs side by side.
pub struct IdentityTransformation;

impl Transformation for IdentityTransformation {
    fn apply(&self, frame: &Frame) -> Result<Frame, TransformError> {
        Ok(frame.clone())
    }
}
