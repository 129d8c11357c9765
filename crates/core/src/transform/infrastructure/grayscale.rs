use crate::shared::error::TransformError;
use crate::shared::frame::Frame;
use crate::transform::domain::transformation::Transformation;

// Rec. 601 luma weights, the same coefficients OpenCV's BGR2GRAY uses.
const LUMA_R: f64 = 0.299;
const LUMA_G: f64 = 0.587;
const LUMA_B: f64 = 0.114;

/// Collapses a color frame to a single luma channel.
///
/// Accepts RGB and RGBA input (alpha is ignored); an already-grayscale
/// frame is returned as an equivalent copy. Any other channel count is a
/// shape mismatch.
pub struct GrayscaleTransformation;

impl Transformation for GrayscaleTransformation {
    fn apply(&self, frame: &Frame) -> Result<Frame, TransformError> {
        let channels = frame.channels();
        match channels {
            1 => Ok(frame.clone()),
            3 | 4 => {
                let mut luma = Vec::with_capacity(frame.pixel_count());
                for px in frame.data().chunks_exact(channels as usize) {
                    let y = LUMA_R * px[0] as f64 + LUMA_G * px[1] as f64 + LUMA_B * px[2] as f64;
                    luma.push(y.round().clamp(0.0, 255.0) as u8);
                }
                Ok(Frame::new(
                    luma,
                    frame.width(),
                    frame.height(),
                    1,
                    frame.index(),
                ))
            }
            _ => Err(TransformError::ShapeMismatch {
                transformation: "grayscale",
                channels,
            }),
        }
    }
}
