use thiserror::Error;

use crate::shared::rect::Rect;

/// Failures a transformation can surface for the current frame.
///
/// All variants indicate a static configuration or programming defect,
/// not a transient condition: the frame being processed is abandoned
/// rather than partially written, and nothing is retried.
#[derive(Error, Debug)]
pub enum TransformError {
    /// Zero tile dimensions (outside the full-frame sentinel) or a
    /// degenerate frame geometry.
    #[error("invalid configuration: {reason}")]
    Configuration { reason: String },

    /// A transformation received a frame whose channel count it cannot
    /// handle.
    #[error("{transformation} cannot process a {channels}-channel frame")]
    ShapeMismatch {
        transformation: &'static str,
        channels: u8,
    },

    /// A computed segment falls outside the frame. Unreachable with
    /// floor-division tiling; checked because hitting it means a logic
    /// defect upstream.
    #[error("segment {rect:?} exceeds frame bounds {width}x{height}")]
    Geometry {
        rect: Rect,
        width: u32,
        height: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let e = TransformError::Configuration {
            reason: "tile width must be positive".into(),
        };
        assert!(e.to_string().contains("tile width"));

        let e = TransformError::ShapeMismatch {
            transformation: "grayscale",
            channels: 2,
        };
        assert_eq!(e.to_string(), "grayscale cannot process a 2-channel frame");

        let e = TransformError::Geometry {
            rect: Rect::new(8, 0, 16, 8),
            width: 16,
            height: 8,
        };
        assert!(e.to_string().contains("exceeds frame bounds 16x8"));
    }

    #[test]
    fn test_converts_to_boxed_error() {
        fn boundary() -> Result<(), Box<dyn std::error::Error>> {
            Err(TransformError::ShapeMismatch {
                transformation: "predictor",
                channels: 0,
            })?;
            Ok(())
        }
        assert!(boundary().is_err());
    }
}
