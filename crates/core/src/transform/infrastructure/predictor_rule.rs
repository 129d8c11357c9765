use crate::shared::error::TransformError;
use crate::shared::frame::Frame;
use crate::shared::rect::Rect;
use crate::transform::domain::segment_rule::SegmentRule;

use super::stats;

/// Causal spatial predictor: paints each tile with a color predicted
/// from its already-processed neighbors instead of its own content.
///
/// With column-major iteration the tile to the left and the tile above
/// are always processed first, so by the time a tile is visited those
/// neighbors already hold their flattened predicted color. The
/// prediction is the average of the available neighbor means; the
/// top-left tile, which has no causal neighbors, falls back to the mean
/// of its own original pixels. The result is a smoothed field that
/// propagates across the frame, a building block for DPCM-style
/// residual coding.
pub struct PredictorRule;

impl PredictorRule {
    /// Tile immediately to the left, if this tile is not in the first
    /// tile-column. Tiles are uniform, so the neighbor shares this
    /// rect's dimensions.
    fn left_neighbor(rect: &Rect) -> Option<Rect> {
        (rect.x >= rect.width).then(|| Rect {
            x: rect.x - rect.width,
            ..*rect
        })
    }

    /// Tile immediately above, if this tile is not in the first tile-row.
    fn above_neighbor(rect: &Rect) -> Option<Rect> {
        (rect.y >= rect.height).then(|| Rect {
            y: rect.y - rect.height,
            ..*rect
        })
    }
}

impl SegmentRule for PredictorRule {
    fn label(&self) -> &'static str {
        "predictor"
    }

    fn transform_segment(&self, frame: &mut Frame, rect: &Rect) -> Result<(), TransformError> {
        let channels = frame.channels() as usize;
        if channels == 0 {
            return Err(TransformError::ShapeMismatch {
                transformation: "predictor",
                channels: 0,
            });
        }

        let neighbors: Vec<Rect> = Self::left_neighbor(rect)
            .into_iter()
            .chain(Self::above_neighbor(rect))
            .collect();

        let predicted = if neighbors.is_empty() {
            // Top-left tile: no causal context yet, baseline on itself
            stats::channel_means(frame, rect)
        } else {
            let mut sums = vec![0.0; channels];
            for neighbor in &neighbors {
                for (sum, mean) in sums.iter_mut().zip(stats::channel_means(frame, neighbor)) {
                    *sum += mean;
                }
            }
            sums.iter().map(|s| s / neighbors.len() as f64).collect()
        };

        stats::fill_rect(frame, rect, &stats::quantize(&predicted));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::domain::transformation::Transformation;
    use crate::transform::infrastructure::segmented::SegmentedTransformation;

    fn predict(tile: u32) -> SegmentedTransformation {
        SegmentedTransformation::new(tile, tile, Box::new(PredictorRule))
    }

    #[test]
    fn test_neighbor_lookup() {
        let r = Rect::new(8, 8, 8, 8);
        assert_eq!(PredictorRule::left_neighbor(&r), Some(Rect::new(0, 8, 8, 8)));
        assert_eq!(PredictorRule::above_neighbor(&r), Some(Rect::new(8, 0, 8, 8)));

        let top_left = Rect::new(0, 0, 8, 8);
        assert_eq!(PredictorRule::left_neighbor(&top_left), None);
        assert_eq!(PredictorRule::above_neighbor(&top_left), None);
    }

    #[test]
    fn test_top_left_falls_back_to_own_mean() {
        // Single 2x2 tile: 10,20,30,40 -> mean 25
        let frame = Frame::new(vec![10, 20, 30, 40], 2, 2, 1, 0);
        let out = predict(2).apply(&frame).unwrap();
        assert_eq!(out.data(), &[25, 25, 25, 25]);
    }

    #[test]
    fn test_prediction_propagates_left_to_right() {
        // 4x2 frame, 2x2 tiles: left tile monochrome 100, right tile
        // arbitrary. The right tile must come out as 100 regardless.
        let data = vec![
            100, 100, 7, 250, //
            100, 100, 31, 8, //
        ];
        let frame = Frame::new(data, 4, 2, 1, 0);
        let out = predict(2).apply(&frame).unwrap();
        assert!(out.data().iter().all(|&v| v == 100));
    }

    #[test]
    fn test_two_neighbors_averaged() {
        // 2x2 grid of 1x1 tiles. Visit order: (0,0) (0,1) (1,0) (1,1).
        // (0,0)=40 stays 40 (own mean). (row 1, col 0) sees only
        // "above"=40 -> 40. (row 0, col 1) sees only "left"=40 -> 40.
        // (1,1) averages left=40 and above=40 -> 40.
        let frame = Frame::new(vec![40, 0, 200, 90], 2, 2, 1, 0);
        let out = predict(1).apply(&frame).unwrap();
        assert_eq!(out.data(), &[40, 40, 40, 40]);
    }

    #[test]
    fn test_two_neighbors_with_distinct_means() {
        // 3 tile-columns, 2 tile-rows of 1x1 tiles. The first column is
        // monochrome 10; each later tile averages neighbors that have
        // already flattened to 10, so the whole field converges to 10.
        let frame = Frame::new(vec![10, 64, 77, 10, 5, 91], 3, 2, 1, 0);
        let out = predict(1).apply(&frame).unwrap();
        assert!(out.data().iter().all(|&v| v == 10));
    }

    #[test]
    fn test_reads_flattened_neighbor_not_original() {
        // Left tile is a gradient with mean 50; right tile must pick up
        // the flattened 50, not any original left-tile pixel.
        let data = vec![
            0, 100, 255, 255, //
            0, 100, 255, 255, //
        ];
        let frame = Frame::new(data, 4, 2, 1, 0);
        let out = predict(2).apply(&frame).unwrap();
        let arr = out.as_ndarray();
        assert_eq!(arr[[0, 2, 0]], 50);
        assert_eq!(arr[[1, 3, 0]], 50);
    }

    #[test]
    fn test_color_channels_predicted_independently() {
        let data = vec![
            200, 20, 0, 1, 2, 3, //
            200, 20, 0, 4, 5, 6, //
        ];
        let frame = Frame::new(data, 2, 2, 3, 0);
        let t = SegmentedTransformation::new(1, 2, Box::new(PredictorRule));
        let out = t.apply(&frame).unwrap();
        assert_eq!(&out.data()[3..6], &[200, 20, 0]);
    }

    #[test]
    fn test_zero_channel_frame_rejected() {
        let frame = Frame::new(Vec::new(), 4, 4, 0, 0);
        let err = predict(2).apply(&frame).unwrap_err();
        assert!(matches!(err, TransformError::ShapeMismatch { .. }));
    }
}
