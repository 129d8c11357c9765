use crate::shared::error::TransformError;
use crate::shared::rect::Rect;

/// Splits a frame into a column-major grid of fixed-size tiles.
///
/// Tiling covers only the largest sub-region whose dimensions are exact
/// multiples of the tile size; a remainder strip on the right or bottom
/// is left uncovered. Segments are enumerated column-major — every tile
/// of column 0 (top to bottom) before any tile of column 1 — and the
/// causal predictor depends on exactly this order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segmentation {
    tile_width: u32,
    tile_height: u32,
}

impl Segmentation {
    pub fn new(tile_width: u32, tile_height: u32) -> Result<Self, TransformError> {
        if tile_width == 0 || tile_height == 0 {
            return Err(TransformError::Configuration {
                reason: format!("tile dimensions must be positive, got {tile_width}x{tile_height}"),
            });
        }
        Ok(Self {
            tile_width,
            tile_height,
        })
    }

    pub fn tile_width(&self) -> u32 {
        self.tile_width
    }

    pub fn tile_height(&self) -> u32 {
        self.tile_height
    }

    /// Ordered tile rectangles for a `width` x `height` frame.
    pub fn segments(&self, width: u32, height: u32) -> Vec<Rect> {
        let cols = width / self.tile_width;
        let rows = height / self.tile_height;

        let mut rects = Vec::with_capacity(cols as usize * rows as usize);
        for col in 0..cols {
            for row in 0..rows {
                rects.push(Rect::new(
                    col * self.tile_width,
                    row * self.tile_height,
                    self.tile_width,
                    self.tile_height,
                ));
            }
        }
        rects
    }
}
