/// One rectangular, non-overlapping sub-region of a frame.
///
/// Produced by segmentation, so coordinates and dimensions are always
/// non-negative; `x + width` / `y + height` must stay within the frame
/// the rect was computed for (checked defensively by the segmented
/// transformation).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// True when the rect lies entirely inside a `frame_width` x
    /// `frame_height` frame.
    pub fn fits_within(&self, frame_width: u32, frame_height: u32) -> bool {
        self.x as u64 + self.width as u64 <= frame_width as u64
            && self.y as u64 + self.height as u64 <= frame_height as u64
    }

    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fits_within_exact_bounds() {
        let r = Rect::new(8, 0, 8, 8);
        assert!(r.fits_within(16, 8));
    }

    #[test]
    fn test_fits_within_rejects_overflowing_rect() {
        let r = Rect::new(8, 0, 9, 8);
        assert!(!r.fits_within(16, 8));
        let r = Rect::new(0, 4, 8, 8);
        assert!(!r.fits_within(16, 8));
    }

    #[test]
    fn test_fits_within_no_u32_overflow() {
        let r = Rect::new(u32::MAX, u32::MAX, u32::MAX, u32::MAX);
        assert!(!r.fits_within(u32::MAX, u32::MAX));
    }

    #[test]
    fn test_area() {
        assert_eq!(Rect::new(0, 0, 8, 8).area(), 64);
        assert_eq!(Rect::new(3, 5, 0, 8).area(), 0);
    }
}
