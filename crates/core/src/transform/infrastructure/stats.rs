//! Per-rect pixel statistics shared by the segment rules.

use ndarray::s;

use crate::shared::frame::Frame;
use crate::shared::rect::Rect;

/// Arithmetic mean of each channel across all pixels inside `rect`,
/// reading the frame's current contents.
pub fn channel_means(frame: &Frame, rect: &Rect) -> Vec<f64> {
    let channels = frame.channels() as usize;
    let count = rect.area() as f64;
    if count == 0.0 {
        return vec![0.0; channels];
    }

    let view = frame.as_ndarray();
    let roi = view.slice(s![
        rect.y as usize..(rect.y + rect.height) as usize,
        rect.x as usize..(rect.x + rect.width) as usize,
        ..
    ]);

    (0..channels)
        .map(|c| {
            roi.slice(s![.., .., c])
                .iter()
                .map(|&v| v as f64)
                .sum::<f64>()
                / count
        })
        .collect()
}

/// Overwrites every pixel of `rect` with `color` (one sample per channel).
pub fn fill_rect(frame: &mut Frame, rect: &Rect, color: &[u8]) {
    debug_assert_eq!(color.len(), frame.channels() as usize);
    let mut view = frame.as_ndarray_mut();
    let mut roi = view.slice_mut(s![
        rect.y as usize..(rect.y + rect.height) as usize,
        rect.x as usize..(rect.x + rect.width) as usize,
        ..
    ]);
    for (c, &sample) in color.iter().enumerate() {
        roi.slice_mut(s![.., .., c]).fill(sample);
    }
}

/// Rounds per-channel means to displayable u8 samples.
pub fn quantize(means: &[f64]) -> Vec<u8> {
    means.iter().map(|m| m.round().clamp(0.0, 255.0) as u8).collect()
}
