//! Block-oriented frame transformation pipeline.
//!
//! A frame is decomposed into a grid of rectangular tiles; a segment
//! rule mutates each tile independently or causally (reading tiles
//! processed earlier), and transformations compose into chains. The
//! `video` module supplies the capture/present boundary, `pipeline` the
//! session shell that drives named output streams over a frame source.

pub mod pipeline;
pub mod shared;
pub mod transform;
pub mod video;
