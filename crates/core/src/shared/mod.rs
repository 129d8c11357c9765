pub mod error;
pub mod frame;
pub mod rect;
pub mod video_metadata;
