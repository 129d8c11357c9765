pub mod segment_rule;
pub mod segmentation;
pub mod transformation;
