pub mod averaging_rule;
pub mod chained;
pub mod grayscale;
pub mod identity;
pub mod predictor_rule;
pub mod segmented;
mod stats;
