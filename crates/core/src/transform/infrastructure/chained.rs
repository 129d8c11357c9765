use crate::shared::error::TransformError;
use crate::shared::frame::Frame;
use crate::transform::domain::transformation::Transformation;

/// Ordered composition of transformations, applied left-to-right: each
/// stage consumes the previous stage's output frame.
///
/// The chain borrows its members rather than owning them, so the
/// lifetime parameter guarantees at compile time that no member is
/// dropped while the chain can still run. Stages may change the channel
/// count or dimensions between steps; arranging a meaningful order
/// (e.g. grayscale before a single-channel predictor) is the caller's
/// job.
#[derive(Default)]
pub struct ChainedTransformation<'a> {
    stages: Vec<&'a dyn Transformation>,
}

impl<'a> ChainedTransformation<'a> {
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Appends a stage; chain order is `add` call order.
    pub fn add(&mut self, stage: &'a dyn Transformation) {
        self.stages.push(stage);
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

impl Transformation for ChainedTransformation<'_> {
    fn apply(&self, frame: &Frame) -> Result<Frame, TransformError> {
        let mut current = frame.clone();
        for stage in &self.stages {
            current = stage.apply(&current)?;
        }
        Ok(current)
    }
}
