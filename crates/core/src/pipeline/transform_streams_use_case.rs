use std::time::Instant;

use crate::pipeline::pipeline_logger::PipelineLogger;
use crate::shared::video_metadata::VideoMetadata;
use crate::transform::domain::transformation::Transformation;
use crate::video::domain::frame_sink::FrameSink;
use crate::video::domain::frame_source::FrameSource;

/// One named output: a transformation paired with the sink that presents
/// its result. Streams are independent — each receives the captured
/// frame, not another stream's output (compose with a chain for that).
pub struct TransformStream<'a> {
    name: String,
    transformation: &'a dyn Transformation,
    sink: Box<dyn FrameSink>,
}

impl<'a> TransformStream<'a> {
    pub fn new(name: &str, transformation: &'a dyn Transformation, sink: Box<dyn FrameSink>) -> Self {
        Self {
            name: name.to_string(),
            transformation,
            sink,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Orchestrates one capture session: pulls frames from the source until
/// it is exhausted and runs every stream over each frame, synchronously
/// and in order.
///
/// A transformation error aborts the run — a partially written frame is
/// never presented. The frame cap stands in for the interactive exit of
/// a display loop.
pub struct TransformStreamsUseCase<'a> {
    source: Box<dyn FrameSource>,
    streams: Vec<TransformStream<'a>>,
    logger: Box<dyn PipelineLogger>,
    max_frames: Option<usize>,
}

impl<'a> TransformStreamsUseCase<'a> {
    pub fn new(
        source: Box<dyn FrameSource>,
        streams: Vec<TransformStream<'a>>,
        logger: Box<dyn PipelineLogger>,
        max_frames: Option<usize>,
    ) -> Self {
        Self {
            source,
            streams,
            logger,
            max_frames,
        }
    }

    /// Runs the session to completion; returns the number of frames
    /// processed.
    pub fn execute(
        &mut self,
        metadata: &VideoMetadata,
    ) -> Result<usize, Box<dyn std::error::Error>> {
        let limit = self.max_frames;
        let total = metadata.total_frames;
        let Self {
            source,
            streams,
            logger,
            ..
        } = self;

        let mut processed = 0usize;
        for result in source.frames() {
            let frame = result?;

            for stream in streams.iter_mut() {
                let started = Instant::now();
                let output = stream.transformation.apply(&frame)?;
                logger.stream_timing(&stream.name, started.elapsed().as_secs_f64() * 1000.0);
                stream.sink.present(&output)?;
            }

            processed += 1;
            logger.progress(processed, total);

            if limit.is_some_and(|cap| processed >= cap) {
                logger.info("frame cap reached, stopping");
                break;
            }
        }

        for stream in self.streams.iter_mut() {
            stream.sink.finish()?;
        }
        self.source.close();
        self.logger.summary();

        Ok(processed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::pipeline_logger::NullLogger;
    use crate::shared::error::TransformError;
    use crate::shared::frame::Frame;
    use crate::transform::infrastructure::grayscale::GrayscaleTransformation;
    use crate::transform::infrastructure::identity::IdentityTransformation;
    use std::cell::RefCell;
    use std::path::Path;
    use std::rc::Rc;

    // --- Stubs ---

    struct StubSource {
        frames: Vec<Frame>,
        closed: Rc<RefCell<bool>>,
    }

    impl StubSource {
        fn new(frames: Vec<Frame>) -> (Self, Rc<RefCell<bool>>) {
            let closed = Rc::new(RefCell::new(false));
            (
                Self {
                    frames,
                    closed: closed.clone(),
                },
                closed,
            )
        }
    }

    impl FrameSource for StubSource {
        fn open(&mut self, _path: &Path) -> Result<VideoMetadata, Box<dyn std::error::Error>> {
            unimplemented!("stub is pre-loaded")
        }

        fn frames(
            &mut self,
        ) -> Box<dyn Iterator<Item = Result<Frame, Box<dyn std::error::Error>>> + '_> {
            let frames = std::mem::take(&mut self.frames);
            Box::new(frames.into_iter().map(Ok))
        }

        fn close(&mut self) {
            *self.closed.borrow_mut() = true;
        }
    }

    struct StubSink {
        stream: String,
        presented: Rc<RefCell<Vec<Frame>>>,
        finished: Rc<RefCell<bool>>,
    }

    impl StubSink {
        fn new(stream: &str) -> (Self, Rc<RefCell<Vec<Frame>>>, Rc<RefCell<bool>>) {
            let presented = Rc::new(RefCell::new(Vec::new()));
            let finished = Rc::new(RefCell::new(false));
            (
                Self {
                    stream: stream.to_string(),
                    presented: presented.clone(),
                    finished: finished.clone(),
                },
                presented,
                finished,
            )
        }
    }

    impl FrameSink for StubSink {
        fn stream(&self) -> &str {
            &self.stream
        }

        fn present(&mut self, frame: &Frame) -> Result<(), Box<dyn std::error::Error>> {
            self.presented.borrow_mut().push(frame.clone());
            Ok(())
        }

        fn finish(&mut self) -> Result<(), Box<dyn std::error::Error>> {
            *self.finished.borrow_mut() = true;
            Ok(())
        }
    }

    struct FailingTransformation;

    impl Transformation for FailingTransformation {
        fn apply(&self, frame: &Frame) -> Result<Frame, TransformError> {
            Err(TransformError::ShapeMismatch {
                transformation: "failing",
                channels: frame.channels(),
            })
        }
    }

    fn rgb_frames(count: usize) -> Vec<Frame> {
        (0..count)
            .map(|i| Frame::new(vec![i as u8; 12], 2, 2, 3, i))
            .collect()
    }

    fn metadata(total_frames: usize) -> VideoMetadata {
        VideoMetadata {
            width: 2,
            height: 2,
            fps: 25.0,
            total_frames,
            codec: "stub".to_string(),
            source_path: None,
        }
    }

    // --- Tests ---

    #[test]
    fn test_every_stream_sees_every_frame() {
        let (source, closed) = StubSource::new(rgb_frames(3));
        let identity = IdentityTransformation;
        let grayscale = GrayscaleTransformation;

        let (sink_a, presented_a, finished_a) = StubSink::new("original");
        let (sink_b, presented_b, _) = StubSink::new("grayscale");

        let mut use_case = TransformStreamsUseCase::new(
            Box::new(source),
            vec![
                TransformStream::new("original", &identity, Box::new(sink_a)),
                TransformStream::new("grayscale", &grayscale, Box::new(sink_b)),
            ],
            Box::new(NullLogger),
            None,
        );

        let processed = use_case.execute(&metadata(3)).unwrap();
        assert_eq!(processed, 3);
        assert_eq!(presented_a.borrow().len(), 3);
        assert_eq!(presented_b.borrow().len(), 3);
        assert!(*finished_a.borrow());
        assert!(*closed.borrow());

        // The grayscale stream got transformed output, not the input
        assert_eq!(presented_b.borrow()[0].channels(), 1);
        // Frame indices carried through
        assert_eq!(presented_a.borrow()[2].index(), 2);
    }

    #[test]
    fn test_streams_are_independent() {
        // Both streams transform the captured frame; the second does not
        // see the first stream's output.
        let (source, _) = StubSource::new(rgb_frames(1));
        let grayscale = GrayscaleTransformation;
        let identity = IdentityTransformation;

        let (sink_a, _, _) = StubSink::new("grayscale");
        let (sink_b, presented_b, _) = StubSink::new("original");

        let mut use_case = TransformStreamsUseCase::new(
            Box::new(source),
            vec![
                TransformStream::new("grayscale", &grayscale, Box::new(sink_a)),
                TransformStream::new("original", &identity, Box::new(sink_b)),
            ],
            Box::new(NullLogger),
            None,
        );
        use_case.execute(&metadata(1)).unwrap();

        assert_eq!(presented_b.borrow()[0].channels(), 3);
    }

    #[test]
    fn test_frame_cap_stops_early() {
        let (source, closed) = StubSource::new(rgb_frames(10));
        let identity = IdentityTransformation;
        let (sink, presented, finished) = StubSink::new("original");

        let mut use_case = TransformStreamsUseCase::new(
            Box::new(source),
            vec![TransformStream::new("original", &identity, Box::new(sink))],
            Box::new(NullLogger),
            Some(4),
        );

        let processed = use_case.execute(&metadata(10)).unwrap();
        assert_eq!(processed, 4);
        assert_eq!(presented.borrow().len(), 4);
        assert!(*finished.borrow());
        assert!(*closed.borrow());
    }

    #[test]
    fn test_empty_source_processes_nothing() {
        let (source, _) = StubSource::new(Vec::new());
        let identity = IdentityTransformation;
        let (sink, presented, finished) = StubSink::new("original");

        let mut use_case = TransformStreamsUseCase::new(
            Box::new(source),
            vec![TransformStream::new("original", &identity, Box::new(sink))],
            Box::new(NullLogger),
            None,
        );

        assert_eq!(use_case.execute(&metadata(0)).unwrap(), 0);
        assert!(presented.borrow().is_empty());
        assert!(*finished.borrow());
    }

    #[test]
    fn test_transformation_error_aborts_run() {
        let (source, _) = StubSource::new(rgb_frames(3));
        let failing = FailingTransformation;
        let (sink, presented, _) = StubSink::new("broken");

        let mut use_case = TransformStreamsUseCase::new(
            Box::new(source),
            vec![TransformStream::new("broken", &failing, Box::new(sink))],
            Box::new(NullLogger),
            None,
        );

        assert!(use_case.execute(&metadata(3)).is_err());
        assert!(presented.borrow().is_empty());
    }

    #[test]
    fn test_stream_name_accessor() {
        let identity = IdentityTransformation;
        let (sink, _, _) = StubSink::new("original");
        let stream = TransformStream::new("original", &identity, Box::new(sink));
        assert_eq!(stream.name(), "original");
    }
}
