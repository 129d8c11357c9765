use std::collections::HashMap;
use std::time::Instant;

/// Observer for pipeline runs: frame progress, per-stream transform
/// timing, and an end-of-run summary.
///
/// Keeps the use case free of any particular output mechanism; the CLI
/// plugs in a console variant, tests a silent one.
pub trait PipelineLogger {
    /// Frame-level progress; `total` may be 0 when the container does
    /// not report a frame count.
    fn progress(&mut self, current: usize, total: usize);

    /// How long one stream's transformation took for one frame.
    fn stream_timing(&mut self, stream: &str, duration_ms: f64);

    /// Human-readable status message.
    fn info(&mut self, message: &str);

    /// End-of-run report. Default: no-op.
    fn summary(&self) {}
}

/// Silent logger for tests and embedding.
pub struct NullLogger;

impl PipelineLogger for NullLogger {
    fn progress(&mut self, _current: usize, _total: usize) {}
    fn stream_timing(&mut self, _stream: &str, _duration_ms: f64) {}
    fn info(&mut self, _message: &str) {}
}

/// Console logger backed by the `log` macros.
///
/// Progress is throttled to every `log_every` frames; timings are
/// accumulated per stream and reported once at the end together with
/// overall throughput.
pub struct ConsoleLogger {
    log_every: usize,
    timings: HashMap<String, Vec<f64>>,
    started: Instant,
    frames_seen: usize,
}

impl ConsoleLogger {
    pub fn new(log_every: usize) -> Self {
        Self {
            log_every: log_every.max(1),
            timings: HashMap::new(),
            started: Instant::now(),
            frames_seen: 0,
        }
    }

    /// Formatted end-of-run report, or `None` when nothing was recorded.
    pub fn summary_string(&self) -> Option<String> {
        if self.frames_seen == 0 {
            return None;
        }

        let elapsed_s = self.started.elapsed().as_secs_f64();
        let mut lines = vec![format!(
            "Processed {} frames in {elapsed_s:.1}s",
            self.frames_seen
        )];

        let mut streams: Vec<_> = self.timings.keys().collect();
        streams.sort();
        for stream in streams {
            let durations = &self.timings[stream];
            let total_ms: f64 = durations.iter().sum();
            let avg_ms = total_ms / durations.len() as f64;
            lines.push(format!(
                "  {stream:20}: avg {avg_ms:6.2}ms  total {total_ms:8.0}ms"
            ));
        }

        if elapsed_s > 0.0 {
            lines.push(format!(
                "  throughput: {:.1} fps",
                self.frames_seen as f64 / elapsed_s
            ));
        }

        Some(lines.join("\n"))
    }

    pub fn timings_for(&self, stream: &str) -> Option<&[f64]> {
        self.timings.get(stream).map(|v| v.as_slice())
    }

    pub fn frames_seen(&self) -> usize {
        self.frames_seen
    }
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new(25)
    }
}

impl PipelineLogger for ConsoleLogger {
    fn progress(&mut self, current: usize, total: usize) {
        self.frames_seen = self.frames_seen.max(current);
        if current % self.log_every == 0 || (total > 0 && current == total) {
            if total > 0 {
                log::info!("frame {current}/{total}");
            } else {
                log::info!("frame {current}");
            }
        }
    }

    fn stream_timing(&mut self, stream: &str, duration_ms: f64) {
        self.timings
            .entry(stream.to_string())
            .or_default()
            .push(duration_ms);
    }

    fn info(&mut self, message: &str) {
        log::info!("{message}");
    }

    fn summary(&self) {
        if let Some(text) = self.summary_string() {
            log::info!("\n{text}");
        }
    }
}
