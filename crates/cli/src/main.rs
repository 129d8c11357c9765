use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use framegrid_core::pipeline::pipeline_logger::ConsoleLogger;
use framegrid_core::pipeline::transform_streams_use_case::{
    TransformStream, TransformStreamsUseCase,
};
use framegrid_core::transform::domain::transformation::Transformation;
use framegrid_core::transform::infrastructure::averaging_rule::AveragingRule;
use framegrid_core::transform::infrastructure::chained::ChainedTransformation;
use framegrid_core::transform::infrastructure::grayscale::GrayscaleTransformation;
use framegrid_core::transform::infrastructure::identity::IdentityTransformation;
use framegrid_core::transform::infrastructure::predictor_rule::PredictorRule;
use framegrid_core::transform::infrastructure::segmented::SegmentedTransformation;
use framegrid_core::video::domain::frame_source::FrameSource;
use framegrid_core::video::infrastructure::ffmpeg_source::FfmpegSource;
use framegrid_core::video::infrastructure::image_file_source::ImageFileSource;
use framegrid_core::video::infrastructure::image_sequence_sink::ImageSequenceSink;

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "gif", "webp", "tiff"];

const STREAM_NAMES: &[&str] = &[
    "original",
    "grayscale",
    "pixelated",
    "predicted",
    "grayscale-predicted",
    "averaged-rows",
    "averaged-columns",
];

/// Block transformations over a video or image: tile averaging and
/// causal tile prediction, written out as per-stream image sequences.
#[derive(Parser)]
#[command(name = "framegrid")]
struct Cli {
    /// Input video or image file.
    input: PathBuf,

    /// Directory to write per-stream image sequences into.
    #[arg(long, default_value = "out")]
    output_dir: PathBuf,

    /// Tile width in pixels (0 = full frame width).
    #[arg(long, default_value = "8")]
    tile_width: u32,

    /// Tile height in pixels (0 = full frame height).
    #[arg(long, default_value = "8")]
    tile_height: u32,

    /// Streams to render (comma-separated): original, grayscale,
    /// pixelated, predicted, grayscale-predicted, averaged-rows,
    /// averaged-columns.
    #[arg(long, value_delimiter = ',', default_value = "grayscale,grayscale-predicted")]
    streams: Vec<String>,

    /// Stop after this many frames.
    #[arg(long)]
    max_frames: Option<usize>,

    /// Log progress every N frames.
    #[arg(long, default_value = "25")]
    log_every: usize,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    validate(&cli)?;

    let mut source = open_source(&cli.input);
    let metadata = source.open(&cli.input)?;
    log::info!(
        "{}: {}x{} {} ({} frames, {:.1} fps)",
        cli.input.display(),
        metadata.width,
        metadata.height,
        metadata.codec,
        metadata.total_frames,
        metadata.fps
    );

    // Every transformation a stream can refer to; chains borrow their
    // members, so all of them live for the rest of run().
    let identity = IdentityTransformation;
    let grayscale = GrayscaleTransformation;
    let pixelated =
        SegmentedTransformation::new(cli.tile_width, cli.tile_height, Box::new(AveragingRule));
    let predicted =
        SegmentedTransformation::new(cli.tile_width, cli.tile_height, Box::new(PredictorRule));
    let averaged_rows = SegmentedTransformation::new(0, 1, Box::new(AveragingRule));
    let averaged_columns = SegmentedTransformation::new(1, 0, Box::new(AveragingRule));

    let mut grayscale_predicted = ChainedTransformation::new();
    grayscale_predicted.add(&grayscale);
    grayscale_predicted.add(&predicted);

    let mut streams: Vec<TransformStream<'_>> = Vec::new();
    for name in &cli.streams {
        let transformation: &dyn Transformation = match name.as_str() {
            "original" => &identity,
            "grayscale" => &grayscale,
            "pixelated" => &pixelated,
            "predicted" => &predicted,
            "grayscale-predicted" => &grayscale_predicted,
            "averaged-rows" => &averaged_rows,
            "averaged-columns" => &averaged_columns,
            other => return Err(format!("unknown stream '{other}'").into()),
        };
        let sink = Box::new(ImageSequenceSink::new(&cli.output_dir, name));
        streams.push(TransformStream::new(name, transformation, sink));
    }

    let logger = Box::new(ConsoleLogger::new(cli.log_every));
    let mut use_case = TransformStreamsUseCase::new(source, streams, logger, cli.max_frames);
    let processed = use_case.execute(&metadata)?;
    log::info!(
        "{processed} frames written to {}",
        cli.output_dir.display()
    );

    Ok(())
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if !cli.input.exists() {
        return Err(format!("Input file not found: {}", cli.input.display()).into());
    }
    if cli.streams.is_empty() {
        return Err("At least one stream is required".into());
    }
    for name in &cli.streams {
        if !STREAM_NAMES.contains(&name.as_str()) {
            return Err(format!(
                "Unknown stream '{name}'; expected one of: {}",
                STREAM_NAMES.join(", ")
            )
            .into());
        }
    }
    if cli.max_frames == Some(0) {
        return Err("--max-frames must be positive".into());
    }
    Ok(())
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

fn open_source(input: &Path) -> Box<dyn FrameSource> {
    if is_image(input) {
        Box::new(ImageFileSource::new())
    } else {
        Box::new(FfmpegSource::new())
    }
}
