pub mod ffmpeg_source;
pub mod image_file_source;
pub mod image_sequence_sink;
