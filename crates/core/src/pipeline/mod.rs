pub mod pipeline_logger;
pub mod transform_streams_use_case;
