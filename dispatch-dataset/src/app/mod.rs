mod dataset_app;
mod operation;
mod pipeline_config;

pub use dataset_app::DatasetApp;
pub use operation::DatasetOperation;
pub use pipeline_config::PipelineConfig;
