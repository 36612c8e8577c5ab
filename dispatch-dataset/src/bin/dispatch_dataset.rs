//! builds a labeled, feature-augmented training dataset for ride-hailing
//! driver matching from raw booking and participant event logs.
use clap::Parser;
use dispatch_dataset::app::{DatasetApp, PipelineConfig};

fn main() {
    env_logger::init();
    let args = DatasetApp::parse();
    let config = PipelineConfig::from_file(&args.config_file)
        .expect("failed loading pipeline configuration");
    args.op.run(&config)
}
