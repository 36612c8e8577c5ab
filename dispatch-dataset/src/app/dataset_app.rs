use super::DatasetOperation;
use clap::Parser;

/// command line tool for building labeled driver-matching training datasets
/// from raw ride-hailing event logs
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct DatasetApp {
    #[command(subcommand)]
    pub op: DatasetOperation,
    #[arg(long, default_value_t=String::from("config.toml"))]
    pub config_file: String,
}
