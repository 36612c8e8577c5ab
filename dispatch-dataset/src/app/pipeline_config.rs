use serde::Deserialize;

/// pipeline settings loaded from a TOML file via the `config` crate.
#[derive(Debug, Clone, Deserialize)]
pub struct PipelineConfig {
    /// name of the binary label column in the output dataset
    pub target: String,
    /// directory holding the raw event logs
    #[serde(default = "default_raw_data_dir")]
    pub raw_data_dir: String,
    /// directory the processed dataset is written to
    #[serde(default = "default_processed_data_dir")]
    pub processed_data_dir: String,
}

fn default_raw_data_dir() -> String {
    String::from("data/raw")
}

fn default_processed_data_dir() -> String {
    String::from("data/processed")
}

impl PipelineConfig {
    /// loads configuration from `filename`; the extension is resolved by the
    /// config crate, so "config" finds "config.toml".
    pub fn from_file(filename: &str) -> Result<PipelineConfig, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(filename))
            .build()?;
        settings.try_deserialize()
    }
}
