#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("required column '{column}' missing from '{filename}'")]
    MissingColumnError { filename: String, column: String },
    #[error("failure reading '{filename}': {source}")]
    CsvReadError { filename: String, source: csv::Error },
    #[error("failure writing '{filename}': {source}")]
    CsvWriteError { filename: String, source: csv::Error },
    #[error("failure persisting '{filename}': {source}")]
    PersistError {
        filename: String,
        source: std::io::Error,
    },
    #[error("error building output directory '{directory}': {source}")]
    CreateDirectoryError {
        directory: String,
        source: std::io::Error,
    },
}
