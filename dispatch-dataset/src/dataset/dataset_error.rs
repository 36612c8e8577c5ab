#[derive(thiserror::Error, Debug)]
pub enum DatasetError {
    #[error("historical completion feature requires the completion label; apply create_target first")]
    MissingTargetError,
}
