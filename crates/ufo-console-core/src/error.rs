#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("console config is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("console config field `{field}` must not be empty")]
    EmptyField { field: &'static str },
}

#[derive(Debug, thiserror::Error)]
pub enum PayloadError {
    #[error("manual user name must not be empty")]
    EmptyName,
    #[error("manual user email must not be empty")]
    EmptyEmail,
    #[error("failed to encode users payload: {0}")]
    Encode(#[from] serde_json::Error),
}
