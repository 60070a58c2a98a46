use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidatorError {
    /// The form uses a field type with no validator. This is a configuration
    /// bug, not bad user input.
    #[error("there is no validator for the question of type {0}")]
    UnknownFieldType(String),

    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}
