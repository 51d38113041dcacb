use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Definition(#[from] DefinitionError),
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to parse as JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to parse as YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("unable to auto-detect spec format (neither valid JSON nor valid YAML)")]
    UnknownFormat,
}

/// A broken validation spec. Distinct from [`ValidationFailure`] records,
/// which are ordinary data: a definition error aborts the call.
///
/// [`ValidationFailure`]: crate::types::ValidationFailure
#[derive(Debug, Error)]
pub enum DefinitionError {
    #[error("no rule definition for key `{key}`; remove the validation if it is not required")]
    Empty { key: String },
}
