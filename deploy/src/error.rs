use std::path::PathBuf;
use thiserror::Error;

/// Failures of the artifact loader.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read artifact {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("artifact is not a valid contract artifact: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("artifact bytecode is not valid hex (unlinked libraries?): {0}")]
    Bytecode(String),
    #[error("artifact has empty bytecode, nothing to deploy")]
    EmptyBytecode,
}

/// Terminal failures of a deployment run. None of them is recovered locally.
#[derive(Debug, Error)]
pub enum DeployError {
    #[error("load error: {0}")]
    Load(#[from] LoadError),
    #[error("config error: {0}")]
    Config(String),
    #[error("connection error: {0}")]
    Connection(String),
    #[error("constructor error: {0}")]
    Constructor(String),
    #[error("submission error: {0}")]
    Submission(String),
    #[error("confirmation error: {0}")]
    Confirmation(String),
}

pub type Result<T, E = DeployError> = std::result::Result<T, E>;
