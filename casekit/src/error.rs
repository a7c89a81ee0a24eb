use casekit_core::CaseKitError;

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Core(#[from] CaseKitError),
}
