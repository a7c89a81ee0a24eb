#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CaseKitError {
    #[error("unknown case style '{0}' (expected pascal, camel or kebab)")]
    UnknownCaseStyle(String),
}
