use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

pub type Result<T> = std::result::Result<T, CragError>;

#[derive(Debug, Error)]
pub enum CragError {
    #[error("invalid grade: {0}")]
    InvalidGrade(String),

    #[error("invalid area path: {0}")]
    InvalidAreaPath(String),

    #[error("invalid criterion: {0}")]
    InvalidCriterion(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("corpus load failed: {0}")]
    CorpusLoad(String),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorPayload {
    pub code: String,
    pub message: String,
    pub operation: String,
    pub trace_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl CragError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidGrade(_) => "INVALID_GRADE",
            Self::InvalidAreaPath(_) => "INVALID_AREA_PATH",
            Self::InvalidCriterion(_) => "INVALID_CRITERION",
            Self::NotFound(_) => "NOT_FOUND",
            Self::CorpusLoad(_) => "CORPUS_LOAD_FAILED",
            Self::Validation(_) => "VALIDATION_FAILED",
            Self::Io(_) => "IO_ERROR",
            Self::Json(_) => "JSON_ERROR",
            Self::Toml(_) => "TOML_ERROR",
        }
    }

    pub fn to_payload(
        &self,
        operation: impl Into<String>,
        source_path: Option<String>,
    ) -> ErrorPayload {
        ErrorPayload {
            code: self.code().to_string(),
            message: self.to_string(),
            operation: operation.into(),
            trace_id: Uuid::new_v4().to_string(),
            source_path,
            details: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::CragError;

    #[test]
    fn payload_carries_stable_code_and_operation() {
        let err = CragError::InvalidGrade("5.frobnicate".to_string());
        let payload = err.to_payload("grade.normalize", None);
        assert_eq!(payload.code, "INVALID_GRADE");
        assert_eq!(payload.operation, "grade.normalize");
        assert!(payload.message.contains("5.frobnicate"));
        assert_eq!(payload.trace_id.len(), 36);
    }

    #[test]
    fn payload_serialization_omits_absent_source_path() {
        let err = CragError::CorpusLoad("no areas".to_string());
        let value = serde_json::to_value(err.to_payload("corpus.load", None))
            .expect("serialize payload");
        assert!(value.get("source_path").is_none());
        assert_eq!(value["code"], "CORPUS_LOAD_FAILED");
    }
}
