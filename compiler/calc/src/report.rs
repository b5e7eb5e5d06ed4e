use serde::Serialize;

use crate::error::{CalcError, ErrorKind};
use crate::format::format_result;

/// Error half of a [`Report`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportError {
    /// Classification of the failure
    pub kind: ErrorKind,
    /// Human-readable message
    pub message: String,
    /// Character index the error points at
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<usize>,
}

/// Outcome of one expression, as emitted by `calc --json`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// The expression as given
    pub expression: String,
    /// Formatted value, on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    /// What went wrong, on failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ReportError>,
}

impl Report {
    /// Build the report for one evaluated expression
    pub fn new(expression: &str, outcome: &Result<f64, CalcError>) -> Self {
        match outcome {
            Ok(value) => Self {
                expression: expression.to_string(),
                result: Some(format_result(*value)),
                error: None,
            },
            Err(err) => Self {
                expression: expression.to_string(),
                result: None,
                error: Some(ReportError {
                    kind: err.kind(),
                    message: err.to_string(),
                    position: err.position(),
                }),
            },
        }
    }

    /// Whether the expression evaluated successfully
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}
