//! Error taxonomy and boundary classification
//!
//! Business logic raises one of a small closed set of error kinds and never
//! builds response bodies itself; classification into a transport status and
//! an [`Envelope`] happens once, at the boundary, when the error is turned
//! into a response. Raw failure detail is logged and never echoed to the
//! caller; the only domain datum a body may carry is the identifier of a
//! missing entity.
//!
//! | kind | status | body |
//! |---|---|---|
//! | [`Error::BadInput`] | 400 | `{"code": "400", "message": "Bad request"}` |
//! | [`Error::ValidationFailed`] | 400 | failures grouped by field |
//! | [`Error::NotFound`] | 404 | `{"code": "404", "message": "Id <id> not found"}` |
//! | [`Error::Internal`] | 500 | `{"code": "500", "message": "Internal error"}` |
//! | [`Error::Upstream`] | reported status | `{"code": "<status>", "message": "Server error. Contact admin."}` |

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    envelope::Envelope,
    pagination::ParameterFormatError,
    validation::FieldFailure,
};

/// Result type alias using the boundary error
pub type Result<T> = std::result::Result<T, Error>;

/// Error kinds raised below the boundary
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(Box<figment::Error>),

    /// Malformed or illegal input, including parameter binding mismatches
    #[error("Bad request: {0}")]
    BadInput(String),

    /// Field validation failed
    #[error("Field validation failure ({} failures)", .0.len())]
    ValidationFailed(Vec<FieldFailure>),

    /// A referenced entity does not exist
    #[error("Missing id {id} for {resource}")]
    NotFound {
        /// Resource that was looked up
        resource: String,
        /// Identifier that was not found
        id: String,
    },

    /// Any other unclassified failure
    #[error("Internal server error: {0}")]
    Internal(String),

    /// A failure the surrounding framework already classified with a status
    #[error("Upstream reported status {0}")]
    Upstream(StatusCode),
}

impl Error {
    /// Bad input error
    pub fn bad_input(message: impl Into<String>) -> Self {
        Self::BadInput(message.into())
    }

    /// Validation error over the given field failures
    #[must_use]
    pub fn validation(failures: Vec<FieldFailure>) -> Self {
        Self::ValidationFailed(failures)
    }

    /// Missing-entity error
    ///
    /// # Example
    ///
    /// ```rust
    /// use manila::error::Error;
    ///
    /// let error = Error::not_found("widget", 1);
    /// assert_eq!(error.to_string(), "Missing id 1 for widget");
    /// ```
    pub fn not_found(resource: impl Into<String>, id: impl ToString) -> Self {
        Self::NotFound {
            resource: resource.into(),
            id: id.to_string(),
        }
    }

    /// Unclassified internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Transport status for this error kind
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadInput(_) | Self::ValidationFailed(_) => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Config(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Upstream(status) => *status,
        }
    }

    /// Response body for this error kind.
    ///
    /// Pure classification: no logging, no transport concerns.
    ///
    /// # Example
    ///
    /// ```rust
    /// use manila::{envelope::Envelope, error::Error};
    ///
    /// let envelope = Error::not_found("widget", 1).to_envelope();
    /// assert_eq!(envelope, Envelope::error("404", "Id 1 not found"));
    /// ```
    #[must_use]
    pub fn to_envelope(&self) -> Envelope {
        match self {
            Self::BadInput(_) => Envelope::error("400", "Bad request"),
            Self::ValidationFailed(failures) => {
                Envelope::failure("400", "Field validation failure", failures.clone())
            }
            Self::NotFound { id, .. } => Envelope::error("404", format!("Id {id} not found")),
            Self::Config(_) | Self::Internal(_) => Envelope::error("500", "Internal error"),
            Self::Upstream(status) => Envelope::error(
                status.as_u16().to_string(),
                "Server error. Contact admin.",
            ),
        }
    }
}

impl From<ParameterFormatError> for Error {
    fn from(error: ParameterFormatError) -> Self {
        Self::BadInput(error.to_string())
    }
}

impl From<figment::Error> for Error {
    fn from(error: figment::Error) -> Self {
        Self::Config(Box::new(error))
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::warn!(error = %self, "request rejected");
        }

        (status, Json(self.to_envelope())).into_response()
    }
}
