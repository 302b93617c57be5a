use crate::upstream::Upstream;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::fmt;
use utoipa::ToSchema;

/// Application-specific error types.
///
/// Every failure in a request ends up as exactly one of these; nothing is
/// recovered locally, so the first error aborts the whole request.
#[derive(Debug, Clone)]
pub enum AppError {
    /// A required query parameter is absent or blank.
    MissingParameter(&'static str),
    /// A credential the route needs is not configured. Holds the variable name.
    MissingCredential(&'static str),
    /// The upstream could not be reached or timed out.
    UpstreamUnreachable { upstream: Upstream, message: String },
    /// The upstream answered, but refused the request.
    ///
    /// `status` is the upstream HTTP status; 200 means the provider reported the
    /// failure inside a success envelope.
    UpstreamRejected {
        upstream: Upstream,
        status: u16,
        message: String,
    },
    /// The upstream body could not be decoded into the expected shape.
    MalformedUpstreamPayload { upstream: Upstream, message: String },
    /// The upstream answered 200 but without the data we need.
    EmptyResult { upstream: Upstream },
}

impl AppError {
    /// HTTP status for this error, applied uniformly by every handler.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingParameter(_) => StatusCode::BAD_REQUEST,
            AppError::MissingCredential(_) => StatusCode::INTERNAL_SERVER_ERROR,
            // A refused key is our misconfiguration, not the caller's input
            AppError::UpstreamRejected {
                status: 401 | 403,
                ..
            } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::UpstreamRejected { status, .. } if (200u16..500).contains(status) => {
                StatusCode::BAD_REQUEST
            }
            AppError::UpstreamRejected { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::UpstreamUnreachable { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::MalformedUpstreamPayload { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::EmptyResult { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable machine-readable name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::MissingParameter(_) => "missing_parameter",
            AppError::MissingCredential(_) => "missing_credential",
            AppError::UpstreamUnreachable { .. } => "upstream_unreachable",
            AppError::UpstreamRejected { .. } => "upstream_rejected",
            AppError::MalformedUpstreamPayload { .. } => "malformed_upstream_payload",
            AppError::EmptyResult { .. } => "empty_result",
        }
    }

    /// Message safe to show to API callers.
    ///
    /// Upstream bodies and transport details stay in the logs.
    fn public_message(&self) -> String {
        match self {
            AppError::MissingParameter(name) => format!("{} parameter is required", name),
            AppError::MissingCredential(_) => "API key not configured".to_string(),
            AppError::UpstreamUnreachable { upstream, .. } => {
                format!("Failed to fetch {} data", upstream.subject())
            }
            AppError::UpstreamRejected { upstream, .. } => {
                format!("Invalid city or {} API error", upstream.subject())
            }
            AppError::MalformedUpstreamPayload { upstream, .. } => {
                format!("Failed to parse {} data", upstream.subject())
            }
            AppError::EmptyResult { upstream } => {
                format!("No {} data returned for this city", upstream.subject())
            }
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::MissingParameter(name) => write!(f, "Missing parameter: {}", name),
            AppError::MissingCredential(name) => write!(f, "Missing credential: {}", name),
            AppError::UpstreamUnreachable { upstream, message } => {
                write!(f, "{} unreachable: {}", upstream, message)
            }
            AppError::UpstreamRejected {
                upstream,
                status,
                message,
            } => write!(f, "{} returned {}: {}", upstream, status, message),
            AppError::MalformedUpstreamPayload { upstream, message } => {
                write!(f, "Failed to parse {} response: {}", upstream, message)
            }
            AppError::EmptyResult { upstream } => write!(f, "{} returned an empty result", upstream),
        }
    }
}

impl std::error::Error for AppError {}

/// JSON body written for every error response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Human-readable message.
    pub error: String,
    /// Error kind, e.g. `missing_parameter`.
    pub kind: String,
}

impl IntoResponse for AppError {
    /// Converts the error into an HTTP response.
    ///
    /// Server-side faults are logged at error level, caller faults at warn.
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("{}", self);
        } else {
            tracing::warn!("{}", self);
        }

        let body = Json(ErrorBody {
            error: self.public_message(),
            kind: self.kind().to_string(),
        });

        (status, body).into_response()
    }
}
