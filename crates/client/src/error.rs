// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The typed error taxonomy produced by the JSON-API transport.

use crate::response::ApiResponse;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A failure reported by the JSON-API transport.
///
/// The taxonomy is closed from the transport's point of view but marked
/// `#[non_exhaustive]` so downstream matches keep a fallback arm: a new
/// failure shape must degrade gracefully, never crash the dashboard.
///
/// The `Display` messages here are diagnostic. User-facing notification
/// text comes from the state container's classifier, which maps each
/// variant to a fixed display string.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ClientError {
    /// The backend rejected the request's credentials.
    #[error("authentication rejected (status {})", response.status)]
    Authentication {
        /// The failed response.
        response: ApiResponse,
    },
    /// The backend rejected the request as malformed.
    #[error("bad request (status {})", response.status)]
    BadRequest {
        /// The failed response.
        response: ApiResponse,
    },
    /// The backend understood the request but could not process it.
    #[error("unprocessable request (status {})", response.status)]
    Unprocessable {
        /// The failed response.
        response: ApiResponse,
    },
    /// The backend failed internally.
    #[error("server error (status {})", response.status)]
    Server {
        /// The failed response.
        response: ApiResponse,
    },
    /// The transport could not recognize the failure shape.
    #[error("unrecognized transport failure: {detail}")]
    Unknown {
        /// A diagnostic description of what was observed.
        detail: String,
    },
}

impl ClientError {
    /// Classifies a failed response into the matching error variant.
    ///
    /// # Arguments
    ///
    /// * `response` - The failed response to classify
    #[must_use]
    pub fn from_response(response: ApiResponse) -> Self {
        match response.status {
            401 | 403 => Self::Authentication { response },
            400 => Self::BadRequest { response },
            422 => Self::Unprocessable { response },
            _ if response.is_server_error() => Self::Server { response },
            status => Self::Unknown {
                detail: format!("unexpected response status {status}"),
            },
        }
    }

    /// Returns whether this error represents an authentication failure.
    #[must_use]
    pub const fn is_authentication(&self) -> bool {
        matches!(self, Self::Authentication { .. })
    }
}
