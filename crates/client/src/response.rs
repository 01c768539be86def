// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// The raw outcome of a backend request.
///
/// Error variants carry the originating response so callers can confirm
/// its shape. Display code never interpolates response contents into
/// user-facing messages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    /// The HTTP status code of the response.
    pub status: u16,
    /// The response body, parsed as JSON. An unparseable or empty body is
    /// recorded as `null`.
    pub body: serde_json::Value,
}

impl ApiResponse {
    /// Creates a new `ApiResponse`.
    ///
    /// # Arguments
    ///
    /// * `status` - The HTTP status code
    /// * `body` - The parsed response body
    #[must_use]
    pub const fn new(status: u16, body: serde_json::Value) -> Self {
        Self { status, body }
    }

    /// Returns whether the status code is in the client error range.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        self.status >= 400 && self.status < 500
    }

    /// Returns whether the status code is in the server error range.
    #[must_use]
    pub const fn is_server_error(&self) -> bool {
        self.status >= 500
    }
}
