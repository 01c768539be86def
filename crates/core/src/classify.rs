// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Translation of transport failures into user-facing messages.

use nodewatch_client::ClientError;

/// Translates a transport failure into a fixed display message.
///
/// This translation is explicit and ensures transport details are never
/// leaked to the operator: each variant maps to a stable string and the
/// response payload is never interpolated. The taxonomy is
/// `#[non_exhaustive]`, so the wildcard arm guarantees a failure shape
/// added later still degrades to the generic message instead of crashing
/// the dashboard.
#[must_use]
pub fn classify(error: &ClientError) -> String {
    match error {
        ClientError::Authentication { .. } => String::from("Invalid username and password."),
        ClientError::BadRequest { .. } => String::from("The request was invalid."),
        ClientError::Unprocessable { .. } => String::from("The request could not be processed."),
        ClientError::Server { .. } => {
            String::from("The server encountered an error. Please try again later.")
        }
        _ => String::from("An unexpected error occurred. Please reload the page."),
    }
}
