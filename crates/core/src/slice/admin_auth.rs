// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::action::Action;
use std::sync::Arc;

/// Whether the operator's admin session is currently signed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdminAuthState {
    /// `true` once the backend has granted the session.
    pub allowed: bool,
}

impl AdminAuthState {
    /// Creates the initial state: not signed in.
    #[must_use]
    pub const fn new() -> Self {
        Self { allowed: false }
    }
}

impl Default for AdminAuthState {
    fn default() -> Self {
        Self::new()
    }
}

/// A failed or retired session always drops back to `allowed: false`.
pub(crate) fn reduce(state: Arc<AdminAuthState>, action: &Action) -> Arc<AdminAuthState> {
    match action {
        Action::FetchAdminSigninSucceeded { data } => Arc::new(AdminAuthState {
            allowed: data.allowed,
        }),
        Action::FetchAdminSigninError { .. } | Action::FetchAdminSignoutSucceeded => {
            Arc::new(AdminAuthState { allowed: false })
        }
        _ => state,
    }
}
