// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::action::Action;
use crate::classify::classify;
use std::sync::Arc;

/// The notifications surfaced to the operator.
///
/// Errors and informational messages are kept as separate ordered
/// sequences. Entries are appended in dispatch order and never edited;
/// repeated identical failures append duplicate messages. Only reset
/// actions replace a sequence wholesale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationsState {
    /// Error messages, oldest first.
    pub errors: Vec<String>,
    /// Informational messages, oldest first.
    pub successes: Vec<String>,
}

impl NotificationsState {
    /// Creates the initial state: no notifications.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            errors: Vec::new(),
            successes: Vec::new(),
        }
    }
}

impl Default for NotificationsState {
    fn default() -> Self {
        Self::new()
    }
}

/// Every failure action funnels through [`classify`] into the error
/// sequence. An error clears the informational sequence and vice versa;
/// a route match clears both.
pub(crate) fn reduce(state: Arc<NotificationsState>, action: &Action) -> Arc<NotificationsState> {
    match action {
        Action::FetchAdminSigninError { error }
        | Action::FetchAdminOperatorsError { error }
        | Action::FetchAdminOperatorError { error }
        | Action::FetchJobRunsError { error }
        | Action::NotifyError { error } => {
            let mut errors: Vec<String> = state.errors.clone();
            errors.push(classify(error));
            Arc::new(NotificationsState {
                errors,
                successes: Vec::new(),
            })
        }
        Action::NotifySuccess { message } => {
            let mut successes: Vec<String> = state.successes.clone();
            successes.push(message.clone());
            Arc::new(NotificationsState {
                errors: Vec::new(),
                successes,
            })
        }
        Action::MatchRoute => Arc::new(NotificationsState::new()),
        _ => state,
    }
}
