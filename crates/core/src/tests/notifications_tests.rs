// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::Action;
use crate::slice::{NotificationsState, notifications};
use crate::tests::helpers::{create_authentication_error, create_server_error};
use std::sync::Arc;

#[test]
fn test_initial_state_has_no_notifications() {
    let state: NotificationsState = NotificationsState::new();

    assert!(state.errors.is_empty());
    assert!(state.successes.is_empty());
}

#[test]
fn test_signin_error_appends_classified_message() {
    let state: Arc<NotificationsState> = Arc::new(NotificationsState::new());
    let action: Action = Action::FetchAdminSigninError {
        error: create_authentication_error(),
    };

    let next: Arc<NotificationsState> = notifications::reduce(state, &action);

    assert_eq!(next.errors, vec!["Invalid username and password."]);
    assert!(next.successes.is_empty());
}

#[test]
fn test_repeated_signin_errors_preserve_duplicates() {
    let mut state: Arc<NotificationsState> = Arc::new(NotificationsState::new());

    for _ in 0..2 {
        let action: Action = Action::FetchAdminSigninError {
            error: create_authentication_error(),
        };
        state = notifications::reduce(state, &action);
    }

    assert_eq!(
        state.errors,
        vec![
            "Invalid username and password.",
            "Invalid username and password.",
        ]
    );
}

#[test]
fn test_error_messages_keep_insertion_order() {
    let state: Arc<NotificationsState> = Arc::new(NotificationsState::new());

    let first: Arc<NotificationsState> = notifications::reduce(
        state,
        &Action::FetchAdminSigninError {
            error: create_authentication_error(),
        },
    );
    let second: Arc<NotificationsState> = notifications::reduce(
        first,
        &Action::FetchJobRunsError {
            error: create_server_error(),
        },
    );

    assert_eq!(
        second.errors,
        vec![
            "Invalid username and password.",
            "The server encountered an error. Please try again later.",
        ]
    );
}

#[test]
fn test_error_action_clears_informational_messages() {
    let state: Arc<NotificationsState> = Arc::new(NotificationsState {
        errors: Vec::new(),
        successes: vec![String::from("Node created.")],
    });

    let next: Arc<NotificationsState> = notifications::reduce(
        state,
        &Action::NotifyError {
            error: create_server_error(),
        },
    );

    assert!(next.successes.is_empty());
    assert_eq!(next.errors.len(), 1);
}

#[test]
fn test_success_notification_appends_and_clears_errors() {
    let state: Arc<NotificationsState> = Arc::new(NotificationsState {
        errors: vec![String::from("Invalid username and password.")],
        successes: Vec::new(),
    });

    let next: Arc<NotificationsState> = notifications::reduce(
        state,
        &Action::NotifySuccess {
            message: String::from("Node created."),
        },
    );

    assert!(next.errors.is_empty());
    assert_eq!(next.successes, vec!["Node created."]);
}

#[test]
fn test_route_match_resets_both_sequences() {
    let state: Arc<NotificationsState> = Arc::new(NotificationsState {
        errors: vec![String::from("Invalid username and password.")],
        successes: vec![String::from("Node created.")],
    });

    let next: Arc<NotificationsState> = notifications::reduce(state, &Action::MatchRoute);

    assert!(next.errors.is_empty());
    assert!(next.successes.is_empty());
}

#[test]
fn test_irrelevant_action_returns_same_allocation() {
    let state: Arc<NotificationsState> = Arc::new(NotificationsState::new());

    let next: Arc<NotificationsState> =
        notifications::reduce(Arc::clone(&state), &Action::FetchAdminSignoutSucceeded);

    assert!(Arc::ptr_eq(&state, &next));
}
