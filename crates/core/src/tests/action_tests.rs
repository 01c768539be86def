// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::Action;
use crate::tests::helpers::{create_authentication_error, create_operator_show_data};

#[test]
fn test_unit_action_serializes_to_bare_tag() {
    let json: serde_json::Value = serde_json::to_value(Action::MatchRoute).unwrap();

    assert_eq!(json, serde_json::json!({ "type": "MATCH_ROUTE" }));
}

#[test]
fn test_success_action_carries_tag_and_wire_payload() {
    let action: Action = Action::FetchAdminOperatorSucceeded {
        data: create_operator_show_data("node-1", "Primary Node"),
    };

    let json: serde_json::Value = serde_json::to_value(&action).unwrap();

    assert_eq!(json["type"], "FETCH_ADMIN_OPERATOR_SUCCEEDED");
    assert!(json["data"].get("chainlinkNodes").is_some());
}

#[test]
fn test_error_action_round_trips() {
    let action: Action = Action::FetchAdminSigninError {
        error: create_authentication_error(),
    };

    let json: String = serde_json::to_string(&action).unwrap();
    let parsed: Action = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed, action);
}

#[test]
fn test_unknown_tag_is_rejected_at_the_boundary() {
    let result: Result<Action, serde_json::Error> =
        serde_json::from_str(r#"{ "type": "FETCH_SOMETHING_NEW" }"#);

    assert!(result.is_err());
}

#[test]
fn test_name_matches_serialized_tag() {
    let actions: Vec<Action> = vec![
        Action::FetchAdminSignoutSucceeded,
        Action::MatchRoute,
        Action::NotifySuccess {
            message: String::from("Node created."),
        },
        Action::FetchAdminSigninError {
            error: create_authentication_error(),
        },
    ];

    for action in actions {
        let json: serde_json::Value = serde_json::to_value(&action).unwrap();
        assert_eq!(json["type"], action.name());
    }
}
