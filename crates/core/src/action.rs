// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use nodewatch_client::{
    AdminOperatorShowData, AdminOperatorsData, ClientError, JobRunsData, SigninData,
};
use serde::{Deserialize, Serialize};

/// An action represents one state-transition request as data only.
///
/// Actions are the only way to change the snapshot. Together with the
/// prior state they fully determine the next state; they carry no
/// callbacks and trigger no I/O.
///
/// The serde representation is internally tagged under `type`, preserving
/// the backend's discriminant tags on the wire. An unknown tag fails
/// deserialization at the boundary; it never reaches the reducers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Action {
    /// The admin sign-in request succeeded.
    #[serde(rename = "FETCH_ADMIN_SIGNIN_SUCCEEDED")]
    FetchAdminSigninSucceeded {
        /// The session payload.
        data: SigninData,
    },
    /// The admin sign-in request failed.
    #[serde(rename = "FETCH_ADMIN_SIGNIN_ERROR")]
    FetchAdminSigninError {
        /// The transport failure.
        error: ClientError,
    },
    /// The admin sign-out request succeeded.
    #[serde(rename = "FETCH_ADMIN_SIGNOUT_SUCCEEDED")]
    FetchAdminSignoutSucceeded,
    /// An operator index fetch succeeded.
    #[serde(rename = "FETCH_ADMIN_OPERATORS_SUCCEEDED")]
    FetchAdminOperatorsSucceeded {
        /// The normalized index payload.
        data: AdminOperatorsData,
    },
    /// An operator index fetch failed.
    #[serde(rename = "FETCH_ADMIN_OPERATORS_ERROR")]
    FetchAdminOperatorsError {
        /// The transport failure.
        error: ClientError,
    },
    /// A single-operator fetch succeeded.
    #[serde(rename = "FETCH_ADMIN_OPERATOR_SUCCEEDED")]
    FetchAdminOperatorSucceeded {
        /// The normalized operator payload.
        data: AdminOperatorShowData,
    },
    /// A single-operator fetch failed.
    #[serde(rename = "FETCH_ADMIN_OPERATOR_ERROR")]
    FetchAdminOperatorError {
        /// The transport failure.
        error: ClientError,
    },
    /// A job runs fetch succeeded.
    #[serde(rename = "FETCH_JOB_RUNS_SUCCEEDED")]
    FetchJobRunsSucceeded {
        /// The normalized job runs payload.
        data: JobRunsData,
    },
    /// A job runs fetch failed.
    #[serde(rename = "FETCH_JOB_RUNS_ERROR")]
    FetchJobRunsError {
        /// The transport failure.
        error: ClientError,
    },
    /// Surface an informational notification.
    #[serde(rename = "NOTIFY_SUCCESS")]
    NotifySuccess {
        /// The message to display.
        message: String,
    },
    /// Surface an error notification for a caught failure.
    #[serde(rename = "NOTIFY_ERROR")]
    NotifyError {
        /// The transport failure.
        error: ClientError,
    },
    /// The router matched a new route; stale notifications are cleared.
    #[serde(rename = "MATCH_ROUTE")]
    MatchRoute,
}

impl Action {
    /// Returns the action's discriminant tag.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::FetchAdminSigninSucceeded { .. } => "FETCH_ADMIN_SIGNIN_SUCCEEDED",
            Self::FetchAdminSigninError { .. } => "FETCH_ADMIN_SIGNIN_ERROR",
            Self::FetchAdminSignoutSucceeded => "FETCH_ADMIN_SIGNOUT_SUCCEEDED",
            Self::FetchAdminOperatorsSucceeded { .. } => "FETCH_ADMIN_OPERATORS_SUCCEEDED",
            Self::FetchAdminOperatorsError { .. } => "FETCH_ADMIN_OPERATORS_ERROR",
            Self::FetchAdminOperatorSucceeded { .. } => "FETCH_ADMIN_OPERATOR_SUCCEEDED",
            Self::FetchAdminOperatorError { .. } => "FETCH_ADMIN_OPERATOR_ERROR",
            Self::FetchJobRunsSucceeded { .. } => "FETCH_JOB_RUNS_SUCCEEDED",
            Self::FetchJobRunsError { .. } => "FETCH_JOB_RUNS_ERROR",
            Self::NotifySuccess { .. } => "NOTIFY_SUCCESS",
            Self::NotifyError { .. } => "NOTIFY_ERROR",
            Self::MatchRoute => "MATCH_ROUTE",
        }
    }
}
