// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Normalized success payloads delivered by the JSON-API transport.
//!
//! These DTOs are distinct from domain types and preserve the backend's
//! wire key names, including the literal `chainlinkNodes` collection key.

use nodewatch_domain::{JobRunDocument, JobRunId, NodeId, OperatorNodeDocument};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Payload of a successful admin sign-in request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SigninData {
    /// Whether the backend granted the session.
    pub allowed: bool,
}

/// Payload of a successful single-operator fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminOperatorShowData {
    /// The operator node documents, keyed by node id.
    pub chainlink_nodes: BTreeMap<NodeId, OperatorNodeDocument>,
}

/// Payload of a successful operator index fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminOperatorsData {
    /// The operator node documents, keyed by node id.
    pub chainlink_nodes: BTreeMap<NodeId, OperatorNodeDocument>,
    /// The node ids of the requested page, in display order.
    pub current_page: Vec<NodeId>,
    /// The total number of operator nodes known to the backend.
    pub count: u32,
}

/// Payload of a successful job runs fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRunsData {
    /// The job run documents, keyed by run id.
    pub job_runs: BTreeMap<JobRunId, JobRunDocument>,
    /// The total number of job runs known to the backend.
    pub count: u32,
}
