// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use nodewatch_client::{
    AdminOperatorShowData, AdminOperatorsData, ApiResponse, ClientError, JobRunsData,
};
use nodewatch_domain::{
    JobRunAttributes, JobRunDocument, JobRunId, JobRunStatus, NodeId, OperatorNodeAttributes,
    OperatorNodeDocument,
};
use std::collections::BTreeMap;
use time::macros::datetime;

pub fn create_test_response(status: u16) -> ApiResponse {
    ApiResponse::new(status, serde_json::json!({ "errors": [] }))
}

pub fn create_authentication_error() -> ClientError {
    ClientError::Authentication {
        response: create_test_response(401),
    }
}

pub fn create_server_error() -> ClientError {
    ClientError::Server {
        response: create_test_response(500),
    }
}

pub fn create_node_document(id: &str, name: &str) -> OperatorNodeDocument {
    OperatorNodeDocument::new(OperatorNodeAttributes {
        id: NodeId::new(id),
        name: name.to_string(),
        url: None,
        created_at: datetime!(2026-01-15 10:30:00 UTC),
    })
}

pub fn create_operator_show_data(id: &str, name: &str) -> AdminOperatorShowData {
    let mut chainlink_nodes: BTreeMap<NodeId, OperatorNodeDocument> = BTreeMap::new();
    chainlink_nodes.insert(NodeId::new(id), create_node_document(id, name));
    AdminOperatorShowData { chainlink_nodes }
}

pub fn create_operators_data(ids: &[&str]) -> AdminOperatorsData {
    let mut chainlink_nodes: BTreeMap<NodeId, OperatorNodeDocument> = BTreeMap::new();
    for id in ids {
        chainlink_nodes.insert(NodeId::new(id), create_node_document(id, "Node"));
    }
    AdminOperatorsData {
        chainlink_nodes,
        current_page: ids.iter().copied().map(NodeId::new).collect(),
        count: u32::try_from(ids.len()).unwrap(),
    }
}

pub fn create_job_runs_data(ids: &[&str]) -> JobRunsData {
    let mut job_runs: BTreeMap<JobRunId, JobRunDocument> = BTreeMap::new();
    for id in ids {
        job_runs.insert(
            JobRunId::new(id),
            JobRunDocument::new(JobRunAttributes {
                id: JobRunId::new(id),
                job_id: String::from("job-7"),
                status: JobRunStatus::InProgress,
                created_at: datetime!(2026-02-01 08:00:00 UTC),
            }),
        );
    }
    JobRunsData {
        job_runs,
        count: u32::try_from(ids.len()).unwrap(),
    }
}
