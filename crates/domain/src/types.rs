// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::OffsetDateTime;

/// Identifier for an operator-run node.
///
/// Node identifiers come from the backend and key the normalized node
/// collections. They are opaque strings; ordering exists only so they can
/// key deterministic maps.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// Creates a new `NodeId`.
    ///
    /// # Arguments
    ///
    /// * `id` - The node identifier as reported by the backend
    #[must_use]
    pub fn new(id: &str) -> Self {
        Self(id.to_string())
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier for a single job run.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobRunId(String);

impl JobRunId {
    /// Creates a new `JobRunId`.
    ///
    /// # Arguments
    ///
    /// * `id` - The job run identifier as reported by the backend
    #[must_use]
    pub fn new(id: &str) -> Self {
        Self(id.to_string())
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for JobRunId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The lifecycle status of a job run.
///
/// Runs begin in progress, may wait on confirmations, and settle into
/// exactly one of the terminal states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobRunStatus {
    /// The run is currently executing.
    #[serde(rename = "in_progress")]
    InProgress,
    /// The run is waiting on chain confirmations before settling.
    #[serde(rename = "pending_confirmations")]
    PendingConfirmations,
    /// The run finished successfully.
    #[serde(rename = "completed")]
    Completed,
    /// The run finished with an error.
    #[serde(rename = "errored")]
    Errored,
}

impl JobRunStatus {
    /// Converts this status to its wire string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InProgress => "in_progress",
            Self::PendingConfirmations => "pending_confirmations",
            Self::Completed => "completed",
            Self::Errored => "errored",
        }
    }

    /// Returns whether the run has settled and will not change again.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Errored)
    }
}

impl FromStr for JobRunStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "in_progress" => Ok(Self::InProgress),
            "pending_confirmations" => Ok(Self::PendingConfirmations),
            "completed" => Ok(Self::Completed),
            "errored" => Ok(Self::Errored),
            _ => Err(DomainError::InvalidJobRunStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for JobRunStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The attributes of an operator node document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperatorNodeAttributes {
    /// The node identifier.
    pub id: NodeId,
    /// The display name of the node.
    pub name: String,
    /// The node's public URL, if it advertises one.
    pub url: Option<String>,
    /// When the node record was created on the backend.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// A normalized operator node document as delivered by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatorNodeDocument {
    /// The node's attributes.
    pub attributes: OperatorNodeAttributes,
}

impl OperatorNodeDocument {
    /// Creates a new `OperatorNodeDocument`.
    ///
    /// # Arguments
    ///
    /// * `attributes` - The node's attributes
    #[must_use]
    pub const fn new(attributes: OperatorNodeAttributes) -> Self {
        Self { attributes }
    }
}

/// The attributes of a job run document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRunAttributes {
    /// The job run identifier.
    pub id: JobRunId,
    /// The identifier of the job this run belongs to.
    pub job_id: String,
    /// The run's lifecycle status.
    pub status: JobRunStatus,
    /// When the run was created on the backend.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// A normalized job run document as delivered by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRunDocument {
    /// The run's attributes.
    pub attributes: JobRunAttributes,
}

impl JobRunDocument {
    /// Creates a new `JobRunDocument`.
    ///
    /// # Arguments
    ///
    /// * `attributes` - The run's attributes
    #[must_use]
    pub const fn new(attributes: JobRunAttributes) -> Self {
        Self { attributes }
    }
}
