// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::action::Action;
use nodewatch_domain::{JobRunDocument, JobRunId};
use std::collections::BTreeMap;
use std::sync::Arc;

/// The most recently fetched job runs plus the backend total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobRunsState {
    /// The job run documents, keyed by run id.
    pub runs: BTreeMap<JobRunId, JobRunDocument>,
    /// The total number of job runs known to the backend.
    pub count: u32,
}

impl JobRunsState {
    /// Creates the initial state: no runs fetched yet.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            runs: BTreeMap::new(),
            count: 0,
        }
    }
}

impl Default for JobRunsState {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn reduce(state: Arc<JobRunsState>, action: &Action) -> Arc<JobRunsState> {
    match action {
        Action::FetchJobRunsSucceeded { data } => Arc::new(JobRunsState {
            runs: data.job_runs.clone(),
            count: data.count,
        }),
        _ => state,
    }
}
