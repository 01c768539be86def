// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::action::Action;
use nodewatch_domain::{NodeId, OperatorNodeDocument};
use std::collections::BTreeMap;
use std::sync::Arc;

/// The operator node currently shown on the detail view.
///
/// The backend delivers the record as a one-entry collection keyed by node
/// id; the slice stores that collection verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminOperatorsShowState {
    /// The fetched operator node documents, keyed by node id.
    pub nodes: BTreeMap<NodeId, OperatorNodeDocument>,
}

impl AdminOperatorsShowState {
    /// Creates the initial state: nothing fetched yet.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            nodes: BTreeMap::new(),
        }
    }
}

impl Default for AdminOperatorsShowState {
    fn default() -> Self {
        Self::new()
    }
}

/// The payload's collection becomes the entire slice value; prior contents
/// are discarded, never merged.
pub(crate) fn reduce(
    state: Arc<AdminOperatorsShowState>,
    action: &Action,
) -> Arc<AdminOperatorsShowState> {
    match action {
        Action::FetchAdminOperatorSucceeded { data } => Arc::new(AdminOperatorsShowState {
            nodes: data.chainlink_nodes.clone(),
        }),
        _ => state,
    }
}
