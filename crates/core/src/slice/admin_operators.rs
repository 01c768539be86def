// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::action::Action;
use nodewatch_domain::{NodeId, OperatorNodeDocument};
use std::collections::BTreeMap;
use std::sync::Arc;

/// The operator node index: one page of nodes plus the backend total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminOperatorsState {
    /// The operator node documents, keyed by node id.
    pub nodes: BTreeMap<NodeId, OperatorNodeDocument>,
    /// The node ids of the current page, in display order.
    pub current_page: Vec<NodeId>,
    /// The total number of operator nodes known to the backend.
    pub count: u32,
}

impl AdminOperatorsState {
    /// Creates the initial state: no nodes fetched yet.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            nodes: BTreeMap::new(),
            current_page: Vec::new(),
            count: 0,
        }
    }
}

impl Default for AdminOperatorsState {
    fn default() -> Self {
        Self::new()
    }
}

/// A successful index fetch replaces the whole slice; there is no merge
/// with previously fetched pages.
pub(crate) fn reduce(state: Arc<AdminOperatorsState>, action: &Action) -> Arc<AdminOperatorsState> {
    match action {
        Action::FetchAdminOperatorsSucceeded { data } => Arc::new(AdminOperatorsState {
            nodes: data.chainlink_nodes.clone(),
            current_page: data.current_page.clone(),
            count: data.count,
        }),
        _ => state,
    }
}
