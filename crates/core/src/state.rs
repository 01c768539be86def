// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::action::Action;
use crate::slice::{
    AdminAuthState, AdminOperatorsShowState, AdminOperatorsState, JobRunsState, NotificationsState,
    admin_auth, admin_operators, admin_operators_show, job_runs, notifications,
};
use std::sync::Arc;

/// The complete dashboard state: one immutable snapshot per dispatch.
///
/// Every field is present at all times. Each slice sits behind an `Arc`,
/// so cloning a snapshot is cheap and a slice untouched by an action
/// keeps its previous allocation, letting observers detect change with
/// [`Arc::ptr_eq`]. Snapshots are never mutated in place; a dispatch
/// replaces the whole value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    /// The admin session slice.
    pub admin_auth: Arc<AdminAuthState>,
    /// The operator node index slice.
    pub admin_operators: Arc<AdminOperatorsState>,
    /// The operator node detail slice.
    pub admin_operators_show: Arc<AdminOperatorsShowState>,
    /// The job runs slice.
    pub job_runs: Arc<JobRunsState>,
    /// The notifications slice.
    pub notifications: Arc<NotificationsState>,
}

impl AppState {
    /// Creates the initial snapshot from every slice's declared initial
    /// value.
    #[must_use]
    pub fn new() -> Self {
        Self {
            admin_auth: Arc::new(AdminAuthState::new()),
            admin_operators: Arc::new(AdminOperatorsState::new()),
            admin_operators_show: Arc::new(AdminOperatorsShowState::new()),
            job_runs: Arc::new(JobRunsState::new()),
            notifications: Arc::new(NotificationsState::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Computes the next snapshot from the prior snapshot and one action.
///
/// The same action fans out to every slice reducer; the results are
/// reassembled field by field. The slice-to-reducer mapping is written
/// out statically here rather than discovered at runtime. Slices never
/// read each other's next state within a dispatch, so the fan-out order
/// is immaterial.
///
/// Pure function: identical `(prior, action)` pairs produce deep-equal
/// snapshots.
#[must_use]
pub fn reduce(prior: &AppState, action: &Action) -> AppState {
    AppState {
        admin_auth: admin_auth::reduce(Arc::clone(&prior.admin_auth), action),
        admin_operators: admin_operators::reduce(Arc::clone(&prior.admin_operators), action),
        admin_operators_show: admin_operators_show::reduce(
            Arc::clone(&prior.admin_operators_show),
            action,
        ),
        job_runs: job_runs::reduce(Arc::clone(&prior.job_runs), action),
        notifications: notifications::reduce(Arc::clone(&prior.notifications), action),
    }
}
