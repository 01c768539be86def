// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::action::Action;
use crate::state::{AppState, reduce};
use tracing::debug;

/// Owns the current snapshot and feeds dispatched actions through the
/// root reducer.
///
/// Dispatch is synchronous and runs to completion; actions are processed
/// strictly in the order they arrive. The store exposes no mutation
/// besides [`Store::dispatch`]; reads hand out the immutable snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Store {
    state: AppState,
}

impl Store {
    /// Creates a store holding the initial snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: AppState::new(),
        }
    }

    /// Applies one action and replaces the snapshot wholesale.
    ///
    /// # Arguments
    ///
    /// * `action` - The action to apply
    pub fn dispatch(&mut self, action: &Action) {
        debug!(action = action.name(), "Applying dispatched action");
        self.state = reduce(&self.state, action);
    }

    /// Returns the current snapshot.
    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    /// Returns an owned clone of the current snapshot.
    ///
    /// Cloning is cheap: five reference-count bumps. The clone stays
    /// valid and unchanged across later dispatches.
    #[must_use]
    pub fn snapshot(&self) -> AppState {
        self.state.clone()
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
