//! Application state for the Leave Accrual Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::engine::LeaveAccrualEngine;

/// Shared application state.
///
/// Holds the one engine instance every request handler uses. The engine
/// keeps no per-employee state, so no locking is needed.
#[derive(Clone)]
pub struct AppState {
    /// The configured accrual engine.
    engine: Arc<LeaveAccrualEngine>,
}

impl AppState {
    /// Creates a new application state around the given engine.
    pub fn new(engine: LeaveAccrualEngine) -> Self {
        Self {
            engine: Arc::new(engine),
        }
    }

    /// Returns a reference to the engine.
    pub fn engine(&self) -> &LeaveAccrualEngine {
        &self.engine
    }
}
