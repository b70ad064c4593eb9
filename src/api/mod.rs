//! HTTP API module for the Leave Accrual Engine.
//!
//! This module exposes the engine operations as JSON endpoints under
//! `/leave/*`. Every successful response is an
//! [`AccrualReport`](crate::models::AccrualReport).

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::LeaveRequest;
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
