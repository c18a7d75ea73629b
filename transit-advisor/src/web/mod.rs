//! HTTP tool surface for the agent layer.
//!
//! Each lookup is exposed as a JSON endpoint. Lookup failures come back
//! as result-shaped bodies (`{"error": ...}`) with status 200; the agent
//! reads the body, not the status.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::create_router;
pub use state::{AppState, LiveAdvisor};
