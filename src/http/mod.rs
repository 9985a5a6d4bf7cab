//! HTTP API server for the sales chat bot and meeting management
//!
//! This module provides a REST API over the chat core:
//! - POST /chat - Send a message to the sales agent
//! - GET /meetings - List all scheduled meetings
//! - GET /meetings/:id - Get a specific meeting
//! - PUT /meetings/:id - Reschedule a meeting
//! - DELETE /meetings/:id - Cancel a meeting
//! - GET / - Health check

mod handlers;
mod routes;
mod state;

pub use routes::create_router;
pub use state::AppState;
