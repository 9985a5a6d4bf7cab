pub mod config;
pub mod error;
pub mod extract;
pub mod history;
pub mod http;
pub mod links;
pub mod model;
pub mod prompt;
pub mod store;

pub use config::Config;
pub use error::ApiError;
pub use extract::{parse_meeting_request, strip_meeting_blocks, MeetingRequest};
pub use history::{normalize_history, Content, Role};
pub use http::{create_router, AppState};
pub use model::{ChatModel, GeminiClient, ModelError};
pub use store::{Meeting, MeetingStore, ReschedulePatch};
