use crate::model::ChatModel;
use crate::store::MeetingStore;
use std::sync::Arc;

/// Shared application state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Scheduled meetings (meeting_id → meeting)
    pub store: MeetingStore,

    /// External chat model the conversation handler delegates to
    pub model: Arc<dyn ChatModel>,
}

impl AppState {
    pub fn new(store: MeetingStore, model: Arc<dyn ChatModel>) -> Self {
        Self { store, model }
    }
}
