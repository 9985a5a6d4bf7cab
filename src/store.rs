//! In-memory meeting store.
//!
//! Meetings live for the lifetime of the process only; a restart wipes them.
//! The store is an explicit object constructed once in `main` and shared
//! with handlers through `AppState`; there is no ambient global.

use crate::extract::MeetingRequest;
use crate::links;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// A scheduled meeting as stored and served by the management API.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Meeting {
    pub id: String,
    #[serde(flatten)]
    pub request: MeetingRequest,
    pub status: String,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    pub meeting_link: String,
    pub calendar_link: String,
}

/// Fields a reschedule request may change. Anything absent stays untouched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReschedulePatch {
    pub preferred_date: Option<String>,
    pub preferred_time: Option<String>,
}

/// Shared meeting store (meeting_id → meeting).
///
/// Every operation takes the lock exactly once, so create/get/update/delete
/// are each atomic with respect to one another under concurrent requests.
#[derive(Clone, Default)]
pub struct MeetingStore {
    meetings: Arc<RwLock<HashMap<String, Meeting>>>,
}

impl MeetingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new meeting: assigns a fresh UUID, derives both links, and
    /// stamps `status`/`createdAt`. Returns the stored record.
    pub async fn create(&self, request: MeetingRequest) -> Meeting {
        let id = Uuid::new_v4().to_string();
        let meeting = Meeting {
            meeting_link: links::meeting_link(&id),
            calendar_link: links::calendar_link(&id),
            id: id.clone(),
            request,
            status: "scheduled".to_string(),
            created_at: Utc::now(),
            updated_at: None,
        };

        let mut meetings = self.meetings.write().await;
        meetings.insert(id, meeting.clone());
        meeting
    }

    pub async fn get(&self, id: &str) -> Option<Meeting> {
        let meetings = self.meetings.read().await;
        meetings.get(id).cloned()
    }

    pub async fn list(&self) -> Vec<Meeting> {
        let meetings = self.meetings.read().await;
        meetings.values().cloned().collect()
    }

    /// Merge reschedule fields into an existing meeting and stamp
    /// `updatedAt`. Returns `None` for unknown ids without creating one.
    pub async fn update(&self, id: &str, patch: ReschedulePatch) -> Option<Meeting> {
        let mut meetings = self.meetings.write().await;
        let meeting = meetings.get_mut(id)?;

        if let Some(date) = patch.preferred_date {
            meeting.request.preferred_date = Some(date);
        }
        if let Some(time) = patch.preferred_time {
            meeting.request.preferred_time = Some(time);
        }
        meeting.updated_at = Some(Utc::now());

        Some(meeting.clone())
    }

    /// Remove a meeting. Its id is never reissued.
    pub async fn delete(&self, id: &str) -> Option<Meeting> {
        let mut meetings = self.meetings.write().await;
        meetings.remove(id)
    }
}
