use super::state::AppState;
use crate::error::ApiError;
use crate::extract::{parse_meeting_request, strip_meeting_blocks};
use crate::history::normalize_history;
use crate::model::ModelError;
use crate::store::{Meeting, ReschedulePatch};
use axum::{
    extract::{Path, State},
    response::Json,
};
use chrono::Utc;
use serde::Serialize;
use serde_json::Value;
use tracing::info;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct MeetingsResponse {
    pub meetings: Vec<Meeting>,
}

#[derive(Debug, Serialize)]
pub struct MeetingResponse {
    pub meeting: Meeting,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub meeting: Option<MeetingSummary>,
}

/// Compact summary of a freshly scheduled meeting, returned alongside the
/// rewritten chat reply.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingSummary {
    pub id: String,
    pub meeting_link: String,
    pub calendar_link: String,
    pub scheduled_for: String,
    pub meeting_type: String,
}

#[derive(Debug, Serialize)]
pub struct RescheduleResponse {
    pub message: String,
    pub meeting: Meeting,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelResponse {
    pub message: String,
    pub meeting_id: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /
/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "Server is running".to_string(),
        timestamp: Utc::now().to_rfc3339(),
    })
}

/// POST /chat
/// Run one turn of the sales conversation: normalize the client history,
/// ask the model for a reply, and if the reply carries a scheduling block,
/// persist the meeting and rewrite the reply with a confirmation.
pub async fn chat(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<ChatResponse>, ApiError> {
    // Validate input before touching the model
    let message = body
        .get("message")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|message| !message.is_empty())
        .ok_or_else(|| {
            ApiError::InvalidInput("Request body must contain a valid \"message\" string.".into())
        })?;

    let history = body.get("history").cloned().unwrap_or(Value::Null);
    if !history.is_array() {
        return Err(ApiError::InvalidInput(
            "Request body must contain \"history\" as an array.".into(),
        ));
    }

    info!("Received message: {}", message);
    info!(
        "Received history length: {}",
        history.as_array().map(Vec::len).unwrap_or(0)
    );

    let history = normalize_history(&history);

    let reply = state
        .model
        .generate(history, message)
        .await
        .map_err(|err| match err {
            ModelError::HistoryShape => ApiError::InvalidHistoryShape,
            other => ApiError::Internal(other.into()),
        })?;

    if let Some(request) = parse_meeting_request(&reply) {
        let meeting = state.store.create(request).await;
        info!("Meeting scheduled: {}", meeting.id);

        let summary = MeetingSummary {
            id: meeting.id.clone(),
            meeting_link: meeting.meeting_link.clone(),
            calendar_link: meeting.calendar_link.clone(),
            scheduled_for: format!(
                "{} at {}",
                meeting.request.preferred_date.as_deref().unwrap_or("TBD"),
                meeting.request.preferred_time.as_deref().unwrap_or("TBD"),
            ),
            meeting_type: meeting
                .request
                .meeting_type
                .clone()
                .unwrap_or_else(|| "Demo".to_string()),
        };

        let mut text = strip_meeting_blocks(&reply);
        text.push_str(&confirmation_paragraph(&summary));

        info!("AI Response: {}", text);
        return Ok(Json(ChatResponse {
            message: text,
            meeting: Some(summary),
        }));
    }

    info!("AI Response: {}", reply);
    Ok(Json(ChatResponse {
        message: reply,
        meeting: None,
    }))
}

/// GET /meetings
/// List all scheduled meetings
pub async fn list_meetings(State(state): State<AppState>) -> Json<MeetingsResponse> {
    Json(MeetingsResponse {
        meetings: state.store.list().await,
    })
}

/// GET /meetings/:meeting_id
/// Get a specific meeting
pub async fn get_meeting(
    State(state): State<AppState>,
    Path(meeting_id): Path<String>,
) -> Result<Json<MeetingResponse>, ApiError> {
    let meeting = state
        .store
        .get(&meeting_id)
        .await
        .ok_or(ApiError::NotFound)?;

    Ok(Json(MeetingResponse { meeting }))
}

/// PUT /meetings/:meeting_id
/// Reschedule a meeting (date and/or time)
pub async fn reschedule_meeting(
    State(state): State<AppState>,
    Path(meeting_id): Path<String>,
    Json(patch): Json<ReschedulePatch>,
) -> Result<Json<RescheduleResponse>, ApiError> {
    let meeting = state
        .store
        .update(&meeting_id, patch)
        .await
        .ok_or(ApiError::NotFound)?;

    info!("Meeting rescheduled: {}", meeting_id);

    Ok(Json(RescheduleResponse {
        message: "Meeting rescheduled successfully".to_string(),
        meeting,
    }))
}

/// DELETE /meetings/:meeting_id
/// Cancel a meeting
pub async fn cancel_meeting(
    State(state): State<AppState>,
    Path(meeting_id): Path<String>,
) -> Result<Json<CancelResponse>, ApiError> {
    state
        .store
        .delete(&meeting_id)
        .await
        .ok_or(ApiError::NotFound)?;

    info!("Meeting cancelled: {}", meeting_id);

    Ok(Json(CancelResponse {
        message: "Meeting cancelled successfully".to_string(),
        meeting_id,
    }))
}

/// Human-readable confirmation appended to the reply after scheduling.
fn confirmation_paragraph(summary: &MeetingSummary) -> String {
    format!(
        "\n\n✅ Perfect! I've scheduled your {} for {}.\n\n\
         📅 **Meeting Details:**\n\
         • Meeting ID: {}\n\
         • Join Link: {}\n\
         • Add to Calendar: Click the calendar link below\n\n\
         I'll send you a confirmation email shortly. Looking forward to our meeting!",
        summary.meeting_type.to_lowercase(),
        summary.scheduled_for,
        summary.id,
        summary.meeting_link,
    )
}
