//! Meeting request extraction from model replies.
//!
//! The system prompt instructs the model to emit scheduling intent inside a
//! `[SCHEDULE_MEETING]...[/SCHEDULE_MEETING]` block with `Label: value`
//! lines. Extraction is a best-effort single pass: a missing block means no
//! meeting, a partially filled block yields a partial record.

use regex::Regex;
use serde::Serialize;

/// Fields parsed out of a `[SCHEDULE_MEETING]` block. All optional: the
/// model fills in whatever it collected, and values are taken verbatim
/// (no email/phone/date validation).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meeting_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

fn block_pattern() -> Regex {
    Regex::new(r"(?s)\[SCHEDULE_MEETING\](.*?)\[/SCHEDULE_MEETING\]").unwrap()
}

/// Match a `Label: value` field inside the block. Case-insensitive,
/// unanchored, value runs to end of line; first match wins.
fn field(block: &str, label: &str) -> Option<String> {
    let pattern = Regex::new(&format!(r"(?i){}:\s*(.+)", regex::escape(label))).unwrap();
    pattern
        .captures(block)
        .and_then(|caps| caps.get(1))
        .map(|value| value.as_str().trim().to_string())
}

/// Parse the first `[SCHEDULE_MEETING]` block out of a model reply.
///
/// Returns `None` when no delimited block exists. A block with no
/// recognizable fields still counts as a (fully empty) meeting request.
pub fn parse_meeting_request(reply: &str) -> Option<MeetingRequest> {
    let caps = block_pattern().captures(reply)?;
    let block = caps.get(1)?.as_str();

    Some(MeetingRequest {
        name: field(block, "Name"),
        email: field(block, "Email"),
        phone: field(block, "Phone"),
        preferred_date: field(block, "Preferred Date"),
        preferred_time: field(block, "Preferred Time"),
        meeting_type: field(block, "Meeting Type"),
        notes: field(block, "Notes"),
    })
}

/// Remove every `[SCHEDULE_MEETING]` block from a reply and trim the result.
/// Used after a successful extraction so the user never sees the raw block.
pub fn strip_meeting_blocks(reply: &str) -> String {
    block_pattern().replace_all(reply, "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_REPLY: &str = "Great, let me get that set up!\n\
        [SCHEDULE_MEETING]\n\
        Name: Jane Doe\n\
        Email: jane@x.com\n\
        Phone: 555-0100\n\
        Preferred Date: next Tuesday\n\
        Preferred Time: 3pm\n\
        Meeting Type: Demo\n\
        Notes: wants pricing details\n\
        [/SCHEDULE_MEETING]\n\
        Talk soon!";

    #[test]
    fn extracts_all_seven_fields_verbatim() {
        let meeting = parse_meeting_request(FULL_REPLY).unwrap();
        assert_eq!(meeting.name.as_deref(), Some("Jane Doe"));
        assert_eq!(meeting.email.as_deref(), Some("jane@x.com"));
        assert_eq!(meeting.phone.as_deref(), Some("555-0100"));
        assert_eq!(meeting.preferred_date.as_deref(), Some("next Tuesday"));
        assert_eq!(meeting.preferred_time.as_deref(), Some("3pm"));
        assert_eq!(meeting.meeting_type.as_deref(), Some("Demo"));
        assert_eq!(meeting.notes.as_deref(), Some("wants pricing details"));
    }

    #[test]
    fn no_block_means_no_meeting() {
        assert_eq!(parse_meeting_request("Happy to help with CRM questions!"), None);
    }

    #[test]
    fn unclosed_block_means_no_meeting() {
        let reply = "[SCHEDULE_MEETING]\nName: Jane\n";
        assert_eq!(parse_meeting_request(reply), None);
    }

    #[test]
    fn partial_block_yields_partial_record() {
        let reply = "[SCHEDULE_MEETING]\nName: Jane\nPreferred Time: 3pm\n[/SCHEDULE_MEETING]";
        let meeting = parse_meeting_request(reply).unwrap();
        assert_eq!(meeting.name.as_deref(), Some("Jane"));
        assert_eq!(meeting.preferred_time.as_deref(), Some("3pm"));
        assert_eq!(meeting.email, None);
        assert_eq!(meeting.preferred_date, None);
    }

    #[test]
    fn labels_match_case_insensitively() {
        let reply = "[SCHEDULE_MEETING]\nNAME: Jane\npreferred date: Friday\n[/SCHEDULE_MEETING]";
        let meeting = parse_meeting_request(reply).unwrap();
        assert_eq!(meeting.name.as_deref(), Some("Jane"));
        assert_eq!(meeting.preferred_date.as_deref(), Some("Friday"));
    }

    #[test]
    fn values_are_trimmed() {
        let reply = "[SCHEDULE_MEETING]\nName:    Jane Doe   \n[/SCHEDULE_MEETING]";
        let meeting = parse_meeting_request(reply).unwrap();
        assert_eq!(meeting.name.as_deref(), Some("Jane Doe"));
    }

    #[test]
    fn only_first_block_is_parsed() {
        let reply = "[SCHEDULE_MEETING]\nName: First\n[/SCHEDULE_MEETING]\n\
            [SCHEDULE_MEETING]\nName: Second\n[/SCHEDULE_MEETING]";
        let meeting = parse_meeting_request(reply).unwrap();
        assert_eq!(meeting.name.as_deref(), Some("First"));
    }

    #[test]
    fn strip_removes_every_block_and_trims() {
        let stripped = strip_meeting_blocks(FULL_REPLY);
        assert!(!stripped.contains("[SCHEDULE_MEETING]"));
        assert!(stripped.starts_with("Great, let me get that set up!"));
        assert!(stripped.ends_with("Talk soon!"));

        let two_blocks = "a [SCHEDULE_MEETING]x[/SCHEDULE_MEETING] b [SCHEDULE_MEETING]y[/SCHEDULE_MEETING]";
        assert_eq!(strip_meeting_blocks(two_blocks), "a  b");
    }

    #[test]
    fn strip_leaves_replies_without_blocks_alone() {
        assert_eq!(strip_meeting_blocks("no markers here"), "no markers here");
    }
}
