//! Join-link and calendar-invite URL synthesis.

use chrono::{DateTime, Duration, Utc};

const JOIN_BASE_URL: &str = "https://meet.leadmate.com/join";
const CALENDAR_RENDER_URL: &str = "https://calendar.google.com/calendar/render";
const CALENDAR_TITLE: &str = "LeadMate CRM Demo";

/// Joinable meeting URL for a meeting id.
pub fn meeting_link(meeting_id: &str) -> String {
    format!("{JOIN_BASE_URL}/{meeting_id}")
}

/// Google Calendar invite URL for a one-hour slot starting now.
///
/// The instant is sampled once here; the stored link is never recomputed.
pub fn calendar_link(meeting_id: &str) -> String {
    calendar_link_at(meeting_id, Utc::now())
}

fn calendar_link_at(meeting_id: &str, start: DateTime<Utc>) -> String {
    let end = start + Duration::hours(1);
    let join = meeting_link(meeting_id);
    format!(
        "{CALENDAR_RENDER_URL}?action=TEMPLATE&text={CALENDAR_TITLE}\
         &dates={}/{}\
         &details=Meeting with Martin from LeadMate CRM%0A%0AMeeting Link: {join}\
         &location={join}",
        compact_utc(start),
        compact_utc(end),
    )
}

/// Compact UTC timestamp ("YYYYMMDDTHHMMSSZ") as Google Calendar expects,
/// sub-second precision dropped.
fn compact_utc(instant: DateTime<Utc>) -> String {
    instant.format("%Y%m%dT%H%M%SZ").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn meeting_link_appends_id_as_path_segment() {
        assert_eq!(
            meeting_link("abc-123"),
            "https://meet.leadmate.com/join/abc-123"
        );
    }

    #[test]
    fn calendar_link_encodes_one_hour_window() {
        let start = Utc.with_ymd_and_hms(2026, 8, 7, 15, 30, 0).unwrap();
        let url = calendar_link_at("abc-123", start);

        assert!(url.starts_with("https://calendar.google.com/calendar/render?action=TEMPLATE"));
        assert!(url.contains("text=LeadMate CRM Demo"));
        assert!(url.contains("&dates=20260807T153000Z/20260807T163000Z"));
        assert!(url.contains("&location=https://meet.leadmate.com/join/abc-123"));
        assert!(url.contains("Meeting Link: https://meet.leadmate.com/join/abc-123"));
    }

    #[test]
    fn compact_utc_truncates_subseconds() {
        let instant =
            Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap() + Duration::milliseconds(789);
        assert_eq!(compact_utc(instant), "20260102T030405Z");
    }
}
