use once_cell::sync::Lazy;
use regex::Regex;

use crate::message::Message;
use crate::pattern::compile;
use crate::types::{Violation, ViolationKind};

use super::{find_either, Violations};

static MEETING_RE: Lazy<Regex> =
    Lazy::new(|| compile(r"(zoom\.us/|meet\.google\.com/|teams\.microsoft\.com/|webex\.com/)"));

/// Conference codes like `abc-defg-hij` near a meeting trigger word.
static MEET_CODE_RE: Lazy<Regex> =
    Lazy::new(|| compile(r"(meet|zoom|code|join|meeting).*\b[a-z]{3,4}-[a-z]{3,5}-[a-z]{3,4}\b"));

static CALENDAR_RE: Lazy<Regex> =
    Lazy::new(|| compile(r"(calendar\.google\.com/|outlook\.live\.com/calendar)"));

pub(crate) fn detect(msg: &Message, out: &mut Violations) {
    if let Some(m) = find_either(&MEETING_RE, msg) {
        out.push(Violation::new(ViolationKind::MeetingLink, m.as_str()));
    }
    if let Some(m) = MEET_CODE_RE.find(msg.original()) {
        out.push(Violation::new(ViolationKind::MeetingCode, m.as_str()));
    }
    if let Some(m) = find_either(&CALENDAR_RE, msg) {
        out.push(Violation::new(ViolationKind::CalendarLink, m.as_str()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(text: &str) -> Vec<ViolationKind> {
        let msg = Message::new(text);
        let mut out = Violations::new();
        detect(&msg, &mut out);
        out.iter().map(|v| v.kind).collect()
    }

    #[test]
    fn test_meeting_links() {
        assert!(kinds("zoom.us/j/123").contains(&ViolationKind::MeetingLink));
        assert!(kinds("teams.microsoft.com/meeting").contains(&ViolationKind::MeetingLink));
    }

    #[test]
    fn test_meet_code() {
        let found = kinds("meet.google.com/abc-defg-hij");
        assert!(found.contains(&ViolationKind::MeetingLink));
        assert!(found.contains(&ViolationKind::MeetingCode));
        assert!(kinds("join us at abc-defg-hij").contains(&ViolationKind::MeetingCode));
    }

    #[test]
    fn test_calendar_links() {
        assert_eq!(
            kinds("calendar.google.com/someone"),
            vec![ViolationKind::CalendarLink]
        );
        assert_eq!(
            kinds("outlook.live.com/calendar"),
            vec![ViolationKind::CalendarLink]
        );
    }

    #[test]
    fn test_meeting_words_alone_are_clean() {
        assert!(kinds("the meeting is at 3 pm").is_empty());
        assert!(kinds("join us tomorrow").is_empty());
    }
}
