use once_cell::sync::Lazy;
use regex::Regex;

use crate::message::Message;
use crate::pattern::compile;
use crate::types::{Violation, ViolationKind};

use super::Violations;

/// `@handle`, or a trigger word ("dm", "add", "follow", ...) followed by a
/// handle-like token.
static HANDLE_RE: Lazy<Regex> = Lazy::new(|| {
    compile(
        r"(@[a-z0-9._-]{3,}|\b(dm|add|follow|message|msg|ping|text|contact|discord|telegram|instagram|twitter|x\.com)\s+(me\s+)?(at|on|@|:)?\s+[a-z0-9._-]{3,})",
    )
});

/// Legacy discord tag, `username#1234`.
static DISCORD_RE: Lazy<Regex> = Lazy::new(|| compile(r"\b[a-z0-9._-]+#\d{4}\b"));

pub(crate) fn detect(msg: &Message, out: &mut Violations) {
    if let Some(m) = HANDLE_RE.find(msg.original()) {
        // An `@provider` tail inside a UPI id is payment routing, not a
        // social handle; the UPI detector reports it.
        let inside_upi = super::payment::UPI_RE
            .find(msg.original())
            .map_or(false, |u| u.start() <= m.start() && m.end() <= u.end());
        if !inside_upi {
            out.push(Violation::new(ViolationKind::SocialMediaHandle, m.as_str()));
        }
    }
    if let Some(m) = DISCORD_RE.find(msg.original()) {
        out.push(Violation::new(ViolationKind::DiscordTag, m.as_str()));
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
    fn test_at_handle() {
        assert_eq!(kinds("add me @insta_user123"), vec![ViolationKind::SocialMediaHandle]);
        assert_eq!(kinds("my snap is @cooluser"), vec![ViolationKind::SocialMediaHandle]);
    }

    #[test]
    fn test_trigger_word_handle() {
        assert_eq!(kinds("follow me at twitter_handle"), vec![ViolationKind::SocialMediaHandle]);
        assert_eq!(kinds("dm me on insta_name"), vec![ViolationKind::SocialMediaHandle]);
    }

    #[test]
    fn test_discord_tag() {
        assert_eq!(kinds("find me: someuser#1234"), vec![ViolationKind::DiscordTag]);
    }

    #[test]
    fn test_bare_at_is_clean() {
        assert!(kinds("@").is_empty());
        assert!(kinds("@ok").is_empty());
        assert!(kinds("see you at noon").is_empty());
    }

    #[test]
    fn test_upi_suffix_is_not_a_handle() {
        assert!(kinds("pay 9876543210@paytm").is_empty());
        assert!(kinds("send to user@okaxis").is_empty());
    }
}
