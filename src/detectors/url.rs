use once_cell::sync::Lazy;
use regex::Regex;

use crate::message::Message;
use crate::pattern::compile;
use crate::types::{Violation, ViolationKind};

use super::{find_either, Violations};

/// Scheme, `www.`, or bare `host.tld` over common TLDs and shorteners.
static URL_RE: Lazy<Regex> = Lazy::new(|| {
    compile(r"(https?://|www\.|[a-z0-9-]+\.(com|net|org|in|edu|gov|co|io|me|us|ly|gl|link|to))")
});

/// Obfuscated hosts: `zoom[dot]us`, `example(dot)com`, `tinyurl(.)com`,
/// `example dot com`.
static OBFUSCATED_URL_RE: Lazy<Regex> =
    Lazy::new(|| compile(r"[a-z0-9-]+\s*(\[dot\]|\(dot\)|\(\.\)|dot)\s*[a-z]{2,}"));

pub(crate) fn detect(msg: &Message, out: &mut Violations) {
    if let Some(m) = find_either(&URL_RE, msg) {
        out.push(Violation::new(ViolationKind::Url, m.as_str()));
    } else if let Some(m) = OBFUSCATED_URL_RE.find(msg.original()) {
        out.push(Violation::new(ViolationKind::Url, m.as_str()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(text: &str) -> bool {
        let msg = Message::new(text);
        let mut out = Violations::new();
        detect(&msg, &mut out);
        !out.is_empty()
    }

    #[test]
    fn test_plain_urls() {
        assert!(hit("visit www.example.com"));
        assert!(hit("https://test.org"));
        assert!(hit("check bit.ly/abc"));
    }

    #[test]
    fn test_obfuscated_urls() {
        assert!(hit("zoom[dot]us"));
        assert!(hit("example(dot)com"));
        assert!(hit("tinyurl(.)com"));
        assert!(hit("check out example dot com"));
    }

    #[test]
    fn test_prose_is_clean() {
        assert!(!hit("what a beautiful day"));
        assert!(!hit("e.g. this works"));
    }
}
