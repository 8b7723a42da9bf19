//! Explicit contact-sharing intent.
//!
//! A fixed phrase list, matched with word boundaries against the original
//! text. Intent raises severity and feeds the medium/low decision tiers; the
//! phone detector keeps its own, broader notion of intent (see
//! `detectors::phone`).

use once_cell::sync::Lazy;
use regex::Regex;

use crate::pattern::compile;

static INTENT_PHRASES: &[&str] = &[
    r"\bcontact\s+me\b",
    r"\breach\s+(out\s+to\s+)?me\b",
    r"\bcall\s+me\b",
    r"\btext\s+me\b",
    r"\bdm\s+me\b",
    r"\badd\s+me\b",
    r"\bmessage\s+me\b",
    r"\bmy\s+number\b",
    r"\bmy\s+email\b",
    r"\bmy\s+whatsapp\b",
    r"\bmy\s+telegram\b",
    r"\bmy\s+insta(gram)?\b",
    r"\bmy\s+snap(chat)?\b",
    r"\bget\s+in\s+touch\b",
    r"\bhit\s+me\s+up\b",
    r"\bping\s+me\b",
    r"\bshoot\s+me\s+(a\s+)?(message|text|email)\b",
];

static INTENT_RES: Lazy<Vec<Regex>> =
    Lazy::new(|| INTENT_PHRASES.iter().map(|p| compile(p)).collect());

/// Does the message announce the author's wish to share contact details?
pub(crate) fn has_contact_intent(text: &str) -> bool {
    if text.is_empty() {
        return false;
    }
    INTENT_RES.iter().any(|re| re.is_match(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intent_phrases() {
        assert!(has_contact_intent("Contact me after 5"));
        assert!(has_contact_intent("reach out to me anytime"));
        assert!(has_contact_intent("that's my number"));
        assert!(has_contact_intent("hit me up"));
        assert!(has_contact_intent("shoot me a text"));
    }

    #[test]
    fn test_no_intent() {
        assert!(!has_contact_intent("the meeting is at 3 pm"));
        assert!(!has_contact_intent("I scored 9 out of 10"));
        assert!(!has_contact_intent(""));
    }
}
