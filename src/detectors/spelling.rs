use once_cell::sync::Lazy;
use regex::Regex;

use crate::message::Message;
use crate::pattern::compile;
use crate::types::{Violation, ViolationKind};

use super::Violations;

/// Four or more consecutive single-letter tokens, the classic way to spell
/// out an address one character at a time.
static LETTER_SPELLING_RE: Lazy<Regex> = Lazy::new(|| compile(r"\b([a-z]\s+){3,}[a-z]\b"));

pub(crate) fn detect(msg: &Message, out: &mut Violations) {
    if let Some(m) = LETTER_SPELLING_RE.find(msg.original()) {
        out.push(Violation::new(ViolationKind::LetterSpelling, m.as_str()));
    }
}
