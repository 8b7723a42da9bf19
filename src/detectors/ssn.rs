use once_cell::sync::Lazy;
use regex::Regex;

use crate::message::Message;
use crate::pattern::compile;
use crate::types::{Violation, ViolationKind};

use super::Violations;

/// 3-2-4 digit groups with optional separators (including en/em dashes).
static SSN_RE: Lazy<Regex> =
    Lazy::new(|| compile(r"\b\d{3}[\s.\-–—]?\d{2}[\s.\-–—]?\d{4}\b"));

static SSN_CONTEXT_RE: Lazy<Regex> = Lazy::new(|| compile(r"\b(ssn|social security)\b"));

/// Date-ish words that make a 9-digit group more likely to be a date span.
static DATE_TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| compile(r"\b(date|dob|birth|born|appointment|on|at)\b"));

/// A candidate is only reported when the message names SSNs explicitly, or
/// when there is no date context and the digits count to exactly nine.
pub(crate) fn detect(msg: &Message, out: &mut Violations) {
    let m = match SSN_RE.find(msg.original()) {
        Some(m) => m,
        None => return,
    };
    if SSN_CONTEXT_RE.is_match(msg.lower()) {
        out.push(Violation::new(ViolationKind::Ssn, m.as_str()));
    } else if !DATE_TOKEN_RE.is_match(msg.lower()) {
        let digits = m.as_str().chars().filter(|c| c.is_ascii_digit()).count();
        if digits == 9 {
            out.push(Violation::new(ViolationKind::Ssn, m.as_str()));
        }
    }
}
