//! The detector battery.
//!
//! Detectors run in a fixed order over the original and normalized views of
//! the message; the order is observable because the first violation in the
//! output becomes the primary one reported to callers. Phone detection runs
//! first and is the only family with more than one probe; every other kind
//! contributes at most one violation per message.

pub(crate) mod email;
pub(crate) mod meeting;
pub(crate) mod messaging;
pub(crate) mod payment;
pub(crate) mod phone;
pub(crate) mod social;
pub(crate) mod spelling;
pub(crate) mod ssn;
pub(crate) mod url;

use regex::{Match, Regex};
use smallvec::SmallVec;

use crate::message::Message;
use crate::types::Violation;

/// Violation lists are almost always tiny; keep them inline.
pub(crate) type Violations = SmallVec<[Violation; 4]>;

/// Run the full battery against a message.
pub(crate) fn detect_all(msg: &Message) -> Violations {
    let mut out = Violations::new();
    phone::detect(msg, &mut out);
    email::detect(msg, &mut out);
    url::detect(msg, &mut out);
    social::detect(msg, &mut out);
    payment::detect(msg, &mut out);
    messaging::detect(msg, &mut out);
    meeting::detect(msg, &mut out);
    ssn::detect(msg, &mut out);
    spelling::detect(msg, &mut out);
    out
}

/// Search the original text first, then the normalized text.
pub(crate) fn find_either<'m>(re: &Regex, msg: &'m Message) -> Option<Match<'m>> {
    re.find(msg.original()).or_else(|| re.find(msg.normalized()))
}
