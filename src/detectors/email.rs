use once_cell::sync::Lazy;
use regex::Regex;

use crate::message::Message;
use crate::pattern::compile;
use crate::types::{Violation, ViolationKind};

use super::Violations;

/// Plain address, tolerating `at`/`dot` stand-ins, over a fixed TLD set.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    compile(
        r"[a-z0-9._%+-]+(?:@|at)[a-z0-9.-]+(?:\.|dot)(?:com|net|org|in|edu|gov|co|io|me|us|info|biz|live|pro)",
    )
});

/// Address shape in the normalized text, where separators are gone and the
/// `at`/`dot` words run together with their neighbors.
static EMAIL_COMPACT_RE: Lazy<Regex> =
    Lazy::new(|| compile(r"[a-z0-9]{2,}(?:at|@)[a-z0-9]{2,}(?:dot|\.)[a-z]{2,}"));

/// Unicode/fullwidth variant (IDN hosts, `＠`, `．`).
static EMAIL_UNICODE_RE: Lazy<Regex> = Lazy::new(|| {
    compile(
        r"[a-z0-9\x{0100}-\x{ffff}._-]+[@＠][a-z0-9\x{0100}-\x{ffff}._-]+[.\x{ff0e}][a-z\x{0100}-\x{ffff}]{2,}",
    )
});

/// Placeholder form, e.g. `<user>@<domain>.com`.
static EMAIL_PLACEHOLDER_RE: Lazy<Regex> =
    Lazy::new(|| compile(r"<[a-z]+>\s*[@＠]\s*<[a-z]+>\s*[.\x{ff0e}]\s*[a-z]{2,}"));

/// Fully spelled-out form: `john dot smith at example`.
static EMAIL_SPELLED_RE: Lazy<Regex> =
    Lazy::new(|| compile(r"\b[a-z]+\s*(dot|at)\s*[a-z]+\s*(dot|at)\s*[a-z]+"));

pub(crate) fn detect(msg: &Message, out: &mut Violations) {
    let found = EMAIL_RE
        .find(msg.original())
        .or_else(|| EMAIL_RE.find(msg.normalized()))
        .or_else(|| EMAIL_COMPACT_RE.find(msg.normalized()))
        .or_else(|| EMAIL_UNICODE_RE.find(msg.original()))
        .or_else(|| EMAIL_PLACEHOLDER_RE.find(msg.original()))
        .or_else(|| EMAIL_SPELLED_RE.find(msg.original()));
    if let Some(m) = found {
        out.push(Violation::new(ViolationKind::EmailAddress, m.as_str()));
    }
}
