//! Phone-number detection.
//!
//! The primary probe is a bare digit run in the normalized text; after
//! normalization that single pattern catches spaced, punctuated, word-spelled
//! and multilingual forms. A set of secondary probes covers shapes that
//! survive normalization (leet tokens, confusable letter runs, spelled-out
//! sequences). Secondary probes only run when the primary regex found no
//! digit run at all — even a run that was then discarded as a false positive
//! short-circuits them.
//!
//! Numeric text is everywhere (dates, prices, versions, room numbers), so
//! every candidate passes a false-positive filter keyed on safe context
//! words in the original text. An explicit contact-sharing phrase overrides
//! the filter for runs of ten or more digits.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::message::Message;
use crate::pattern::{compile, compile_exact};
use crate::types::{Violation, ViolationKind};

use super::payment::UPI_RE;
use super::Violations;

/// 5–15 consecutive digits in the normalized text.
static PHONE_RE: Lazy<Regex> = Lazy::new(|| compile_exact(r"\d{5,15}"));

/// Shorter digit groups become reportable next to a telephony word.
static PHONE_CONTEXT_RE: Lazy<Regex> = Lazy::new(|| {
    compile(r"(phone|call|tel|contact|number|dial|reach|whatsapp|mobile|cell|digits|upi)\s*:?\s*\+?\d{5,15}")
});

/// Runs mixing digits and number words.
static MIXED_RUN_RE: Lazy<Regex> =
    Lazy::new(|| compile(r"(nine|eight|seven|six|five|four|three|two|one|zero|\d)+"));

static NUMBER_WORD_RE: Lazy<Regex> =
    Lazy::new(|| compile(r"(nine|eight|seven|six|five|four|three|two|one|zero)"));

/// Seven or more number words run together.
static CONCAT_WORDS_RE: Lazy<Regex> =
    Lazy::new(|| compile(r"\b(nine|eight|seven|six|five|four|three|two|one|zero){7,}\b"));

/// Five or more cardinal words, optionally hyphen-joined.
static LONG_SPELLED_RE: Lazy<Regex> = Lazy::new(|| {
    compile(
        r"\b(?:one|two|three|four|five|six|seven|eight|nine|zero|ten|eleven|twelve|thirteen|fourteen|fifteen|sixteen|seventeen|eighteen|nineteen|twenty|thirty|forty|fifty|sixty|seventy|eighty|ninety|hundred|thousand)(?:-?(?:one|two|three|four|five|six|seven|eight|nine|zero|ten|eleven|twelve|thirteen|fourteen|fifteen|sixteen|seventeen|eighteen|nineteen|twenty|thirty|forty|fifty|sixty|seventy|eighty|ninety|hundred|thousand)){4,}\b",
    )
});

/// Seven digits interleaved with letters.
static OBFUSCATED_RE: Lazy<Regex> =
    Lazy::new(|| compile(r"[a-z]*\d[a-z]*\d[a-z]*\d[a-z]*\d[a-z]*\d[a-z]*\d[a-z]*\d"));

/// Three or more space-separated tokens each carrying a digit
/// (`n1n3 3ight s3v3n`).
static LEET_TOKENS_RE: Lazy<Regex> =
    Lazy::new(|| compile(r"\b[a-z]*\d[a-z0-9]*(\s+[a-z]*\d[a-z0-9]*){2,}"));

/// Letter runs that read as digits (`OOO-lll-OOO` for `000-111-000`).
static CONFUSABLE_RUN_RE: Lazy<Regex> =
    Lazy::new(|| compile_exact(r"[OoIl]{3,}[-\s]*[OoIl]{3,}[-\s]*[OoIl]{3,}"));

/// Leet zero that survived normalization inside a longer token.
static ZERO_LEET_RE: Lazy<Regex> = Lazy::new(|| compile(r"(zer0|z3r0)"));

/// Digits woven through letters, shorter than the seven-digit probe.
static LEET_MIXED_RE: Lazy<Regex> = Lazy::new(|| compile_exact(r"\d[a-z]+\d[a-z]+\d"));

/// "ask ext <name> at extension 1234" style relay instructions.
static EXTENSION_RE: Lazy<Regex> = Lazy::new(|| {
    compile(r"\b(extension|ext\.?|contact.*for)\s+[a-z]+\s+at\s+(extension|ext\.?)\s+\d{2,5}")
});

// Phrases that negate sharing intent: receiving a call, or pointing at a
// public/helpline number.
static INTENT_EXCLUDE_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"\bcall from\b",
        r"\bfor (help|customer care|support|assistance|appointments)\b",
        r"\b(public|toll.?free|helpline|emergency)\b",
    ]
    .iter()
    .map(|p| compile(p))
    .collect()
});

static INTENT_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"\b(call me|dial me|phone me|contact me|reach me|text me|message me)\b",
        r"\b(my number|my phone|my email|my contact|my upi)\b",
        r"\b(add me|dm me|ping me|hit me up)\b",
        r"\b(call|dial|phone|contact|reach|msg|message|whatsapp|telegram|tel|office)\s*:",
        r"\bnumber\s+(spelled|is|here)",
        r"\b(email me|send to|transfer via upi)\b",
        r"\bstill my number\b",
    ]
    .iter()
    .map(|p| compile(p))
    .collect()
});

/// Safe-context words: when any of these appears in the original text, a
/// digit run is treated as benign (dates, money, tech ids, locations,
/// medical values, public numbers, files).
static SAFE_CONTEXT_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        // date/time
        r"\b(date|time|timestamp|year|month|day|hour|minute|second|am|pm)\b",
        r"\b(dob|birth|born|birthdate|birthday)\b",
        r"\b(jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)\b",
        r"\b(monday|tuesday|wednesday|thursday|friday|saturday|sunday)\b",
        r"\b(2025|2024|2026|202[0-9])\b",
        // financial
        r"\b(price|cost|amount|\$|usd|eur|inr|order|invoice|reference|ref)\b",
        r"\b(payment|transaction|receipt|bill)\b",
        // technical
        r"\b(error|code|version|ip|ipv4|ipv6|port|server|api)\b",
        r"\b(serial|sku|model|product|item)\b",
        r"\b(ticket|case|id|number|no\.)\b",
        r"\b(otp|pin|password|passcode|verification|expires|temporary)\b",
        r"\b(shortcode|sms|subscribe|service)\b",
        r"\b(passport|travel|vaccine)\b",
        // location
        r"\b(room|floor|block|sector|building|address|suite)\b",
        r"\b(latitude|longitude|coordinates|geo)\b",
        // medical
        r"\b(clinic|hospital|appointment|prescription)\b",
        r"\b(\d+\s+patients?)\b",
        r"\b(test|lab|result|diagnosis|treatment|medication|dose|mg|ml|g/dl|ul)\b",
        r"\b(blood|pressure|temperature|heart|rate|level|hemoglobin|wbc|rbc)\b",
        r"\b(redacted|removed|phi|pii|hipaa)\b",
        r"\b(symptoms|chest pain|shortness|breath|experiencing)\b",
        // math/metric
        r"\b(equation|math|calculation|formula|result)\b",
        r"\b(score|points|rating|percentage)\b",
        r"\b(section|chapter|page|paragraph)\b",
        // public numbers
        r"\b(helpline|support|customer care|central booking|reception)\b",
        r"\b(1-?800|1800|toll.?free|public|emergency|dial|help)\b",
        r"\b(911|999|112|1098|100|101|102|108)\b",
        // files/data
        r"\b(file|report|document|log|csv|pdf|xlsx)\b",
        r"\b(timecode|duration|length)\b",
    ]
    .iter()
    .map(|p| compile(p))
    .collect()
});

static DATE_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"\b20[0-9]{2}[-/]?[0-1]?[0-9][-/]?[0-3]?[0-9]\b",
        r"\b[0-3]?[0-9][-/][0-1]?[0-9][-/]20[0-9]{2}\b",
        r"\b[0-1]?[0-9][-/][0-3]?[0-9][-/]20[0-9]{2}\b",
    ]
    .iter()
    .map(|p| compile_exact(p))
    .collect()
});

static TIME_RE: Lazy<Regex> =
    Lazy::new(|| compile_exact(r"\b[0-2]?[0-9]:[0-5][0-9](:[0-5][0-9])?\b"));

static IPV4_RE: Lazy<Regex> =
    Lazy::new(|| compile_exact(r"\b\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}\b"));

static VERSION_RE: Lazy<Regex> =
    Lazy::new(|| compile_exact(r"\b(v|version)?\s*\d+\.\d+(\.\d+)?\b"));

static CURRENCY_RE: Lazy<Regex> = Lazy::new(|| compile_exact(r"[$€£¥]\s*[\d,]+\.?\d*"));

static PREFIXED_ID_RE: Lazy<Regex> = Lazy::new(|| compile_exact(r"\b[A-Z]{2,}-\d+"));

static CARD_CONTEXT_RE: Lazy<Regex> =
    Lazy::new(|| compile(r"\b(4111|5500|card|bank card|test card)\s*\d{4}\s*\d{4}\s*\d{4}\b"));

static CARD_DASHED_RE: Lazy<Regex> = Lazy::new(|| compile_exact(r"\b\d{4}-\d{4}-\d{4}-\d{4}\b"));

static PASSPORT_RE: Lazy<Regex> = Lazy::new(|| compile_exact(r"\b[A-Z]\d{7,9}\b"));

fn digit_count(s: &str) -> usize {
    s.chars().filter(|c| c.is_ascii_digit()).count()
}

/// Contact-sharing intent, as the phone battery understands it. Broader than
/// the engine-level intent phrases, with exclusions for received calls and
/// public numbers.
pub(crate) fn sharing_intent(lower: &str) -> bool {
    if INTENT_EXCLUDE_RES.iter().any(|re| re.is_match(lower)) {
        return false;
    }
    INTENT_RES.iter().any(|re| re.is_match(lower))
}

/// Is this candidate more plausibly benign numeric content?
fn is_false_positive(matched: &str, msg: &Message) -> bool {
    if SAFE_CONTEXT_RES.iter().any(|re| re.is_match(msg.lower())) {
        return true;
    }
    if DATE_RES.iter().any(|re| re.is_match(msg.original())) {
        return true;
    }
    if TIME_RE.is_match(msg.original())
        || IPV4_RE.is_match(msg.original())
        || VERSION_RE.is_match(msg.lower())
        || CURRENCY_RE.is_match(msg.original())
        || PREFIXED_ID_RE.is_match(msg.original())
        || CARD_CONTEXT_RE.is_match(msg.original())
        || CARD_DASHED_RE.is_match(msg.original())
        || PASSPORT_RE.is_match(msg.original())
    {
        return true;
    }

    // Too few or too many digits to be a dialable number.
    let digits = digit_count(matched);
    digits < 5 || digits > 15
}

/// A digit run that is really the local part of a UPI id belongs to the UPI
/// detector, which reports it with the provider suffix attached.
fn ceded_to_upi(run: &str, msg: &Message) -> bool {
    UPI_RE
        .find(msg.original())
        .map_or(false, |m| m.as_str().contains(run))
        || UPI_RE
            .find(msg.normalized())
            .map_or(false, |m| m.as_str().contains(run))
}

fn push(out: &mut Violations, matched: &str) {
    out.push(Violation::new(ViolationKind::PhoneNumber, matched));
}

/// Gate a secondary candidate: explicit intent overrides the filter.
fn gated_push(out: &mut Violations, matched: &str, msg: &Message) {
    if sharing_intent(msg.lower()) || !is_false_positive(matched, msg) {
        push(out, matched);
    }
}

pub(crate) fn detect(msg: &Message, out: &mut Violations) {
    let primary = PHONE_RE.find(msg.normalized());
    if let Some(m) = primary {
        let run = m.as_str();
        if !ceded_to_upi(run, msg) {
            if sharing_intent(msg.lower()) && digit_count(run) >= 10 {
                // Intent plus a full-length number beats any safe context.
                push(out, run);
            } else if !is_false_positive(run, msg) {
                push(out, run);
            }
        }
    }
    let had_digit_run = primary.is_some();

    if !had_digit_run {
        if let Some(m) = PHONE_CONTEXT_RE.find(msg.original()) {
            push(out, m.as_str());
        }
        detect_mixed_runs(msg, out);
        if let Some(m) = CONCAT_WORDS_RE.find(msg.original()) {
            gated_push(out, m.as_str(), msg);
        }
        if let Some(m) = LONG_SPELLED_RE.find(msg.original()) {
            gated_push(out, m.as_str(), msg);
        }
        if let Some(m) = OBFUSCATED_RE.find(msg.normalized()) {
            gated_push(out, m.as_str(), msg);
        }
        if let Some(m) = LEET_TOKENS_RE.find(msg.original()) {
            gated_push(out, m.as_str(), msg);
        }
        if let Some(m) = CONFUSABLE_RUN_RE.find(msg.original()) {
            gated_push(out, m.as_str(), msg);
        }
        detect_zero_leet(msg, out);
        detect_leet_mixed(msg, out);
    }

    // Relay-style instructions carry a number regardless of the digit run.
    if let Some(m) = EXTENSION_RE.find(msg.original()) {
        push(out, m.as_str());
    }
}

/// Mixed digit/word runs; the first gated hit wins.
fn detect_mixed_runs(msg: &Message, out: &mut Violations) {
    for m in MIXED_RUN_RE.find_iter(msg.normalized()) {
        let s = m.as_str();
        if s.chars().count() < 5 {
            continue;
        }
        let numeric = digit_count(s) + NUMBER_WORD_RE.find_iter(s).count();
        if numeric >= 4 && (sharing_intent(msg.lower()) || !is_false_positive(s, msg)) {
            push(out, s);
            break;
        }
    }
}

/// `zer0`/`z3r0` with digits nearby reads as an obfuscated zero.
fn detect_zero_leet(msg: &Message, out: &mut Violations) {
    let m = match ZERO_LEET_RE.find(msg.normalized()) {
        Some(m) => m,
        None => return,
    };
    let context = char_window(msg.normalized(), m.start(), m.end(), 10).trim();
    if digit_count(context) >= 3 {
        gated_push(out, context, msg);
    }
}

fn detect_leet_mixed(msg: &Message, out: &mut Violations) {
    let m = match LEET_MIXED_RE.find(msg.normalized()) {
        Some(m) => m,
        None => return,
    };
    let s = m.as_str();
    if digit_count(s) >= 3 && s.chars().count() >= 5 {
        gated_push(out, s, msg);
    }
}

/// Slice `n` characters of context on each side of a byte range.
fn char_window(s: &str, start: usize, end: usize, n: usize) -> &str {
    let mut lo = start;
    for _ in 0..n {
        match s[..lo].chars().next_back() {
            Some(c) => lo -= c.len_utf8(),
            None => break,
        }
    }
    let mut hi = end;
    for _ in 0..n {
        match s[hi..].chars().next() {
            Some(c) => hi += c.len_utf8(),
            None => break,
        }
    }
    &s[lo..hi]
}
