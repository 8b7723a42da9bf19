use once_cell::sync::Lazy;
use regex::Regex;

use crate::message::Message;
use crate::pattern::compile;
use crate::types::{Violation, ViolationKind};

use super::{find_either, Violations};

/// UPI virtual payment address: `name@provider` over known provider suffixes.
/// Shared with the phone battery, which cedes digit runs that are really the
/// local part of a UPI id.
pub(crate) static UPI_RE: Lazy<Regex> = Lazy::new(|| {
    compile(
        r"\b[a-z0-9._-]+(@|at)(paytm|phonepe|googlepay|gpay|okaxis|oksbi|okhdfcbank|okicici|ybl|ibl|axl|bank|upi)\b",
    )
});

/// Generic `something@something` with explicit payment context.
static UPI_CONTEXT_RE: Lazy<Regex> =
    Lazy::new(|| compile(r"(upi|payment|pay)\s*:?\s*[a-z0-9._-]+(\s*@\s*|\s+at\s+)[a-z]+"));

/// Payment services: profile URLs, `$cashtag`, and bare service names with
/// common spacing/hyphen obfuscations, including Indian rails.
static PAYMENT_RE: Lazy<Regex> = Lazy::new(|| {
    compile(
        r"(?:paypal\.me/|venmo\.com/|cash\.app/|\$[a-z0-9_]{3,}|\b(?:paypal|pay pal|pay-pal|pp|venmo|ven mo|ven-mo|cashapp|cash app|cash-app|ca\$\$app|zelle|zel le|stripe|stri pe|upi|u p i|u\.p\.i|gpay|g pay|phonepe|phone pe|paytm|pay tm|pay-tm|bhim|bharatpe|bharat pe|imps|neft|rtgs)\b)",
    )
});

pub(crate) fn detect(msg: &Message, out: &mut Violations) {
    if let Some(m) = find_either(&UPI_RE, msg) {
        out.push(Violation::new(ViolationKind::UpiId, m.as_str()));
    } else if let Some(m) = UPI_CONTEXT_RE.find(msg.original()) {
        out.push(Violation::new(ViolationKind::UpiId, m.as_str()));
    }
    if let Some(m) = find_either(&PAYMENT_RE, msg) {
        out.push(Violation::new(ViolationKind::PaymentHandle, m.as_str()));
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
    fn test_upi_id() {
        assert_eq!(
            kinds("pay 9876543210@paytm"),
            vec![ViolationKind::UpiId, ViolationKind::PaymentHandle]
        );
        assert!(kinds("send to user@okaxis").contains(&ViolationKind::UpiId));
    }

    #[test]
    fn test_upi_with_context() {
        assert!(kinds("upi: myname at okbank").contains(&ViolationKind::UpiId));
    }

    #[test]
    fn test_payment_services() {
        assert_eq!(kinds("paypal.me/username"), vec![ViolationKind::PaymentHandle]);
        assert!(kinds("venmo me at $username").contains(&ViolationKind::PaymentHandle));
        assert!(kinds("use g pay or phonepe").contains(&ViolationKind::PaymentHandle));
    }

    #[test]
    fn test_prose_is_clean() {
        assert!(kinds("the bill was split evenly").is_empty());
        assert!(kinds("happy to help").is_empty());
    }
}
