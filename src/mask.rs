//! Redaction helpers for displaying or logging moderated text.

use regex::Regex;

use crate::types::{ModerationResult, ViolationKind};

fn placeholder(kind: ViolationKind) -> &'static str {
    match kind {
        ViolationKind::PhoneNumber => "[PHONE_REDACTED]",
        ViolationKind::EmailAddress => "[EMAIL_REDACTED]",
        ViolationKind::UpiId => "[UPI_REDACTED]",
        ViolationKind::Url | ViolationKind::MeetingLink | ViolationKind::CalendarLink => {
            "[LINK_REDACTED]"
        }
        ViolationKind::SocialMediaHandle | ViolationKind::DiscordTag => "[HANDLE_REDACTED]",
        ViolationKind::PaymentHandle => "[PAYMENT_REDACTED]",
        _ => "[PII_REDACTED]",
    }
}

/// Replace every detected pattern in `text` with a kind-specific placeholder.
///
/// Longer patterns are replaced first so a phone number inside a UPI id does
/// not leave fragments behind. Matching is literal and case-insensitive;
/// patterns that only exist in the normalized text simply find no occurrence
/// in the original and are skipped.
///
/// ```
/// use chaperone::{moderate, mask_violations};
///
/// let result = moderate("reach me at 9876543210");
/// assert_eq!(
///     mask_violations("reach me at 9876543210", &result),
///     "reach me at [PHONE_REDACTED]"
/// );
/// ```
pub fn mask_violations(text: &str, result: &ModerationResult) -> String {
    if result.all_violations.is_empty() {
        return text.to_string();
    }

    let mut violations: Vec<_> = result.all_violations.iter().collect();
    violations.sort_by(|a, b| b.matched_text.len().cmp(&a.matched_text.len()));

    let mut masked = text.to_string();
    for violation in violations {
        if violation.matched_text.is_empty() {
            continue;
        }
        let literal = format!("(?i){}", regex::escape(&violation.matched_text));
        if let Ok(re) = Regex::new(&literal) {
            masked = re
                .replace_all(&masked, placeholder(violation.kind))
                .into_owned();
        }
    }
    masked
}

/// True when detected patterns cover at least `threshold_percent` of the
/// trimmed text — a coarse "mostly contact info" signal.
pub fn detection_density_met(text: &str, result: &ModerationResult, threshold_percent: f64) -> bool {
    if result.all_violations.is_empty() {
        return false;
    }
    let text_len = text.trim().chars().count();
    if text_len == 0 {
        return false;
    }
    let pattern_len: usize = result
        .all_violations
        .iter()
        .map(|v| v.matched_text.chars().count())
        .sum();
    (pattern_len as f64 / text_len as f64) * 100.0 >= threshold_percent
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Moderator;

    #[test]
    fn test_masks_each_kind_with_its_placeholder() {
        let moderator = Moderator::default();
        let text = "email me at test@example.com";
        let result = moderator.moderate(text, None);
        let masked = mask_violations(text, &result);
        assert!(masked.contains("[EMAIL_REDACTED]"), "got: {}", masked);
        assert!(!masked.contains("test@example.com"));
    }

    #[test]
    fn test_mask_is_case_insensitive() {
        let moderator = Moderator::default();
        let result = moderator.moderate("WhatsApp me", None);
        let masked = mask_violations("WhatsApp me", &result);
        assert!(!masked.to_lowercase().contains("whatsapp"), "got: {}", masked);
    }

    #[test]
    fn test_clean_text_is_unchanged() {
        let moderator = Moderator::default();
        let text = "Hello, how are you?";
        let result = moderator.moderate(text, None);
        assert_eq!(mask_violations(text, &result), text);
    }

    #[test]
    fn test_density_threshold() {
        let moderator = Moderator::default();
        let text = "9876543210";
        let result = moderator.moderate(text, None);
        assert!(detection_density_met(text, &result, 20.0));

        let diluted = format!("{} {}", "lorem ipsum dolor sit amet ".repeat(10), text);
        let result = moderator.moderate(&diluted, None);
        assert!(!detection_density_met(&diluted, &result, 20.0));
    }
}
