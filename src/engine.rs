//! Severity scoring, the sensitivity-gated decision policy, and the
//! `Moderator` that ties the pipeline together.

use log::debug;

use crate::detectors;
use crate::intent;
use crate::message::Message;
use crate::rate_limit::RateLimiter;
use crate::types::{Confidence, ModerationResult, Sensitivity, Violation, ViolationKind};

/// Construction-time knobs. Everything else about the engine is fixed.
#[derive(Debug, Clone)]
pub struct ModeratorConfig {
    /// Decision-policy tier; detection itself always runs in full.
    pub sensitivity: Sensitivity,
    /// Sliding-window length for per-user violation tracking.
    pub rate_limit_window_minutes: i64,
    /// Violations inside the window before a user counts as rate limited.
    pub rate_limit_max_violations: usize,
}

impl Default for ModeratorConfig {
    fn default() -> Self {
        ModeratorConfig {
            sensitivity: Sensitivity::High,
            rate_limit_window_minutes: 60,
            rate_limit_max_violations: 3,
        }
    }
}

/// The moderation engine.
///
/// Holds only configuration and the rate limiter; all pattern state lives in
/// process-wide compiled regexes, so construction is cheap and a single
/// instance is safely shared across threads.
#[derive(Debug)]
pub struct Moderator {
    config: ModeratorConfig,
    rate_limiter: RateLimiter,
}

impl Default for Moderator {
    fn default() -> Self {
        Moderator::new(ModeratorConfig::default())
    }
}

impl Moderator {
    /// Build an engine with the given configuration.
    pub fn new(config: ModeratorConfig) -> Self {
        let rate_limiter = RateLimiter::new(
            config.rate_limit_window_minutes,
            config.rate_limit_max_violations,
        );
        Moderator {
            config,
            rate_limiter,
        }
    }

    /// Default configuration at the given sensitivity.
    pub fn with_sensitivity(sensitivity: Sensitivity) -> Self {
        Moderator::new(ModeratorConfig {
            sensitivity,
            ..ModeratorConfig::default()
        })
    }

    /// The configuration this engine was built with.
    pub fn config(&self) -> &ModeratorConfig {
        &self.config
    }

    /// Moderate one message.
    ///
    /// The verdict is a pure function of the message and the configured
    /// sensitivity. When a `user_id` is supplied and the verdict is a block,
    /// the violation is also recorded against that user; the verdict itself
    /// is never gated by the rate limiter — callers consult
    /// [`Moderator::is_rate_limited`] separately.
    pub fn moderate(&self, message: &str, user_id: Option<&str>) -> ModerationResult {
        if message.is_empty() {
            return ModerationResult::allow(String::new(), String::new());
        }

        let msg = Message::new(message);
        let violations = detectors::detect_all(&msg);
        let has_intent = intent::has_contact_intent(msg.original());
        let severity_score = severity(&violations, has_intent);
        let (is_blocked, confidence) =
            decide(self.config.sensitivity, &violations, has_intent, severity_score);

        if is_blocked {
            debug!(
                "blocked message: kind={} severity={} intent={}",
                violations
                    .first()
                    .map(|v| v.kind.to_string())
                    .unwrap_or_default(),
                severity_score,
                has_intent
            );
            if let Some(user_id) = user_id {
                self.rate_limiter.add_violation(user_id);
            }
        }

        let primary = violations.first();
        ModerationResult {
            is_blocked,
            confidence,
            violation_type: primary.map(|v| v.kind),
            detected_pattern: primary.map(|v| v.matched_text.clone()),
            original_text: msg.original().to_string(),
            normalized_text: msg.normalized().to_string(),
            severity_score,
            all_violations: violations.into_vec(),
        }
    }

    /// Violations recorded for a user within the current window.
    pub fn violation_count(&self, user_id: &str) -> usize {
        self.rate_limiter.violation_count(user_id)
    }

    /// Whether a user has exhausted the violation budget for the window.
    pub fn is_rate_limited(&self, user_id: &str) -> bool {
        self.rate_limiter.is_rate_limited(user_id)
    }
}

fn weight(kind: ViolationKind) -> u32 {
    match kind {
        ViolationKind::PhoneNumber => 25,
        ViolationKind::EmailAddress => 20,
        ViolationKind::UpiId => 25,
        ViolationKind::Url => 15,
        ViolationKind::SocialMediaHandle => 15,
        ViolationKind::PaymentHandle => 20,
        ViolationKind::WhatsappLink => 20,
        ViolationKind::TelegramLink => 20,
        ViolationKind::SnapchatLink => 20,
        ViolationKind::WechatId => 20,
        ViolationKind::LineId => 20,
        ViolationKind::MeetingLink => 10,
        ViolationKind::MeetingCode => 15,
        ViolationKind::CalendarLink => 10,
        ViolationKind::LetterSpelling => 18,
        // everything else (discord tags, SSNs) carries the default weight
        _ => 10,
    }
}

/// Weighted sum of violations, with bonuses for explicit intent and for
/// stacking multiple violations, clamped to 100.
fn severity(violations: &[Violation], has_intent: bool) -> u8 {
    if violations.is_empty() {
        return 0;
    }
    let mut score: u32 = violations.iter().map(|v| weight(v.kind)).sum();
    if has_intent {
        score = score.saturating_add(15);
    }
    score = score.saturating_add(10 * (violations.len() as u32).saturating_sub(1));
    score.min(100) as u8
}

/// The decision matrix.
fn decide(
    sensitivity: Sensitivity,
    violations: &[Violation],
    has_intent: bool,
    severity: u8,
) -> (bool, Confidence) {
    if violations.is_empty() {
        return (false, Confidence::Low);
    }

    match sensitivity {
        Sensitivity::High => {
            let confidence = if has_intent || severity >= 50 {
                Confidence::High
            } else {
                Confidence::Medium
            };
            (true, confidence)
        }
        Sensitivity::Medium => {
            let high_risk = [
                ViolationKind::PhoneNumber,
                ViolationKind::EmailAddress,
                ViolationKind::UpiId,
                ViolationKind::PaymentHandle,
            ];
            if violations.iter().any(|v| high_risk.contains(&v.kind)) {
                (true, Confidence::High)
            } else if has_intent || violations.len() >= 2 {
                (true, Confidence::Medium)
            } else {
                (false, Confidence::Low)
            }
        }
        Sensitivity::Low => {
            let high_risk = [
                ViolationKind::PhoneNumber,
                ViolationKind::EmailAddress,
                ViolationKind::UpiId,
            ];
            if has_intent && violations.iter().any(|v| high_risk.contains(&v.kind)) {
                (true, Confidence::High)
            } else if severity >= 70 {
                (true, Confidence::Medium)
            } else {
                (false, Confidence::Low)
            }
        }
    }
}
