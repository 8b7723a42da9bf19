use std::fmt;

/// The category of contact information a detector matched.
///
/// Serializes to the lower-snake-case name used on the wire
/// (`phone_number`, `upi_id`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    PhoneNumber,
    EmailAddress,
    UpiId,
    Url,
    SocialMediaHandle,
    DiscordTag,
    PaymentHandle,
    WhatsappLink,
    TelegramLink,
    SnapchatLink,
    WechatId,
    LineId,
    MeetingLink,
    MeetingCode,
    CalendarLink,
    LetterSpelling,
    Ssn,
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ViolationKind::PhoneNumber => "phone_number",
            ViolationKind::EmailAddress => "email_address",
            ViolationKind::UpiId => "upi_id",
            ViolationKind::Url => "url",
            ViolationKind::SocialMediaHandle => "social_media_handle",
            ViolationKind::DiscordTag => "discord_tag",
            ViolationKind::PaymentHandle => "payment_handle",
            ViolationKind::WhatsappLink => "whatsapp_link",
            ViolationKind::TelegramLink => "telegram_link",
            ViolationKind::SnapchatLink => "snapchat_link",
            ViolationKind::WechatId => "wechat_id",
            ViolationKind::LineId => "line_id",
            ViolationKind::MeetingLink => "meeting_link",
            ViolationKind::MeetingCode => "meeting_code",
            ViolationKind::CalendarLink => "calendar_link",
            ViolationKind::LetterSpelling => "letter_spelling",
            ViolationKind::Ssn => "ssn",
        };
        write!(f, "{}", s)
    }
}

/// A single detector hit: the kind of contact information and the exact
/// substring (from the original or normalized text) that triggered it.
/// The matched text is kept for reporting and downstream masking.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Violation {
    /// What was detected.
    #[serde(rename = "type")]
    pub kind: ViolationKind,
    /// The substring that triggered the detector.
    #[serde(rename = "pattern")]
    pub matched_text: String,
}

impl Violation {
    pub(crate) fn new(kind: ViolationKind, matched_text: &str) -> Self {
        Violation {
            kind,
            matched_text: matched_text.to_string(),
        }
    }
}

/// Detection sensitivity. Controls only the final decision policy; the
/// detector battery always runs in full.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sensitivity {
    Low,
    Medium,
    High,
}

impl Default for Sensitivity {
    fn default() -> Self {
        Sensitivity::High
    }
}

/// How certain the engine is about a block decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

/// The verdict for one moderated message.
///
/// `violation_type` and `detected_pattern` describe the first (primary)
/// violation and are both `Some` or both `None`. `all_violations` is always
/// present, possibly empty. A zero severity score and an empty violation
/// list imply each other.
///
/// ```
/// use chaperone::{moderate, ViolationKind};
///
/// let result = moderate("pay 9876543210@paytm");
/// assert!(result.is_blocked);
/// assert_eq!(result.violation_type, Some(ViolationKind::UpiId));
///
/// let result = moderate("Hello, how are you?");
/// assert!(!result.is_blocked);
/// assert_eq!(result.severity_score, 0);
/// assert!(result.all_violations.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ModerationResult {
    /// Whether the message should be rejected.
    pub is_blocked: bool,
    /// Confidence tier for the decision.
    pub confidence: Confidence,
    /// Kind of the primary (first detected) violation.
    pub violation_type: Option<ViolationKind>,
    /// Matched text of the primary violation.
    pub detected_pattern: Option<String>,
    /// The input as moderated (truncated to 10,000 characters).
    pub original_text: String,
    /// Canonical form produced by the normalizer.
    pub normalized_text: String,
    /// Severity in 0..=100; 0 exactly when no violations were found.
    pub severity_score: u8,
    /// Every violation, in detection order.
    pub all_violations: Vec<Violation>,
}

impl ModerationResult {
    /// The default verdict for empty or clean input.
    pub(crate) fn allow(original_text: String, normalized_text: String) -> Self {
        ModerationResult {
            is_blocked: false,
            confidence: Confidence::Low,
            violation_type: None,
            detected_pattern: None,
            original_text,
            normalized_text,
            severity_score: 0,
            all_violations: Vec::new(),
        }
    }

    /// Serialize to the wire shape consumed by the HTTP layer.
    ///
    /// ```
    /// use chaperone::moderate;
    ///
    /// let json = moderate("t.me/someone").to_json();
    /// assert_eq!(json["all_violations"][0]["type"], "url");
    /// ```
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}
