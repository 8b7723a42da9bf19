use crate::normalize::normalize;

/// Messages longer than this are truncated before moderation. The cap is the
/// engine's only backpressure against pathological inputs.
pub(crate) const MAX_MESSAGE_CHARS: usize = 10_000;

/// A Message wraps one input and precomputes the three views the detector
/// battery scans: the (truncated) original, its lowercase form, and the
/// normalized form. Detectors borrow from here instead of re-deriving.
#[derive(Debug, Clone)]
pub(crate) struct Message {
    original: String,
    lower: String,
    normalized: String,
}

impl Message {
    pub(crate) fn new(text: &str) -> Self {
        let original = match text.char_indices().nth(MAX_MESSAGE_CHARS) {
            Some((byte_idx, _)) => text[..byte_idx].to_string(),
            None => text.to_string(),
        };
        let lower = original.to_lowercase();
        let normalized = normalize(&original);
        Message {
            original,
            lower,
            normalized,
        }
    }

    pub(crate) fn original(&self) -> &str {
        &self.original
    }

    pub(crate) fn lower(&self) -> &str {
        &self.lower
    }

    pub(crate) fn normalized(&self) -> &str {
        &self.normalized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_message_kept_whole() {
        let msg = Message::new("Hello THERE");
        assert_eq!(msg.original(), "Hello THERE");
        assert_eq!(msg.lower(), "hello there");
        assert_eq!(msg.normalized(), "hellothere");
    }

    #[test]
    fn test_truncation_at_char_boundary() {
        let long: String = "é".repeat(MAX_MESSAGE_CHARS + 500);
        let msg = Message::new(&long);
        assert_eq!(msg.original().chars().count(), MAX_MESSAGE_CHARS);
    }

    #[test]
    fn test_truncation_cuts_trailing_content() {
        let mut long = "a".repeat(MAX_MESSAGE_CHARS);
        long.push_str(" call me 9876543210");
        let msg = Message::new(&long);
        assert!(!msg.normalized().contains("9876543210"));
    }
}
