#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![warn(clippy::arithmetic_side_effects)]

pub(crate) mod detectors;
pub(crate) mod engine;
pub(crate) mod intent;
pub(crate) mod mask;
pub(crate) mod message;
pub(crate) mod normalize;
pub(crate) mod pattern;
pub(crate) mod rate_limit;
pub(crate) mod types;

// Re-exports for convenience
pub use engine::{Moderator, ModeratorConfig};
pub use mask::{detection_density_met, mask_violations};
pub use normalize::normalize;
pub use types::{Confidence, ModerationResult, Sensitivity, Violation, ViolationKind};

/// Moderate a single message with default settings (high sensitivity, no
/// per-user tracking).
///
/// # Example
/// ```
/// use chaperone::{moderate, Confidence, ViolationKind};
///
/// let result = moderate("call me on 98 76 54 32 10");
/// assert!(result.is_blocked);
/// assert_eq!(result.violation_type, Some(ViolationKind::PhoneNumber));
/// assert_eq!(result.confidence, Confidence::High);
///
/// assert!(!moderate("I have 5 apples").is_blocked);
/// ```
pub fn moderate(message: &str) -> ModerationResult {
    Moderator::default().moderate(message, None)
}
