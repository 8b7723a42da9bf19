use once_cell::sync::Lazy;
use regex::Regex;

use crate::message::Message;
use crate::pattern::compile;
use crate::types::{Violation, ViolationKind};

use super::{find_either, Violations};

static WHATSAPP_RE: Lazy<Regex> =
    Lazy::new(|| compile(r"(wa\.me/|whatsapp\.com/|\bwhatsapp\b)"));

static TELEGRAM_RE: Lazy<Regex> =
    Lazy::new(|| compile(r"(tg://|t\.me/|telegram\.me/|\btelegram\b)"));

static SNAPCHAT_RE: Lazy<Regex> =
    Lazy::new(|| compile(r"(snap://|snapchat\.com/add/|\bsnapchat\b|\bsnap\b.*\badd\b)"));

static WECHAT_RE: Lazy<Regex> = Lazy::new(|| compile(r"(\bwechat\b|\b微信\b|wechat\s*id)"));

static LINE_RE: Lazy<Regex> = Lazy::new(|| compile(r"(\bline\b.*\bid\b|line://|line\.me/)"));

/// Messaging-app identifiers, scanned in both views. Order fixes which kind
/// becomes primary when several fire.
pub(crate) fn detect(msg: &Message, out: &mut Violations) {
    let rules: [(&Lazy<Regex>, ViolationKind); 5] = [
        (&WHATSAPP_RE, ViolationKind::WhatsappLink),
        (&TELEGRAM_RE, ViolationKind::TelegramLink),
        (&SNAPCHAT_RE, ViolationKind::SnapchatLink),
        (&WECHAT_RE, ViolationKind::WechatId),
        (&LINE_RE, ViolationKind::LineId),
    ];
    for (re, kind) in rules {
        if let Some(m) = find_either(re, msg) {
            out.push(Violation::new(kind, m.as_str()));
        }
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
    fn test_whatsapp() {
        assert_eq!(kinds("whatsapp me"), vec![ViolationKind::WhatsappLink]);
        assert_eq!(kinds("wa.me/1234567890"), vec![ViolationKind::WhatsappLink]);
    }

    #[test]
    fn test_telegram() {
        assert_eq!(kinds("t.me/username"), vec![ViolationKind::TelegramLink]);
        assert_eq!(kinds("tg://resolve?domain=x"), vec![ViolationKind::TelegramLink]);
    }

    #[test]
    fn test_snapchat() {
        assert_eq!(kinds("snapchat.com/add/someone"), vec![ViolationKind::SnapchatLink]);
        assert_eq!(kinds("on snap just add me"), vec![ViolationKind::SnapchatLink]);
    }

    #[test]
    fn test_wechat_and_line() {
        assert_eq!(kinds("wechat id: abc"), vec![ViolationKind::WechatId]);
        assert_eq!(kinds("微信"), vec![ViolationKind::WechatId]);
        assert_eq!(kinds("my line id is abc"), vec![ViolationKind::LineId]);
        assert_eq!(kinds("line.me/ti/p/abc"), vec![ViolationKind::LineId]);
    }

    #[test]
    fn test_prose_is_clean() {
        assert!(kinds("drop me a line sometime").is_empty());
        assert!(kinds("hold the line please").is_empty());
    }
}
