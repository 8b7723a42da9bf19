//! Canonicalization of obfuscated message text.
//!
//! The pipeline folds a message into lowercase ASCII-ish text so the digit
//! and keyword detectors see through spacing, punctuation, Unicode lookalikes,
//! emoji digits, and number words in several languages. The steps are ordered
//! and the order is observable: number-word replacement must run before the
//! Cyrillic confusable fold (otherwise Russian number words turn into Latin
//! gibberish first), and obfuscation punctuation is stripped last so that
//! word boundaries still exist when the word tables run.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::pattern::compile;

/// Zero-width and bidi control characters stripped before anything else.
const ZERO_WIDTH: [char; 7] = [
    '\u{200b}', // zero-width space
    '\u{200c}', // zero-width non-joiner
    '\u{200d}', // zero-width joiner
    '\u{200e}', // left-to-right mark
    '\u{200f}', // right-to-left mark
    '\u{2060}', // word joiner
    '\u{feff}', // zero-width no-break space
];

/// Keycap emoji digits (`3️⃣` is `3` + U+FE0F + U+20E3).
const EMOJI_DIGITS: [(&str, &str); 10] = [
    ("0\u{fe0f}\u{20e3}", "0"),
    ("1\u{fe0f}\u{20e3}", "1"),
    ("2\u{fe0f}\u{20e3}", "2"),
    ("3\u{fe0f}\u{20e3}", "3"),
    ("4\u{fe0f}\u{20e3}", "4"),
    ("5\u{fe0f}\u{20e3}", "5"),
    ("6\u{fe0f}\u{20e3}", "6"),
    ("7\u{fe0f}\u{20e3}", "7"),
    ("8\u{fe0f}\u{20e3}", "8"),
    ("9\u{fe0f}\u{20e3}", "9"),
];

/// Number words replaced (with word-boundary matching) by their digits.
///
/// English, Russian, Spanish, Hindi (transliterated), Portuguese and German,
/// plus a curated table of leet/typo variants seen in the wild. Tens are
/// deliberately collapsed to a single digit (`twenty` → `2`): the goal is
/// recall, and the sensitivity policy absorbs the false positives.
static WORD_NUMBERS: &[(&str, &str)] = &[
    // English
    ("zero", "0"),
    ("one", "1"),
    ("two", "2"),
    ("three", "3"),
    ("four", "4"),
    ("five", "5"),
    ("six", "6"),
    ("seven", "7"),
    ("eight", "8"),
    ("nine", "9"),
    // Common typos and variations
    ("fvie", "5"),
    ("ninetye", "9"),
    ("eght", "8"),
    ("ninegh", "9"),
    ("sevn", "7"),
    ("thr33", "3"),
    ("f0ur", "4"),
    ("i9ht", "8"),
    ("s3v3n", "7"),
    ("n1n3", "9"),
    ("3i9ht", "8"),
    ("onee", "1"),
    ("oen", "1"),
    ("to", "2"),
    ("thrre", "3"),
    ("foue", "4"),
    ("fiev", "5"),
    ("sxi", "6"),
    ("seveb", "7"),
    ("eigjt", "8"),
    // Mixed leet forms
    ("0ne", "1"),
    ("tw0", "2"),
    ("7hr33", "3"),
    ("f1ve", "5"),
    ("s1x", "6"),
    ("53ven", "7"),
    ("31ght", "8"),
    ("0n3", "1"),
    ("t\\/\\/0", "2"),
    ("7hree", "3"),
    ("f1v3", "5"),
    ("s1x6", "6"),
    ("e1ght", "8"),
    ("n1ne", "9"),
    // Russian
    ("ноль", "0"),
    ("нуль", "0"),
    ("один", "1"),
    ("два", "2"),
    ("три", "3"),
    ("четыре", "4"),
    ("пять", "5"),
    ("шесть", "6"),
    ("семь", "7"),
    ("восемь", "8"),
    ("девять", "9"),
    // Spanish
    ("cero", "0"),
    ("uno", "1"),
    ("dos", "2"),
    ("tres", "3"),
    ("cuatro", "4"),
    ("cinco", "5"),
    ("seis", "6"),
    ("siete", "7"),
    ("ocho", "8"),
    ("nueve", "9"),
    // Teens map to their digit string, tens collapse to one digit
    ("ten", "1"),
    ("eleven", "11"),
    ("twelve", "12"),
    ("thirteen", "13"),
    ("fourteen", "14"),
    ("fifteen", "15"),
    ("sixteen", "16"),
    ("seventeen", "17"),
    ("eighteen", "18"),
    ("nineteen", "19"),
    ("twenty", "2"),
    ("thirty", "3"),
    ("forty", "4"),
    ("fifty", "5"),
    ("sixty", "6"),
    ("seventy", "7"),
    ("eighty", "8"),
    ("ninety", "9"),
    // Leet zero
    ("zer0", "0"),
    ("z3r0", "0"),
    // Hindi (transliterated)
    ("shunya", "0"),
    ("ek", "1"),
    ("do", "2"),
    ("teen", "3"),
    ("char", "4"),
    ("paanch", "5"),
    ("chhah", "6"),
    ("saat", "7"),
    ("aath", "8"),
    ("nau", "9"),
    // Portuguese
    ("um", "1"),
    ("dois", "2"),
    ("três", "3"),
    ("quatro", "4"),
    ("sete", "7"),
    ("oito", "8"),
    ("nove", "9"),
    // German
    ("null", "0"),
    ("eins", "1"),
    ("zwei", "2"),
    ("drei", "3"),
    ("vier", "4"),
    ("fünf", "5"),
    ("sechs", "6"),
    ("sieben", "7"),
    ("acht", "8"),
    ("neun", "9"),
];

/// Phonetic stand-ins for digits.
static PHONETIC_NUMBERS: &[(&str, &str)] = &[
    ("ate", "8"),
    ("won", "1"),
    ("too", "2"),
    ("to", "2"),
    ("for", "4"),
    ("oh", "0"),
    ("owe", "0"),
];

static WORD_NUMBER_MAP: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| WORD_NUMBERS.iter().copied().collect());

static WORD_NUMBER_RE: Lazy<Regex> = Lazy::new(|| alternation(WORD_NUMBERS));

static PHONETIC_MAP: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| PHONETIC_NUMBERS.iter().copied().collect());

static PHONETIC_RE: Lazy<Regex> = Lazy::new(|| alternation(PHONETIC_NUMBERS));

/// Build a word-bounded alternation over a replacement table, longest
/// entries first so `onee` wins over `one`.
fn alternation(table: &[(&str, &str)]) -> Regex {
    let mut words: Vec<&str> = table.iter().map(|(w, _)| *w).collect();
    words.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
    let alt = words
        .iter()
        .map(|w| regex::escape(w))
        .collect::<Vec<_>>()
        .join("|");
    compile(&format!(r"\b(?:{})\b", alt))
}

fn replace_words(text: &str, re: &Regex, map: &HashMap<&str, &str>) -> String {
    re.replace_all(text, |caps: &regex::Captures<'_>| {
        let word = &caps[0];
        map.get(word).copied().unwrap_or(word).to_string()
    })
    .into_owned()
}

/// Map native-script decimal digits (Chinese, formal Chinese, Arabic-Indic)
/// to ASCII.
fn map_native_digits(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '零' => '0',
            '一' | '壹' => '1',
            '二' | '贰' => '2',
            '三' | '叁' => '3',
            '四' | '肆' => '4',
            '五' | '伍' => '5',
            '六' | '陆' => '6',
            '七' | '柒' => '7',
            '八' | '捌' => '8',
            '九' | '玖' => '9',
            '٠'..='٩' => {
                // U+0660..U+0669 are contiguous
                let d = (c as u32).saturating_sub(0x0660) as u8;
                char::from(d.saturating_add(b'0'))
            }
            _ => c,
        })
        .collect()
}

/// Fold Cyrillic and Greek letters that render like Latin ones. Runs after
/// number-word replacement so Russian number words are already digits.
fn fold_confusables(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            'о' => out.push('o'),
            'а' => out.push('a'),
            'е' => out.push('e'),
            'с' => out.push('c'),
            'д' => out.push('d'),
            'и' => out.push('i'),
            'н' => out.push('n'),
            'в' => out.push('v'),
            'т' => out.push('t'),
            'р' => out.push('r'),
            'ч' => out.push_str("ch"),
            'ш' => out.push_str("sh"),
            'м' => out.push('m'),
            'ь' => {}
            'ο' => out.push('o'),
            'α' => out.push('a'),
            _ => out.push(c),
        }
    }
    out
}

/// Separator and decoration characters deleted in the final step. Digits are
/// never touched: phone detection needs digits to stay digits.
fn is_obfuscation(c: char) -> bool {
    c.is_whitespace()
        || matches!(
            c,
            '-' | '_'
                | '.'
                | '('
                | ')'
                | '['
                | ']'
                | '{'
                | '}'
                | '*'
                | '#'
                | '!'
                | '@'
                | '$'
                | '%'
                | '^'
                | '&'
                | '+'
                | '='
                | '|'
                | '\\'
                | '/'
                | '<'
                | '>'
                | '~'
                | '`'
                | '\''
                | '"'
                | ','
                | ':'
                | ';'
                | '×'
                | '·'
                | '•'
                | '–'
                | '—'
                | '…'
                | '﹘'
                | '°'
                | '¤'
                | '†'
                | '‡'
                | '§'
                | '¶'
                | '¿'
                | '¡'
                | '※'
                | '【'
                | '】'
                | '「'
                | '」'
                | '『'
                | '』'
                | '〈'
                | '〉'
                | '《'
                | '》'
        )
}

/// Normalize a message into its canonical matching form.
///
/// ```
/// use chaperone::normalize;
///
/// assert_eq!(normalize("nine eight seven six five"), "98765");
/// assert_eq!(normalize("9-8-7 six 5"), "98765");
/// assert_eq!(normalize("ｊｏｈｎ＠ｇｍａｉｌ．ｃｏｍ"), "johngmailcom");
/// ```
pub fn normalize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    // 1. Strip invisible characters so they cannot split digit runs.
    let stripped: String = text.chars().filter(|c| !ZERO_WIDTH.contains(c)).collect();

    // 2. NFKC folds fullwidth forms (＠ → @, ． → .) and compatibility digits.
    let mut s: String = stripped.nfkc().collect();

    // 3. Keycap emoji digits.
    for (emoji, digit) in EMOJI_DIGITS {
        if s.contains(emoji) {
            s = s.replace(emoji, digit);
        }
    }

    // 4. Case fold.
    let s = s.to_lowercase();

    // 5.-6. Chinese and Arabic-Indic numerals.
    let s = map_native_digits(&s);

    // 7. Number words, then 8. phonetic numbers.
    let s = replace_words(&s, &WORD_NUMBER_RE, &WORD_NUMBER_MAP);
    let s = replace_words(&s, &PHONETIC_RE, &PHONETIC_MAP);

    // 9. Confusable fold after the word tables.
    let s = fold_confusables(&s);

    // 10. Drop separators and decorations.
    s.chars().filter(|c| !is_obfuscation(*c)).collect()
}
