//! Grapheme-cluster segmentation for alphabet configuration.
//!
//! Splitting an alphabet string into user-perceived characters is the only
//! place the codec cares about Unicode; encode/decode of message bodies
//! operate on raw bytes. The primary strategy is UAX #29 extended grapheme
//! clusters via `unicode-segmentation` (default `unicode` feature). Without
//! that feature a regex approximation recognizes flag pairs, emoji with
//! modifiers, keycaps, tag sequences, and ZWJ continuations.
//!
//! Both strategies guarantee that concatenating the returned tokens
//! reconstructs the input string exactly.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// One approximate grapheme cluster:
    /// - a regional-indicator pair (flag), or
    /// - an emoji code point, optionally followed by a skin-tone modifier,
    ///   VS-16 with optional combining enclosing keycap, or a tag sequence
    ///   ended by CANCEL TAG, the whole emoji repeatable via ZWJ.
    static ref CLUSTER: Regex = Regex::new(
        r"\p{Regional_Indicator}\p{Regional_Indicator}|\p{Emoji}(?:\p{Emoji_Modifier}|\x{FE0F}\x{20E3}?|[\x{E0020}-\x{E007E}]+\x{E007F})?(?:\x{200D}\p{Emoji}(?:\p{Emoji_Modifier}|\x{FE0F}\x{20E3}?|[\x{E0020}-\x{E007E}]+\x{E007F})?)*"
    )
    .expect("cluster pattern compiles");
}

/// Splits `text` into grapheme clusters.
///
/// Concatenating the returned tokens yields `text` exactly.
#[cfg(feature = "unicode")]
pub fn split_graphemes(text: &str) -> Vec<String> {
    use unicode_segmentation::UnicodeSegmentation;
    text.graphemes(true).map(str::to_owned).collect()
}

/// Splits `text` into grapheme clusters.
///
/// Concatenating the returned tokens yields `text` exactly.
#[cfg(not(feature = "unicode"))]
pub fn split_graphemes(text: &str) -> Vec<String> {
    fallback_split(text)
}

/// Regex-based cluster approximation.
///
/// Scans with a fresh cursor per call: at each position the cluster pattern
/// is tried anchored there, and any code point that does not start a
/// recognized cluster is taken as its own token. No match state survives
/// between calls or between positions.
pub fn fallback_split(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        match CLUSTER.find(rest) {
            Some(m) if m.start() == 0 => {
                tokens.push(rest[..m.end()].to_string());
                rest = &rest[m.end()..];
            }
            _ => {
                // No cluster starts here; take one code point.
                let width = rest.chars().next().map(char::len_utf8).unwrap_or(1);
                tokens.push(rest[..width].to_string());
                rest = &rest[width..];
            }
        }
    }
    tokens
}
