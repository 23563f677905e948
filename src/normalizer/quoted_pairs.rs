use regex::{Captures, Regex};
use tracing::debug;

use crate::normalizer::segment::{join_segments, TranscriptSegment};
use crate::normalizer::{TranscriptPayload, TranscriptStrategy};

/// A value in either quote style; Python's repr switches to double quotes
/// when the value contains an apostrophe.
const QUOTED_VALUE: &str = r#"(?:'((?:[^'\\]|\\.)*)'|"((?:[^"\\]|\\.)*)")"#;

/// `speaker`/`text` pair whose keys use the given quote character.
fn pair_pattern(key_quote: char) -> String {
    format!(
        r"(?s){q}speaker{q}\s*:\s*{value}\s*,\s*{q}text{q}\s*:\s*{value}",
        q = key_quote,
        value = QUOTED_VALUE
    )
}

/// Stringified segment lists in a non-JSON object notation, such as
/// `[{'speaker': 'Ann', 'text': 'Hello'}]`.
///
/// This depends on the producer's repr format staying the same: if the
/// producer reorders keys or changes quoting, the pairs are no longer found
/// and the payload falls through to plain text. Pairs with single-quoted keys
/// are tried before pairs with double-quoted keys; values may use either quote.
pub struct QuotedPairsStrategy {
    single_quoted: Regex,
    double_quoted: Regex,
}

impl QuotedPairsStrategy {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            single_quoted: Regex::new(&pair_pattern('\''))?,
            double_quoted: Regex::new(&pair_pattern('"'))?,
        })
    }

    /// `None` when the pattern matches nowhere.
    fn extract(pattern: &Regex, text: &str) -> Option<Vec<TranscriptSegment>> {
        let mut matched = false;
        let mut segments = Vec::new();

        for caps in pattern.captures_iter(text) {
            matched = true;
            let speaker = unescape(quoted_value(&caps, 1));
            let body = unescape(quoted_value(&caps, 3));
            if let Some(segment) = TranscriptSegment::new(Some(&speaker), &body) {
                segments.push(segment);
            }
        }

        matched.then_some(segments)
    }
}

impl TranscriptStrategy for QuotedPairsStrategy {
    fn apply(&self, payload: &TranscriptPayload) -> Option<String> {
        let text = payload.as_text()?;

        let patterns = [
            ("single", &self.single_quoted),
            ("double", &self.double_quoted),
        ];
        for (quote, pattern) in patterns {
            if let Some(segments) = Self::extract(pattern, text) {
                debug!("Recovered {} {}-quoted transcript pairs", segments.len(), quote);
                return Some(join_segments(segments));
            }
        }

        None
    }

    fn name(&self) -> &'static str {
        "QuotedPairsStrategy"
    }
}

/// Contents of the value whose single-quoted form is capture `first` and
/// double-quoted form is capture `first + 1`.
fn quoted_value<'t>(caps: &Captures<'t>, first: usize) -> &'t str {
    caps.get(first)
        .or_else(|| caps.get(first + 1))
        .map_or("", |m| m.as_str())
}

/// Undo backslash escapes inside a quoted value.
fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some(escaped @ ('\\' | '\'' | '"')) => out.push(escaped),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }

    out
}
