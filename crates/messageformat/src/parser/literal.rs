//! Literal text scanning.
//!
//! Turns a run of template text into [`LiteralPart`]s. `{`, `}` and `#` are
//! structural; a run of backslashes in front of one of them escapes it.
//!
//! How many of those backslashes survive depends on where the run sits:
//!
//! | input     | output    |
//! |-----------|-----------|
//! | `\#`      | `#`       |
//! | `\\#`     | `#`       |
//! | `a\#`     | `a#`      |
//! | `a\\#`    | `a\\#`    |
//! | `ll\\\{`  | `ll\\\{`  |
//!
//! A run that starts the segment is dropped entirely. After other text, a
//! single backslash is consumed while a longer run is kept verbatim. A
//! backslash in front of anything else is ordinary text.

use super::ast::LiteralPart;
use super::scanner::{CLOSE, ESCAPE, OPEN, POUND};

/// Scan the code points in `[start, end)`.
///
/// Unescaped `{` and `}` never occur in the range: the message parser ends a
/// literal run on them.
pub(crate) fn scan_literal(chars: &[char], start: usize, end: usize) -> Vec<LiteralPart> {
    let mut parts = Vec::new();
    let mut segment_start = start;
    let mut escapes = 0usize;

    for (i, &c) in chars.iter().enumerate().take(end).skip(start) {
        if c == ESCAPE {
            escapes += 1;
            continue;
        }

        if matches!(c, OPEN | CLOSE | POUND) {
            if escapes > 0 {
                if i - segment_start > escapes {
                    let text_end = if escapes > 1 { i } else { i - 1 };
                    push_text(&mut parts, &chars[segment_start..text_end]);
                }
                // The escaped character opens the next segment.
                segment_start = i;
            } else {
                push_text(&mut parts, &chars[segment_start..i]);
                parts.push(LiteralPart::Pound);
                segment_start = i + 1;
            }
        }
        escapes = 0;
    }

    if segment_start < end {
        push_text(&mut parts, &chars[segment_start..end]);
    }
    parts
}

/// Append text, merging with a preceding text part.
fn push_text(parts: &mut Vec<LiteralPart>, text: &[char]) {
    if text.is_empty() {
        return;
    }
    if let Some(LiteralPart::Text(prev)) = parts.last_mut() {
        prev.extend(text);
    } else {
        parts.push(LiteralPart::Text(text.iter().collect()));
    }
}
