//! Escaping of values in the on-disk format.

use crate::error::RecordErrorCause;

const FORM_FEED: char = '\u{c}';

/// Escapes a value so it fits in one logical record.
///
/// Line breaks become a trailing backslash followed by the line break, so the
/// value spans several physical lines but keeps its newlines.
pub(crate) fn escape_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 8);
    let mut leading = true;
    for ch in value.chars() {
        match ch {
            ' ' if leading => out.push_str("\\ "),
            '\t' if leading => out.push_str("\\t"),
            FORM_FEED if leading => out.push_str("\\f"),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(ch),
        }
        leading = leading && matches!(ch, ' ' | '\t' | FORM_FEED);
    }
    out
}

/// Comments are single physical lines; line breaks are shown as `\n` / `\r`.
pub(crate) fn escape_comment(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(ch),
        }
    }
    out
}

/// Returns `true` when `line` ends with an odd number of backslashes, i.e.
/// the record continues on the next physical line.
pub(crate) fn ends_with_continuation(line: &str) -> bool {
    line.bytes().rev().take_while(|b| *b == b'\\').count() % 2 == 1
}

/// Skips the whitespace allowed between `=` and the value.
pub(crate) fn trim_value_start(value: &str) -> &str {
    value.trim_start_matches([' ', '\t', FORM_FEED])
}

/// Decodes every escape sequence in a raw value.
pub(crate) fn unescape_value(raw: &str) -> Result<String, RecordErrorCause> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.char_indices();

    while let Some((offset, ch)) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }

        let Some((_, escaped)) = chars.next() else {
            return Err(RecordErrorCause::InvalidEscape {
                offset,
                reason: "dangling backslash at end of value",
            });
        };

        match escaped {
            '\n' | 'n' => out.push('\n'),
            'r' => out.push('\r'),
            't' => out.push('\t'),
            'f' => out.push(FORM_FEED),
            '\\' | ' ' | '=' | ':' | '#' | '!' => out.push(escaped),
            'u' => out.push(decode_unicode(offset, &mut chars)?),
            _ => {
                return Err(RecordErrorCause::InvalidEscape {
                    offset,
                    reason: "unknown escape sequence",
                });
            },
        }
    }

    Ok(out)
}

/// Decodes the `XXXX` of a `\uXXXX` escape, combining a surrogate pair when
/// the first unit is a high surrogate.
fn decode_unicode(
    offset: usize,
    chars: &mut std::str::CharIndices<'_>,
) -> Result<char, RecordErrorCause> {
    let invalid = |reason: &'static str| RecordErrorCause::InvalidEscape { offset, reason };

    let high = read_hex_unit(chars).ok_or_else(|| invalid("expected four hex digits after \\u"))?;
    let code = if (0xD800..0xDC00).contains(&high) {
        let rest = chars.as_str();
        let low = rest
            .strip_prefix("\\u")
            .and_then(|tail| tail.get(..4))
            .and_then(|hex| u32::from_str_radix(hex, 16).ok())
            .filter(|low| (0xDC00..0xE000).contains(low))
            .ok_or_else(|| invalid("unpaired high surrogate"))?;
        // Consume `\u` and the four digits of the low surrogate.
        for _ in 0..6 {
            chars.next();
        }
        0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00)
    } else {
        high
    };

    char::from_u32(code).ok_or_else(|| invalid("escape is not a unicode scalar value"))
}

fn read_hex_unit(chars: &mut std::str::CharIndices<'_>) -> Option<u32> {
    let mut value = 0u32;
    for _ in 0..4 {
        let (_, ch) = chars.next()?;
        value = value * 16 + ch.to_digit(16)?;
    }
    Some(value)
}
