use crate::error::{CodecError, RecordError, RecordErrorCause};
use crate::escape::{ends_with_continuation, trim_value_start, unescape_value};
use crate::options::CodecOptions;
use msgprops_core::{Message, MessageBundle, MessageId, text};
use std::collections::HashMap;

/// Parses bundle text back into a [`MessageBundle`].
///
/// Broken records do not stop the parse: every failure is collected and
/// returned together as [`CodecError::MalformedBundle`]. A repeated message
/// id is fatal and returned as soon as it is seen.
///
/// The bundle locale is taken from a `# locale:` comment in the leading
/// comment block, falling back to `options.target_locale`. The block ends at
/// the first blank line or record. A leading byte order mark is ignored.
pub fn parse(text: &str, options: &CodecOptions) -> Result<MessageBundle, CodecError> {
    let mut locale: Option<String> = None;
    let mut in_header = true;
    let mut header_started = false;
    let mut seen: HashMap<MessageId, usize> = HashMap::new();
    let mut messages = Vec::new();
    let mut errors = Vec::new();

    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    for logical in LogicalLines::new(text) {
        match logical {
            LogicalLine::Blank => {
                if header_started {
                    in_header = false;
                }
            },
            LogicalLine::Comment(comment) => {
                header_started = true;
                if in_header && locale.is_none() {
                    locale = header_locale(comment).map(str::to_string);
                }
            },
            LogicalLine::Record { line, text } => {
                in_header = false;
                let (id, result) = parse_record(&text);

                if let Some(id) = id {
                    if seen.insert(id, line).is_some() {
                        return Err(CodecError::DuplicateMessageId {
                            id,
                            line: Some(line),
                        });
                    }
                }

                match result {
                    Ok(message) => messages.push(message),
                    Err(cause) => {
                        tracing::warn!(line, "Skipping malformed message record: {}", cause);
                        errors.push(RecordError { line, text, cause });
                    },
                }
            },
        }
    }

    if !errors.is_empty() {
        return Err(CodecError::MalformedBundle { errors });
    }

    let locale = locale.unwrap_or_else(|| options.target_locale.clone());
    tracing::debug!(messages = messages.len(), locale = %locale, "Parsed message bundle text");

    Ok(MessageBundle::from_messages(locale, messages)?)
}

/// Splits one `key=value` record into its id and message.
///
/// The id is returned whenever the key was readable, even if the value is
/// broken, so duplicate ids are still detected.
fn parse_record(record: &str) -> (Option<MessageId>, Result<Message, RecordErrorCause>) {
    let (Some(key), Some(raw_value)) = (text::before(record, "="), text::after(record, "=")) else {
        return (None, Err(RecordErrorCause::MissingSeparator));
    };

    let key = key.trim();
    let id = match key.parse::<u64>() {
        Ok(id) => MessageId::new(id),
        Err(source) => {
            return (
                None,
                Err(RecordErrorCause::InvalidKey {
                    key: key.to_string(),
                    source,
                }),
            );
        },
    };

    let message = unescape_value(trim_value_start(raw_value))
        .and_then(|value| Message::from_icu(id, &value).map_err(RecordErrorCause::from));

    (Some(id), message)
}

/// Reads `locale` out of a `# locale: <tag>` comment.
fn header_locale(comment: &str) -> Option<&str> {
    let body = comment.trim_start().trim_start_matches(['#', '!']);
    match text::before(body, ":").map(str::trim) {
        Some("locale") => text::after(body, ":").map(str::trim).filter(|l| !l.is_empty()),
        _ => None,
    }
}

enum LogicalLine<'a> {
    Blank,
    Comment(&'a str),
    /// A record with its continuation lines joined by `\n`.
    Record { line: usize, text: String },
}

/// Iterates the logical lines of bundle text.
struct LogicalLines<'a> {
    physical: std::iter::Enumerate<std::str::Split<'a, char>>,
}

impl<'a> LogicalLines<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            physical: text.split('\n').enumerate(),
        }
    }
}

impl<'a> Iterator for LogicalLines<'a> {
    type Item = LogicalLine<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let (index, line) = self.physical.next()?;
        let line = strip_cr(line);
        let trimmed = line.trim_start();

        if trimmed.is_empty() {
            return Some(LogicalLine::Blank);
        }
        if trimmed.starts_with('#') || trimmed.starts_with('!') {
            return Some(LogicalLine::Comment(line));
        }

        let mut record = line.to_string();
        let mut continues = ends_with_continuation(line);
        while continues {
            let Some((_, next)) = self.physical.next() else {
                break;
            };
            let next = strip_cr(next);
            record.push('\n');
            record.push_str(next);
            continues = ends_with_continuation(next);
        }

        Some(LogicalLine::Record {
            line: index + 1,
            text: record,
        })
    }
}

fn strip_cr(line: &str) -> &str {
    line.strip_suffix('\r').unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_locale() {
        assert_eq!(header_locale("# locale: nl"), Some("nl"));
        assert_eq!(header_locale("#locale:pt-BR"), Some("pt-BR"));
        assert_eq!(header_locale("! locale : de "), Some("de"));
        assert_eq!(header_locale("# source-locale: en"), None);
        assert_eq!(header_locale("# locale:"), None);
        assert_eq!(header_locale("# en: Hello"), None);
    }

    #[test]
    fn test_logical_lines_join_continuations() {
        let text = "# c\n1=a\\\nb\n\n  \n2=c\r\n";
        let lines: Vec<_> = LogicalLines::new(text)
            .map(|l| match l {
                LogicalLine::Blank => "blank".to_string(),
                LogicalLine::Comment(c) => format!("comment:{}", c),
                LogicalLine::Record { line, text } => format!("{}:{}", line, text),
            })
            .collect();

        assert_eq!(
            lines,
            vec!["comment:# c", "2:1=a\\\nb", "blank", "blank", "6:2=c", "blank"]
        );
    }

    #[test]
    fn test_continuation_at_end_of_input() {
        let lines: Vec<_> = LogicalLines::new("1=a\\")
            .map(|l| match l {
                LogicalLine::Record { text, .. } => text,
                LogicalLine::Comment(c) => c.to_string(),
                LogicalLine::Blank => String::new(),
            })
            .collect();
        assert_eq!(lines, vec!["1=a\\"]);
    }

    #[test]
    fn test_parse_record_errors() {
        assert!(matches!(
            parse_record("no separator"),
            (None, Err(RecordErrorCause::MissingSeparator))
        ));
        assert!(matches!(
            parse_record("abc=value"),
            (None, Err(RecordErrorCause::InvalidKey { .. }))
        ));
        assert!(matches!(
            parse_record("-1=value"),
            (None, Err(RecordErrorCause::InvalidKey { .. }))
        ));
        assert!(matches!(
            parse_record("5=bad \\q"),
            (Some(id), Err(RecordErrorCause::InvalidEscape { .. })) if id == MessageId::new(5)
        ));
        assert!(matches!(
            parse_record("6={open"),
            (Some(_), Err(RecordErrorCause::Tokenize(_)))
        ));
    }

    #[test]
    fn test_parse_record_skips_whitespace_after_separator() {
        let (id, message) = parse_record(" 12 =  Hallo {naam}");
        assert_eq!(id, Some(MessageId::new(12)));
        assert_eq!(message.unwrap().to_icu(), "Hallo {naam}");
    }
}
