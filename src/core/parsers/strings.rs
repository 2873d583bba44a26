//! Line-oriented parser for Apple `.strings` tables.
//!
//! Recognizes three kinds of lines:
//! - blank lines
//! - comments (`// ...` or `/* ... */`, the latter possibly spanning lines)
//! - assignments: `"key" = "value";`
//!
//! Comments directly above an assignment (no blank line in between) become the
//! entry's `leading_comments`. Everything else is kept as positional trivia so
//! a rewrite never loses a section header.

use std::{collections::HashMap, mem};

use crate::core::error::{ParseError, ParseErrorKind};
use crate::core::table::{ResourceEntry, ResourceTable, TableItem};

const BOM: char = '\u{feff}';

/// Parse raw file bytes. Input must be UTF-8.
pub fn parse_strings_bytes(path: &str, bytes: &[u8]) -> Result<ResourceTable, ParseError> {
    let content = std::str::from_utf8(bytes).map_err(|e| {
        let line = bytes[..e.valid_up_to()]
            .iter()
            .filter(|&&b| b == b'\n')
            .count()
            + 1;
        ParseError::new(path, line, ParseErrorKind::InvalidUtf8)
    })?;
    parse_strings(path, content)
}

pub fn parse_strings(path: &str, content: &str) -> Result<ResourceTable, ParseError> {
    let mut items: Vec<TableItem> = Vec::new();
    let mut pending: Vec<String> = Vec::new();
    let mut pending_start = 0;
    let mut block_start: Option<usize> = None;
    let mut seen: HashMap<String, usize> = HashMap::new();

    for (idx, raw) in content.split_inclusive('\n').enumerate() {
        let line_no = idx + 1;
        let text = if idx == 0 {
            raw.trim_start_matches(BOM)
        } else {
            raw
        };
        let trimmed = text.trim();
        let error = |kind| ParseError::new(path, line_no, kind);

        // Inside a multi-line /* ... */ comment.
        if block_start.is_some() {
            pending.push(raw.to_string());
            if let Some(end) = trimmed.find("*/") {
                check_after_comment(&trimmed[end + 2..]).map_err(error)?;
                block_start = None;
            }
            continue;
        }

        if trimmed.is_empty() {
            flush_trivia(&mut pending, &mut items);
            items.push(TableItem::Trivia(raw.to_string()));
            continue;
        }

        if trimmed.starts_with("//") || trimmed.starts_with("/*") {
            if pending.is_empty() {
                pending_start = line_no;
            }
            pending.push(raw.to_string());
            if let Some(body) = trimmed.strip_prefix("/*") {
                match body.find("*/") {
                    Some(end) => check_after_comment(&body[end + 2..]).map_err(error)?,
                    None => block_start = Some(line_no),
                }
            }
            continue;
        }

        if trimmed.starts_with('"') {
            let (key, value) = parse_assignment(trimmed).map_err(error)?;
            if key.is_empty() {
                return Err(error(ParseErrorKind::EmptyKey));
            }
            if let Some(&first_line) = seen.get(&key) {
                return Err(error(ParseErrorKind::DuplicateKey { key, first_line }));
            }
            seen.insert(key.clone(), line_no);

            let start = if pending.is_empty() {
                line_no
            } else {
                pending_start
            };
            items.push(TableItem::Entry(ResourceEntry::new(
                key,
                value,
                mem::take(&mut pending),
                start..=line_no,
                raw.to_string(),
            )));
            continue;
        }

        return Err(error(ParseErrorKind::UnrecognizedLine));
    }

    if let Some(line) = block_start {
        return Err(ParseError::new(
            path,
            line,
            ParseErrorKind::UnterminatedComment,
        ));
    }
    flush_trivia(&mut pending, &mut items);

    Ok(ResourceTable::from_items(path, items))
}

fn flush_trivia(pending: &mut Vec<String>, items: &mut Vec<TableItem>) {
    if !pending.is_empty() {
        items.push(TableItem::Trivia(pending.concat()));
        pending.clear();
    }
}

fn check_after_comment(rest: &str) -> Result<(), ParseErrorKind> {
    let rest = rest.trim();
    if rest.is_empty() {
        Ok(())
    } else {
        Err(ParseErrorKind::UnexpectedContent(rest.to_string()))
    }
}

/// Parse a trimmed `"key" = "value";` line into its raw key and value.
fn parse_assignment(line: &str) -> Result<(String, String), ParseErrorKind> {
    let rest = &line[1..];
    let (key, rest) = read_quoted(rest).map_err(|e| match e {
        QuoteError::Unterminated => ParseErrorKind::UnterminatedKey,
        QuoteError::MalformedEscape => ParseErrorKind::MalformedEscape,
    })?;

    let rest = rest
        .trim_start()
        .strip_prefix('=')
        .ok_or(ParseErrorKind::ExpectedAssignment)?
        .trim_start();
    let rest = rest
        .strip_prefix('"')
        .ok_or(ParseErrorKind::ExpectedValue)?;

    let (value, rest) = read_quoted(rest).map_err(|e| match e {
        QuoteError::Unterminated => ParseErrorKind::UnterminatedValue,
        QuoteError::MalformedEscape => ParseErrorKind::MalformedEscape,
    })?;

    let rest = rest
        .trim_start()
        .strip_prefix(';')
        .ok_or(ParseErrorKind::ExpectedTerminator)?
        .trim();

    let trailing_comment =
        rest.starts_with("//") || (rest.starts_with("/*") && rest.ends_with("*/"));
    if !rest.is_empty() && !trailing_comment {
        return Err(ParseErrorKind::UnexpectedContent(rest.to_string()));
    }

    Ok((key.to_string(), value.to_string()))
}

enum QuoteError {
    Unterminated,
    MalformedEscape,
}

/// Read up to the closing quote. `\"` and `\\` do not close the string; any
/// other escape is passed through untouched.
fn read_quoted(s: &str) -> Result<(&str, &str), QuoteError> {
    let mut chars = s.char_indices();
    while let Some((i, c)) = chars.next() {
        match c {
            '\\' => {
                if chars.next().is_none() {
                    return Err(QuoteError::MalformedEscape);
                }
            }
            '"' => return Ok((&s[..i], &s[i + 1..])),
            _ => {}
        }
    }
    Err(QuoteError::Unterminated)
}
