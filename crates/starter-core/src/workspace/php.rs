//! Structured edits of PHP configuration arrays
//!
//! Laravel config files are `return [ 'key' => value, ... ];` arrays. The
//! scanner here classifies every byte as code, string literal or comment so
//! that brackets and commas inside strings and comments are never mistaken
//! for structure.

use std::ops::Range;

/// What a source byte belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Region {
    Code,
    Str,
    Comment,
}

/// Classify every byte of `src`
pub(crate) fn regions(src: &str) -> Vec<Region> {
    let bytes = src.as_bytes();
    let mut out = vec![Region::Code; bytes.len()];
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            quote @ (b'\'' | b'"') => {
                let start = i;
                i += 1;
                while i < bytes.len() && bytes[i] != quote {
                    if bytes[i] == b'\\' {
                        i += 1;
                    }
                    i += 1;
                }
                let end = (i + 1).min(bytes.len());
                out[start..end].fill(Region::Str);
                i = end;
            }
            b'/' if bytes.get(i + 1) == Some(&b'/') => {
                i = mark_line_comment(bytes, &mut out, i);
            }
            b'#' => {
                i = mark_line_comment(bytes, &mut out, i);
            }
            b'/' if bytes.get(i + 1) == Some(&b'*') => {
                let start = i;
                i += 2;
                while i + 1 < bytes.len() && !(bytes[i] == b'*' && bytes[i + 1] == b'/') {
                    i += 1;
                }
                let end = (i + 2).min(bytes.len());
                out[start..end].fill(Region::Comment);
                i = end;
            }
            _ => i += 1,
        }
    }

    out
}

fn mark_line_comment(bytes: &[u8], out: &mut [Region], start: usize) -> usize {
    let mut i = start;
    while i < bytes.len() && bytes[i] != b'\n' {
        i += 1;
    }
    out[start..i].fill(Region::Comment);
    i
}

/// Index of the bracket closing the one at `open`
pub(crate) fn matching_close(src: &str, regions: &[Region], open: usize) -> Option<usize> {
    let bytes = src.as_bytes();
    let mut depth = 0usize;
    for i in open..bytes.len() {
        if regions[i] != Region::Code {
            continue;
        }
        match bytes[i] {
            b'(' | b'[' | b'{' => depth += 1,
            b')' | b']' | b'}' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

/// Split `range` at commas that are code and not nested inside brackets
pub(crate) fn split_top_level(
    src: &str,
    regions: &[Region],
    range: Range<usize>,
) -> Vec<Range<usize>> {
    let bytes = src.as_bytes();
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = range.start;

    for i in range.clone() {
        if regions[i] != Region::Code {
            continue;
        }
        match bytes[i] {
            b'(' | b'[' | b'{' => depth += 1,
            b')' | b']' | b'}' => depth = depth.saturating_sub(1),
            b',' if depth == 0 => {
                parts.push(start..i);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(start..range.end);
    parts
}

/// Text of `range` without comments, trimmed
pub(crate) fn without_comments(src: &str, regions: &[Region], range: Range<usize>) -> String {
    let text: Vec<u8> = range
        .filter(|&i| regions[i] != Region::Comment)
        .map(|i| src.as_bytes()[i])
        .collect();
    String::from_utf8_lossy(&text).trim().to_string()
}

/// Leading whitespace of the line containing `index`
pub(crate) fn line_indent(src: &str, index: usize) -> &str {
    let line_start = src[..index].rfind('\n').map(|i| i + 1).unwrap_or(0);
    let line = &src[line_start..];
    let width = line.len() - line.trim_start_matches([' ', '\t']).len();
    &line[..width]
}

/// A PHP config file returning an array
#[derive(Debug, Clone)]
pub struct PhpConfig {
    source: String,
}

impl PhpConfig {
    pub fn parse(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Byte range of the value of `'key' => value`
    fn value_span(&self, key: &str) -> Option<Range<usize>> {
        let src = self.source.as_str();
        let regions = regions(src);
        let needle = format!("'{}'", key);
        let bytes = src.as_bytes();

        let mut search_from = 0;
        while let Some(found) = src[search_from..].find(&needle) {
            let key_start = search_from + found;
            search_from = key_start + needle.len();

            if regions[key_start] == Region::Comment {
                continue;
            }
            // the key must be a whole string literal, not part of a longer one
            if key_start > 0 && regions[key_start - 1] == Region::Str {
                continue;
            }
            let after_key = key_start + needle.len();
            let rest = &src[after_key..];
            let arrow = rest.len() - rest.trim_start().len();
            if !rest[arrow..].starts_with("=>") {
                continue;
            }

            let mut start = after_key + arrow + 2;
            while start < bytes.len() && bytes[start].is_ascii_whitespace() {
                start += 1;
            }

            let mut depth = 0usize;
            let mut end = bytes.len();
            for i in start..bytes.len() {
                if regions[i] != Region::Code {
                    continue;
                }
                match bytes[i] {
                    b'(' | b'[' | b'{' => depth += 1,
                    b')' | b']' | b'}' => {
                        if depth == 0 {
                            end = i;
                            break;
                        }
                        depth -= 1;
                    }
                    b',' if depth == 0 => {
                        end = i;
                        break;
                    }
                    _ => {}
                }
            }

            let trimmed_end = start + src[start..end].trim_end().len();
            return Some(start..trimmed_end);
        }

        None
    }

    /// Raw value text of a top-level entry
    pub fn get(&self, key: &str) -> Option<&str> {
        self.value_span(key).map(|span| &self.source[span])
    }

    /// Replace the value of an existing entry; false when the key is absent
    pub fn set(&mut self, key: &str, value: &str) -> bool {
        match self.value_span(key) {
            Some(span) => {
                self.source.replace_range(span, value);
                true
            }
            None => false,
        }
    }

    /// Add `item` to a list-valued entry unless it is already there.
    ///
    /// Returns false when the key is absent or its value is not a `[...]` list.
    pub fn append_to_list(&mut self, key: &str, item: &str) -> bool {
        let Some(span) = self.value_span(key) else {
            return false;
        };
        let src = self.source.as_str();
        if !src[span.clone()].starts_with('[') {
            return false;
        }

        let regions = regions(src);
        let open = span.start;
        let Some(close) = matching_close(src, &regions, open) else {
            return false;
        };

        let present = split_top_level(src, &regions, open + 1..close)
            .into_iter()
            .any(|part| without_comments(src, &regions, part) == item);
        if present {
            return true;
        }

        // last code byte before the closing bracket
        let last_code = (open..close)
            .rev()
            .find(|&i| regions[i] != Region::Comment && !src.as_bytes()[i].is_ascii_whitespace())
            .unwrap_or(open);
        let needs_comma = last_code != open && src.as_bytes()[last_code] != b',';

        if src[open..close].contains('\n') {
            // one item per line: new line above the closing bracket
            let indent = line_indent(src, close).to_string();
            let close_line_start = src[..close].rfind('\n').map(|i| i + 1).unwrap_or(close);
            self.source
                .insert_str(close_line_start, &format!("{}    {},\n", indent, item));
            // close_line_start is after last_code, so this index is still valid
            if needs_comma {
                self.source.insert(last_code + 1, ',');
            }
        } else {
            let separator = match (last_code == open, needs_comma) {
                (true, _) => "",
                (false, true) => ", ",
                (false, false) => " ",
            };
            self.source
                .insert_str(last_code + 1, &format!("{}{}", separator, item));
        }
        true
    }

    pub fn render(&self) -> &str {
        &self.source
    }
}
