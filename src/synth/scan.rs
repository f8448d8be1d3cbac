//! # Tag Scanning
//!
//! String-level scanning for the `{{NAME}}` tag pattern: finding every tag
//! occurrence (for the audit and the state tracker), stripping tags (for the
//! visible-length check), and splitting a line into literal/instruction
//! segments (for chunk emission).
//!
//! A tag is `{{` followed by one or more of `A-Z 0-9 _` followed by `}}`.
//! Anything else (lowercase names, stray braces, empty bodies) is plain
//! text, not a tag, and is never reported or stripped.

use crate::tags::{self, TagSpec};

/// One tag occurrence in a scanned string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagSpan<'a> {
    /// Byte offset of the opening brace.
    pub start: usize,
    /// The full tag text, braces included.
    pub text: &'a str,
}

/// Find every tag-pattern occurrence, known or not, left to right.
pub fn scan_tags(text: &str) -> Vec<TagSpan<'_>> {
    let bytes = text.as_bytes();
    let mut spans = Vec::new();
    let mut i = 0;

    while i + 4 <= bytes.len() {
        if bytes[i] == b'{' && bytes[i + 1] == b'{' {
            let mut j = i + 2;
            while j < bytes.len() && is_tag_byte(bytes[j]) {
                j += 1;
            }
            if j > i + 2 && j + 1 < bytes.len() && bytes[j] == b'}' && bytes[j + 1] == b'}' {
                spans.push(TagSpan {
                    start: i,
                    text: &text[i..j + 2],
                });
                i = j + 2;
                continue;
            }
        }
        i += 1;
    }

    spans
}

/// Whether a byte may appear in a tag body.
#[inline]
fn is_tag_byte(b: u8) -> bool {
    b.is_ascii_uppercase() || b.is_ascii_digit() || b == b'_'
}

/// Remove every tag-pattern occurrence, returning the visible text.
pub fn strip_tags(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;
    for span in scan_tags(text) {
        out.push_str(&text[cursor..span.start]);
        cursor = span.start + span.text.len();
    }
    out.push_str(&text[cursor..]);
    out
}

/// Visible character count of a line after tag stripping.
#[inline]
pub fn visible_len(text: &str) -> usize {
    strip_tags(text).chars().count()
}

/// One piece of a split line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment<'a> {
    /// Literal text, passed to the text encoder as-is. Unknown tags stay
    /// embedded here (the permissive pass-through policy).
    Literal(&'a str),
    /// A recognized formatting instruction.
    Tag(&'static TagSpec),
}

/// Split a line into literal and instruction segments.
///
/// Repeatedly takes the earliest-occurring known formatting tag; when two
/// known tags could start at the same index, the longer tag name wins, so a
/// tag is never mis-read as a prefix of another. Block and data tags are not
/// formatting tags and fall through as literal text here: data tags are
/// substituted before splitting, and a block tag appearing inline (not alone
/// on its line) renders literally.
pub fn split_inline(line: &str) -> Vec<Segment<'_>> {
    let mut by_length: Vec<&'static TagSpec> = tags::formatting().collect();
    by_length.sort_by(|a, b| b.tag.len().cmp(&a.tag.len()));

    let mut segments = Vec::new();
    let mut remaining = line;

    while !remaining.is_empty() {
        let mut nearest: Option<(usize, &'static TagSpec)> = None;
        for spec in &by_length {
            if let Some(idx) = remaining.find(spec.tag) {
                // Strict < keeps the longest tag on an index tie, since the
                // candidate list is sorted longest-first.
                if nearest.is_none_or(|(best, _)| idx < best) {
                    nearest = Some((idx, spec));
                }
            }
        }

        match nearest {
            Some((idx, spec)) => {
                if idx > 0 {
                    segments.push(Segment::Literal(&remaining[..idx]));
                }
                segments.push(Segment::Tag(spec));
                remaining = &remaining[idx + spec.tag.len()..];
            }
            None => {
                segments.push(Segment::Literal(remaining));
                break;
            }
        }
    }

    segments
}
