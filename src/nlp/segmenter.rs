//! Sentence segmentation
//!
//! Splits raw text into an ordered, deduplicated list of [`Sentence`]s.
//! Lines are split on periods, except periods directly after an ASCII
//! lowercase letter (`e.g.`, `.txt`). A period after an ASCII digit only
//! ends a sentence when whitespace or the end of the line follows, so
//! `0.1`, `1.2.3` and `3.x` stay whole.

use crate::types::Sentence;
use rustc_hash::FxHashSet;

/// Split `text` into sentences
///
/// Each fragment is trimmed of spaces, then periods, then tabs. Fragments
/// that are empty or were already seen are dropped; the rest are terminated
/// with a single period and numbered from 0 in order of first occurrence.
pub fn segment(text: &str) -> Vec<Sentence> {
    let mut seen: FxHashSet<&str> = FxHashSet::default();
    let mut sentences = Vec::new();

    for line in text.trim().split('\n') {
        for fragment in split_line(line) {
            let candidate = fragment
                .trim_matches(' ')
                .trim_matches('.')
                .trim_matches('\t');

            if candidate.is_empty() || !seen.insert(candidate) {
                continue;
            }

            let index = sentences.len();
            sentences.push(Sentence::new(format!("{candidate}."), index));
        }
    }

    sentences
}

/// Split one line at sentence-ending periods
fn split_line(line: &str) -> Vec<&str> {
    let mut fragments = Vec::new();
    let mut start = 0;
    let mut prev: Option<char> = None;
    let mut chars = line.char_indices().peekable();

    while let Some((pos, ch)) = chars.next() {
        let next = chars.peek().map(|&(_, c)| c);
        if ch == '.' && is_boundary(prev, next) {
            fragments.push(&line[start..pos]);
            start = pos + ch.len_utf8();
        }
        prev = Some(ch);
    }
    fragments.push(&line[start..]);

    fragments
}

/// Whether a period between `prev` and `next` ends a sentence.
///
/// A period at the start of a line never does.
fn is_boundary(prev: Option<char>, next: Option<char>) -> bool {
    match prev {
        None => false,
        Some(p) if p.is_ascii_lowercase() => false,
        Some(p) if p.is_ascii_digit() => next.map_or(true, char::is_whitespace),
        Some(_) => true,
    }
}
