//! Inline mark tokenizer for a single line of Markdown-style text.
//!
//! Four independent scans (bold, italic, strike, underline) each collect
//! candidate spans. The candidates are pooled, sorted by start offset and
//! accepted greedily: a candidate survives only if it does not intersect a
//! span accepted before it. Accepted spans become styled runs, the gaps
//! between them become plain runs.
//!
//! Marks do not nest. In `**bold and *italic* together**` the bold span is
//! accepted first and the italic candidate inside it is discarded, so the
//! bold run's text keeps the inner asterisks.

use regex::Regex;
use richtext_core::{StyleSet, StyledRun, UnderlineStyle};
use std::sync::LazyLock;

/// Bold: `**text**` or `__text__`.
static BOLD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*|__(.+?)__").unwrap());

/// Strikethrough: `~~text~~`.
static STRIKE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"~~(.+?)~~").unwrap());

/// Underline: `<u>text</u>`, any case.
static UNDERLINE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<u>(.+?)</u>").unwrap());

/// Line style used for underline marks.
const UNDERLINE_STYLE: UnderlineStyle = UnderlineStyle::Heavy;

/// Kind of inline mark, in scan order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkKind {
    Bold,
    Italic,
    Strike,
    Underline,
}

impl MarkKind {
    /// The style a run of this kind carries.
    pub fn style(&self) -> StyleSet {
        match self {
            MarkKind::Bold => StyleSet::bold(),
            MarkKind::Italic => StyleSet::italic(),
            MarkKind::Strike => StyleSet::strike(),
            MarkKind::Underline => StyleSet::underline(UNDERLINE_STYLE),
        }
    }
}

/// A mark found in a line.
///
/// `start..end` is the half-open byte range of the whole match, delimiters
/// included; `content` is the text between the delimiters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkToken {
    pub kind: MarkKind,
    pub content: String,
    pub start: usize,
    pub end: usize,
}

impl MarkToken {
    fn overlaps(&self, other: &MarkToken) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Find every candidate mark in `line`, in scan order (bold, italic, strike,
/// underline) and by position within each scan. Candidates may overlap.
pub fn scan_candidates(line: &str) -> Vec<MarkToken> {
    let mut candidates = regex_candidates(line, &BOLD_REGEX, MarkKind::Bold);
    candidates.extend(italic_candidates(line));
    candidates.extend(regex_candidates(line, &STRIKE_REGEX, MarkKind::Strike));
    candidates.extend(regex_candidates(line, &UNDERLINE_REGEX, MarkKind::Underline));
    candidates
}

/// Resolve the marks of `line` into non-overlapping tokens sorted by start.
pub fn scan_tokens(line: &str) -> Vec<MarkToken> {
    let mut candidates = scan_candidates(line);
    // Stable: ties keep scan order.
    candidates.sort_by_key(|c| c.start);

    let mut accepted: Vec<MarkToken> = Vec::new();
    for candidate in candidates {
        if accepted.iter().any(|a| a.overlaps(&candidate)) {
            log::trace!(
                "Dropping {:?} candidate at {}..{}: overlaps an accepted mark",
                candidate.kind,
                candidate.start,
                candidate.end
            );
            continue;
        }
        accepted.push(candidate);
    }

    // Accepted in start order already; keep the invariant explicit.
    accepted.sort_by_key(|t| t.start);
    accepted
}

/// Tokenize one line into styled runs.
///
/// Text between accepted marks becomes plain runs. A rejected candidate's
/// source text, delimiters included, is kept verbatim inside whatever run
/// covers it.
pub fn tokenize(line: &str) -> Vec<StyledRun> {
    let tokens = scan_tokens(line);
    let mut runs = Vec::with_capacity(tokens.len() * 2 + 1);
    let mut last_end = 0;

    for token in tokens {
        if token.start > last_end {
            runs.push(StyledRun::plain(&line[last_end..token.start]));
        }
        runs.push(StyledRun::styled(token.content, token.kind.style()));
        last_end = token.end;
    }

    if last_end < line.len() {
        runs.push(StyledRun::plain(&line[last_end..]));
    }

    runs
}

fn regex_candidates(line: &str, regex: &Regex, kind: MarkKind) -> Vec<MarkToken> {
    regex
        .captures_iter(line)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let content = caps.get(1).or_else(|| caps.get(2))?;
            Some(MarkToken {
                kind,
                content: content.as_str().to_string(),
                start: whole.start(),
                end: whole.end(),
            })
        })
        .collect()
}

/// Scan for `*text*` and `_text_`.
///
/// A delimiter counts only when it is single: neither the byte before nor
/// the byte after it is the same delimiter. This keeps `**` and `__` for
/// bold. The closing delimiter is the first qualifying one after at least
/// one content character; scanning resumes after each match.
fn italic_candidates(line: &str) -> Vec<MarkToken> {
    let bytes = line.as_bytes();
    let is_single = |pos: usize, delim: u8| {
        bytes[pos] == delim
            && (pos == 0 || bytes[pos - 1] != delim)
            && bytes.get(pos + 1) != Some(&delim)
    };

    let mut candidates = Vec::new();
    let mut pos = 0;
    while pos < bytes.len() {
        let delim = bytes[pos];
        if (delim == b'*' || delim == b'_') && is_single(pos, delim) {
            let close = (pos + 2..bytes.len()).find(|&q| is_single(q, delim));
            if let Some(close) = close {
                candidates.push(MarkToken {
                    kind: MarkKind::Italic,
                    content: line[pos + 1..close].to_string(),
                    start: pos,
                    end: close + 1,
                });
                pos = close + 1;
                continue;
            }
        }
        pos += 1;
    }

    candidates
}
