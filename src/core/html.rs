// src/core/html.rs
// Low-level HTML string scanning.
// Deliberately naive (no DOM, no nesting of same-name tags) but tolerant of
// attribute order, quoting style and tag-name case.

use super::sanitize::clean_text;
use super::vischars::VisChars;

/// ASCII-only lowercasing. Byte offsets are preserved, so indices found in the
/// lowered copy are valid in the original.
pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii() { c.to_ascii_lowercase() } else { c })
        .collect()
}

/// Find `<name` in an already-lowered haystack, requiring a tag-name boundary
/// so `<b` does not match `<br>` or `<body>`, nor `<th` match `<thead>`.
pub fn find_tag(lc: &str, name: &str, from: usize) -> Option<usize> {
    let pat = format!("<{name}");
    let mut pos = from;
    while let Some(rel) = lc.get(pos..)?.find(&pat) {
        let at = pos + rel;
        match lc.as_bytes().get(at + pat.len()) {
            Some(b'>' | b'/' | b' ' | b'\t' | b'\r' | b'\n') | None => return Some(at),
            _ => pos = at + pat.len(),
        }
    }
    None
}

/// Next complete `<name …>…</name>` block from `from` onwards, searched in
/// the pre-lowered `lc`. Returns byte offsets (start of opener, end of closer).
fn next_block_in(s: &str, lc: &str, name: &str, from: usize) -> Option<(usize, usize)> {
    let start = find_tag(lc, name, from)?;
    let open_end = s[start..].find('>')? + start + 1;
    let close = format!("</{name}");
    let close_rel = lc[open_end..].find(&close)?;
    let close_at = open_end + close_rel;
    let end = s[close_at..].find('>').map(|g| close_at + g + 1).unwrap_or(s.len());
    Some((start, end))
}

/// All `<name>` blocks of `s`, in document order. Lowercases once.
pub fn tag_blocks_ci<'a>(s: &'a str, name: &str) -> Vec<&'a str> {
    let lc = to_lower(s);
    let mut out = Vec::new();
    let mut pos = 0usize;
    while let Some((b_s, b_e)) = next_block_in(s, &lc, name, pos) {
        out.push(&s[b_s..b_e]);
        pos = b_e;
    }
    out
}

/// The opening tag of a block, up to and excluding its `>`.
pub fn opener(block: &str) -> &str {
    &block[..block.find('>').unwrap_or(block.len())]
}

/// Given a complete tag block like `<td ...>INNER</td>`,
/// return INNER (may still contain nested tags).
pub fn inner_after_open_tag(block: &str) -> &str {
    if let Some(open_end) = block.find('>') {
        if let Some(close_start) = block.rfind('<') {
            if close_start > open_end {
                return &block[open_end + 1..close_start];
            }
        }
    }
    ""
}

/// Attribute value from an opening tag. Quotes optional in source.
pub fn attr_ci(opener: &str, name: &str) -> Option<String> {
    let lc = to_lower(opener);
    let pat = format!("{name}=");
    let mut pos = 0usize;
    while let Some(rel) = lc[pos..].find(&pat) {
        let at = pos + rel;
        pos = at + pat.len();
        // `data-class=` must not count as `class=`
        let boundary = at == 0 || lc.as_bytes()[at - 1].is_ascii_whitespace();
        if !boundary {
            continue;
        }
        let val = &opener[pos..];
        let (quote, off) = match val.as_bytes().first() {
            Some(b'"') => (Some('"'), 1),
            Some(b'\'') => (Some('\''), 1),
            _ => (None, 0),
        };
        let end = match quote {
            Some(q) => val[off..].find(q).map(|e| off + e).unwrap_or(val.len()),
            None => val
                .find(|c: char| c.is_ascii_whitespace() || c == '/')
                .unwrap_or(val.len()),
        };
        return Some(s!(&val[off..end]));
    }
    None
}

/// True if the opener's `class` list contains `class` (case-insensitive).
pub fn has_class(opener: &str, class: &str) -> bool {
    attr_ci(opener, "class")
        .map(|v| v.split_ascii_whitespace().any(|c| c.eq_ignore_ascii_case(class)))
        .unwrap_or(false)
}

/// `colspan` of a cell opener; 1 when absent or unparseable.
pub fn colspan(opener: &str) -> usize {
    attr_ci(opener, "colspan")
        .and_then(|v| v.trim().parse::<usize>().ok())
        .filter(|&n| n > 0)
        .unwrap_or(1)
}

/// True if the block contains a `<b>` element anywhere.
pub fn has_bold(block: &str) -> bool {
    find_tag(&to_lower(block), "b", 0).is_some()
}

/// Visible text of a fragment: tags dropped, entities decoded, whitespace
/// collapsed, mojibake repaired.
pub fn text_of(fragment: &str) -> String {
    clean_text(&VisChars::new(fragment).collect::<String>())
}
