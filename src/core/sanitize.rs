// src/core/sanitize.rs

// Latin-1 letters by entity name (lowercase form). Capitalised names map to
// the uppercase letter.
const LATIN_LETTERS: &[(&str, char)] = &[
    ("agrave", 'à'), ("aacute", 'á'), ("acirc", 'â'), ("atilde", 'ã'), ("auml", 'ä'),
    ("aring", 'å'), ("aelig", 'æ'), ("ccedil", 'ç'), ("egrave", 'è'), ("eacute", 'é'),
    ("ecirc", 'ê'), ("euml", 'ë'), ("igrave", 'ì'), ("iacute", 'í'), ("icirc", 'î'),
    ("iuml", 'ï'), ("eth", 'ð'), ("ntilde", 'ñ'), ("ograve", 'ò'), ("oacute", 'ó'),
    ("ocirc", 'ô'), ("otilde", 'õ'), ("ouml", 'ö'), ("oslash", 'ø'), ("ugrave", 'ù'),
    ("uacute", 'ú'), ("ucirc", 'û'), ("uuml", 'ü'), ("yacute", 'ý'), ("thorn", 'þ'),
    ("yuml", 'ÿ'), ("scaron", 'š'), ("zcaron", 'ž'),
];

/// Decode the body of an HTML entity (between `&` and `;`).
pub fn decode_entity(name: &str) -> Option<char> {
    if let Some(num) = name.strip_prefix('#') {
        let code = match num.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => num.parse::<u32>().ok()?,
        };
        return char::from_u32(code);
    }
    let fixed = match name {
        "nbsp" => Some('\u{a0}'),
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "ndash" => Some('–'),
        "mdash" => Some('—'),
        "szlig" => Some('ß'),
        _ => None,
    };
    if fixed.is_some() {
        return fixed;
    }
    let lower = name.to_ascii_lowercase();
    let (_, ch) = LATIN_LETTERS.iter().find(|(n, _)| *n == lower)?;
    if name.starts_with(|c: char| c.is_ascii_uppercase()) {
        ch.to_uppercase().next()
    } else {
        Some(*ch)
    }
}

/// Collapse sequences of whitespace (incl. NBSP) into a single space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Undo UTF-8 text that was decoded as latin-1 somewhere upstream
/// ("MalmÃ¶" → "Malmö"). Only attempted when the tell-tale lead characters
/// are present; bytes that do not survive the round trip are dropped.
pub fn repair_mojibake(s: &str) -> String {
    if !(s.contains('Ã') || s.contains('Â')) {
        return s!(s);
    }
    let bytes: Vec<u8> = s
        .chars()
        .filter_map(|c| u8::try_from(u32::from(c)).ok())
        .collect();
    String::from_utf8_lossy(&bytes)
        .chars()
        .filter(|&c| c != char::REPLACEMENT_CHARACTER)
        .collect()
}

/// Cell text as stored on rows: whitespace collapsed, mojibake repaired.
pub fn clean_text(s: &str) -> String {
    repair_mojibake(&normalize_ws(s))
}

/// Lookup key for names compared case- and space-insensitively.
pub fn name_key(s: &str) -> String {
    normalize_ws(s).to_lowercase()
}
