// src/core/decode.rs
// Raw page bytes → text. The declared charset wins when its label is known
// and the bytes decode cleanly, otherwise UTF-8, otherwise windows-1252
// (a latin-1 superset that maps every byte).

use encoding_rs::{Encoding, UTF_8, WINDOWS_1252};
use once_cell::sync::Lazy;
use regex::bytes::Regex;

use crate::config::consts::CHARSET_SNIFF_BYTES;

static CHARSET: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)charset=["']?([A-Za-z0-9_-]+)"#).expect("valid charset regex")
});

/// Charset declared in the first few KB of the page, lowercased.
pub fn sniff_charset(raw: &[u8]) -> Option<String> {
    let head = &raw[..raw.len().min(CHARSET_SNIFF_BYTES)];
    let caps = CHARSET.captures(head)?;
    let name = String::from_utf8_lossy(caps.get(1)?.as_bytes());
    Some(name.to_ascii_lowercase())
}

/// Strict decode; `None` if any byte sequence is invalid for `enc`.
fn decode_strict(raw: &[u8], enc: &'static Encoding) -> Option<String> {
    let (text, had_errors) = enc.decode_without_bom_handling(raw);
    (!had_errors).then(|| text.into_owned())
}

pub fn decode_html_bytes(raw: &[u8]) -> String {
    let declared = sniff_charset(raw);
    if let Some(label) = declared.as_deref() {
        match Encoding::for_label(label.as_bytes()) {
            Some(enc) => match decode_strict(raw, enc) {
                Some(text) => return text,
                None => logd!("page does not decode as declared {label}; trying UTF-8"),
            },
            None => logd!("unknown declared charset {label:?}; trying UTF-8"),
        }
    }
    match decode_strict(raw, UTF_8) {
        Some(text) => text,
        None => {
            logd!("page is not valid UTF-8 (declared {:?}); reading as windows-1252", declared);
            WINDOWS_1252.decode_without_bom_handling(raw).0.into_owned()
        }
    }
}
