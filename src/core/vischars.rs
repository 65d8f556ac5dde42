// src/core/vischars.rs
// Visible-text character iterator for an HTML fragment.
// Skips tags (<...>), decodes entities (&...;), collapses ASCII whitespace to a single ' '.

use super::sanitize::decode_entity;

// Longest entity body we try to decode (`&#x2013;` → 6)
const MAX_ENTITY_LEN: usize = 10;

pub struct VisChars<'a> {
    s: &'a str,
    b: &'a [u8],
    i: usize,
    n: usize,
}

impl<'a> VisChars<'a> {
    pub fn new(s: &'a str) -> Self { Self { s, b: s.as_bytes(), i: 0, n: s.len() } }

    #[inline]
    fn skip_tag(&mut self) {
        // called when current byte is '<'
        self.i += 1;
        let mut in_s = false; // '
        let mut in_d = false; // "
        while self.i < self.n {
            match self.b[self.i] {
                b'\'' if !in_d => in_s = !in_s,
                b'"'  if !in_s => in_d = !in_d,
                b'>' if !in_s && !in_d => { self.i += 1; break; }
                _ => {}
            }
            self.i += 1;
        }
    }

    #[inline]
    fn entity(&mut self) -> char {
        // called when current byte is '&'; a bare '&' stays literal
        let body = &self.b[self.i + 1..];
        if let Some(end) = body.iter().take(MAX_ENTITY_LEN + 1).position(|&c| c == b';') {
            let name = &self.s[self.i + 1..self.i + 1 + end];
            if let Some(ch) = decode_entity(name) {
                self.i += end + 2;
                return ch;
            }
        }
        self.i += 1;
        '&'
    }

    #[inline]
    fn next_char(&mut self) -> Option<char> {
        let ch = self.s[self.i..].chars().next()?;
        self.i += ch.len_utf8();
        Some(ch)
    }
}

impl<'a> Iterator for VisChars<'a> {
    type Item = char;
    fn next(&mut self) -> Option<Self::Item> {
        while self.i < self.n {
            match self.b[self.i] {
                b'<' => { self.skip_tag(); continue; }
                b'&' => return Some(self.entity()),
                b' ' | b'\t' | b'\r' | b'\n' => {
                    // collapse consecutive whitespace to a single space
                    while self.i < self.n {
                        match self.b[self.i] { b' ' | b'\t' | b'\r' | b'\n' => self.i += 1, _ => break }
                    }
                    return Some(' ');
                }
                _ => return self.next_char(),
            }
        }
        None
    }
}
