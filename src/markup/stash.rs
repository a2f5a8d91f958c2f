//! Opaque atoms for already-rendered markup.
//!
//! Every pass works on a plain working string. When a pass emits HTML it
//! moves that HTML into the [`Stash`] and writes a short token in its place:
//!
//! ```text
//! U+E000 <decimal index> U+E001
//! ```
//!
//! None of the later patterns can match inside a token (the sentinels are
//! excluded from URL bodies, digits never start a line, and no delimiter
//! uses them), so emitted tags and attribute text are out of reach of every
//! subsequent pass. [`Stash::restore`] expands the tokens once the pipeline
//! has finished.

use memchr::memmem;

/// Marks the start of a stash token.
pub const ATOM_OPEN: char = '\u{E000}';
/// Marks the end of a stash token.
pub const ATOM_CLOSE: char = '\u{E001}';

const ATOM_OPEN_BYTES: &[u8] = "\u{E000}".as_bytes();

/// Side table of rendered markup, addressed by token index.
#[derive(Debug, Default)]
pub struct Stash {
    atoms: Vec<String>,
}

impl Stash {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of atoms stashed so far.
    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    /// Stash `markup` and return the token that stands in for it.
    pub fn protect(&mut self, markup: impl Into<String>) -> String {
        let mut token = String::with_capacity(8);
        self.push_protected(&mut token, markup);
        token
    }

    /// Stash `markup` and append its token to `out`.
    pub fn push_protected(&mut self, out: &mut String, markup: impl Into<String>) {
        let index = self.atoms.len();
        self.atoms.push(markup.into());
        out.push(ATOM_OPEN);
        out.push_str(&index.to_string());
        out.push(ATOM_CLOSE);
    }

    /// Replace sentinel characters already present in `text` with atoms of
    /// their own, so that input text can never forge a token.
    pub fn protect_sentinels(&mut self, text: &str) -> String {
        if !text.contains([ATOM_OPEN, ATOM_CLOSE]) {
            return text.to_string();
        }

        let mut out = String::with_capacity(text.len() + 16);
        for c in text.chars() {
            if c == ATOM_OPEN || c == ATOM_CLOSE {
                self.push_protected(&mut out, c.to_string());
            } else {
                out.push(c);
            }
        }
        out
    }

    /// Expand every token in `text` back into its markup.
    ///
    /// Atoms may themselves contain tokens of earlier atoms (e.g. a code
    /// block holding a protected sentinel); those are expanded recursively.
    /// An atom only ever refers to atoms with a smaller index, so this
    /// terminates.
    pub fn restore(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len() * 2);
        self.expand_into(text, &mut out);
        out
    }

    fn expand_into(&self, text: &str, out: &mut String) {
        let finder = memmem::Finder::new(ATOM_OPEN_BYTES);
        let mut rest = text;

        while let Some(start) = finder.find(rest.as_bytes()) {
            out.push_str(&rest[..start]);
            let after_open = &rest[start + ATOM_OPEN.len_utf8()..];

            match parse_token(after_open).and_then(|(index, len)| {
                self.atoms.get(index).map(|atom| (atom, len))
            }) {
                Some((atom, len)) => {
                    self.expand_into(atom, out);
                    rest = &after_open[len + ATOM_CLOSE.len_utf8()..];
                }
                None => {
                    // Not a token we issued; keep the character as-is.
                    out.push(ATOM_OPEN);
                    rest = after_open;
                }
            }
        }

        out.push_str(rest);
    }
}

/// Parse `<digits>U+E001` at the start of `s`, returning the index and the
/// number of digit bytes.
fn parse_token(s: &str) -> Option<(usize, usize)> {
    let digits = s.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 || !s[digits..].starts_with(ATOM_CLOSE) {
        return None;
    }
    let index = s[..digits].parse().ok()?;
    Some((index, digits))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protect_and_restore() {
        let mut stash = Stash::new();
        let mut text = String::from("a ");
        stash.push_protected(&mut text, "<b>");
        text.push_str("bold");
        stash.push_protected(&mut text, "</b>");

        assert_eq!(stash.len(), 2);
        assert!(!text.contains('<'));
        assert_eq!(stash.restore(&text), "a <b>bold</b>");
    }

    #[test]
    fn test_restore_without_tokens() {
        let stash = Stash::new();
        assert_eq!(stash.restore("plain text"), "plain text");
        assert_eq!(stash.restore(""), "");
    }

    #[test]
    fn test_restore_nested_atoms() {
        let mut stash = Stash::new();
        let inner = stash.protect("<br>");
        let outer = stash.protect(format!("<pre>{inner}</pre>"));
        assert_eq!(stash.restore(&outer), "<pre><br></pre>");
    }

    #[test]
    fn test_sentinels_in_input_survive() {
        let mut stash = Stash::new();
        let input = format!("x{ATOM_OPEN}0{ATOM_CLOSE}y");
        let working = stash.protect_sentinels(&input);

        // The forged token must not resolve to anything but itself.
        assert_eq!(stash.len(), 2);
        assert_eq!(stash.restore(&working), input);
    }

    #[test]
    fn test_unknown_token_left_alone() {
        let stash = Stash::new();
        let text = format!("{ATOM_OPEN}7{ATOM_CLOSE}");
        assert_eq!(stash.restore(&text), text);
    }

    #[test]
    fn test_parse_token() {
        assert_eq!(parse_token("12\u{E001}rest"), Some((12, 2)));
        assert_eq!(parse_token("\u{E001}"), None);
        assert_eq!(parse_token("12"), None);
    }
}
