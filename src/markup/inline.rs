//! Inline passes: code spans, emphasis and underline.
//!
//! Code spans run first in the pipeline and are stashed whole, so nothing
//! inside a fence or a backtick pair is ever interpreted. Emphasis runs
//! after the block passes, longest marker first: `***` then `**` then `*`.

use memchr::memchr_iter;
use regex_lite::{Captures, Regex};

use super::patterns::{
    FENCED_CODE_RE, INLINE_CODE_RE, PLUS_UNDERLINE_RE, STRONG_EM_RE, STRONG_RE,
    TILDE_UNDERLINE_RE,
};
use super::stash::Stash;

/// Stash fenced code blocks verbatim as `<pre><code>`.
pub fn render_fenced_code(text: &str, stash: &mut Stash) -> String {
    FENCED_CODE_RE
        .replace_all(text, |caps: &Captures<'_>| {
            stash.protect(format!("<pre><code>{}</code></pre>", &caps[1]))
        })
        .into_owned()
}

/// Stash inline code spans verbatim as `<code>`.
pub fn render_inline_code(text: &str, stash: &mut Stash) -> String {
    INLINE_CODE_RE
        .replace_all(text, |caps: &Captures<'_>| {
            stash.protect(format!("<code>{}</code>", &caps[1]))
        })
        .into_owned()
}

/// Apply all emphasis and underline rules in precedence order.
pub fn render_emphasis(text: &str, stash: &mut Stash) -> String {
    let text = wrap_delimited(text, &STRONG_EM_RE, "<strong><em>", "</em></strong>", stash);
    let text = wrap_delimited(&text, &STRONG_RE, "<strong>", "</strong>", stash);
    let text = render_single_emphasis(&text, stash);
    let text = wrap_delimited(&text, &PLUS_UNDERLINE_RE, "<u>", "</u>", stash);
    wrap_delimited(&text, &TILDE_UNDERLINE_RE, "<u>", "</u>", stash)
}

/// Wrap the first capture group of every match in `open`/`close` tags.
///
/// Only the tags are stashed; the content stays in the working text so
/// later passes can still reach it.
fn wrap_delimited(
    text: &str,
    re: &Regex,
    open: &'static str,
    close: &'static str,
    stash: &mut Stash,
) -> String {
    re.replace_all(text, |caps: &Captures<'_>| {
        let mut out = stash.protect(open);
        out.push_str(&caps[1]);
        stash.push_protected(&mut out, close);
        out
    })
    .into_owned()
}

/// Render `*text*` as `<em>`.
///
/// An opening `*` must not touch another `*` and must be followed by a
/// non-space; a closing `*` must not touch another `*` and must follow a
/// non-space. Emphasis never crosses a line break. Unpaired markers stay
/// as literal text.
fn render_single_emphasis(text: &str, stash: &mut Stash) -> String {
    let bytes = text.as_bytes();
    let stars: Vec<usize> = memchr_iter(b'*', bytes).collect();
    if stars.len() < 2 {
        return text.to_string();
    }

    // Line number of each star, so a pairing never has to rescan its span.
    let mut lines = Vec::with_capacity(stars.len());
    let mut line = 0;
    let mut scanned = 0;
    for &pos in &stars {
        line += memchr_iter(b'\n', &bytes[scanned..pos]).count();
        lines.push(line);
        scanned = pos;
    }

    // Index of the nearest star at or after each index that can close.
    let mut next_close = vec![None; stars.len() + 1];
    for k in (0..stars.len()).rev() {
        next_close[k] = if can_close(text, stars[k]) {
            Some(k)
        } else {
            next_close[k + 1]
        };
    }

    let mut out = String::with_capacity(text.len() + 16);
    let mut copied = 0;
    let mut k = 0;

    while k < stars.len() {
        let open = stars[k];
        let close = next_close[k + 1].filter(|&next| lines[next] == lines[k]);

        match close {
            Some(next) if can_open(text, open) => {
                let pos = stars[next];
                out.push_str(&text[copied..open]);
                stash.push_protected(&mut out, "<em>");
                out.push_str(&text[open + 1..pos]);
                stash.push_protected(&mut out, "</em>");
                copied = pos + 1;
                k = next + 1;
            }
            _ => k += 1,
        }
    }

    out.push_str(&text[copied..]);
    out
}

fn can_open(text: &str, pos: usize) -> bool {
    let before = text[..pos].chars().next_back();
    let after = text[pos + 1..].chars().next();
    before != Some('*') && after.is_some_and(|c| c != '*' && !c.is_whitespace())
}

fn can_close(text: &str, pos: usize) -> bool {
    let before = text[..pos].chars().next_back();
    let after = text[pos + 1..].chars().next();
    after != Some('*') && before.is_some_and(|c| c != '*' && !c.is_whitespace())
}
