//! Cached regex patterns for the markup passes.
//!
//! Uses LazyLock to compile patterns once on first use. URL bodies exclude
//! the stash sentinels so a link can never run into an already-rendered atom.

use regex_lite::Regex;
use std::sync::LazyLock;

use super::stash::{ATOM_CLOSE, ATOM_OPEN};

// === Code ===

/// Matches ```...``` fenced code, across line breaks
pub static FENCED_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```(.*?)```").unwrap());

/// Matches `...` inline code (no backticks or newlines inside)
pub static INLINE_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`([^`\n]+)`").unwrap());

// === Links ===

/// Matches http(s) URLs ending in an image extension, case-insensitively
pub static IMAGE_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)https?://[^\s{ATOM_OPEN}{ATOM_CLOSE}]+?\.(?:jpg|jpeg|png|gif|webp)"
    ))
    .unwrap()
});

/// Matches http://, https:// and www. links up to whitespace or < > " '
pub static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r#"(?:https?://|www\.)[^\s<>"'{ATOM_OPEN}{ATOM_CLOSE}]+"#
    ))
    .unwrap()
});

// === Blocks ===

/// Matches an ordered list line: `  12. content`
pub static ORDERED_ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[ \t]*[0-9]+\.[ \t]+(.+)$").unwrap());

// === Emphasis ===

/// Matches ***strong emphasis***
pub static STRONG_EM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*\*(.+?)\*\*\*").unwrap());

/// Matches **strong**
pub static STRONG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());

/// Matches ++underline++
pub static PLUS_UNDERLINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\+\+(.+?)\+\+").unwrap());

/// Matches ~~underline~~
pub static TILDE_UNDERLINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"~~(.+?)~~").unwrap());
