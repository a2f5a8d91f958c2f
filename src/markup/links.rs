//! Image and hyperlink passes.

use regex_lite::Captures;

use super::patterns::{IMAGE_URL_RE, URL_RE};
use super::stash::Stash;

/// Characters treated as sentence punctuation when they trail a bare URL.
const TAIL_CHARS: &[char] = &['.', ',', ';', ':', '!', '?', ')', '}', ']', '>'];

/// Replace image URLs with `<img>` tags.
pub fn render_images(text: &str, stash: &mut Stash) -> String {
    IMAGE_URL_RE
        .replace_all(text, |caps: &Captures<'_>| {
            let url = &caps[0];
            stash.protect(format!(
                r#"<img src="{url}" alt="Image" style="max-width: 100%; height: auto;">"#
            ))
        })
        .into_owned()
}

/// Replace the remaining URLs with anchors, keeping trailing punctuation
/// outside the link.
pub fn render_links(text: &str, stash: &mut Stash) -> String {
    URL_RE
        .replace_all(text, |caps: &Captures<'_>| {
            let (url, tail) = split_tail(&caps[0]);
            let href = resolve_href(url);
            let mut out = stash.protect(format!(
                r#"<a href="{href}" target="_blank" rel="noopener noreferrer">{href}</a>"#
            ));
            out.push_str(tail);
            out
        })
        .into_owned()
}

/// Split a matched URL into its body and trailing punctuation.
///
/// The tail is the longest run of [`TAIL_CHARS`] at the end of the match,
/// but the body always keeps at least its first character.
///
/// # Examples
///
/// ```
/// use marklink::markup::split_tail;
///
/// assert_eq!(split_tail("www.example.com."), ("www.example.com", "."));
/// assert_eq!(split_tail("http://a.b/c?!)"), ("http://a.b/c", "?!)"));
/// assert_eq!(split_tail("http://a.b/c"), ("http://a.b/c", ""));
/// ```
pub fn split_tail(url: &str) -> (&str, &str) {
    let first_len = url.chars().next().map_or(0, char::len_utf8);
    let body_len = url.trim_end_matches(TAIL_CHARS).len().max(first_len);
    url.split_at(body_len)
}

/// Upgrade bare `www.` links to `https://`.
fn resolve_href(url: &str) -> String {
    if url.starts_with("http") {
        url.to_string()
    } else {
        format!("https://{url}")
    }
}
