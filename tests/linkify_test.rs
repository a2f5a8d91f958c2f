//! End-to-end tests for the text → HTML transformer.

use marklink::linkify;
use proptest::prelude::*;

const ANCHOR_ATTRS: &str = r#"target="_blank" rel="noopener noreferrer""#;

fn anchor(href: &str) -> String {
    format!(r#"<a href="{href}" {ANCHOR_ATTRS}>{href}</a>"#)
}

#[test]
fn test_empty_input() {
    assert_eq!(linkify(""), "");
}

#[test]
fn test_image_url_is_case_insensitive() {
    let html = linkify("see http://x.com/a.PNG");
    assert!(html.contains(r#"<img src="http://x.com/a.PNG" alt="Image""#));
    assert!(!html.contains("<a "));
}

#[test]
fn test_every_image_extension() {
    for ext in ["jpg", "jpeg", "png", "gif", "webp", "JPEG", "WebP"] {
        let url = format!("https://cdn.example.org/pic.{ext}");
        let html = linkify(&url);
        assert!(html.starts_with(&format!(r#"<img src="{url}""#)), "{ext}: {html}");
    }
}

#[test]
fn test_bare_domain_with_trailing_period() {
    assert_eq!(
        linkify("visit www.example.com."),
        format!("visit {}.", anchor("https://www.example.com"))
    );
}

#[test]
fn test_trailing_punctuation_run() {
    assert_eq!(
        linkify("(really? https://example.com/q?a=1)!?"),
        format!("(really? {})!?", anchor("https://example.com/q?a=1"))
    );
}

#[test]
fn test_several_links_on_one_line() {
    assert_eq!(
        linkify("http://a.org, https://b.org; www.c.org"),
        format!(
            "{}, {}; {}",
            anchor("http://a.org"),
            anchor("https://b.org"),
            anchor("https://www.c.org")
        )
    );
}

#[test]
fn test_heading() {
    assert_eq!(linkify("# Title"), "<h1>Title</h1>");
    assert_eq!(linkify("### Small"), "<h3>Small</h3>");
}

#[test]
fn test_document_structure() {
    let input = "## Notes\n> remember\n---\n1. first\n2. second\n- x\n- y\ndone";
    assert_eq!(
        linkify(input),
        "<h2>Notes</h2><br><blockquote>remember</blockquote><br><hr><br>\
         <ul><li>first</li><li>second</li></ul>\
         <ul><li>x</li><li>y</li></ul><br>done"
    );
}

#[test]
fn test_list_merge_has_no_break() {
    let html = linkify("- a\n- b");
    assert_eq!(html, "<ul><li>a</li><li>b</li></ul>");
    assert_eq!(html.matches("<ul>").count(), 1);
    assert_eq!(html.matches("<li>").count(), 2);
    assert!(!html.contains("<br>"));
}

#[test]
fn test_strong_and_em() {
    assert_eq!(
        linkify("**bold** and *em*"),
        "<strong>bold</strong> and <em>em</em>"
    );
}

#[test]
fn test_triple_emphasis() {
    assert_eq!(linkify("***loud***"), "<strong><em>loud</em></strong>");
}

#[test]
fn test_underline_forms() {
    assert_eq!(linkify("++a++ ~~b~~"), "<u>a</u> <u>b</u>");
}

#[test]
fn test_fenced_code_is_literal() {
    assert_eq!(linkify("```*no em*```"), "<pre><code>*no em*</code></pre>");
    assert_eq!(
        linkify("```# not a heading http://x.y```"),
        "<pre><code># not a heading http://x.y</code></pre>"
    );
}

#[test]
fn test_inline_code() {
    assert_eq!(linkify("run `cargo *test*`"), "run <code>cargo *test*</code>");
}

#[test]
fn test_unbalanced_markers_degrade_to_text() {
    assert_eq!(linkify("```unterminated"), "```unterminated");
    assert_eq!(linkify("**unmatched"), "**unmatched");
    assert_eq!(linkify("a * b"), "a * b");
    assert_eq!(linkify("~~half"), "~~half");
}

#[test]
fn test_image_then_link_in_same_message() {
    let html = linkify("pic http://x.com/cat.gif and http://x.com/page");
    assert!(html.contains(r#"<img src="http://x.com/cat.gif""#));
    assert!(html.ends_with(&anchor("http://x.com/page")));
    assert_eq!(html.matches("<a ").count(), 1);
}

#[test]
fn test_ordered_block_swallows_trailing_newline() {
    assert_eq!(linkify("1. a\nend"), "<ul><li>a</li></ul>end");
    assert_eq!(linkify("- a\nend"), "<ul><li>a</li></ul><br>end");
}

#[test]
fn test_long_line_of_unclosed_openers() {
    let input = "*a ".repeat(16 * 1024);
    assert_eq!(linkify(&input), input);
}

#[test]
fn test_message_with_everything() {
    let input = "# Update\nSee **the site** at www.example.com for `details`.\n- one\n- two";
    assert_eq!(
        linkify(input),
        format!(
            "<h1>Update</h1><br>See <strong>the site</strong> at {} for <code>details</code>.<br>\
             <ul><li>one</li><li>two</li></ul>",
            anchor("https://www.example.com")
        )
    );
}

#[test]
fn test_url_keeps_non_tail_characters() {
    // Only sentence punctuation is split off; other trailing characters stay in the href.
    assert_eq!(
        linkify("http://a.b/x** ok"),
        format!("{} ok", anchor("http://a.b/x**"))
    );
}

proptest! {
    #[test]
    fn prop_plain_text_only_converts_newlines(s in r"[a-z ,\n]{0,64}") {
        prop_assert_eq!(linkify(&s), s.replace('\n', "<br>"));
    }

    #[test]
    fn prop_plain_text_with_sentinels_is_preserved(s in r"[a-z \n\x{E000}\x{E001}0-9]{0,48}") {
        // Digits only count as a list marker when followed by ". ".
        prop_assert_eq!(linkify(&s), s.replace('\n', "<br>"));
    }

    #[test]
    fn prop_no_stash_tokens_leak(s in any::<String>()) {
        prop_assume!(!s.contains(['\u{E000}', '\u{E001}']));
        let html = linkify(&s);
        prop_assert!(!html.contains(['\u{E000}', '\u{E001}']), "html contains private-use sentinel chars");
    }

    #[test]
    fn prop_deterministic(s in any::<String>()) {
        prop_assert_eq!(linkify(&s), linkify(&s));
    }
}
