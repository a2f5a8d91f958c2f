//! Plain text → HTML transformer.
//!
//! Converts raw message text into HTML through a fixed sequence of rewrite
//! passes. Each pass consumes the full output of the previous one. Markup
//! emitted by a pass is moved into a stash and replaced by
//! an opaque token, so no later pass can match inside a rendered tag or its
//! attributes. Tokens are expanded once every pass has run.
//!
//! ## Pipeline Order
//!
//! 1. **Fenced code** - ```` ```...``` ```` becomes `<pre><code>`, verbatim
//! 2. **Inline code** - `` `x` `` becomes `<code>`, verbatim
//! 3. **Images** - `http(s)://…(.jpg|.jpeg|.png|.gif|.webp)` becomes `<img>`
//! 4. **Links** - `http://`, `https://` and `www.` become anchors, with
//!    trailing punctuation kept outside the link
//! 5. **Blocks** - headings, `---` rules, `> ` quotes, list blocks
//! 6. **Emphasis** - `***`, `**`, `*`, then `++` and `~~` underline
//! 7. **Line breaks** - remaining newlines become `<br>`
//!
//! Code spans go first so their content is never interpreted; the order of
//! the remaining passes is the order the markers are recognized in.

mod blocks;
mod inline;
mod links;
mod patterns;
mod stash;

pub use links::split_tail;

use tracing::trace;

use self::stash::Stash;

/// Convert `text` to HTML.
///
/// Total over all inputs: unrecognized or unbalanced markers are left as
/// literal text, and input without any markers comes back unchanged apart
/// from newlines becoming `<br>`.
///
/// # Examples
///
/// ```
/// use marklink::linkify;
///
/// assert_eq!(linkify("# Title"), "<h1>Title</h1>");
/// assert_eq!(
///     linkify("**bold** and *em*"),
///     "<strong>bold</strong> and <em>em</em>"
/// );
/// assert_eq!(linkify("one\ntwo"), "one<br>two");
/// ```
pub fn transform(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut stash = Stash::new();
    let working = stash.protect_sentinels(text);

    let passes: [(&str, fn(&str, &mut Stash) -> String); 6] = [
        ("fenced_code", inline::render_fenced_code),
        ("inline_code", inline::render_inline_code),
        ("images", links::render_images),
        ("links", links::render_links),
        ("blocks", blocks::render_blocks),
        ("emphasis", inline::render_emphasis),
    ];

    let working = passes.iter().fold(working, |working, (name, pass)| {
        let next = pass(&working, &mut stash);
        trace!(pass = *name, len = next.len(), atoms = stash.len(), "markup pass");
        next
    });

    // Last pass: nothing reads the working text afterwards.
    let working = working.replace('\n', "<br>");

    stash.restore(&working)
}
