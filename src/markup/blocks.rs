//! Line-level passes: headings, rules, blockquotes and list blocks.
//!
//! Each line is classified once. Precedence follows the order the passes
//! are applied in: `### ` before `## ` before `# `, then `---`, then `> `,
//! then ordered items, then unordered items. A line already turned into
//! markup starts with a stash token, so it can never match a later pass.

use super::patterns::ORDERED_ITEM_RE;
use super::stash::Stash;

/// Which list a run of item lines belongs to.
///
/// Both kinds render as `<ul>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListKind {
    Ordered,
    Unordered,
}

/// A classified input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Line<'a> {
    Heading(u8, &'a str),
    Rule,
    Quote(&'a str),
    Item(ListKind, &'a str),
    Plain(&'a str),
}

impl<'a> Line<'a> {
    fn classify(line: &'a str) -> Self {
        for (level, marker) in [(3, "### "), (2, "## "), (1, "# ")] {
            if let Some(rest) = non_empty_after(line, marker) {
                return Line::Heading(level, rest);
            }
        }

        if line == "---" {
            return Line::Rule;
        }

        if let Some(rest) = non_empty_after(line, "> ") {
            return Line::Quote(rest);
        }

        if let Some(caps) = ORDERED_ITEM_RE.captures(line)
            && let Some(content) = caps.get(1)
        {
            return Line::Item(ListKind::Ordered, &line[content.range()]);
        }

        if let Some(rest) = non_empty_after(line, "- ") {
            return Line::Item(ListKind::Unordered, rest);
        }

        Line::Plain(line)
    }
}

fn non_empty_after<'a>(line: &'a str, marker: &str) -> Option<&'a str> {
    line.strip_prefix(marker).filter(|rest| !rest.is_empty())
}

/// Render block-level markup line by line.
///
/// Consecutive items of the same list kind are merged into one `<ul>`;
/// the newlines between them are consumed. The newline that ends an
/// ordered block is consumed too; after an unordered block it is kept.
pub fn render_blocks(text: &str, stash: &mut Stash) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 4);
    let mut open_list: Option<ListKind> = None;

    for (index, raw) in text.split('\n').enumerate() {
        let line = Line::classify(raw);
        let item_kind = match line {
            Line::Item(kind, _) => Some(kind),
            _ => None,
        };

        if item_kind != open_list {
            if open_list.is_some() {
                stash.push_protected(&mut out, "</ul>");
            }
            // An ordered block swallows the newline that ends it.
            if index > 0 && open_list != Some(ListKind::Ordered) {
                out.push('\n');
            }
            if item_kind.is_some() {
                stash.push_protected(&mut out, "<ul>");
            }
            open_list = item_kind;
        } else if open_list.is_none() && index > 0 {
            out.push('\n');
        }

        match line {
            Line::Heading(level, content) => {
                stash.push_protected(&mut out, format!("<h{level}>"));
                out.push_str(content);
                stash.push_protected(&mut out, format!("</h{level}>"));
            }
            Line::Rule => stash.push_protected(&mut out, "<hr>"),
            Line::Quote(content) => {
                stash.push_protected(&mut out, "<blockquote>");
                out.push_str(content);
                stash.push_protected(&mut out, "</blockquote>");
            }
            Line::Item(_, content) => {
                stash.push_protected(&mut out, "<li>");
                out.push_str(content);
                stash.push_protected(&mut out, "</li>");
            }
            Line::Plain(content) => out.push_str(content),
        }
    }

    if open_list.is_some() {
        stash.push_protected(&mut out, "</ul>");
    }

    out
}
