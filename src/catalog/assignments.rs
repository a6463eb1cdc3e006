//! Assignment-placeholder extraction
//!
//! One linear walk over the whole document. The most recently seen `title`
//! and `number` act as running state; they are only overwritten when the
//! next `title`/`number` element is encountered, mirroring the catalog's
//! convention that both appear once per control ahead of its body text.

use regex::Regex;

use crate::xml::{local_name, Document};

/// Extract every placeholder into newline-terminated lines.
///
/// Block shape per matching text node: the `[<title>]` heading (once per
/// control), the `#<number>: <raw text>` comment (once per node), one line
/// per captured value, then a single blank line. A match seen before any
/// title or number has been encountered emits its values without heading or
/// comment lines.
pub(crate) fn extract(document: &Document, pattern: &Regex) -> Vec<String> {
    let mut lines = Vec::new();
    let mut heading: Option<String> = None;
    let mut number: Option<String> = None;
    let mut insert_heading = false;

    for id in document.descendants(document.root()) {
        let node = document.node(id);
        let tag = local_name(&node.name);
        if tag == "title" {
            if let Some(text) = &node.text {
                heading = Some(format!("[{}]\n", text));
                insert_heading = true;
            }
        }
        if tag == "number" {
            number = node.text.clone();
        }

        let Some(text) = node.text.as_deref() else {
            continue;
        };

        let mut insert_comment = true;
        let mut matched = false;
        for caps in pattern.captures_iter(text) {
            matched = true;
            if insert_heading {
                if let Some(h) = &heading {
                    lines.push(h.clone());
                }
                insert_heading = false;
            }
            if insert_comment {
                if let Some(n) = &number {
                    lines.push(format!("#{}: {}\n", n, text));
                }
                insert_comment = false;
            }
            let value = caps.get(2).map_or("", |m| m.as_str());
            lines.push(format!("{}\n", value));
        }
        if matched {
            lines.push("\n".to_string());
        }
    }

    lines
}
