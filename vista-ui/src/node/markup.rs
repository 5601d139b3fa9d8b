//! Markup fragment parser.
//!
//! Turns an HTML fragment into detached nodes inside a [`NodeArena`]. This is
//! the `createContextualFragment` half of the display tree: the result is a
//! [`Node::Fragment`] that is never attached until a caller moves its children.
//!
//! Whitespace-only text between tags is kept as text nodes, the same way a
//! browser keeps it, because the update patcher looks at first children.

use super::arena::NodeArena;
use super::types::{Node, NodeId};
use crate::error::{MarkupError, Result};
use regex::{Captures, Regex};
use std::sync::OnceLock;

/// Elements that never have content or a closing tag.
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

pub fn is_void(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag)
}

fn open_tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r#"^<([a-zA-Z][a-zA-Z0-9:-]*)((?:\s+[^\s"'>/=]+(?:\s*=\s*(?:"[^"]*"|'[^']*'|[^\s"'=<>`]+))?)*)\s*(/?)>"#,
        )
        .expect("open tag pattern")
    })
}

fn close_tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^</\s*([a-zA-Z][a-zA-Z0-9:-]*)\s*>").expect("close tag pattern"))
}

fn attribute_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"([^\s"'>/=]+)(?:\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'=<>`]+)))?"#)
            .expect("attribute pattern")
    })
}

fn reference_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"&(#[0-9]+|#[xX][0-9a-fA-F]+|amp|lt|gt|quot|apos|nbsp);")
            .expect("character reference pattern")
    })
}

/// Decode the character references the serializer emits, plus numeric ones.
/// Unknown references are left untouched.
pub fn decode_references(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }
    reference_re()
        .replace_all(text, |caps: &Captures| {
            let name = &caps[1];
            let decoded = match name {
                "amp" => Some('&'),
                "lt" => Some('<'),
                "gt" => Some('>'),
                "quot" => Some('"'),
                "apos" => Some('\''),
                "nbsp" => Some('\u{a0}'),
                _ => {
                    let code = if let Some(hex) = name.strip_prefix("#x").or(name.strip_prefix("#X")) {
                        u32::from_str_radix(hex, 16).ok()
                    } else {
                        name[1..].parse::<u32>().ok()
                    };
                    code.and_then(char::from_u32)
                }
            };
            match decoded {
                Some(ch) => ch.to_string(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// Parse `markup` into a new detached fragment and return its id.
///
/// On error nothing is left behind in the arena.
pub fn parse_fragment(arena: &mut NodeArena, markup: &str) -> Result<NodeId> {
    let fragment = arena.create(Node::fragment());
    match parse_into(arena, fragment, markup) {
        Ok(()) => Ok(fragment),
        Err(err) => {
            arena.dispose(fragment);
            Err(err)
        }
    }
}

fn parse_into(arena: &mut NodeArena, fragment: NodeId, markup: &str) -> Result<()> {
    let mut open: Vec<NodeId> = vec![fragment];
    let mut pos = 0;

    while pos < markup.len() {
        let rest = &markup[pos..];
        let Some(lt) = rest.find('<') else {
            push_text(arena, &open, rest)?;
            break;
        };
        if lt > 0 {
            push_text(arena, &open, &rest[..lt])?;
            pos += lt;
            continue;
        }

        if let Some(comment) = rest.strip_prefix("<!--") {
            pos += match comment.find("-->") {
                Some(end) => 4 + end + 3,
                None => rest.len(),
            };
            continue;
        }
        if rest.starts_with("<!") {
            pos += rest.find('>').map(|end| end + 1).unwrap_or(rest.len());
            continue;
        }

        if let Some(caps) = close_tag_re().captures(rest) {
            let tag = caps[1].to_ascii_lowercase();
            let top = open.last().copied().unwrap_or(fragment);
            let matches_top = arena
                .get(top)
                .and_then(Node::as_element)
                .map(|el| el.tag.as_str() == tag)
                .unwrap_or(false);
            if !matches_top {
                return Err(MarkupError::UnexpectedClose { tag, offset: pos }.into());
            }
            open.pop();
            pos += caps[0].len();
            continue;
        }

        if let Some(caps) = open_tag_re().captures(rest) {
            let mut node = Node::element(&caps[1]);
            if let Some(el) = node.as_element_mut() {
                for attr in attribute_re().captures_iter(&caps[2]) {
                    let name = attr[1].to_ascii_lowercase();
                    if el.attribute(&name).is_some() {
                        continue;
                    }
                    let raw = attr
                        .get(2)
                        .or_else(|| attr.get(3))
                        .or_else(|| attr.get(4))
                        .map(|m| m.as_str())
                        .unwrap_or("");
                    el.set_attribute(&name, &decode_references(raw));
                }
            }
            let self_closing = !caps[3].is_empty();
            let void = node.as_element().map(|el| is_void(&el.tag)).unwrap_or(false);

            let parent = open.last().copied().unwrap_or(fragment);
            let id = arena.create(node);
            arena.append_child(parent, id)?;
            if !self_closing && !void {
                open.push(id);
            }
            pos += caps[0].len();
            continue;
        }

        // A '<' that does not start a tag is literal text, as in "a < b".
        let starts_tag = rest[1..]
            .chars()
            .next()
            .map(|c| c.is_ascii_alphabetic() || c == '/')
            .unwrap_or(false);
        if starts_tag {
            return Err(MarkupError::MalformedTag { offset: pos }.into());
        }
        push_text(arena, &open, "<")?;
        pos += 1;
    }

    if open.len() > 1 {
        let tag = open
            .last()
            .and_then(|id| arena.get(*id))
            .and_then(Node::as_element)
            .map(|el| el.tag.to_string())
            .unwrap_or_default();
        return Err(MarkupError::Unclosed { tag }.into());
    }
    Ok(())
}

/// Append text to the innermost open node, merging with a preceding text node.
fn push_text(arena: &mut NodeArena, open: &[NodeId], raw: &str) -> Result<()> {
    let Some(&parent) = open.last() else {
        return Ok(());
    };
    let text = decode_references(raw);
    if let Some(last) = arena.children(parent).last().copied() {
        if let Some(Node::Text(existing)) = arena.get_mut(last) {
            existing.push_str(&text);
            return Ok(());
        }
    }
    let id = arena.create(Node::text(text));
    arena.append_child(parent, id)
}
