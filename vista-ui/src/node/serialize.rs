use super::arena::NodeArena;
use super::markup::is_void;
use super::types::{Node, NodeId};
use std::fmt::Write;

/// Escape a value for interpolation into markup, text or attribute position.
pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn escape_text(value: &str, out: &mut String) {
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            _ => out.push(ch),
        }
    }
}

fn escape_attribute(value: &str, out: &mut String) {
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            _ => out.push(ch),
        }
    }
}

/// Serialized children of `id`, like DOM `innerHTML`.
pub fn inner_html(arena: &NodeArena, id: NodeId) -> String {
    let mut out = String::new();
    for child in arena.children(id) {
        write_node(arena, *child, &mut out);
    }
    out
}

/// `id` itself plus its children, like DOM `outerHTML`.
pub fn outer_html(arena: &NodeArena, id: NodeId) -> String {
    let mut out = String::new();
    write_node(arena, id, &mut out);
    out
}

fn write_node(arena: &NodeArena, id: NodeId, out: &mut String) {
    match arena.get(id) {
        Some(Node::Text(text)) => escape_text(text, out),
        Some(Node::Fragment(container)) => {
            for child in &container.children {
                write_node(arena, *child, out);
            }
        }
        Some(Node::Element(el)) => {
            let _ = write!(out, "<{}", el.tag);
            for attr in &el.attributes {
                let _ = write!(out, " {}=\"", attr.name);
                escape_attribute(&attr.value, out);
                out.push('"');
            }
            out.push('>');
            if is_void(&el.tag) {
                return;
            }
            for child in &el.children {
                write_node(arena, *child, out);
            }
            let _ = write!(out, "</{}>", el.tag);
        }
        None => {}
    }
}
