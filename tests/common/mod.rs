// tests/common/mod.rs

//! Shared test utilities and helpers for integration tests.

#![allow(dead_code)]

use std::path::Path;

/// Byte at a given position of a generated band, distinct per seed
pub fn fixture_byte(seed: u8, group: usize, entry: usize, byte: usize) -> u8 {
    let index = (group * 20 + entry * 4 + byte) as u8;
    index.wrapping_mul(7).wrapping_add(seed)
}

/// Text of a band dump in the upstream format: `,<TAB>` + CRLF after every
/// line, blank line after every group.
pub fn band_text(seed: u8, groups: usize, entries: usize, bytes: usize) -> String {
    let mut text = String::new();
    for g in 0..groups {
        for e in 0..entries {
            let tokens: Vec<String> = (0..bytes)
                .map(|b| format!("0x{:02X}", fixture_byte(seed, g, e, b)))
                .collect();
            text.push_str(&tokens.join(","));
            text.push_str(",\t\r\n");
        }
        text.push_str("\r\n");
    }
    text
}

/// All bytes of a generated band, in declaration order
pub fn band_bytes(seed: u8, groups: usize, entries: usize, bytes: usize) -> Vec<u8> {
    let mut out = Vec::new();
    for g in 0..groups {
        for e in 0..entries {
            for b in 0..bytes {
                out.push(fixture_byte(seed, g, e, b));
            }
        }
    }
    out
}

/// Write a standard 21x5x4 band file
pub fn write_band(dir: &Path, name: &str, seed: u8) {
    std::fs::write(dir.join(name), band_text(seed, 21, 5, 4)).unwrap();
}

/// A parsed C initializer: nested lists of byte literals
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    List(Vec<Node>),
    Byte(u8),
}

impl Node {
    pub fn children(&self) -> &[Node] {
        match self {
            Node::List(items) => items,
            Node::Byte(_) => panic!("expected a list, found a byte"),
        }
    }

    /// Every byte literal in source order
    pub fn bytes(&self) -> Vec<u8> {
        let mut out = Vec::new();
        self.collect_bytes(&mut out);
        out
    }

    fn collect_bytes(&self, out: &mut Vec<u8>) {
        match self {
            Node::Byte(b) => out.push(*b),
            Node::List(items) => items.iter().for_each(|n| n.collect_bytes(out)),
        }
    }
}

/// A parsed `type name[d0][d1]... = { ... };` declaration
#[derive(Debug)]
pub struct Declaration {
    pub element_type: String,
    pub name: String,
    pub dims: Vec<usize>,
    pub init: Node,
}

/// Minimal parser for the generated header. Panics on malformed input,
/// including unbalanced braces and missing `;`.
pub fn parse_declaration(text: &str) -> Declaration {
    let (head, body) = text.split_once('=').expect("missing '='");
    let mut words = head.split_whitespace();
    let element_type = words.next().expect("missing type").to_string();
    let declarator = words.next().expect("missing declarator");

    let (name, dims) = declarator.split_once('[').expect("missing dimensions");
    let dims = dims
        .trim_end_matches(']')
        .split("][")
        .map(|d| d.parse().expect("dimension is not a number"))
        .collect();

    let chars: Vec<char> = body.chars().collect();
    let mut pos = 0;
    let init = parse_node(&chars, &mut pos);

    skip_ws(&chars, &mut pos);
    assert_eq!(chars.get(pos), Some(&';'), "declaration must end with ';'");
    pos += 1;
    skip_ws(&chars, &mut pos);
    assert_eq!(pos, chars.len(), "trailing text after ';'");

    Declaration {
        element_type,
        name: name.to_string(),
        dims,
        init,
    }
}

fn skip_ws(chars: &[char], pos: &mut usize) {
    while *pos < chars.len() && chars[*pos].is_whitespace() {
        *pos += 1;
    }
}

fn parse_node(chars: &[char], pos: &mut usize) -> Node {
    skip_ws(chars, pos);
    if chars.get(*pos) == Some(&'{') {
        *pos += 1;
        let mut items = Vec::new();
        loop {
            skip_ws(chars, pos);
            match chars.get(*pos) {
                Some('}') => {
                    *pos += 1;
                    return Node::List(items);
                }
                Some(',') if !items.is_empty() => {
                    *pos += 1;
                }
                Some(_) => items.push(parse_node(chars, pos)),
                None => panic!("unbalanced braces"),
            }
        }
    }

    let start = *pos;
    while *pos < chars.len() && chars[*pos].is_ascii_alphanumeric() {
        *pos += 1;
    }
    let token: String = chars[start..*pos].iter().collect();
    let digits = token
        .strip_prefix("0x")
        .unwrap_or_else(|| panic!("unexpected token '{token}'"));
    Node::Byte(u8::from_str_radix(digits, 16).expect("invalid hex literal"))
}

/// Check an initializer has exactly the given nested lengths
pub fn assert_shape(node: &Node, dims: &[usize]) {
    let (first, rest) = dims.split_first().expect("no dimensions");
    let children = node.children();
    assert_eq!(children.len(), *first, "wrong length at depth {}", 4 - dims.len());
    if !rest.is_empty() {
        for child in children {
            assert_shape(child, rest);
        }
    } else {
        assert!(children.iter().all(|c| matches!(c, Node::Byte(_))));
    }
}
