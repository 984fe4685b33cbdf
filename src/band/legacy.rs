// src/band/legacy.rs

//! Text-rewrite conversion matching the historical header layout.
//!
//! Instead of parsing, the band text is turned into a C literal by a fixed
//! sequence of substitutions on CRLF text. Nothing is validated, so a file
//! with the wrong shape produces a header with the wrong shape. Use this
//! only when a byte-for-byte match with previously generated headers is
//! required.

use super::render::RenderOptions;

/// What the rewrite leaves behind after the last group: the sibling
/// boundary opened by the blank line that ends every dump
pub const TRAILING_ARTIFACT: &str = ",{\r\n";

/// Rewrite the text of one `.hz` file into a nested brace literal.
///
/// Steps, in order:
/// 1. blank line → `},{` sibling boundary
/// 2. trailing `,<TAB>` at end of line → `},`
/// 3. space-preceded `0x` token opens an innermost array
/// 4. line-start `0x` token opens an innermost array
/// 5. open the three nesting levels, drop the trailing artifact, close
pub fn transform(text: &str) -> String {
    let text = normalize(text);

    let text = text.replace("\r\n\r\n", "\r\n\t\t},{\r\n");
    let text = text.replace(",\t\r\n", "},\r\n ");
    let text = text.replace(" 0x", "\t\t\t{ 0x");
    let text = text.replace("\r\n0x", "\r\n\t\t\t{ 0x");

    let body = text.strip_suffix(TRAILING_ARTIFACT).unwrap_or(&text);
    format!("\t{{\r\n\t\t{{\r\n\t\t\t{{ {body}\r\n\t}}")
}

/// Wrap legacy literals in the declaration, laid out as older headers were
pub fn render_declaration(literals: &[String], options: &RenderOptions) -> String {
    let mut out = format!(
        "{} {}[{}]{} = \r\n{{",
        options.element_type,
        options.array_name,
        literals.len(),
        options.shape.dimensions(),
    );

    for literal in literals {
        out.push_str("\r\n");
        out.push_str(literal);
        out.push_str("\r\n,\r\n");
    }

    // Drop the separator after the last entry
    if !literals.is_empty() {
        out.truncate(out.len() - ",\r\n".len());
    }

    out.push_str("};");
    out
}

/// CRLF line endings, and the text ends in exactly one `,<TAB>` line
/// terminator followed by a blank line.
///
/// Dumps normally end that way already. A file whose last line lost its
/// delimiter, or that has extra blank lines at the end, would otherwise
/// leave a different tail and the fixed-width trim would cut into the
/// last byte group.
fn normalize(text: &str) -> String {
    let unix = text.replace("\r\n", "\n");
    let body = unix.trim_end_matches(|c: char| c.is_whitespace() || c == ',');
    let mut out = body.replace('\n', "\r\n");
    out.push_str(",\t\r\n\r\n");
    out
}
