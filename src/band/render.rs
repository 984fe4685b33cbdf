// src/band/render.rs

//! Rendering of bands as C array initializers

use super::{Band, BandShape};
use serde::{Deserialize, Serialize};

/// Line terminator used in the generated header
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    #[default]
    Lf,
    Crlf,
}

impl LineEnding {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::Crlf => "\r\n",
        }
    }
}

/// Options controlling the declaration text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// C element type of the array (`byte`)
    pub element_type: String,
    /// Name of the declared array (`bands`)
    pub array_name: String,
    /// Inner dimensions written after the band count
    pub shape: BandShape,
    pub line_ending: LineEnding,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            element_type: "byte".to_string(),
            array_name: "bands".to_string(),
            shape: BandShape::default(),
            line_ending: LineEnding::Lf,
        }
    }
}

/// Render one band as a nested brace literal, indented one level.
///
/// ```text
///     {
///         {
///             { 0x01, 0x02, 0x03, 0x04 },
///             ...
///         },
///         ...
///     }
/// ```
pub fn render_band(band: &Band, options: &RenderOptions) -> String {
    let nl = options.line_ending.as_str();
    let mut out = String::new();

    out.push_str("\t{");
    out.push_str(nl);

    let group_count = band.groups().len();
    for (g, group) in band.groups().iter().enumerate() {
        out.push_str("\t\t{");
        out.push_str(nl);

        for (e, entry) in group.iter().enumerate() {
            out.push_str("\t\t\t{ ");
            for (b, byte) in entry.iter().enumerate() {
                if b > 0 {
                    out.push_str(", ");
                }
                out.push_str(&format!("0x{byte:02X}"));
            }
            out.push_str(" }");
            if e + 1 < group.len() {
                out.push(',');
            }
            out.push_str(nl);
        }

        out.push_str("\t\t}");
        if g + 1 < group_count {
            out.push(',');
        }
        out.push_str(nl);
    }

    out.push_str("\t}");
    out
}

/// Wrap rendered band literals in the array declaration.
///
/// The outer dimension is the number of literals; an empty slice yields a
/// declaration with a zero outer dimension and an empty initializer.
pub fn render_declaration(literals: &[String], options: &RenderOptions) -> String {
    let nl = options.line_ending.as_str();
    let mut out = String::new();

    out.push_str(&format!(
        "{} {}[{}]{} ={nl}{{{nl}",
        options.element_type,
        options.array_name,
        literals.len(),
        options.shape.dimensions(),
    ));

    for (i, literal) in literals.iter().enumerate() {
        out.push_str(literal);
        if i + 1 < literals.len() {
            out.push(',');
        }
        out.push_str(nl);
    }

    out.push_str("};");
    out.push_str(nl);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_band_layout() {
        let band = Band::new(vec![
            vec![vec![0x01, 0x02], vec![0x0A, 0xFF]],
            vec![vec![0x00, 0x10], vec![0x20, 0x30]],
        ]);
        let expected = "\t{\n\
                        \t\t{\n\
                        \t\t\t{ 0x01, 0x02 },\n\
                        \t\t\t{ 0x0A, 0xFF }\n\
                        \t\t},\n\
                        \t\t{\n\
                        \t\t\t{ 0x00, 0x10 },\n\
                        \t\t\t{ 0x20, 0x30 }\n\
                        \t\t}\n\
                        \t}";
        assert_eq!(render_band(&band, &RenderOptions::default()), expected);
    }

    #[test]
    fn test_render_crlf() {
        let band = Band::new(vec![vec![vec![0x01]]]);
        let options = RenderOptions {
            line_ending: LineEnding::Crlf,
            ..Default::default()
        };
        let text = render_band(&band, &options);
        assert_eq!(text, "\t{\r\n\t\t{\r\n\t\t\t{ 0x01 }\r\n\t\t}\r\n\t}");
    }

    #[test]
    fn test_declaration_with_two_entries() {
        let literals = vec!["\t{ A }".to_string(), "\t{ B }".to_string()];
        let text = render_declaration(&literals, &RenderOptions::default());
        assert_eq!(
            text,
            "byte bands[2][21][5][4] =\n{\n\t{ A },\n\t{ B }\n};\n"
        );
    }

    #[test]
    fn test_empty_declaration() {
        let text = render_declaration(&[], &RenderOptions::default());
        assert_eq!(text, "byte bands[0][21][5][4] =\n{\n};\n");
    }

    #[test]
    fn test_custom_names() {
        let options = RenderOptions {
            element_type: "uint8_t".to_string(),
            array_name: "eq_table".to_string(),
            shape: BandShape::new(2, 3, 4),
            line_ending: LineEnding::Lf,
        };
        let text = render_declaration(&["\t{}".to_string()], &options);
        assert!(text.starts_with("uint8_t eq_table[1][2][3][4] =\n"));
    }
}
