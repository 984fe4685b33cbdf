// src/band/parser.rs

//! Parser for `.hz` band dumps.

use super::{Band, BandError};

/// Parse the text of a `.hz` file into a [`Band`].
///
/// Blank lines separate groups, each data line is one entry, and commas
/// separate the bytes of an entry. The trailing `,<TAB>` every dump line
/// ends with is tolerated but not required, so a file whose last line lost
/// its delimiter parses to the same band. An empty token anywhere else, as
/// in `0x01,,0x02`, is a [`BandError::InvalidToken`]. Runs of blank lines
/// count as one separator. Shape is not checked here; see [`Band::validate`].
pub fn parse_band(text: &str) -> Result<Band, BandError> {
    let mut groups = Vec::new();
    let mut current: Vec<Vec<u8>> = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;

        if line.trim().is_empty() {
            if !current.is_empty() {
                groups.push(std::mem::take(&mut current));
            }
            continue;
        }

        let mut tokens: Vec<&str> = line.split(',').map(str::trim).collect();
        // Only the delimiter ending the line may leave an empty token
        if tokens.last().is_some_and(|token| token.is_empty()) {
            tokens.pop();
        }

        let entry = tokens
            .into_iter()
            .map(|token| parse_byte_token(token, line_no))
            .collect::<Result<Vec<u8>, _>>()?;
        current.push(entry);
    }

    if !current.is_empty() {
        groups.push(current);
    }

    Ok(Band::new(groups))
}

/// Parse a single `0xNN` token
pub fn parse_byte_token(token: &str, line: usize) -> Result<u8, BandError> {
    let invalid = || BandError::InvalidToken {
        line,
        token: token.to_string(),
    };

    let digits = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
        .ok_or_else(invalid)?;

    if digits.is_empty() || digits.len() > 2 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    u8::from_str_radix(digits, 16).map_err(|_| invalid())
}
