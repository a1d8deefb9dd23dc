//! Textual pair format: one `<index>,<char>` pair per line.
//!
//! An empty char field is the terminal pair. The whole blob is trimmed
//! before splitting, so a terminal pair whose character is itself
//! whitespace at the very start or end of the blob cannot survive a
//! serialize/parse round trip through this format.

use crate::error::{Error, Result};
use crate::lz78::Pair;

/// Serialize a pair sequence into the textual `index,char` format.
///
/// # Example
///
/// ```
/// use textcomp::lz78::{encode, serialize};
///
/// assert_eq!(serialize(&encode("aaaa")), "0,a\n1,a\n1,");
/// ```
pub fn serialize(pairs: &[Pair]) -> String {
    pairs
        .iter()
        .map(|pair| match pair.next {
            Some(c) => format!("{},{}", pair.index, c),
            None => format!("{},", pair.index),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Parse a textual blob back into a pair sequence.
///
/// Leading and trailing whitespace of the whole blob is trimmed, then each
/// line must hold exactly two comma-separated fields: a non-negative
/// base-10 index and zero or one character.
///
/// # Returns
///
/// The parsed pairs, or [`Error::MalformedLine`] naming the first line that
/// does not parse. An empty blob does not parse: its single line has no
/// comma.
///
/// # Example
///
/// ```
/// use textcomp::lz78::{parse, Pair};
///
/// let pairs = parse("0,B\n0,C\n1,C").unwrap();
/// assert_eq!(pairs[2], Pair { index: 1, next: Some('C') });
/// ```
pub fn parse(blob: &str) -> Result<Vec<Pair>> {
    blob.trim()
        .split('\n')
        .enumerate()
        .map(|(i, line)| {
            let malformed = || Error::MalformedLine {
                line: i + 1,
                content: line.to_string(),
            };

            let mut fields = line.split(',');
            let index_field = fields.next().ok_or_else(malformed)?;
            let char_field = fields.next().ok_or_else(malformed)?;
            if fields.next().is_some() {
                return Err(malformed());
            }

            let index: usize = index_field.parse().map_err(|_| malformed())?;
            let mut chars = char_field.chars();
            let next = chars.next();
            if chars.next().is_some() {
                return Err(malformed());
            }

            Ok(Pair { index, next })
        })
        .collect()
}
