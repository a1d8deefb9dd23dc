use crate::error::{Error, Result};
use crate::lz78::Pair;

/// Decompress a sequence of LZ78 pairs back into the original text.
///
/// # Algorithm
///
/// 1. Initialize the dictionary with the empty string at code 0.
/// 2. For each pair `(index, next)`, look up the phrase at `index`, append
///    `next` (if any), and append the result to the output.
/// 3. Register the new phrase under the next sequential code, unless it is
///    empty (the terminal pair of an empty input position registers nothing).
///
/// Because codes are assigned in the same order the encoder assigned them,
/// the two dictionaries are structurally identical after the same pairs.
///
/// # Parameters
///
/// - `pairs`: A slice of pairs produced by [`encode`](crate::lz78::encode)
///   or parsed from the textual format.
///
/// # Returns
///
/// The reconstructed text, or [`Error::IndexOutOfRange`] if a pair
/// references a code that has not been assigned yet.
///
/// # Example
///
/// ```
/// use textcomp::lz78::{decode, encode};
///
/// let pairs = encode("TOBEORNOTTOBE");
/// assert_eq!(decode(&pairs).unwrap(), "TOBEORNOTTOBE");
/// ```
pub fn decode(pairs: &[Pair]) -> Result<String> {
    let mut dict: Vec<String> = vec![String::new()];
    let mut output = String::new();

    for (position, pair) in pairs.iter().enumerate() {
        if pair.index >= dict.len() {
            return Err(Error::IndexOutOfRange {
                position,
                index: pair.index,
                assigned: dict.len(),
            });
        }

        let mut phrase = dict[pair.index].clone();
        if let Some(c) = pair.next {
            phrase.push(c);
        }
        output.push_str(&phrase);

        if !phrase.is_empty() {
            dict.push(phrase);
        }
    }

    Ok(output)
}
