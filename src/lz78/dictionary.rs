use crate::error::{Error, Result};
use crate::lz78::Pair;

/// One row of the displayable dictionary table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryEntry {
    /// The code assigned to the phrase. Code 0 is the empty phrase.
    pub index: usize,
    /// The substring the code represents.
    pub phrase: String,
}

/// Replay a pair sequence into an index → phrase table for display.
///
/// Registers every non-empty computed phrase under the next sequential code,
/// exactly as [`decode`](crate::lz78::decode) does, so the table's indices
/// are the indices the pairs actually reference. The table is ordered by
/// index ascending and includes the reserved entry 0 (empty phrase).
///
/// Returns [`Error::IndexOutOfRange`] under the same conditions as decoding.
pub fn rebuild_dictionary(pairs: &[Pair]) -> Result<Vec<DictionaryEntry>> {
    let mut phrases: Vec<String> = vec![String::new()];

    for (position, pair) in pairs.iter().enumerate() {
        if pair.index >= phrases.len() {
            return Err(Error::IndexOutOfRange {
                position,
                index: pair.index,
                assigned: phrases.len(),
            });
        }

        let mut phrase = phrases[pair.index].clone();
        if let Some(c) = pair.next {
            phrase.push(c);
        }
        if !phrase.is_empty() {
            phrases.push(phrase);
        }
    }

    Ok(phrases
        .into_iter()
        .enumerate()
        .map(|(index, phrase)| DictionaryEntry { index, phrase })
        .collect())
}

/// Legacy display mode: replay a pair sequence, skipping any phrase whose
/// string value is already somewhere in the table.
///
/// This deduplication can desynchronize the table's indices from the codes
/// the pairs reference, so unknown indices are tolerated and treated as the
/// empty prefix rather than rejected. Kept only for parity with the legacy
/// display; [`rebuild_dictionary`] is the variant that matches the
/// encoder's and decoder's own code counting.
pub fn rebuild_dictionary_deduped(pairs: &[Pair]) -> Vec<DictionaryEntry> {
    let mut phrases: Vec<String> = vec![String::new()];

    for pair in pairs {
        let mut phrase = phrases.get(pair.index).cloned().unwrap_or_default();
        if let Some(c) = pair.next {
            phrase.push(c);
        }
        if !phrase.is_empty() && !phrases.contains(&phrase) {
            phrases.push(phrase);
        }
    }

    phrases
        .into_iter()
        .enumerate()
        .map(|(index, phrase)| DictionaryEntry { index, phrase })
        .collect()
}
