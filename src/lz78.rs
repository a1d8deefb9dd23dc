//! LZ78 dictionary compression.
//!
//! The encoder and decoder share an implicit dictionary protocol: both
//! assign sequential codes to substrings in the same order, so the decoder
//! reconstructs the encoder's dictionary without it ever being transmitted.
//! The compressed representation is an ordered sequence of
//! (dictionary-index, next-character) pairs.
//!
//! [`compress`] and [`decompress`] bundle the full pipeline (pairs, display
//! dictionary, textual blob, size statistics); the individual steps are
//! available as [`encode`], [`decode`], [`serialize`], [`parse`], and
//! [`rebuild_dictionary`].

use log::debug;

use crate::error::{Error, Result};
use crate::stats::{CompressionStats, ExpansionStats};

pub mod decode;
pub mod dictionary;
pub mod encode;
pub mod format;

pub use decode::decode;
pub use dictionary::{rebuild_dictionary, rebuild_dictionary_deduped, DictionaryEntry};
pub use encode::encode;
pub use format::{parse, serialize};

/// Size units charged per pair when estimating compressed size. The estimate
/// stands in for actual bit packing, which this crate does not perform.
const SIZE_UNITS_PER_PAIR: usize = 2;

/// An LZ78 pair.
///
/// `index` references the dictionary code of the longest previously seen
/// phrase; `next` is the character that extended it, or `None` for the
/// terminal pair emitted when the input ends mid-match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pair {
    pub index: usize,
    pub next: Option<char>,
}

/// Everything produced by one compression run.
#[derive(Debug, Clone, PartialEq)]
pub struct Compressed {
    /// The encoded pair sequence.
    pub pairs: Vec<Pair>,
    /// The dictionary built while encoding, as a display table.
    pub dictionary: Vec<DictionaryEntry>,
    /// The pairs in the textual `index,char` format.
    pub blob: String,
    /// Size accounting for the run.
    pub stats: CompressionStats,
}

/// Everything produced by one decompression run.
#[derive(Debug, Clone, PartialEq)]
pub struct Decompressed {
    /// The pairs parsed from the input blob.
    pub pairs: Vec<Pair>,
    /// The reconstructed text.
    pub text: String,
    /// The dictionary rebuilt while decoding, as a display table.
    pub dictionary: Vec<DictionaryEntry>,
    /// Size accounting for the run.
    pub stats: ExpansionStats,
}

/// Compress text and bundle the pair sequence with its display dictionary,
/// textual serialization, and size statistics.
///
/// # Returns
///
/// [`Error::EmptySource`] for empty input; size ratios are undefined for a
/// zero-byte source.
///
/// # Example
///
/// ```
/// use textcomp::lz78::compress;
///
/// let result = compress("BCBC").unwrap();
/// assert_eq!(result.blob, "0,B\n0,C\n1,C");
/// assert_eq!(result.stats.original_size, 4);
/// ```
pub fn compress(text: &str) -> Result<Compressed> {
    if text.is_empty() {
        return Err(Error::EmptySource);
    }

    let pairs = encode(text);
    let dictionary = rebuild_dictionary(&pairs)?;
    let blob = serialize(&pairs);
    let stats = CompressionStats::new(text.len(), pairs.len() * SIZE_UNITS_PER_PAIR)?;
    debug!(
        "compressed {} bytes into {} pairs ({} dictionary entries)",
        stats.original_size,
        pairs.len(),
        dictionary.len()
    );

    Ok(Compressed {
        pairs,
        dictionary,
        blob,
        stats,
    })
}

/// Parse a textual blob, decode it, and bundle the text with the rebuilt
/// dictionary and size statistics.
///
/// # Example
///
/// ```
/// use textcomp::lz78::decompress;
///
/// let result = decompress("0,B\n0,C\n1,C").unwrap();
/// assert_eq!(result.text, "BCBC");
/// ```
pub fn decompress(blob: &str) -> Result<Decompressed> {
    let pairs = parse(blob)?;
    let text = decode(&pairs)?;
    let dictionary = rebuild_dictionary(&pairs)?;
    let stats = ExpansionStats::new(pairs.len() * SIZE_UNITS_PER_PAIR, text.len())?;
    debug!(
        "decompressed {} pairs into {} bytes",
        pairs.len(),
        stats.decompressed_size
    );

    Ok(Decompressed {
        pairs,
        text,
        dictionary,
        stats,
    })
}
