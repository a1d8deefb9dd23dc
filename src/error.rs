//! Error types shared by the compression modules.
//!
//! Every error aborts the operation that raised it; no partial output is
//! returned alongside an error, and nothing is retried internally.

use thiserror::Error;

/// Result type for compression operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the LZ78 and Huffman pipelines.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A persisted pair line did not parse into `index,char`.
    #[error("line {line}: {content:?} is not an `index,char` pair")]
    MalformedLine {
        /// 1-based line number within the blob.
        line: usize,
        /// The offending line, verbatim.
        content: String,
    },

    /// A pair referenced a dictionary code that has not been assigned yet.
    #[error("pair {position}: index {index} out of range ({assigned} codes assigned)")]
    IndexOutOfRange {
        /// 0-based position of the pair in the sequence.
        position: usize,
        /// The code the pair referenced.
        index: usize,
        /// How many codes were assigned at that point, reserved 0 included.
        assigned: usize,
    },

    /// Huffman analysis requested on text with no symbols.
    #[error("cannot build a Huffman tree for an empty alphabet")]
    EmptyAlphabet,

    /// Statistics requested on a zero-sized source.
    #[error("statistics are undefined for a zero-sized source")]
    EmptySource,
}
