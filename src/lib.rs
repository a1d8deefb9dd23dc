//! Text-compression engines: LZ78 dictionary coding and Huffman analysis.
//!
//! Two independent pipelines with no shared state:
//!
//! - [`lz78`] compresses text into (dictionary-index, next-character)
//!   pairs and decompresses them back, with a textual pair format and
//!   size statistics.
//! - [`huffman`] builds a prefix-free code table from symbol frequencies
//!   and reports average code length, entropy, and coding efficiency.
//!
//! All operations are synchronous pure functions of their inputs; the
//! crate performs no I/O and installs no logger (it logs through the
//! [`log`] facade).
//!
//! # Examples
//!
//! ```
//! use textcomp::{huffman, lz78};
//!
//! let compressed = lz78::compress("BCBC").unwrap();
//! let restored = lz78::decompress(&compressed.blob).unwrap();
//! assert_eq!(restored.text, "BCBC");
//!
//! let report = huffman::analyze("BCBC").unwrap();
//! assert_eq!(report.efficiency, 100.0);
//! ```

pub mod error;
pub mod huffman;
pub mod lz78;
pub mod stats;

pub use error::{Error, Result};
