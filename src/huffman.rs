//! Huffman coding analysis.
//!
//! Builds variable-length prefix-free codes from symbol frequencies and
//! reports how close they come to the entropy bound. The pipeline runs
//! frequencies → tree → codes → metrics; [`analyze`] chains all four
//! stages, and each stage is available on its own.
//!
//! Codes are produced as `0`/`1` strings for inspection and display; they
//! are never packed into an actual bitstream.

use log::debug;

use crate::error::Result;

pub mod code;
pub mod metrics;
pub mod probability;
pub mod tree;

pub use code::{assign_codes, CodeAssignment};
pub use metrics::{build_report, HuffmanReport, SymbolRow};
pub use probability::{probability_table, SymbolProbability};
pub use tree::{build_tree, HuffmanNode};

/// Run the full Huffman pipeline on a text.
///
/// # Returns
///
/// A [`HuffmanReport`] with the per-symbol result matrix, the aggregate
/// average code length and entropy, the coding efficiency, the merge tree,
/// and the display-ordered code table.
/// Fails with [`Error::EmptyAlphabet`](crate::Error::EmptyAlphabet) for
/// empty text.
///
/// # Example
///
/// ```
/// use textcomp::huffman::analyze;
///
/// let report = analyze("ab").unwrap();
/// assert_eq!(report.entropy, 1.0);
/// assert_eq!(report.efficiency, 100.0);
/// ```
pub fn analyze(text: &str) -> Result<HuffmanReport> {
    let table = probability_table(text)?;
    // probability_table only succeeds on a non-empty alphabet, so the tree
    // always has a root.
    let root = build_tree(&table).ok_or(crate::Error::EmptyAlphabet)?;
    let codes = assign_codes(&root);
    let report = build_report(table, codes, root);
    debug!(
        "analyzed {} symbols: L = {}, H = {}, efficiency = {}%",
        report.rows.len(),
        report.mean_length,
        report.entropy,
        report.efficiency
    );
    Ok(report)
}
