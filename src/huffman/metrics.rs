use crate::huffman::code::CodeAssignment;
use crate::huffman::probability::{round3, SymbolProbability};
use crate::huffman::tree::HuffmanNode;

/// One row of the per-symbol result matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolRow {
    pub symbol: char,
    pub probability: f64,
    pub code: String,
    /// `probability × code length`, rounded to 3 decimals.
    pub mean_length: f64,
    /// `probability × log2(1/probability)`, rounded to 3 decimals.
    pub entropy: f64,
}

/// The full output of a Huffman analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct HuffmanReport {
    /// Per-symbol rows, ordered like the probability table.
    pub rows: Vec<SymbolRow>,
    /// Average code length `L` in bits per symbol, 3 decimals.
    pub mean_length: f64,
    /// Entropy `H` in bits per symbol, 3 decimals.
    pub entropy: f64,
    /// `H / L × 100`, 2 decimals. 100 means the code meets the Shannon
    /// bound; a certain event has `H = 0` and therefore efficiency 0 even
    /// though its one-bit code is optimal.
    pub efficiency: f64,
    /// The merge tree the codes were read from.
    pub tree: HuffmanNode,
    /// The code table in display order (length, then binary value).
    pub codes: Vec<CodeAssignment>,
}

/// Assemble the result matrix and its aggregates.
///
/// Each row's contributions are rounded to 3 decimals first; the aggregate
/// `L` and `H` are the rounded sums of the rounded columns, matching how
/// the table is displayed. Efficiency is 0 when `L` is 0 (only reachable
/// when every probability rounds to 0).
pub fn build_report(
    table: Vec<SymbolProbability>,
    codes: Vec<CodeAssignment>,
    tree: HuffmanNode,
) -> HuffmanReport {
    let rows: Vec<SymbolRow> = table
        .into_iter()
        .map(|entry| {
            let code = codes
                .iter()
                .find(|c| c.symbol == entry.symbol)
                .map(|c| c.code.clone())
                .unwrap_or_default();
            let entropy = if entry.probability > 0.0 {
                round3(entry.probability * (1.0 / entry.probability).log2())
            } else {
                0.0
            };
            SymbolRow {
                symbol: entry.symbol,
                probability: entry.probability,
                mean_length: round3(entry.probability * code.chars().count() as f64),
                entropy,
                code,
            }
        })
        .collect();

    let mean_length = round3(rows.iter().map(|r| r.mean_length).sum());
    let entropy = round3(rows.iter().map(|r| r.entropy).sum());
    let efficiency = if mean_length > 0.0 {
        ((entropy / mean_length * 100.0) * 100.0).round() / 100.0
    } else {
        0.0
    };

    HuffmanReport {
        rows,
        mean_length,
        entropy,
        efficiency,
        tree,
        codes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::huffman::analyze;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_certain_event_has_zero_entropy() {
        let report = analyze("aaaa").unwrap();
        assert_eq!(report.rows.len(), 1);
        assert_abs_diff_eq!(report.mean_length, 1.0);
        assert_abs_diff_eq!(report.entropy, 0.0);
        // Efficiency reports 0 even though the single-bit code is optimal.
        assert_abs_diff_eq!(report.efficiency, 0.0);
    }

    #[test]
    fn test_two_equiprobable_symbols_hit_the_bound() {
        let report = analyze("ab").unwrap();
        assert_abs_diff_eq!(report.mean_length, 1.0);
        assert_abs_diff_eq!(report.entropy, 1.0);
        assert_abs_diff_eq!(report.efficiency, 100.0);
    }

    #[test]
    fn test_four_equiprobable_symbols() {
        let report = analyze("abcd").unwrap();
        // Four equiprobable symbols get two bits each.
        assert_abs_diff_eq!(report.mean_length, 2.0);
        assert_abs_diff_eq!(report.entropy, 2.0);
        assert_abs_diff_eq!(report.efficiency, 100.0);
    }

    #[test]
    fn test_row_contributions() {
        let report = analyze("aabccc").unwrap();
        for row in &report.rows {
            assert_abs_diff_eq!(
                row.mean_length,
                (row.probability * row.code.len() as f64 * 1000.0).round() / 1000.0
            );
            let expected = row.probability * (1.0 / row.probability).log2();
            assert_abs_diff_eq!(row.entropy, (expected * 1000.0).round() / 1000.0);
        }
    }

    #[test]
    fn test_entropy_never_exceeds_mean_length() {
        for text in [
            "aabccc",
            "mississippi river",
            "this is an example for huffman encoding",
            "the quick brown fox jumps over the lazy dog",
        ] {
            let report = analyze(text).unwrap();
            // Shannon bound, with slack for the 3-decimal row rounding.
            assert!(
                report.entropy <= report.mean_length + 0.01,
                "H = {} > L = {} for {:?}",
                report.entropy,
                report.mean_length,
                text
            );
            assert!(report.efficiency <= 100.5);
        }
    }
}
