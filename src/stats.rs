//! Size accounting for compression and decompression runs.
//!
//! Sizes are plain byte counts supplied by the caller; human-readable
//! formatting is a presentation concern and lives outside this crate.

use crate::error::{Error, Result};

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Size statistics for one compression run.
#[derive(Debug, Clone, PartialEq)]
pub struct CompressionStats {
    /// Size of the source text in bytes.
    pub original_size: usize,
    /// Estimated size of the compressed representation.
    pub compressed_size: usize,
    /// Bytes saved; negative when the output is larger than the input.
    pub space_saved: i64,
    /// Percentage of the original size saved, 2 decimals.
    pub compression_ratio: f64,
    /// Compressed size as a percentage of the original, 2 decimals.
    pub size_ratio: f64,
    /// Whether the run actually shrank the input.
    pub is_compressed: bool,
}

impl CompressionStats {
    /// Compute statistics from the two sizes.
    ///
    /// Returns [`Error::EmptySource`] when `original_size` is zero, since
    /// the ratios are undefined for a zero-byte source.
    pub fn new(original_size: usize, compressed_size: usize) -> Result<Self> {
        if original_size == 0 {
            return Err(Error::EmptySource);
        }

        let space_saved = original_size as i64 - compressed_size as i64;
        let compression_ratio = round2(space_saved as f64 / original_size as f64 * 100.0);
        let size_ratio = round2(compressed_size as f64 / original_size as f64 * 100.0);

        Ok(Self {
            original_size,
            compressed_size,
            space_saved,
            compression_ratio,
            size_ratio,
            is_compressed: space_saved > 0,
        })
    }
}

/// Size statistics for one decompression run.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpansionStats {
    /// Estimated size of the compressed input.
    pub compressed_size: usize,
    /// Size of the reconstructed text in bytes.
    pub decompressed_size: usize,
    /// Growth from compressed to decompressed as a percentage, 2 decimals.
    /// Negative when the "compressed" input was in fact larger.
    pub expansion_ratio: f64,
}

impl ExpansionStats {
    /// Compute statistics from the two sizes.
    ///
    /// Returns [`Error::EmptySource`] when `compressed_size` is zero.
    pub fn new(compressed_size: usize, decompressed_size: usize) -> Result<Self> {
        if compressed_size == 0 {
            return Err(Error::EmptySource);
        }

        let expansion_ratio = round2(
            (decompressed_size as f64 - compressed_size as f64) / compressed_size as f64 * 100.0,
        );

        Ok(Self {
            compressed_size,
            decompressed_size,
            expansion_ratio,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_compression_stats() {
        let stats = CompressionStats::new(300, 100).unwrap();
        assert_eq!(stats.space_saved, 200);
        assert_abs_diff_eq!(stats.compression_ratio, 66.67);
        assert_abs_diff_eq!(stats.size_ratio, 33.33);
        assert!(stats.is_compressed);
    }

    #[test]
    fn test_expansion_of_input() {
        let stats = CompressionStats::new(4, 6).unwrap();
        assert_eq!(stats.space_saved, -2);
        assert_abs_diff_eq!(stats.compression_ratio, -50.0);
        assert!(!stats.is_compressed);
    }

    #[test]
    fn test_zero_original_size_rejected() {
        assert_eq!(CompressionStats::new(0, 10), Err(Error::EmptySource));
    }

    #[test]
    fn test_expansion_stats() {
        let stats = ExpansionStats::new(100, 250).unwrap();
        assert_abs_diff_eq!(stats.expansion_ratio, 150.0);
    }

    #[test]
    fn test_negative_expansion() {
        let stats = ExpansionStats::new(200, 100).unwrap();
        assert_abs_diff_eq!(stats.expansion_ratio, -50.0);
    }

    #[test]
    fn test_zero_compressed_size_rejected() {
        assert_eq!(ExpansionStats::new(0, 10), Err(Error::EmptySource));
    }
}
