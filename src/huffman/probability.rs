use std::collections::HashMap;

use crate::error::{Error, Result};

/// A symbol with its observed frequency and rounded probability.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolProbability {
    pub symbol: char,
    pub frequency: usize,
    /// `frequency / total`, rounded to 3 decimals.
    pub probability: f64,
}

pub(crate) fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Build the probability table for a text.
///
/// Symbols (Unicode scalar values) are counted in order of first
/// appearance, then listed by probability descending; the sort is stable,
/// so equiprobable symbols keep their first-appearance order.
///
/// Returns [`Error::EmptyAlphabet`] for empty text.
pub fn probability_table(text: &str) -> Result<Vec<SymbolProbability>> {
    let mut order: Vec<char> = Vec::new();
    let mut counts: HashMap<char, usize> = HashMap::new();
    let mut total = 0usize;

    for c in text.chars() {
        let count = counts.entry(c).or_insert(0);
        if *count == 0 {
            order.push(c);
        }
        *count += 1;
        total += 1;
    }

    if total == 0 {
        return Err(Error::EmptyAlphabet);
    }

    let mut table: Vec<SymbolProbability> = order
        .into_iter()
        .map(|symbol| {
            let frequency = counts[&symbol];
            SymbolProbability {
                symbol,
                frequency,
                probability: round3(frequency as f64 / total as f64),
            }
        })
        .collect();
    table.sort_by(|a, b| b.probability.total_cmp(&a.probability));

    Ok(table)
}
