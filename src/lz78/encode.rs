use std::collections::HashMap;

use crate::lz78::Pair;

/// Compress input text using the LZ78 algorithm.
///
/// # Algorithm
///
/// 1. Start with a dictionary containing only the empty string at code 0.
/// 2. Grow a running prefix one character at a time. While `prefix + c` is
///    already a dictionary key, keep accumulating without emitting anything.
/// 3. When `prefix + c` is new, register it under the next sequential code,
///    emit the pair `(code_of(prefix), c)`, and clear the prefix.
/// 4. If the input ends while the prefix is non-empty, emit one terminal pair
///    `(code_of(prefix), None)`; the terminal pair registers nothing.
///
/// # Parameters
///
/// - `text`: The text to compress. May be empty.
///
/// # Returns
///
/// The ordered pair sequence. Empty input yields an empty vector.
///
/// # Example
///
/// ```
/// use textcomp::lz78::{encode, Pair};
///
/// let pairs = encode("aaaa");
/// assert_eq!(
///     pairs,
///     vec![
///         Pair { index: 0, next: Some('a') },
///         Pair { index: 1, next: Some('a') },
///         Pair { index: 1, next: None },
///     ]
/// );
/// ```
pub fn encode(text: &str) -> Vec<Pair> {
    let mut dict: HashMap<String, usize> = HashMap::new();
    dict.insert(String::new(), 0);
    let mut next_code = 1;
    let mut prefix = String::new();
    let mut pairs = Vec::new();

    for c in text.chars() {
        let mut candidate = prefix.clone();
        candidate.push(c);

        if dict.contains_key(&candidate) {
            // Still matching a known phrase, keep accumulating.
            prefix = candidate;
        } else {
            let index = dict[prefix.as_str()];
            dict.insert(candidate, next_code);
            next_code += 1;
            pairs.push(Pair {
                index,
                next: Some(c),
            });
            prefix.clear();
        }
    }

    // Input ended mid-match: emit the leftover prefix without registering it.
    if !prefix.is_empty() {
        let index = dict[prefix.as_str()];
        pairs.push(Pair { index, next: None });
    }

    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert!(encode("").is_empty());
    }

    #[test]
    fn test_repeated_character() {
        let pairs = encode("aaaa");
        assert_eq!(
            pairs,
            vec![
                Pair {
                    index: 0,
                    next: Some('a')
                },
                Pair {
                    index: 1,
                    next: Some('a')
                },
                Pair {
                    index: 1,
                    next: None
                },
            ]
        );
    }

    #[test]
    fn test_all_new_characters() {
        // Each single character is new, so every pair references code 0.
        let pairs = encode("ab");
        assert_eq!(
            pairs,
            vec![
                Pair {
                    index: 0,
                    next: Some('a')
                },
                Pair {
                    index: 0,
                    next: Some('b')
                },
            ]
        );
    }

    #[test]
    fn test_no_terminal_pair_when_input_ends_on_new_phrase() {
        // "ab" ends exactly when "b" is registered, so no terminal pair.
        let pairs = encode("ab");
        assert!(pairs.iter().all(|p| p.next.is_some()));
    }

    #[test]
    fn test_codes_reference_only_assigned_entries() {
        let pairs = encode("abracadabra abracadabra");
        // Pair i may reference at most the i codes assigned before it.
        for (i, pair) in pairs.iter().enumerate() {
            assert!(pair.index <= i, "pair {} references code {}", i, pair.index);
        }
    }

    #[test]
    fn test_non_ascii() {
        let pairs = encode("这是一段测试");
        assert_eq!(pairs.len(), 6);
        assert!(pairs.iter().all(|p| p.index == 0));
    }
}
