use crate::huffman::probability::SymbolProbability;

/// A node in the Huffman tree.
///
/// Symbols live only at leaves; every internal node has exactly two
/// children and carries the ordered union of their symbol sets.
#[derive(Debug, Clone, PartialEq)]
pub enum HuffmanNode {
    /// A leaf holds exactly one symbol and its probability.
    Leaf { symbol: char, probability: f64 },
    /// An internal node owns its two children outright.
    Internal {
        /// Children's symbols, larger-probability child's first
        /// (ties: right child first).
        symbols: Vec<char>,
        probability: f64,
        left: Box<HuffmanNode>,
        right: Box<HuffmanNode>,
    },
}

impl HuffmanNode {
    /// Returns the probability mass of the node.
    pub fn probability(&self) -> f64 {
        match self {
            HuffmanNode::Leaf { probability, .. } => *probability,
            HuffmanNode::Internal { probability, .. } => *probability,
        }
    }

    /// Returns the symbols under the node, in the tree's display order.
    pub fn symbols(&self) -> Vec<char> {
        match self {
            HuffmanNode::Leaf { symbol, .. } => vec![*symbol],
            HuffmanNode::Internal { symbols, .. } => symbols.clone(),
        }
    }
}

/// Build a Huffman tree from a probability table.
///
/// # Algorithm
///
/// Seed one leaf per table entry, then repeatedly merge the two
/// lowest-probability nodes until one remains. The worklist is re-sorted
/// ascending before every merge with a stable sort, so ties keep current
/// list order: leaves in table order, freshly merged nodes at the back.
/// The first node removed becomes the right child, the second the left.
///
/// Quadratic in the alphabet size because of the repeated resorts, which
/// is fine for the small alphabets of ordinary text.
///
/// # Returns
///
/// The tree root, or `None` for an empty table. A single-entry table
/// yields a lone leaf.
pub fn build_tree(table: &[SymbolProbability]) -> Option<HuffmanNode> {
    let mut nodes: Vec<HuffmanNode> = table
        .iter()
        .map(|entry| HuffmanNode::Leaf {
            symbol: entry.symbol,
            probability: entry.probability,
        })
        .collect();

    while nodes.len() > 1 {
        nodes.sort_by(|a, b| a.probability().total_cmp(&b.probability()));
        let right = nodes.remove(0);
        let left = nodes.remove(0);

        let symbols = if left.probability() > right.probability() {
            let mut s = left.symbols();
            s.extend(right.symbols());
            s
        } else {
            let mut s = right.symbols();
            s.extend(left.symbols());
            s
        };

        nodes.push(HuffmanNode::Internal {
            symbols,
            probability: left.probability() + right.probability(),
            left: Box::new(left),
            right: Box::new(right),
        });
    }

    nodes.pop()
}
