use crate::huffman::tree::HuffmanNode;

/// A symbol and its assigned bitstring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeAssignment {
    pub symbol: char,
    /// Non-empty string of `0`/`1` characters.
    pub code: String,
}

/// Walk the tree and assign each symbol its code.
///
/// Descending left appends `0`, descending right appends `1`; a leaf takes
/// the accumulated path as its code. A lone leaf (single-symbol alphabet)
/// has an empty path and takes `"0"`, so every code is non-empty.
///
/// The returned table is listed for display by code length ascending, then
/// by the code's value as a binary integer ascending. The reordering does
/// not change any code.
pub fn assign_codes(root: &HuffmanNode) -> Vec<CodeAssignment> {
    let mut table = Vec::new();
    walk(root, String::new(), &mut table);
    // For equal lengths, lexicographic order of the bitstrings is binary
    // numeric order, so no integer conversion is needed.
    table.sort_by(|a, b| (a.code.len(), &a.code).cmp(&(b.code.len(), &b.code)));
    table
}

fn walk(node: &HuffmanNode, path: String, table: &mut Vec<CodeAssignment>) {
    match node {
        HuffmanNode::Leaf { symbol, .. } => {
            let code = if path.is_empty() {
                "0".to_string()
            } else {
                path
            };
            table.push(CodeAssignment {
                symbol: *symbol,
                code,
            });
        }
        HuffmanNode::Internal { left, right, .. } => {
            let mut left_path = path.clone();
            left_path.push('0');
            walk(left, left_path, table);
            let mut right_path = path;
            right_path.push('1');
            walk(right, right_path, table);
        }
    }
}
