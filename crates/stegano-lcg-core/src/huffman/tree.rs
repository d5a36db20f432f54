use std::cmp::{Ordering, Reverse};
use std::collections::{BTreeMap, BinaryHeap};

use log::debug;

use super::{frequencies, CodeTable};

/// Node of a huffman tree, every internal node owns exactly two subtrees
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum HuffmanNode {
    Leaf {
        symbol: char,
        weight: usize,
    },
    Internal {
        weight: usize,
        left: Box<HuffmanNode>,
        right: Box<HuffmanNode>,
    },
}

impl HuffmanNode {
    pub fn weight(&self) -> usize {
        match self {
            HuffmanNode::Leaf { weight, .. } | HuffmanNode::Internal { weight, .. } => *weight,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, HuffmanNode::Leaf { .. })
    }
}

/// heap entry, ordered by weight first and by rank on equal weights
struct Pending {
    weight: usize,
    rank: usize,
    node: HuffmanNode,
}

impl PartialEq for Pending {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Pending {}

impl PartialOrd for Pending {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pending {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.weight, self.rank).cmp(&(other.weight, other.rank))
    }
}

/// A huffman tree built from symbol frequencies.
///
/// The two lightest nodes are merged until one root remains, the first one taken becomes
/// the left child. Equal weights are resolved deterministically: leaves come before
/// internal nodes, leaves among each other by symbol, internal nodes by creation order.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct HuffmanTree {
    root: HuffmanNode,
}

impl HuffmanTree {
    /// builds the tree from the normalized `text`, `None` if nothing is left after normalization
    pub fn from_text(text: &str) -> Option<Self> {
        Self::from_frequencies(&frequencies(text))
    }

    /// builds the tree from absolute frequencies, symbols with weight 0 are ignored
    pub fn from_frequencies(frequencies: &BTreeMap<char, usize>) -> Option<Self> {
        let mut heap: BinaryHeap<Reverse<Pending>> = frequencies
            .iter()
            .filter(|(_, w)| **w > 0)
            .enumerate()
            .map(|(rank, (symbol, weight))| {
                Reverse(Pending {
                    weight: *weight,
                    rank,
                    node: HuffmanNode::Leaf {
                        symbol: *symbol,
                        weight: *weight,
                    },
                })
            })
            .collect();
        let symbols = heap.len();
        let mut next_rank = symbols;

        loop {
            let Reverse(left) = heap.pop()?;
            let Some(Reverse(right)) = heap.pop() else {
                debug!(
                    "huffman tree built over {symbols} symbols, total weight {}",
                    left.weight
                );
                return Some(Self { root: left.node });
            };

            let weight = left.weight + right.weight;
            heap.push(Reverse(Pending {
                weight,
                rank: next_rank,
                node: HuffmanNode::Internal {
                    weight,
                    left: Box::new(left.node),
                    right: Box::new(right.node),
                },
            }));
            next_rank += 1;
        }
    }

    pub fn root(&self) -> &HuffmanNode {
        &self.root
    }

    /// Emits the code of every leaf, `'0'` for a left edge and `'1'` for a right edge.
    /// A tree that is a single leaf yields the code `"0"`.
    pub fn code_table(&self) -> CodeTable {
        let mut codes = BTreeMap::new();
        let mut stack = vec![(&self.root, String::new())];

        while let Some((node, prefix)) = stack.pop() {
            match node {
                HuffmanNode::Leaf { symbol, .. } => {
                    let code = if prefix.is_empty() {
                        "0".to_string()
                    } else {
                        prefix
                    };
                    codes.insert(*symbol, code);
                }
                HuffmanNode::Internal { left, right, .. } => {
                    stack.push((right.as_ref(), format!("{prefix}1")));
                    stack.push((left.as_ref(), format!("{prefix}0")));
                }
            }
        }

        CodeTable::from(codes)
    }
}
