//! Huffman coding of the secret text.
//!
//! Text is normalized to the 27 symbols `a-z` and space before anything is counted or coded.
//! The code table is never hidden alongside the payload, decoding rebuilds it from a reference
//! text that has to share the letter distribution of the original message.
//!
//! ```rust
//! use stegano_lcg_core::huffman;
//!
//! let (payload, table) = huffman::encode("Hello World");
//! assert_eq!(table.decode(&payload), "hello world");
//! ```

mod analysis;
mod table;
mod text;
mod tree;

pub use analysis::{CodeAnalysis, SymbolStat};
pub use table::CodeTable;
pub use text::{entropy, frequencies, normalize, relative_frequencies};
pub use tree::{HuffmanNode, HuffmanTree};

use crate::BitPayload;

/// Builds the code table from `text` and encodes `text` with it.
///
/// Returns an empty payload and an empty table if nothing is left after normalization.
pub fn encode(text: &str) -> (BitPayload, CodeTable) {
    match HuffmanTree::from_text(text) {
        Some(tree) => {
            let table = tree.code_table();
            (table.encode(text), table)
        }
        None => (BitPayload::new(), CodeTable::default()),
    }
}

/// rebuilds the code table from `reference` and decodes `payload` with it
pub fn decode_with_reference(payload: &BitPayload, reference: &str) -> (String, CodeTable) {
    let (_, table) = encode(reference);
    (table.decode(payload), table)
}
