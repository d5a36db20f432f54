use std::collections::{BTreeMap, HashMap};
use std::fmt::{self, Display, Formatter};

use super::{normalize, relative_frequencies, text::entropy};
use crate::BitPayload;

/// Mapping from symbol to its code word, a string of `'0'` and `'1'`.
///
/// Tables built by [`HuffmanTree::code_table`](super::HuffmanTree::code_table) are prefix-free,
/// tables constructed from a raw map are taken as they are.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct CodeTable {
    codes: BTreeMap<char, String>,
}

impl CodeTable {
    pub fn get(&self, symbol: char) -> Option<&str> {
        self.codes.get(&symbol).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, &str)> {
        self.codes.iter().map(|(c, code)| (*c, code.as_str()))
    }

    /// Encodes the normalized `text` with this table.
    /// Symbols the table has no code for are skipped.
    pub fn encode(&self, text: &str) -> BitPayload {
        normalize(text)
            .chars()
            .filter_map(|c| self.get(c))
            .flat_map(|code| code.chars().map(|b| b == '1'))
            .collect()
    }

    /// Decodes `payload` by growing a prefix bit by bit until it equals a code word.
    ///
    /// Trailing bits that never complete a code word are dropped.
    pub fn decode(&self, payload: &BitPayload) -> String {
        let lookup: HashMap<&str, char> = self.iter().map(|(c, code)| (code, c)).collect();
        let mut decoded = String::new();
        let mut prefix = String::new();

        for bit in payload.iter() {
            prefix.push(if bit { '1' } else { '0' });
            if let Some(c) = lookup.get(prefix.as_str()) {
                decoded.push(*c);
                prefix.clear();
            }
        }

        decoded
    }

    /// true if no code word is a prefix of another one
    pub fn is_prefix_free(&self) -> bool {
        let mut codes: Vec<&str> = self.codes.values().map(String::as_str).collect();
        codes.sort_unstable();
        // after sorting a prefix is always directly followed by one of its extensions
        codes.windows(2).all(|w| !w[1].starts_with(w[0]))
    }

    /// `sum(2^-len(code))`, at most 1 for every prefix-free table
    pub fn kraft_sum(&self) -> f64 {
        self.codes
            .values()
            .map(|code| 2f64.powi(-(code.len() as i32)))
            .sum()
    }

    /// number of symbols per code length
    pub fn length_distribution(&self) -> BTreeMap<usize, usize> {
        let mut d = BTreeMap::new();
        for code in self.codes.values() {
            *d.entry(code.len()).or_insert(0) += 1;
        }
        d
    }

    /// `L = sum(p * len(code))` over the symbol probabilities of `text`
    pub fn average_length(&self, text: &str) -> f64 {
        relative_frequencies(text)
            .into_iter()
            .filter_map(|(c, p)| self.get(c).map(|code| p * code.len() as f64))
            .sum()
    }

    /// coding efficiency `H / L`, 0 if `L` is 0
    pub fn efficiency(&self, text: &str) -> f64 {
        let l = self.average_length(text);
        if l == 0.0 {
            return 0.0;
        }
        entropy(text) / l
    }
}

impl From<BTreeMap<char, String>> for CodeTable {
    fn from(codes: BTreeMap<char, String>) -> Self {
        Self { codes }
    }
}

impl FromIterator<(char, String)> for CodeTable {
    fn from_iter<T: IntoIterator<Item = (char, String)>>(iter: T) -> Self {
        Self {
            codes: iter.into_iter().collect(),
        }
    }
}

impl Display for CodeTable {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (c, code) in self.iter() {
            writeln!(f, "{} -> {code}", display_symbol(c))?;
        }
        Ok(())
    }
}

pub(crate) fn display_symbol(c: char) -> String {
    if c == ' ' {
        "SPACE".to_string()
    } else {
        format!("'{c}'")
    }
}
