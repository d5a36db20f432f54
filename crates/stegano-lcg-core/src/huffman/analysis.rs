use std::collections::BTreeMap;
use std::fmt::{self, Display, Formatter};

use super::table::display_symbol;
use super::{entropy, normalize, relative_frequencies, CodeTable};

/// Per symbol line of a [`CodeAnalysis`]
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolStat {
    pub symbol: char,
    pub probability: f64,
    pub code: String,
    /// `probability * len(code)`, the share of this symbol in the average code length
    pub contribution: f64,
}

/// Theoretical figures of a code table applied to a text
#[derive(Debug, Clone, PartialEq)]
pub struct CodeAnalysis {
    pub distinct_symbols: usize,
    pub normalized_len: usize,
    pub entropy: f64,
    pub average_length: f64,
    /// `entropy / average_length`
    pub efficiency: f64,
    pub kraft_sum: f64,
    pub length_distribution: BTreeMap<usize, usize>,
    pub symbols: Vec<SymbolStat>,
}

impl CodeAnalysis {
    pub fn of(text: &str, table: &CodeTable) -> Self {
        let probabilities = relative_frequencies(text);
        let symbols = table
            .iter()
            .map(|(symbol, code)| {
                let probability = probabilities.get(&symbol).copied().unwrap_or_default();
                SymbolStat {
                    symbol,
                    probability,
                    code: code.to_string(),
                    contribution: probability * code.len() as f64,
                }
            })
            .collect();

        Self {
            distinct_symbols: probabilities.len(),
            normalized_len: normalize(text).len(),
            entropy: entropy(text),
            average_length: table.average_length(text),
            efficiency: table.efficiency(text),
            kraft_sum: table.kraft_sum(),
            length_distribution: table.length_distribution(),
            symbols,
        }
    }

    pub fn satisfies_kraft(&self) -> bool {
        self.kraft_sum <= 1.0
    }

    /// `H <= L <= H + 1`, the bound every huffman code meets
    pub fn within_entropy_bound(&self) -> bool {
        self.average_length <= self.entropy + 1.0
    }
}

impl Display for CodeAnalysis {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "distinct symbols      : {}", self.distinct_symbols)?;
        writeln!(f, "normalized length     : {}", self.normalized_len)?;
        writeln!(f, "entropy H             : {:.4} bits/symbol", self.entropy)?;
        writeln!(
            f,
            "average length L      : {:.4} bits/symbol",
            self.average_length
        )?;
        writeln!(f, "efficiency            : {:.2}%", self.efficiency * 100.0)?;
        writeln!(
            f,
            "bound                 : {:.4} <= L <= {:.4}",
            self.entropy,
            self.entropy + 1.0
        )?;
        writeln!(
            f,
            "kraft sum             : {:.4} ({})",
            self.kraft_sum,
            if self.satisfies_kraft() { "ok" } else { "violated" }
        )?;
        for (len, n) in self.length_distribution.iter() {
            writeln!(f, "length {len:>2} bits         : {n} symbols")?;
        }
        writeln!(f, "symbol    | probability | code         | length | contribution")?;
        for s in self.symbols.iter() {
            writeln!(
                f,
                "{:<9} | {:>11.4} | {:<12} | {:>6} | {:>12.4}",
                display_symbol(s.symbol),
                s.probability,
                s.code,
                s.code.len(),
                s.contribution
            )?;
        }
        Ok(())
    }
}
