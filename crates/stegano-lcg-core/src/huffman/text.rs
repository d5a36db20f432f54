use std::collections::BTreeMap;

/// Lowercases `text` and keeps only `a-z` and the space character
pub fn normalize(text: &str) -> String {
    text.chars()
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_ascii_lowercase() || *c == ' ')
        .collect()
}

/// absolute symbol frequencies of the normalized `text`
pub fn frequencies(text: &str) -> BTreeMap<char, usize> {
    let mut f = BTreeMap::new();
    for c in normalize(text).chars() {
        *f.entry(c).or_insert(0) += 1;
    }
    f
}

/// relative symbol frequencies of the normalized `text`, empty for an empty text
pub fn relative_frequencies(text: &str) -> BTreeMap<char, f64> {
    let f = frequencies(text);
    let total: usize = f.values().sum();

    f.into_iter()
        .map(|(c, n)| (c, n as f64 / total as f64))
        .collect()
}

/// Shannon entropy `H = -sum(p * log2(p))` of the normalized `text` in bits per symbol
pub fn entropy(text: &str) -> f64 {
    relative_frequencies(text)
        .values()
        .filter(|p| **p > 0.0)
        .map(|p| -p * p.log2())
        .sum()
}
