//! Symbol table: base and alphabet sets with derived lookup state.
//!
//! The table owns two ordered sets of unique byte sequences. The *base* set
//! supplies the digits of the positional encoding (a symbol's index is its
//! digit value); the *alphabet* set is the vocabulary of the input text (a
//! symbol's index is the value that gets encoded). From these it derives the
//! digit width and, for greedy longest-match parsing, a view of each set
//! sorted by descending byte length.

use rustc_hash::FxHashSet;

use crate::segment::split_graphemes;

/// Default base symbols: five emoji digits.
const DEFAULT_BASE: [&str; 5] = ["\u{1F441}\u{FE0F}", "\u{1F40D}", "\u{1F9A9}", "\u{1F9A0}", "\u{1F31E}"];

/// Default alphabet: 78 printable ASCII characters (space through `/`,
/// digits, upper- and lowercase letters).
const DEFAULT_ALPHABET: &str =
    " !\"#$%&'()*+,-./0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// One entry of a length-sorted lookup view: a symbol's bytes plus its
/// positional index in the owning set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LookupEntry {
    pub bytes: Vec<u8>,
    pub index: usize,
}

/// Owns the base and alphabet symbol sets plus all state derived from them.
///
/// Both sets are reconfigurable at any time. A reconfiguration that would
/// leave fewer than two unique symbols is silently ignored (the prior set is
/// retained); see the `set_*` methods. Derived state is computed in full
/// before any field is replaced, so the lookup views never reflect a
/// half-updated set.
#[derive(Debug, Clone)]
pub(crate) struct SymbolTable {
    base: Vec<Vec<u8>>,
    alphabet: Vec<Vec<u8>>,
    digits: usize,
    sorted_base: Vec<LookupEntry>,
    sorted_alphabet: Vec<LookupEntry>,
}

impl SymbolTable {
    /// Builds a table with the built-in base and alphabet.
    pub fn new() -> Self {
        let base: Vec<Vec<u8>> = DEFAULT_BASE.iter().map(|s| s.as_bytes().to_vec()).collect();
        let alphabet: Vec<Vec<u8>> = split_graphemes(DEFAULT_ALPHABET)
            .into_iter()
            .map(String::into_bytes)
            .collect();
        let digits = digit_width(alphabet.len(), base.len());
        let sorted_base = length_sorted(&base);
        let sorted_alphabet = length_sorted(&alphabet);
        Self {
            base,
            alphabet,
            digits,
            sorted_base,
            sorted_alphabet,
        }
    }

    pub fn base(&self) -> &[Vec<u8>] {
        &self.base
    }

    pub fn alphabet(&self) -> &[Vec<u8>] {
        &self.alphabet
    }

    /// Number of base digits per encoded alphabet symbol.
    pub fn digits(&self) -> usize {
        self.digits
    }

    pub fn sorted_base(&self) -> &[LookupEntry] {
        &self.sorted_base
    }

    pub fn sorted_alphabet(&self) -> &[LookupEntry] {
        &self.sorted_alphabet
    }

    /// Exact-match position of `symbol` in the alphabet set.
    pub fn alphabet_index(&self, symbol: &[u8]) -> Option<usize> {
        self.alphabet.iter().position(|s| s == symbol)
    }

    /// Replaces the base set with the deduplicated `candidates`.
    ///
    /// Returns `false` without touching anything when fewer than two unique
    /// non-empty symbols remain after deduplication.
    pub fn set_base(&mut self, candidates: Vec<Vec<u8>>) -> bool {
        let unique = dedupe(candidates);
        if unique.len() < 2 {
            return false;
        }
        self.replace_base(unique);
        true
    }

    /// Replaces the alphabet with the grapheme clusters of `text`.
    ///
    /// Same rejection rule as [`SymbolTable::set_base`].
    pub fn set_alphabet_text(&mut self, text: &str) -> bool {
        let candidates = split_graphemes(text)
            .into_iter()
            .map(String::into_bytes)
            .collect();
        self.set_alphabet_symbols(candidates)
    }

    /// Replaces the alphabet with the deduplicated `candidates`, used as-is.
    ///
    /// Same rejection rule as [`SymbolTable::set_base`].
    pub fn set_alphabet_symbols(&mut self, candidates: Vec<Vec<u8>>) -> bool {
        let unique = dedupe(candidates);
        if unique.len() < 2 {
            return false;
        }
        self.replace_alphabet(unique);
        true
    }

    fn replace_base(&mut self, base: Vec<Vec<u8>>) {
        // Derive everything before the first assignment: the views must
        // never be observed against a stale set.
        let digits = digit_width(self.alphabet.len(), base.len());
        let sorted_base = length_sorted(&base);
        let sorted_alphabet = length_sorted(&self.alphabet);
        self.base = base;
        self.digits = digits;
        self.sorted_base = sorted_base;
        self.sorted_alphabet = sorted_alphabet;
    }

    fn replace_alphabet(&mut self, alphabet: Vec<Vec<u8>>) {
        let digits = digit_width(alphabet.len(), self.base.len());
        let sorted_base = length_sorted(&self.base);
        let sorted_alphabet = length_sorted(&alphabet);
        self.alphabet = alphabet;
        self.digits = digits;
        self.sorted_base = sorted_base;
        self.sorted_alphabet = sorted_alphabet;
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Deduplicates by exact byte equality, preserving first-seen order.
///
/// Empty sequences are dropped: a zero-length symbol would match at every
/// offset and stall greedy tokenization.
fn dedupe(candidates: Vec<Vec<u8>>) -> Vec<Vec<u8>> {
    let mut seen = FxHashSet::default();
    let mut unique = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        if candidate.is_empty() {
            continue;
        }
        if seen.insert(candidate.clone()) {
            unique.push(candidate);
        }
    }
    unique
}

/// Number of base digits needed to give every alphabet index a unique
/// representation: `max(1, ceil(log(alphabet_len) / log(base_len)))`.
///
/// Computed as the smallest `d` with `base_len^d >= alphabet_len`, which is
/// the same value in exact integer arithmetic.
fn digit_width(alphabet_len: usize, base_len: usize) -> usize {
    debug_assert!(base_len >= 2);
    let mut digits = 1;
    let mut capacity = base_len;
    while capacity < alphabet_len {
        capacity = capacity.saturating_mul(base_len);
        digits += 1;
    }
    digits
}

/// Builds a view of `symbols` sorted by descending byte length, each entry
/// keeping its index in the set ordering.
///
/// The descending sort is what makes greedy parsing longest-match: scanning
/// the view linearly tries longer symbols before any symbol that is a prefix
/// of them. The sort is stable, so equal-length symbols keep set order.
fn length_sorted(symbols: &[Vec<u8>]) -> Vec<LookupEntry> {
    let mut view: Vec<LookupEntry> = symbols
        .iter()
        .enumerate()
        .map(|(index, bytes)| LookupEntry {
            bytes: bytes.clone(),
            index,
        })
        .collect();
    view.sort_by(|a, b| b.bytes.len().cmp(&a.bytes.len()));
    view
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bytes(items: &[&str]) -> Vec<Vec<u8>> {
        items.iter().map(|s| s.as_bytes().to_vec()).collect()
    }

    #[test]
    fn test_default_configuration() {
        let table = SymbolTable::new();
        assert_eq!(table.base().len(), 5);
        assert_eq!(table.alphabet().len(), 78);
        // ceil(log(78) / log(5)) = 3, and 5^3 = 125 >= 78.
        assert_eq!(table.digits(), 3);
    }

    #[test]
    fn test_digit_width_values() {
        assert_eq!(digit_width(2, 2), 1);
        assert_eq!(digit_width(4, 2), 2);
        assert_eq!(digit_width(5, 2), 3);
        assert_eq!(digit_width(78, 5), 3);
        assert_eq!(digit_width(125, 5), 3);
        assert_eq!(digit_width(126, 5), 4);
        // Degenerate alphabet sizes still get one digit.
        assert_eq!(digit_width(0, 2), 1);
        assert_eq!(digit_width(1, 2), 1);
    }

    #[test]
    fn test_digit_width_invariant() {
        for base_len in 2..=9 {
            for alphabet_len in 2..=300 {
                let d = digit_width(alphabet_len, base_len);
                let capacity = (base_len as u128).pow(d as u32);
                assert!(capacity >= alphabet_len as u128);
                if d > 1 {
                    let smaller = (base_len as u128).pow(d as u32 - 1);
                    assert!(smaller < alphabet_len as u128, "width {d} not minimal");
                }
            }
        }
    }

    #[test]
    fn test_dedupe_preserves_first_seen_order() {
        let unique = dedupe(bytes(&["b", "a", "b", "c", "a"]));
        assert_eq!(unique, bytes(&["b", "a", "c"]));
    }

    #[test]
    fn test_dedupe_drops_empty_symbols() {
        let unique = dedupe(vec![vec![], b"x".to_vec(), vec![], b"y".to_vec()]);
        assert_eq!(unique, bytes(&["x", "y"]));
    }

    #[test]
    fn test_set_base_rejects_below_minimum() {
        let mut table = SymbolTable::new();
        let before = table.base().to_vec();

        assert!(!table.set_base(vec![]));
        assert!(!table.set_base(bytes(&["x"])));
        assert!(!table.set_base(bytes(&["x", "x", "x"])));

        assert_eq!(table.base(), &before[..]);
        assert_eq!(table.digits(), 3);
    }

    #[test]
    fn test_set_base_recomputes_width() {
        let mut table = SymbolTable::new();
        assert!(table.set_base(bytes(&["0", "1"])));
        // 78 alphabet symbols in base 2: 2^7 = 128 >= 78.
        assert_eq!(table.digits(), 7);
    }

    #[test]
    fn test_set_alphabet_text_segments_clusters() {
        let mut table = SymbolTable::new();
        assert!(table.set_alphabet_text("a\u{1F1FA}\u{1F1F8}b"));
        assert_eq!(
            table.alphabet(),
            &bytes(&["a", "\u{1F1FA}\u{1F1F8}", "b"])[..]
        );
    }

    #[test]
    fn test_set_alphabet_rejects_below_minimum() {
        let mut table = SymbolTable::new();
        let before = table.alphabet().to_vec();

        assert!(!table.set_alphabet_text(""));
        assert!(!table.set_alphabet_text("aaaa"));

        assert_eq!(table.alphabet(), &before[..]);
    }

    #[test]
    fn test_views_sorted_by_descending_length() {
        let mut table = SymbolTable::new();
        assert!(table.set_alphabet_symbols(bytes(&["A", "ABC", "AB", "B"])));

        let lengths: Vec<usize> = table
            .sorted_alphabet()
            .iter()
            .map(|e| e.bytes.len())
            .collect();
        assert_eq!(lengths, vec![3, 2, 1, 1]);

        // Entries keep their index in the owning set.
        for entry in table.sorted_alphabet() {
            assert_eq!(table.alphabet()[entry.index], entry.bytes);
        }
    }

    #[test]
    fn test_views_rebuilt_on_every_change() {
        let mut table = SymbolTable::new();
        assert!(table.set_base(bytes(&["xx", "y", "zzz"])));
        let lengths: Vec<usize> = table.sorted_base().iter().map(|e| e.bytes.len()).collect();
        assert_eq!(lengths, vec![3, 2, 1]);

        assert!(table.set_base(bytes(&["p", "q"])));
        assert_eq!(table.sorted_base().len(), 2);
    }
}
