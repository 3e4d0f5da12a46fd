//! Encode/decode over the configured symbol sets.

use crate::error::{DecodeError, EncodeError};
use crate::table::SymbolTable;

/// Bytes of surrounding input quoted in tokenization errors.
const ERROR_CONTEXT_BYTES: usize = 10;

/// A reversible base-N codec over grapheme symbols.
///
/// Each alphabet symbol is rewritten as a fixed-width sequence of base
/// symbols (its index in positional notation) and back. The codec is
/// stateless across calls apart from the configuration it owns; encode and
/// decode have no notion of progress beyond a single call.
///
/// # Configuration
///
/// `set_symbols` and the `set_alphabet*` methods never fail: a candidate set
/// that deduplicates to fewer than two unique symbols is silently ignored
/// and the prior configuration stays in effect. The `bool` return reports
/// whether the new configuration was applied.
#[derive(Debug, Clone)]
pub struct Codec {
    table: SymbolTable,
}

/// Read-only snapshot of a codec's configuration.
///
/// All fields are owned copies (symbols rendered as lossy UTF-8); mutating a
/// snapshot has no effect on the codec it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateView {
    /// Base symbols in digit-value order.
    pub base: Vec<String>,
    /// Alphabet symbols in index order.
    pub alphabet: Vec<String>,
    /// Base digits per encoded alphabet symbol.
    pub digits: usize,
    /// Number of alphabet symbols.
    pub alphabet_size: usize,
}

impl Codec {
    /// Builds a codec with the built-in base (5 emoji symbols) and the
    /// built-in printable-ASCII alphabet.
    pub fn new() -> Self {
        Self {
            table: SymbolTable::new(),
        }
    }

    /// Reconfigures the base set.
    ///
    /// Candidates are deduplicated by exact byte equality, first-seen order
    /// preserved. Returns `false` (leaving the prior base in effect) when
    /// fewer than two unique symbols remain.
    pub fn set_symbols<I, T>(&mut self, candidates: I) -> bool
    where
        I: IntoIterator<Item = T>,
        T: Into<Vec<u8>>,
    {
        self.table
            .set_base(candidates.into_iter().map(Into::into).collect())
    }

    /// Reconfigures the alphabet from a string, one symbol per grapheme
    /// cluster. Same rejection rule as [`Codec::set_symbols`].
    pub fn set_alphabet(&mut self, text: &str) -> bool {
        self.table.set_alphabet_text(text)
    }

    /// Reconfigures the alphabet from a raw buffer, interpreted as UTF-8
    /// text (lossily) and then segmented into grapheme clusters.
    pub fn set_alphabet_bytes(&mut self, bytes: &[u8]) -> bool {
        self.table
            .set_alphabet_text(&String::from_utf8_lossy(bytes))
    }

    /// Reconfigures the alphabet from explicit symbols, used as-is without
    /// segmentation. Same rejection rule as [`Codec::set_symbols`].
    pub fn set_alphabet_symbols<I, T>(&mut self, candidates: I) -> bool
    where
        I: IntoIterator<Item = T>,
        T: Into<Vec<u8>>,
    {
        self.table
            .set_alphabet_symbols(candidates.into_iter().map(Into::into).collect())
    }

    /// Encodes a byte buffer.
    ///
    /// The input is tokenized greedily from the front against the alphabet,
    /// longest symbol first, so a symbol whose bytes prefix another's never
    /// shadows it. Each token becomes a fixed-width run of base symbols.
    pub fn encode(&self, input: &[u8]) -> Result<Vec<u8>, EncodeError> {
        let mut output = Vec::new();
        let mut offset = 0;
        while offset < input.len() {
            let entry = self
                .table
                .sorted_alphabet()
                .iter()
                .find(|e| input[offset..].starts_with(&e.bytes))
                .ok_or_else(|| EncodeError::NoMatchingAlphabetSymbol {
                    offset,
                    context: error_context(input, offset),
                })?;
            output.extend_from_slice(&self.encode_symbol(&entry.bytes)?);
            offset += entry.bytes.len();
        }
        Ok(output)
    }

    /// Decodes a buffer produced by [`Codec::encode`] under the same
    /// configuration.
    ///
    /// Any failure while decoding a chunk is wrapped as
    /// [`DecodeError::Chunk`] naming the byte offset at which that chunk
    /// began, with the cause preserved.
    pub fn decode(&self, input: &[u8]) -> Result<Vec<u8>, DecodeError> {
        let mut output = Vec::new();
        let mut offset = 0;
        while offset < input.len() {
            let chunk = &input[offset..];
            let (symbol, consumed) = self
                .decode_symbol(chunk)
                .and_then(|symbol| Ok((symbol, self.chunk_len(chunk)?)))
                .map_err(|source| DecodeError::Chunk {
                    offset,
                    source: Box::new(source),
                })?;
            output.extend_from_slice(symbol);
            offset += consumed;
        }
        Ok(output)
    }

    /// Encodes a string; the result is the encoded bytes rendered as UTF-8
    /// (lossily, for base symbols that are not valid UTF-8).
    pub fn encode_str(&self, text: &str) -> Result<String, EncodeError> {
        let encoded = self.encode(text.as_bytes())?;
        Ok(String::from_utf8_lossy(&encoded).into_owned())
    }

    /// Decodes a string produced by [`Codec::encode_str`].
    pub fn decode_str(&self, text: &str) -> Result<String, DecodeError> {
        let decoded = self.decode(text.as_bytes())?;
        Ok(String::from_utf8_lossy(&decoded).into_owned())
    }

    /// Returns an owned snapshot of the current configuration.
    pub fn state(&self) -> StateView {
        StateView {
            base: self
                .table
                .base()
                .iter()
                .map(|b| String::from_utf8_lossy(b).into_owned())
                .collect(),
            alphabet: self
                .table
                .alphabet()
                .iter()
                .map(|a| String::from_utf8_lossy(a).into_owned())
                .collect(),
            digits: self.table.digits(),
            alphabet_size: self.table.alphabet().len(),
        }
    }

    /// Converts one alphabet symbol to its fixed-width digit run, most
    /// significant base symbol first.
    fn encode_symbol(&self, symbol: &[u8]) -> Result<Vec<u8>, EncodeError> {
        let index =
            self.table
                .alphabet_index(symbol)
                .ok_or_else(|| EncodeError::UnknownSymbol {
                    symbol: String::from_utf8_lossy(symbol).into_owned(),
                    hex: hex_string(symbol),
                })?;

        let base = self.table.base();
        let mut digit_values = Vec::with_capacity(self.table.digits());
        let mut remainder = index;
        for _ in 0..self.table.digits() {
            digit_values.push(remainder % base.len());
            remainder /= base.len();
        }

        // digit_values holds least-significant first; emit in reverse.
        let mut chunk = Vec::new();
        for &value in digit_values.iter().rev() {
            chunk.extend_from_slice(&base[value]);
        }
        Ok(chunk)
    }

    /// Reads one chunk's digits from the front of `chunk` and maps the
    /// resulting positional value back to an alphabet symbol.
    fn decode_symbol<'a>(&'a self, chunk: &[u8]) -> Result<&'a [u8], DecodeError> {
        let base_len = self.table.base().len();
        let mut value = 0usize;
        let mut pos = 0usize;
        for _ in 0..self.table.digits() {
            let entry = self
                .table
                .sorted_base()
                .iter()
                .find(|e| chunk[pos..].starts_with(&e.bytes))
                .ok_or(DecodeError::NoMatchingBaseSymbol { offset: pos })?;
            value = value * base_len + entry.index;
            pos += entry.bytes.len();
        }

        let alphabet = self.table.alphabet();
        if value >= alphabet.len() {
            return Err(DecodeError::IndexOutOfBounds {
                index: value,
                size: alphabet.len(),
            });
        }
        Ok(&alphabet[value])
    }

    /// Re-derives, independently of [`Codec::decode_symbol`], how many bytes
    /// the digit run at the front of `chunk` occupies. Both walk the same
    /// length-sorted view, so the counts always agree.
    fn chunk_len(&self, chunk: &[u8]) -> Result<usize, DecodeError> {
        let mut pos = 0usize;
        for _ in 0..self.table.digits() {
            let entry = self
                .table
                .sorted_base()
                .iter()
                .find(|e| chunk[pos..].starts_with(&e.bytes))
                .ok_or(DecodeError::NoMatchingBaseSymbol { offset: pos })?;
            pos += entry.bytes.len();
        }
        Ok(pos)
    }
}

impl Default for Codec {
    fn default() -> Self {
        Self::new()
    }
}

/// Lossy rendering of up to [`ERROR_CONTEXT_BYTES`] bytes at `offset`.
fn error_context(input: &[u8], offset: usize) -> String {
    let end = (offset + ERROR_CONTEXT_BYTES).min(input.len());
    String::from_utf8_lossy(&input[offset..end]).into_owned()
}

fn hex_string(bytes: &[u8]) -> String {
    use std::fmt::Write;
    let mut out = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        // Writing to a String cannot fail.
        let _ = write!(out, "{byte:02x}");
    }
    out
}
