//! Error types for encoding and decoding.

use thiserror::Error;

/// Error during encoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// A token passed to the digit converter is not a member of the
    /// configured alphabet.
    #[error("symbol not in alphabet: {symbol:?} (hex: {hex})")]
    UnknownSymbol {
        /// Lossy UTF-8 rendering of the offending symbol.
        symbol: String,
        /// Hex rendering of the symbol's exact bytes.
        hex: String,
    },

    /// No alphabet symbol matches the input buffer at `offset`.
    #[error("no matching alphabet symbol at offset {offset}, context: {context:?}")]
    NoMatchingAlphabetSymbol {
        /// Byte offset into the input where tokenization stalled.
        offset: usize,
        /// Lossy UTF-8 rendering of up to 10 bytes following `offset`.
        context: String,
    },
}

/// Error during decoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// No base symbol matches the encoded buffer at `offset`.
    ///
    /// Inside a [`DecodeError::Chunk`] wrapper the offset is relative to the
    /// start of the failing chunk.
    #[error("no matching base symbol at offset {offset}")]
    NoMatchingBaseSymbol {
        /// Byte offset at which no digit matched.
        offset: usize,
    },

    /// A decoded positional value exceeds the alphabet size.
    ///
    /// Signals either a corrupted buffer or a base/alphabet configuration
    /// mismatch between encode time and decode time.
    #[error("index {index} out of bounds for alphabet of {size} symbols")]
    IndexOutOfBounds {
        /// The decoded positional value.
        index: usize,
        /// Current alphabet size.
        size: usize,
    },

    /// A chunk failed to decode; wraps the underlying cause and names the
    /// byte offset at which the chunk began.
    #[error("decoding error at offset {offset}: {source}")]
    Chunk {
        /// Byte offset of the chunk in the full input.
        offset: usize,
        /// The underlying failure.
        #[source]
        source: Box<DecodeError>,
    },
}
