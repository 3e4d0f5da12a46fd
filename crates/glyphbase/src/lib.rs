//! glyphbase: a reversible base-N codec over grapheme-cluster symbols.
//!
//! Rewrites text into a representation drawn from a small, configurable set
//! of *base* symbols and back — a positional-notation encoding like base64,
//! except both the digit alphabet and the input vocabulary are arbitrary
//! multi-byte symbols (typically grapheme clusters, so a flag emoji or a ZWJ
//! sequence counts as one character on either side).
//!
//! # Quick Start
//!
//! ```rust
//! use glyphbase::Codec;
//!
//! let mut codec = Codec::new();
//! codec.set_symbols(["\u{1F48E}", "\u{1F30B}", "\u{1FAB1}", "\u{1F333}"]);
//! codec.set_alphabet("abcdefghijklmnopqrstuvwxyz !?");
//!
//! let encoded = codec.encode_str("hello world!").unwrap();
//! let decoded = codec.decode_str(&encoded).unwrap();
//! assert_eq!(decoded, "hello world!");
//! ```
//!
//! # How it works
//!
//! Every alphabet symbol is assigned its index in the configured alphabet;
//! encoding writes that index as a fixed-width positional number whose
//! digits are the base symbols. The width is derived from the set sizes
//! (`max(1, ceil(log |alphabet| / log |base|))`) so every index fits.
//! Tokenization on both ends is greedy longest-match, which resolves the
//! ambiguity when one symbol's bytes are a prefix of another's.
//!
//! # Configuration
//!
//! Both symbol sets are reconfigurable at runtime via
//! [`Codec::set_symbols`] and the `set_alphabet*` methods. Candidate sets
//! are deduplicated; a set with fewer than two unique symbols is silently
//! ignored and the prior configuration stays in effect (the `bool` return
//! says which happened). A codec instance owns its configuration outright
//! and is single-threaded; callers sharing one must serialize access.
//!
//! # Modules
//!
//! - [`codec`]: the [`Codec`] itself plus [`StateView`] snapshots
//! - [`segment`]: grapheme-cluster segmentation for string alphabets
//! - [`error`]: error types

pub mod codec;
pub mod error;
pub mod segment;
mod table;

pub use codec::{Codec, StateView};
pub use error::{DecodeError, EncodeError};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
