//! Randomized round-trip properties for the codec.

use glyphbase::Codec;
use proptest::prelude::*;

/// Builds a message by concatenating randomly chosen alphabet symbols.
fn message_from(alphabet: &[String], picks: &[usize]) -> String {
    picks.iter().map(|&i| alphabet[i % alphabet.len()].as_str()).collect()
}

proptest! {
    #[test]
    fn roundtrip_default_configuration(picks in proptest::collection::vec(0usize..1000, 0..64)) {
        let codec = Codec::new();
        let alphabet = codec.state().alphabet;
        let message = message_from(&alphabet, &picks);

        let encoded = codec.encode_str(&message).unwrap();
        prop_assert_eq!(codec.decode_str(&encoded).unwrap(), message);
    }

    #[test]
    fn roundtrip_emoji_base(picks in proptest::collection::vec(0usize..1000, 1..48)) {
        let mut codec = Codec::new();
        prop_assert!(
            codec.set_symbols([
                "\u{1F48E}", "\u{1F30B}", "\u{1F3D4}\u{FE0F}", "\u{1FAB1}", "\u{1F333}",
            ]),
            "set_symbols failed"
        );
        prop_assert!(codec.set_alphabet(
            "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789 .,!?"
        ));

        let alphabet = codec.state().alphabet;
        let message = message_from(&alphabet, &picks);

        let encoded = codec.encode_str(&message).unwrap();
        prop_assert_eq!(codec.decode_str(&encoded).unwrap(), message);
    }

    #[test]
    fn roundtrip_grapheme_alphabet(picks in proptest::collection::vec(0usize..1000, 0..32)) {
        let mut codec = Codec::new();
        prop_assert!(codec.set_symbols(["0", "1", "2"]));
        // Flags and ZWJ sequences as alphabet symbols.
        prop_assert!(
            codec.set_alphabet(
                "\u{1F1FA}\u{1F1F8}\u{1F1EF}\u{1F1F5}\u{2764}\u{FE0F}\u{200D}\u{1F525}\u{1F469}\u{200D}\u{1F4BB}xyz"
            ),
            "set_alphabet failed"
        );
        prop_assert_eq!(codec.state().alphabet_size, 7);

        let alphabet = codec.state().alphabet;
        let message = message_from(&alphabet, &picks);

        let encoded = codec.encode_str(&message).unwrap();
        prop_assert_eq!(codec.decode_str(&encoded).unwrap(), message);
    }

    /// Alphabets where one symbol's bytes prefix another's still round-trip,
    /// because tokenization always takes the longest match.
    #[test]
    fn roundtrip_prefixed_alphabet_symbols(picks in proptest::collection::vec(0usize..1000, 0..32)) {
        let mut codec = Codec::new();
        prop_assert!(codec.set_symbols(["p", "q"]));
        prop_assert!(codec.set_alphabet_symbols(["A", "AB", "ABC", "B", "C"]));

        let alphabet = codec.state().alphabet;
        let message = message_from(&alphabet, &picks);

        let encoded = codec.encode_str(&message).unwrap();
        prop_assert_eq!(codec.decode_str(&encoded).unwrap(), message);
    }

    /// Every chunk is exactly `digits` base symbols, so encoded output for
    /// single-byte base symbols has a predictable length.
    #[test]
    fn encoded_length_is_chunk_multiple(picks in proptest::collection::vec(0usize..1000, 0..48)) {
        let mut codec = Codec::new();
        prop_assert!(codec.set_symbols(["0", "1"]));
        prop_assert!(codec.set_alphabet("abcdefgh"));

        let state = codec.state();
        let message = message_from(&state.alphabet, &picks);

        let encoded = codec.encode_str(&message).unwrap();
        prop_assert_eq!(encoded.len(), picks.len() * state.digits);
    }
}
