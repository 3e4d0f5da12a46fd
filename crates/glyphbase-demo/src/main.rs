//! Round-trip demonstration for glyphbase.
//!
//! Generates random messages from a configured alphabet, encodes and
//! decodes each one, and reports sizes, timing, and a verdict. Finishes
//! with the expected-failure path: input outside the alphabet.
//!
//! Usage: `roundtrip-demo [seed] [messages]`

use std::time::Instant;

use glyphbase::Codec;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Alphabet for the demonstration: printable ASCII plus a few multi-byte
/// grapheme clusters (heart-on-fire ZWJ sequence, turkey, ghost).
const DEMO_ALPHABET: &str = concat!(
    "!\"#$%&'()*+,-./0123456789:;<=>?@ABCDEFGHIJKLMNOPQRSTUVWXYZ",
    "[\\]^_`abcdefghijklmnopqrstuvwxyz{|}~ ",
    "\u{2764}\u{FE0F}\u{200D}\u{1F525}\u{1F983}\u{1F47B}",
);

/// Base symbols for the demonstration.
const DEMO_BASE: [&str; 5] = [
    "\u{1F48E}",
    "\u{1F30B}",
    "\u{1F3D4}\u{FE0F}",
    "\u{1FAB1}",
    "\u{1F333}",
];

fn main() {
    let mut args = std::env::args().skip(1);
    let seed: u64 = args
        .next()
        .and_then(|a| a.parse().ok())
        .unwrap_or(0x67_6c_79_70_68);
    let count: usize = args.next().and_then(|a| a.parse().ok()).unwrap_or(5);

    let mut codec = Codec::new();
    codec.set_symbols(DEMO_BASE);
    codec.set_alphabet(DEMO_ALPHABET);

    let state = codec.state();
    println!("glyphbase {} round-trip demo", glyphbase::VERSION);
    println!(
        "base: {} | alphabet: {} symbols | digits per symbol: {}",
        state.base.join(" "),
        state.alphabet_size,
        state.digits
    );

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut failures = 0;
    for i in 0..count {
        let length = rng.gen_range(3..=26);
        let message = generate_message(&mut rng, &state.alphabet, length);

        println!("\n[{}] message:  {message:?}", i + 1);
        let start = Instant::now();
        match codec.encode_str(&message) {
            Ok(encoded) => {
                let decoded = codec
                    .decode_str(&encoded)
                    .expect("decoding freshly encoded output");
                let elapsed = start.elapsed();
                println!("    encoded:  {encoded}");
                println!(
                    "    {} symbols -> {} bytes in {elapsed:?}",
                    length,
                    encoded.len()
                );
                if decoded == message {
                    println!("    round-trip ok");
                } else {
                    println!("    round-trip MISMATCH: {decoded:?}");
                    failures += 1;
                }
            }
            Err(err) => {
                println!("    encode failed: {err}");
                failures += 1;
            }
        }
    }

    demonstrate_rejection();

    if failures > 0 {
        eprintln!("\n{failures} failure(s)");
        std::process::exit(1);
    }
}

/// Concatenates `length` randomly chosen alphabet symbols.
fn generate_message(rng: &mut ChaCha8Rng, alphabet: &[String], length: usize) -> String {
    let mut message = String::new();
    for _ in 0..length {
        let pick = rng.gen_range(0..alphabet.len());
        message.push_str(&alphabet[pick]);
    }
    message
}

/// Shows the diagnostic for input outside the configured alphabet.
fn demonstrate_rejection() {
    let mut codec = Codec::new();
    codec.set_symbols(["\u{1F9A2}", "."]);
    codec.set_alphabet("01");

    let message = "#HELLO# not binary";
    println!("\nexpected failure with alphabet {:?}:", codec.state().alphabet);
    match codec.encode_str(message) {
        Ok(_) => println!("    unexpectedly encoded {message:?}"),
        Err(err) => println!("    {err}"),
    }
}
