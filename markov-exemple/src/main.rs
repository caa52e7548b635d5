use log::info;
use markov_core::{Chain, ChainError, RngPicker};

// Sentences learned by the chain, one `add` per sentence
const CORPUS: &[&str] = &[
    "the quick brown fox jumps over the lazy dog",
    "the lazy dog sleeps all day",
    "a quick brown dog chases the fox",
    "the fox sleeps under the brown tree",
];

// Upper bound for every generated sentence
const MAX_LENGTH: usize = 12;

// Number of sentences to generate
const SAMPLES: usize = 5;

// Seed for the reproducible run
const SEED: u64 = 2024;

fn main() -> Result<(), ChainError> {
    // Verbosity comes from RUST_LOG (ex. RUST_LOG=trace)
    env_logger::init();

    let mut chain = Chain::new();
    for sentence in CORPUS {
        chain.add(sentence.split_whitespace())?;
    }
    info!("Learned {} distinct words", chain.len());

    // Adding nothing is rejected
    match chain.add(Vec::new()) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("Empty input rejected: {}", e),
    }

    // Fresh randomness on every run
    for i in 0..SAMPLES {
        println!("Generated sentence {}: {}", i + 1, chain.generate(Some(MAX_LENGTH)).join(" "));
    }

    // Same seed, same sentence
    let mut picker = RngPicker::seeded(SEED);
    println!("Seeded sentence: {}", chain.generate_with(Some(MAX_LENGTH), &mut picker).join(" "));

    // Open-ended walk, stopped by the caller
    let walk: Vec<&str> = chain.walk(RngPicker::thread()).take(MAX_LENGTH).copied().collect();
    println!("Walked: {}", walk.join(" "));

    Ok(())
}
