//! Common utilities for moviematch benchmarks

#![allow(dead_code)]

use moviematch::TitleCorpus;

const WORDS: &[&str] = &[
    "the", "dark", "knight", "matrix", "return", "of", "king", "star", "wars", "empire",
    "strikes", "back", "lord", "rings", "night", "day", "blade", "runner", "alien", "space",
    "odyssey", "fellowship", "two", "towers", "godfather", "part", "ii", "iii", "lost", "city",
];

/// Deterministic synthetic title list: 1-5 words per title, varied lengths.
pub fn generate_titles(count: usize) -> TitleCorpus {
    let mut state: u64 = 0x9E37_79B9_7F4A_7C15;
    let mut next = move || {
        // xorshift64
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        state
    };

    (0..count)
        .map(|i| {
            let words = 1 + (next() % 5) as usize;
            let mut title: Vec<&str> = (0..words)
                .map(|_| WORDS[(next() % WORDS.len() as u64) as usize])
                .collect();
            if i % 7 == 0 {
                title.push("2");
            }
            title.join(" ")
        })
        .collect()
}

/// Queries of increasing length used across benchmarks.
pub const QUERIES: &[&str] = &["matrix", "the dark knight", "lord of the rings return of the king"];
