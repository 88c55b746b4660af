// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Evaluates random hands with one or two jokers.
//
// ```bash
// $ RUST_LOG=debug cargo r --release --example wild_sample -- 1000
// ```

use rand::prelude::*;
use std::time::Instant;

use jokerpoker_eval::*;

fn main() -> Result<(), Error> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let samples = std::env::args()
        .nth(1)
        .and_then(|n| n.parse::<usize>().ok())
        .unwrap_or(100);

    let mut rng = rand::rng();
    let mut deck = Color::colors().flat_map(Card::of_color).collect::<Vec<_>>();
    let mut counts = [0usize; 9];

    let now = Instant::now();

    for n in 0..samples {
        deck.shuffle(&mut rng);

        // Odd samples get both jokers.
        let mut hand = deck[..HAND_SIZE].iter().copied().map(Token::Card).collect::<Vec<_>>();
        hand[HAND_SIZE - 1] = Token::Joker(Color::Red);
        if n % 2 == 1 {
            hand[HAND_SIZE - 2] = Token::Joker(Color::Black);
        }

        let best = best_wild_hand(&hand)?;
        counts[best.value().rank() as usize] += 1;
    }

    let elapsed = now.elapsed().as_secs_f64();
    println!("Total hands      {samples}");
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Hands/sec:       {:.0}\n", samples as f64 / elapsed);

    for rank in HandRank::ranks().rev() {
        let count = counts[rank as usize];
        if count > 0 {
            println!("{:<16} {count}", format!("{rank}:"));
        }
    }

    Ok(())
}
