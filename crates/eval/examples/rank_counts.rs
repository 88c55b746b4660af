// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example rank_counts
// ...
// Total hands      2598960
//
// High Card:       1303560
// One  Pair:       1098240
// Two Pairs:       123552
// Three of a Kind: 0
// Staight:         9180
// Flush:           5112
// Full House:      58656
// Four of a Kind:  624
// Straight Flush:  36
// ```
//
// Trips without a pair are counted as full houses and the wheel is a high card.

use std::time::Instant;

use jokerpoker_eval::*;

#[rustfmt::skip]
fn main() {
    // Evaluate all 2.6M 5-cards hands.
    let deck = Color::colors().flat_map(Card::of_color).collect::<Vec<_>>();

    let now = Instant::now();
    let mut counts = [0usize; 9];

    for hand in five_card_subsets(&deck) {
        let rank = HandValue::eval(&hand).rank();
        counts[rank as usize] += 1;
    }

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>();
    println!("Total hands      {total}");
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    println!("High Card:       {}", counts[HandRank::HighCard as usize]);
    println!("One  Pair:       {}", counts[HandRank::OnePair as usize]);
    println!("Two Pairs:       {}", counts[HandRank::TwoPair as usize]);
    println!("Three of a Kind: {}", counts[HandRank::ThreeOfAKind as usize]);
    println!("Staight:         {}", counts[HandRank::Straight as usize]);
    println!("Flush:           {}", counts[HandRank::Flush as usize]);
    println!("Full House:      {}", counts[HandRank::FullHouse as usize]);
    println!("Four of a Kind:  {}", counts[HandRank::FourOfAKind as usize]);
    println!("Straight Flush:  {}", counts[HandRank::StraightFlush as usize]);
}
