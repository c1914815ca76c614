use rand::Rng;

use crate::cards::{HoleCards, Rank, Suit};

/// Ranks batch hands are drawn from. Low cards are left out.
pub const SAMPLE_RANKS: [Rank; 8] = [
    Rank::Ace,
    Rank::King,
    Rank::Queen,
    Rank::Jack,
    Rank::Ten,
    Rank::Nine,
    Rank::Eight,
    Rank::Seven,
];

pub const SAMPLE_SUITS: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

/// Deal a random starting hand with two distinct ranks and two distinct suits.
///
/// Ranks and suits are drawn independently and paired in draw order, so the
/// result is always offsuit and never a pair. Every draw comes from `rng`.
pub fn deal_hole_cards<R: Rng + ?Sized>(rng: &mut R) -> HoleCards {
    let (r1, r2) = pick_two(rng, SAMPLE_RANKS.len());
    let (s1, s2) = pick_two(rng, SAMPLE_SUITS.len());
    HoleCards::new(
        token(SAMPLE_RANKS[r1], SAMPLE_SUITS[s1]),
        token(SAMPLE_RANKS[r2], SAMPLE_SUITS[s2]),
    )
}

fn token(rank: Rank, suit: Suit) -> String {
    format!("{}{}", rank.to_char(), suit.symbol())
}

fn pick_two<R: Rng + ?Sized>(rng: &mut R, len: usize) -> (usize, usize) {
    let first = rng.random_range(0..len);
    let mut second = rng.random_range(0..len - 1);
    if second >= first {
        second += 1;
    }
    (first, second)
}
