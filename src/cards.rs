use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::podium::Podium;

/// Hard cap on the animal count accepted by [`Deck::generate_all`].
///
/// The deck materializes `n! * (n + 1)` cards; 9 animals would already mean
/// 3.6 million of them.
pub const MAX_ANIMALS: usize = 8;

/// One way to partition every animal between the two podiums: the first
/// `split` entries of `perm` stand on Blue (bottom to top), the rest on Red.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub split: u8,
    pub perm: Vec<u8>,
}

impl Card {
    /// Distribute this card over a Blue/Red pair. Both podiums are cleared
    /// first; entries are pushed in increasing order, so `perm[split - 1]`
    /// ends on Blue's top and `perm[n - 1]` on Red's.
    pub fn deal(&self, blue: &mut Podium, red: &mut Podium) {
        let split = self.split as usize;
        blue.clear();
        red.clear();
        for &idx in &self.perm[..split] {
            blue.push_top(idx);
        }
        for &idx in &self.perm[split..] {
            red.push_top(idx);
        }
    }
}

/// The full enumeration of `(permutation, split)` pairs for one animal count.
/// Generated once at setup; draws are uniform and with replacement.
#[derive(Debug, Clone, Default)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Enumerate every card for `n` animals: each permutation of `0..n`
    /// exactly once via Heap's algorithm, and for each permutation one card
    /// per split value `0..=n`, i.e. `n! * (n + 1)` cards in total.
    ///
    /// `n = 0` yields the single degenerate card (empty permutation,
    /// split 0). Counts above [`MAX_ANIMALS`] are refused.
    pub fn generate_all(n: usize) -> Result<Deck, String> {
        if n > MAX_ANIMALS {
            return Err(format!(
                "{n} animals would need {n}! * {} cards; the deck is capped at {MAX_ANIMALS} animals",
                n + 1
            ));
        }
        let mut perm: Vec<u8> = (0..n as u8).collect();
        let mut cards = Vec::with_capacity(deck_size(n));
        heap_generate(n, &mut perm, &mut cards);
        Ok(Deck { cards })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[inline]
    pub fn get(&self, i: usize) -> Option<&Card> {
        self.cards.get(i)
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Uniform, non-destructive draw. `None` only for an empty deck, which
    /// [`Deck::generate_all`] never produces.
    #[inline]
    pub fn draw<R: Rng>(&self, rng: &mut R) -> Option<&Card> {
        if self.cards.is_empty() {
            None
        } else {
            self.cards.get(rng.gen_range(0..self.cards.len()))
        }
    }
}

/// `n! * (n + 1)`, the exact deck size for `n <= MAX_ANIMALS`.
#[inline]
pub fn deck_size(n: usize) -> usize {
    let fact: usize = (1..=n).product();
    fact * (n + 1)
}

fn heap_generate(k: usize, perm: &mut [u8], cards: &mut Vec<Card>) {
    if k <= 1 {
        push_all_splits(perm, cards);
        return;
    }
    heap_generate(k - 1, perm, cards);
    for i in 0..k - 1 {
        if k % 2 == 0 {
            perm.swap(i, k - 1);
        } else {
            perm.swap(0, k - 1);
        }
        heap_generate(k - 1, perm, cards);
    }
}

fn push_all_splits(perm: &[u8], cards: &mut Vec<Card>) {
    for split in 0..=perm.len() {
        cards.push(Card {
            split: split as u8,
            perm: perm.to_vec(),
        });
    }
}
