use super::card::Card;
use super::hand::Hand;
use crate::Error;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// A mutable deck of cards supporting random draws.
///
/// Wraps a [`Hand`] representing the remaining cards, with methods for
/// randomly drawing cards. Every deck carries its own generator, so two decks
/// built from the same seed deal the same cards in the same order.
/// The removed set is always the complement of the remaining set.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Hand,
    rng: SmallRng,
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// Creates a fresh 52-card deck seeded from entropy.
    pub fn new() -> Self {
        Self::seeded(rand::random())
    }
    /// Creates a fresh 52-card deck with a reproducible generator.
    pub fn seeded(seed: u64) -> Self {
        Self {
            cards: Hand::full(),
            rng: SmallRng::seed_from_u64(seed),
        }
    }
    /// Puts every card back. The generator keeps its position.
    pub fn reset(&mut self) {
        self.cards = Hand::full();
    }
    pub fn size(&self) -> usize {
        self.cards.size()
    }
    /// Tests whether a card is still in the deck.
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }
    pub fn removed(&self) -> Hand {
        self.cards.complement()
    }
    /// Marks a card dead. Removing an already removed card is a no-op.
    pub fn remove(&mut self, card: Card) {
        self.cards.remove(card);
    }
    pub fn remove_all(&mut self, cards: impl IntoIterator<Item = Card>) {
        cards.into_iter().for_each(|card| self.remove(card));
    }
    /// Draws and removes a uniformly random card from the deck.
    pub fn draw_one(&mut self) -> Result<Card, Error> {
        let n = self.size();
        if n == 0 {
            return Err(Error::InsufficientCards {
                requested: 1,
                remaining: 0,
            });
        }
        let i = self.rng.random_range(0..n);
        let mut bits = u64::from(self.cards);
        for _ in 0..i {
            bits &= bits - 1;
        }
        let card = Card::from(bits.trailing_zeros() as u8);
        self.cards.remove(card);
        Ok(card)
    }
    /// Draws `n` distinct cards without replacement.
    pub fn draw(&mut self, n: usize) -> Result<Hand, Error> {
        if n > self.size() {
            return Err(Error::InsufficientCards {
                requested: n,
                remaining: self.size(),
            });
        }
        let mut hand = Hand::empty();
        for _ in 0..n {
            hand = Hand::add(hand, Hand::from(self.draw_one()?));
        }
        Ok(hand)
    }
}

impl From<Deck> for Hand {
    fn from(deck: Deck) -> Self {
        deck.cards
    }
}

impl Iterator for Deck {
    type Item = Card;
    fn next(&mut self) -> Option<Self::Item> {
        self.draw_one().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remove_is_idempotent() {
        let mut deck = Deck::seeded(1);
        let card = Card::try_from("As").unwrap();
        deck.remove(card);
        deck.remove(card);
        assert_eq!(deck.size(), 51);
        assert_eq!(deck.removed().size(), 1);
        assert!(!deck.contains(&card));
    }

    #[test]
    fn remaining_plus_removed_is_52() {
        let mut deck = Deck::seeded(2);
        deck.remove_all(Card::parse("As Ks Qs").unwrap());
        let drawn = deck.draw(10).unwrap();
        assert_eq!(drawn.size(), 10);
        assert_eq!(deck.size() + deck.removed().size(), 52);
        assert!(!Hand::from(deck.clone()).overlaps(&deck.removed()));
    }

    #[test]
    fn never_draws_removed_cards() {
        let dead = Hand::try_from("As Ah Ad Ac Kd").unwrap();
        for seed in 0..64 {
            let mut deck = Deck::seeded(seed);
            deck.remove_all(dead);
            let drawn = deck.draw(47).unwrap();
            assert!(!drawn.overlaps(&dead));
            assert_eq!(Hand::add(drawn, dead), Hand::full());
        }
    }

    #[test]
    fn insufficient_cards() {
        let mut deck = Deck::seeded(3);
        deck.remove_all(Hand::try_from("2c 3c 4c").unwrap());
        assert!(matches!(
            deck.draw(50),
            Err(Error::InsufficientCards {
                requested: 50,
                remaining: 49
            })
        ));
        assert_eq!(deck.size(), 49);
    }

    #[test]
    fn reset_restores_full_deck() {
        let mut deck = Deck::seeded(4);
        deck.draw(20).unwrap();
        deck.reset();
        assert_eq!(deck.size(), 52);
    }

    #[test]
    fn seeded_decks_agree() {
        let a = Deck::seeded(99).draw(5).unwrap();
        let b = Deck::seeded(99).draw(5).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn every_card_reachable() {
        let mut seen = Hand::empty();
        for seed in 0..2048 {
            let mut deck = Deck::seeded(seed);
            deck.remove_all(Hand::try_from("2c 2d").unwrap());
            seen.insert(deck.draw_one().unwrap());
        }
        assert_eq!(seen.size(), 50);
    }
}
