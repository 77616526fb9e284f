//! The deck cards are drawn from during a round.

extern crate alloc;

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::GameError;

/// An ordered collection of cards. The top of the deck is the end of the
/// sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a full 52-card deck shuffled with the given RNG.
    ///
    /// ```
    /// use blackjack_engine::{DECK_SIZE, Deck};
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha8Rng;
    ///
    /// let deck = Deck::shuffled(&mut ChaCha8Rng::seed_from_u64(7));
    /// assert_eq!(deck.len(), DECK_SIZE);
    /// ```
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards = Self::ordered_cards();
        cards.shuffle(rng);
        Self { cards }
    }

    /// Creates a deck that deals `cards` in the given order: the first card
    /// listed is the first one drawn.
    ///
    /// The deck may hold fewer than 52 cards.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::DuplicateCard`] if any card appears twice.
    pub fn stacked<I>(cards: I) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = Card>,
    {
        let mut cards: Vec<Card> = cards.into_iter().collect();
        for (index, card) in cards.iter().enumerate() {
            if cards[..index].contains(card) {
                return Err(GameError::DuplicateCard(*card));
            }
        }
        cards.reverse();
        Ok(Self { cards })
    }

    fn ordered_cards() -> Vec<Card> {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        cards
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::DeckExhausted`] if the deck is empty.
    pub fn draw(&mut self) -> Result<Card, GameError> {
        self.cards.pop().ok_or(GameError::DeckExhausted)
    }

    /// Returns the remaining cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
