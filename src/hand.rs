//! Hand representation and valuation.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// Highest value a hand can have without busting.
pub const BLACKJACK: u8 = 21;

fn evaluate_cards(cards: &[Card]) -> (u8, bool) {
    let mut value: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        value = value.saturating_add(card.point_value());
    }

    while value > BLACKJACK && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    let is_soft = aces > 0 && value <= BLACKJACK;
    (value, is_soft)
}

/// Blackjack value of a set of cards.
///
/// Aces are counted as 11, then dropped to 1 one at a time while the total
/// is over 21.
///
/// ```
/// use blackjack_engine::{Card, Rank, Suit, hand_value};
///
/// let cards = [
///     Card::new(Rank::Ace, Suit::Hearts),
///     Card::new(Rank::Nine, Suit::Clubs),
///     Card::new(Rank::Five, Suit::Spades),
/// ];
/// assert_eq!(hand_value(&cards), 15);
/// ```
#[must_use]
pub fn hand_value(cards: &[Card]) -> u8 {
    evaluate_cards(cards).0
}

/// Returns whether the cards total more than 21.
#[must_use]
pub fn is_bust(cards: &[Card]) -> bool {
    hand_value(cards) > BLACKJACK
}

/// Cards held by one party during a round.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand, in the order they were dealt.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the value of the hand.
    ///
    /// Aces are counted as 11 if possible without busting, otherwise as 1.
    #[must_use]
    pub fn value(&self) -> u8 {
        evaluate_cards(&self.cards).0
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(&self.cards).1
    }

    /// Returns whether the hand is bust (over 21).
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > BLACKJACK
    }

    /// Returns whether the hand is a two-card 21.
    ///
    /// This is informational only; a natural does not end the round.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.value() == BLACKJACK
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl From<&[Card]> for Hand {
    fn from(cards: &[Card]) -> Self {
        Self {
            cards: cards.to_vec(),
        }
    }
}
