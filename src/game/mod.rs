//! Game engine and state management.

use log::{debug, trace, warn};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::GameError;
use crate::hand::Hand;
use crate::options::GameOptions;
use crate::result::{Outcome, RoundResult};

mod actions;
mod dealer;
pub mod state;

pub use state::Phase;

/// Cards dealt to each party at the start of a round.
const OPENING_CARDS: usize = 2;

/// A single-player blackjack round against the dealer.
///
/// The game owns the deck and both hands. The player drives it through
/// [`hit`](Self::hit) and [`stand`](Self::stand); everything else is read-only
/// state for the presentation layer.
#[derive(Debug, Clone)]
pub struct Game {
    /// Game options.
    options: GameOptions,
    /// Cards not yet dealt this round.
    deck: Deck,
    /// Player's hand.
    player_hand: Hand,
    /// Dealer's hand. The first card is the hole card.
    dealer_hand: Hand,
    /// Current phase.
    phase: Phase,
    /// Outcome, set once the round finishes normally.
    outcome: Option<Outcome>,
    /// Random number generator used to shuffle each round's deck.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given seed and deals the opening hands.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::DeckExhausted`] if the opening deal cannot be
    /// completed. A freshly shuffled deck always holds enough cards.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_engine::{Game, GameOptions, Phase};
    ///
    /// let game = Game::new(GameOptions::default(), 42).unwrap();
    /// assert_eq!(game.phase(), Phase::PlayerTurn);
    /// assert_eq!(game.player_hand().len(), 2);
    /// assert_eq!(game.dealer_hand().len(), 2);
    /// ```
    pub fn new(options: GameOptions, seed: u64) -> Result<Self, GameError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Deck::shuffled(&mut rng);
        Self::start(options, deck, rng)
    }

    /// Creates a game that plays its first round from `deck`.
    ///
    /// Cards are dealt player, dealer, player, dealer, then drawn in deck
    /// order. Later rounds started with [`new_round`](Self::new_round) use
    /// shuffled decks from `seed`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::DeckExhausted`] if `deck` holds fewer than four
    /// cards.
    pub fn with_deck(options: GameOptions, seed: u64, deck: Deck) -> Result<Self, GameError> {
        Self::start(options, deck, ChaCha8Rng::seed_from_u64(seed))
    }

    fn start(options: GameOptions, deck: Deck, rng: ChaCha8Rng) -> Result<Self, GameError> {
        let mut game = Self {
            options,
            deck,
            player_hand: Hand::new(),
            dealer_hand: Hand::new(),
            phase: Phase::PlayerTurn,
            outcome: None,
            rng,
        };
        game.deal()?;
        Ok(game)
    }

    /// Discards the current round and deals a new one from a freshly shuffled
    /// deck.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::DeckExhausted`] if the opening deal cannot be
    /// completed; the new round is then aborted.
    pub fn new_round(&mut self) -> Result<(), GameError> {
        self.deck = Deck::shuffled(&mut self.rng);
        self.player_hand = Hand::new();
        self.dealer_hand = Hand::new();
        self.phase = Phase::PlayerTurn;
        self.outcome = None;
        self.deal()
    }

    fn deal(&mut self) -> Result<(), GameError> {
        for _ in 0..OPENING_CARDS {
            let card = self.draw()?;
            self.player_hand.add_card(card);
            let card = self.draw()?;
            self.dealer_hand.add_card(card);
        }

        debug!(
            "dealt player {} ({}), dealer showing {}",
            self.player_hand.value(),
            if self.player_hand.is_soft() { "soft" } else { "hard" },
            self.dealer_visible_value()
        );
        Ok(())
    }

    /// Draws the top card. An empty deck aborts the round.
    fn draw(&mut self) -> Result<Card, GameError> {
        match self.deck.draw() {
            Ok(card) => {
                trace!("drew {card}, {} left", self.deck.len());
                Ok(card)
            }
            Err(err) => {
                warn!("round aborted in {:?}: {err}", self.phase);
                self.phase = Phase::Finished;
                self.outcome = None;
                Err(err)
            }
        }
    }

    fn finish(&mut self, outcome: Outcome) {
        debug!(
            "round finished: {outcome:?} (player {}, dealer {})",
            self.player_hand.value(),
            self.dealer_hand.value()
        );
        self.phase = Phase::Finished;
        self.outcome = Some(outcome);
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the outcome of the round.
    ///
    /// `None` while the round is in progress, and also for a round aborted by
    /// an exhausted deck.
    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Returns whether the round ended without an outcome.
    #[must_use]
    pub const fn is_aborted(&self) -> bool {
        matches!(self.phase, Phase::Finished) && self.outcome.is_none()
    }

    /// Returns a summary of the finished round, or `None` if it is still in
    /// progress or was aborted.
    #[must_use]
    pub fn result(&self) -> Option<RoundResult> {
        self.outcome.map(|outcome| RoundResult {
            outcome,
            player_value: self.player_hand.value(),
            dealer_value: self.dealer_hand.value(),
            player_bust: self.player_hand.is_bust(),
            dealer_bust: self.dealer_hand.is_bust(),
        })
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player_hand
    }

    /// Returns the dealer's full hand, hole card included.
    ///
    /// Presentation code should use [`visible_dealer_cards`](Self::visible_dealer_cards)
    /// to avoid showing the hole card during the player's turn.
    #[must_use]
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer_hand
    }

    /// Returns the value of the player's hand.
    #[must_use]
    pub fn player_value(&self) -> u8 {
        self.player_hand.value()
    }

    /// Returns the value of the dealer's full hand.
    #[must_use]
    pub fn dealer_value(&self) -> u8 {
        self.dealer_hand.value()
    }

    /// Returns whether the dealer's hole card may be shown.
    ///
    /// The hole card (the dealer's first card) stays hidden for the whole
    /// player turn.
    #[must_use]
    pub const fn is_hole_revealed(&self) -> bool {
        !matches!(self.phase, Phase::PlayerTurn)
    }

    /// Returns the dealer cards the player is allowed to see.
    #[must_use]
    pub fn visible_dealer_cards(&self) -> &[Card] {
        let cards = self.dealer_hand.cards();
        if self.is_hole_revealed() {
            cards
        } else {
            cards.get(1..).unwrap_or_default()
        }
    }

    /// Returns the value of the dealer cards the player is allowed to see.
    #[must_use]
    pub fn dealer_visible_value(&self) -> u8 {
        crate::hand::hand_value(self.visible_dealer_cards())
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }
}
