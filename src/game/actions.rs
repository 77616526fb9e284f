use log::debug;

use crate::card::Card;
use crate::error::GameError;
use crate::result::Outcome;

use super::{Game, Phase};

impl Game {
    /// Player action: Hit (draw a card).
    ///
    /// Returns the card drawn, or `None` if the round is not in
    /// [`Phase::PlayerTurn`] (the command is ignored and nothing changes).
    /// A bust ends the round with [`Outcome::DealerWin`].
    ///
    /// # Errors
    ///
    /// Returns [`GameError::DeckExhausted`] if the deck is empty; the round
    /// is aborted.
    pub fn hit(&mut self) -> Result<Option<Card>, GameError> {
        if self.phase != Phase::PlayerTurn {
            debug!("hit ignored in {:?}", self.phase);
            return Ok(None);
        }

        let card = self.draw()?;
        self.player_hand.add_card(card);

        if self.player_hand.is_bust() {
            self.finish(Outcome::DealerWin);
        }

        Ok(Some(card))
    }

    /// Player action: Stand (keep current hand).
    ///
    /// The dealer then plays out their hand and the round finishes. Returns
    /// the outcome, or `None` if the round is not in [`Phase::PlayerTurn`]
    /// (the command is ignored and nothing changes).
    ///
    /// # Errors
    ///
    /// Returns [`GameError::DeckExhausted`] if the deck runs out while the
    /// dealer must draw; the round is aborted.
    pub fn stand(&mut self) -> Result<Option<Outcome>, GameError> {
        if self.phase != Phase::PlayerTurn {
            debug!("stand ignored in {:?}", self.phase);
            return Ok(None);
        }

        debug!("player stands on {}", self.player_hand.value());
        self.phase = Phase::DealerTurn;

        let drawn = self.dealer_play()?;
        if !drawn.is_empty() {
            debug!("dealer drew {} card(s)", drawn.len());
        }

        let outcome = self.settle();
        self.finish(outcome);
        Ok(Some(outcome))
    }
}
