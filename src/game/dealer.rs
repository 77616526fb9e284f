use alloc::vec::Vec;

use crate::card::Card;
use crate::error::GameError;
use crate::hand::Hand;
use crate::result::Outcome;

use super::Game;

/// Dealer stops drawing at this value.
const DEALER_STANDS_ON: u8 = 17;

/// Returns whether the dealer must draw another card.
fn dealer_must_draw(hand: &Hand, stand_on_soft_17: bool) -> bool {
    let value = hand.value();
    if value < DEALER_STANDS_ON {
        return true;
    }
    value == DEALER_STANDS_ON && hand.is_soft() && !stand_on_soft_17
}

/// Compares two standing hands.
fn compare(player: &Hand, dealer: &Hand) -> Outcome {
    if dealer.is_bust() {
        return Outcome::PlayerWin;
    }

    let player_value = player.value();
    let dealer_value = dealer.value();
    if player_value > dealer_value {
        Outcome::PlayerWin
    } else if player_value < dealer_value {
        Outcome::DealerWin
    } else {
        Outcome::Tie
    }
}

impl Game {
    /// Dealer plays their hand according to the rules.
    ///
    /// The dealer draws until reaching 17 or higher. If `stand_on_soft_17`
    /// is false, the dealer also draws on soft 17.
    ///
    /// Returns the cards drawn by the dealer.
    pub(super) fn dealer_play(&mut self) -> Result<Vec<Card>, GameError> {
        let mut drawn_cards = Vec::new();

        while dealer_must_draw(&self.dealer_hand, self.options.stand_on_soft_17) {
            let card = self.draw()?;
            self.dealer_hand.add_card(card);
            drawn_cards.push(card);
        }

        Ok(drawn_cards)
    }

    /// Decides the outcome once the dealer has stopped drawing.
    pub(super) fn settle(&self) -> Outcome {
        compare(&self.player_hand, &self.dealer_hand)
    }
}
