//! Round outcome types.

/// Who won a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Player wins (dealer busts or player has the higher value).
    PlayerWin,
    /// Dealer wins (player busts or dealer has the higher value).
    DealerWin,
    /// Push (equal values).
    Tie,
}

/// Summary of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// The outcome of the round.
    pub outcome: Outcome,
    /// The player's final hand value.
    pub player_value: u8,
    /// The dealer's final hand value.
    pub dealer_value: u8,
    /// Whether the player busted.
    pub player_bust: bool,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
}
