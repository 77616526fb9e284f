//! Turn state types.

/// Phase of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// Dealer plays out their hand.
    ///
    /// Only held while [`Game::stand`](super::Game::stand) runs; callers
    /// never observe it.
    DealerTurn,
    /// Round has ended. Commands are ignored until a new round starts.
    Finished,
}
