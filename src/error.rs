//! Error types for game operations.

use thiserror::Error;

use crate::card::Card;

/// Errors that can occur while building a deck or playing a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// A card was drawn from an empty deck. The round is aborted.
    #[error("deck exhausted")]
    DeckExhausted,
    /// A stacked deck listed the same card more than once.
    #[error("duplicate card in deck: {0}")]
    DuplicateCard(Card),
}
