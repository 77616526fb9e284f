//! Game configuration options.

/// Configuration options for a blackjack game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use blackjack_engine::GameOptions;
///
/// let options = GameOptions::default().with_stand_on_soft_17(false);
/// assert!(!options.stand_on_soft_17);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Whether the dealer stands on soft 17.
    ///
    /// When `false`, the dealer keeps drawing on a soft 17 and stops only at
    /// a hard 17 or any 18 and above.
    pub stand_on_soft_17: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            stand_on_soft_17: true,
        }
    }
}

impl GameOptions {
    /// Sets whether dealer stands on soft 17.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_engine::GameOptions;
    ///
    /// let options = GameOptions::default().with_stand_on_soft_17(false);
    /// assert_eq!(options.stand_on_soft_17, false);
    /// ```
    #[must_use]
    pub const fn with_stand_on_soft_17(mut self, stand: bool) -> Self {
        self.stand_on_soft_17 = stand;
        self
    }
}
