//! Game configuration options.

/// Configuration options for a war game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use warrs::GameOptions;
///
/// let options = GameOptions::default().with_war_card_count(1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Number of face-down cards each participant stakes per war round.
    ///
    /// One face-up card is always added on top of this, so each war round
    /// costs a participant `war_card_count + 1` cards.
    pub war_card_count: usize,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self { war_card_count: 2 }
    }
}

impl GameOptions {
    /// Sets the number of face-down cards staked per war round.
    ///
    /// # Example
    ///
    /// ```
    /// use warrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_war_card_count(3);
    /// assert_eq!(options.war_card_count, 3);
    /// ```
    #[must_use]
    pub const fn with_war_card_count(mut self, count: usize) -> Self {
        self.war_card_count = count;
        self
    }
}
