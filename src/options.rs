//! Engine and view-model configuration options.

/// Configuration options for a [`GameEngine`](crate::GameEngine).
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bust42::GameOptions;
///
/// let options = GameOptions::default()
///     .with_max_player_delay(500)
///     .with_pacing(false);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Largest per-card delay accepted when dealing a player, in milliseconds.
    pub max_player_delay: u32,
    /// Whether the per-card delay actually blocks.
    ///
    /// Turning pacing off keeps the delay validation but skips the pause,
    /// which headless callers and tests rely on.
    pub pacing: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            max_player_delay: 1000,
            pacing: true,
        }
    }
}

impl GameOptions {
    /// Sets the largest accepted player delay.
    ///
    /// # Example
    ///
    /// ```
    /// use bust42::GameOptions;
    ///
    /// let options = GameOptions::default().with_max_player_delay(250);
    /// assert_eq!(options.max_player_delay, 250);
    /// ```
    #[must_use]
    pub const fn with_max_player_delay(mut self, max: u32) -> Self {
        self.max_player_delay = max;
        self
    }

    /// Sets whether the per-card delay blocks.
    ///
    /// # Example
    ///
    /// ```
    /// use bust42::GameOptions;
    ///
    /// let options = GameOptions::default().with_pacing(false);
    /// assert_eq!(options.pacing, false);
    /// ```
    #[must_use]
    pub const fn with_pacing(mut self, pacing: bool) -> Self {
        self.pacing = pacing;
        self
    }
}

/// Configuration options for an [`EngineSupport`](crate::EngineSupport).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SupportOptions {
    /// Delay between dealt cards that presentation layers should use.
    pub delay: u32,
    /// Whether players left with no points are removed once a round ends.
    pub remove_broke_players: bool,
}

impl Default for SupportOptions {
    fn default() -> Self {
        Self {
            delay: 100,
            remove_broke_players: true,
        }
    }
}

impl SupportOptions {
    /// Sets the delay between dealt cards.
    ///
    /// # Example
    ///
    /// ```
    /// use bust42::SupportOptions;
    ///
    /// let options = SupportOptions::default().with_delay(0);
    /// assert_eq!(options.delay, 0);
    /// ```
    #[must_use]
    pub const fn with_delay(mut self, delay: u32) -> Self {
        self.delay = delay;
        self
    }

    /// Sets whether broke players are removed after each round.
    ///
    /// # Example
    ///
    /// ```
    /// use bust42::SupportOptions;
    ///
    /// let options = SupportOptions::default().with_remove_broke_players(false);
    /// assert_eq!(options.remove_broke_players, false);
    /// ```
    #[must_use]
    pub const fn with_remove_broke_players(mut self, remove: bool) -> Self {
        self.remove_broke_players = remove;
        self
    }
}
