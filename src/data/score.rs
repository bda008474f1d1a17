use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{error::score::ScoreError, model::score::PlayerScore};

/// Score store shared between the event handler and the scheduler.
///
/// A tokio mutex so the report-then-reset sequence can hold the lock across the
/// outbound send.
pub type SharedScoreStore = Arc<Mutex<ScoreStore>>;

/// Accumulates player points in first-mention order.
///
/// Every name maps to the sum of all deltas applied to it since the last reset.
/// A name is only materialized the first time it is mentioned; until then its
/// total reads as 0. Rows keep the order in which players were first mentioned.
#[derive(Debug, Default)]
pub struct ScoreStore {
    /// Entries in first-mention order.
    scores: Vec<PlayerScore>,
    /// Player name to position in `scores`.
    index: HashMap<String, usize>,
}

impl ScoreStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store wrapped for sharing across tasks.
    pub fn shared() -> SharedScoreStore {
        Arc::new(Mutex::new(Self::new()))
    }

    /// Adds points to a player, creating the player with 0 points if absent.
    ///
    /// The name is used verbatim as the key (case and whitespace sensitive).
    /// A delta that would make the total infinite is rejected and leaves the store
    /// untouched, including not creating a player that was never mentioned.
    ///
    /// # Arguments
    /// - `name` - Player name as typed in the command
    /// - `delta` - Finite number of points to add, may be negative or fractional
    ///
    /// # Returns
    /// - `Ok(f64)` - The player's new total
    /// - `Err(ScoreError::NonFiniteTotal)` - The total would overflow
    pub fn add_points(&mut self, name: &str, delta: f64) -> Result<f64, ScoreError> {
        let total = self.get(name) + delta;
        if !total.is_finite() {
            return Err(ScoreError::NonFiniteTotal {
                name: name.to_string(),
                delta,
            });
        }

        match self.index.get(name) {
            Some(&position) => self.scores[position].points = total,
            None => {
                self.index.insert(name.to_string(), self.scores.len());
                self.scores.push(PlayerScore::new(name, total));
            }
        }

        Ok(total)
    }

    /// Returns every entry in first-mention order.
    pub fn all(&self) -> &[PlayerScore] {
        &self.scores
    }

    /// Returns the total of a player, 0 if the player was never mentioned.
    pub fn get(&self, name: &str) -> f64 {
        self.index
            .get(name)
            .map(|&position| self.scores[position].points)
            .unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Clears every entry.
    ///
    /// Callers are responsible for delivering the leaderboard first; nothing is
    /// kept once this returns.
    pub fn reset(&mut self) {
        self.scores.clear();
        self.index.clear();
    }
}
