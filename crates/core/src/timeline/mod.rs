//! Game timeline: snapshot history with a cursor and saved branches

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// Ordered snapshots with a cursor.
///
/// `history[0]` is the starting snapshot and is never removed. The cursor
/// always points into `history`. Moving from a cursor behind the tip saves
/// the whole previous history as a branch before overwriting its future.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timeline<S> {
    history: Vec<S>,
    index: usize,
    branches: Vec<Vec<S>>,
    finished: bool,
}

impl<S: Clone> Timeline<S> {
    pub fn new(initial: S) -> Self {
        Self {
            history: vec![initial],
            index: 0,
            branches: Vec::new(),
            finished: false,
        }
    }

    pub fn history(&self) -> &[S] {
        &self.history
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn branches(&self) -> &[Vec<S>] {
        &self.branches
    }

    pub fn current(&self) -> &S {
        &self.history[self.index]
    }

    pub fn initial(&self) -> &S {
        &self.history[0]
    }

    pub fn is_at_tip(&self) -> bool {
        self.index == self.history.len() - 1
    }

    /// Set once the game reached a terminal position.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Blocks further moves and forward steps until `reset`.
    pub fn finish(&mut self) {
        self.finished = true;
    }

    /// Appends `snapshot` after the cursor and moves the cursor onto it.
    pub fn apply(&mut self, snapshot: S) -> Result<()> {
        if self.finished {
            return Err(Error::GameOver);
        }
        if !self.is_at_tip() {
            debug!(
                index = self.index,
                abandoned = self.history.len() - 1 - self.index,
                "saving branch before overwriting history"
            );
            self.branches.push(self.history.clone());
            self.history.truncate(self.index + 1);
        }
        self.history.push(snapshot);
        self.index = self.history.len() - 1;
        Ok(())
    }

    /// Returns `false` when already at the start.
    pub fn step_back(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }
        self.index -= 1;
        true
    }

    /// Returns `Ok(false)` when already at the tip.
    pub fn step_forward(&mut self) -> Result<bool> {
        if self.finished {
            return Err(Error::GameOver);
        }
        if self.is_at_tip() {
            return Ok(false);
        }
        self.index += 1;
        Ok(true)
    }

    /// Back to the starting snapshot with no branches.
    pub fn reset(&mut self) {
        self.history.truncate(1);
        self.index = 0;
        self.branches.clear();
        self.finished = false;
    }

    /// Checks the cursor and start invariants, e.g. after deserializing.
    pub fn is_consistent(&self) -> bool {
        !self.history.is_empty()
            && self.index < self.history.len()
            && self.branches.iter().all(|b| !b.is_empty())
    }
}
