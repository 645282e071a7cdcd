//! Bounded undo stack of game snapshots.

use crate::game::GameState;
use alloc::collections::VecDeque;

/// Snapshots of earlier states, newest last. Once `limit` entries are held,
/// pushing drops the oldest one.
#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<GameState>,
    limit: usize,
}

impl History {
    pub fn new(limit: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            limit,
        }
    }

    pub fn push(&mut self, state: GameState) {
        if self.limit == 0 {
            return;
        }
        while self.entries.len() >= self.limit {
            self.entries.pop_front();
        }
        self.entries.push_back(state);
    }

    pub fn pop(&mut self) -> Option<GameState> {
        self.entries.pop_back()
    }

    pub fn peek(&self) -> Option<&GameState> {
        self.entries.back()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}
