//! Bounded per-conversation memory.

use serde::Serialize;
use std::collections::VecDeque;

use crate::config::HISTORY_CAP;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Turn {
    pub role: Role,
    pub text: String,
}

impl Turn {
    pub fn user(text: impl Into<String>) -> Self {
        Self { role: Role::User, text: text.into() }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self { role: Role::Bot, text: text.into() }
    }
}

/// Ring buffer of turns (oldest first) plus the last identified plant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversationSession {
    id: String,
    history: VecDeque<Turn>,
    last_plant: Option<String>,
    #[serde(skip)]
    capacity: usize,
}

impl ConversationSession {
    pub fn new(id: impl Into<String>) -> Self {
        Self::with_capacity(id, HISTORY_CAP)
    }

    /// A zero capacity is raised to 1.
    pub fn with_capacity(id: impl Into<String>, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            id: id.into(),
            history: VecDeque::with_capacity(capacity),
            last_plant: None,
            capacity,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn history(&self) -> &VecDeque<Turn> {
        &self.history
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Append, dropping the oldest turns beyond capacity.
    pub fn push(&mut self, turn: Turn) {
        self.history.push_back(turn);
        self.retain_recent(self.capacity);
    }

    /// Keep only the `limit` newest turns.
    pub fn retain_recent(&mut self, limit: usize) {
        while self.history.len() > limit {
            self.history.pop_front();
        }
    }

    pub fn last_turn(&self) -> Option<&Turn> {
        self.history.back()
    }

    /// Up to `n` turns, newest first
    pub fn recent(&self, n: usize) -> impl Iterator<Item = &Turn> {
        self.history.iter().rev().take(n)
    }

    pub fn last_user_turn(&self) -> Option<&Turn> {
        self.history.iter().rev().find(|turn| turn.role == Role::User)
    }

    pub fn last_plant(&self) -> Option<&str> {
        self.last_plant.as_deref()
    }

    pub fn remember_plant(&mut self, label: impl Into<String>) {
        self.last_plant = Some(label.into());
    }
}
