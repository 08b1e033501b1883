// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Undo/redo snapshots of the annotation collections.

use crate::models::{caption::Caption, event::Event};

/// Captions and events as they were at one point in time.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct Snapshot {
    pub captions: Vec<Caption>,
    pub events: Vec<Event>,
}

/// Bounded undo and redo stacks.
#[derive(Debug, Clone)]
pub(crate) struct History {
    /// Undo stack (past states)
    undo_stack: Vec<Snapshot>,
    /// Redo stack (future states after undo)
    redo_stack: Vec<Snapshot>,
    max_size: usize,
}

impl History {
    pub fn new(max_size: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_size,
        }
    }

    /// Save the current state before making a change.
    pub fn push(&mut self, snapshot: Snapshot) {
        self.undo_stack.push(snapshot);
        if self.undo_stack.len() > self.max_size {
            self.undo_stack.remove(0);
        }
        // A new change invalidates anything undone so far
        self.redo_stack.clear();
    }

    pub fn undo(&mut self, current: Snapshot) -> Option<Snapshot> {
        let previous = self.undo_stack.pop()?;
        self.redo_stack.push(current);
        Some(previous)
    }

    pub fn redo(&mut self, current: Snapshot) -> Option<Snapshot> {
        let next = self.redo_stack.pop()?;
        self.undo_stack.push(current);
        Some(next)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}
