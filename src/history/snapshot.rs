// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Viae-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Viae and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Snapshot (memento) history: the simpler alternative to the command log.
//!
//! Instead of reversible commands, this strategy keeps a deep copy of the
//! whole graph after every edit and moves a cursor over the copies. It is
//! a reasonable fallback for small maps, but memory grows with history
//! length times graph size, and a snapshot log carries no semantic edit
//! trail to export or replay. The command-based [`super::History`] is the
//! primary design.

use crate::model::Graph;

/// Stored snapshots are value copies: later edits can never mutate a past
/// snapshot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SnapshotHistory {
    snapshots: Vec<Graph>,
    cursor: Option<usize>,
}

impl SnapshotHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Records the state after an edit, discarding any redo tail.
    pub fn save(&mut self, graph: &Graph) {
        let next = self.cursor.map_or(0, |cursor| cursor + 1);
        self.snapshots.truncate(next);
        self.snapshots.push(graph.clone());
        self.cursor = Some(next);
    }

    /// Steps back one snapshot; `None` when already at the oldest state.
    pub fn undo(&mut self) -> Option<Graph> {
        let cursor = self.cursor?;
        if cursor == 0 {
            return None;
        }
        self.cursor = Some(cursor - 1);
        Some(self.snapshots[cursor - 1].clone())
    }

    /// Steps forward one snapshot; `None` when nothing was undone.
    pub fn redo(&mut self) -> Option<Graph> {
        let next = self.cursor.map_or(0, |cursor| cursor + 1);
        if next >= self.snapshots.len() {
            return None;
        }
        self.cursor = Some(next);
        Some(self.snapshots[next].clone())
    }
}
