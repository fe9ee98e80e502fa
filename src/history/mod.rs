// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Viae-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Viae and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The caretaker: a linear command log with a cursor.
//!
//! `execute_command` is the only mutation entry point used by normal
//! editing. It discards the redo tail before applying, so the log never
//! holds a stale command and the history stays a single line (no branching).
//! Import never ships state directly: it rebuilds the log through the
//! command factory and replays it from an empty graph, so a restored session
//! is the deterministic product of its own edit log.

use crate::command::{Command, CommandRecord};
use crate::model::Graph;

mod record;
pub mod snapshot;

pub use record::{HistoryRecord, ImportError};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
    log: Vec<Command>,
    // Index of the last applied command; None before the first edit.
    cursor: Option<usize>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.log.len()
    }

    pub fn is_empty(&self) -> bool {
        self.log.is_empty()
    }

    /// The wire form of the cursor: last applied index, `-1` when nothing is.
    pub fn cursor_index(&self) -> i64 {
        self.cursor.map_or(-1, |cursor| cursor as i64)
    }

    pub fn can_undo(&self) -> bool {
        self.cursor.is_some()
    }

    pub fn can_redo(&self) -> bool {
        self.next_index() < self.log.len()
    }

    fn next_index(&self) -> usize {
        self.cursor.map_or(0, |cursor| cursor + 1)
    }

    /// Truncates the redo tail, applies `command`, and appends it.
    pub fn execute_command(&mut self, command: Command, graph: &mut Graph) {
        let next = self.next_index();
        self.log.truncate(next);
        command.apply(graph);
        self.log.push(command);
        self.cursor = Some(next);
    }

    /// Reverts the command under the cursor. Returns whether anything changed.
    pub fn undo(&mut self, graph: &mut Graph) -> bool {
        let Some(cursor) = self.cursor else {
            return false;
        };
        self.log[cursor].revert(graph);
        self.cursor = cursor.checked_sub(1);
        true
    }

    /// Re-applies the first command past the cursor. Returns whether anything
    /// changed.
    pub fn redo(&mut self, graph: &mut Graph) -> bool {
        let next = self.next_index();
        if next >= self.log.len() {
            return false;
        }
        self.log[next].apply(graph);
        self.cursor = Some(next);
        true
    }

    pub fn export(&self) -> HistoryRecord {
        HistoryRecord {
            commands: self
                .log
                .iter()
                .map(|command| command.to_record().to_value())
                .collect(),
            index: self.cursor_index(),
        }
    }

    /// Rebuilds a history from a persisted record and replays it onto `graph`.
    ///
    /// All-or-nothing: every record is decoded through the factory and the
    /// index is bounds-checked before any state is touched. Only then is
    /// `graph` cleared and commands `0..=index` applied in original order.
    pub fn import(record: &HistoryRecord, graph: &mut Graph) -> Result<Self, ImportError> {
        let mut log = Vec::with_capacity(record.commands.len());
        for (position, value) in record.commands.iter().enumerate() {
            let parsed = CommandRecord::from_value(value)
                .and_then(|parsed| Command::from_record(&parsed))
                .map_err(|source| ImportError::Record { position, source })?;
            log.push(parsed);
        }

        if record.index < -1 || record.index >= log.len() as i64 {
            return Err(ImportError::IndexOutOfRange {
                index: record.index,
                len: log.len(),
            });
        }
        let cursor = usize::try_from(record.index).ok();

        graph.clear();
        if let Some(cursor) = cursor {
            for command in &log[..=cursor] {
                command.apply(graph);
            }
        }

        Ok(Self { log, cursor })
    }
}
