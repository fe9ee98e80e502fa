// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Viae-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Viae and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Viae — command-pattern edit history for a cities-and-roads map editor.
//!
//! The crate models a small city/road network and every reversible edit to it
//! as a serializable [`command::Command`]. A [`history::History`] owns the
//! linear command log and cursor (undo/redo/export/replay-based import); an
//! [`session::EditorSession`] is the top-level container a canvas layer runs
//! against, hosting input validation and drag coalescing so invalid input
//! never becomes a command.

pub mod command;
pub mod history;
pub mod model;
pub mod session;
pub mod store;
