// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Viae-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Viae and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::command::RecordError;

/// The wire form of a whole history: raw command records plus the cursor.
///
/// Commands stay as raw JSON values here so the factory can report a precise
/// per-record error on import; `index` keeps the original `-1` sentinel for
/// "nothing applied".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub commands: Vec<Value>,
    pub index: i64,
}

#[derive(Debug)]
pub enum ImportError {
    Record {
        position: usize,
        source: RecordError,
    },
    IndexOutOfRange {
        index: i64,
        len: usize,
    },
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Record { position, source } => {
                write!(f, "command record {position}: {source}")
            }
            Self::IndexOutOfRange { index, len } => {
                write!(
                    f,
                    "history index {index} out of range for {len} command(s)"
                )
            }
        }
    }
}

impl std::error::Error for ImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Record { source, .. } => Some(source),
            Self::IndexOutOfRange { .. } => None,
        }
    }
}
