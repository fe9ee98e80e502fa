// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Viae-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Viae and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Persistence for the edit history on disk.
//!
//! The map file is the only persistence boundary: it carries the serialized
//! history (the derivation recipe), never the graph state itself. Reading is
//! all-or-nothing: a file that fails to parse or to replay leaves the
//! caller's in-memory state untouched.

use std::fmt;
use std::fs;
use std::io;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::history::{History, HistoryRecord};

/// Fixed base name offered for exports.
pub const MAP_FILENAME: &str = "map.json";

/// The on-disk shape: `{ "history": { "commands": [...], "index": N } }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapFile {
    pub history: HistoryRecord,
}

#[derive(Debug)]
pub enum StoreError {
    Io {
        path: PathBuf,
        source: io::Error,
    },
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "io error at {}: {source}", path.display())
            }
            Self::Json { path, source } => {
                write!(f, "invalid map file {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
        }
    }
}

/// Writes the exported history to `path` atomically (temp file + rename).
pub fn save_map(path: &Path, history: &History) -> Result<(), StoreError> {
    let file = MapFile {
        history: history.export(),
    };
    let mut contents =
        serde_json::to_string_pretty(&file).map_err(|source| StoreError::Json {
            path: path.to_path_buf(),
            source,
        })?;
    contents.push('\n');
    write_atomic(path, contents.as_bytes())
}

/// Reads and parses a map file. Parse failures never partially apply.
pub fn load_map(path: &Path) -> Result<MapFile, StoreError> {
    let contents = fs::read_to_string(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| StoreError::Json {
        path: path.to_path_buf(),
        source,
    })
}

fn write_atomic(path: &Path, contents: &[u8]) -> Result<(), StoreError> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&parent).map_err(|source| StoreError::Io {
        path: parent.clone(),
        source,
    })?;

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| MAP_FILENAME.to_owned());
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let tmp_path = parent.join(format!(".viae.tmp.{file_name}.{nanos}"));

    let result = (|| {
        let mut file = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&tmp_path)
            .map_err(|source| StoreError::Io {
                path: tmp_path.clone(),
                source,
            })?;
        file.write_all(contents).map_err(|source| StoreError::Io {
            path: tmp_path.clone(),
            source,
        })?;
        drop(file);

        fs::rename(&tmp_path, path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })
    })();

    if result.is_err() {
        let _ = fs::remove_file(&tmp_path);
    }
    result
}
