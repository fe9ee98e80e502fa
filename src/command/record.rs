// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Viae-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Viae and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Serialized command records and the deserialization factory.
//!
//! [`CommandRecord`] is the wire shape of one command: an internally tagged
//! JSON object (`{"type": "AddNode", ...}`) with camelCase payload fields.
//! The factory distinguishes an unknown `type` (incompatible log, fatal to
//! the whole import) from a malformed payload on a known `type`.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::{Edge, EdgeId, IdError, Node, NodeId, Position};

use super::Command;

/// Every registered command discriminator, in declaration order.
pub const COMMAND_TYPES: [&str; 7] = [
    "AddNode",
    "DeleteElements",
    "AddEdge",
    "RenameNode",
    "ChangeEdgeCost",
    "MoveNode",
    "ModifyEdgeWaypoints",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionRecord {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub id: String,
    pub label: String,
    pub position: PositionRecord,
    #[serde(
        rename = "type",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeRecord {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_handle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_handle: Option<String>,
    pub cost: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub waypoints: Vec<PositionRecord>,
}

/// The serialized form of one [`Command`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CommandRecord {
    AddNode {
        node: NodeRecord,
    },
    DeleteElements {
        nodes: Vec<NodeRecord>,
        edges: Vec<EdgeRecord>,
    },
    AddEdge {
        edge: EdgeRecord,
    },
    #[serde(rename_all = "camelCase")]
    RenameNode {
        node_id: String,
        new_label: String,
        old_label: String,
    },
    #[serde(rename_all = "camelCase")]
    ChangeEdgeCost {
        edge_id: String,
        new_cost: f64,
        old_cost: f64,
    },
    #[serde(rename_all = "camelCase")]
    MoveNode {
        node_id: String,
        new_position: PositionRecord,
        old_position: PositionRecord,
    },
    #[serde(rename_all = "camelCase")]
    ModifyEdgeWaypoints {
        edge_id: String,
        new_waypoints: Vec<PositionRecord>,
        old_waypoints: Vec<PositionRecord>,
    },
}

impl CommandRecord {
    /// Factory entry point: parse one raw record from a persisted log.
    pub fn from_value(value: &Value) -> Result<Self, RecordError> {
        let Some(command_type) = value.get("type").and_then(Value::as_str) else {
            return Err(RecordError::MissingType);
        };
        if !COMMAND_TYPES.contains(&command_type) {
            return Err(RecordError::UnknownCommandType {
                found: command_type.to_owned(),
            });
        }
        serde_json::from_value(value.clone()).map_err(|source| RecordError::MalformedPayload {
            command_type: command_type.to_owned(),
            source,
        })
    }

    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).expect("command record is plain data")
    }
}

#[derive(Debug)]
pub enum RecordError {
    MissingType,
    UnknownCommandType {
        found: String,
    },
    MalformedPayload {
        command_type: String,
        source: serde_json::Error,
    },
    InvalidId {
        raw: String,
        source: IdError,
    },
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingType => f.write_str("command record has no \"type\" field"),
            Self::UnknownCommandType { found } => {
                write!(f, "unknown command type \"{found}\"")
            }
            Self::MalformedPayload {
                command_type,
                source,
            } => {
                write!(f, "malformed {command_type} payload: {source}")
            }
            Self::InvalidId { raw, source } => {
                write!(f, "invalid id \"{raw}\": {source}")
            }
        }
    }
}

impl std::error::Error for RecordError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::MalformedPayload { source, .. } => Some(source),
            Self::InvalidId { source, .. } => Some(source),
            _ => None,
        }
    }
}

fn node_id(raw: &str) -> Result<NodeId, RecordError> {
    NodeId::new(raw).map_err(|source| RecordError::InvalidId {
        raw: raw.to_owned(),
        source,
    })
}

fn edge_id(raw: &str) -> Result<EdgeId, RecordError> {
    EdgeId::new(raw).map_err(|source| RecordError::InvalidId {
        raw: raw.to_owned(),
        source,
    })
}

fn position_record(position: Position) -> PositionRecord {
    PositionRecord {
        x: position.x,
        y: position.y,
    }
}

fn position_from_record(record: &PositionRecord) -> Position {
    Position::new(record.x, record.y)
}

fn node_record(node: &Node) -> NodeRecord {
    NodeRecord {
        id: node.node_id().to_string(),
        label: node.label().to_owned(),
        position: position_record(node.position()),
        kind: node.kind().map(ToOwned::to_owned),
    }
}

fn node_from_record(record: &NodeRecord) -> Result<Node, RecordError> {
    let mut node = Node::new(
        node_id(&record.id)?,
        record.label.clone(),
        position_from_record(&record.position),
    );
    node.set_kind(record.kind.clone());
    Ok(node)
}

fn edge_record(edge: &Edge) -> EdgeRecord {
    EdgeRecord {
        id: edge.edge_id().to_string(),
        source: edge.source().to_string(),
        target: edge.target().to_string(),
        source_handle: edge.source_handle().map(ToOwned::to_owned),
        target_handle: edge.target_handle().map(ToOwned::to_owned),
        cost: edge.cost(),
        waypoints: edge.waypoints().iter().copied().map(position_record).collect(),
    }
}

fn edge_from_record(record: &EdgeRecord) -> Result<Edge, RecordError> {
    let mut edge = Edge::new(
        edge_id(&record.id)?,
        node_id(&record.source)?,
        node_id(&record.target)?,
        record.cost,
    );
    edge.set_handles(record.source_handle.clone(), record.target_handle.clone());
    edge.set_waypoints(record.waypoints.iter().map(position_from_record).collect());
    Ok(edge)
}

impl Command {
    pub fn to_record(&self) -> CommandRecord {
        match self {
            Self::AddNode { node } => CommandRecord::AddNode {
                node: node_record(node),
            },
            Self::DeleteElements { nodes, edges } => CommandRecord::DeleteElements {
                nodes: nodes.iter().map(node_record).collect(),
                edges: edges.iter().map(edge_record).collect(),
            },
            Self::AddEdge { edge } => CommandRecord::AddEdge {
                edge: edge_record(edge),
            },
            Self::RenameNode {
                node_id,
                new_label,
                old_label,
            } => CommandRecord::RenameNode {
                node_id: node_id.to_string(),
                new_label: new_label.clone(),
                old_label: old_label.clone(),
            },
            Self::ChangeEdgeCost {
                edge_id,
                new_cost,
                old_cost,
            } => CommandRecord::ChangeEdgeCost {
                edge_id: edge_id.to_string(),
                new_cost: *new_cost,
                old_cost: *old_cost,
            },
            Self::MoveNode {
                node_id,
                new_position,
                old_position,
            } => CommandRecord::MoveNode {
                node_id: node_id.to_string(),
                new_position: position_record(*new_position),
                old_position: position_record(*old_position),
            },
            Self::ModifyEdgeWaypoints {
                edge_id,
                new_waypoints,
                old_waypoints,
            } => CommandRecord::ModifyEdgeWaypoints {
                edge_id: edge_id.to_string(),
                new_waypoints: new_waypoints.iter().copied().map(position_record).collect(),
                old_waypoints: old_waypoints.iter().copied().map(position_record).collect(),
            },
        }
    }

    pub fn from_record(record: &CommandRecord) -> Result<Self, RecordError> {
        match record {
            CommandRecord::AddNode { node } => Ok(Self::AddNode {
                node: node_from_record(node)?,
            }),
            CommandRecord::DeleteElements { nodes, edges } => Ok(Self::DeleteElements {
                nodes: nodes
                    .iter()
                    .map(node_from_record)
                    .collect::<Result<Vec<_>, _>>()?,
                edges: edges
                    .iter()
                    .map(edge_from_record)
                    .collect::<Result<Vec<_>, _>>()?,
            }),
            CommandRecord::AddEdge { edge } => Ok(Self::AddEdge {
                edge: edge_from_record(edge)?,
            }),
            CommandRecord::RenameNode {
                node_id: raw,
                new_label,
                old_label,
            } => Ok(Self::RenameNode {
                node_id: node_id(raw)?,
                new_label: new_label.clone(),
                old_label: old_label.clone(),
            }),
            CommandRecord::ChangeEdgeCost {
                edge_id: raw,
                new_cost,
                old_cost,
            } => Ok(Self::ChangeEdgeCost {
                edge_id: edge_id(raw)?,
                new_cost: *new_cost,
                old_cost: *old_cost,
            }),
            CommandRecord::MoveNode {
                node_id: raw,
                new_position,
                old_position,
            } => Ok(Self::MoveNode {
                node_id: node_id(raw)?,
                new_position: position_from_record(new_position),
                old_position: position_from_record(old_position),
            }),
            CommandRecord::ModifyEdgeWaypoints {
                edge_id: raw,
                new_waypoints,
                old_waypoints,
            } => Ok(Self::ModifyEdgeWaypoints {
                edge_id: edge_id(raw)?,
                new_waypoints: new_waypoints.iter().map(position_from_record).collect(),
                old_waypoints: old_waypoints.iter().map(position_from_record).collect(),
            }),
        }
    }
}
