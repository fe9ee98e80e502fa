// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Viae-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Viae and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Reversible edit commands.
//!
//! A [`Command`] is plain data: it carries both the forward and the inverse
//! payload, so applying and reverting never consult state outside the graph
//! passed in. All input validation happens before a command is constructed
//! (see [`crate::session`]), which keeps `apply`/`revert` total: a command
//! whose target id is absent simply does nothing.

use crate::model::{Edge, EdgeId, Graph, Node, NodeId, Position};

mod record;

pub use record::{
    CommandRecord, EdgeRecord, NodeRecord, PositionRecord, RecordError, COMMAND_TYPES,
};

/// One reversible unit of change to the node/edge collections.
///
/// Invariant per variant: `revert` followed by `apply` reproduces the exact
/// state the original `apply` produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    AddNode {
        node: Node,
    },
    DeleteElements {
        nodes: Vec<Node>,
        edges: Vec<Edge>,
    },
    AddEdge {
        edge: Edge,
    },
    RenameNode {
        node_id: NodeId,
        new_label: String,
        old_label: String,
    },
    ChangeEdgeCost {
        edge_id: EdgeId,
        new_cost: f64,
        old_cost: f64,
    },
    MoveNode {
        node_id: NodeId,
        new_position: Position,
        old_position: Position,
    },
    ModifyEdgeWaypoints {
        edge_id: EdgeId,
        new_waypoints: Vec<Position>,
        old_waypoints: Vec<Position>,
    },
}

impl Command {
    /// The wire discriminator for this variant.
    pub fn command_type(&self) -> &'static str {
        match self {
            Self::AddNode { .. } => "AddNode",
            Self::DeleteElements { .. } => "DeleteElements",
            Self::AddEdge { .. } => "AddEdge",
            Self::RenameNode { .. } => "RenameNode",
            Self::ChangeEdgeCost { .. } => "ChangeEdgeCost",
            Self::MoveNode { .. } => "MoveNode",
            Self::ModifyEdgeWaypoints { .. } => "ModifyEdgeWaypoints",
        }
    }

    /// The forward mutation.
    pub fn apply(&self, graph: &mut Graph) {
        match self {
            Self::AddNode { node } => {
                graph.insert_node(node.clone());
            }
            Self::DeleteElements { nodes, edges } => {
                for node in nodes {
                    graph.remove_node(node.node_id());
                }
                for edge in edges {
                    graph.remove_edge(edge.edge_id());
                }
            }
            Self::AddEdge { edge } => {
                graph.insert_edge(edge.clone());
            }
            Self::RenameNode {
                node_id, new_label, ..
            } => {
                if let Some(node) = graph.node_mut(node_id) {
                    node.set_label(new_label.clone());
                }
            }
            Self::ChangeEdgeCost {
                edge_id, new_cost, ..
            } => {
                if let Some(edge) = graph.edge_mut(edge_id) {
                    edge.set_cost(*new_cost);
                }
            }
            Self::MoveNode {
                node_id,
                new_position,
                ..
            } => {
                if let Some(node) = graph.node_mut(node_id) {
                    node.set_position(*new_position);
                }
            }
            Self::ModifyEdgeWaypoints {
                edge_id,
                new_waypoints,
                ..
            } => {
                if let Some(edge) = graph.edge_mut(edge_id) {
                    edge.set_waypoints(new_waypoints.clone());
                }
            }
        }
    }

    /// The exact inverse of [`Command::apply`].
    pub fn revert(&self, graph: &mut Graph) {
        match self {
            Self::AddNode { node } => {
                graph.remove_node(node.node_id());
            }
            Self::DeleteElements { nodes, edges } => {
                for node in nodes {
                    graph.insert_node(node.clone());
                }
                for edge in edges {
                    graph.insert_edge(edge.clone());
                }
            }
            Self::AddEdge { edge } => {
                graph.remove_edge(edge.edge_id());
            }
            Self::RenameNode {
                node_id, old_label, ..
            } => {
                if let Some(node) = graph.node_mut(node_id) {
                    node.set_label(old_label.clone());
                }
            }
            Self::ChangeEdgeCost {
                edge_id, old_cost, ..
            } => {
                if let Some(edge) = graph.edge_mut(edge_id) {
                    edge.set_cost(*old_cost);
                }
            }
            Self::MoveNode {
                node_id,
                old_position,
                ..
            } => {
                if let Some(node) = graph.node_mut(node_id) {
                    node.set_position(*old_position);
                }
            }
            Self::ModifyEdgeWaypoints {
                edge_id,
                old_waypoints,
                ..
            } => {
                if let Some(edge) = graph.edge_mut(edge_id) {
                    edge.set_waypoints(old_waypoints.clone());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests;
