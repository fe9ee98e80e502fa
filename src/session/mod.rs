// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Viae-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Viae and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The editor session the canvas layer runs against.
//!
//! [`EditorSession`] owns the live graph and its history and is the single
//! writer path for user edits: every gesture handler validates its input
//! here, constructs a command only from validated values, and feeds it
//! through the history. Once constructed, no command can fail.
//!
//! Drag gestures (node moves, waypoint moves) mutate the live graph while
//! the pointer moves (the render path) and coalesce into exactly one
//! command at gesture end, or none when the drag had no net effect.

use std::fmt;

use rand::Rng;

use crate::command::Command;
use crate::history::{History, HistoryRecord, ImportError};
use crate::model::{gen_city_name, Edge, EdgeId, Graph, Node, NodeId, Position};

/// Rejected user input. The edit is abandoned; the history is untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    DuplicateLabel { label: String },
    InvalidCost { input: String },
    UnknownNode { node_id: NodeId },
    UnknownEdge { edge_id: EdgeId },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateLabel { label } => {
                write!(f, "city name \"{label}\" is already in use")
            }
            Self::InvalidCost { input } => {
                write!(f, "road cost must be a non-negative number, got \"{input}\"")
            }
            Self::UnknownNode { node_id } => write!(f, "no city with id {node_id}"),
            Self::UnknownEdge { edge_id } => write!(f, "no road with id {edge_id}"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// An in-flight node drag: the origin captured at gesture start.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeDrag {
    node_id: NodeId,
    origin: Position,
}

impl NodeDrag {
    pub fn node_id(&self) -> &NodeId {
        &self.node_id
    }
}

/// An in-flight waypoint drag: the full waypoint sequence at gesture start.
#[derive(Debug, Clone, PartialEq)]
pub struct WaypointDrag {
    edge_id: EdgeId,
    origin: Vec<Position>,
}

impl WaypointDrag {
    pub fn edge_id(&self) -> &EdgeId {
        &self.edge_id
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditorSession {
    graph: Graph,
    history: History,
    next_serial: u64,
}

impl EditorSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn undo(&mut self) -> bool {
        self.history.undo(&mut self.graph)
    }

    pub fn redo(&mut self) -> bool {
        self.history.redo(&mut self.graph)
    }

    pub fn export(&self) -> HistoryRecord {
        self.history.export()
    }

    /// Replaces graph and history with the imported record. On error nothing
    /// is touched.
    pub fn import(&mut self, record: &HistoryRecord) -> Result<(), ImportError> {
        self.history = History::import(record, &mut self.graph)?;
        Ok(())
    }

    // Serials are per-session and monotonic, so ids never collide even for
    // edits landing in the same millisecond. Allocation skips ids the live
    // graph already holds (e.g. after importing a log recorded by another
    // session).
    fn next_serial(&mut self) -> u64 {
        self.next_serial += 1;
        self.next_serial
    }

    fn alloc_node_id(&mut self) -> NodeId {
        loop {
            let serial = self.next_serial();
            let candidate = NodeId::new(format!("n:{serial}")).expect("serial node id");
            if self.graph.node(&candidate).is_none() {
                return candidate;
            }
        }
    }

    fn alloc_edge_id(&mut self, source: &NodeId, target: &NodeId) -> EdgeId {
        loop {
            let serial = self.next_serial();
            let candidate =
                EdgeId::new(format!("{source}-{target}-{serial}")).expect("serial edge id");
            if self.graph.edge(&candidate).is_none() {
                return candidate;
            }
        }
    }

    /// Adds a city with a generated unique name at a random position in the
    /// `[50, 450)` square, as the canvas does for the "add city" button.
    pub fn add_city<R: Rng + ?Sized>(&mut self, rng: &mut R) -> NodeId {
        let name = gen_city_name(&self.graph, rng);
        let position = Position::new(
            50.0 + rng.gen::<f64>() * 400.0,
            50.0 + rng.gen::<f64>() * 400.0,
        );
        self.add_city_at(name, position)
    }

    /// Adds a city with a caller-chosen (already validated unique) name.
    pub fn add_city_at(&mut self, name: impl Into<String>, position: Position) -> NodeId {
        let node_id = self.alloc_node_id();
        let node = Node::new(node_id.clone(), name, position);
        self.history
            .execute_command(Command::AddNode { node }, &mut self.graph);
        node_id
    }

    /// Connects two cities with a road. `cost_input` is the raw prompt text.
    pub fn connect(
        &mut self,
        source: &NodeId,
        target: &NodeId,
        source_handle: Option<String>,
        target_handle: Option<String>,
        cost_input: &str,
    ) -> Result<EdgeId, ValidationError> {
        if self.graph.node(source).is_none() {
            return Err(ValidationError::UnknownNode {
                node_id: source.clone(),
            });
        }
        if self.graph.node(target).is_none() {
            return Err(ValidationError::UnknownNode {
                node_id: target.clone(),
            });
        }
        let cost = parse_cost(cost_input)?;

        let edge_id = self.alloc_edge_id(source, target);
        let mut edge = Edge::new(edge_id.clone(), source.clone(), target.clone(), cost);
        edge.set_handles(source_handle, target_handle);
        self.history
            .execute_command(Command::AddEdge { edge }, &mut self.graph);
        Ok(edge_id)
    }

    /// Renames a city from prompt text. Blank or unchanged input is a silent
    /// no-edit (`Ok(false)`); a name another city carries is rejected.
    pub fn rename_city(
        &mut self,
        node_id: &NodeId,
        input: &str,
    ) -> Result<bool, ValidationError> {
        let Some(node) = self.graph.node(node_id) else {
            return Err(ValidationError::UnknownNode {
                node_id: node_id.clone(),
            });
        };

        let new_label = input.trim();
        if new_label.is_empty() || new_label == node.label() {
            return Ok(false);
        }
        if self.graph.contains_label(new_label) {
            return Err(ValidationError::DuplicateLabel {
                label: new_label.to_owned(),
            });
        }

        let command = Command::RenameNode {
            node_id: node_id.clone(),
            new_label: new_label.to_owned(),
            old_label: node.label().to_owned(),
        };
        self.history.execute_command(command, &mut self.graph);
        Ok(true)
    }

    /// Re-costs a road from prompt text. Unchanged cost is a silent no-edit.
    pub fn change_road_cost(
        &mut self,
        edge_id: &EdgeId,
        input: &str,
    ) -> Result<bool, ValidationError> {
        let Some(edge) = self.graph.edge(edge_id) else {
            return Err(ValidationError::UnknownEdge {
                edge_id: edge_id.clone(),
            });
        };

        let new_cost = parse_cost(input)?;
        if new_cost == edge.cost() {
            return Ok(false);
        }

        let command = Command::ChangeEdgeCost {
            edge_id: edge_id.clone(),
            new_cost,
            old_cost: edge.cost(),
        };
        self.history.execute_command(command, &mut self.graph);
        Ok(true)
    }

    /// Deletes the selected cities and roads as one command.
    ///
    /// Roads incident to a deleted city are folded in even when not selected,
    /// so replay and undo never see a dangling road. Returns `false` when the
    /// selection matches nothing (no command is created).
    pub fn delete_selection(&mut self, node_ids: &[NodeId], edge_ids: &[EdgeId]) -> bool {
        let nodes: Vec<Node> = node_ids
            .iter()
            .filter_map(|node_id| self.graph.node(node_id).cloned())
            .collect();

        let mut doomed_edges: Vec<EdgeId> = edge_ids
            .iter()
            .filter(|&edge_id| self.graph.edge(edge_id).is_some())
            .cloned()
            .collect();
        for node in &nodes {
            for edge_id in self.graph.edges_incident_to(node.node_id()) {
                if !doomed_edges.contains(&edge_id) {
                    doomed_edges.push(edge_id);
                }
            }
        }
        let edges: Vec<Edge> = doomed_edges
            .iter()
            .filter_map(|edge_id| self.graph.edge(edge_id).cloned())
            .collect();

        if nodes.is_empty() && edges.is_empty() {
            return false;
        }

        self.history
            .execute_command(Command::DeleteElements { nodes, edges }, &mut self.graph);
        true
    }

    /// Starts a node drag, capturing the origin position.
    pub fn begin_node_drag(&self, node_id: &NodeId) -> Option<NodeDrag> {
        let node = self.graph.node(node_id)?;
        Some(NodeDrag {
            node_id: node_id.clone(),
            origin: node.position(),
        })
    }

    /// Live position update while the pointer moves. Render path only: no
    /// command is created here.
    pub fn drag_node_to(&mut self, drag: &NodeDrag, position: Position) {
        if let Some(node) = self.graph.node_mut(&drag.node_id) {
            node.set_position(position);
        }
    }

    /// Ends a node drag. One `MoveNode` per gesture; none when the node
    /// ended where it started.
    pub fn end_node_drag(&mut self, drag: NodeDrag) -> bool {
        let Some(node) = self.graph.node(&drag.node_id) else {
            return false;
        };
        let current = node.position();
        if current == drag.origin {
            return false;
        }

        let command = Command::MoveNode {
            node_id: drag.node_id,
            new_position: current,
            old_position: drag.origin,
        };
        self.history.execute_command(command, &mut self.graph);
        true
    }

    /// Inserts a waypoint on segment `segment_index` of a road (context
    /// action at a point on the path).
    pub fn insert_waypoint(
        &mut self,
        edge_id: &EdgeId,
        segment_index: usize,
        point: Position,
    ) -> Result<(), ValidationError> {
        let Some(edge) = self.graph.edge(edge_id) else {
            return Err(ValidationError::UnknownEdge {
                edge_id: edge_id.clone(),
            });
        };

        let old_waypoints = edge.waypoints().to_vec();
        let mut new_waypoints = old_waypoints.clone();
        let at = segment_index.min(new_waypoints.len());
        new_waypoints.insert(at, point);

        let command = Command::ModifyEdgeWaypoints {
            edge_id: edge_id.clone(),
            new_waypoints,
            old_waypoints,
        };
        self.history.execute_command(command, &mut self.graph);
        Ok(())
    }

    /// Removes one waypoint (context action on the waypoint handle). An
    /// out-of-range index is a silent no-edit.
    pub fn remove_waypoint(
        &mut self,
        edge_id: &EdgeId,
        index: usize,
    ) -> Result<bool, ValidationError> {
        let Some(edge) = self.graph.edge(edge_id) else {
            return Err(ValidationError::UnknownEdge {
                edge_id: edge_id.clone(),
            });
        };

        let old_waypoints = edge.waypoints().to_vec();
        if index >= old_waypoints.len() {
            return Ok(false);
        }
        let mut new_waypoints = old_waypoints.clone();
        new_waypoints.remove(index);

        let command = Command::ModifyEdgeWaypoints {
            edge_id: edge_id.clone(),
            new_waypoints,
            old_waypoints,
        };
        self.history.execute_command(command, &mut self.graph);
        Ok(true)
    }

    /// Starts a waypoint drag, capturing the whole sequence at gesture start.
    pub fn begin_waypoint_drag(&self, edge_id: &EdgeId) -> Option<WaypointDrag> {
        let edge = self.graph.edge(edge_id)?;
        Some(WaypointDrag {
            edge_id: edge_id.clone(),
            origin: edge.waypoints().to_vec(),
        })
    }

    /// Live waypoint update while the pointer moves. Render path only.
    pub fn drag_waypoint_to(&mut self, drag: &WaypointDrag, index: usize, position: Position) {
        if let Some(edge) = self.graph.edge_mut(&drag.edge_id) {
            let mut waypoints = edge.waypoints().to_vec();
            if let Some(waypoint) = waypoints.get_mut(index) {
                *waypoint = position;
                edge.set_waypoints(waypoints);
            }
        }
    }

    /// Ends a waypoint drag. One `ModifyEdgeWaypoints` per gesture; none
    /// when the sequence is unchanged.
    pub fn end_waypoint_drag(&mut self, drag: WaypointDrag) -> bool {
        let Some(edge) = self.graph.edge(&drag.edge_id) else {
            return false;
        };
        let current = edge.waypoints().to_vec();
        if current == drag.origin {
            return false;
        }

        let command = Command::ModifyEdgeWaypoints {
            edge_id: drag.edge_id,
            new_waypoints: current,
            old_waypoints: drag.origin,
        };
        self.history.execute_command(command, &mut self.graph);
        true
    }
}

/// Parses prompt text as a road cost: a finite, non-negative number.
fn parse_cost(input: &str) -> Result<f64, ValidationError> {
    let trimmed = input.trim();
    match trimmed.parse::<f64>() {
        Ok(cost) if cost.is_finite() && cost >= 0.0 => Ok(cost),
        _ => Err(ValidationError::InvalidCost {
            input: input.to_owned(),
        }),
    }
}

#[cfg(test)]
mod tests;
