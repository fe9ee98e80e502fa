// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Viae-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Viae and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use super::ids::{EdgeId, NodeId};

/// A point in canvas coordinates. Also used for edge waypoints.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A city on the map.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    node_id: NodeId,
    label: String,
    position: Position,
    kind: Option<String>,
}

impl Node {
    pub fn new(node_id: NodeId, label: impl Into<String>, position: Position) -> Self {
        Self {
            node_id,
            label: label.into(),
            position,
            kind: None,
        }
    }

    pub fn node_id(&self) -> &NodeId {
        &self.node_id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    /// Renderer type tag (e.g. `"custom"`); opaque to the history engine.
    pub fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    pub fn set_kind(&mut self, kind: Option<String>) {
        self.kind = kind;
    }
}

/// A road between two cities.
///
/// `waypoints` is the ordered sequence of intermediate routing points the
/// edge renderer draws through; the engine stores it untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    edge_id: EdgeId,
    source: NodeId,
    target: NodeId,
    source_handle: Option<String>,
    target_handle: Option<String>,
    cost: f64,
    waypoints: Vec<Position>,
}

impl Edge {
    pub fn new(edge_id: EdgeId, source: NodeId, target: NodeId, cost: f64) -> Self {
        Self {
            edge_id,
            source,
            target,
            source_handle: None,
            target_handle: None,
            cost,
            waypoints: Vec::new(),
        }
    }

    pub fn edge_id(&self) -> &EdgeId {
        &self.edge_id
    }

    pub fn source(&self) -> &NodeId {
        &self.source
    }

    pub fn target(&self) -> &NodeId {
        &self.target
    }

    pub fn source_handle(&self) -> Option<&str> {
        self.source_handle.as_deref()
    }

    pub fn target_handle(&self) -> Option<&str> {
        self.target_handle.as_deref()
    }

    pub fn set_handles(&mut self, source_handle: Option<String>, target_handle: Option<String>) {
        self.source_handle = source_handle;
        self.target_handle = target_handle;
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub fn set_cost(&mut self, cost: f64) {
        self.cost = cost;
    }

    pub fn waypoints(&self) -> &[Position] {
        &self.waypoints
    }

    pub fn set_waypoints(&mut self, waypoints: Vec<Position>) {
        self.waypoints = waypoints;
    }

    pub fn touches(&self, node_id: &NodeId) -> bool {
        &self.source == node_id || &self.target == node_id
    }
}

/// The externally-owned node/edge collections every command mutates.
///
/// Collections are keyed by id, so state equality is order-independent and
/// undoing a delete restores exactly the pre-delete state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Graph {
    nodes: BTreeMap<NodeId, Node>,
    edges: BTreeMap<EdgeId, Edge>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn nodes(&self) -> &BTreeMap<NodeId, Node> {
        &self.nodes
    }

    pub fn edges(&self) -> &BTreeMap<EdgeId, Edge> {
        &self.edges
    }

    pub fn node(&self, node_id: &NodeId) -> Option<&Node> {
        self.nodes.get(node_id)
    }

    pub fn node_mut(&mut self, node_id: &NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(node_id)
    }

    pub fn edge(&self, edge_id: &EdgeId) -> Option<&Edge> {
        self.edges.get(edge_id)
    }

    pub fn edge_mut(&mut self, edge_id: &EdgeId) -> Option<&mut Edge> {
        self.edges.get_mut(edge_id)
    }

    pub fn insert_node(&mut self, node: Node) {
        self.nodes.insert(node.node_id().clone(), node);
    }

    pub fn remove_node(&mut self, node_id: &NodeId) -> Option<Node> {
        self.nodes.remove(node_id)
    }

    pub fn insert_edge(&mut self, edge: Edge) {
        self.edges.insert(edge.edge_id().clone(), edge);
    }

    pub fn remove_edge(&mut self, edge_id: &EdgeId) -> Option<Edge> {
        self.edges.remove(edge_id)
    }

    pub fn contains_label(&self, label: &str) -> bool {
        self.nodes.values().any(|node| node.label() == label)
    }

    /// Ids of all edges with an endpoint at `node_id`.
    pub fn edges_incident_to(&self, node_id: &NodeId) -> Vec<EdgeId> {
        self.edges
            .values()
            .filter(|edge| edge.touches(node_id))
            .map(|edge| edge.edge_id().clone())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
    }
}
