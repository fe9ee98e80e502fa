// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Viae-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Viae and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use rstest::rstest;
use serde_json::json;

use crate::model::{Edge, EdgeId, Graph, Node, NodeId, Position};

use super::{Command, CommandRecord, RecordError, COMMAND_TYPES};

fn node_id(raw: &str) -> NodeId {
    NodeId::new(raw).expect("node id")
}

fn edge_id(raw: &str) -> EdgeId {
    EdgeId::new(raw).expect("edge id")
}

fn sample_graph() -> Graph {
    let mut graph = Graph::new();
    graph.insert_node(Node::new(node_id("a"), "Alpha", Position::new(0.0, 0.0)));
    graph.insert_node(Node::new(node_id("b"), "Beta", Position::new(10.0, 10.0)));
    graph.insert_edge(Edge::new(edge_id("a-b-1"), node_id("a"), node_id("b"), 5.0));
    graph
}

fn sample_commands() -> Vec<Command> {
    let mut extra = Edge::new(edge_id("b-a-2"), node_id("b"), node_id("a"), 2.5);
    extra.set_handles(Some("right-b".to_owned()), Some("left-a".to_owned()));
    extra.set_waypoints(vec![Position::new(5.0, 20.0)]);

    vec![
        Command::AddNode {
            node: Node::new(node_id("c"), "Gamma", Position::new(30.0, 40.0)),
        },
        Command::AddEdge { edge: extra },
        Command::RenameNode {
            node_id: node_id("a"),
            new_label: "Springfield".to_owned(),
            old_label: "Alpha".to_owned(),
        },
        Command::ChangeEdgeCost {
            edge_id: edge_id("a-b-1"),
            new_cost: 9.0,
            old_cost: 5.0,
        },
        Command::MoveNode {
            node_id: node_id("b"),
            new_position: Position::new(99.0, 1.0),
            old_position: Position::new(10.0, 10.0),
        },
        Command::ModifyEdgeWaypoints {
            edge_id: edge_id("a-b-1"),
            new_waypoints: vec![Position::new(1.0, 2.0), Position::new(3.0, 4.0)],
            old_waypoints: Vec::new(),
        },
        Command::DeleteElements {
            nodes: vec![Node::new(node_id("b"), "Beta", Position::new(99.0, 1.0))],
            edges: vec![Edge::new(edge_id("a-b-1"), node_id("a"), node_id("b"), 9.0)],
        },
    ]
}

#[test]
fn add_node_apply_and_revert() {
    let mut graph = sample_graph();
    let command = Command::AddNode {
        node: Node::new(node_id("c"), "Gamma", Position::new(1.0, 2.0)),
    };

    command.apply(&mut graph);
    assert!(graph.node(&node_id("c")).is_some());

    command.revert(&mut graph);
    assert!(graph.node(&node_id("c")).is_none());
    assert_eq!(graph, sample_graph());
}

#[test]
fn delete_elements_revert_restores_full_records() {
    let mut graph = sample_graph();
    let node = graph.node(&node_id("b")).expect("node b").clone();
    let edge = graph.edge(&edge_id("a-b-1")).expect("edge").clone();
    let command = Command::DeleteElements {
        nodes: vec![node],
        edges: vec![edge],
    };

    command.apply(&mut graph);
    assert!(graph.node(&node_id("b")).is_none());
    assert!(graph.edge(&edge_id("a-b-1")).is_none());

    command.revert(&mut graph);
    assert_eq!(graph, sample_graph());
}

#[test]
fn rename_node_swaps_labels_both_ways() {
    let mut graph = sample_graph();
    let command = Command::RenameNode {
        node_id: node_id("a"),
        new_label: "Springfield".to_owned(),
        old_label: "Alpha".to_owned(),
    };

    command.apply(&mut graph);
    assert_eq!(graph.node(&node_id("a")).expect("node a").label(), "Springfield");

    command.revert(&mut graph);
    assert_eq!(graph.node(&node_id("a")).expect("node a").label(), "Alpha");
}

#[test]
fn apply_on_missing_target_is_a_no_op() {
    let mut graph = sample_graph();
    let command = Command::RenameNode {
        node_id: node_id("ghost"),
        new_label: "X".to_owned(),
        old_label: "Y".to_owned(),
    };

    command.apply(&mut graph);
    command.revert(&mut graph);
    assert_eq!(graph, sample_graph());
}

#[test]
fn every_variant_revert_then_apply_reproduces_applied_state() {
    for command in sample_commands() {
        let mut graph = sample_graph();
        command.apply(&mut graph);
        let applied = graph.clone();

        command.revert(&mut graph);
        command.apply(&mut graph);
        assert_eq!(graph, applied, "{} replay mismatch", command.command_type());
    }
}

#[test]
fn every_variant_round_trips_through_its_record() {
    for command in sample_commands() {
        let record = command.to_record();
        let value = record.to_value();
        assert_eq!(
            value.get("type").and_then(serde_json::Value::as_str),
            Some(command.command_type())
        );

        let parsed = CommandRecord::from_value(&value).expect("parse record");
        let rebuilt = Command::from_record(&parsed).expect("rebuild command");
        assert_eq!(rebuilt, command);
    }
}

#[test]
fn command_types_match_record_discriminators() {
    let types: Vec<&str> = sample_commands()
        .iter()
        .map(Command::command_type)
        .collect();
    for command_type in types {
        assert!(COMMAND_TYPES.contains(&command_type));
    }
}

#[test]
fn wire_shape_uses_camel_case_fields() {
    let command = Command::ChangeEdgeCost {
        edge_id: edge_id("a-b-1"),
        new_cost: 9.0,
        old_cost: 5.0,
    };

    let value = command.to_record().to_value();
    assert_eq!(
        value,
        json!({
            "type": "ChangeEdgeCost",
            "edgeId": "a-b-1",
            "newCost": 9.0,
            "oldCost": 5.0,
        })
    );
}

#[test]
fn factory_rejects_unknown_command_type() {
    let value = json!({ "type": "TeleportNode", "nodeId": "a" });
    let err = CommandRecord::from_value(&value).expect_err("unknown type");
    match err {
        RecordError::UnknownCommandType { found } => assert_eq!(found, "TeleportNode"),
        other => panic!("expected UnknownCommandType, got {other:?}"),
    }
}

#[test]
fn factory_rejects_missing_type() {
    let value = json!({ "nodeId": "a" });
    let err = CommandRecord::from_value(&value).expect_err("missing type");
    assert!(matches!(err, RecordError::MissingType));
}

#[rstest]
#[case(json!({ "type": "RenameNode", "nodeId": "a" }))]
#[case(json!({ "type": "ChangeEdgeCost", "edgeId": "e", "newCost": "five", "oldCost": 1.0 }))]
#[case(json!({ "type": "AddNode" }))]
fn factory_rejects_malformed_payloads(#[case] value: serde_json::Value) {
    let err = CommandRecord::from_value(&value).expect_err("malformed payload");
    assert!(matches!(err, RecordError::MalformedPayload { .. }));
}

#[test]
fn factory_rejects_empty_ids() {
    let value = json!({
        "type": "RenameNode",
        "nodeId": "",
        "newLabel": "X",
        "oldLabel": "Y",
    });
    let record = CommandRecord::from_value(&value).expect("parse record");
    let err = Command::from_record(&record).expect_err("empty id");
    assert!(matches!(err, RecordError::InvalidId { .. }));
}
