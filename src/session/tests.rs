// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Viae-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Viae and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rstest::rstest;

use crate::model::{EdgeId, NodeId, Position};

use super::{EditorSession, ValidationError};

fn two_cities() -> (EditorSession, NodeId, NodeId) {
    let mut session = EditorSession::new();
    let a = session.add_city_at("Springfield", Position::new(0.0, 0.0));
    let b = session.add_city_at("Shelbyville", Position::new(100.0, 0.0));
    (session, a, b)
}

fn connected() -> (EditorSession, NodeId, NodeId, EdgeId) {
    let (mut session, a, b) = two_cities();
    let road = session.connect(&a, &b, None, None, "5").expect("connect");
    (session, a, b, road)
}

#[test]
fn add_city_generates_a_unique_name_and_in_bounds_position() {
    let mut session = EditorSession::new();
    let mut rng = StdRng::seed_from_u64(42);

    let first = session.add_city(&mut rng);
    let second = session.add_city(&mut rng);
    assert_ne!(first, second);

    let graph = session.graph();
    let first_node = graph.node(&first).expect("first city");
    let second_node = graph.node(&second).expect("second city");
    assert_ne!(first_node.label(), second_node.label());
    assert!(first_node.label().starts_with("city-"));

    let position = first_node.position();
    assert!((50.0..450.0).contains(&position.x));
    assert!((50.0..450.0).contains(&position.y));
}

#[test]
fn serial_ids_never_collide() {
    let mut session = EditorSession::new();
    let a = session.add_city_at("A", Position::default());
    let b = session.add_city_at("B", Position::default());

    // Two parallel roads between the same pair still get distinct ids.
    let first = session.connect(&a, &b, None, None, "1").expect("road 1");
    let second = session.connect(&a, &b, None, None, "2").expect("road 2");
    assert_ne!(first, second);
    assert_eq!(session.graph().edges().len(), 2);
}

#[test]
fn connect_keeps_handles_and_cost() {
    let (mut session, a, b) = two_cities();
    let road = session
        .connect(
            &a,
            &b,
            Some(format!("right-{a}")),
            Some(format!("left-{b}")),
            " 7.5 ",
        )
        .expect("connect");

    let edge = session.graph().edge(&road).expect("road");
    assert_eq!(edge.cost(), 7.5);
    assert_eq!(edge.source_handle(), Some(format!("right-{a}").as_str()));
    assert_eq!(edge.target_handle(), Some(format!("left-{b}").as_str()));
}

#[rstest]
#[case("abc")]
#[case("")]
#[case("-1")]
#[case("NaN")]
#[case("inf")]
fn connect_rejects_bad_cost_without_touching_state(#[case] input: &str) {
    let (mut session, a, b) = two_cities();
    let before = session.clone();

    let err = session.connect(&a, &b, None, None, input).expect_err("bad cost");
    assert!(matches!(err, ValidationError::InvalidCost { .. }));
    assert_eq!(session, before);
    assert!(session.graph().edges().is_empty());
}

#[test]
fn rename_rejects_duplicates_and_skips_no_ops() {
    let (mut session, a, _) = two_cities();

    let err = session.rename_city(&a, "Shelbyville").expect_err("duplicate");
    assert!(matches!(err, ValidationError::DuplicateLabel { .. }));

    // Blank and unchanged input: no command, history length stays put.
    assert!(!session.rename_city(&a, "  ").expect("blank"));
    assert!(!session.rename_city(&a, "Springfield").expect("unchanged"));
    assert_eq!(session.history().len(), 2);

    assert!(session.rename_city(&a, "Ogdenville").expect("rename"));
    assert_eq!(session.graph().node(&a).expect("a").label(), "Ogdenville");
    assert_eq!(session.history().len(), 3);
}

#[test]
fn change_road_cost_validates_and_skips_unchanged() {
    let (mut session, _, _, road) = connected();

    let err = session.change_road_cost(&road, "many").expect_err("bad cost");
    assert!(matches!(err, ValidationError::InvalidCost { .. }));

    assert!(!session.change_road_cost(&road, "5").expect("unchanged"));
    assert_eq!(session.history().len(), 3);

    assert!(session.change_road_cost(&road, "12").expect("change"));
    assert_eq!(session.graph().edge(&road).expect("road").cost(), 12.0);

    session.undo();
    assert_eq!(session.graph().edge(&road).expect("road").cost(), 5.0);
}

#[test]
fn delete_selection_folds_in_incident_roads() {
    let (mut session, a, _, road) = connected();

    // Only the city is selected; the road must go with it.
    assert!(session.delete_selection(&[a.clone()], &[]));
    assert!(session.graph().node(&a).is_none());
    assert!(session.graph().edge(&road).is_none());

    // One undo restores both.
    assert!(session.undo());
    assert!(session.graph().node(&a).is_some());
    assert!(session.graph().edge(&road).is_some());
}

#[test]
fn empty_delete_selection_creates_no_command() {
    let (mut session, _, _) = two_cities();
    let history_len = session.history().len();

    assert!(!session.delete_selection(&[], &[]));
    let ghost = NodeId::new("ghost").expect("id");
    assert!(!session.delete_selection(&[ghost], &[]));
    assert_eq!(session.history().len(), history_len);
}

#[test]
fn node_drag_coalesces_into_one_command() {
    let (mut session, a, _) = two_cities();
    let history_len = session.history().len();

    let drag = session.begin_node_drag(&a).expect("drag");
    session.drag_node_to(&drag, Position::new(10.0, 0.0));
    session.drag_node_to(&drag, Position::new(20.0, 5.0));
    session.drag_node_to(&drag, Position::new(30.0, 30.0));
    assert!(session.end_node_drag(drag));

    assert_eq!(session.history().len(), history_len + 1);
    assert_eq!(
        session.graph().node(&a).expect("a").position(),
        Position::new(30.0, 30.0)
    );

    // Undo jumps straight back to the gesture-start position.
    session.undo();
    assert_eq!(
        session.graph().node(&a).expect("a").position(),
        Position::new(0.0, 0.0)
    );
}

#[test]
fn drag_without_net_displacement_creates_no_command() {
    let (mut session, a, _) = two_cities();
    let history_len = session.history().len();

    let drag = session.begin_node_drag(&a).expect("drag");
    session.drag_node_to(&drag, Position::new(10.0, 10.0));
    session.drag_node_to(&drag, Position::new(0.0, 0.0));
    assert!(!session.end_node_drag(drag));

    assert_eq!(session.history().len(), history_len);
    assert!(!session.can_redo());
}

#[test]
fn waypoint_insert_remove_and_drag_are_reversible() {
    let (mut session, _, _, road) = connected();

    session
        .insert_waypoint(&road, 0, Position::new(50.0, 40.0))
        .expect("insert");
    assert_eq!(
        session.graph().edge(&road).expect("road").waypoints(),
        &[Position::new(50.0, 40.0)]
    );

    let drag = session.begin_waypoint_drag(&road).expect("drag");
    session.drag_waypoint_to(&drag, 0, Position::new(60.0, 10.0));
    assert!(session.end_waypoint_drag(drag));
    assert_eq!(
        session.graph().edge(&road).expect("road").waypoints(),
        &[Position::new(60.0, 10.0)]
    );

    session.undo();
    assert_eq!(
        session.graph().edge(&road).expect("road").waypoints(),
        &[Position::new(50.0, 40.0)]
    );
    session.redo();

    assert!(session.remove_waypoint(&road, 0).expect("remove"));
    assert!(session.graph().edge(&road).expect("road").waypoints().is_empty());
    assert!(!session.remove_waypoint(&road, 5).expect("out of range"));
}

#[test]
fn stationary_waypoint_drag_creates_no_command() {
    let (mut session, _, _, road) = connected();
    session
        .insert_waypoint(&road, 0, Position::new(50.0, 40.0))
        .expect("insert");
    let history_len = session.history().len();

    let drag = session.begin_waypoint_drag(&road).expect("drag");
    session.drag_waypoint_to(&drag, 0, Position::new(55.0, 40.0));
    session.drag_waypoint_to(&drag, 0, Position::new(50.0, 40.0));
    assert!(!session.end_waypoint_drag(drag));
    assert_eq!(session.history().len(), history_len);
}

#[test]
fn session_import_is_atomic() {
    let (mut session, _, _, _) = connected();
    let before = session.clone();

    let mut record = session.export();
    record.index = record.commands.len() as i64; // one past the end
    session.import(&record).expect_err("out of range");
    assert_eq!(session, before);

    record.index = record.commands.len() as i64 - 1;
    session.import(&record).expect("import");
    assert_eq!(session.graph(), before.graph());
    assert_eq!(session.history(), before.history());
}

#[test]
fn export_import_round_trip_preserves_mid_history_cursor() {
    let (mut session, a, _, _) = connected();
    session.rename_city(&a, "Ogdenville").expect("rename");
    session.undo();

    let record = session.export();
    let mut restored = EditorSession::new();
    restored.import(&record).expect("import");

    assert_eq!(restored.graph(), session.graph());
    assert_eq!(restored.history().cursor_index(), 2);
    assert!(restored.can_redo());

    assert!(restored.redo());
    assert_eq!(restored.graph().node(&a).expect("a").label(), "Ogdenville");
}
