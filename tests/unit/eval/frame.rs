use super::*;
use crate::{
    foundation::core::InkColor,
    scene::model::{ActionKind, DrawingAction},
};

fn draw(id: &str, start: f64, path: &str) -> DrawingAction {
    DrawingAction {
        id: id.to_owned(),
        start_time: start,
        duration: 1.0,
        color: InkColor::rgb(0, 0, 0),
        hand_visible: true,
        kind: ActionKind::Draw {
            path: path.to_owned(),
            stroke_width: 2.0,
        },
    }
}

fn scene() -> WhiteboardScene {
    WhiteboardScene {
        id: "scene-test".to_owned(),
        background: InkColor::rgb(255, 255, 255),
        actions: vec![
            draw("draw-000", 0.0, "M0 0 L100 0"),
            draw("draw-001", 1.1, "M0 200 L100 200"),
        ],
        narration: None,
        total_duration: 2.1,
    }
}

#[test]
fn frame_lists_every_action_in_order() {
    let ev = ActionEvaluator::default();
    let frame = evaluate_scene(&ev, &scene(), 0.5);
    let ids: Vec<_> = frame.actions.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, ["draw-000", "draw-001"]);
    assert_eq!(frame.actions[1].state.current_progress, 0.0);
    assert_eq!(frame.hand.as_ref().unwrap().action_id, "draw-000");
}

#[test]
fn newest_action_takes_the_hand_over_a_holding_one() {
    let ev = ActionEvaluator::default();
    let frame = evaluate_scene(&ev, &scene(), 1.2);
    assert!(frame.actions[0].state.hand_position.is_some());
    let hand = frame.hand.unwrap();
    assert_eq!(hand.action_id, "draw-001");
    assert!((hand.position.y - 200.0).abs() < 1e-9);
}

#[test]
fn no_hand_after_the_last_hold() {
    let ev = ActionEvaluator::default();
    let frame = evaluate_scene(&ev, &scene(), 5.0);
    assert!(frame.hand.is_none());
    assert!(frame.actions.iter().all(|a| a.state.is_complete));
}

#[test]
fn frame_serializes_flat_action_states() {
    let ev = ActionEvaluator::default();
    let v = serde_json::to_value(evaluate_scene(&ev, &scene(), 0.5)).unwrap();
    assert_eq!(v["actions"][0]["id"], "draw-000");
    assert_eq!(v["actions"][0]["phase"], "active");
    assert_eq!(v["actions"][1]["phase"], "pending");
    assert!(v["actions"][1].get("hand_position").is_none());
}
