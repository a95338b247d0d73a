use super::*;
use crate::scene::content::{ContentItem, ContentKind};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn compiler() -> SceneCompiler {
    SceneCompiler::new(SceneConfig::default()).unwrap()
}

fn kinds(scene: &WhiteboardScene) -> Vec<&'static str> {
    scene.actions.iter().map(|a| a.kind.name()).collect()
}

#[test]
fn introduced_text_is_written_then_pondered() {
    let scene = compiler().compile(&[SemanticIntent::introduce_text("Hi", Point::new(100.0, 100.0))]);
    assert_eq!(kinds(&scene), ["write", "pause"]);

    let write = &scene.actions[0];
    assert_eq!(write.id, "write-000");
    assert!(approx(write.start_time, 0.0));
    assert!((write.duration - 0.29).abs() < 1e-6);
    assert!(write.hand_visible);

    let pause = &scene.actions[1];
    assert!(approx(pause.duration, 0.5));
    assert!(approx(pause.start_time, write.end_time() + 0.1));
    assert!(!pause.hand_visible);
    assert!(scene.total_duration >= pause.end_time());
}

#[test]
fn invalid_config_is_rejected() {
    let cfg = SceneConfig {
        thinking_pause: -1.0,
        ..SceneConfig::default()
    };
    assert!(SceneCompiler::new(cfg).is_err());
}

#[test]
fn empty_intents_produce_a_single_placeholder_write() {
    let scene = compiler().compile(&[]);
    assert_eq!(scene.actions.len(), 1);
    let ActionKind::Write { text, .. } = &scene.actions[0].kind else {
        panic!("expected write");
    };
    assert_eq!(text, PLACEHOLDER_TEXT);
    assert!(approx(scene.total_duration, MIN_SCENE_DURATION));
}

#[test]
fn nominal_duration_floors_total_duration() {
    let cfg = SceneConfig {
        nominal_duration: 12.0,
        ..SceneConfig::default()
    };
    let scene = SceneCompiler::new(cfg)
        .unwrap()
        .compile(&[SemanticIntent::introduce_text("a", Point::ZERO)]);
    assert!(approx(scene.total_duration, 12.0));
}

#[test]
fn later_intents_get_breathing_room() {
    let scene = compiler().compile(&[
        SemanticIntent::introduce_text("a", Point::new(10.0, 10.0)),
        SemanticIntent::introduce_text("b", Point::new(10.0, 200.0)),
    ]);
    assert_eq!(kinds(&scene), ["write", "pause", "write", "pause"]);
    let first_pause = &scene.actions[1];
    let second = &scene.actions[2];
    assert!(approx(second.start_time, first_pause.end_time() + 0.1 + 0.3));
}

#[test]
fn distant_relation_moves_the_camera_between_concepts() {
    let scene = compiler().compile(&[SemanticIntent::relate(
        "A",
        "B",
        Point::new(100.0, 300.0),
        Point::new(1200.0, 300.0),
    )]);
    assert_eq!(kinds(&scene), ["write", "pause", "write", "arrow"]);
    assert!(scene.actions[1].kind.is_camera_move());
    assert!(!scene.actions[1].hand_visible);

    let arrow = &scene.actions[3];
    let ActionKind::Arrow { from, to, strokes, .. } = &arrow.kind else {
        panic!("expected arrow");
    };
    assert!(from.x > 100.0 && to.x < 1200.0);
    assert_eq!(strokes.len(), 2);
    let sum: f64 = strokes.iter().map(|s| s.duration).sum();
    assert!((sum - arrow.duration).abs() < 1e-9);
}

#[test]
fn nearby_relation_skips_the_camera() {
    let scene = compiler().compile(&[SemanticIntent::relate(
        "A",
        "B",
        Point::new(100.0, 300.0),
        Point::new(300.0, 300.0),
    )]);
    assert_eq!(kinds(&scene), ["write", "write", "arrow"]);
}

#[test]
fn blank_text_emits_no_write() {
    let scene = compiler().compile(&[
        SemanticIntent::introduce_text("   ", Point::new(100.0, 100.0)).with_label("blank"),
        SemanticIntent::emphasize("blank", EmphasisMethod::Circle),
    ]);
    // Nothing was written, so the emphasis falls back to the canvas and no write carries zero strokes.
    for a in &scene.actions {
        if let Some(strokes) = a.kind.strokes() {
            assert!(!strokes.is_empty(), "{}", a.id);
        }
    }
    assert_eq!(kinds(&scene), ["circle"]);
}

#[test]
fn all_blank_intents_fall_back_to_the_placeholder() {
    let scene = compiler().compile(&[SemanticIntent::introduce_text("", Point::new(100.0, 100.0))]);
    assert_eq!(scene.actions.len(), 1);
    let ActionKind::Write { text, strokes, .. } = &scene.actions[0].kind else {
        panic!("expected write");
    };
    assert_eq!(text, PLACEHOLDER_TEXT);
    assert!(!strokes.is_empty());
}

#[test]
fn relation_with_blank_side_still_draws_the_arrow() {
    let scene = compiler().compile(&[
        SemanticIntent::introduce_text("a", Point::new(10.0, 10.0)),
        SemanticIntent::relate("", "B", Point::new(100.0, 300.0), Point::new(300.0, 300.0)),
    ]);
    assert_eq!(kinds(&scene), ["write", "pause", "write", "arrow"]);
    let ActionKind::Write { text, .. } = &scene.actions[2].kind else {
        panic!("expected write");
    };
    assert_eq!(text, "B");
    // The narration gap moves onto the first action actually drawn.
    assert!(approx(
        scene.actions[2].start_time,
        scene.actions[1].end_time() + 0.1 + 0.3
    ));
    assert!(approx(
        scene.actions[3].start_time,
        scene.actions[2].end_time() + 0.1
    ));
}

#[test]
fn emphasis_targets_the_labelled_text_bounds() {
    let c = compiler();
    let bounds = StrokeCompiler::new(c.glyphs())
        .compile_text("Hi", Point::new(100.0, 100.0), 32.0, c.config().speed)
        .bounds;
    let scene = c.compile(&[
        SemanticIntent::introduce_text("Hi", Point::new(100.0, 100.0)),
        SemanticIntent::emphasize("Hi", EmphasisMethod::Circle),
    ]);
    let circle = scene.actions.last().unwrap();
    let ActionKind::Circle { center, radius, .. } = &circle.kind else {
        panic!("expected circle");
    };
    assert!(center.distance(bounds.center()) < 1e-9);
    assert!(approx(*radius, bounds.width().max(bounds.height()) / 2.0 + 12.0));
    assert_eq!(circle.color, c.config().palette.annotation);
}

#[test]
fn unknown_label_falls_back_to_latest_text() {
    let scene = compiler().compile(&[
        SemanticIntent::introduce_text("Hi", Point::new(100.0, 100.0)),
        SemanticIntent::emphasize("missing", EmphasisMethod::Underline),
    ]);
    let ActionKind::Underline { from, to, .. } = &scene.actions.last().unwrap().kind else {
        panic!("expected underline");
    };
    assert!(from.x >= 100.0 && to.x > from.x);
}

#[test]
fn cleared_text_is_no_longer_a_target() {
    let scene = compiler().compile(&[
        SemanticIntent::introduce_text("Hi", Point::new(100.0, 100.0)),
        SemanticIntent::ClearBoard { region: None },
        SemanticIntent::emphasize("Hi", EmphasisMethod::Circle),
    ]);
    assert_eq!(kinds(&scene), ["write", "pause", "erase", "circle"]);
    let ActionKind::Circle { center, .. } = &scene.actions[3].kind else {
        panic!("expected circle");
    };
    assert_eq!(*center, Point::new(960.0, 540.0));
    assert_eq!(scene.actions[2].color, scene.background);
}

#[test]
fn highlight_hides_the_hand() {
    let scene = compiler().compile(&[SemanticIntent::Emphasize {
        target: EmphasisTarget::Region(Rect::new(10.0, 10.0, 110.0, 50.0)),
        method: EmphasisMethod::Highlight,
    }]);
    let h = &scene.actions[0];
    assert!(!h.hand_visible);
    assert!(approx(h.duration, 0.4));
    let ActionKind::Highlight { rect } = h.kind else {
        panic!("expected highlight");
    };
    assert_eq!(rect, Rect::new(4.0, 4.0, 116.0, 56.0));
}

#[test]
fn each_emphasis_is_exactly_one_action() {
    for method in [
        EmphasisMethod::Circle,
        EmphasisMethod::Underline,
        EmphasisMethod::Highlight,
        EmphasisMethod::Box,
    ] {
        let scene = compiler().compile(&[SemanticIntent::Emphasize {
            target: EmphasisTarget::Region(Rect::new(0.0, 0.0, 50.0, 20.0)),
            method,
        }]);
        assert_eq!(scene.actions.len(), 1, "{method:?}");
    }
}

#[test]
fn images_reveal_without_thinking_beat() {
    let scene = compiler().compile(&[SemanticIntent::introduce_image(
        "cell.png",
        Point::new(40.0, 40.0),
    )]);
    assert_eq!(kinds(&scene), ["image"]);
    let ActionKind::Image { rect, .. } = scene.actions[0].kind else {
        panic!("expected image");
    };
    assert_eq!(rect, Rect::new(40.0, 40.0, 360.0, 280.0));
    assert!(approx(scene.actions[0].duration, 1.2));
}

#[test]
fn unparseable_sketch_still_gets_a_slot() {
    let scene = compiler().compile(&[SemanticIntent::Sketch {
        path: "not a path".to_owned(),
    }]);
    assert_eq!(kinds(&scene), ["draw"]);
    assert!(approx(scene.actions[0].duration, 0.3));
}

#[test]
fn compilation_is_deterministic() {
    let intents = [
        SemanticIntent::introduce_text("Energy", Point::new(100.0, 100.0)),
        SemanticIntent::relate("Sun", "Plant", Point::new(100.0, 400.0), Point::new(900.0, 400.0)),
        SemanticIntent::emphasize("Energy", EmphasisMethod::Box),
    ];
    let a = compiler().compile(&intents);
    let b = compiler().compile(&intents);
    assert_eq!(a, b);
    assert!(a.id.starts_with("scene-"));
    assert_ne!(a.id, compiler().compile(&intents[..1]).id);
}

#[test]
fn fit_strokes_rescales_to_total() {
    let strokes = vec![
        TimedStroke {
            path: "M0 0 L1 0".to_owned(),
            duration: 0.02,
        },
        TimedStroke {
            path: "M0 0 L1 0".to_owned(),
            duration: 0.02,
        },
    ];
    let fitted = fit_strokes(strokes, 0.05);
    assert!(approx(fitted[0].duration, 0.025));
    assert!(approx(fitted[1].duration, 0.025));
}

#[test]
fn vertical_relations_connect_top_and_bottom_edges() {
    let from = Rect::new(100.0, 100.0, 200.0, 140.0);
    let to = Rect::new(100.0, 400.0, 200.0, 440.0);
    let (tail, tip) = arrow_endpoints(from, to);
    assert_eq!(tail, Point::new(150.0, 148.0));
    assert_eq!(tip, Point::new(150.0, 392.0));
}

#[test]
fn content_narration_is_carried_onto_the_scene() {
    let content = SlideContent {
        items: vec![ContentItem::text(ContentKind::Heading, "Cells")],
        narration: Some("Cells are small.".to_owned()),
    };
    let scene = compiler().compile_content(&content);
    assert_eq!(scene.narration.as_deref(), Some("Cells are small."));
    assert_eq!(kinds(&scene), ["write", "pause"]);
    assert_eq!(scene.actions[0].color, compiler().config().palette.heading);
}
