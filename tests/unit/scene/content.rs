use super::*;
use serde_json::json;

fn positions(intents: &[SemanticIntent]) -> Vec<Point> {
    intents
        .iter()
        .filter_map(|i| match i {
            SemanticIntent::IntroduceConcept { position, .. } => Some(*position),
            _ => None,
        })
        .collect()
}

#[test]
fn coords_accept_pixels_and_percentages() {
    assert_eq!(Coord::Px(12.5).resolve(1000.0), Some(12.5));
    assert_eq!(Coord::Text("25%".to_owned()).resolve(1920.0), Some(480.0));
    assert_eq!(Coord::Text(" 40px".to_owned()).resolve(1920.0), Some(40.0));
    assert_eq!(Coord::Text("left".to_owned()).resolve(1920.0), None);
    assert_eq!(Coord::Px(f64::NAN).resolve(1920.0), None);
}

#[test]
fn content_json_parses_mixed_coordinates() {
    let v = json!({
        "items": [
            { "type": "heading", "text": "Photosynthesis", "x": "50%", "y": 40 },
            { "kind": "bullet", "text": "Light", "emphasis": "underline", "pause_after": 1.0 },
            { "kind": "icon", "source": "sun.svg" }
        ],
        "narration": "Plants make food."
    });
    let content: SlideContent = serde_json::from_value(v).unwrap();
    assert_eq!(content.items.len(), 3);
    assert_eq!(content.items[0].kind, ContentKind::Heading);
    assert_eq!(content.items[0].x, Some(Coord::Text("50%".to_owned())));
    assert_eq!(content.items[0].y, Some(Coord::Px(40.0)));
    assert_eq!(content.items[1].emphasis, Some(EmphasisMethod::Underline));
}

#[test]
fn items_flow_downwards_from_the_margin() {
    let content = SlideContent {
        items: vec![
            ContentItem::text(ContentKind::Heading, "Cells"),
            ContentItem::text(ContentKind::Text, "Basic unit of life"),
            ContentItem::text(ContentKind::Bullet, "Nucleus"),
        ],
        narration: None,
    };
    let intents = normalize_content(&content, &SceneConfig::default());
    let pos = positions(&intents);
    assert_eq!(pos.len(), 3);
    assert_eq!(pos[0], Point::new(MARGIN_LEFT, MARGIN_TOP));
    assert!(pos[1].y > pos[0].y && pos[2].y > pos[1].y);
    assert_eq!(pos[2].x, MARGIN_LEFT + BULLET_INDENT);
}

#[test]
fn bullets_are_prefixed_but_labelled_by_their_text() {
    let content = SlideContent {
        items: vec![ContentItem::text(ContentKind::Bullet, "Nucleus").emphasized(EmphasisMethod::Circle)],
        narration: None,
    };
    let intents = normalize_content(&content, &SceneConfig::default());
    assert_eq!(intents.len(), 2);
    let SemanticIntent::IntroduceConcept {
        payload: ConceptPayload::Text(text),
        label,
        ..
    } = &intents[0]
    else {
        panic!("expected text concept");
    };
    assert_eq!(text, "- Nucleus");
    assert_eq!(label.as_deref(), Some("Nucleus"));
    assert_eq!(
        intents[1],
        SemanticIntent::emphasize("Nucleus", EmphasisMethod::Circle)
    );
}

#[test]
fn explicit_positions_use_the_canvas_extent() {
    let content = SlideContent {
        items: vec![ContentItem::text(ContentKind::Text, "Mid").at(
            Coord::Text("50%".to_owned()),
            Coord::Text("50%".to_owned()),
        )],
        narration: None,
    };
    let intents = normalize_content(&content, &SceneConfig::default());
    assert_eq!(positions(&intents), [Point::new(960.0, 540.0)]);
}

#[test]
fn icons_are_square_and_pauses_follow_items() {
    let mut icon = ContentItem::image(ContentKind::Icon, "sun.svg");
    icon.pause_after = Some(0.75);
    let content = SlideContent {
        items: vec![icon],
        narration: None,
    };
    let intents = normalize_content(&content, &SceneConfig::default());
    assert_eq!(intents.len(), 2);
    let SemanticIntent::IntroduceConcept {
        payload: ConceptPayload::Image(image),
        ..
    } = &intents[0]
    else {
        panic!("expected image concept");
    };
    assert_eq!(image.size, Some(Size::new(ICON_SIZE, ICON_SIZE)));
    assert_eq!(intents[1], SemanticIntent::pause(0.75));
}

#[test]
fn incomplete_items_are_skipped() {
    let content = SlideContent {
        items: vec![
            ContentItem::image(ContentKind::Text, "oops.png"),
            ContentItem::text(ContentKind::Image, "no source"),
            ContentItem::text(ContentKind::Text, "kept"),
        ],
        narration: None,
    };
    let intents = normalize_content(&content, &SceneConfig::default());
    assert_eq!(intents.len(), 1);
    assert_eq!(positions(&intents), [Point::new(MARGIN_LEFT, MARGIN_TOP)]);
}
