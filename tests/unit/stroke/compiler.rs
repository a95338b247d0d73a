use super::*;
use crate::foundation::core::BezPath;

fn first_point(stroke: &TimedStroke) -> Point {
    let path = BezPath::from_svg(&stroke.path).unwrap();
    path.elements()[0].end_point().unwrap()
}

#[test]
fn hi_at_medium_speed_uses_per_stroke_lengths() {
    let lib = GlyphLibrary::new();
    let c = StrokeCompiler::new(&lib);
    let out = c.compile_text("Hi", Point::new(0.0, 0.0), 48.0, WritingSpeed::Medium);
    let durations = out.strokes.iter().map(|s| s.duration).collect::<Vec<_>>();
    assert_eq!(durations.len(), 5);
    // H: two 70-unit stems and a 36-unit bar; i: a 40-unit stem and its dot, both clamped.
    let expected = [0.07, 0.07, 0.05, 0.05, 0.05];
    for (got, want) in durations.iter().zip(expected) {
        assert!((got - want).abs() < 1e-9, "{durations:?}");
    }
    assert!((out.duration - 0.29).abs() < 1e-9);
}

#[test]
fn duration_is_independent_of_font_size() {
    let lib = GlyphLibrary::new();
    let c = StrokeCompiler::new(&lib);
    let small = c.compile_text("Rust", Point::ORIGIN, 16.0, WritingSpeed::Slow);
    let large = c.compile_text("Rust", Point::ORIGIN, 96.0, WritingSpeed::Slow);
    assert!((small.duration - large.duration).abs() < 1e-12);
    assert!(large.bounds.width() > small.bounds.width() * 5.0);
}

#[test]
fn faster_speeds_never_take_longer() {
    let lib = GlyphLibrary::new();
    let c = StrokeCompiler::new(&lib);
    let t = |s| c.compile_text("Whiteboard", Point::ORIGIN, 40.0, s).duration;
    assert!(t(WritingSpeed::Fast) <= t(WritingSpeed::Medium));
    assert!(t(WritingSpeed::Medium) <= t(WritingSpeed::Slow));
}

#[test]
fn stroke_duration_is_clamped() {
    assert_eq!(WritingSpeed::Fast.stroke_duration(0.0), MIN_STROKE_DURATION);
    assert_eq!(WritingSpeed::Slow.stroke_duration(1e9), MAX_STROKE_DURATION);
    assert_eq!(WritingSpeed::Slow.stroke_duration(f64::NAN), MIN_STROKE_DURATION);
}

#[test]
fn spaces_advance_without_drawing() {
    let lib = GlyphLibrary::new();
    let c = StrokeCompiler::new(&lib);
    let out = c.compile("I I", Point::new(100.0, 50.0), 100.0, WritingSpeed::Medium);
    assert_eq!(out.len(), 2);
    assert_eq!(first_point(&out[0]), Point::new(115.0, 60.0));
    // 'I' advance 30 plus space 35.
    assert_eq!(first_point(&out[1]), Point::new(180.0, 60.0));
}

#[test]
fn strokes_scale_with_font_size() {
    let lib = GlyphLibrary::new();
    let c = StrokeCompiler::new(&lib);
    let out = c.compile_text("I", Point::ORIGIN, 50.0, WritingSpeed::Medium);
    assert!((out.bounds.height() - 35.0).abs() < 1e-9);
    assert!((out.bounds.x0 - 7.5).abs() < 1e-9);
}

#[test]
fn unsupported_characters_still_draw() {
    let lib = GlyphLibrary::new();
    let c = StrokeCompiler::new(&lib);
    let out = c.compile("\u{3b1}", Point::ORIGIN, 40.0, WritingSpeed::Medium);
    assert_eq!(out.len(), 1);
    assert!(out[0].duration >= MIN_STROKE_DURATION);
}

#[test]
fn whitespace_only_text_has_cell_bounds() {
    let lib = GlyphLibrary::new();
    let c = StrokeCompiler::new(&lib);
    let out = c.compile_text("  ", Point::new(10.0, 10.0), 100.0, WritingSpeed::Medium);
    assert!(out.strokes.is_empty());
    assert_eq!(out.duration, 0.0);
    assert!((out.bounds.width() - 70.0).abs() < 1e-9);
    assert!(out.bounds.height() > 0.0);
}

#[test]
fn newline_starts_a_new_line_at_the_anchor() {
    let lib = GlyphLibrary::new();
    let c = StrokeCompiler::new(&lib);
    let out = c.compile("I\nI", Point::ORIGIN, 100.0, WritingSpeed::Medium);
    let a = first_point(&out[0]);
    let b = first_point(&out[1]);
    assert_eq!(a.x, b.x);
    assert!((b.y - a.y - 110.0).abs() < 1e-9);
    assert!((c.measure("II\nI", 100.0) - 60.0).abs() < 1e-9);
}

#[test]
fn bad_font_size_falls_back_to_default() {
    assert_eq!(font_scale(f64::NAN), DEFAULT_FONT_SIZE / BASE_FONT_SIZE);
    assert_eq!(font_scale(-4.0), DEFAULT_FONT_SIZE / BASE_FONT_SIZE);
    assert_eq!(font_scale(200.0), 2.0);
}
