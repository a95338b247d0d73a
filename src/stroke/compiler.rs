use kurbo::Shape as _;

use crate::{
    foundation::core::{Affine, Point, Rect, Size, Vec2},
    glyph::library::{BASE_FONT_SIZE, CELL_HEIGHT, GlyphLibrary},
};

/// Shortest time a single pen stroke may take, in seconds.
pub const MIN_STROKE_DURATION: f64 = 0.05;

/// Longest time a single pen stroke may take, in seconds.
pub const MAX_STROKE_DURATION: f64 = 0.8;

/// Font size used when the requested one is unusable.
pub const DEFAULT_FONT_SIZE: f64 = 32.0;

/// Line advance as a multiple of the scaled cell height.
const LINE_SPACING: f64 = 1.1;

/// Top and bottom of capital letters inside the glyph cell.
const CAP_TOP: f64 = 10.0;
const BASELINE: f64 = 80.0;

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
/// Handwriting pace.
pub enum WritingSpeed {
    /// Deliberate pace.
    Slow,
    /// Default pace.
    #[default]
    Medium,
    /// Brisk pace.
    Fast,
}

impl WritingSpeed {
    /// Seconds spent per 100 cell units of stroke length.
    pub fn duration_per_character(self) -> f64 {
        match self {
            Self::Slow => 0.15,
            Self::Medium => 0.10,
            Self::Fast => 0.06,
        }
    }

    /// Drawing time for a stroke of `estimated_length` cell units, clamped to the stroke bounds.
    pub fn stroke_duration(self, estimated_length: f64) -> f64 {
        let raw = estimated_length * self.duration_per_character() / 100.0;
        if raw.is_finite() {
            raw.clamp(MIN_STROKE_DURATION, MAX_STROKE_DURATION)
        } else {
            MIN_STROKE_DURATION
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One glyph stroke placed in scene space with its drawing time.
pub struct TimedStroke {
    /// SVG path data in scene units.
    pub path: String,
    /// Drawing time in seconds.
    pub duration: f64,
}

#[derive(Clone, Debug, PartialEq)]
/// Result of laying out and timing a string.
pub struct CompiledText {
    /// Strokes in drawing order.
    pub strokes: Vec<TimedStroke>,
    /// Bounds of the compiled stroke geometry (or of the text cell when nothing is drawn).
    pub bounds: Rect,
    /// Sum of all stroke durations.
    pub duration: f64,
}

/// Turns text into timed, positioned handwriting strokes.
#[derive(Clone, Copy, Debug)]
pub struct StrokeCompiler<'a> {
    glyphs: &'a GlyphLibrary,
}

impl<'a> StrokeCompiler<'a> {
    /// Create a compiler backed by `glyphs`.
    pub fn new(glyphs: &'a GlyphLibrary) -> Self {
        Self { glyphs }
    }

    /// Strokes for `text` with its first glyph cell's top-left corner at `anchor`.
    pub fn compile(
        &self,
        text: &str,
        anchor: Point,
        font_size: f64,
        speed: WritingSpeed,
    ) -> Vec<TimedStroke> {
        self.compile_text(text, anchor, font_size, speed).strokes
    }

    /// Like [`StrokeCompiler::compile`], also reporting bounds and total duration.
    ///
    /// Spaces advance the pen without drawing; `\n` starts a new line below `anchor`.
    pub fn compile_text(
        &self,
        text: &str,
        anchor: Point,
        font_size: f64,
        speed: WritingSpeed,
    ) -> CompiledText {
        let scale = font_scale(font_size);
        let line_height = CELL_HEIGHT * LINE_SPACING * scale;

        let mut strokes = Vec::new();
        let mut bounds: Option<Rect> = None;
        let mut pen = Vec2::ZERO;
        let mut widest = 0.0f64;

        for ch in text.chars() {
            if ch == '\n' {
                widest = widest.max(pen.x);
                pen = Vec2::new(0.0, pen.y + line_height);
                continue;
            }
            let glyph = self.glyphs.glyph(ch);
            let placement = Affine::translate(anchor.to_vec2() + pen) * Affine::scale(scale);
            for stroke in &glyph.strokes {
                let placed = placement * stroke.path.clone();
                let b = placed.bounding_box();
                bounds = Some(bounds.map_or(b, |acc| acc.union(b)));
                strokes.push(TimedStroke {
                    path: placed.to_svg(),
                    duration: speed.stroke_duration(stroke.estimated_length),
                });
            }
            pen.x += glyph.advance * scale;
        }
        widest = widest.max(pen.x);

        let bounds = bounds.unwrap_or_else(|| {
            Rect::from_origin_size(
                anchor + Vec2::new(0.0, CAP_TOP * scale),
                Size::new(widest, pen.y + (BASELINE - CAP_TOP) * scale),
            )
        });
        let duration = strokes.iter().map(|s| s.duration).sum();
        CompiledText {
            strokes,
            bounds,
            duration,
        }
    }

    /// Width of the longest line of `text` at `font_size`, from glyph advances.
    pub fn measure(&self, text: &str, font_size: f64) -> f64 {
        let scale = font_scale(font_size);
        text.split('\n')
            .map(|line| {
                line.chars()
                    .map(|ch| self.glyphs.advance(ch) * scale)
                    .sum::<f64>()
            })
            .fold(0.0, f64::max)
    }
}

/// Glyph scale factor for `font_size`, falling back to [`DEFAULT_FONT_SIZE`] when unusable.
pub fn font_scale(font_size: f64) -> f64 {
    let size = if font_size.is_finite() && font_size > 0.0 {
        font_size
    } else {
        DEFAULT_FONT_SIZE
    };
    size / BASE_FONT_SIZE
}

#[cfg(test)]
#[path = "../../tests/unit/stroke/compiler.rs"]
mod tests;
