use std::{fs::File, io::BufReader, path::Path};

use crate::{
    foundation::core::{Canvas, InkColor},
    foundation::error::{ChalklineError, ChalklineResult},
    stroke::compiler::WritingSpeed,
    timeline::allocator::TimelineOpts,
};

/// Font size from which text counts as a heading.
pub const HEADING_FONT_SIZE: f64 = 48.0;

/// Font size from which text counts as a subheading.
pub const SUBHEADING_FONT_SIZE: f64 = 36.0;

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Ink colors used by the compiler.
pub struct InkPalette {
    /// Board color.
    pub background: InkColor,
    /// Body text (below [`SUBHEADING_FONT_SIZE`]).
    pub body: InkColor,
    /// Subheading text.
    pub subheading: InkColor,
    /// Heading text (from [`HEADING_FONT_SIZE`]); the accent ink.
    pub heading: InkColor,
    /// Arrows, circles, underlines and boxes.
    pub annotation: InkColor,
    /// Marker fill.
    pub highlight: InkColor,
}

impl Default for InkPalette {
    fn default() -> Self {
        Self {
            background: InkColor::rgb(0xfd, 0xfd, 0xf8),
            body: InkColor::rgb(0x1f, 0x29, 0x37),
            subheading: InkColor::rgb(0x37, 0x41, 0x51),
            heading: InkColor::rgb(0x1d, 0x4e, 0xd8),
            annotation: InkColor::rgb(0xdc, 0x26, 0x26),
            highlight: InkColor::rgba(0xfa, 0xcc, 0x15, 0x66),
        }
    }
}

impl InkPalette {
    /// Ink for text written at `font_size`.
    pub fn text_color(&self, font_size: f64) -> InkColor {
        if font_size >= HEADING_FONT_SIZE {
            self.heading
        } else if font_size >= SUBHEADING_FONT_SIZE {
            self.subheading
        } else {
            self.body
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Scene compilation settings. Every field has a default, so partial JSON files are accepted.
pub struct SceneConfig {
    /// Board size in scene units.
    pub canvas: Canvas,
    /// Handwriting pace.
    pub speed: WritingSpeed,
    /// Caller-supplied nominal scene length; the compiled scene is never shorter.
    pub nominal_duration: f64,
    /// Ink colors.
    pub palette: InkPalette,
    /// Horizontal anchor distance beyond which relating two concepts moves the camera.
    pub camera_move_threshold: f64,
    /// Length of the thinking beat after a newly introduced concept.
    pub thinking_pause: f64,
    /// Length of a camera move.
    pub camera_pause: f64,
    /// Length of an image reveal.
    pub image_reveal: f64,
    /// Default image size when the content does not give one.
    pub image_width: f64,
    /// Default image size when the content does not give one.
    pub image_height: f64,
    /// Length of a highlight sweep.
    pub highlight_duration: f64,
    /// Length of a board wipe.
    pub erase_duration: f64,
    /// Time the arrow head takes to snap in after the shaft.
    pub arrow_head_duration: f64,
    /// Shortest time for a drawn shape.
    pub shape_min_duration: f64,
    /// Longest time for a drawn shape.
    pub shape_max_duration: f64,
    /// Font size used when an intent does not give one.
    pub default_font_size: f64,
    /// Pen width for text and shapes.
    pub stroke_width: f64,
    /// Gap between emphasized content and its annotation.
    pub emphasis_padding: f64,
    /// Timeline spacing.
    pub timeline: TimelineOpts,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            canvas: Canvas::default(),
            speed: WritingSpeed::Medium,
            nominal_duration: 0.0,
            palette: InkPalette::default(),
            camera_move_threshold: 400.0,
            thinking_pause: 0.5,
            camera_pause: 0.8,
            image_reveal: 1.2,
            image_width: 320.0,
            image_height: 240.0,
            highlight_duration: 0.4,
            erase_duration: 0.8,
            arrow_head_duration: 0.15,
            shape_min_duration: 0.3,
            shape_max_duration: 1.5,
            default_font_size: 32.0,
            stroke_width: 3.0,
            emphasis_padding: 12.0,
            timeline: TimelineOpts::default(),
        }
    }
}

impl SceneConfig {
    /// Parse a config from a JSON reader and validate it.
    pub fn from_reader<R: std::io::Read>(r: R) -> ChalklineResult<Self> {
        let cfg: Self = serde_json::from_reader(r)
            .map_err(|e| ChalklineError::serde(format!("parse config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse a config from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> ChalklineResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ChalklineError::validation(format!("open config JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Reject settings that would produce an unusable scene.
    pub fn validate(&self) -> ChalklineResult<()> {
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(ChalklineError::validation("canvas width/height must be > 0"));
        }
        for (name, value) in [
            ("nominal_duration", self.nominal_duration),
            ("camera_move_threshold", self.camera_move_threshold),
            ("emphasis_padding", self.emphasis_padding),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChalklineError::validation(format!(
                    "{name} must be finite and >= 0"
                )));
            }
        }
        for (name, value) in [
            ("thinking_pause", self.thinking_pause),
            ("camera_pause", self.camera_pause),
            ("image_reveal", self.image_reveal),
            ("image_width", self.image_width),
            ("image_height", self.image_height),
            ("highlight_duration", self.highlight_duration),
            ("erase_duration", self.erase_duration),
            ("arrow_head_duration", self.arrow_head_duration),
            ("shape_min_duration", self.shape_min_duration),
            ("shape_max_duration", self.shape_max_duration),
            ("default_font_size", self.default_font_size),
            ("stroke_width", self.stroke_width),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChalklineError::validation(format!(
                    "{name} must be finite and > 0"
                )));
            }
        }
        if self.shape_min_duration > self.shape_max_duration {
            return Err(ChalklineError::validation(
                "shape_min_duration must be <= shape_max_duration",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/config.rs"]
mod tests;
