use std::{fs::File, io::BufReader, path::Path};

use crate::{
    foundation::core::{InkColor, Point, Rect},
    foundation::error::{ChalklineError, ChalklineResult},
    stroke::compiler::TimedStroke,
};

/// Shortest total length a scene may have, in seconds.
pub const MIN_SCENE_DURATION: f64 = 1.0;

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A compiled whiteboard scene.
///
/// Scenes are produced by [`crate::SceneCompiler`] and are read-only afterwards. Renderers sample
/// them with [`crate::ActionEvaluator`].
pub struct WhiteboardScene {
    /// Stable scene identifier.
    pub id: String,
    /// Board color.
    pub background: InkColor,
    /// Actions in start-time order.
    pub actions: Vec<DrawingAction>,
    /// Narration script played alongside the scene, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub narration: Option<String>,
    /// Scene length in seconds: the latest action end, floored at the nominal length.
    pub total_duration: f64,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One timed, renderable unit of work.
pub struct DrawingAction {
    /// Identifier, unique within the scene.
    pub id: String,
    /// Scene-relative start time in seconds.
    pub start_time: f64,
    /// Duration in seconds; always finite and positive.
    pub duration: f64,
    /// Ink color.
    pub color: InkColor,
    /// Whether the drawing hand is shown while this action plays.
    pub hand_visible: bool,
    /// Kind-specific payload.
    #[serde(flatten)]
    pub kind: ActionKind,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
/// Kind-specific action payload.
pub enum ActionKind {
    /// Handwritten text.
    Write {
        /// Source text.
        text: String,
        /// Top-left corner of the first glyph cell.
        position: Point,
        /// Font size in scene units.
        font_size: f64,
        /// Pen width.
        stroke_width: f64,
        /// Glyph strokes in drawing order; durations sum to the action duration.
        strokes: Vec<TimedStroke>,
    },
    /// Free-form path.
    Draw {
        /// SVG path data.
        path: String,
        /// Pen width.
        stroke_width: f64,
    },
    /// Circle around a point of interest.
    Circle {
        /// Circle centre.
        center: Point,
        /// Circle radius.
        radius: f64,
        /// SVG path data of the circle outline.
        path: String,
        /// Pen width.
        stroke_width: f64,
    },
    /// Arrow drawn as a shaft followed by a head.
    Arrow {
        /// Tail position.
        from: Point,
        /// Tip position.
        to: Point,
        /// Shaft bend; `0` is straight.
        curve: f64,
        /// SVG path data of the shaft.
        line_path: String,
        /// SVG path data of the head.
        head_path: String,
        /// Shaft then head timing; durations sum to the action duration.
        strokes: Vec<TimedStroke>,
        /// Pen width.
        stroke_width: f64,
    },
    /// Underline stroke.
    Underline {
        /// Start of the underline.
        from: Point,
        /// End of the underline.
        to: Point,
        /// SVG path data.
        path: String,
        /// Pen width.
        stroke_width: f64,
    },
    /// Rectangle frame.
    Box {
        /// Framed region.
        rect: Rect,
        /// SVG path data.
        path: String,
        /// Pen width.
        stroke_width: f64,
    },
    /// Translucent marker fill.
    Highlight {
        /// Highlighted region.
        rect: Rect,
    },
    /// Image revealed with a wipe.
    Image {
        /// Image reference, resolved by the renderer.
        source: String,
        /// Placement.
        rect: Rect,
    },
    /// Idle beat, optionally moving the camera.
    Pause {
        /// Viewport move performed during the pause.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        camera: Option<CameraMove>,
    },
    /// Board wipe.
    Erase {
        /// Region being cleared.
        rect: Rect,
        /// Zig-zag wiping path.
        path: String,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Viewport focus change.
pub struct CameraMove {
    /// Focus point before the move.
    pub from: Point,
    /// Focus point after the move.
    pub to: Point,
}

impl ActionKind {
    /// Lowercase kind name, as used in serialized scenes.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Write { .. } => "write",
            Self::Draw { .. } => "draw",
            Self::Circle { .. } => "circle",
            Self::Arrow { .. } => "arrow",
            Self::Underline { .. } => "underline",
            Self::Box { .. } => "box",
            Self::Highlight { .. } => "highlight",
            Self::Image { .. } => "image",
            Self::Pause { .. } => "pause",
            Self::Erase { .. } => "erase",
        }
    }

    /// Timed sub-strokes, for kinds that carry them.
    pub fn strokes(&self) -> Option<&[TimedStroke]> {
        match self {
            Self::Write { strokes, .. } | Self::Arrow { strokes, .. } => Some(strokes),
            _ => None,
        }
    }

    /// Generic path the hand follows over the whole action.
    ///
    /// Straight arrows have none; they are tracked along their segment instead.
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::Draw { path, .. }
            | Self::Circle { path, .. }
            | Self::Underline { path, .. }
            | Self::Box { path, .. }
            | Self::Erase { path, .. } => Some(path),
            Self::Arrow {
                curve, line_path, ..
            } if curve.abs() > f64::EPSILON => Some(line_path),
            _ => None,
        }
    }

    /// Static resting position of the hand, if the kind has one.
    pub fn anchor(&self) -> Option<Point> {
        match self {
            Self::Write { position, .. } => Some(*position),
            Self::Circle { center, .. } => Some(*center),
            Self::Arrow { to, .. } => Some(*to),
            Self::Underline { to, .. } => Some(*to),
            Self::Box { rect, .. } | Self::Highlight { rect } | Self::Erase { rect, .. } => {
                Some(rect.center())
            }
            Self::Image { rect, .. } => Some(rect.origin()),
            Self::Draw { .. } | Self::Pause { .. } => None,
        }
    }

    /// Whether this action moves the camera.
    pub fn is_camera_move(&self) -> bool {
        matches!(self, Self::Pause { camera: Some(_) })
    }
}

impl DrawingAction {
    /// Exclusive end time.
    pub fn end_time(&self) -> f64 {
        self.start_time + self.duration
    }

    /// Whether `t` falls in `[start_time, end_time)`.
    pub fn is_active_at(&self, t: f64) -> bool {
        self.start_time <= t && t < self.end_time()
    }
}

impl WhiteboardScene {
    /// Parse a scene from a JSON reader and validate it.
    pub fn from_reader<R: std::io::Read>(r: R) -> ChalklineResult<Self> {
        let scene: Self = serde_json::from_reader(r)
            .map_err(|e| ChalklineError::serde(format!("parse scene JSON: {e}")))?;
        scene.validate()?;
        Ok(scene)
    }

    /// Parse a scene from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> ChalklineResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ChalklineError::validation(format!("open scene JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> ChalklineResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Look up an action by id.
    pub fn action(&self, id: &str) -> Option<&DrawingAction> {
        self.actions.iter().find(|a| a.id == id)
    }

    /// Actions playing at `t`.
    pub fn active_at(&self, t: f64) -> impl Iterator<Item = &DrawingAction> {
        self.actions.iter().filter(move |a| a.is_active_at(t))
    }

    /// Latest action end time, or `0` for an empty scene.
    pub fn content_end(&self) -> f64 {
        self.actions
            .iter()
            .map(DrawingAction::end_time)
            .fold(0.0, f64::max)
    }

    /// Check the invariants compiled scenes uphold.
    ///
    /// Used for scenes coming from outside the compiler (e.g. session storage).
    pub fn validate(&self) -> ChalklineResult<()> {
        if self.actions.is_empty() {
            return Err(ChalklineError::validation("scene must contain at least one action"));
        }
        let mut seen = std::collections::HashSet::new();
        for a in &self.actions {
            if !seen.insert(a.id.as_str()) {
                return Err(ChalklineError::validation(format!(
                    "duplicate action id '{}'",
                    a.id
                )));
            }
            if !a.start_time.is_finite() || a.start_time < 0.0 {
                return Err(ChalklineError::validation(format!(
                    "action '{}' start_time must be finite and >= 0",
                    a.id
                )));
            }
            if !a.duration.is_finite() || a.duration <= 0.0 {
                return Err(ChalklineError::validation(format!(
                    "action '{}' duration must be finite and > 0",
                    a.id
                )));
            }
        }
        if !self.total_duration.is_finite() || self.total_duration + 1e-9 < self.content_end() {
            return Err(ChalklineError::validation(
                "scene total_duration must cover every action",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
