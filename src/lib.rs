//! Chalkline is a whiteboard-animation timeline engine.
//!
//! It turns teaching-level intents ("introduce this concept", "relate these two", "circle that")
//! into a [`WhiteboardScene`]: an ordered list of timed, stroke-based [`DrawingAction`]s. Renderers
//! then ask an [`ActionEvaluator`] where each action stands at any playback time, including where
//! the drawing hand is and which way it points.
//!
//! # Pipeline overview
//!
//! 1. **Normalize** (optional): `SlideContent -> Vec<SemanticIntent>` via [`normalize_content`]
//! 2. **Compile**: `&[SemanticIntent] -> WhiteboardScene` via [`SceneCompiler::compile`]
//! 3. **Evaluate**: `(DrawingAction, seconds) -> ActionAnimationState` via
//!    [`ActionEvaluator::evaluate`], or a whole [`SceneFrame`] via [`evaluate_scene`]
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: compilation and evaluation are pure; caches never change results.
//! - **Never fatal**: unknown glyphs, degenerate paths and bad durations recover locally. Errors
//!   only surface when loading configuration or documents.
//! - **Headless**: path measurement and sampling are self-contained (`kurbo`), with no host
//!   rendering API involved.
//!
//! For a walkthrough of the concepts, see [`crate::guide`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(missing_docs_in_private_items)]

mod eval;
mod foundation;
mod geometry;
mod glyph;
mod scene;
mod stroke;
mod timeline;

/// High-level, standalone documentation for Chalkline's concepts and architecture.
pub mod guide;

pub use eval::evaluator::{
    ActionAnimationState, ActionEvaluator, ActionPhase, ArrowReveal, EvaluatorOpts, StrokeCursor,
};
pub use eval::frame::{ActionFrame, HandFrame, SceneFrame, evaluate_scene};
pub use foundation::core::{
    Affine, BezPath, Canvas, InkColor, MIN_DURATION_SECS, Point, Rect, Size, Vec2,
    sanitize_duration, unit_clamp,
};
pub use foundation::error::{ChalklineError, ChalklineResult};
pub use geometry::sampler::{
    DEFAULT_SAMPLE_RATE, PathLocation, PathPoint, PathSampler, SamplerOpts, SamplerStats, locate,
    path_length, sample_path,
};
pub use geometry::shapes::{ArrowPaths, arrow, box_path, circle, rect_path, underline, wipe};
pub use glyph::library::{BASE_FONT_SIZE, CELL_HEIGHT, Glyph, GlyphLibrary, GlyphStroke};
pub use scene::compiler::SceneCompiler;
pub use scene::config::{HEADING_FONT_SIZE, InkPalette, SUBHEADING_FONT_SIZE, SceneConfig};
pub use scene::content::{
    ContentItem, ContentKind, Coord, HEADING_SIZE, ICON_SIZE, SlideContent, normalize_content,
};
pub use scene::intent::{
    ConceptPayload, EmphasisMethod, EmphasisTarget, ImageRef, SemanticIntent,
};
pub use scene::model::{
    ActionKind, CameraMove, DrawingAction, MIN_SCENE_DURATION, WhiteboardScene,
};
pub use stroke::compiler::{
    CompiledText, DEFAULT_FONT_SIZE, MAX_STROKE_DURATION, MIN_STROKE_DURATION, StrokeCompiler,
    TimedStroke, WritingSpeed, font_scale,
};
pub use timeline::allocator::{Slot, SlotRequest, Timeline, TimelineOpts};
