use std::collections::HashMap;

use crate::{
    foundation::core::{BezPath, InkColor, Point, Rect, Size, Vec2},
    foundation::error::ChalklineResult,
    foundation::math::Fnv1a64,
    geometry::{sampler::path_length, shapes},
    glyph::library::GlyphLibrary,
    scene::{
        config::SceneConfig,
        content::{SlideContent, normalize_content},
        intent::{ConceptPayload, EmphasisMethod, EmphasisTarget, ImageRef, SemanticIntent},
        model::{ActionKind, CameraMove, DrawingAction, MIN_SCENE_DURATION, WhiteboardScene},
    },
    stroke::compiler::{StrokeCompiler, TimedStroke},
    timeline::allocator::{SlotRequest, Timeline},
};

/// Text written when a scene would otherwise be empty.
const PLACEHOLDER_TEXT: &str = "...";

/// Gap between a related concept and the arrow touching it.
const ARROW_CLEARANCE: f64 = 8.0;

/// Horizontal sweeps of a board wipe.
const WIPE_PASSES: u32 = 4;

/// Compiles semantic intents into a timed [`WhiteboardScene`].
///
/// Compilation is deterministic: identical intents and config produce identical scenes.
#[derive(Clone, Debug)]
pub struct SceneCompiler {
    config: SceneConfig,
    glyphs: GlyphLibrary,
}

impl SceneCompiler {
    /// Create a compiler with the built-in glyph table.
    pub fn new(config: SceneConfig) -> ChalklineResult<Self> {
        Self::with_glyphs(config, GlyphLibrary::new())
    }

    /// Create a compiler with a caller-provided glyph library.
    pub fn with_glyphs(config: SceneConfig, glyphs: GlyphLibrary) -> ChalklineResult<Self> {
        config.validate()?;
        Ok(Self { config, glyphs })
    }

    /// Settings in effect.
    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// Glyph library in use.
    pub fn glyphs(&self) -> &GlyphLibrary {
        &self.glyphs
    }

    #[tracing::instrument(skip(self, intents), fields(intents = intents.len()))]
    /// Compile `intents`, in order, into a scene.
    pub fn compile(&self, intents: &[SemanticIntent]) -> WhiteboardScene {
        let mut pass = Pass::new(self);
        for (i, intent) in intents.iter().enumerate() {
            pass.intent(intent, i > 0);
        }
        if pass.actions.is_empty() {
            tracing::warn!("no drawable intents; synthesizing placeholder action");
            pass.placeholder();
        }

        let content_end = pass
            .actions
            .iter()
            .map(DrawingAction::end_time)
            .fold(0.0, f64::max);
        let total_duration = content_end
            .max(self.config.nominal_duration)
            .max(MIN_SCENE_DURATION);

        WhiteboardScene {
            id: scene_id(intents),
            background: self.config.palette.background,
            actions: pass.actions,
            narration: None,
            total_duration,
        }
    }

    /// Normalize slide content into intents and compile them.
    pub fn compile_content(&self, content: &SlideContent) -> WhiteboardScene {
        let intents = normalize_content(content, &self.config);
        let mut scene = self.compile(&intents);
        scene.narration = content.narration.clone();
        scene
    }
}

fn scene_id(intents: &[SemanticIntent]) -> String {
    let mut h = Fnv1a64::new_default();
    h.write_u64(intents.len() as u64);
    h.write_bytes(&serde_json::to_vec(intents).unwrap_or_default());
    format!("scene-{:016x}", h.finish())
}

/// Mutable state for one compilation.
struct Pass<'c> {
    compiler: &'c SceneCompiler,
    strokes: StrokeCompiler<'c>,
    timeline: Timeline,
    actions: Vec<DrawingAction>,
    labels: HashMap<String, Rect>,
    last_written: Option<Rect>,
}

impl<'c> Pass<'c> {
    fn new(compiler: &'c SceneCompiler) -> Self {
        Self {
            compiler,
            strokes: StrokeCompiler::new(&compiler.glyphs),
            timeline: Timeline::new(compiler.config.timeline),
            actions: Vec::new(),
            labels: HashMap::new(),
            last_written: None,
        }
    }

    fn cfg(&self) -> &'c SceneConfig {
        &self.compiler.config
    }

    fn intent(&mut self, intent: &SemanticIntent, breathe: bool) {
        match intent {
            SemanticIntent::IntroduceConcept {
                payload: ConceptPayload::Text(text),
                position,
                font_size,
                label,
            } => {
                let size = font_size.unwrap_or(self.cfg().default_font_size);
                let (bounds, drawn) = self.write(text, *position, size, breathe);
                if drawn {
                    self.remember(label.as_deref().unwrap_or(text), bounds);
                    self.thinking_beat(self.cfg().thinking_pause);
                }
            }
            SemanticIntent::IntroduceConcept {
                payload: ConceptPayload::Image(image),
                position,
                label,
                ..
            } => {
                let rect = self.image(image, *position, breathe);
                self.remember(label.as_deref().unwrap_or(&image.source), rect);
            }
            SemanticIntent::ExplainRelation {
                from,
                to,
                from_pos,
                to_pos,
                curve,
                font_size,
            } => {
                let size = font_size.unwrap_or(self.cfg().default_font_size);
                let (from_bounds, drawn) = self.write(from, *from_pos, size, breathe);
                if drawn {
                    self.remember(from, from_bounds);
                }
                // The narration gap belongs to whichever action opens the relation.
                let mut breathe = breathe && !drawn;
                if (to_pos.x - from_pos.x).abs() > self.cfg().camera_move_threshold {
                    self.camera_move(*from_pos, *to_pos, breathe);
                    breathe = false;
                }
                let (to_bounds, drawn) = self.write(to, *to_pos, size, breathe);
                if drawn {
                    self.remember(to, to_bounds);
                    breathe = false;
                }
                self.arrow(from_bounds, to_bounds, *curve, breathe);
            }
            SemanticIntent::Emphasize { target, method } => {
                let rect = self.resolve_target(target);
                self.emphasize(rect, *method, breathe);
            }
            SemanticIntent::PauseForThinking { duration } => self.thinking_beat(*duration),
            SemanticIntent::Sketch { path } => self.sketch(path, breathe),
            SemanticIntent::ClearBoard { region } => {
                let rect = region.map_or_else(|| self.cfg().canvas.rect(), |r| r.abs());
                self.erase(rect, breathe);
            }
        }
    }

    fn push(
        &mut self,
        kind: ActionKind,
        color: InkColor,
        hand_visible: bool,
        req: SlotRequest,
    ) -> usize {
        let slot = self.timeline.reserve_slot(req);
        let kind = match kind {
            ActionKind::Write {
                text,
                position,
                font_size,
                stroke_width,
                strokes,
            } => ActionKind::Write {
                text,
                position,
                font_size,
                stroke_width,
                strokes: fit_strokes(strokes, slot.duration),
            },
            ActionKind::Arrow {
                from,
                to,
                curve,
                line_path,
                head_path,
                strokes,
                stroke_width,
            } => ActionKind::Arrow {
                from,
                to,
                curve,
                line_path,
                head_path,
                strokes: fit_strokes(strokes, slot.duration),
                stroke_width,
            },
            other => other,
        };
        let id = format!("{}-{:03}", kind.name(), self.actions.len());
        self.actions.push(DrawingAction {
            id,
            start_time: slot.start,
            duration: slot.duration,
            color,
            hand_visible,
            kind,
        });
        self.actions.len() - 1
    }

    /// Write `text`, returning its bounds and whether anything was drawn.
    ///
    /// Text with no visible strokes emits no action; the returned bounds are still usable as an
    /// anchor.
    fn write(
        &mut self,
        text: &str,
        position: Point,
        font_size: f64,
        breathe: bool,
    ) -> (Rect, bool) {
        let cfg = self.cfg();
        let compiled = self
            .strokes
            .compile_text(text, position, font_size, cfg.speed);
        if compiled.strokes.is_empty() {
            tracing::warn!(%text, "text has no visible strokes; skipping write");
            return (compiled.bounds, false);
        }
        let mut req = SlotRequest::new(compiled.duration);
        req.add_narration_pause = breathe;
        self.push(
            ActionKind::Write {
                text: text.to_owned(),
                position,
                font_size,
                stroke_width: cfg.stroke_width,
                strokes: compiled.strokes,
            },
            cfg.palette.text_color(font_size),
            true,
            req,
        );
        self.last_written = Some(compiled.bounds);
        (compiled.bounds, true)
    }

    fn thinking_beat(&mut self, duration: f64) {
        let color = self.cfg().palette.body;
        self.push(
            ActionKind::Pause { camera: None },
            color,
            false,
            SlotRequest::new(duration),
        );
    }

    fn camera_move(&mut self, from: Point, to: Point, breathe: bool) {
        let cfg = self.cfg();
        let mut req = SlotRequest::new(cfg.camera_pause).camera_move();
        req.add_narration_pause = breathe;
        self.push(
            ActionKind::Pause {
                camera: Some(CameraMove { from, to }),
            },
            cfg.palette.body,
            false,
            req,
        );
    }

    fn image(&mut self, image: &ImageRef, position: Point, breathe: bool) -> Rect {
        let cfg = self.cfg();
        let size = image
            .size
            .filter(|s| s.is_finite() && s.width > 0.0 && s.height > 0.0)
            .unwrap_or(Size::new(cfg.image_width, cfg.image_height));
        let rect = Rect::from_origin_size(position, size);
        let mut req = SlotRequest::new(cfg.image_reveal);
        req.add_narration_pause = breathe;
        self.push(
            ActionKind::Image {
                source: image.source.clone(),
                rect,
            },
            cfg.palette.body,
            true,
            req,
        );
        rect
    }

    fn arrow(&mut self, from: Rect, to: Rect, curve: f64, breathe: bool) {
        let cfg = self.cfg();
        let (tail, tip) = arrow_endpoints(from, to);
        let paths = shapes::arrow(tail, tip, curve);
        let line_duration = self.shape_duration(path_length(&paths.line));
        let strokes = vec![
            TimedStroke {
                path: paths.line.to_svg(),
                duration: line_duration,
            },
            TimedStroke {
                path: paths.head.to_svg(),
                duration: cfg.arrow_head_duration,
            },
        ];
        let mut req = SlotRequest::new(line_duration + cfg.arrow_head_duration);
        req.add_narration_pause = breathe;
        self.push(
            ActionKind::Arrow {
                from: tail,
                to: tip,
                curve,
                line_path: paths.line.to_svg(),
                head_path: paths.head.to_svg(),
                strokes,
                stroke_width: cfg.stroke_width,
            },
            cfg.palette.annotation,
            true,
            req,
        );
    }

    fn emphasize(&mut self, rect: Rect, method: EmphasisMethod, breathe: bool) {
        let cfg = self.cfg();
        let pad = cfg.emphasis_padding;
        let (kind, duration, color, hand) = match method {
            EmphasisMethod::Circle => {
                let center = rect.center();
                let radius = rect.width().max(rect.height()) / 2.0 + pad;
                let path = shapes::circle(center, radius);
                (
                    ActionKind::Circle {
                        center,
                        radius,
                        path: path.to_svg(),
                        stroke_width: cfg.stroke_width,
                    },
                    self.shape_duration(path_length(&path)),
                    cfg.palette.annotation,
                    true,
                )
            }
            EmphasisMethod::Underline => {
                let y = rect.y1 + pad / 2.0;
                let (from, to) = (Point::new(rect.x0, y), Point::new(rect.x1, y));
                let path = shapes::underline(from, to);
                (
                    ActionKind::Underline {
                        from,
                        to,
                        path: path.to_svg(),
                        stroke_width: cfg.stroke_width,
                    },
                    self.shape_duration(path_length(&path)),
                    cfg.palette.annotation,
                    true,
                )
            }
            EmphasisMethod::Highlight => (
                ActionKind::Highlight {
                    rect: rect.inflate(pad / 2.0, pad / 2.0),
                },
                cfg.highlight_duration,
                cfg.palette.highlight,
                false,
            ),
            EmphasisMethod::Box => {
                let framed = rect.inflate(pad, pad);
                let path = shapes::rect_path(framed);
                (
                    ActionKind::Box {
                        rect: framed,
                        path: path.to_svg(),
                        stroke_width: cfg.stroke_width,
                    },
                    self.shape_duration(path_length(&path)),
                    cfg.palette.annotation,
                    true,
                )
            }
        };
        let mut req = SlotRequest::new(duration);
        req.add_narration_pause = breathe;
        self.push(kind, color, hand, req);
    }

    fn sketch(&mut self, path_d: &str, breathe: bool) {
        let cfg = self.cfg();
        let duration = match BezPath::from_svg(path_d) {
            Ok(path) => self.shape_duration(path_length(&path)),
            Err(e) => {
                tracing::warn!(error = %e, "sketch path does not parse; drawing nothing");
                cfg.shape_min_duration
            }
        };
        let mut req = SlotRequest::new(duration);
        req.add_narration_pause = breathe;
        self.push(
            ActionKind::Draw {
                path: path_d.to_owned(),
                stroke_width: cfg.stroke_width,
            },
            cfg.palette.body,
            true,
            req,
        );
    }

    fn erase(&mut self, rect: Rect, breathe: bool) {
        let cfg = self.cfg();
        let path = shapes::wipe(rect, WIPE_PASSES);
        let mut req = SlotRequest::new(cfg.erase_duration);
        req.add_narration_pause = breathe;
        self.push(
            ActionKind::Erase {
                rect,
                path: path.to_svg(),
            },
            cfg.palette.background,
            true,
            req,
        );
        self.labels.retain(|_, r| !covers(rect, *r));
        if self.last_written.is_some_and(|r| covers(rect, r)) {
            self.last_written = None;
        }
    }

    fn placeholder(&mut self) {
        let cfg = self.cfg();
        let size = cfg.default_font_size;
        let width = self.strokes.measure(PLACEHOLDER_TEXT, size);
        let center = cfg.canvas.center();
        let anchor = Point::new(center.x - width / 2.0, center.y - size / 2.0);
        self.write(PLACEHOLDER_TEXT, anchor, size, false);
    }

    fn remember(&mut self, label: &str, bounds: Rect) {
        self.labels.insert(label.to_owned(), bounds);
    }

    fn resolve_target(&self, target: &EmphasisTarget) -> Rect {
        match target {
            EmphasisTarget::Region(rect) => rect.abs(),
            EmphasisTarget::Label(label) => match self.labels.get(label) {
                Some(rect) => *rect,
                None => {
                    tracing::warn!(%label, "unknown emphasis target; using latest text");
                    self.last_written.unwrap_or_else(|| {
                        let size = self.cfg().default_font_size;
                        Rect::from_center_size(self.cfg().canvas.center(), Size::new(size, size))
                    })
                }
            },
        }
    }

    fn shape_duration(&self, length: f64) -> f64 {
        let cfg = self.cfg();
        let raw = length * cfg.speed.duration_per_character() / 100.0;
        if raw.is_finite() {
            raw.clamp(cfg.shape_min_duration, cfg.shape_max_duration)
        } else {
            cfg.shape_min_duration
        }
    }
}

/// Rescale stroke durations so they sum to `total`.
///
/// Only differs from the input when the timeline clamped the slot.
fn fit_strokes(mut strokes: Vec<TimedStroke>, total: f64) -> Vec<TimedStroke> {
    let sum: f64 = strokes.iter().map(|s| s.duration).sum();
    if strokes.is_empty() || sum <= 0.0 || (sum - total).abs() <= 1e-12 {
        return strokes;
    }
    let k = total / sum;
    for s in &mut strokes {
        s.duration *= k;
    }
    strokes
}

fn covers(outer: Rect, inner: Rect) -> bool {
    outer.x0 <= inner.x0 && outer.y0 <= inner.y0 && outer.x1 >= inner.x1 && outer.y1 >= inner.y1
}

/// Arrow tail and tip connecting two text boxes through their facing sides.
fn arrow_endpoints(from: Rect, to: Rect) -> (Point, Point) {
    let (fc, tc) = (from.center(), to.center());
    let d = tc - fc;
    let gap = Vec2::new(ARROW_CLEARANCE, ARROW_CLEARANCE);
    if d.x.abs() >= d.y.abs() {
        let dir = d.x.signum();
        let tail = Point::new(if dir >= 0.0 { from.x1 } else { from.x0 }, fc.y);
        let tip = Point::new(if dir >= 0.0 { to.x0 } else { to.x1 }, tc.y);
        (
            tail + Vec2::new(gap.x * dir, 0.0),
            tip - Vec2::new(gap.x * dir, 0.0),
        )
    } else {
        let dir = d.y.signum();
        let tail = Point::new(fc.x, if dir >= 0.0 { from.y1 } else { from.y0 });
        let tip = Point::new(tc.x, if dir >= 0.0 { to.y0 } else { to.y1 });
        (
            tail + Vec2::new(0.0, gap.y * dir),
            tip - Vec2::new(0.0, gap.y * dir),
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/compiler.rs"]
mod tests;
