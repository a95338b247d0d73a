use crate::{
    foundation::core::{MIN_DURATION_SECS, Point, sanitize_duration, unit_clamp},
    foundation::math::{angle_deg, lerp_point},
    geometry::sampler::{DEFAULT_SAMPLE_RATE, PathSampler, SamplerOpts, SamplerStats, locate},
    scene::model::{ActionKind, DrawingAction},
    stroke::compiler::TimedStroke,
};

/// Hand orientation while revealing an image.
const IMAGE_HAND_ANGLE_DEG: f64 = 45.0;

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Options for [`ActionEvaluator`].
pub struct EvaluatorOpts {
    /// Path samples per second of an action's own duration.
    pub sample_rate: u32,
    /// How long the hand stays at the end of a finished action, in seconds.
    pub hand_hold_secs: f64,
    /// Bound on cached point tables; unbounded when `None`.
    pub max_cache_entries: Option<usize>,
}

impl Default for EvaluatorOpts {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            hand_hold_secs: 0.3,
            max_cache_entries: None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
/// Lifecycle of one action relative to the query time.
pub enum ActionPhase {
    /// Not started yet.
    Pending,
    /// Playing.
    Active,
    /// Finished.
    Complete,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// Live sub-stroke of a stroke-based action.
pub struct StrokeCursor {
    /// Index into the action's stroke list.
    pub index: usize,
    /// Progress through that stroke in `[0, 1]`.
    pub local_progress: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// How much of an arrow is drawn.
///
/// The reveal is timed on the stroke split: the shaft fills over its own duration, then the head
/// snaps in. The hand pose is timed on the whole action instead, so at a given progress the hand
/// may trail the visible end of the shaft.
pub struct ArrowReveal {
    /// Drawn fraction of the shaft in `[0, 1]`.
    pub line: f64,
    /// Whether the head has snapped in.
    pub head_visible: bool,
}

impl ArrowReveal {
    /// Reveal state at overall `progress`, given the `[shaft, head]` stroke timing.
    pub fn at(strokes: &[TimedStroke], progress: f64) -> Self {
        let progress = unit_clamp(progress);
        let (line_time, total) = match strokes {
            [line, rest @ ..] if !rest.is_empty() => {
                let total: f64 = strokes.iter().map(|s| s.duration).sum();
                (line.duration, total)
            }
            _ => (1.0, 1.0),
        };
        if !(total > 0.0 && line_time > 0.0) {
            return Self {
                line: progress,
                head_visible: progress >= 1.0,
            };
        }
        let share = (line_time / total).min(1.0);
        Self {
            line: unit_clamp(progress / share),
            head_visible: progress >= share,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Animation state of one action at a point in time.
pub struct ActionAnimationState {
    /// Progress in `[0, 1]`.
    pub current_progress: f64,
    /// `true` once the action finished; implies `current_progress == 1`.
    pub is_complete: bool,
    /// Lifecycle phase.
    pub phase: ActionPhase,
    /// Where the drawing hand is, when it is shown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hand_position: Option<Point>,
    /// Hand orientation in degrees; `0` is neutral.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hand_angle_deg: Option<f64>,
    /// Live sub-stroke of a handwriting action.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke: Option<StrokeCursor>,
    /// Shaft and head state of an arrow.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arrow: Option<ArrowReveal>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct HandPose {
    position: Point,
    angle_deg: f64,
}

/// Evaluates drawing actions at arbitrary times.
///
/// Evaluation is a pure function of `(action, time)`. The evaluator owns a [`PathSampler`] whose
/// cache only speeds up repeated queries; it never changes results.
#[derive(Debug, Default)]
pub struct ActionEvaluator {
    opts: EvaluatorOpts,
    sampler: PathSampler,
}

impl ActionEvaluator {
    /// Create an evaluator with its own path cache.
    pub fn new(opts: EvaluatorOpts) -> Self {
        let sampler = PathSampler::new(SamplerOpts {
            sample_rate: opts.sample_rate,
            max_entries: opts.max_cache_entries,
        });
        Self { opts, sampler }
    }

    /// Options in effect.
    pub fn opts(&self) -> EvaluatorOpts {
        self.opts
    }

    /// Path cache counters.
    pub fn cache_stats(&self) -> SamplerStats {
        self.sampler.stats()
    }

    /// Drop every cached point table.
    pub fn clear_cache(&self) {
        self.sampler.clear();
    }

    /// Evaluate `action` at scene time `elapsed` seconds.
    pub fn evaluate(&self, action: &DrawingAction, elapsed: f64) -> ActionAnimationState {
        let duration = sanitize_duration(action.duration, MIN_DURATION_SECS);
        let start = if action.start_time.is_finite() {
            action.start_time
        } else {
            0.0
        };
        let end = start + duration;

        let (phase, progress) = if elapsed.is_nan() || elapsed < start {
            (ActionPhase::Pending, 0.0)
        } else if elapsed >= end {
            (ActionPhase::Complete, 1.0)
        } else {
            (ActionPhase::Active, unit_clamp((elapsed - start) / duration))
        };

        let stroke = match (&action.kind, phase) {
            (ActionKind::Write { strokes, .. }, ActionPhase::Active | ActionPhase::Complete) => {
                live_stroke(strokes, progress * duration)
            }
            _ => None,
        };
        let arrow = match &action.kind {
            ActionKind::Arrow { strokes, .. } => Some(ArrowReveal::at(strokes, progress)),
            _ => None,
        };

        let hand_shown = action.hand_visible
            && match phase {
                ActionPhase::Pending => false,
                ActionPhase::Active => true,
                ActionPhase::Complete => elapsed - end <= self.opts.hand_hold_secs.max(0.0),
            };
        let pose = if hand_shown {
            self.hand_pose(action, duration, progress, stroke)
        } else {
            None
        };

        ActionAnimationState {
            current_progress: progress,
            is_complete: phase == ActionPhase::Complete,
            phase,
            hand_position: pose.map(|p| p.position),
            hand_angle_deg: pose.map(|p| p.angle_deg),
            stroke,
            arrow,
        }
    }

    fn hand_pose(
        &self,
        action: &DrawingAction,
        duration: f64,
        progress: f64,
        stroke: Option<StrokeCursor>,
    ) -> Option<HandPose> {
        let kind = &action.kind;

        if let (ActionKind::Write { strokes, .. }, Some(cursor)) = (kind, stroke)
            && let Some(live) = strokes.get(cursor.index)
        {
            let points = self.sampler.points(&live.path, live.duration);
            if let Some(loc) = locate(&points, cursor.local_progress) {
                return Some(HandPose {
                    position: loc.position,
                    angle_deg: 0.0,
                });
            }
        }

        if let Some(path) = kind.path() {
            let points = self.sampler.points(path, duration);
            if let Some(loc) = locate(&points, progress) {
                return Some(HandPose {
                    position: loc.position,
                    angle_deg: loc.angle_deg,
                });
            }
        }

        match kind {
            ActionKind::Arrow { from, to, .. } if from.is_finite() && to.is_finite() => {
                Some(HandPose {
                    position: lerp_point(*from, *to, progress),
                    angle_deg: angle_deg(*to - *from),
                })
            }
            ActionKind::Image { rect, .. } => Some(HandPose {
                position: lerp_point(rect.origin(), Point::new(rect.x1, rect.y1), progress),
                angle_deg: IMAGE_HAND_ANGLE_DEG,
            }),
            _ => kind
                .anchor()
                .filter(|p| p.is_finite())
                .map(|position| HandPose {
                    position,
                    angle_deg: 0.0,
                }),
        }
    }
}

/// Sub-stroke live at `t` seconds into an action.
///
/// Stroke `i` is live while `sum(d[..i]) <= t < sum(d[..=i])`; at or past the end the last stroke
/// is reported as finished.
fn live_stroke(strokes: &[TimedStroke], t: f64) -> Option<StrokeCursor> {
    let last = strokes.len().checked_sub(1)?;
    let mut acc = 0.0;
    for (index, s) in strokes.iter().enumerate() {
        let d = sanitize_duration(s.duration, f64::MIN_POSITIVE);
        if t < acc + d {
            return Some(StrokeCursor {
                index,
                local_progress: unit_clamp((t - acc) / d),
            });
        }
        acc += d;
    }
    Some(StrokeCursor {
        index: last,
        local_progress: 1.0,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/eval/evaluator.rs"]
mod tests;
