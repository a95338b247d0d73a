//! # Chalkline guide
//!
//! This module is a standalone walkthrough of Chalkline's architecture and public API.
//!
//! ---
//!
//! ## Core concepts
//!
//! - [`SemanticIntent`](crate::SemanticIntent): what the lesson wants to happen, with no timing
//! - [`SceneCompiler`](crate::SceneCompiler): turns intents into a timed scene
//! - [`WhiteboardScene`](crate::WhiteboardScene): the compiled, read-only result
//! - [`DrawingAction`](crate::DrawingAction): one timed unit (write, draw, circle, arrow, ...)
//! - [`ActionEvaluator`](crate::ActionEvaluator): answers "where is this action at time `t`?"
//!
//! The pipeline is explicitly staged:
//!
//! 1. Optionally lay out slide content: [`normalize_content`](crate::normalize_content)
//! 2. Compile: [`SceneCompiler::compile`](crate::SceneCompiler::compile)
//! 3. Evaluate per frame: [`ActionEvaluator::evaluate`](crate::ActionEvaluator::evaluate) or
//!    [`evaluate_scene`](crate::evaluate_scene)
//!
//! Renderers only ever see the compiled actions and the evaluator output. Glyph tables, the
//! stroke compiler and the timeline are compile-time internals.
//!
//! ---
//!
//! ## Compiling and sampling a scene
//!
//! ```rust
//! use chalkline::{
//!     ActionEvaluator, EmphasisMethod, EvaluatorOpts, Point, SceneCompiler, SceneConfig,
//!     SemanticIntent, evaluate_scene,
//! };
//!
//! # fn main() -> chalkline::ChalklineResult<()> {
//! let compiler = SceneCompiler::new(SceneConfig::default())?;
//! let scene = compiler.compile(&[
//!     SemanticIntent::introduce_text("Energy", Point::new(120.0, 120.0)),
//!     SemanticIntent::relate("Sun", "Plant", Point::new(120.0, 400.0), Point::new(900.0, 400.0)),
//!     SemanticIntent::emphasize("Energy", EmphasisMethod::Circle),
//! ]);
//! assert!(scene.total_duration > 0.0);
//!
//! let evaluator = ActionEvaluator::new(EvaluatorOpts::default());
//! let first = &scene.actions[0];
//! let state = evaluator.evaluate(first, first.start_time + first.duration / 2.0);
//! assert!(state.hand_position.is_some());
//!
//! let frame = evaluate_scene(&evaluator, &scene, 0.0);
//! assert_eq!(frame.actions.len(), scene.actions.len());
//! # Ok(())
//! # }
//! ```
//!
//! ---
//!
//! ## Scene units and glyph cells
//!
//! Scene coordinates are canvas units with `y` pointing down ([`Canvas`](crate::Canvas) defaults
//! to 1920x1080). Glyphs are authored in a 100-unit cell ([`CELL_HEIGHT`](crate::CELL_HEIGHT)):
//! capitals span `y = 10..80`, the baseline sits at `y = 80` and descenders reach `y = 100`.
//! Text at font size `s` is the cell scaled by `s / 100`, anchored at the cell's top-left corner.
//!
//! Characters missing from the table render as a visible placeholder box. Spaces advance the pen
//! without drawing.
//!
//! ---
//!
//! ## Timing
//!
//! Every action gets its slot from a [`Timeline`](crate::Timeline), a greedy allocator whose
//! cursor only moves forward:
//!
//! - each slot is followed by a fixed gap ([`TimelineOpts::gap`](crate::TimelineOpts::gap))
//! - the first action of every intent after the first gets extra breathing room
//! - camera moves also wait until the previous camera move ends
//!
//! As a result, no two actions ever overlap. Stroke durations depend on stroke length and
//! [`WritingSpeed`](crate::WritingSpeed), not on font size, so large and small text are written at
//! the same visual pace. A write action's duration is the sum of its strokes.
//!
//! ---
//!
//! ## Evaluation and the hand
//!
//! Evaluation is a pure function of `(action, time)`. An action is pending before its start,
//! active during its slot and complete afterwards; seeking backwards simply re-enters an earlier
//! phase.
//!
//! The hand position is resolved by the first rule that applies:
//!
//! 1. handwriting follows the live glyph stroke, with a neutral angle
//! 2. actions with a path follow it, pointing along its tangent
//! 3. straight arrows move along their segment
//! 4. images are wiped in diagonally at 45 degrees
//! 5. anything else rests at its anchor
//!
//! The hand is hidden while an action is pending, for actions that do not show a hand (highlights,
//! pauses), and once a finished action's hold window
//! ([`EvaluatorOpts::hand_hold_secs`](crate::EvaluatorOpts::hand_hold_secs)) has passed.
//!
//! Path sampling is memoized per `(path, duration, rate)` inside the evaluator's
//! [`PathSampler`](crate::PathSampler). Long-running processes can bound the cache with
//! [`EvaluatorOpts::max_cache_entries`](crate::EvaluatorOpts::max_cache_entries).
//!
//! ---
//!
//! ## Errors
//!
//! Compilation and evaluation never fail. [`ChalklineError`](crate::ChalklineError) is only
//! returned when loading or validating configuration, slide content and scene documents.
