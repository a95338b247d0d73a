use crate::{
    eval::evaluator::{ActionAnimationState, ActionEvaluator},
    foundation::core::Point,
    scene::model::WhiteboardScene,
};

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Every action's state at one scene time.
pub struct SceneFrame {
    /// Scene time in seconds.
    pub time: f64,
    /// Per-action states in scene order.
    pub actions: Vec<ActionFrame>,
    /// The single hand to draw, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hand: Option<HandFrame>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// State of one action within a [`SceneFrame`].
pub struct ActionFrame {
    /// Action id.
    pub id: String,
    /// Evaluated state.
    #[serde(flatten)]
    pub state: ActionAnimationState,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Hand pose chosen for a frame.
pub struct HandFrame {
    /// Action driving the hand.
    pub action_id: String,
    /// Hand position.
    pub position: Point,
    /// Hand orientation in degrees.
    pub angle_deg: f64,
}

#[tracing::instrument(skip(evaluator, scene), fields(scene = %scene.id))]
/// Evaluate every action of `scene` at time `t`.
///
/// When several actions report a hand (a finished action still holding while the next one
/// starts), the most recently started one wins.
pub fn evaluate_scene(evaluator: &ActionEvaluator, scene: &WhiteboardScene, t: f64) -> SceneFrame {
    let mut hand: Option<(f64, HandFrame)> = None;
    let actions = scene
        .actions
        .iter()
        .map(|action| {
            let state = evaluator.evaluate(action, t);
            if let (Some(position), Some(angle_deg)) = (state.hand_position, state.hand_angle_deg)
                && hand
                    .as_ref()
                    .is_none_or(|(start, _)| action.start_time >= *start)
            {
                hand = Some((
                    action.start_time,
                    HandFrame {
                        action_id: action.id.clone(),
                        position,
                        angle_deg,
                    },
                ));
            }
            ActionFrame {
                id: action.id.clone(),
                state,
            }
        })
        .collect();

    SceneFrame {
        time: t,
        actions,
        hand: hand.map(|(_, h)| h),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/frame.rs"]
mod tests;
