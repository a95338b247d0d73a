use crate::foundation::core::{Point, Rect, Size};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "intent", rename_all = "snake_case")]
/// A teaching-level instruction, independent of how it is drawn.
pub enum SemanticIntent {
    /// Put a new concept on the board.
    IntroduceConcept {
        /// Text to write or image to reveal.
        payload: ConceptPayload,
        /// Top-left corner of the concept.
        position: Point,
        /// Font size for text payloads.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        font_size: Option<f64>,
        /// Name later intents use to refer to this concept; defaults to the text.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        label: Option<String>,
    },
    /// Write two concepts and connect them with an arrow.
    ExplainRelation {
        /// Source concept text.
        from: String,
        /// Target concept text.
        to: String,
        /// Anchor of the source concept.
        from_pos: Point,
        /// Anchor of the target concept.
        to_pos: Point,
        /// Arrow bend; `0` is straight.
        #[serde(default)]
        curve: f64,
        /// Font size of both concepts.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        font_size: Option<f64>,
    },
    /// Draw attention to something already on the board.
    Emphasize {
        /// What to emphasize.
        target: EmphasisTarget,
        /// How to emphasize it.
        method: EmphasisMethod,
    },
    /// Idle beat with the hand lifted.
    PauseForThinking {
        /// Beat length in seconds.
        duration: f64,
    },
    /// Draw a free-form path.
    Sketch {
        /// SVG path data in scene units.
        path: String,
    },
    /// Wipe part or all of the board.
    ClearBoard {
        /// Region to wipe; the whole canvas when absent.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        region: Option<Rect>,
    },
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// What an introduced concept shows.
pub enum ConceptPayload {
    /// Handwritten text.
    Text(String),
    /// Image reference.
    Image(ImageRef),
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Reference to an image resolved outside the engine.
pub struct ImageRef {
    /// Image URL or asset key.
    pub source: String,
    /// Display size; the configured default when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<Size>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Target of an emphasis.
pub enum EmphasisTarget {
    /// A previously introduced concept, by label.
    Label(String),
    /// An explicit board region.
    Region(Rect),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Emphasis style.
pub enum EmphasisMethod {
    /// Circle around the target.
    Circle,
    /// Line under the target.
    Underline,
    /// Marker fill over the target.
    Highlight,
    /// Frame around the target.
    Box,
}

impl SemanticIntent {
    /// Introduce a text concept at `position`.
    pub fn introduce_text(text: impl Into<String>, position: Point) -> Self {
        Self::IntroduceConcept {
            payload: ConceptPayload::Text(text.into()),
            position,
            font_size: None,
            label: None,
        }
    }

    /// Introduce an image concept at `position`.
    pub fn introduce_image(source: impl Into<String>, position: Point) -> Self {
        Self::IntroduceConcept {
            payload: ConceptPayload::Image(ImageRef {
                source: source.into(),
                size: None,
            }),
            position,
            font_size: None,
            label: None,
        }
    }

    /// Relate `from` to `to` with an arrow.
    pub fn relate(
        from: impl Into<String>,
        to: impl Into<String>,
        from_pos: Point,
        to_pos: Point,
    ) -> Self {
        Self::ExplainRelation {
            from: from.into(),
            to: to.into(),
            from_pos,
            to_pos,
            curve: 0.0,
            font_size: None,
        }
    }

    /// Emphasize the concept labelled `label`.
    pub fn emphasize(label: impl Into<String>, method: EmphasisMethod) -> Self {
        Self::Emphasize {
            target: EmphasisTarget::Label(label.into()),
            method,
        }
    }

    /// Thinking beat of `duration` seconds.
    pub fn pause(duration: f64) -> Self {
        Self::PauseForThinking { duration }
    }

    /// Override the font size of a text intent. No effect on other intents.
    pub fn with_font_size(mut self, size: f64) -> Self {
        if let Self::IntroduceConcept { font_size, .. } | Self::ExplainRelation { font_size, .. } =
            &mut self
        {
            *font_size = Some(size);
        }
        self
    }

    /// Set the label of an introduced concept. No effect on other intents.
    pub fn with_label(mut self, name: impl Into<String>) -> Self {
        if let Self::IntroduceConcept { label, .. } = &mut self {
            *label = Some(name.into());
        }
        self
    }
}
