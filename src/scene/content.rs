use std::{fs::File, io::BufReader, path::Path};

use crate::{
    foundation::core::{Point, Size},
    foundation::error::{ChalklineError, ChalklineResult},
    scene::{
        config::SceneConfig,
        intent::{ConceptPayload, EmphasisMethod, EmphasisTarget, ImageRef, SemanticIntent},
    },
    stroke::compiler::font_scale,
};

/// Font size of slide headings.
pub const HEADING_SIZE: f64 = 56.0;

/// Edge length of icon images.
pub const ICON_SIZE: f64 = 96.0;

const MARGIN_LEFT: f64 = 96.0;
const MARGIN_TOP: f64 = 80.0;
const ITEM_SPACING: f64 = 28.0;
const BULLET_INDENT: f64 = 40.0;
const BULLET_PREFIX: &str = "- ";
const LINE_HEIGHT: f64 = 110.0;

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// Slide content as authored, before layout.
pub struct SlideContent {
    /// Items in reading order.
    #[serde(default)]
    pub items: Vec<ContentItem>,
    /// Narration script for the slide.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub narration: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Kind of a slide item.
pub enum ContentKind {
    /// Large accent text.
    Heading,
    /// Body text.
    Text,
    /// Indented list entry.
    Bullet,
    /// Image at its own or the configured size.
    Image,
    /// Small square image.
    Icon,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One slide item.
pub struct ContentItem {
    /// Item kind.
    #[serde(alias = "type")]
    pub kind: ContentKind,
    /// Text of text-like items.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Image reference of image-like items.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Horizontal position; auto-laid-out when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<Coord>,
    /// Vertical position; auto-laid-out when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<Coord>,
    /// Emphasis drawn right after the item.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emphasis: Option<EmphasisMethod>,
    /// Thinking beat after the item, in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pause_after: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
/// A coordinate given in scene units or as a percentage of the canvas (`"25%"`).
pub enum Coord {
    /// Absolute scene units.
    Px(f64),
    /// Percentage string such as `"40%"`; plain numeric strings are read as scene units.
    Text(String),
}

impl Coord {
    /// Resolve against a canvas extent. `None` when the value is not a usable number.
    pub fn resolve(&self, extent: f64) -> Option<f64> {
        let v = match self {
            Self::Px(v) => *v,
            Self::Text(s) => {
                let s = s.trim();
                match s.strip_suffix('%') {
                    Some(pct) => pct.trim().parse::<f64>().ok()? * extent / 100.0,
                    None => s.strip_suffix("px").unwrap_or(s).trim().parse().ok()?,
                }
            }
        };
        v.is_finite().then_some(v)
    }
}

impl ContentItem {
    /// Text item of `kind` with no placement or hints.
    pub fn text(kind: ContentKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: Some(text.into()),
            source: None,
            x: None,
            y: None,
            emphasis: None,
            pause_after: None,
        }
    }

    /// Image item of `kind` with no placement or hints.
    pub fn image(kind: ContentKind, source: impl Into<String>) -> Self {
        Self {
            kind,
            text: None,
            source: Some(source.into()),
            x: None,
            y: None,
            emphasis: None,
            pause_after: None,
        }
    }

    /// Place the item explicitly.
    pub fn at(mut self, x: Coord, y: Coord) -> Self {
        self.x = Some(x);
        self.y = Some(y);
        self
    }

    /// Emphasize the item after it is drawn.
    pub fn emphasized(mut self, method: EmphasisMethod) -> Self {
        self.emphasis = Some(method);
        self
    }
}

impl SlideContent {
    /// Parse content from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> ChalklineResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| ChalklineError::serde(format!("parse content JSON: {e}")))
    }

    /// Parse content from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> ChalklineResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ChalklineError::validation(format!("open content JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }
}

/// Lay out slide content and translate it into semantic intents.
///
/// Items without an explicit position flow top to bottom from the top-left margin; explicitly
/// placed items move the flow cursor below themselves. Items missing their text or source are
/// skipped.
pub fn normalize_content(content: &SlideContent, config: &SceneConfig) -> Vec<SemanticIntent> {
    let canvas = config.canvas.size();
    let mut intents = Vec::new();
    let mut flow_y = MARGIN_TOP;

    for (i, item) in content.items.iter().enumerate() {
        let indent = if item.kind == ContentKind::Bullet {
            BULLET_INDENT
        } else {
            0.0
        };
        let x = resolve_axis(item.x.as_ref(), canvas.width, i).unwrap_or(MARGIN_LEFT + indent);
        let y = resolve_axis(item.y.as_ref(), canvas.height, i).unwrap_or(flow_y);
        let position = Point::new(x, y);

        let (intent, label, height) = match item.kind {
            ContentKind::Heading | ContentKind::Text | ContentKind::Bullet => {
                let Some(text) = item.text.as_deref().filter(|t| !t.trim().is_empty()) else {
                    tracing::warn!(index = i, "text item without text; skipped");
                    continue;
                };
                let font_size = match item.kind {
                    ContentKind::Heading => HEADING_SIZE,
                    _ => config.default_font_size,
                };
                let written = match item.kind {
                    ContentKind::Bullet => format!("{BULLET_PREFIX}{text}"),
                    _ => text.to_owned(),
                };
                let lines = written.lines().count().max(1) as f64;
                let height = lines * LINE_HEIGHT * font_scale(font_size);
                let intent = SemanticIntent::IntroduceConcept {
                    payload: ConceptPayload::Text(written),
                    position,
                    font_size: Some(font_size),
                    label: Some(text.to_owned()),
                };
                (intent, text.to_owned(), height)
            }
            ContentKind::Image | ContentKind::Icon => {
                let Some(source) = item.source.as_deref().filter(|s| !s.trim().is_empty()) else {
                    tracing::warn!(index = i, "image item without source; skipped");
                    continue;
                };
                let size = match item.kind {
                    ContentKind::Icon => Size::new(ICON_SIZE, ICON_SIZE),
                    _ => Size::new(config.image_width, config.image_height),
                };
                let intent = SemanticIntent::IntroduceConcept {
                    payload: ConceptPayload::Image(ImageRef {
                        source: source.to_owned(),
                        size: Some(size),
                    }),
                    position,
                    font_size: None,
                    label: Some(source.to_owned()),
                };
                (intent, source.to_owned(), size.height)
            }
        };

        intents.push(intent);
        if let Some(method) = item.emphasis {
            intents.push(SemanticIntent::Emphasize {
                target: EmphasisTarget::Label(label),
                method,
            });
        }
        if let Some(pause) = item.pause_after.filter(|p| p.is_finite() && *p > 0.0) {
            intents.push(SemanticIntent::PauseForThinking { duration: pause });
        }
        flow_y = flow_y.max(y + height + ITEM_SPACING);
    }

    tracing::debug!(items = content.items.len(), intents = intents.len(), "normalized content");
    intents
}

fn resolve_axis(coord: Option<&Coord>, extent: f64, index: usize) -> Option<f64> {
    let coord = coord?;
    let v = coord.resolve(extent);
    if v.is_none() {
        tracing::warn!(index, ?coord, "unusable coordinate; using auto layout");
    }
    v
}

#[cfg(test)]
#[path = "../../tests/unit/scene/content.rs"]
mod tests;
