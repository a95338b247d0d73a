use std::collections::HashMap;

use crate::{
    foundation::core::{BezPath, Rect},
    geometry::sampler::path_length,
    glyph::table::{GLYPHS, GlyphDef, PLACEHOLDER, SPACE_ADVANCE},
};

/// Font size at which glyph cell units map 1:1 to scene units.
pub const BASE_FONT_SIZE: f64 = 100.0;

/// Height of the nominal glyph cell, in cell units.
pub const CELL_HEIGHT: f64 = 100.0;

#[derive(Clone, Debug)]
/// One continuous pen stroke of a glyph, in cell units.
pub struct GlyphStroke {
    /// Stroke outline.
    pub path: BezPath,
    /// Arc length of [`GlyphStroke::path`], used to allocate drawing time.
    pub estimated_length: f64,
}

#[derive(Clone, Debug)]
/// A resolved glyph: strokes in drawing order plus horizontal advance.
pub struct Glyph {
    /// Pen strokes; empty for whitespace.
    pub strokes: Vec<GlyphStroke>,
    /// Horizontal advance in cell units.
    pub advance: f64,
    /// `true` when this glyph stands in for an unsupported character.
    pub placeholder: bool,
}

impl Glyph {
    /// Union of all stroke bounds, or `None` for stroke-less glyphs.
    pub fn bounds(&self) -> Option<Rect> {
        use kurbo::Shape as _;
        self.strokes
            .iter()
            .map(|s| s.path.bounding_box())
            .reduce(|a, b| a.union(b))
    }
}

/// Read-only table mapping characters to handwriting strokes.
///
/// Lookups never fail: characters without an outline resolve to a rectangular placeholder glyph
/// scaled to the nominal cell, so unsupported text still animates.
#[derive(Clone, Debug)]
pub struct GlyphLibrary {
    glyphs: HashMap<char, Glyph>,
    space: Glyph,
    placeholder: Glyph,
}

impl Default for GlyphLibrary {
    fn default() -> Self {
        Self::new()
    }
}

impl GlyphLibrary {
    /// Build the library from the built-in outline table.
    pub fn new() -> Self {
        let glyphs = GLYPHS
            .iter()
            .map(|def| (def.ch, build_glyph(def, false)))
            .collect::<HashMap<_, _>>();
        let mut placeholder = build_glyph(&PLACEHOLDER, true);
        if placeholder.strokes.is_empty() {
            placeholder.strokes.push(fallback_placeholder_stroke());
        }
        Self {
            glyphs,
            space: Glyph {
                strokes: Vec::new(),
                advance: SPACE_ADVANCE,
                placeholder: false,
            },
            placeholder,
        }
    }

    /// Strokes for `ch`; whitespace yields no strokes, unknown characters the placeholder.
    pub fn lookup(&self, ch: char) -> &[GlyphStroke] {
        &self.glyph(ch).strokes
    }

    /// Full glyph record for `ch`.
    pub fn glyph(&self, ch: char) -> &Glyph {
        if ch.is_whitespace() {
            return &self.space;
        }
        match self.glyphs.get(&ch) {
            Some(g) => g,
            None => {
                tracing::trace!(?ch, "no outline for character; using placeholder");
                &self.placeholder
            }
        }
    }

    /// Whether `ch` has a dedicated outline (whitespace counts as supported).
    pub fn contains(&self, ch: char) -> bool {
        ch.is_whitespace() || self.glyphs.contains_key(&ch)
    }

    /// Horizontal advance of `ch` in cell units.
    pub fn advance(&self, ch: char) -> f64 {
        self.glyph(ch).advance
    }

    /// All characters with a dedicated outline, sorted.
    pub fn chars(&self) -> Vec<char> {
        let mut out = self.glyphs.keys().copied().collect::<Vec<_>>();
        out.sort_unstable();
        out
    }
}

fn build_glyph(def: &GlyphDef, placeholder: bool) -> Glyph {
    let strokes = def
        .strokes
        .iter()
        .filter_map(|d| match BezPath::from_svg(d) {
            Ok(path) => {
                let estimated_length = path_length(&path);
                Some(GlyphStroke {
                    path,
                    estimated_length,
                })
            }
            Err(e) => {
                tracing::warn!(ch = ?def.ch, error = %e, "skipping unparseable glyph stroke");
                None
            }
        })
        .collect();
    Glyph {
        strokes,
        advance: def.advance,
        placeholder,
    }
}

fn fallback_placeholder_stroke() -> GlyphStroke {
    let mut path = BezPath::new();
    path.move_to((10.0, 10.0));
    path.line_to((50.0, 10.0));
    path.line_to((50.0, 80.0));
    path.line_to((10.0, 80.0));
    path.close_path();
    let estimated_length = path_length(&path);
    GlyphStroke {
        path,
        estimated_length,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/glyph/library.rs"]
mod tests;
