use std::{
    collections::{HashMap, VecDeque},
    sync::{
        Arc, RwLock,
        atomic::{AtomicU64, Ordering},
    },
};

use kurbo::{ParamCurveArclen as _, PathEl};

use crate::foundation::{
    core::{BezPath, MIN_DURATION_SECS, Point, sanitize_duration, unit_clamp},
    math::{angle_deg, lerp_point},
};

/// Samples taken per second of a path's own drawing time.
pub const DEFAULT_SAMPLE_RATE: u32 = 30;

const ARCLEN_ACCURACY: f64 = 1e-3;
const FLATTEN_TOLERANCE: f64 = 0.1;
const MAX_SAMPLES: usize = 20_000;

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A point sampled along a path at a fixed rate.
pub struct PathPoint {
    /// Horizontal position.
    pub x: f64,
    /// Vertical position.
    pub y: f64,
    /// Fraction of total arc length covered at this sample, in `[0, 1]`.
    pub progress: f64,
    /// Time offset within the path's drawing duration, in seconds.
    pub time: f64,
}

impl PathPoint {
    /// Sample position as a [`Point`].
    pub fn point(self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Total arc length of all segments of `path`. Move-to jumps do not count.
pub fn path_length(path: &BezPath) -> f64 {
    let len: f64 = path
        .segments()
        .map(|seg| seg.arclen(ARCLEN_ACCURACY))
        .sum();
    if len.is_finite() { len } else { 0.0 }
}

/// Sample `path` uniformly by arc length.
///
/// Produces `ceil(duration * rate) + 1` points (at least two). Degenerate paths (empty, zero
/// length or non-finite coordinates) produce no points.
pub fn sample_path(path: &BezPath, duration: f64, rate: u32) -> Vec<PathPoint> {
    let duration = sanitize_duration(duration, MIN_DURATION_SECS);
    let segments = flatten_segments(path);
    let total: f64 = segments.iter().map(|(a, b)| a.distance(*b)).sum();
    if !total.is_finite() || total <= f64::EPSILON {
        return Vec::new();
    }

    let n = ((duration * f64::from(rate.max(1))).ceil() as usize).clamp(1, MAX_SAMPLES);
    let mut out = Vec::with_capacity(n + 1);
    let mut seg_idx = 0usize;
    let mut walked = 0.0f64;
    for i in 0..=n {
        let frac = i as f64 / n as f64;
        let target = total * frac;
        while seg_idx + 1 < segments.len() {
            let (a, b) = segments[seg_idx];
            let len = a.distance(b);
            if walked + len >= target {
                break;
            }
            walked += len;
            seg_idx += 1;
        }
        let (a, b) = segments[seg_idx];
        let len = a.distance(b);
        let t = if len <= f64::EPSILON {
            0.0
        } else {
            unit_clamp((target - walked) / len)
        };
        let p = lerp_point(a, b, t);
        out.push(PathPoint {
            x: p.x,
            y: p.y,
            progress: frac,
            time: duration * frac,
        });
    }
    out
}

/// Flatten `path` into pen-down line segments.
fn flatten_segments(path: &BezPath) -> Vec<(Point, Point)> {
    let mut segments = Vec::new();
    let mut cur: Option<Point> = None;
    let mut subpath_start: Option<Point> = None;
    kurbo::flatten(path.iter(), FLATTEN_TOLERANCE, |el| match el {
        PathEl::MoveTo(p) => {
            cur = Some(p);
            subpath_start = Some(p);
        }
        PathEl::LineTo(p) => {
            if let Some(c) = cur
                && c.is_finite()
                && p.is_finite()
            {
                segments.push((c, p));
            }
            cur = Some(p);
        }
        PathEl::ClosePath => {
            if let (Some(c), Some(s)) = (cur, subpath_start)
                && c != s
                && c.is_finite()
                && s.is_finite()
            {
                segments.push((c, s));
            }
            cur = subpath_start;
        }
        // `flatten` only emits move/line/close elements.
        PathEl::QuadTo(..) | PathEl::CurveTo(..) => {}
    });
    segments
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// Position and travel direction found on a sampled path.
pub struct PathLocation {
    /// Interpolated position.
    pub position: Point,
    /// Tangent direction in degrees.
    pub angle_deg: f64,
}

/// Locate `progress` on a sampled point table.
///
/// The position is interpolated between neighbouring samples. The direction comes from the
/// nearest sample and its predecessor, or its successor when the nearest sample is the first.
pub fn locate(points: &[PathPoint], progress: f64) -> Option<PathLocation> {
    match points {
        [] => None,
        [only] => Some(PathLocation {
            position: only.point(),
            angle_deg: 0.0,
        }),
        _ => {
            let last = points.len() - 1;
            let f = unit_clamp(progress) * last as f64;
            let i = (f.floor() as usize).min(last - 1);
            let position = lerp_point(points[i].point(), points[i + 1].point(), f - i as f64);
            let nearest = (f.round() as usize).min(last);
            let (from, to) = if nearest == 0 {
                (points[0], points[1])
            } else {
                (points[nearest - 1], points[nearest])
            };
            Some(PathLocation {
                position,
                angle_deg: angle_deg(to.point() - from.point()),
            })
        }
    }
}

#[derive(Clone, Copy, Debug)]
/// Options for [`PathSampler`].
pub struct SamplerOpts {
    /// Samples per second of drawing time.
    pub sample_rate: u32,
    /// Maximum cached point tables; oldest entries are evicted first. `None` keeps everything.
    pub max_entries: Option<usize>,
}

impl Default for SamplerOpts {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            max_entries: None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
/// Cache counters reported by [`PathSampler::stats`].
pub struct SamplerStats {
    /// Point tables currently cached.
    pub entries: usize,
    /// Lookups served from the cache.
    pub hits: u64,
    /// Lookups that had to sample.
    pub misses: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct SampleKey {
    path: String,
    duration_bits: u64,
    rate: u32,
}

#[derive(Default)]
struct SampleCache {
    tables: HashMap<SampleKey, Arc<[PathPoint]>>,
    order: VecDeque<SampleKey>,
}

/// Memoizing path sampler.
///
/// Point tables are keyed by `(path data, duration, sample rate)` and never change once written,
/// so repeated lookups (scrubbing, replay) return identical tables.
pub struct PathSampler {
    opts: SamplerOpts,
    cache: RwLock<SampleCache>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl Default for PathSampler {
    fn default() -> Self {
        Self::new(SamplerOpts::default())
    }
}

impl std::fmt::Debug for PathSampler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PathSampler")
            .field("opts", &self.opts)
            .field("stats", &self.stats())
            .finish()
    }
}

impl PathSampler {
    /// Create an empty sampler.
    pub fn new(opts: SamplerOpts) -> Self {
        Self {
            opts: SamplerOpts {
                sample_rate: opts.sample_rate.max(1),
                max_entries: opts.max_entries,
            },
            cache: RwLock::new(SampleCache::default()),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Effective sampling options.
    pub fn opts(&self) -> SamplerOpts {
        self.opts
    }

    /// Point table for SVG path data `path_d` drawn over `duration` seconds.
    ///
    /// Unparseable or degenerate paths yield an empty table.
    pub fn points(&self, path_d: &str, duration: f64) -> Arc<[PathPoint]> {
        let duration = sanitize_duration(duration, MIN_DURATION_SECS);
        let key = SampleKey {
            path: path_d.to_owned(),
            duration_bits: duration.to_bits(),
            rate: self.opts.sample_rate,
        };

        {
            let cache = self.cache.read().unwrap_or_else(|e| e.into_inner());
            if let Some(points) = cache.tables.get(&key) {
                self.hits.fetch_add(1, Ordering::Relaxed);
                return Arc::clone(points);
            }
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let points: Arc<[PathPoint]> = match BezPath::from_svg(path_d) {
            Ok(path) => sample_path(&path, duration, self.opts.sample_rate).into(),
            Err(e) => {
                tracing::warn!(error = %e, "path data does not parse; hand tracking disabled for it");
                Arc::from(Vec::new())
            }
        };
        tracing::debug!(samples = points.len(), duration, "sampled path");

        let mut cache = self.cache.write().unwrap_or_else(|e| e.into_inner());
        if let Some(existing) = cache.tables.get(&key) {
            return Arc::clone(existing);
        }
        if let Some(max) = self.opts.max_entries {
            while cache.tables.len() >= max.max(1) {
                let Some(oldest) = cache.order.pop_front() else {
                    break;
                };
                cache.tables.remove(&oldest);
            }
        }
        cache.order.push_back(key.clone());
        cache.tables.insert(key, Arc::clone(&points));
        points
    }

    /// Current cache counters.
    pub fn stats(&self) -> SamplerStats {
        let entries = self
            .cache
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .tables
            .len();
        SamplerStats {
            entries,
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }

    /// Drop every cached table.
    pub fn clear(&self) {
        let mut cache = self.cache.write().unwrap_or_else(|e| e.into_inner());
        cache.tables.clear();
        cache.order.clear();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/sampler.rs"]
mod tests;
