use crate::foundation::core::{MIN_DURATION_SECS, sanitize_duration};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Spacing rules applied by the [`Timeline`].
pub struct TimelineOpts {
    /// Shortest slot ever handed out, in seconds.
    #[serde(default = "default_min_duration")]
    pub min_duration: f64,
    /// Idle time appended after every slot, in seconds.
    #[serde(default = "default_gap")]
    pub gap: f64,
    /// Extra lead-in before slots that follow a narration beat, in seconds.
    #[serde(default = "default_breathing_room")]
    pub breathing_room: f64,
}

fn default_min_duration() -> f64 {
    MIN_DURATION_SECS
}

fn default_gap() -> f64 {
    0.1
}

fn default_breathing_room() -> f64 {
    0.3
}

impl Default for TimelineOpts {
    fn default() -> Self {
        Self {
            min_duration: default_min_duration(),
            gap: default_gap(),
            breathing_room: default_breathing_room(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
/// A request for a timeline slot.
pub struct SlotRequest {
    /// Desired duration in seconds; clamped to [`TimelineOpts::min_duration`].
    pub duration: f64,
    /// The slot moves the camera and must not overlap another camera move.
    pub needs_camera_move: bool,
    /// Insert [`TimelineOpts::breathing_room`] before the slot.
    pub add_narration_pause: bool,
}

impl SlotRequest {
    /// Plain slot of `duration` seconds.
    pub fn new(duration: f64) -> Self {
        Self {
            duration,
            ..Self::default()
        }
    }

    /// Mark the slot as a camera move.
    pub fn camera_move(mut self) -> Self {
        self.needs_camera_move = true;
        self
    }

    /// Request breathing room before the slot.
    pub fn narration_pause(mut self) -> Self {
        self.add_narration_pause = true;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// A reserved interval `[start, start + duration)`.
pub struct Slot {
    /// Start time in seconds.
    pub start: f64,
    /// Sanitized duration in seconds.
    pub duration: f64,
}

impl Slot {
    /// Exclusive end time.
    pub fn end(self) -> f64 {
        self.start + self.duration
    }
}

/// Greedy, strictly advancing slot allocator for one scene compilation.
///
/// Every slot starts at or after the end (plus gap) of the previous one, so slots never overlap.
/// Camera moves additionally wait for `camera_busy_until`.
#[derive(Clone, Debug)]
pub struct Timeline {
    cursor: f64,
    camera_busy_until: f64,
    opts: TimelineOpts,
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new(TimelineOpts::default())
    }
}

impl Timeline {
    /// Empty timeline starting at `0`.
    pub fn new(opts: TimelineOpts) -> Self {
        Self {
            cursor: 0.0,
            camera_busy_until: 0.0,
            opts: sanitize_opts(opts),
        }
    }

    /// Reserve the next slot and advance the cursor past it.
    pub fn reserve_slot(&mut self, req: SlotRequest) -> Slot {
        let mut start = if req.needs_camera_move {
            self.cursor.max(self.camera_busy_until)
        } else {
            self.cursor
        };
        if req.add_narration_pause {
            start += self.opts.breathing_room;
        }
        let duration = sanitize_duration(req.duration, self.opts.min_duration);
        let end = start + duration + self.opts.gap;

        self.cursor = end;
        if req.needs_camera_move {
            self.camera_busy_until = end;
        }
        tracing::debug!(
            start,
            duration,
            camera = req.needs_camera_move,
            "reserved timeline slot"
        );
        Slot { start, duration }
    }

    /// Time at which the next plain slot would start.
    pub fn cursor(&self) -> f64 {
        self.cursor
    }

    /// Time until which the camera is reserved.
    pub fn camera_busy_until(&self) -> f64 {
        self.camera_busy_until
    }

    /// Spacing rules in effect.
    pub fn opts(&self) -> TimelineOpts {
        self.opts
    }
}

fn sanitize_opts(opts: TimelineOpts) -> TimelineOpts {
    let non_negative = |v: f64, fallback: f64| {
        if v.is_finite() && v >= 0.0 {
            v
        } else {
            fallback
        }
    };
    TimelineOpts {
        min_duration: sanitize_duration(opts.min_duration, MIN_DURATION_SECS),
        gap: non_negative(opts.gap, default_gap()),
        breathing_room: non_negative(opts.breathing_room, default_breathing_room()),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/allocator.rs"]
mod tests;
