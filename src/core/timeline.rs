//! Timeline configuration for the Discover demo slide
//!
//! A fixed table of named steps, each with a time window inside one loop,
//! a cursor target and an easing curve. The table is static data; `validate`
//! checks its invariants in tests, and debug builds assert it whenever an
//! [`AnimationLoop`](super::AnimationLoop) is created.

use derive_more::Display;

/// Length of one full loop of the demo animation
pub const TOTAL_LOOP_MS: u32 = 16_000;

/// Query the simulated user types into the search field
pub const SEARCH_QUERY: &str = "coffee";

/// Label of the filter chip the simulated user activates
pub const FILTER_LABEL: &str = "Trips";

/// Where the cursor rests before the first step and while idle
pub const CURSOR_ORIGIN: CursorTarget = CursorTarget::new(40.0, 300.0);

/// Named phase of the demo loop
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
pub enum StepName {
    #[display("location")]
    Location,
    #[display("search")]
    Search,
    #[display("filter")]
    Filter,
    #[display("result")]
    Result,
    #[display("map")]
    Map,
    #[display("insight")]
    Insight,
    #[display("reset")]
    Reset,
}

/// Coordinate in the slide's local space (pixels from its top-left corner)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorTarget {
    pub x: f64,
    pub y: f64,
}

impl CursorTarget {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Linear interpolation towards `other`, `t` in [0, 1]
    pub fn lerp(&self, other: &CursorTarget, t: f64) -> CursorTarget {
        CursorTarget {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }
}

/// Easing curve applied to cursor travel
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Easing {
    Linear,
    EaseOut,
    EaseInOut,
}

impl Easing {
    /// Map linear progress `t` in [0, 1] onto the curve
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            // cubic ease-out
            Easing::EaseOut => 1.0 - (1.0 - t).powi(3),
            // cubic ease-in-out
            Easing::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

/// One step of the timeline
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimelineStep {
    pub name: StepName,
    pub start_offset_ms: u32,
    pub duration_ms: u32,
    pub cursor: CursorTarget,
    pub easing: Easing,
}

impl TimelineStep {
    const fn new(
        name: StepName,
        start_offset_ms: u32,
        duration_ms: u32,
        cursor: CursorTarget,
        easing: Easing,
    ) -> Self {
        Self {
            name,
            start_offset_ms,
            duration_ms,
            cursor,
            easing,
        }
    }

    /// Exclusive end of the step window
    pub fn end_ms(&self) -> u32 {
        self.start_offset_ms + self.duration_ms
    }

    /// Whether `loop_time` falls in `[start, end)`
    pub fn contains(&self, loop_time: f64) -> bool {
        loop_time >= self.start_offset_ms as f64 && loop_time < self.end_ms() as f64
    }
}

/// The demo timeline, ordered by start offset
pub const STEPS: [TimelineStep; 7] = [
    TimelineStep::new(
        StepName::Location,
        0,
        2_000,
        CursorTarget::new(120.0, 48.0),
        Easing::EaseOut,
    ),
    TimelineStep::new(
        StepName::Search,
        2_000,
        2_000,
        CursorTarget::new(260.0, 48.0),
        Easing::EaseInOut,
    ),
    TimelineStep::new(
        StepName::Filter,
        4_000,
        2_000,
        CursorTarget::new(96.0, 112.0),
        Easing::EaseInOut,
    ),
    TimelineStep::new(
        StepName::Result,
        6_000,
        2_500,
        CursorTarget::new(200.0, 220.0),
        Easing::EaseOut,
    ),
    TimelineStep::new(
        StepName::Map,
        8_500,
        2_500,
        CursorTarget::new(470.0, 200.0),
        Easing::EaseInOut,
    ),
    TimelineStep::new(
        StepName::Insight,
        11_000,
        3_000,
        CursorTarget::new(470.0, 320.0),
        Easing::EaseOut,
    ),
    TimelineStep::new(
        StepName::Reset,
        14_000,
        1_000,
        CursorTarget::new(300.0, 360.0),
        Easing::Linear,
    ),
];

/// Look up a step by name
pub fn step(name: StepName) -> &'static TimelineStep {
    // every StepName has exactly one entry in STEPS
    match name {
        StepName::Location => &STEPS[0],
        StepName::Search => &STEPS[1],
        StepName::Filter => &STEPS[2],
        StepName::Result => &STEPS[3],
        StepName::Map => &STEPS[4],
        StepName::Insight => &STEPS[5],
        StepName::Reset => &STEPS[6],
    }
}

/// Step before `name` in the table, `None` for the first step
pub fn previous_step(name: StepName) -> Option<&'static TimelineStep> {
    let index = STEPS.iter().position(|s| s.name == name)?;
    STEPS.get(index.checked_sub(1)?)
}

/// Step after `name` in the table, `None` for the last step
pub fn next_step(name: StepName) -> Option<&'static TimelineStep> {
    let index = STEPS.iter().position(|s| s.name == name)?;
    STEPS.get(index + 1)
}

/// Cursor target of the step preceding `name`, or the origin for the first step
pub fn previous_cursor(name: StepName) -> CursorTarget {
    previous_step(name).map_or(CURSOR_ORIGIN, |s| s.cursor)
}

/// Timeline invariant violations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimelineError {
    #[error("timeline has no steps")]
    Empty,

    #[error("step `{0}` has zero duration")]
    ZeroDuration(StepName),

    #[error("step `{step}` starts at {start_ms}ms, expected {expected_ms}ms")]
    NotContiguous {
        step: StepName,
        start_ms: u32,
        expected_ms: u32,
    },

    #[error("step `{step}` ends at {end_ms}ms, past the {total_ms}ms loop")]
    PastLoopEnd {
        step: StepName,
        end_ms: u32,
        total_ms: u32,
    },
}

/// Check that `steps` are non-empty, contiguous from 0, non-overlapping and
/// fit inside a loop of `total_ms`
pub fn validate(steps: &[TimelineStep], total_ms: u32) -> Result<(), TimelineError> {
    if steps.is_empty() {
        return Err(TimelineError::Empty);
    }

    let mut expected_ms = 0;
    for step in steps {
        if step.duration_ms == 0 {
            return Err(TimelineError::ZeroDuration(step.name));
        }
        if step.start_offset_ms != expected_ms {
            return Err(TimelineError::NotContiguous {
                step: step.name,
                start_ms: step.start_offset_ms,
                expected_ms,
            });
        }
        if step.end_ms() > total_ms {
            return Err(TimelineError::PastLoopEnd {
                step: step.name,
                end_ms: step.end_ms(),
                total_ms,
            });
        }
        expected_ms = step.end_ms();
    }

    Ok(())
}
