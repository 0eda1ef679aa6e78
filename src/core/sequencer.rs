//! Sequencer for the Discover demo slide
//!
//! `compute_state` turns elapsed time into a [`SequencerState`] snapshot. It is
//! a pure function: the same elapsed time always yields the same snapshot, and
//! time wraps every [`TOTAL_LOOP_MS`].
//!
//! Per-step behaviour is described by [`StepRules`], a small table of
//! progress gates. The thresholds are tuned by eye for the demo and carry no
//! further meaning.

use super::timeline::{FILTER_LABEL, SEARCH_QUERY, STEPS, StepName, TOTAL_LOOP_MS, TimelineStep};

/// Characters typed per unit of progress, relative to the query length
pub const TYPING_SPEED: f64 = 1.5;

/// A condition on step progress
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Gate {
    Never,
    Always,
    /// Open once progress is strictly greater than the threshold
    After(f64),
    /// Open while progress is strictly inside `(from, to)`
    Within(f64, f64),
}

impl Gate {
    pub fn is_open(&self, progress: f64) -> bool {
        match *self {
            Gate::Never => false,
            Gate::Always => true,
            Gate::After(threshold) => progress > threshold,
            Gate::Within(from, to) => progress > from && progress < to,
        }
    }
}

/// Derivation rules for one step
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepRules {
    pub click: Gate,
    /// Progress at which typing starts, if the step types the query
    pub typing_delay: Option<f64>,
    pub filter: Gate,
    pub card: Gate,
    pub map_zoom: Gate,
    pub insight: Gate,
}

impl StepRules {
    const NONE: StepRules = StepRules {
        click: Gate::Never,
        typing_delay: None,
        filter: Gate::Never,
        card: Gate::Never,
        map_zoom: Gate::Never,
        insight: Gate::Never,
    };

    /// Rules for a named step
    pub const fn for_step(name: StepName) -> StepRules {
        match name {
            StepName::Location => StepRules {
                click: Gate::Within(0.3, 0.35),
                ..Self::NONE
            },
            StepName::Search => StepRules {
                click: Gate::Within(0.05, 0.1),
                typing_delay: Some(0.2),
                ..Self::NONE
            },
            StepName::Filter => StepRules {
                click: Gate::Within(0.3, 0.35),
                filter: Gate::After(0.35),
                ..Self::NONE
            },
            StepName::Result => StepRules {
                filter: Gate::Always,
                card: Gate::After(0.4),
                ..Self::NONE
            },
            StepName::Map => StepRules {
                click: Gate::Within(0.3, 0.35),
                filter: Gate::Always,
                map_zoom: Gate::After(0.35),
                ..Self::NONE
            },
            StepName::Insight => StepRules {
                filter: Gate::Always,
                map_zoom: Gate::Always,
                insight: Gate::Within(0.2, 0.8),
                ..Self::NONE
            },
            StepName::Reset => Self::NONE,
        }
    }
}

/// Snapshot of the demo UI at one instant
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SequencerState {
    /// Active step, `None` while idle
    pub current_step: Option<StepName>,
    /// Position within the active step, in [0, 1]
    pub step_progress: f64,
    pub is_clicking: bool,
    pub typed_text: String,
    pub active_filter_label: String,
    pub is_card_highlighted: bool,
    pub is_map_zoomed: bool,
    pub is_insight_highlighted: bool,
}

impl SequencerState {
    /// Idle snapshot: no active step, everything at defaults
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn is_idle(&self) -> bool {
        self.current_step.is_none()
    }
}

/// Wrap elapsed time into one loop
pub fn loop_time(elapsed_ms: f64) -> f64 {
    elapsed_ms.rem_euclid(TOTAL_LOOP_MS as f64)
}

/// Step whose window contains `loop_time`, if any
pub fn active_step(loop_time: f64) -> Option<&'static TimelineStep> {
    STEPS.iter().find(|step| step.contains(loop_time))
}

/// Prefix of the search query visible at `progress` when typing starts at `delay`
pub fn typed_prefix(progress: f64, delay: f64) -> String {
    let letters = SEARCH_QUERY.chars().count();
    let typed = ((progress - delay).max(0.0) * letters as f64 * TYPING_SPEED).floor() as usize;
    SEARCH_QUERY.chars().take(typed.min(letters)).collect()
}

/// Compute the UI snapshot for `elapsed_ms` since the animation started
pub fn compute_state(elapsed_ms: f64) -> SequencerState {
    let loop_time = loop_time(elapsed_ms);

    let Some(step) = active_step(loop_time) else {
        return SequencerState::idle();
    };

    let progress = ((loop_time - step.start_offset_ms as f64) / step.duration_ms as f64)
        .clamp(0.0, 1.0);
    let rules = StepRules::for_step(step.name);

    SequencerState {
        current_step: Some(step.name),
        step_progress: progress,
        is_clicking: rules.click.is_open(progress),
        typed_text: rules
            .typing_delay
            .map(|delay| typed_prefix(progress, delay))
            .unwrap_or_default(),
        active_filter_label: if rules.filter.is_open(progress) {
            FILTER_LABEL.to_string()
        } else {
            String::new()
        },
        is_card_highlighted: rules.card.is_open(progress),
        is_map_zoomed: rules.map_zoom.is_open(progress),
        is_insight_highlighted: rules.insight.is_open(progress),
    }
}
