//! Mapping from sequencer snapshots to what the Discover slide draws
//!
//! Everything here is a pure function of a [`SequencerState`] and the static
//! timeline table, so the Leptos components only bind the results to DOM
//! attributes.

use super::sequencer::{Gate, SequencerState, StepRules};
use super::timeline::{
    CURSOR_ORIGIN, CursorTarget, FILTER_LABEL, SEARCH_QUERY, StepName, TimelineStep, next_step,
    previous_cursor, previous_step, step,
};

/// Fraction of a step spent travelling to its cursor target when the step
/// never clicks
pub const CURSOR_TRAVEL: f64 = 0.4;

/// How long before a step ends the cursor sets off towards the next target
pub const CURSOR_LEAD_MS: f64 = 400.0;

/// Scale applied to the cursor while it is pressed
pub const PRESSED_SCALE: f64 = 0.85;

/// Cursor placement for one frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorFrame {
    pub x: f64,
    pub y: f64,
    pub visible: bool,
    pub pressed: bool,
}

impl CursorFrame {
    /// Scale for the click pulse
    pub fn scale(&self) -> f64 {
        if self.pressed { PRESSED_SCALE } else { 1.0 }
    }

    /// Inline CSS transform positioning the cursor in slide coordinates
    pub fn transform(&self) -> String {
        format!(
            "translate({:.1}px, {:.1}px) scale({})",
            self.x,
            self.y,
            self.scale()
        )
    }
}

/// Progress by which the cursor rests on the step's target
///
/// Steps that click must arrive before the click gate opens.
pub fn arrival_progress(name: StepName) -> f64 {
    match StepRules::for_step(name).click {
        Gate::Within(from, _) | Gate::After(from) => from,
        Gate::Always => 0.0,
        Gate::Never => CURSOR_TRAVEL,
    }
}

fn arrival_ms(step: &TimelineStep) -> f64 {
    arrival_progress(step.name) * step.duration_ms as f64
}

/// Tail of `step` during which the cursor already heads for the next target
fn lead_ms(step: &TimelineStep) -> f64 {
    if next_step(step.name).is_none() {
        return 0.0;
    }
    CURSOR_LEAD_MS
        .min(step.duration_ms as f64 - arrival_ms(step))
        .max(0.0)
}

/// Cursor position `elapsed_ms` into the leg that ends on `to`'s target
///
/// A leg starts in the tail of the previous step and ends at `to`'s arrival.
fn leg_position(to: &TimelineStep, elapsed_ms: f64) -> CursorTarget {
    let length = previous_step(to.name).map_or(0.0, lead_ms) + arrival_ms(to);
    let t = if length > 0.0 {
        (elapsed_ms / length).clamp(0.0, 1.0)
    } else {
        1.0
    };
    previous_cursor(to.name).lerp(&to.cursor, to.easing.apply(t))
}

/// Cursor position and visibility for a snapshot
///
/// The cursor leaves each target [`CURSOR_LEAD_MS`] before its step ends and
/// reaches the next target by [`arrival_progress`] of the next step, so every
/// click lands on its target.
pub fn cursor_frame(state: &SequencerState) -> CursorFrame {
    let Some(name) = state.current_step else {
        return CursorFrame {
            x: CURSOR_ORIGIN.x,
            y: CURSOR_ORIGIN.y,
            visible: false,
            pressed: false,
        };
    };

    let current = step(name);
    let duration = current.duration_ms as f64;
    let into_step = state.step_progress * duration;
    let lead_from = duration - lead_ms(current);

    let CursorTarget { x, y } = match next_step(name) {
        Some(next) if into_step > lead_from => leg_position(next, into_step - lead_from),
        _ => {
            let lead_in = previous_step(name).map_or(0.0, lead_ms);
            leg_position(current, lead_in + into_step)
        }
    };

    CursorFrame {
        x,
        y,
        visible: name != StepName::Reset,
        pressed: state.is_clicking,
    }
}

/// Bindings for the mocked product screen
#[derive(Clone, Debug, PartialEq)]
pub struct SlideProps {
    pub search_text: String,
    pub show_caret: bool,
    pub filter_active: bool,
    pub filter_label: &'static str,
    pub card_highlighted: bool,
    pub map_zoomed: bool,
    pub insight_highlighted: bool,
    /// Opacity of the whole screen, fading out during `reset`
    pub opacity: f64,
    pub cursor: CursorFrame,
}

impl SlideProps {
    pub fn from_state(state: &SequencerState) -> Self {
        let search_text = match state.current_step {
            Some(StepName::Search) => state.typed_text.clone(),
            // the field keeps its query once typed
            Some(StepName::Filter | StepName::Result | StepName::Map | StepName::Insight) => {
                SEARCH_QUERY.to_string()
            }
            _ => String::new(),
        };
        let opacity = match state.current_step {
            Some(StepName::Reset) => 1.0 - state.step_progress,
            _ => 1.0,
        };

        Self {
            search_text,
            show_caret: state.current_step == Some(StepName::Search),
            filter_active: !state.active_filter_label.is_empty(),
            filter_label: FILTER_LABEL,
            card_highlighted: state.is_card_highlighted,
            map_zoomed: state.is_map_zoomed,
            insight_highlighted: state.is_insight_highlighted,
            opacity,
            cursor: cursor_frame(state),
        }
    }

    /// Finished screen shown when motion is reduced or frames are unavailable
    pub fn resting() -> Self {
        Self {
            search_text: SEARCH_QUERY.to_string(),
            show_caret: false,
            filter_active: true,
            filter_label: FILTER_LABEL,
            card_highlighted: true,
            map_zoomed: true,
            insight_highlighted: true,
            opacity: 1.0,
            cursor: CursorFrame {
                x: CURSOR_ORIGIN.x,
                y: CURSOR_ORIGIN.y,
                visible: false,
                pressed: false,
            },
        }
    }

    pub fn filter_class(&self) -> &'static str {
        if self.filter_active {
            "discover-chip discover-chip-active"
        } else {
            "discover-chip"
        }
    }

    pub fn card_class(&self) -> &'static str {
        if self.card_highlighted {
            "discover-card discover-card-highlighted"
        } else {
            "discover-card"
        }
    }

    pub fn map_class(&self) -> &'static str {
        if self.map_zoomed {
            "discover-map discover-map-zoomed"
        } else {
            "discover-map"
        }
    }

    pub fn insight_class(&self) -> &'static str {
        if self.insight_highlighted {
            "discover-insight discover-insight-visible"
        } else {
            "discover-insight"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sequencer::compute_state;
    use crate::core::timeline::STEPS;

    #[test]
    fn test_cursor_hidden_when_idle() {
        let frame = cursor_frame(&compute_state(15_500.0));
        assert!(!frame.visible);
    }

    #[test]
    fn test_cursor_hidden_during_reset() {
        let frame = cursor_frame(&compute_state(14_200.0));
        assert!(!frame.visible);
    }

    #[test]
    fn test_cursor_starts_at_origin() {
        let frame = cursor_frame(&compute_state(0.0));
        assert!((frame.x - CURSOR_ORIGIN.x).abs() < 1e-9);
        assert!((frame.y - CURSOR_ORIGIN.y).abs() < 1e-9);
        assert!(frame.visible);
    }

    #[test]
    fn test_cursor_leaves_before_step_ends() {
        let location = step(StepName::Location).cursor;
        // location's lead starts at 1600ms
        let resting = cursor_frame(&compute_state(1_500.0));
        assert_eq!((resting.x, resting.y), (location.x, location.y));

        let leaving = cursor_frame(&compute_state(1_900.0));
        assert!(leaving.x > location.x);
    }

    #[test]
    fn test_cursor_continuous_across_steps() {
        for s in STEPS.iter().skip(1).filter(|s| s.name != StepName::Reset) {
            let before = cursor_frame(&compute_state(s.start_offset_ms as f64 - 0.01));
            let after = cursor_frame(&compute_state(s.start_offset_ms as f64));
            let dist = (before.x - after.x).hypot(before.y - after.y);
            assert!(dist < 1.0, "jump of {dist:.2}px into {}", s.name);
        }
    }

    #[test]
    fn test_arrival_before_click() {
        assert_eq!(arrival_progress(StepName::Search), 0.05);
        assert_eq!(arrival_progress(StepName::Map), 0.3);
        assert_eq!(arrival_progress(StepName::Result), CURSOR_TRAVEL);
    }

    #[test]
    fn test_cursor_rests_on_target_after_travel() {
        for s in STEPS.iter().filter(|s| s.name != StepName::Reset) {
            let t = s.start_offset_ms as f64 + s.duration_ms as f64 * 0.5;
            let frame = cursor_frame(&compute_state(t));
            assert_eq!((frame.x, frame.y), (s.cursor.x, s.cursor.y), "{}", s.name);
        }
    }

    #[test]
    fn test_cursor_moves_smoothly() {
        // search's leg runs from 1600ms to 2100ms
        let frame = cursor_frame(&compute_state(2_000.0));
        let from = step(StepName::Location).cursor;
        let to = step(StepName::Search).cursor;
        assert!(frame.x > from.x && frame.x < to.x);
    }

    #[test]
    fn test_pressed_follows_click() {
        let frame = cursor_frame(&compute_state(650.0));
        assert!(frame.pressed);
        assert_eq!(frame.scale(), PRESSED_SCALE);
        assert!(frame.transform().ends_with("scale(0.85)"));
    }

    #[test]
    fn test_search_text_keeps_query() {
        assert_eq!(SlideProps::from_state(&compute_state(3_000.0)).search_text, "co");
        assert_eq!(
            SlideProps::from_state(&compute_state(7_000.0)).search_text,
            SEARCH_QUERY
        );
        assert_eq!(SlideProps::from_state(&compute_state(500.0)).search_text, "");
    }

    #[test]
    fn test_reset_fades_out() {
        let props = SlideProps::from_state(&compute_state(14_750.0));
        assert!((props.opacity - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_classes() {
        let props = SlideProps::from_state(&compute_state(7_500.0));
        assert_eq!(props.filter_class(), "discover-chip discover-chip-active");
        assert_eq!(props.card_class(), "discover-card discover-card-highlighted");
        assert_eq!(props.map_class(), "discover-map");
        assert_eq!(props.insight_class(), "discover-insight");
    }

    #[test]
    fn test_resting_screen() {
        let props = SlideProps::resting();
        assert_eq!(props.search_text, SEARCH_QUERY);
        assert!(props.filter_active && props.card_highlighted && props.map_zoomed);
        assert!(!props.cursor.visible);
    }
}
