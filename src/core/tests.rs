#[cfg(test)]
mod tests {
    use crate::core::driver::tests::RecordingScheduler;
    use crate::core::{
        AnimationLoop, LoopStatus, MotionPreference, STEPS, SlideProps, StepName, TOTAL_LOOP_MS,
        compute_state, cursor_frame, step,
    };

    /// Sample points every 10ms across one loop
    fn loop_samples() -> impl Iterator<Item = f64> {
        (0..TOTAL_LOOP_MS / 10).map(|i| (i * 10) as f64)
    }

    #[test]
    fn test_at_most_one_step_per_instant() {
        for t in loop_samples() {
            let matching = STEPS.iter().filter(|s| s.contains(t)).count();
            assert!(matching <= 1, "{t}ms matched {matching} steps");

            let state = compute_state(t);
            match state.current_step {
                Some(name) => assert!(step(name).contains(t)),
                None => assert_eq!(matching, 0),
            }
        }
    }

    #[test]
    fn test_compute_state_is_deterministic() {
        for t in loop_samples() {
            assert_eq!(compute_state(t), compute_state(t));
        }
    }

    #[test]
    fn test_state_repeats_every_loop() {
        let total = TOTAL_LOOP_MS as f64;
        for t in loop_samples() {
            assert_eq!(compute_state(t), compute_state(t + total), "{t}ms");
            assert_eq!(compute_state(t), compute_state(t + 5.0 * total), "{t}ms");
        }
    }

    #[test]
    fn test_progress_is_monotonic_within_step() {
        for s in STEPS.iter() {
            let mut last = -1.0;
            for offset in 0..s.duration_ms {
                let state = compute_state((s.start_offset_ms + offset) as f64);
                assert_eq!(state.current_step, Some(s.name));
                assert!((0.0..=1.0).contains(&state.step_progress));
                assert!(state.step_progress > last);
                last = state.step_progress;
            }
        }
    }

    #[test]
    fn test_progress_at_step_boundaries() {
        for s in STEPS.iter() {
            let at_start = compute_state(s.start_offset_ms as f64);
            assert_eq!(at_start.current_step, Some(s.name));
            assert_eq!(at_start.step_progress, 0.0);

            let near_end = compute_state(s.end_ms() as f64 - 0.01);
            assert_eq!(near_end.current_step, Some(s.name));
            assert!(near_end.step_progress > 0.999);
        }
    }

    #[test]
    fn test_typing_scenario() {
        let search = step(StepName::Search);
        assert_eq!((search.start_offset_ms, search.end_ms()), (2_000, 4_000));
        assert_eq!(compute_state(3_000.0).typed_text, "co");
    }

    #[test]
    fn test_location_click_pulse() {
        let location = step(StepName::Location);
        for offset in 0..location.duration_ms {
            let state = compute_state((location.start_offset_ms + offset) as f64);
            let p = state.step_progress;
            assert_eq!(state.is_clicking, p > 0.3 && p < 0.35, "progress {p}");
        }
    }

    #[test]
    fn test_clicks_land_on_target() {
        let mut clicked = Vec::new();
        for i in 0..TOTAL_LOOP_MS {
            let state = compute_state(i as f64);
            let Some(name) = state.current_step.filter(|_| state.is_clicking) else {
                continue;
            };
            let frame = cursor_frame(&state);
            let target = step(name).cursor;
            let dist = (frame.x - target.x).hypot(frame.y - target.y);
            assert!(dist < 2.0, "{name} clicks {dist:.1}px from its target at {i}ms");
            if !clicked.contains(&name) {
                clicked.push(name);
            }
        }
        assert_eq!(
            clicked,
            vec![StepName::Location, StepName::Search, StepName::Filter, StepName::Map]
        );
    }

    #[test]
    fn test_cursor_hidden_exactly_when_idle_or_reset() {
        for t in loop_samples() {
            let state = compute_state(t);
            let visible = cursor_frame(&state).visible;
            let expected = !matches!(state.current_step, None | Some(StepName::Reset));
            assert_eq!(visible, expected, "{t}ms");
        }
    }

    #[test]
    fn test_reduced_motion_renders_resting_screen_without_frames() {
        let mut anim = AnimationLoop::new(RecordingScheduler::default());
        let status = anim.mount(MotionPreference::Reduced);

        assert!(status.is_static());
        assert!(anim.scheduler().requested.is_empty());
        assert!(!SlideProps::resting().cursor.visible);
    }

    #[test]
    fn test_no_computation_after_teardown() {
        let mut anim = AnimationLoop::new(RecordingScheduler::default());
        anim.mount(MotionPreference::Full);
        for i in 0..10 {
            anim.on_frame(i as f64 * 16.7);
        }
        anim.stop();
        let frames = anim.frames();
        let requested = anim.scheduler().requested.len();

        for i in 10..20 {
            assert!(anim.on_frame(i as f64 * 16.7).is_none());
        }
        assert_eq!(anim.status(), LoopStatus::Stopped);
        assert_eq!(anim.frames(), frames);
        assert_eq!(anim.scheduler().requested.len(), requested);
        assert_eq!(anim.scheduler().cancelled.len(), 1);
    }
}
