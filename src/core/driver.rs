//! Frame-driven loop around the sequencer
//!
//! [`AnimationLoop`] owns the wall-clock start reference and the pending frame
//! request for one slide instance. The host supplies a [`FrameScheduler`]
//! (the browser's `requestAnimationFrame` in production) and forwards each
//! frame timestamp to [`AnimationLoop::on_frame`].

use super::sequencer::{SequencerState, compute_state};
use super::timeline::{STEPS, TOTAL_LOOP_MS, validate};

/// Host facility for per-frame callbacks
pub trait FrameScheduler {
    type Handle: Copy;

    /// Ask for one more frame. `None` when the host cannot schedule frames.
    fn request_frame(&mut self) -> Option<Self::Handle>;

    /// Release a frame request that has not fired yet
    fn cancel_frame(&mut self, handle: Self::Handle);
}

/// Whether the user asked the platform to minimise motion
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MotionPreference {
    #[default]
    Full,
    Reduced,
}

impl MotionPreference {
    pub fn from_reduced(reduced: bool) -> Self {
        if reduced {
            MotionPreference::Reduced
        } else {
            MotionPreference::Full
        }
    }
}

/// Lifecycle of an [`AnimationLoop`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopStatus {
    /// Created, not mounted yet
    Idle,
    /// A frame request is outstanding
    Running,
    /// Reduced motion: static rendering, no frames requested
    Static,
    /// The host refused a frame request; static rendering
    Degraded,
    /// Torn down
    Stopped,
}

impl LoopStatus {
    /// Whether the slide should show its static rendering
    pub fn is_static(&self) -> bool {
        matches!(self, LoopStatus::Static | LoopStatus::Degraded)
    }
}

/// Per-instance animation driver
pub struct AnimationLoop<S: FrameScheduler> {
    scheduler: S,
    status: LoopStatus,
    start_ms: Option<f64>,
    pending: Option<S::Handle>,
    frames: u64,
}

impl<S: FrameScheduler> AnimationLoop<S> {
    pub fn new(scheduler: S) -> Self {
        debug_assert!(
            validate(&STEPS, TOTAL_LOOP_MS).is_ok(),
            "invalid demo timeline: {:?}",
            validate(&STEPS, TOTAL_LOOP_MS)
        );

        Self {
            scheduler,
            status: LoopStatus::Idle,
            start_ms: None,
            pending: None,
            frames: 0,
        }
    }

    /// Start the loop unless motion is reduced
    ///
    /// Calling `mount` on a loop that is already running or torn down does
    /// nothing.
    pub fn mount(&mut self, preference: MotionPreference) -> LoopStatus {
        if self.status != LoopStatus::Idle {
            return self.status;
        }

        match preference {
            MotionPreference::Reduced => self.status = LoopStatus::Static,
            MotionPreference::Full => self.request_next(),
        }
        self.status
    }

    /// Handle one frame; returns the snapshot to render, or `None` if the
    /// loop is not running
    ///
    /// The first frame fixes the start reference, so the animation always
    /// begins at elapsed time zero.
    pub fn on_frame(&mut self, now_ms: f64) -> Option<SequencerState> {
        if self.status != LoopStatus::Running {
            return None;
        }

        self.pending = None;
        let start_ms = *self.start_ms.get_or_insert(now_ms);
        let state = compute_state(now_ms - start_ms);
        self.frames += 1;

        self.request_next();
        Some(state)
    }

    /// Tear down: cancel any outstanding frame and refuse further frames
    pub fn stop(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel_frame(handle);
        }
        self.status = LoopStatus::Stopped;
    }

    pub fn status(&self) -> LoopStatus {
        self.status
    }

    /// Number of frames computed so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    fn request_next(&mut self) {
        match self.scheduler.request_frame() {
            Some(handle) => {
                self.pending = Some(handle);
                self.status = LoopStatus::Running;
            }
            None => self.status = LoopStatus::Degraded,
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::core::timeline::{StepName, TOTAL_LOOP_MS};

    /// Scheduler recording every request and cancellation
    #[derive(Debug, Default)]
    pub(crate) struct RecordingScheduler {
        pub next_handle: u32,
        pub requested: Vec<u32>,
        pub cancelled: Vec<u32>,
        pub refuse: bool,
    }

    impl FrameScheduler for RecordingScheduler {
        type Handle = u32;

        fn request_frame(&mut self) -> Option<u32> {
            if self.refuse {
                return None;
            }
            self.next_handle += 1;
            self.requested.push(self.next_handle);
            Some(self.next_handle)
        }

        fn cancel_frame(&mut self, handle: u32) {
            self.cancelled.push(handle);
        }
    }

    #[test]
    fn test_mount_requests_first_frame() {
        let mut anim = AnimationLoop::new(RecordingScheduler::default());
        assert_eq!(anim.status(), LoopStatus::Idle);
        assert_eq!(anim.mount(MotionPreference::Full), LoopStatus::Running);
        assert_eq!(anim.scheduler().requested, vec![1]);
    }

    #[test]
    fn test_first_frame_is_elapsed_zero() {
        let mut anim = AnimationLoop::new(RecordingScheduler::default());
        anim.mount(MotionPreference::Full);

        let state = anim.on_frame(123_456.0).unwrap();
        assert_eq!(state.current_step, Some(StepName::Location));
        assert_eq!(state.step_progress, 0.0);

        let state = anim.on_frame(123_456.0 + 3_000.0).unwrap();
        assert_eq!(state.typed_text, "co");
        assert_eq!(anim.frames(), 2);
    }

    #[test]
    fn test_each_frame_requests_next() {
        let mut anim = AnimationLoop::new(RecordingScheduler::default());
        anim.mount(MotionPreference::Full);
        for i in 0..5 {
            anim.on_frame(i as f64 * 16.0);
        }
        assert_eq!(anim.scheduler().requested.len(), 6);
    }

    #[test]
    fn test_loops_forever() {
        let mut anim = AnimationLoop::new(RecordingScheduler::default());
        anim.mount(MotionPreference::Full);
        let first = anim.on_frame(0.0).unwrap();
        let again = anim.on_frame(TOTAL_LOOP_MS as f64 * 3.0).unwrap();
        assert_eq!(first, again);
        assert_eq!(anim.status(), LoopStatus::Running);
    }

    #[test]
    fn test_reduced_motion_never_schedules() {
        let mut anim = AnimationLoop::new(RecordingScheduler::default());
        assert_eq!(anim.mount(MotionPreference::Reduced), LoopStatus::Static);
        assert!(anim.status().is_static());
        assert!(anim.on_frame(0.0).is_none());
        assert!(anim.scheduler().requested.is_empty());
        assert_eq!(anim.frames(), 0);
    }

    #[test]
    fn test_stop_cancels_pending_frame() {
        let mut anim = AnimationLoop::new(RecordingScheduler::default());
        anim.mount(MotionPreference::Full);
        anim.on_frame(0.0);
        anim.stop();

        assert_eq!(anim.scheduler().cancelled, vec![2]);
        assert_eq!(anim.status(), LoopStatus::Stopped);
        assert!(anim.on_frame(16.0).is_none());
        assert_eq!(anim.frames(), 1);
        assert_eq!(anim.scheduler().requested.len(), 2);
    }

    #[test]
    fn test_stop_twice_cancels_once() {
        let mut anim = AnimationLoop::new(RecordingScheduler::default());
        anim.mount(MotionPreference::Full);
        anim.stop();
        anim.stop();
        assert_eq!(anim.scheduler().cancelled, vec![1]);
    }

    #[test]
    fn test_mount_after_stop_is_ignored() {
        let mut anim = AnimationLoop::new(RecordingScheduler::default());
        anim.stop();
        assert_eq!(anim.mount(MotionPreference::Full), LoopStatus::Stopped);
        assert!(anim.scheduler().requested.is_empty());
    }

    #[test]
    fn test_refused_frame_degrades() {
        let mut anim = AnimationLoop::new(RecordingScheduler {
            refuse: true,
            ..Default::default()
        });
        assert_eq!(anim.mount(MotionPreference::Full), LoopStatus::Degraded);
        assert!(anim.status().is_static());
        assert!(anim.on_frame(0.0).is_none());
    }

    #[test]
    fn test_independent_instances() {
        let mut a = AnimationLoop::new(RecordingScheduler::default());
        let mut b = AnimationLoop::new(RecordingScheduler::default());
        a.mount(MotionPreference::Full);
        b.mount(MotionPreference::Full);

        a.on_frame(0.0);
        b.on_frame(5_000.0);
        let sa = a.on_frame(3_000.0).unwrap();
        let sb = b.on_frame(8_000.0).unwrap();
        assert_eq!(sa, sb);

        a.stop();
        assert!(b.on_frame(8_016.0).is_some());
    }

    #[test]
    fn test_motion_preference_from_flag() {
        assert_eq!(MotionPreference::from_reduced(true), MotionPreference::Reduced);
        assert_eq!(MotionPreference::from_reduced(false), MotionPreference::Full);
    }
}
