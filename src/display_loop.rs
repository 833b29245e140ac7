//! Per-frame redraw loop for the graphical view.
//!
//! The loop mirrors an animation-frame callback chain: a redraw is requested,
//! the host runs it on its next display frame, and the redraw requests the
//! following one only if the graphical view is still on screen.
//!
//! # States
//!
//! | State | Meaning |
//! |-------|---------|
//! | [`LoopState::Hidden`] | Graphical view not shown, nothing scheduled |
//! | [`LoopState::Active`] | One redraw pending per display frame |
//!
//! `activate()` moves Hidden to Active. Each `run_frame()` either keeps the
//! loop Active (view still visible) or drops it back to Hidden. At most one
//! redraw is ever pending, so activating twice in quick succession cannot
//! start a second chain.

/// Redraw loop state.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum LoopState {
    #[default]
    Hidden,
    Active,
}

/// Cooperative redraw scheduler, ticked once per host display frame.
#[derive(Debug, Default)]
pub struct DisplayLoop {
    state: LoopState,
    /// A redraw is requested for the next display frame.
    pending: bool,
    /// Redraws run since startup.
    frames_drawn: u64,
}

impl DisplayLoop {
    pub const fn new() -> Self {
        Self {
            state: LoopState::Hidden,
            pending: false,
            frames_drawn: 0,
        }
    }

    /// Enter Active and schedule the first redraw.
    pub fn activate(&mut self) {
        self.state = LoopState::Active;
        self.pending = true;
    }

    /// Run the pending redraw, if any, for this display frame.
    ///
    /// `graphics_visible` is checked after `redraw` returns: when true the next
    /// redraw is scheduled, otherwise the loop stops. Returns whether a redraw
    /// ran.
    pub fn run_frame<F>(
        &mut self,
        graphics_visible: bool,
        redraw: F,
    ) -> bool
    where
        F: FnOnce(),
    {
        if !self.pending {
            return false;
        }
        self.pending = false;

        redraw();
        self.frames_drawn = self.frames_drawn.wrapping_add(1);

        if graphics_visible {
            self.pending = true;
        } else {
            self.state = LoopState::Hidden;
        }
        true
    }

    #[inline]
    pub const fn state(&self) -> LoopState { self.state }

    /// Whether a redraw is requested for the next frame.
    #[inline]
    pub const fn is_scheduled(&self) -> bool { self.pending }

    #[inline]
    pub const fn frames_drawn(&self) -> u64 { self.frames_drawn }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_hidden() {
        let display_loop = DisplayLoop::new();
        assert_eq!(display_loop.state(), LoopState::Hidden);
        assert!(!display_loop.is_scheduled());
        assert_eq!(display_loop.frames_drawn(), 0);
    }

    #[test]
    fn test_hidden_frame_does_not_redraw() {
        let mut display_loop = DisplayLoop::new();
        let mut redraws = 0;
        assert!(!display_loop.run_frame(true, || redraws += 1));
        assert_eq!(redraws, 0);
    }

    #[test]
    fn test_active_loop_reschedules_while_visible() {
        let mut display_loop = DisplayLoop::new();
        display_loop.activate();
        assert_eq!(display_loop.state(), LoopState::Active);
        assert!(display_loop.is_scheduled());

        let mut redraws = 0;
        for _ in 0..3 {
            assert!(display_loop.run_frame(true, || redraws += 1));
            assert!(display_loop.is_scheduled());
        }
        assert_eq!(redraws, 3);
        assert_eq!(display_loop.frames_drawn(), 3);
    }

    #[test]
    fn test_loop_stops_when_view_hidden() {
        let mut display_loop = DisplayLoop::new();
        display_loop.activate();

        let mut redraws = 0;
        // Pending redraw still runs once, then the chain ends
        assert!(display_loop.run_frame(false, || redraws += 1));
        assert_eq!(display_loop.state(), LoopState::Hidden);
        assert!(!display_loop.is_scheduled());

        assert!(!display_loop.run_frame(false, || redraws += 1));
        assert_eq!(redraws, 1);
    }

    #[test]
    fn test_double_activate_keeps_single_chain() {
        let mut display_loop = DisplayLoop::new();
        display_loop.activate();
        display_loop.activate();

        let mut redraws = 0;
        assert!(display_loop.run_frame(true, || redraws += 1));
        assert_eq!(redraws, 1);
        assert!(display_loop.is_scheduled());
    }

    #[test]
    fn test_reactivate_after_stop() {
        let mut display_loop = DisplayLoop::new();
        display_loop.activate();
        display_loop.run_frame(false, || {});
        assert_eq!(display_loop.state(), LoopState::Hidden);

        display_loop.activate();
        assert!(display_loop.run_frame(true, || {}));
        assert_eq!(display_loop.state(), LoopState::Active);
        assert_eq!(display_loop.frames_drawn(), 2);
    }
}
