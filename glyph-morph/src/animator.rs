use std::time::Duration;

use tracing::{debug, trace};

use crate::easing::Easing;
use crate::glyph::{COORDS, Template};
use crate::state::MorphState;

pub const DEFAULT_DURATION: Duration = Duration::from_millis(250);

/// One synchronized group animation: every channel shares a single timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    from: Template,
    to: Template,
    duration: Duration,
    elapsed: Duration,
    easing: Easing,
}

impl Transition {
    pub fn new(from: Template, to: Template, duration: Duration, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: Duration::ZERO,
            easing,
        }
    }

    pub fn start(&self) -> &Template {
        &self.from
    }

    pub fn end(&self) -> &Template {
        &self.to
    }

    /// Linear progress in `[0.0, 1.0]`, before easing.
    pub fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }

        (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    fn advance(&mut self, dt: Duration) {
        self.elapsed = self.elapsed.saturating_add(dt).min(self.duration);
    }

    /// All twelve channels at the current instant. Exactly `to` once finished.
    pub fn sample(&self) -> Template {
        if self.is_finished() {
            return self.to;
        }

        let t = self.easing.apply(self.progress());
        let mut out = [0.0; COORDS];

        for (i, slot) in out.iter_mut().enumerate() {
            *slot = self.from[i] + (self.to[i] - self.from[i]) * t;
        }

        out
    }
}

/// Whether a transition is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Transitioning,
}

/// Drives a [`MorphState`] between its two templates.
///
/// The host calls [`ToggleAnimator::tick`] once per frame; nothing here blocks.
#[derive(Debug, Clone)]
pub struct ToggleAnimator {
    duration: Duration,
    easing: Easing,
    active: Option<Transition>,
}

impl Default for ToggleAnimator {
    fn default() -> Self {
        Self::new(DEFAULT_DURATION, Easing::Linear)
    }
}

impl ToggleAnimator {
    pub fn new(duration: Duration, easing: Easing) -> Self {
        Self {
            duration,
            easing,
            active: None,
        }
    }

    /// Flips the checked flag now and retargets every coordinate.
    ///
    /// An in-flight transition is replaced, starting from the live values.
    pub fn set_checked(&mut self, state: &mut MorphState, enable: bool, animated: bool) {
        state.set_checked_flag(enable);

        if state.frame().is_none() {
            debug!(enable, "toggled before first layout, glyph stays degenerate");
        }

        let to = *state.target(enable);

        if !animated || self.duration.is_zero() {
            self.active = None;
            state.apply(&to);
            return;
        }

        let from = *state.points();
        debug!(enable, duration = ?self.duration, retarget = self.active.is_some(), "starting transition");
        self.active = Some(Transition::new(from, to, self.duration, self.easing));
    }

    pub fn toggle(&mut self, state: &mut MorphState) {
        let enable = !state.is_checked();
        self.set_checked(state, enable, true);
    }

    /// Advances the shared timeline by `dt` and writes the sampled values.
    ///
    /// Returns `true` while the transition is still running.
    pub fn tick(&mut self, state: &mut MorphState, dt: Duration) -> bool {
        let Some(transition) = self.active.as_mut() else {
            return false;
        };

        transition.advance(dt);
        state.apply(&transition.sample());

        if transition.is_finished() {
            trace!("transition complete");
            self.active = None;
            return false;
        }

        true
    }

    /// Drops any in-flight transition without writing to the state.
    pub(crate) fn abandon(&mut self) {
        if self.active.take().is_some() {
            debug!("transition abandoned");
        }
    }

    pub fn phase(&self) -> Phase {
        match self.active {
            Some(_) => Phase::Transitioning,
            None => Phase::Idle,
        }
    }

    pub fn transition(&self) -> Option<&Transition> {
        self.active.as_ref()
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }
}
