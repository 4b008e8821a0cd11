use std::fmt;
use std::time::Duration;

use tracing::debug;

use crate::animator::{Phase, ToggleAnimator};
use crate::config::ButtonConfig;
use crate::frame::{DrawRect, MountPosition};
use crate::render::{self, FillStyle, StrokeStyle, Surface};
use crate::state::MorphState;

type CheckedListener = Box<dyn FnMut(bool)>;

/// A two-state icon button whose glyph morphs between two catalog shapes.
///
/// The host owns layout, input and frame scheduling. It reports bounds, forwards
/// toggle requests, calls [`MorphButton::tick`] every frame while
/// [`MorphButton::phase`] is `Transitioning`, and paints when asked.
pub struct MorphButton {
    config: ButtonConfig,
    state: MorphState,
    animator: ToggleAnimator,
    fill: FillStyle,
    stroke: StrokeStyle,
    bounds: Option<DrawRect>,
    on_checked_changed: Option<CheckedListener>,
}

impl MorphButton {
    pub fn new(config: ButtonConfig) -> Self {
        let state = MorphState::new(
            config.unchecked_glyph,
            config.checked_glyph,
            config.mount_position,
        );

        Self {
            animator: ToggleAnimator::new(config.duration(), config.easing),
            fill: config.fill_style(),
            stroke: config.stroke_style(),
            state,
            config,
            bounds: None,
            on_checked_changed: None,
        }
    }

    /// Host reported new drawing bounds for the glyph.
    ///
    /// Identical bounds are ignored; anything else abandons a running
    /// transition and snaps to the unchecked glyph.
    pub fn on_bounds_changed(&mut self, bounds: DrawRect) {
        if self.bounds == Some(bounds) {
            return;
        }

        self.bounds = Some(bounds);
        self.animator.abandon();
        self.state.apply_bounds(&bounds);
    }

    /// Lays the glyph out inside a `width` x `height` widget per its mount position.
    ///
    /// A background glyph is centred when the host did not measure the widget square.
    pub fn layout(&mut self, width: i32, height: i32) {
        let mount = self.config.mount_position;
        let mut rect = mount.glyph_rect(width, height);

        if mount == MountPosition::Background {
            let (dx, dy) = ((width - rect.width()) / 2, (height - rect.height()) / 2);
            rect = DrawRect::new(rect.left + dx, rect.top + dy, rect.right + dx, rect.bottom + dy);
        }

        self.on_bounds_changed(rect);
    }

    /// Host finished a press: animate to the other glyph and notify.
    pub fn on_toggle_requested(&mut self) {
        self.animator.toggle(&mut self.state);
        let checked = self.state.is_checked();
        debug!(checked, "toggle requested");

        if let Some(listener) = self.on_checked_changed.as_mut() {
            listener(checked);
        }
    }

    pub fn set_on_checked_changed(&mut self, listener: impl FnMut(bool) + 'static) {
        self.on_checked_changed = Some(Box::new(listener));
    }

    pub fn set_checked(&mut self, enable: bool, animated: bool) {
        self.animator.set_checked(&mut self.state, enable, animated);
    }

    pub fn is_checked(&self) -> bool {
        self.state.is_checked()
    }

    pub fn phase(&self) -> Phase {
        self.animator.phase()
    }

    /// Advances the running transition. Returns `true` while more frames are needed.
    pub fn tick(&mut self, dt: Duration) -> bool {
        self.animator.tick(&mut self.state, dt)
    }

    /// Whether the glyph changed since the last call.
    pub fn take_redraw(&mut self) -> bool {
        self.state.take_redraw()
    }

    pub fn paint<S: Surface + ?Sized>(&self, surface: &mut S) {
        render::paint(surface, &self.state, &self.fill, &self.stroke);
    }

    pub fn state(&self) -> &MorphState {
        &self.state
    }

    pub fn animator(&self) -> &ToggleAnimator {
        &self.animator
    }

    pub fn config(&self) -> &ButtonConfig {
        &self.config
    }

    pub fn bounds(&self) -> Option<DrawRect> {
        self.bounds
    }
}

impl Default for MorphButton {
    fn default() -> Self {
        Self::new(ButtonConfig::default())
    }
}

impl fmt::Debug for MorphButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MorphButton")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("phase", &self.phase())
            .field("bounds", &self.bounds)
            .finish_non_exhaustive()
    }
}
