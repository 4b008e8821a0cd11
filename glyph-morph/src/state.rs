use tracing::{debug, warn};

use crate::frame::{self, DrawRect, Frame, MountPosition, Point};
use crate::glyph::{COORDS, GlyphKind, Template, TemplateSet};

/// Live coordinates of one button's glyph plus the template pair it morphs between.
///
/// Every coordinate write raises the redraw flag; the host drains it with
/// [`MorphState::take_redraw`] once per frame.
#[derive(Debug, Clone)]
pub struct MorphState {
    unchecked: GlyphKind,
    checked: GlyphKind,
    mount: MountPosition,
    is_checked: bool,
    templates: TemplateSet,
    points: Template,
    redraw: bool,
}

impl MorphState {
    pub fn new(unchecked: GlyphKind, checked: GlyphKind, mount: MountPosition) -> Self {
        let mut state = Self {
            unchecked,
            checked,
            mount,
            is_checked: false,
            templates: TemplateSet::empty(),
            points: [0.0; COORDS],
            redraw: false,
        };
        state.snap_to(unchecked);
        state
    }

    /// Rebuilds all templates for new bounds and snaps to the unchecked glyph.
    pub fn apply_bounds(&mut self, bounds: &DrawRect) -> Frame {
        let frame = frame::recompute(bounds, self.mount);
        debug!(?bounds, ?frame, mount = ?self.mount, "recomputed glyph frame");

        self.templates = TemplateSet::compute(frame);
        self.is_checked = false;
        self.snap_to(self.unchecked);
        frame
    }

    /// Sets every coordinate to `kind`'s template with no animation.
    pub fn snap_to(&mut self, kind: GlyphKind) {
        if self.templates.frame().is_none() {
            debug!(?kind, "snapping before first layout, glyph stays degenerate");
        }

        let target = *self.templates.get(kind);
        self.apply(&target);
    }

    pub fn apply(&mut self, coords: &Template) {
        for (index, &value) in coords.iter().enumerate() {
            self.set_point(index, value);
        }
    }

    pub fn point_value(&self, index: usize) -> f32 {
        self.points.get(index).copied().unwrap_or_default()
    }

    pub fn set_point(&mut self, index: usize, value: f32) {
        match self.points.get_mut(index) {
            Some(slot) => {
                *slot = value;
                self.redraw = true;
            }
            None => warn!(index, "coordinate index out of range"),
        }
    }

    /// Endpoint `index` of the six, read fresh from the live buffer.
    pub fn point(&self, index: usize) -> Point {
        Point::new(self.point_value(index * 2), self.point_value(index * 2 + 1))
    }

    pub fn points(&self) -> &Template {
        &self.points
    }

    /// Destination template for the given checked flag.
    pub fn target(&self, checked: bool) -> &Template {
        self.templates.get(if checked { self.checked } else { self.unchecked })
    }

    pub fn is_checked(&self) -> bool {
        self.is_checked
    }

    pub(crate) fn set_checked_flag(&mut self, checked: bool) {
        self.is_checked = checked;
    }

    pub fn unchecked_glyph(&self) -> GlyphKind {
        self.unchecked
    }

    pub fn checked_glyph(&self) -> GlyphKind {
        self.checked
    }

    pub fn mount(&self) -> MountPosition {
        self.mount
    }

    /// `None` until the host has reported bounds.
    pub fn frame(&self) -> Option<&Frame> {
        self.templates.frame()
    }

    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.redraw)
    }
}

#[cfg(test)]
mod tests {
    use crate::glyph::template_for;

    use super::*;

    fn laid_out(unchecked: GlyphKind, checked: GlyphKind) -> MorphState {
        let mut state = MorphState::new(unchecked, checked, MountPosition::Background);
        state.apply_bounds(&DrawRect::new(-50, -50, 150, 150));
        state
    }

    #[test]
    fn before_layout_everything_is_degenerate() {
        let state = MorphState::new(GlyphKind::Plus, GlyphKind::X, MountPosition::Background);

        assert!(state.frame().is_none());
        assert!(!state.is_checked());
        assert!(state.points().iter().all(|&c| c == 0.0));
        assert!(state.target(true).iter().all(|&c| c == 0.0));
    }

    #[test]
    fn bounds_change_snaps_to_unchecked() {
        let state = laid_out(GlyphKind::Plus, GlyphKind::X);
        let frame = Frame::new(0.0, 0.0, 100.0, 100.0);

        assert_eq!(state.frame(), Some(&frame));
        assert_eq!(state.points(), &template_for(GlyphKind::Plus, &frame));
        assert_eq!(state.point(0), Point::new(50.0, 0.0));
        assert_eq!(state.point(3), Point::new(100.0, 50.0));
    }

    #[test]
    fn bounds_change_clears_checked_flag() {
        let mut state = laid_out(GlyphKind::Plus, GlyphKind::X);
        state.set_checked_flag(true);
        state.set_point(0, 12.5);

        let frame = state.apply_bounds(&DrawRect::new(0, 0, 80, 80));

        assert!(!state.is_checked());
        assert_eq!(state.points(), &template_for(GlyphKind::Plus, &frame));
    }

    #[test]
    fn every_bounds_sequence_ends_on_unchecked_template() {
        let mut state = MorphState::new(GlyphKind::Menu, GlyphKind::X, MountPosition::Top);
        let rects = [
            DrawRect::new(0, 0, 40, 40),
            DrawRect::new(10, 20, 130, 90),
            DrawRect::new(0, 0, 7, 3),
        ];

        for rect in rects {
            let frame = state.apply_bounds(&rect);
            assert!(!state.is_checked());
            assert_eq!(state.points(), &template_for(GlyphKind::Menu, &frame));
        }
    }

    #[test]
    fn set_point_requests_redraw() {
        let mut state = laid_out(GlyphKind::Plus, GlyphKind::X);
        state.take_redraw();

        state.set_point(7, 3.0);

        assert_eq!(state.point_value(7), 3.0);
        assert!(state.take_redraw());
        assert!(!state.take_redraw());
    }

    #[test]
    fn out_of_range_index_is_ignored() {
        let mut state = laid_out(GlyphKind::Plus, GlyphKind::X);
        state.take_redraw();
        let before = *state.points();

        state.set_point(COORDS, 1.0);

        assert_eq!(state.points(), &before);
        assert_eq!(state.point_value(COORDS), 0.0);
        assert!(!state.take_redraw());
    }

    #[test]
    fn target_picks_template_by_flag() {
        let state = laid_out(GlyphKind::ArrowUp, GlyphKind::ArrowDown);
        let frame = *state.frame().unwrap();

        assert_eq!(state.target(false), &template_for(GlyphKind::ArrowUp, &frame));
        assert_eq!(state.target(true), &template_for(GlyphKind::ArrowDown, &frame));
    }
}
