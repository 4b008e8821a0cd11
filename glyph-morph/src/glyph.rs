use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::frame::Frame;

/// Points per glyph: three segments, two endpoints each.
pub const POINTS: usize = 6;

/// Coordinates per glyph, `x0, y0, x1, y1, ..`.
pub const COORDS: usize = POINTS * 2;

/// Point index pairs forming the three rendered segments. Identical for every glyph.
pub const SEGMENTS: [(usize, usize); 3] = [(0, 1), (2, 3), (4, 5)];

/// Absolute pixel realization of a glyph under one frame.
pub type Template = [f32; COORDS];

/// The fixed glyph catalog. Discriminants are the catalog indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GlyphKind {
    #[default]
    Plus,
    Minus,
    X,
    AngleDown,
    AngleLeft,
    AngleUp,
    AngleRight,
    Check,
    ArrowDown,
    ArrowLeft,
    ArrowUp,
    ArrowRight,
    Menu,
}

impl GlyphKind {
    pub const ALL: [Self; 13] = [
        Self::Plus,
        Self::Minus,
        Self::X,
        Self::AngleDown,
        Self::AngleLeft,
        Self::AngleUp,
        Self::AngleRight,
        Self::Check,
        Self::ArrowDown,
        Self::ArrowLeft,
        Self::ArrowUp,
        Self::ArrowRight,
        Self::Menu,
    ];

    pub fn from_index(index: usize) -> Result<Self> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(Error::InvalidGlyphKind(index))
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Plus => "plus",
            Self::Minus => "minus",
            Self::X => "x",
            Self::AngleDown => "angle-down",
            Self::AngleLeft => "angle-left",
            Self::AngleUp => "angle-up",
            Self::AngleRight => "angle-right",
            Self::Check => "check",
            Self::ArrowDown => "arrow-down",
            Self::ArrowLeft => "arrow-left",
            Self::ArrowUp => "arrow-up",
            Self::ArrowRight => "arrow-right",
            Self::Menu => "menu",
        }
    }
}

/// Six points of `kind` laid out over `frame`.
///
/// Glyphs needing fewer than three lines collapse the spare segments to a
/// zero-length point so one three-segment renderer draws every glyph.
pub fn template_for(kind: GlyphKind, frame: &Frame) -> Template {
    let Frame {
        left,
        top,
        right,
        bottom,
    } = *frame;
    let cx = frame.center_x();
    let cy = frame.center_y();

    match kind {
        GlyphKind::Plus => [cx, top, cx, bottom, left, cy, right, cy, cx, cy, cx, cy],
        GlyphKind::Minus => [left, cy, right, cy, left, cy, right, cy, cx, cy, cx, cy],
        GlyphKind::X => [left, top, right, bottom, left, bottom, right, top, cx, cy, cx, cy],
        GlyphKind::AngleDown => [left, cy, cx, bottom, cx, bottom, right, cy, cx, bottom, cx, bottom],
        GlyphKind::AngleLeft => [left, cy, cx, bottom, left, cy, cx, top, left, cy, left, cy],
        GlyphKind::AngleUp => [cx, top, right, cy, left, cy, cx, top, cx, top, cx, top],
        GlyphKind::AngleRight => [cx, top, right, cy, cx, bottom, right, cy, right, cy, right, cy],
        GlyphKind::Check => [right, top, cx, bottom, left, cy, cx, bottom, cx, bottom, cx, bottom],
        GlyphKind::ArrowDown => [left, cy, cx, bottom, cx, bottom, right, cy, cx, top, cx, bottom],
        GlyphKind::ArrowLeft => [left, cy, cx, bottom, left, cy, cx, top, left, cy, right, cy],
        GlyphKind::ArrowUp => [cx, top, right, cy, left, cy, cx, top, cx, top, cx, bottom],
        GlyphKind::ArrowRight => [cx, top, right, cy, cx, bottom, right, cy, left, cy, right, cy],
        GlyphKind::Menu => [left, top, right, top, left, cy, right, cy, left, bottom, right, bottom],
    }
}

/// All thirteen templates, always computed together from a single frame.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateSet {
    frame: Option<Frame>,
    templates: [Template; 13],
}

impl TemplateSet {
    /// No bounds reported yet: every template is the all-zero degenerate glyph.
    pub const fn empty() -> Self {
        Self {
            frame: None,
            templates: [[0.0; COORDS]; 13],
        }
    }

    pub fn compute(frame: Frame) -> Self {
        Self {
            frame: Some(frame),
            templates: GlyphKind::ALL.map(|kind| template_for(kind, &frame)),
        }
    }

    pub fn frame(&self) -> Option<&Frame> {
        self.frame.as_ref()
    }

    pub fn get(&self, kind: GlyphKind) -> &Template {
        &self.templates[kind.index()]
    }
}

impl Default for TemplateSet {
    fn default() -> Self {
        Self::empty()
    }
}
