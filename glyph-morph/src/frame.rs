use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A position in device pixel space, y growing downwards.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Integer drawing rectangle reported by the host. `right`/`bottom` are exclusive edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DrawRect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl DrawRect {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub const fn width(&self) -> i32 {
        self.right - self.left
    }

    pub const fn height(&self) -> i32 {
        self.bottom - self.top
    }
}

/// Where the glyph sits relative to its host widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MountPosition {
    #[default]
    Background,
    Left,
    Top,
    Right,
    Bottom,
}

impl MountPosition {
    pub const ALL: [Self; 5] = [
        Self::Background,
        Self::Left,
        Self::Top,
        Self::Right,
        Self::Bottom,
    ];

    pub fn from_index(index: usize) -> Result<Self> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(Error::InvalidMountPosition(index))
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// `(dx, dy)` subtracted from every frame edge so an accessory glyph stays
    /// centred in its own square.
    pub const fn offset(self, bounds: &DrawRect) -> (i32, i32) {
        let h = bounds.height();

        match self {
            Self::Background => (0, 0),
            Self::Left => (h, h / 2),
            Self::Top => (h / 2, h),
            Self::Right => (0, h / 2),
            Self::Bottom => (h / 2, 0),
        }
    }

    /// Rect allocated to the glyph inside a `width` x `height` widget.
    ///
    /// A background glyph fills the largest square; accessories get a square
    /// half that size, placed on their side of the widget.
    pub fn glyph_rect(self, width: i32, height: i32) -> DrawRect {
        let full = width.min(height);
        let m = full / 2;
        let centred_x = (width - m) / 2;

        match self {
            Self::Background => DrawRect::new(0, 0, full, full),
            Self::Left => DrawRect::new(m, m / 2, m * 2, m * 3 / 2),
            Self::Top => DrawRect::new(centred_x, m, centred_x + m, m * 2),
            Self::Right => DrawRect::new(0, m / 2, m, m * 3 / 2),
            Self::Bottom => DrawRect::new(centred_x, height / 2 - m, centred_x + m, height / 2),
        }
    }

    /// Size the host should measure to. Background glyphs force a square widget.
    pub fn measure(self, width: i32, height: i32) -> (i32, i32) {
        match self {
            Self::Background => {
                let side = width.min(height);
                (side, side)
            }
            _ => (width, height),
        }
    }
}

/// Normalized drawing frame every glyph template is computed against.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Frame {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Frame {
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn center_x(&self) -> f32 {
        (self.left + self.right) * 0.5
    }

    pub fn center_y(&self) -> f32 {
        (self.top + self.bottom) * 0.5
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    pub fn center(&self) -> Point {
        Point::new(self.center_x(), self.center_y())
    }
}

/// Insets `bounds` by a quarter of its width on every edge, then shifts by
/// the mount position's offset.
pub fn recompute(bounds: &DrawRect, mount: MountPosition) -> Frame {
    let padding = bounds.width() / 4;
    let (dx, dy) = mount.offset(bounds);

    Frame {
        left: (bounds.left + padding - dx) as f32,
        top: (bounds.top + padding - dy) as f32,
        right: (bounds.right - padding - dx) as f32,
        bottom: (bounds.bottom - padding - dy) as f32,
    }
}
