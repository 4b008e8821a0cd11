use crate::color::Rgba;
use crate::frame::Point;
use crate::glyph::SEGMENTS;
use crate::state::MorphState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineCap {
    Butt,
    #[default]
    Round,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub color: Rgba,
    /// Width in device pixels.
    pub width: f32,
    pub cap: LineCap,
}

impl StrokeStyle {
    /// Converts a density-independent width to device pixels.
    pub fn from_dip(color: Rgba, width_dip: u32, density: f32) -> Self {
        Self {
            color,
            width: (width_dip as f32 * density).round(),
            cap: LineCap::Round,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillStyle {
    pub color: Rgba,
}

/// Drawing target handed to [`paint`] for the duration of one call.
pub trait Surface {
    fn fill_circle(&mut self, center: Point, radius: f32, style: &FillStyle);

    fn stroke_line(&mut self, from: Point, to: Point, style: &StrokeStyle);
}

/// Background disc then the three segments, read fresh from `state`.
///
/// Before the first layout the disc has zero radius and every segment is a
/// point at the origin.
pub fn paint<S: Surface + ?Sized>(
    surface: &mut S,
    state: &MorphState,
    fill: &FillStyle,
    stroke: &StrokeStyle,
) {
    let (center, radius) = state
        .frame()
        .map(|frame| (frame.center(), frame.width()))
        .unwrap_or_default();

    surface.fill_circle(center, radius, fill);

    for (a, b) in SEGMENTS {
        surface.stroke_line(state.point(a), state.point(b), stroke);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Circle {
        center: Point,
        radius: f32,
        style: FillStyle,
    },
    Line {
        from: Point,
        to: Point,
        style: StrokeStyle,
    },
}

/// Surface that records draw calls for later replay.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayList {
    pub ops: Vec<DrawOp>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn circles(&self) -> impl Iterator<Item = (Point, f32, &FillStyle)> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Circle {
                center,
                radius,
                style,
            } => Some((*center, *radius, style)),
            DrawOp::Line { .. } => None,
        })
    }

    pub fn lines(&self) -> impl Iterator<Item = (Point, Point, &StrokeStyle)> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Line { from, to, style } => Some((*from, *to, style)),
            DrawOp::Circle { .. } => None,
        })
    }
}

impl Surface for DisplayList {
    fn fill_circle(&mut self, center: Point, radius: f32, style: &FillStyle) {
        self.ops.push(DrawOp::Circle {
            center,
            radius,
            style: *style,
        });
    }

    fn stroke_line(&mut self, from: Point, to: Point, style: &StrokeStyle) {
        self.ops.push(DrawOp::Line {
            from,
            to,
            style: *style,
        });
    }
}
