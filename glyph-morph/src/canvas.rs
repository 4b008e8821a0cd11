//! Renders a [`MorphButton`] into a ratatui buffer.
//!
//! Glyph pixel space is the Braille dot grid of the target area, so hosts
//! should lay the button out with [`dot_size`].

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::symbols::Marker;
use ratatui::widgets::Widget;
use ratatui::widgets::canvas::{Canvas, Line};

use crate::button::MorphButton;
use crate::frame::Point;
use crate::render::{DisplayList, StrokeStyle};

pub const DOTS_PER_CELL_X: u16 = 2;
pub const DOTS_PER_CELL_Y: u16 = 4;

/// Size of `area` in Braille dots.
pub fn dot_size(area: Rect) -> (i32, i32) {
    (
        i32::from(area.width * DOTS_PER_CELL_X),
        i32::from(area.height * DOTS_PER_CELL_Y),
    )
}

impl Widget for &MorphButton {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        let mut list = DisplayList::new();
        self.paint(&mut list);

        let (dots_x, dots_y) = dot_size(area);
        let max_passes = dots_x.max(dots_y);
        let (width, height) = (f64::from(dots_x), f64::from(dots_y));

        Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([0.0, width])
            .y_bounds([0.0, height])
            .paint(|ctx| {
                for (from, to, style) in list.lines() {
                    for line in stroke_lines(from, to, style, height, max_passes) {
                        ctx.draw(&line);
                    }
                }
            })
            .render(area, buf);

        // Canvas resets the background of its whole area, so the disc goes on last.
        for (center, radius, style) in list.circles() {
            fill_disc(area, buf, center, radius, style.color.into());
        }
    }
}

/// Paints cell backgrounds whose centre falls inside the disc.
fn fill_disc(area: Rect, buf: &mut Buffer, center: Point, radius: f32, color: ratatui::style::Color) {
    if radius <= 0.0 {
        return;
    }

    for row in 0..area.height {
        for col in 0..area.width {
            let x = (f32::from(col) + 0.5) * f32::from(DOTS_PER_CELL_X);
            let y = (f32::from(row) + 0.5) * f32::from(DOTS_PER_CELL_Y);
            let (dx, dy) = (x - center.x, y - center.y);

            if dx * dx + dy * dy <= radius * radius {
                buf[(area.x + col, area.y + row)].set_bg(color);
            }
        }
    }
}

/// One canvas line per dot of stroke width, at most `max_passes`, offset along
/// the segment normal. Canvas y grows upwards, glyph y grows downwards.
fn stroke_lines(
    from: Point,
    to: Point,
    style: &StrokeStyle,
    height: f64,
    max_passes: i32,
) -> Vec<Line> {
    let color = style.color.into();
    let (dx, dy) = (to.x - from.x, to.y - from.y);
    let len = (dx * dx + dy * dy).sqrt();
    let (nx, ny) = if len > f32::EPSILON {
        (-dy / len, dx / len)
    } else {
        (0.0, 1.0)
    };

    let passes = (style.width.max(1.0).round() as i32).clamp(1, max_passes.max(1));
    let half = (passes - 1) as f32 / 2.0;

    (0..passes)
        .map(|i| {
            let offset = i as f32 - half;
            let (ox, oy) = (nx * offset, ny * offset);

            Line::new(
                f64::from(from.x + ox),
                height - f64::from(from.y + oy),
                f64::from(to.x + ox),
                height - f64::from(to.y + oy),
                color,
            )
        })
        .collect()
}
