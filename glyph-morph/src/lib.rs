//! Toggleable icon buttons whose glyph morphs between two line-segment shapes.

pub mod animator;
pub mod button;
pub mod canvas;
pub mod color;
pub mod config;
pub mod easing;
pub mod error;
pub mod frame;
pub mod glyph;
pub mod render;
pub mod state;

pub use animator::{Phase, ToggleAnimator, Transition};
pub use button::MorphButton;
pub use color::Rgba;
pub use config::ButtonConfig;
pub use easing::Easing;
pub use error::{Error, Result};
pub use frame::{DrawRect, Frame, MountPosition, Point};
pub use glyph::{GlyphKind, Template, TemplateSet};
pub use render::{DisplayList, FillStyle, StrokeStyle, Surface};
pub use state::MorphState;
