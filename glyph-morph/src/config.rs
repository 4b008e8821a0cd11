//! Construction-time configuration for a [`MorphButton`](crate::button::MorphButton).

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::animator::DEFAULT_DURATION;
use crate::color::Rgba;
use crate::easing::Easing;
use crate::error::{Error, Result};
use crate::frame::MountPosition;
use crate::glyph::GlyphKind;
use crate::render::{FillStyle, StrokeStyle};

pub const DEFAULT_STROKE_WIDTH_DIP: u32 = 4;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonConfig {
    pub unchecked_glyph: GlyphKind,
    pub checked_glyph: GlyphKind,
    pub stroke_width_dip: u32,
    /// Device pixels per dip.
    pub density: f32,
    pub stroke_color: Rgba,
    pub background_color: Rgba,
    pub mount_position: MountPosition,
    pub duration_ms: u64,
    pub easing: Easing,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            unchecked_glyph: GlyphKind::Plus,
            checked_glyph: GlyphKind::Minus,
            stroke_width_dip: DEFAULT_STROKE_WIDTH_DIP,
            density: 1.0,
            stroke_color: Rgba::DARK_GRAY,
            background_color: Rgba::WHITE,
            mount_position: MountPosition::Background,
            duration_ms: DEFAULT_DURATION.as_millis() as u64,
            easing: Easing::Linear,
        }
    }
}

impl ButtonConfig {
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Builds a config from raw catalog indices, as host attribute sets
    /// carry them. Fails on the first index outside its table.
    pub fn from_indices(unchecked: usize, checked: usize, mount: usize) -> Result<Self> {
        let config = Self {
            unchecked_glyph: GlyphKind::from_index(unchecked)?,
            checked_glyph: GlyphKind::from_index(checked)?,
            mount_position: MountPosition::from_index(mount)?,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks the fields the type system cannot.
    pub fn validate(&self) -> Result<()> {
        if !self.density.is_finite() || self.density <= 0.0 {
            return Err(Error::InvalidDensity(self.density));
        }

        Ok(())
    }

    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    pub fn stroke_style(&self) -> StrokeStyle {
        StrokeStyle::from_dip(self.stroke_color, self.stroke_width_dip, self.density)
    }

    pub fn fill_style(&self) -> FillStyle {
        FillStyle {
            color: self.background_color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_widget_defaults() {
        let cfg = ButtonConfig::default();

        assert_eq!(cfg.unchecked_glyph, GlyphKind::Plus);
        assert_eq!(cfg.checked_glyph, GlyphKind::Minus);
        assert_eq!(cfg.stroke_width_dip, 4);
        assert_eq!(cfg.stroke_color, Rgba::DARK_GRAY);
        assert_eq!(cfg.background_color, Rgba::WHITE);
        assert_eq!(cfg.mount_position, MountPosition::Background);
        assert_eq!(cfg.duration(), Duration::from_millis(250));
    }

    #[test]
    fn empty_toml_gives_defaults() {
        assert_eq!(ButtonConfig::from_toml("").unwrap(), ButtonConfig::default());
    }

    #[test]
    fn partial_toml_overrides_named_fields() {
        let toml_str = r##"
unchecked_glyph = "arrow-down"
checked_glyph = "arrow-up"
stroke_color = "#FF0000"
mount_position = "left"
easing = "ease-in-out"
"##;
        let cfg = ButtonConfig::from_toml(toml_str).unwrap();

        assert_eq!(cfg.unchecked_glyph, GlyphKind::ArrowDown);
        assert_eq!(cfg.checked_glyph, GlyphKind::ArrowUp);
        assert_eq!(cfg.stroke_color, Rgba::opaque(0xFF, 0, 0));
        assert_eq!(cfg.mount_position, MountPosition::Left);
        assert_eq!(cfg.easing, Easing::EaseInOut);
        assert_eq!(cfg.stroke_width_dip, 4);
    }

    #[test]
    fn cubic_bezier_easing_from_toml() {
        let cfg = ButtonConfig::from_toml("easing = { cubic-bezier = [0.4, 0.0, 0.2, 1.0] }").unwrap();

        assert_eq!(cfg.easing, Easing::CubicBezier(0.4, 0.0, 0.2, 1.0));
    }

    #[test]
    fn unknown_glyph_name_is_rejected() {
        let err = ButtonConfig::from_toml(r#"checked_glyph = "star""#).unwrap_err();

        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn bad_color_is_rejected() {
        let err = ButtonConfig::from_toml(r#"background_color = "white""#).unwrap_err();

        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("white"), "{err}");
    }

    #[test]
    fn density_must_be_finite_and_positive() {
        for text in ["density = 0.0", "density = -3.0", "density = nan", "density = inf"] {
            assert!(
                matches!(ButtonConfig::from_toml(text), Err(Error::InvalidDensity(_))),
                "{text:?} should be rejected"
            );
        }

        let cfg = ButtonConfig::from_toml("density = 2.75").unwrap();
        assert_eq!(cfg.density, 2.75);
    }

    #[test]
    fn validate_catches_hand_built_configs() {
        let cfg = ButtonConfig {
            density: -1.0,
            ..ButtonConfig::default()
        };

        assert!(matches!(cfg.validate(), Err(Error::InvalidDensity(d)) if d == -1.0));
        assert!(ButtonConfig::default().validate().is_ok());
    }

    #[test]
    fn from_indices_validates_each_table() {
        let cfg = ButtonConfig::from_indices(2, 7, 3).unwrap();
        assert_eq!(cfg.unchecked_glyph, GlyphKind::X);
        assert_eq!(cfg.checked_glyph, GlyphKind::Check);
        assert_eq!(cfg.mount_position, MountPosition::Right);

        assert!(matches!(ButtonConfig::from_indices(13, 0, 0), Err(Error::InvalidGlyphKind(13))));
        assert!(matches!(ButtonConfig::from_indices(0, 99, 0), Err(Error::InvalidGlyphKind(99))));
        assert!(matches!(ButtonConfig::from_indices(0, 1, 5), Err(Error::InvalidMountPosition(5))));
    }

    #[test]
    fn demo_config_parses() {
        let cfg = ButtonConfig::from_toml(include_str!("../../demos/button.toml")).unwrap();

        assert_eq!(cfg.unchecked_glyph, GlyphKind::Menu);
        assert_eq!(cfg.checked_glyph, GlyphKind::ArrowLeft);
        assert_eq!(cfg.duration(), Duration::from_millis(400));
    }

    #[test]
    fn config_round_trips_through_toml() {
        let cfg = ButtonConfig {
            checked_glyph: GlyphKind::Menu,
            background_color: Rgba::from_argb(0x8000_FF00),
            ..ButtonConfig::default()
        };
        let text = toml::to_string(&cfg).unwrap();

        assert_eq!(ButtonConfig::from_toml(&text).unwrap(), cfg);
    }
}
