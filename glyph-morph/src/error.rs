use thiserror::Error;

/// Configuration-time failures. The per-frame animate/paint path has none.
#[derive(Error, Debug)]
pub enum Error {
    #[error("glyph index {0} is outside the 13-entry catalog")]
    InvalidGlyphKind(usize),

    #[error("mount position index {0} is outside the 5-entry set")]
    InvalidMountPosition(usize),

    #[error("density {0} must be finite and positive")]
    InvalidDensity(f32),

    #[error("invalid color {0:?}, expected #RRGGBB or #AARRGGBB")]
    InvalidColor(String),

    #[error("invalid button config: {0}")]
    Config(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
