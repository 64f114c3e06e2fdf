use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid dimension {width}x{height}: width and height must be between 0 and {max}", max = u32::MAX)]
    InvalidDimension { width: i64, height: i64 },

    #[error("Config error: {0}")]
    Config(String),

    #[error("TOML parse error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}
