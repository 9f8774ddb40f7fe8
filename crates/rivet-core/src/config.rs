//! Display configuration shared by the registry and the layout engine

use alloc::vec::Vec;
use serde::{Deserialize, Serialize};
use thiserror_no_std::Error;

/// Errors raised while decoding a stored configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The byte buffer is not a valid postcard encoding
    #[error("Invalid configuration encoding: {0}")]
    Decode(postcard::Error),

    /// The configuration could not be encoded
    #[error("Configuration encoding failed: {0}")]
    Encode(postcard::Error),
}

/// Physical properties of the display the widget tree is laid out on
///
/// The style presets derive their paddings, radii and line widths from
/// `dpi`, and `antialias` doubles every "downscaled" metric so the
/// anti-aliased renderer can work at twice the resolution.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Horizontal resolution in pixels
    pub hor_res: u32,
    /// Vertical resolution in pixels
    pub ver_res: u32,
    /// Dots per inch, used to scale preset metrics
    pub dpi: u32,
    /// Render at double resolution and snap auto-fit bounds
    pub antialias: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            hor_res: 320,
            ver_res: 240,
            dpi: 100,
            antialias: false,
        }
    }
}

impl DisplayConfig {
    /// Scale factor applied to "downscaled" metrics (2 when anti-aliasing)
    pub fn downscale(&self) -> u32 {
        if self.antialias { 2 } else { 1 }
    }

    /// Decode a configuration previously produced by [`DisplayConfig::to_bytes`]
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        postcard::from_bytes(bytes).map_err(ConfigError::Decode)
    }

    /// Encode the configuration with postcard
    pub fn to_bytes(&self) -> Result<Vec<u8>, ConfigError> {
        postcard::to_allocvec(self).map_err(ConfigError::Encode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_downscale_follows_antialias() {
        let mut config = DisplayConfig::default();
        assert_eq!(config.downscale(), 1);
        config.antialias = true;
        assert_eq!(config.downscale(), 2);
    }

    #[test]
    fn test_config_bytes() {
        let config = DisplayConfig {
            hor_res: 480,
            ver_res: 272,
            dpi: 130,
            antialias: true,
        };
        let bytes = config.to_bytes().unwrap();
        assert_eq!(DisplayConfig::from_bytes(&bytes).unwrap(), config);
    }

    #[test]
    fn test_truncated_config_is_rejected() {
        let bytes = DisplayConfig::default().to_bytes().unwrap();
        assert!(DisplayConfig::from_bytes(&bytes[..1]).is_err());
    }
}
