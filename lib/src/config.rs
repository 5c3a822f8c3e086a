use crate::error::Error;
use crate::ramp::{CharacterRamp, RampPreset};

/// Configuration for one ASCII conversion
#[derive(Debug, Clone)]
pub struct ConversionConfig {
    /// Output width in characters
    pub target_width: u32,       // >= 1, UIs typically bound this to 20-300
    /// Glyph ramp, darkest to brightest
    pub ramp: CharacterRamp,
    /// Invert the brightness mapping (dark areas get bright glyphs)
    pub invert: bool,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            target_width: 80,
            ramp: CharacterRamp::from(RampPreset::Standard),
            invert: false,
        }
    }
}

impl ConversionConfig {
    /// Validates the configuration parameters
    pub fn validate(&self) -> Result<(), Error> {
        if self.target_width < 1 {
            return Err(Error::InvalidTargetWidth(self.target_width));
        }
        // Ramp length is enforced at construction; nothing further to check.
        Ok(())
    }
}
