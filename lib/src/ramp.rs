//! Character ramps: brightness-to-glyph lookup tables
//!
//! A ramp is an ordered sequence of glyphs from darkest to brightest.
//! The mapper indexes into it with a normalized luminance value.

use crate::error::Error;

/// The four built-in ramps, ordered dark to bright
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RampPreset {
    /// Classic 10-character ramp: ` .:-=+*#%@`
    #[default]
    Standard,
    /// 70-character extended ramp for finer gradation
    Detailed,
    /// Unicode block elements: ` ░▒▓█`
    Blocks,
    /// High-contrast 4-character ramp: ` .:#`
    Minimal,
}

impl RampPreset {
    /// All presets, in the order they appear in selection UIs
    pub const ALL: [RampPreset; 4] = [
        RampPreset::Standard,
        RampPreset::Detailed,
        RampPreset::Blocks,
        RampPreset::Minimal,
    ];

    /// The glyph sequence for this preset, darkest first
    pub fn chars(self) -> &'static str {
        match self {
            RampPreset::Standard => " .:-=+*#%@",
            RampPreset::Detailed => {
                " .'`^\",:;Il!i><~+_-?][}{1)(|\\/tfjrxnuvczXYUJCLQ0OZmwqpdbkhao*#MW&8%B@$"
            }
            RampPreset::Blocks => " ░▒▓█",
            RampPreset::Minimal => " .:#",
        }
    }

    /// Human-readable name for selection UIs
    pub fn label(self) -> &'static str {
        match self {
            RampPreset::Standard => "Standard",
            RampPreset::Detailed => "Detailed",
            RampPreset::Blocks => "Blocks",
            RampPreset::Minimal => "Minimal",
        }
    }
}

/// An ordered glyph lookup table, indexed 0 (darkest) to len-1 (brightest)
///
/// Invariant: always holds at least 2 glyphs, enforced at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterRamp {
    glyphs: Vec<char>,
}

impl CharacterRamp {
    /// Build a ramp from a dark-to-bright character sequence
    ///
    /// # Arguments
    /// * `chars` - Glyphs ordered darkest first
    ///
    /// # Returns
    /// The ramp, or `Error::RampTooShort` if fewer than 2 glyphs are given
    pub fn new(chars: &str) -> Result<Self, Error> {
        let glyphs: Vec<char> = chars.chars().collect();
        if glyphs.len() < 2 {
            return Err(Error::RampTooShort(glyphs.len()));
        }
        Ok(Self { glyphs })
    }

    /// Number of glyphs in the ramp
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        false // invariant: len >= 2
    }

    /// Glyph at the given ramp index
    ///
    /// # Panics
    /// Panics if `index >= len()`. Callers clamp before indexing.
    pub fn glyph(&self, index: usize) -> char {
        self.glyphs[index]
    }

    /// A new ramp with the glyph order reversed (bright-to-dark becomes dark-to-bright)
    pub fn reversed(&self) -> Self {
        let mut glyphs = self.glyphs.clone();
        glyphs.reverse();
        Self { glyphs }
    }
}

impl From<RampPreset> for CharacterRamp {
    fn from(preset: RampPreset) -> Self {
        // Presets all have >= 2 glyphs, so construction cannot fail
        let glyphs = preset.chars().chars().collect();
        Self { glyphs }
    }
}
