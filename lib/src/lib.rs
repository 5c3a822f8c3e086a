//! asciify - image to ASCII art converter
//!
//! Converts a decoded raster image to text by sampling it on a coarser,
//! aspect-corrected grid and mapping each cell's luminance to a glyph from
//! an ordered character ramp.
//!
//! # Example
//! ```no_run
//! use asciify::{ConversionConfig, render_ascii};
//! use image;
//!
//! let bitmap = image::open("photo.jpg").unwrap().to_rgba8();
//! let config = ConversionConfig::default();
//! let art = render_ascii(&bitmap, &config).unwrap();
//! print!("{art}");
//! ```

pub mod config;
pub mod converter;
pub mod error;
pub mod mapper;
pub mod ramp;
pub mod sampler;

// Re-export main types for convenience
pub use config::ConversionConfig;
pub use converter::render_ascii;
pub use error::Error;
pub use mapper::{AsciiArt, map_to_text};
pub use ramp::{CharacterRamp, RampPreset};
pub use sampler::sample;
