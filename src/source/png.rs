//! PNG image source: decode, composite, re-quantize.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use icon_pack::Convention;

use super::{composite_over, level_from_black, luma, IconSource, QuantizedRaster};
use crate::error::SourceError;

/// The color treated as transparent in a PNG input.
///
/// This choice drives both the alpha-compositing background and the index
/// assignment of the quantizer, and selects the matching convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transparency {
    Black,
    White,
}

impl Transparency {
    /// The 8-bit grey value pixels are composited over.
    #[inline]
    pub fn background(&self) -> u8 {
        match self {
            Transparency::Black => 0,
            Transparency::White => 255,
        }
    }

    /// The convention compensating for this mode's index assignment.
    #[inline]
    pub fn convention(&self) -> Convention {
        match self {
            Transparency::Black => Convention::BlackTransparent,
            Transparency::White => Convention::WhiteTransparent,
        }
    }
}

impl FromStr for Transparency {
    type Err = SourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "black" => Ok(Transparency::Black),
            "white" => Ok(Transparency::White),
            _ => Err(SourceError::UnknownTransparency(s.to_string())),
        }
    }
}

/// Decodes a PNG file and re-quantizes it to 4 grey levels.
///
/// Quantization is unconditional -- an input that already carries a 4-color
/// palette is decoded to RGBA and quantized again, so the output never
/// depends on the index order some other tool chose. Index 0 sits at the
/// transparency-color end of the grey axis (`black` mode: 0 = darkest;
/// `white` mode: 0 = lightest), matching the upstream quantizers the two
/// PNG conventions compensate for. Composed with the matching convention,
/// both modes map a given physical grey to the same packed value.
pub struct PngSource {
    path: PathBuf,
    transparency: Transparency,
}

impl PngSource {
    /// Create a PNG source for the given file and transparency choice.
    pub fn new(path: impl AsRef<Path>, transparency: Transparency) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            transparency,
        }
    }
}

impl IconSource for PngSource {
    fn convention(&self) -> Convention {
        self.transparency.convention()
    }

    fn quantize(&self) -> Result<QuantizedRaster, SourceError> {
        let image = image::open(&self.path)?;
        let rgba = image.to_rgba8();
        let (width, height) = rgba.dimensions();
        let background = self.transparency.background();

        let pixels = rgba
            .pixels()
            .map(|pixel| {
                let [r, g, b, a] = pixel.0;
                let grey = luma(
                    composite_over(r, a, background),
                    composite_over(g, a, background),
                    composite_over(b, a, background),
                );
                let level = level_from_black(grey);
                match self.transparency {
                    Transparency::Black => level,
                    Transparency::White => 3 - level,
                }
            })
            .collect();

        tracing::debug!(
            path = %self.path.display(),
            width,
            height,
            transparency = ?self.transparency,
            "Quantized PNG"
        );

        Ok(QuantizedRaster::new(pixels, width, height))
    }
}
