//! SVG image source: rasterize, then quantize ink coverage.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use icon_pack::Convention;
use resvg::usvg::{self, Transform};
use tiny_skia::Pixmap;

use super::{composite_over, level_from_black, luma, IconSource, QuantizedRaster};
use crate::error::SourceError;

/// Index labels in the vector rasterizer's palette order: position is the
/// ink level (0 = none .. 3 = full), value is the assigned index. The
/// rasterizer's quantizer hands out 0 for the background and 1 for the
/// strongest color, with the intermediate anti-aliasing tones after it;
/// the `VectorSource` convention remaps these labels to packed levels.
const VECTOR_LABELS: [u8; 4] = [0, 3, 2, 1];

/// Rasterizes an SVG file at a requested size and quantizes it to 4 levels.
///
/// The document is scaled to fit the requested canvas preserving aspect
/// ratio, centered, and rendered over a white background. Ink coverage
/// (darkness against that background) is quantized into the legacy label
/// order described on `VECTOR_LABELS`.
pub struct SvgSource {
    path: PathBuf,
    width: u32,
    height: u32,
    /// Font database for text rendering
    fontdb: Arc<fontdb::Database>,
}

impl SvgSource {
    /// Create an SVG source for the given file and rasterization size.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::InvalidDimensions`] if either dimension is
    /// zero.
    pub fn new(path: impl AsRef<Path>, width: u32, height: u32) -> Result<Self, SourceError> {
        if width == 0 || height == 0 {
            return Err(SourceError::InvalidDimensions { width, height });
        }

        let mut fontdb = fontdb::Database::new();
        fontdb.load_system_fonts();
        tracing::debug!(font_count = fontdb.len(), "Loaded fonts for SVG rendering");

        Ok(Self {
            path: path.as_ref().to_path_buf(),
            width,
            height,
            fontdb: Arc::new(fontdb),
        })
    }

    /// Parse and rasterize the SVG to an RGBA pixmap
    fn rasterize(&self) -> Result<Pixmap, SourceError> {
        let data = std::fs::read(&self.path)?;
        let options = usvg::Options {
            fontdb: self.fontdb.clone(),
            ..Default::default()
        };
        let tree = usvg::Tree::from_data(&data, &options)
            .map_err(|e| SourceError::SvgParse(e.to_string()))?;

        let svg_size = tree.size();
        let scale_x = self.width as f32 / svg_size.width();
        let scale_y = self.height as f32 / svg_size.height();
        let scale = scale_x.min(scale_y);

        let scaled_width = svg_size.width() * scale;
        let scaled_height = svg_size.height() * scale;
        let offset_x = (self.width as f32 - scaled_width) / 2.0;
        let offset_y = (self.height as f32 - scaled_height) / 2.0;

        let mut pixmap =
            Pixmap::new(self.width, self.height).ok_or(SourceError::PixmapAllocation)?;
        pixmap.fill(tiny_skia::Color::WHITE);

        let transform = Transform::from_scale(scale, scale).post_translate(offset_x, offset_y);
        resvg::render(&tree, transform, &mut pixmap.as_mut());

        Ok(pixmap)
    }
}

impl IconSource for SvgSource {
    fn convention(&self) -> Convention {
        Convention::VectorSource
    }

    fn quantize(&self) -> Result<QuantizedRaster, SourceError> {
        let pixmap = self.rasterize()?;

        let pixels = pixmap
            .data()
            .chunks_exact(4)
            .map(|pixel| {
                let (r, g, b, a) = (pixel[0], pixel[1], pixel[2], pixel[3]);
                let grey = luma(
                    composite_over(r, a, 255),
                    composite_over(g, a, 255),
                    composite_over(b, a, 255),
                );
                // Ink level: 0 over the white background, 3 at full darkness
                let ink = 3 - level_from_black(grey);
                VECTOR_LABELS[ink as usize]
            })
            .collect();

        tracing::debug!(
            path = %self.path.display(),
            width = self.width,
            height = self.height,
            "Rasterized and quantized SVG"
        );

        Ok(QuantizedRaster::new(pixels, self.width, self.height))
    }
}
