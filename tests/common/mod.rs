//! Shared fixtures for integration tests.

use std::path::{Path, PathBuf};

use image::{Rgba, RgbaImage};

/// Write an RGBA image built from grey values to a PNG file in `dir`.
///
/// `greys` is row-major, one 8-bit grey level per pixel, fully opaque.
pub fn write_grey_png(dir: &Path, name: &str, greys: &[u8], width: u32, height: u32) -> PathBuf {
    assert_eq!(greys.len() as u32, width * height);
    let image = RgbaImage::from_fn(width, height, |x, y| {
        let g = greys[(y * width + x) as usize];
        Rgba([g, g, g, 255])
    });
    let path = dir.join(name);
    image.save(&path).unwrap();
    path
}

/// Write an SVG document to a file in `dir`.
pub fn write_svg(dir: &Path, name: &str, svg: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, svg).unwrap();
    path
}
