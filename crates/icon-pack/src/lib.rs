//! icon-pack: palette remapping and 2bpp byte packing for firmware icons
//!
//! This library turns a stream of quantized 2-bit palette indices into the
//! packed byte sequence a firmware renderer consumes directly as scanline
//! data. It is the pure core of the `icon2h` tool: no I/O, no global state,
//! every operation a deterministic single pass over its input.
//!
//! # Quick Start
//!
//! ```
//! use icon_pack::{pack, render_array, Convention};
//!
//! let raster = [0u8, 1, 2, 3];
//! let bytes = pack(&raster, &Convention::Identity.table()).unwrap();
//! assert_eq!(bytes, [0xe4]);
//! assert_eq!(render_array(&bytes), "0xe4");
//! ```
//!
//! # Packed 2bpp Format
//!
//! Each output byte holds four consecutive pixels. The earliest pixel in
//! raster order occupies the least-significant bit pair; later pixels occupy
//! progressively more-significant pairs:
//!
//! ```text
//!  bit   7 6   5 4   3 2   1 0
//!       +-----+-----+-----+-----+
//!       | p3  | p2  | p1  | p0  |     p0 = earliest pixel
//!       +-----+-----+-----+-----+
//! ```
//!
//! This layout is a binary-compatibility contract with the consuming
//! renderer, not a stylistic choice: reordering the bit pairs or the bytes
//! produces garbage on the device.
//!
//! # Palette Conventions
//!
//! Different upstream quantizers assign palette index 0 to different
//! physical colors. [`Convention`] is a closed set of named remapping
//! tables compensating for that: each one is a bijection on {0,1,2,3},
//! applied per pixel before packing. See the [`convention`] module for the
//! exact tables.

pub mod artifact;
pub mod convention;
pub mod packer;
pub mod render;

pub use artifact::IconArtifact;
pub use convention::{Convention, ConventionError, MappingTable};
pub use packer::{pack, PackError, BITS_PER_PIXEL, PIXELS_PER_BYTE};
pub use render::render_array;
