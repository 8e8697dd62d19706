//! Named palette-index remapping conventions.
//!
//! Upstream quantization tools disagree on what palette index 0 means: one
//! assigns it to the transparent/background extreme, another to white,
//! a vector rasterizer to the background with index 1 as the strongest
//! color. A [`Convention`] names one such assignment and carries the fixed
//! [`MappingTable`] that re-labels its indices into the packed format's
//! order.
//!
//! The set of conventions is closed: adding one means adding a variant and
//! its table here, nowhere else. Every table is a bijection on {0,1,2,3} --
//! a remapping re-labels color meaning, it never merges colors. User-built
//! tables go through [`MappingTable::new`], which rejects anything that is
//! not a permutation.

mod error;

pub use error::ConventionError;

use std::str::FromStr;

/// Number of palette entries in the 2bpp format.
const PALETTE_SIZE: usize = 4;

/// A validated bijection on the four 2-bit palette indices.
///
/// Construction via [`MappingTable::new`] rejects tables that are not a
/// permutation of `{0,1,2,3}`, so a `MappingTable` in hand is always safe
/// to apply. The built-in [`Convention`] tables are fixed permutations.
///
/// # Example
///
/// ```
/// use icon_pack::MappingTable;
///
/// let reversed = MappingTable::new([3, 2, 1, 0]).unwrap();
/// assert_eq!(reversed.map(0), 3);
///
/// // Two raw indices mapping to the same packed index is rejected
/// assert!(MappingTable::new([0, 0, 2, 3]).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MappingTable {
    table: [u8; PALETTE_SIZE],
}

impl MappingTable {
    /// Create a mapping table, validating that it is a permutation.
    ///
    /// # Errors
    ///
    /// Returns [`ConventionError::NotBijective`] if any entry is outside
    /// `0..=3` or two entries collide.
    pub fn new(table: [u8; PALETTE_SIZE]) -> Result<Self, ConventionError> {
        let mut seen = [false; PALETTE_SIZE];
        for &packed in &table {
            if packed as usize >= PALETTE_SIZE || seen[packed as usize] {
                return Err(ConventionError::NotBijective { table });
            }
            seen[packed as usize] = true;
        }
        Ok(Self { table })
    }

    /// Map a raw quantized index to its packed-format index.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `index` is in `0..=3`. The packer validates each
    /// raster element before calling this.
    #[inline]
    pub fn map(&self, index: u8) -> u8 {
        debug_assert!(
            (index as usize) < PALETTE_SIZE,
            "raw index {index} outside 0..=3"
        );
        self.table[index as usize]
    }
}

/// A named index-assignment convention of an upstream quantizer.
///
/// The caller selects the convention from the image source type and an
/// explicit transparency-color choice; nothing is autodetected from pixel
/// content. Each variant's table is fixed -- the tables are part of the
/// binary contract with the consuming renderer.
///
/// # Example
///
/// ```
/// use icon_pack::Convention;
///
/// let convention: Convention = "white_transparent".parse().unwrap();
/// assert_eq!(convention, Convention::WhiteTransparent);
/// assert_eq!(convention.table().map(0), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Convention {
    /// No remapping. Used when the source already encodes index 0 as the
    /// fully transparent extreme with opacity increasing by index.
    Identity,
    /// Same table as [`Identity`](Convention::Identity), kept as a distinct
    /// name: it corresponds to the quantizer behavior where black was
    /// chosen as the transparent extreme and assigned index 0.
    BlackTransparent,
    /// The upstream quantizer assigned index 0 to white. White maps to
    /// packed value 3 and vice versa, with the two middle intensities
    /// swapped to preserve the gradient direction.
    WhiteTransparent,
    /// Rasterized vector input, where the rasterizer's quantizer assigns
    /// index 1 to the strongest color rather than index 3. Swaps 1 and 3,
    /// leaves 0 and 2 in place.
    VectorSource,
}

impl Convention {
    /// All defined conventions, in declaration order.
    pub const ALL: [Convention; 4] = [
        Convention::Identity,
        Convention::BlackTransparent,
        Convention::WhiteTransparent,
        Convention::VectorSource,
    ];

    /// The canonical name of this convention.
    pub fn name(&self) -> &'static str {
        match self {
            Convention::Identity => "identity",
            Convention::BlackTransparent => "black_transparent",
            Convention::WhiteTransparent => "white_transparent",
            Convention::VectorSource => "vector_source",
        }
    }

    /// The raw array behind this convention's table.
    fn raw_table(&self) -> [u8; PALETTE_SIZE] {
        match self {
            Convention::Identity => [0, 1, 2, 3],
            Convention::BlackTransparent => [0, 1, 2, 3],
            Convention::WhiteTransparent => [3, 2, 1, 0],
            Convention::VectorSource => [0, 3, 2, 1],
        }
    }

    /// This convention's mapping table.
    ///
    /// The built-in tables are fixed permutations; a test asserts each one
    /// passes [`MappingTable::new`] validation.
    #[inline]
    pub fn table(&self) -> MappingTable {
        MappingTable {
            table: self.raw_table(),
        }
    }
}

impl FromStr for Convention {
    type Err = ConventionError;

    /// Look up a convention by name.
    ///
    /// Matching is case-insensitive and accepts `-` in place of `_`
    /// (`"white-transparent"` and `"white_transparent"` both resolve).
    ///
    /// # Errors
    ///
    /// Returns [`ConventionError::Unknown`] for unrecognized names. This is
    /// surfaced before any packing work begins.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Convention::ALL
            .into_iter()
            .find(|c| c.name() == normalized)
            .ok_or_else(|| ConventionError::Unknown(s.to_string()))
    }
}
