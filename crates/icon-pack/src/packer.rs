//! Packing of 2-bit palette indices into bytes.
//!
//! [`pack`] is the core of the pipeline: it folds groups of four remapped
//! indices into single bytes, earliest pixel in the least-significant bit
//! pair. Output bytes are appended in strictly increasing raster order --
//! byte *i* always depends on pixels `[4i, 4i+3]` and nothing else.

use crate::convention::MappingTable;
use thiserror::Error;

/// Number of pixels encoded in one output byte.
pub const PIXELS_PER_BYTE: usize = 4;

/// Width of one packed pixel field in bits.
pub const BITS_PER_PIXEL: u8 = 2;

/// Largest valid raw palette index.
const MAX_INDEX: u8 = 3;

/// Error type for the pixel packer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PackError {
    /// A raster element was outside {0,1,2,3}. Indicates a broken upstream
    /// quantizer; the conversion aborts with no partial output.
    #[error("invalid pixel value {value} at raster index {index} (expected 0..=3)")]
    InvalidPixelValue {
        /// Position of the offending element in raster order.
        index: usize,
        /// The out-of-range value.
        value: u8,
    },
}

/// Pack a quantized raster into 2bpp bytes under the given mapping.
///
/// The raster is partitioned into consecutive, non-overlapping groups of
/// four pixels; a trailing short group is padded with raw index 0 (padding,
/// not data -- the pad bit-pairs end up holding `mapping.map(0)`). For a
/// group `(p0, p1, p2, p3)` with `p0` earliest in raster order the output
/// byte is:
///
/// ```text
/// byte = m(p0) | m(p1) << 2 | m(p2) << 4 | m(p3) << 6
/// ```
///
/// All arithmetic is explicit `u8` shift-and-or; every element is range
/// checked before it touches the accumulator, so a bad value can never be
/// silently masked into the output.
///
/// # Errors
///
/// Returns [`PackError::InvalidPixelValue`] on the first raster element
/// outside `0..=3`.
///
/// # Example
///
/// ```
/// use icon_pack::{pack, Convention};
///
/// let bytes = pack(&[0, 1, 2, 3], &Convention::Identity.table()).unwrap();
/// assert_eq!(bytes, [0xe4]);
/// ```
pub fn pack(raster: &[u8], mapping: &MappingTable) -> Result<Vec<u8>, PackError> {
    let mut packed = Vec::with_capacity(raster.len().div_ceil(PIXELS_PER_BYTE));

    for (group_index, group) in raster.chunks(PIXELS_PER_BYTE).enumerate() {
        let mut byte = 0u8;
        for (slot, &value) in group.iter().enumerate() {
            if value > MAX_INDEX {
                return Err(PackError::InvalidPixelValue {
                    index: group_index * PIXELS_PER_BYTE + slot,
                    value,
                });
            }
            byte |= mapping.map(value) << (slot as u8 * BITS_PER_PIXEL);
        }
        // Short trailing group: missing pixels are raw index 0 before mapping
        for slot in group.len()..PIXELS_PER_BYTE {
            byte |= mapping.map(0) << (slot as u8 * BITS_PER_PIXEL);
        }
        packed.push(byte);
    }

    Ok(packed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convention::Convention;

    #[test]
    fn test_identity_round_trip_scenario() {
        // 0 | 1<<2 | 2<<4 | 3<<6 = 0 + 4 + 32 + 192 = 0xE4
        let bytes = pack(&[0, 1, 2, 3], &Convention::Identity.table()).unwrap();
        assert_eq!(bytes, [0xe4]);
    }

    #[test]
    fn test_padding_scenario() {
        // 1 | 2<<2 = 9, upper pairs padded with mapping(0) = 0
        let bytes = pack(&[1, 2], &Convention::Identity.table()).unwrap();
        assert_eq!(bytes, [0x09]);
    }

    #[test]
    fn test_white_transparent_remapping_scenario() {
        // [0,1,2,3] remaps to [3,2,1,0]: 3 | 2<<2 | 1<<4 | 0<<6 = 0x1B
        let bytes = pack(&[0, 1, 2, 3], &Convention::WhiteTransparent.table()).unwrap();
        assert_eq!(bytes, [0x1b]);
    }

    #[test]
    fn test_empty_raster() {
        let bytes = pack(&[], &Convention::Identity.table()).unwrap();
        assert!(bytes.is_empty());
    }

    #[test]
    fn test_output_length_exact_multiple() {
        for groups in 1..8usize {
            let raster = vec![2u8; groups * PIXELS_PER_BYTE];
            let bytes = pack(&raster, &Convention::Identity.table()).unwrap();
            assert_eq!(bytes.len(), groups, "len(R)={} pixels", raster.len());
        }
    }

    #[test]
    fn test_output_length_with_remainder() {
        for len in [1usize, 2, 3, 5, 6, 7, 9] {
            let raster = vec![1u8; len];
            let bytes = pack(&raster, &Convention::Identity.table()).unwrap();
            assert_eq!(
                bytes.len(),
                len.div_ceil(PIXELS_PER_BYTE),
                "len(R)={len} should pack to ceil(len/4) bytes"
            );
        }
    }

    #[test]
    fn test_padding_pairs_equal_mapped_zero() {
        // Under white_transparent, mapping(0) = 3, so the unused high pairs
        // of the final byte must hold 3, not 0.
        let bytes = pack(&[0], &Convention::WhiteTransparent.table()).unwrap();
        // 3 | 3<<2 | 3<<4 | 3<<6 = 0xFF
        assert_eq!(bytes, [0xff]);

        let bytes = pack(&[0, 0, 0], &Convention::VectorSource.table()).unwrap();
        // mapping(0) = 0 everywhere, pad pair also 0
        assert_eq!(bytes, [0x00]);
    }

    #[test]
    fn test_byte_depends_only_on_its_own_group() {
        // Byte 0 of pack([a,b,c,d,...]) is a function of (a,b,c,d) alone:
        // vary everything after the first group and byte 0 must not move.
        let table = Convention::Identity.table();
        let head = [3u8, 0, 2, 1];

        let mut reference: Vec<u8> = head.to_vec();
        reference.extend_from_slice(&[0, 0, 0, 0]);
        let expected = pack(&reference, &table).unwrap()[0];

        for tail in [[1u8, 1, 1, 1], [3, 3, 3, 3], [2, 0, 1, 3]] {
            let mut raster = head.to_vec();
            raster.extend_from_slice(&tail);
            let bytes = pack(&raster, &table).unwrap();
            assert_eq!(bytes[0], expected, "byte 0 changed with tail {tail:?}");
        }
    }

    #[test]
    fn test_bit_pair_order_is_not_reversible() {
        // Reversing the raster does not reverse the byte sequence: the
        // bit-pair order inside each byte is fixed.
        let table = Convention::Identity.table();
        let raster = [0u8, 1, 2, 3, 3, 2, 1, 0];
        let forward = pack(&raster, &table).unwrap();
        let mut reversed_input: Vec<u8> = raster.to_vec();
        reversed_input.reverse();
        let backward = pack(&reversed_input, &table).unwrap();

        let mut forward_reversed = forward.clone();
        forward_reversed.reverse();
        assert_ne!(backward, forward_reversed);
    }

    #[test]
    fn test_bytes_produced_in_raster_order() {
        // Group k lands at byte k for every k.
        let table = Convention::Identity.table();
        let raster: Vec<u8> = (0..32).map(|i| (i / 4 % 4) as u8).collect();
        let bytes = pack(&raster, &table).unwrap();
        for (k, &byte) in bytes.iter().enumerate() {
            let v = (k % 4) as u8;
            let expected = v | v << 2 | v << 4 | v << 6;
            assert_eq!(byte, expected, "byte {k} out of order");
        }
    }

    #[test]
    fn test_invalid_pixel_value_reports_position() {
        let result = pack(&[0, 1, 7, 3], &Convention::Identity.table());
        assert_eq!(
            result,
            Err(PackError::InvalidPixelValue { index: 2, value: 7 })
        );
    }

    #[test]
    fn test_invalid_pixel_value_in_later_group() {
        let result = pack(&[0, 1, 2, 3, 0, 255], &Convention::Identity.table());
        assert_eq!(
            result,
            Err(PackError::InvalidPixelValue {
                index: 5,
                value: 255
            })
        );
    }

    #[test]
    fn test_remapping_applies_per_pixel() {
        // vector_source swaps 1 and 3: [1,1,1,1] packs as four 3s
        let bytes = pack(&[1, 1, 1, 1], &Convention::VectorSource.table()).unwrap();
        assert_eq!(bytes, [0xff]);
    }
}
