//! Byte ↔ class-index conversions.
//!
//! A byte decomposes into three fields (`h2`, `d`, `l`) per a fixed bit
//! layout. The decode direction is lossy on purpose — bit0 is free
//! and the `(1,1)` corner of the `d` table aliases to `d=0` — so every class
//! has two to four byte preimages. `canonical_byte` always rebuilds the
//! unique representative with bit0 cleared and the forward `d` table.

use crate::error::{KernelError, Result};

/// The decomposed bit-field view of a byte: `(h2, d, l)`.
pub type Components = (u8, u8, u8);

/// Decode a byte into its `(h2, d, l)` components.
///
/// - `h2 = (bit7 << 1) | bit6`
/// - `d` via `(bit4, bit5)`: `(0,0)->0, (1,0)->1, (0,1)->2, (1,1)->0`
/// - `l = (bit3 << 2) | (bit2 << 1) | bit1`
/// - bit0 is ignored
pub fn decode_byte_to_components(b: u8) -> Components {
    let bit = |n: u8| (b >> n) & 1;
    let h2 = (bit(7) << 1) | bit(6);
    let d = match (bit(4), bit(5)) {
        (0, 0) => 0,
        (1, 0) => 1,
        (0, 1) => 2,
        (1, 1) => 0,
        _ => unreachable!(),
    };
    let l = (bit(3) << 2) | (bit(2) << 1) | bit(1);
    (h2, d, l)
}

/// Encode `(h2, d, l)` into the canonical byte: bit0 = 0, forward `d` table
/// (`d=0 -> (0,0)`, `d=1 -> (1,0)`, `d=2 -> (0,1)`).
pub fn encode_components_to_byte(h2: u8, d: u8, l: u8) -> u8 {
    let (b5, b4) = match d {
        0 => (0, 0),
        1 => (0, 1),
        2 => (1, 0),
        _ => unreachable!("d out of range"),
    };
    let b7 = (h2 >> 1) & 1;
    let b6 = h2 & 1;
    let b3 = (l >> 2) & 1;
    let b2 = (l >> 1) & 1;
    let b1 = l & 1;
    (b7 << 7) | (b6 << 6) | (b5 << 5) | (b4 << 4) | (b3 << 3) | (b2 << 2) | (b1 << 1)
}

/// Class index `c = 24*h2 + 8*d + l`, in `[0..95]`.
pub fn components_to_class_index(h2: u8, d: u8, l: u8) -> u8 {
    24 * h2 + 8 * d + l
}

/// Inverse of [`components_to_class_index`]; fails outside `[0..95]`.
pub fn decode_class_index(c: u8) -> Result<Components> {
    if c > 95 {
        return Err(KernelError::range("class index", c as i64, 0, 95));
    }
    let h2 = c / 24;
    let d = (c % 24) / 8;
    let l = c % 8;
    Ok((h2, d, l))
}

/// `classIndex(byte)`: decode then pack into `[0..95]`.
pub fn class_index(b: u8) -> u8 {
    let (h2, d, l) = decode_byte_to_components(b);
    components_to_class_index(h2, d, l)
}

/// `canonicalByte(classIndex)`.
pub fn canonical_byte(c: u8) -> Result<u8> {
    let (h2, d, l) = decode_class_index(c)?;
    Ok(encode_components_to_byte(h2, d, l))
}

/// Two bytes are equivalent iff they decode to the same components.
pub fn are_equivalent(b1: u8, b2: u8) -> bool {
    decode_byte_to_components(b1) == decode_byte_to_components(b2)
}

/// All bytes in `[0..255]` mapping to class `c` (size 2 or 4).
pub fn get_equivalence_class(c: u8) -> Result<Vec<u8>> {
    decode_class_index(c)?;
    Ok((0u16..=255)
        .map(|b| b as u8)
        .filter(|&b| class_index(b) == c)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_encode_roundtrip_is_canonical() {
        for b in 0u16..=255 {
            let b = b as u8;
            let c = class_index(b);
            let canon = canonical_byte(c).unwrap();
            assert_eq!(canon & 1, 0, "canonical byte must have bit0 = 0");
            assert!(are_equivalent(b, canon));
        }
    }

    #[test]
    fn test_class_index_canonical_byte_roundtrip() {
        for c in 0u8..=95 {
            let b = canonical_byte(c).unwrap();
            assert_eq!(class_index(b), c);
        }
    }

    #[test]
    fn test_decode_class_index_out_of_range() {
        assert!(decode_class_index(96).is_err());
        assert!(decode_class_index(255).is_err());
    }

    #[test]
    fn test_equivalence_class_size_two_or_four() {
        for c in 0u8..=95 {
            let class = get_equivalence_class(c).unwrap();
            assert!(class.len() == 2 || class.len() == 4, "c={} size={}", c, class.len());
        }
    }

    #[test]
    fn test_d_table_eleven_aliases_to_zero() {
        // bits: b7 b6 b5 b4 b3 b2 b1 b0, with (b5,b4) = (1,1)
        let b = 0b0011_0000u8;
        let (_, d, _) = decode_byte_to_components(b);
        assert_eq!(d, 0);
    }
}
