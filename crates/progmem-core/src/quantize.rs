//! Per-channel threshold quantization and byte packing.
//!
//! Two packings are supported:
//!
//! - **RGB222**: each channel is reduced to a 2-bit bucket and one pixel
//!   fills one byte as `0bBBGGRR00`.
//! - **RGB111**: each channel is reduced to a single bit and two adjacent
//!   pixels share one byte as `0bAAABBB00`, the even pixel in the high bits.

/// Upper (exclusive) channel bounds for buckets 0, 1 and 2. Anything at or
/// above the last bound lands in bucket 3.
pub const BUCKET_BOUNDS: [u8; 3] = [64, 128, 192];

/// Channel values strictly above this are "on" in 1-bit quantization.
pub const BIT_THRESHOLD: u8 = 127;

/// Map a channel value to its 2-bit bucket (0..=3).
#[inline]
pub fn channel_bucket(c: u8) -> u8 {
    if c < BUCKET_BOUNDS[0] {
        0
    } else if c < BUCKET_BOUNDS[1] {
        1
    } else if c < BUCKET_BOUNDS[2] {
        2
    } else {
        3
    }
}

/// Map a channel value to a single bit.
#[inline]
pub fn channel_bit(c: u8) -> u8 {
    (c > BIT_THRESHOLD) as u8
}

/// Pack one pixel into an RGB222 byte: red at bit 2, green at 4, blue at 6.
///
/// The two low bits are always zero.
#[inline]
pub fn rgb222([r, g, b]: [u8; 3]) -> u8 {
    (channel_bucket(r) << 2) + (channel_bucket(g) << 4) + (channel_bucket(b) << 6)
}

/// Compute a pixel's 3-bit RGB111 code: red weighs 1, green 2, blue 4.
#[inline]
pub fn rgb111_code([r, g, b]: [u8; 3]) -> u8 {
    channel_bit(r) + (channel_bit(g) << 1) + (channel_bit(b) << 2)
}

/// Pack two adjacent pixels into one RGB111 byte.
///
/// The even (left) pixel occupies bits 5..=7 and the odd (right) pixel bits 2..=4.
#[inline]
pub fn pack_rgb111_pair(even: [u8; 3], odd: [u8; 3]) -> u8 {
    (rgb111_code(even) << 5) + (rgb111_code(odd) << 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_boundaries() {
        let cases = [
            (0, 0),
            (63, 0),
            (64, 1),
            (127, 1),
            (128, 2),
            (191, 2),
            (192, 3),
            (255, 3),
        ];
        for (value, bucket) in cases {
            assert_eq!(channel_bucket(value), bucket, "channel value {}", value);
        }
    }

    #[test]
    fn test_bit_boundaries() {
        assert_eq!(channel_bit(0), 0);
        assert_eq!(channel_bit(127), 0);
        assert_eq!(channel_bit(128), 1);
        assert_eq!(channel_bit(255), 1);
    }

    #[test]
    fn test_rgb222_white() {
        assert_eq!(rgb222([255, 255, 255]), 0xfc);
    }

    #[test]
    fn test_rgb222_black() {
        assert_eq!(rgb222([0, 0, 0]), 0x00);
    }

    #[test]
    fn test_rgb222_channel_positions() {
        assert_eq!(rgb222([255, 0, 0]), 0b0000_1100);
        assert_eq!(rgb222([0, 255, 0]), 0b0011_0000);
        assert_eq!(rgb222([0, 0, 255]), 0b1100_0000);
        // Mixed buckets: r=1, g=2, b=0
        assert_eq!(rgb222([100, 150, 10]), (1 << 2) | (2 << 4));
    }

    #[test]
    fn test_rgb111_codes() {
        assert_eq!(rgb111_code([0, 0, 0]), 0);
        assert_eq!(rgb111_code([255, 0, 0]), 1);
        assert_eq!(rgb111_code([0, 255, 0]), 2);
        assert_eq!(rgb111_code([0, 0, 255]), 4);
        assert_eq!(rgb111_code([255, 255, 255]), 7);
    }

    #[test]
    fn test_pack_pair_black_white() {
        assert_eq!(pack_rgb111_pair([0, 0, 0], [255, 255, 255]), 0x1c);
        assert_eq!(pack_rgb111_pair([255, 255, 255], [0, 0, 0]), 0xe0);
        assert_eq!(pack_rgb111_pair([255, 255, 255], [255, 255, 255]), 0xfc);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: Increasing a channel never lowers its bucket.
        #[test]
        fn prop_bucket_monotonic(a in any::<u8>(), b in any::<u8>()) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(channel_bucket(lo) <= channel_bucket(hi));
            prop_assert!(channel_bit(lo) <= channel_bit(hi));
        }

        /// Property: Buckets and bits stay within their bit width.
        #[test]
        fn prop_codes_in_range(pixel in any::<[u8; 3]>()) {
            prop_assert!(pixel.iter().all(|&c| channel_bucket(c) <= 3));
            prop_assert!(rgb111_code(pixel) <= 7);
        }

        /// Property: The two low bits of every packed byte are clear.
        #[test]
        fn prop_low_bits_clear(even in any::<[u8; 3]>(), odd in any::<[u8; 3]>()) {
            prop_assert_eq!(rgb222(even) & 0b11, 0);
            prop_assert_eq!(pack_rgb111_pair(even, odd) & 0b11, 0);
        }

        /// Property: Each half of a packed pair decodes back to its pixel code.
        #[test]
        fn prop_pair_halves_independent(even in any::<[u8; 3]>(), odd in any::<[u8; 3]>()) {
            let byte = pack_rgb111_pair(even, odd);
            prop_assert_eq!(byte >> 5, rgb111_code(even));
            prop_assert_eq!((byte >> 2) & 0b111, rgb111_code(odd));
        }
    }
}
