//! Lossless compression for monetary amounts.
//!
//! Round monetary values carry long runs of trailing decimal zeros.
//! Factoring them out before varuint encoding shrinks the wire form of
//! typical amounts to one or two bytes.

/// Compresses an amount for varuint transport.
///
/// Zero maps to zero. Otherwise, with `e` the largest power of ten
/// dividing `n` (capped at 9) and the amount reduced by `10^e`:
/// the reduced amount's last digit `d` (nonzero when `e < 9`) and `e`
/// are folded into the low decimal digits of the result.
///
/// Arithmetic wraps modulo 2^64; amounts above roughly `u64::MAX / 9`
/// are outside the transform's lossless range and wrap identically on
/// every conforming node.
pub fn compress_amount(n: u64) -> u64 {
    if n == 0 {
        return 0;
    }
    let mut n = n;
    let mut e = 0u64;
    while n % 10 == 0 && e < 9 {
        n /= 10;
        e += 1;
    }
    if e < 9 {
        // The loop stripped every trailing zero, so d is in [1, 9].
        let d = n % 10;
        n /= 10;
        (n * 9 + d - 1).wrapping_mul(10).wrapping_add(1 + e)
    } else {
        (n - 1).wrapping_mul(10).wrapping_add(10)
    }
}

/// Inverse of [`compress_amount`].
pub fn decompress_amount(x: u64) -> u64 {
    // x = 0  or  x = 1 + 10*(9*n + d - 1) + e  or  x = 1 + 10*(n - 1) + 9
    if x == 0 {
        return 0;
    }
    let mut x = x - 1;
    let e = x % 10;
    x /= 10;
    let mut n = if e < 9 {
        let d = x % 9 + 1;
        x /= 9;
        x.wrapping_mul(10).wrapping_add(d)
    } else {
        x.wrapping_add(1)
    };
    for _ in 0..e {
        n = n.wrapping_mul(10);
    }
    n
}

#[cfg(test)]
mod tests {
    use super::*;

    // Largest amount the compressed form roundtrips without wrapping.
    const MAX_LOSSLESS: u64 = 2_000_000_000_000_000_000;

    #[test]
    fn compress_vectors() {
        assert_eq!(compress_amount(0), 0);
        assert_eq!(compress_amount(1), 1);
        assert_eq!(compress_amount(9), 81);
        assert_eq!(compress_amount(10), 2);
        // One coin at eight-decimal precision.
        assert_eq!(compress_amount(100_000_000), 9);
        // Fifty coins.
        assert_eq!(compress_amount(5_000_000_000), 50);
        assert_eq!(compress_amount(123_456_789), 1_111_111_101);
    }

    #[test]
    fn decompress_vectors() {
        assert_eq!(decompress_amount(0), 0);
        assert_eq!(decompress_amount(1), 1);
        assert_eq!(decompress_amount(81), 9);
        assert_eq!(decompress_amount(2), 10);
        assert_eq!(decompress_amount(9), 100_000_000);
        assert_eq!(decompress_amount(50), 5_000_000_000);
        assert_eq!(decompress_amount(1_111_111_101), 123_456_789);
    }

    #[test]
    fn exponent_nine_branch() {
        // 10^9 strips nine zeros and takes the e == 9 form.
        assert_eq!(compress_amount(1_000_000_000), 10);
        assert_eq!(decompress_amount(10), 1_000_000_000);
        assert_eq!(compress_amount(2_000_000_000), 20);
        assert_eq!(decompress_amount(20), 2_000_000_000);
    }

    #[test]
    fn roundtrip() {
        proptest::proptest!(|(n in 0u64..=MAX_LOSSLESS)| {
            assert_eq!(decompress_amount(compress_amount(n)), n);
        });
    }

    #[test]
    fn roundtrip_round_values() {
        proptest::proptest!(|(n in 0u64..=20_000_000, e in 0u32..=9)| {
            let amount = n * 10u64.pow(e);
            assert_eq!(decompress_amount(compress_amount(amount)), amount);
        });
    }
}
