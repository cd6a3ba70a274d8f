//! Whole-buffer base85: the entire input is one big-endian unsigned integer
//! written as a fixed number of base-85 digits, most significant first.
//!
//! This is the RFC 1924 algorithm for IPv6 addresses. It is quadratic in the
//! input length and meant for small fixed-size blocks.

use num_bigint::BigUint;

use super::alphabet::Alphabet;
use super::block::Malformed;

/// Number of symbols for a `len`-byte block: `ceil(len * 5 / 4)`.
pub(crate) const fn encoded_len(len: usize) -> usize {
    super::block::calc_encoded_len(len)
}

/// Number of bytes for a `len`-symbol block: `floor(len * 4 / 5)`.
pub(crate) const fn decoded_len(len: usize) -> usize {
    len / 5 * 4 + len % 5 * 4 / 5
}

/// Fill `out` with the base-85 digits of `data`, last digit at the end.
pub(crate) fn encode(alphabet: &Alphabet, data: &[u8], out: &mut [u8]) {
    let mut value = BigUint::from_bytes_be(data);
    for c in out.iter_mut().rev() {
        let digit = (&value % 85u32).to_u32_digits().first().copied().unwrap_or(0);
        *c = alphabet.symbol(digit as u8);
        value /= 85u32;
    }
}

/// Fold `data` into one integer and write it big-endian into all of `out`,
/// zero-padding on the left or dropping excess high-order bytes.
pub(crate) fn decode(alphabet: &Alphabet, data: &[u8], out: &mut [u8]) -> Result<(), Malformed> {
    let mut value = BigUint::default();
    for (position, &byte) in data.iter().enumerate() {
        let digit = alphabet
            .digit(byte)
            .ok_or(Malformed::Symbol { position, byte })?;
        value *= 85u32;
        value += u32::from(digit);
    }

    let bytes = value.to_bytes_be();
    if bytes.len() >= out.len() {
        let skip = bytes.len() - out.len();
        out.copy_from_slice(&bytes[skip..]);
    } else {
        let pad = out.len() - bytes.len();
        out[..pad].fill(0);
        out[pad..].copy_from_slice(&bytes);
    }
    Ok(())
}
