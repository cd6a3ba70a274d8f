//! Radix-85 conversion of 4-byte groups to 5-symbol groups and back.
//!
//! A partial final group of `L` bytes is zero-padded on the right, converted,
//! and truncated to `L + 1` symbols. Decoding pads a partial group of `L`
//! symbols with the highest digit (84) and keeps `L - 1` bytes, which exactly
//! undoes the truncation. A partial group of one symbol cannot be produced by
//! any encoder and is rejected.

use super::alphabet::Alphabet;
use super::compress::{Compression, expand_sentinel};

/// Digit used to pad a partial group when decoding.
const PAD_DIGIT: u32 = 84;

/// Why a decode (or decode-length computation) gave up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Malformed {
    Symbol { position: usize, byte: u8 },
    /// The number of group symbols (sentinels excluded) is 1 mod 5.
    Length,
}

/// Encoded length of `len` raw bytes without run compression:
/// `5k + (L > 0 ? L + 1 : 0)` for `len = 4k + L`.
pub const fn calc_encoded_len(len: usize) -> usize {
    let tail = len % 4;
    len / 4 * 5 + if tail == 0 { 0 } else { tail + 1 }
}

/// Decoded length of `len` group symbols: `4k + (L > 0 ? L - 1 : 0)` for
/// `len = 5k + L`. `L == 1` is not a valid length.
pub(crate) const fn decoded_len_of(len: usize) -> Result<usize, Malformed> {
    let tail = len % 5;
    if tail == 1 {
        return Err(Malformed::Length);
    }
    Ok(len / 5 * 4 + if tail == 0 { 0 } else { tail - 1 })
}

/// Exact decoded length of `data`, counting sentinels at group boundaries as
/// four bytes when `sentinels` is set. Symbols are not checked here.
pub(crate) fn decoded_len(sentinels: bool, data: &[u8]) -> Result<usize, Malformed> {
    if !sentinels {
        return decoded_len_of(data.len());
    }
    let mut runs = 0;
    let mut symbols = 0;
    for &byte in data {
        if symbols % 5 == 0 && expand_sentinel(byte).is_some() {
            runs += 1;
        } else {
            symbols += 1;
        }
    }
    Ok(runs * 4 + decoded_len_of(symbols)?)
}

#[inline(always)]
fn encode_word(alphabet: &Alphabet, mut word: u32, out: &mut [u8]) {
    for c in out[..5].iter_mut().rev() {
        *c = alphabet.symbol((word % 85) as u8);
        word /= 85;
    }
}

/// Encode `data` into `out`, returning the number of symbols written.
///
/// `out` must hold at least `calc_encoded_len(data.len())` bytes; full groups
/// matching an enabled `compression` pattern take a single byte instead of five.
pub(crate) fn encode_blocks(
    alphabet: &Alphabet,
    compression: Compression,
    data: &[u8],
    out: &mut [u8],
) -> usize {
    let mut wp = 0;
    let mut groups = data.chunks_exact(4);

    for group in &mut groups {
        let word = u32::from_be_bytes([group[0], group[1], group[2], group[3]]);
        if let Some(sentinel) = compression.sentinel_for(word) {
            out[wp] = sentinel;
            wp += 1;
            continue;
        }
        encode_word(alphabet, word, &mut out[wp..wp + 5]);
        wp += 5;
    }

    let tail = groups.remainder();
    if !tail.is_empty() {
        let mut padded = [0u8; 4];
        padded[..tail.len()].copy_from_slice(tail);
        let mut symbols = [0u8; 5];
        encode_word(alphabet, u32::from_be_bytes(padded), &mut symbols);
        let n = tail.len() + 1;
        out[wp..wp + n].copy_from_slice(&symbols[..n]);
        wp += n;
    }

    wp
}

/// Decode `data` into `out`, returning the number of bytes written.
///
/// `out` must hold at least `decoded_len(sentinels, data)` bytes. With
/// `sentinels` set, `z` and `y` at a group boundary expand to four zero bytes
/// and four spaces. Groups above `u32::MAX` wrap. On error, `out` may hold a
/// partial result.
pub(crate) fn decode_blocks(
    alphabet: &Alphabet,
    sentinels: bool,
    data: &[u8],
    out: &mut [u8],
) -> Result<usize, Malformed> {
    let mut wp = 0;
    let mut word = 0u32;
    let mut count = 0;

    for (position, &byte) in data.iter().enumerate() {
        if sentinels && count == 0 {
            if let Some(run) = expand_sentinel(byte) {
                out[wp..wp + 4].copy_from_slice(&run);
                wp += 4;
                continue;
            }
        }
        let digit = alphabet
            .digit(byte)
            .ok_or(Malformed::Symbol { position, byte })?;
        word = word.wrapping_mul(85).wrapping_add(u32::from(digit));
        count += 1;
        if count == 5 {
            out[wp..wp + 4].copy_from_slice(&word.to_be_bytes());
            wp += 4;
            word = 0;
            count = 0;
        }
    }

    match count {
        0 => {}
        1 => return Err(Malformed::Length),
        n => {
            for _ in n..5 {
                word = word.wrapping_mul(85).wrapping_add(PAD_DIGIT);
            }
            let keep = n - 1;
            out[wp..wp + keep].copy_from_slice(&word.to_be_bytes()[..keep]);
            wp += keep;
        }
    }

    Ok(wp)
}

/// True if every byte is an alphabet symbol (or, with `sentinels`, a sentinel at
/// a group boundary) and the group-symbol count is not 1 mod 5.
pub(crate) fn validate(alphabet: &Alphabet, sentinels: bool, data: &[u8]) -> bool {
    let mut symbols = 0usize;
    for &byte in data {
        if alphabet.contains(byte) {
            symbols += 1;
        } else if !(sentinels && symbols % 5 == 0 && expand_sentinel(byte).is_some()) {
            return false;
        }
    }
    symbols % 5 != 1
}
