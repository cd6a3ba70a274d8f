use std::fmt;

use super::alphabet::{self, Alphabet};
use super::bigint;
use super::block::{self, Malformed};
use super::compress::{Compression, CompressionFlags};
use super::error::{Base85Error, Result, check_bounds};

pub use super::block::calc_encoded_len;

/// The three base85 character sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// RFC 1924 alphabet, encoded in 4-byte groups like Ascii85 and Z85.
    Rfc1924,
    /// ZeroMQ Z85.
    Z85,
    /// Ascii85 with `z`/`y` run compression.
    Ascii85,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::Rfc1924, Variant::Z85, Variant::Ascii85];

    pub fn name(self) -> &'static str {
        match self {
            Variant::Rfc1924 => "RFC1924",
            Variant::Z85 => "Z85",
            Variant::Ascii85 => "Ascii85",
        }
    }

    pub fn alphabet(self) -> &'static Alphabet {
        match self {
            Variant::Rfc1924 => &alphabet::RFC1924,
            Variant::Z85 => &alphabet::Z85,
            Variant::Ascii85 => &alphabet::ASCII85,
        }
    }

    /// Whether encoded data may contain run sentinels.
    pub fn has_sentinels(self) -> bool {
        matches!(self, Variant::Ascii85)
    }

    /// Shared encoder for this variant.
    pub fn encoder(self) -> &'static Encoder {
        match self {
            Variant::Rfc1924 => &RFC1924_ENCODER,
            Variant::Z85 => &Z85_ENCODER,
            Variant::Ascii85 => &ASCII85_ENCODER,
        }
    }

    /// Shared decoder for this variant.
    pub fn decoder(self) -> &'static Decoder {
        match self {
            Variant::Rfc1924 => &RFC1924_DECODER,
            Variant::Z85 => &Z85_DECODER,
            Variant::Ascii85 => &ASCII85_DECODER,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Converts raw bytes to base85 symbols.
///
/// Encoders are `Sync` and meant to be shared. Only the Ascii85 encoder has
/// state: its [`CompressionFlags`], read once per call.
#[derive(Debug)]
pub struct Encoder {
    variant: Variant,
    compression: Option<CompressionFlags>,
}

impl Encoder {
    /// A new encoder with its own compression flags (both enabled for Ascii85).
    pub const fn new(variant: Variant) -> Self {
        let compression = match variant {
            Variant::Ascii85 => Some(CompressionFlags::new(true, true)),
            Variant::Rfc1924 | Variant::Z85 => None,
        };
        Encoder {
            variant,
            compression,
        }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Run-compression switches, for variants that support them.
    pub fn compression(&self) -> Option<&CompressionFlags> {
        self.compression.as_ref()
    }

    /// The 85 symbols of this encoder's alphabet, in digit order.
    pub fn charset(&self) -> &'static str {
        self.variant.alphabet().as_str()
    }

    fn snapshot(&self) -> Compression {
        self.compression
            .as_ref()
            .map_or(Compression::NONE, CompressionFlags::snapshot)
    }

    fn len_with(compression: Compression, data: &[u8]) -> usize {
        calc_encoded_len(data.len()) - 4 * compression.count_runs(data)
    }

    /// Exact encoded length of `data` under the current compression setting.
    pub fn encoded_len(&self, data: &[u8]) -> usize {
        Self::len_with(self.snapshot(), data)
    }

    pub fn encode(&self, data: &[u8]) -> Vec<u8> {
        let compression = self.snapshot();
        let mut out = vec![0u8; Self::len_with(compression, data)];
        let written = block::encode_blocks(self.variant.alphabet(), compression, data, &mut out);
        debug_assert_eq!(written, out.len());
        out
    }

    /// Encode `data[offset..offset + length]`.
    pub fn encode_range(&self, data: &[u8], offset: usize, length: usize) -> Result<Vec<u8>> {
        check_bounds(data.len(), offset, length)?;
        Ok(self.encode(&data[offset..offset + length]))
    }

    /// Encode `data[offset..offset + length]` into `out` starting at `out_offset`.
    /// Returns the number of symbols written. Nothing is written on error.
    pub fn encode_into(
        &self,
        data: &[u8],
        offset: usize,
        length: usize,
        out: &mut [u8],
        out_offset: usize,
    ) -> Result<usize> {
        check_bounds(data.len(), offset, length)?;
        let data = &data[offset..offset + length];
        let compression = self.snapshot();
        let size = Self::len_with(compression, data);
        check_bounds(out.len(), out_offset, size)?;
        Ok(block::encode_blocks(
            self.variant.alphabet(),
            compression,
            data,
            &mut out[out_offset..out_offset + size],
        ))
    }

    pub fn encode_to_string(&self, data: &[u8]) -> String {
        // SAFETY: every alphabet symbol and sentinel is ASCII
        unsafe { String::from_utf8_unchecked(self.encode(data)) }
    }

    /// Encode the UTF-8 bytes of `text`.
    pub fn encode_str(&self, text: &str) -> String {
        self.encode_to_string(text.as_bytes())
    }

    /// Encode `data` as a single big integer, most significant digit first.
    /// For 16 bytes this is the RFC 1924 IPv6 address representation.
    pub fn encode_block_reverse(&self, data: &[u8]) -> Vec<u8> {
        let mut out = vec![0u8; bigint::encoded_len(data.len())];
        bigint::encode(self.variant.alphabet(), data, &mut out);
        out
    }

    pub fn encode_block_reverse_into(
        &self,
        data: &[u8],
        offset: usize,
        length: usize,
        out: &mut [u8],
        out_offset: usize,
    ) -> Result<usize> {
        check_bounds(data.len(), offset, length)?;
        let size = bigint::encoded_len(length);
        check_bounds(out.len(), out_offset, size)?;
        bigint::encode(
            self.variant.alphabet(),
            &data[offset..offset + length],
            &mut out[out_offset..out_offset + size],
        );
        Ok(size)
    }
}

/// Converts base85 symbols back to raw bytes. Stateless.
#[derive(Debug)]
pub struct Decoder {
    variant: Variant,
}

impl Decoder {
    pub const fn new(variant: Variant) -> Self {
        Decoder { variant }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    fn malformed(&self, reason: Malformed, length: usize) -> Base85Error {
        match reason {
            Malformed::Symbol { position, byte } => Base85Error::InvalidSymbol {
                variant: self.variant,
                byte,
                position,
            },
            Malformed::Length => Base85Error::InvalidLength {
                variant: self.variant,
                length,
            },
        }
    }

    /// Decoded length of `length` symbols, assuming no run sentinels.
    pub fn calc_decoded_len(&self, length: usize) -> Result<usize> {
        block::decoded_len_of(length).map_err(|m| self.malformed(m, length))
    }

    /// Exact decoded length of `data`, expanding sentinels where the variant
    /// has them. Fails only on a length that is 1 mod 5; symbols are not checked.
    pub fn decoded_len(&self, data: &[u8]) -> Result<usize> {
        block::decoded_len(self.variant.has_sentinels(), data)
            .map_err(|m| self.malformed(m, data.len()))
    }

    pub fn decode(&self, data: &[u8]) -> Result<Vec<u8>> {
        let mut out = vec![0u8; self.decoded_len(data)?];
        let written = block::decode_blocks(
            self.variant.alphabet(),
            self.variant.has_sentinels(),
            data,
            &mut out,
        )
        .map_err(|m| self.malformed(m, data.len()))?;
        debug_assert_eq!(written, out.len());
        Ok(out)
    }

    /// Decode `data[offset..offset + length]`. Error positions are relative to
    /// `offset`.
    pub fn decode_range(&self, data: &[u8], offset: usize, length: usize) -> Result<Vec<u8>> {
        check_bounds(data.len(), offset, length)?;
        self.decode(&data[offset..offset + length])
    }

    /// Decode `data[offset..offset + length]` into `out` starting at `out_offset`.
    /// Returns the number of bytes written. Bounds and length are checked
    /// before writing; on a bad symbol `out` may hold a partial result.
    pub fn decode_into(
        &self,
        data: &[u8],
        offset: usize,
        length: usize,
        out: &mut [u8],
        out_offset: usize,
    ) -> Result<usize> {
        check_bounds(data.len(), offset, length)?;
        let data = &data[offset..offset + length];
        let size = self.decoded_len(data)?;
        check_bounds(out.len(), out_offset, size)?;
        block::decode_blocks(
            self.variant.alphabet(),
            self.variant.has_sentinels(),
            data,
            &mut out[out_offset..out_offset + size],
        )
        .map_err(|m| self.malformed(m, data.len()))
    }

    /// Decode ASCII text into bytes.
    pub fn decode_to_bytes(&self, text: &str) -> Result<Vec<u8>> {
        self.decode(text.as_bytes())
    }

    /// Decode ASCII text into a UTF-8 string. Invalid UTF-8 in the decoded
    /// bytes is replaced with U+FFFD.
    pub fn decode_str(&self, text: &str) -> Result<String> {
        let bytes = self.decode(text.as_bytes())?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// True if `data` consists of valid symbols and has a decodable length.
    pub fn test(&self, data: &[u8]) -> bool {
        block::validate(self.variant.alphabet(), self.variant.has_sentinels(), data)
    }

    /// [`Decoder::test`] on a sub-range. Only a bad range is an error.
    pub fn test_range(&self, data: &[u8], offset: usize, length: usize) -> Result<bool> {
        check_bounds(data.len(), offset, length)?;
        Ok(self.test(&data[offset..offset + length]))
    }

    /// Inverse of [`Encoder::encode_block_reverse`]. The result has
    /// `floor(len * 4 / 5)` bytes.
    pub fn decode_block_reverse(&self, data: &[u8]) -> Result<Vec<u8>> {
        let mut out = vec![0u8; bigint::decoded_len(data.len())];
        bigint::decode(self.variant.alphabet(), data, &mut out)
            .map_err(|m| self.malformed(m, data.len()))?;
        Ok(out)
    }

    pub fn decode_block_reverse_into(
        &self,
        data: &[u8],
        offset: usize,
        length: usize,
        out: &mut [u8],
        out_offset: usize,
    ) -> Result<usize> {
        check_bounds(data.len(), offset, length)?;
        let size = bigint::decoded_len(length);
        check_bounds(out.len(), out_offset, size)?;
        bigint::decode(
            self.variant.alphabet(),
            &data[offset..offset + length],
            &mut out[out_offset..out_offset + size],
        )
        .map_err(|m| self.malformed(m, length))?;
        Ok(size)
    }
}

static RFC1924_ENCODER: Encoder = Encoder::new(Variant::Rfc1924);
static RFC1924_DECODER: Decoder = Decoder::new(Variant::Rfc1924);
static Z85_ENCODER: Encoder = Encoder::new(Variant::Z85);
static Z85_DECODER: Decoder = Decoder::new(Variant::Z85);
static ASCII85_ENCODER: Encoder = Encoder::new(Variant::Ascii85);
static ASCII85_DECODER: Decoder = Decoder::new(Variant::Ascii85);

pub fn rfc1924_encoder() -> &'static Encoder {
    &RFC1924_ENCODER
}

pub fn rfc1924_decoder() -> &'static Decoder {
    &RFC1924_DECODER
}

pub fn z85_encoder() -> &'static Encoder {
    &Z85_ENCODER
}

pub fn z85_decoder() -> &'static Decoder {
    &Z85_DECODER
}

/// Shared Ascii85 encoder. Its compression flags are process-wide; use
/// [`Encoder::new`] for a private setting.
pub fn ascii85_encoder() -> &'static Encoder {
    &ASCII85_ENCODER
}

pub fn ascii85_decoder() -> &'static Decoder {
    &ASCII85_DECODER
}
