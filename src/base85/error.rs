use thiserror::Error;

use super::core::Variant;

/// Errors raised by the base85 codecs.
///
/// `OutOfBounds` is a bad call (the caller passed a range that does not fit its
/// buffers) and is always detected before any byte is read or written. The other
/// two kinds are bad data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Base85Error {
    #[error("range {offset}+{length} out of bounds for buffer of {size} bytes")]
    OutOfBounds {
        offset: usize,
        length: usize,
        size: usize,
    },

    #[error("malformed Base85/{variant} data: invalid symbol 0x{byte:02x} at position {position}")]
    InvalidSymbol {
        variant: Variant,
        byte: u8,
        position: usize,
    },

    #[error("malformed Base85/{variant} data: {length} is not a valid data length")]
    InvalidLength { variant: Variant, length: usize },
}

impl Base85Error {
    /// True for errors caused by the encoded data rather than by the call.
    pub fn is_malformed(&self) -> bool {
        !self.is_argument_error()
    }

    pub fn is_argument_error(&self) -> bool {
        matches!(self, Base85Error::OutOfBounds { .. })
    }
}

pub type Result<T> = std::result::Result<T, Base85Error>;

/// Check that `offset..offset + length` lies inside a buffer of `size` bytes.
pub(crate) fn check_bounds(size: usize, offset: usize, length: usize) -> Result<()> {
    match offset.checked_add(length) {
        Some(end) if end <= size => Ok(()),
        _ => Err(Base85Error::OutOfBounds {
            offset,
            length,
            size,
        }),
    }
}
