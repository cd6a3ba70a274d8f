use std::sync::atomic::{AtomicU8, Ordering};

/// Sentinel replacing a full group of four zero bytes.
pub const ZERO_SENTINEL: u8 = b'z';
/// Sentinel replacing a full group of four spaces.
pub const SPACE_SENTINEL: u8 = b'y';

const ZERO_WORD: u32 = 0;
const SPACE_WORD: u32 = 0x2020_2020;

const ZEROS_BIT: u8 = 1 << 0;
const SPACES_BIT: u8 = 1 << 1;

/// Which 4-byte runs collapse to a single sentinel symbol during encoding.
///
/// This is a point-in-time value; the live, shared setting of an encoder is a
/// [`CompressionFlags`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Compression {
    pub zeros: bool,
    pub spaces: bool,
}

impl Compression {
    pub const NONE: Compression = Compression {
        zeros: false,
        spaces: false,
    };

    pub const ALL: Compression = Compression {
        zeros: true,
        spaces: true,
    };

    /// Sentinel to emit for a full group, if that group is compressible.
    #[inline(always)]
    pub fn sentinel_for(self, word: u32) -> Option<u8> {
        match word {
            ZERO_WORD if self.zeros => Some(ZERO_SENTINEL),
            SPACE_WORD if self.spaces => Some(SPACE_SENTINEL),
            _ => None,
        }
    }

    /// Number of full groups in `data` that would be emitted as sentinels.
    /// The tail is never compressed.
    pub fn count_runs(self, data: &[u8]) -> usize {
        if self == Compression::NONE {
            return 0;
        }
        data.chunks_exact(4)
            .filter(|c| {
                self.sentinel_for(u32::from_be_bytes([c[0], c[1], c[2], c[3]]))
                    .is_some()
            })
            .count()
    }

    const fn to_bits(self) -> u8 {
        (if self.zeros { ZEROS_BIT } else { 0 }) | (if self.spaces { SPACES_BIT } else { 0 })
    }

    fn from_bits(bits: u8) -> Self {
        Compression {
            zeros: bits & ZEROS_BIT != 0,
            spaces: bits & SPACES_BIT != 0,
        }
    }
}

impl Default for Compression {
    fn default() -> Self {
        Compression::ALL
    }
}

/// Expanded bytes for a sentinel found at a group boundary.
#[inline(always)]
pub fn expand_sentinel(symbol: u8) -> Option<[u8; 4]> {
    match symbol {
        ZERO_SENTINEL => Some(ZERO_WORD.to_be_bytes()),
        SPACE_SENTINEL => Some(SPACE_WORD.to_be_bytes()),
        _ => None,
    }
}

/// Run-compression switches shared by every caller of one encoder.
///
/// Both flags live in a single atomic byte: an encode call reads it once and
/// works from that snapshot, so a concurrent toggle never splits a call between
/// two settings, and encoders never block each other.
#[derive(Debug)]
pub struct CompressionFlags(AtomicU8);

impl CompressionFlags {
    pub const fn new(zeros: bool, spaces: bool) -> Self {
        CompressionFlags(AtomicU8::new(Compression { zeros, spaces }.to_bits()))
    }

    /// Current setting of both flags.
    #[inline]
    pub fn snapshot(&self) -> Compression {
        Compression::from_bits(self.0.load(Ordering::Acquire))
    }

    pub fn zeros(&self) -> bool {
        self.snapshot().zeros
    }

    pub fn spaces(&self) -> bool {
        self.snapshot().spaces
    }

    pub fn set_zeros(&self, enabled: bool) {
        self.update(ZEROS_BIT, enabled);
        log::debug!("ascii85 zero-run compression set to {}", enabled);
    }

    pub fn set_spaces(&self, enabled: bool) {
        self.update(SPACES_BIT, enabled);
        log::debug!("ascii85 space-run compression set to {}", enabled);
    }

    /// Replace both flags at once.
    pub fn set(&self, compression: Compression) {
        self.0.store(compression.to_bits(), Ordering::Release);
        log::debug!(
            "ascii85 compression set to zeros={} spaces={}",
            compression.zeros,
            compression.spaces
        );
    }

    fn update(&self, bit: u8, enabled: bool) {
        if enabled {
            self.0.fetch_or(bit, Ordering::AcqRel);
        } else {
            self.0.fetch_and(!bit, Ordering::AcqRel);
        }
    }
}

impl Default for CompressionFlags {
    fn default() -> Self {
        CompressionFlags::new(true, true)
    }
}
