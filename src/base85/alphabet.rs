/// Number of symbols in every base85 alphabet.
pub const SYMBOL_COUNT: usize = 85;

/// Marker in the decode table for bytes outside the alphabet.
const INVALID: u8 = 0xFF;

/// An ordered set of 85 distinct ASCII symbols plus its inverse lookup.
///
/// Built at compile time by [`Alphabet::new`]; a duplicate symbol or a wrong
/// length is a const-evaluation error, so every `Alphabet` value upholds the
/// 85-distinct-entries invariant.
#[derive(Debug)]
pub struct Alphabet {
    chars: &'static str,
    symbols: [u8; SYMBOL_COUNT],
    digits: [u8; 256],
    valid: [bool; 256],
}

impl Alphabet {
    pub const fn new(chars: &'static str) -> Self {
        let bytes = chars.as_bytes();
        assert!(bytes.len() == SYMBOL_COUNT, "alphabet must have 85 symbols");

        let mut symbols = [0u8; SYMBOL_COUNT];
        let mut digits = [INVALID; 256];
        let mut valid = [false; 256];
        let mut i = 0;
        while i < SYMBOL_COUNT {
            let b = bytes[i];
            assert!(b.is_ascii(), "alphabet symbols must be ASCII");
            assert!(!valid[b as usize], "duplicate alphabet symbol");
            symbols[i] = b;
            digits[b as usize] = i as u8;
            valid[b as usize] = true;
            i += 1;
        }

        Alphabet {
            chars,
            symbols,
            digits,
            valid,
        }
    }

    /// Symbol for a digit in `0..85`.
    #[inline(always)]
    pub fn symbol(&self, digit: u8) -> u8 {
        self.symbols[digit as usize]
    }

    /// Digit value of `symbol`, or `None` if it is not part of this alphabet.
    #[inline(always)]
    pub fn digit(&self, symbol: u8) -> Option<u8> {
        match self.digits[symbol as usize] {
            INVALID => None,
            d => Some(d),
        }
    }

    #[inline(always)]
    pub fn contains(&self, byte: u8) -> bool {
        self.valid[byte as usize]
    }

    pub fn symbols(&self) -> &[u8; SYMBOL_COUNT] {
        &self.symbols
    }

    pub fn as_str(&self) -> &'static str {
        self.chars
    }
}

/// IETF RFC 1924 character set. No quotes, comma or slash.
pub static RFC1924: Alphabet = Alphabet::new(
    "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz!#$%&()*+-;<=>?@^_`{|}~",
);

/// ZeroMQ Z85 character set (RFC 32/Z85).
pub static Z85: Alphabet = Alphabet::new(
    "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ.-:+=^!/*?&<>()[]{}@%$#",
);

/// Adobe/btoa Ascii85 character set: `!` through `u`.
pub static ASCII85: Alphabet = Alphabet::new(
    "!\"#$%&'()*+,-./0123456789:;<=>?@ABCDEFGHIJKLMNOPQRSTUVWXYZ[\\]^_`abcdefghijklmnopqrstu",
);
