mod alphabet;
mod bigint;
mod block;
mod compress;
pub mod core;
mod error;


pub use self::alphabet::{ASCII85, Alphabet, RFC1924, SYMBOL_COUNT, Z85};
pub use self::compress::{Compression, CompressionFlags, SPACE_SENTINEL, ZERO_SENTINEL};
pub use self::core::{Decoder, Encoder, Variant, calc_encoded_len};
pub use self::core::{
    ascii85_decoder, ascii85_encoder, rfc1924_decoder, rfc1924_encoder, z85_decoder, z85_encoder,
};
pub use self::error::{Base85Error, Result};
