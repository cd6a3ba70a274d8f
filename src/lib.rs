//! Base85 codecs over in-memory byte buffers.
//!
//! Three character sets share one block converter: RFC 1924, ZeroMQ Z85 and
//! Ascii85 (with `z`/`y` run compression). Each has a shared encoder and
//! decoder:
//!
//! ```
//! use base85_rs::base85;
//!
//! let encoded = base85::z85_encoder().encode(&[0x86, 0x4F, 0xD2, 0x6F, 0xB5, 0x59, 0xF7, 0x5B]);
//! assert_eq!(encoded, b"HelloWorld");
//! let decoded = base85::z85_decoder().decode(&encoded).unwrap();
//! assert_eq!(decoded, [0x86, 0x4F, 0xD2, 0x6F, 0xB5, 0x59, 0xF7, 0x5B]);
//! ```

#![allow(
    clippy::collapsible_if,
    clippy::needless_range_loop,
    clippy::manual_div_ceil,
    clippy::too_many_arguments
)]

pub mod base85;
