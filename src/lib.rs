//! Base58 encoding and decoding.
//!
//! Converts byte buffers to and from a positional base-58 representation,
//! parameterized by a 58-character [`Alphabet`]. Leading zero bytes are
//! significant: each one maps to the alphabet's first character and is
//! restored when decoding.
//!
//! ```
//! let encoded = base58::encode(b"abcd");
//! assert_eq!(encoded, "3VNr6P");
//! assert_eq!(base58::decode(&encoded).unwrap(), b"abcd");
//! ```
//!
//! The unparameterized entry points use the Bitcoin alphabet. The Flickr
//! alphabet is available as [`FLICKR`], and any other 58-character
//! alphabet can be used through [`Alphabet::new`] together with
//! [`encode_with_alphabet`] and [`decode_with_alphabet`].

pub mod alphabet;
pub mod decode;
pub mod encode;

pub use alphabet::Alphabet;
pub use decode::{decode, decode_into, decode_with_alphabet, Decoder};
pub use encode::{encode, encode_into, encode_with_alphabet, Encoder};

/// Characters of the Bitcoin alphabet, in digit order.
pub const BITCOIN_ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Characters of the Flickr alphabet, in digit order.
pub const FLICKR_ALPHABET: &[u8; 58] = b"123456789abcdefghijkmnopqrstuvwxyzABCDEFGHJKLMNPQRSTUVWXYZ";

/// The Bitcoin alphabet, used by the unparameterized entry points.
pub const ALPHABET: Alphabet<58> = match Alphabet::new(BITCOIN_ALPHABET) {
    Ok(alphabet) => alphabet,
    Err(_) => panic!("Could not build alphabet"),
};

/// The Flickr alphabet.
pub const FLICKR: Alphabet<58> = match Alphabet::new(FLICKR_ALPHABET) {
    Ok(alphabet) => alphabet,
    Err(_) => panic!("Could not build alphabet"),
};
