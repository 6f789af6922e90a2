use crate::alphabet::Alphabet;
use std::{error, fmt};

use crate::ALPHABET;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// The output buffer was too small to contain the entire output.
    BufferTooSmall,
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BufferTooSmall => write!(f, "Output buffer too small"),
        }
    }
}

pub struct Encoder<'a> {
    alphabet: &'a Alphabet<58>,
}

impl<'a> Encoder<'a> {
    pub const fn new(alphabet: &'a Alphabet<58>) -> Self {
        Self { alphabet }
    }

    /// Encodes `input` into `output`, returning the encoded length.
    ///
    /// Digits are accumulated least-significant first, followed by one
    /// zero marker per leading zero byte, then reversed in place.
    pub fn encode_into(&self, input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
        let input = input.as_ref();
        let output = output.as_mut();
        let mut index = 0;
        for &value in input {
            let mut carry = value as usize;
            for digit in &mut output[..index] {
                carry += (*digit as usize) << 8;
                *digit = (carry % 58) as u8;
                carry /= 58;
            }
            while carry > 0 {
                *output.get_mut(index).ok_or(Error::BufferTooSmall)? = (carry % 58) as u8;
                index += 1;
                carry /= 58;
            }
        }
        for _ in input.iter().take_while(|&&value| value == 0) {
            *output.get_mut(index).ok_or(Error::BufferTooSmall)? = 0;
            index += 1;
        }
        for digit in &mut output[..index] {
            *digit = self.alphabet.encode(*digit as usize);
        }
        output[..index].reverse();
        Ok(index)
    }

    pub fn encode(&self, input: impl AsRef<[u8]>) -> String {
        let mut output = vec![0u8; (input.as_ref().len() * 8) / 5 + 1];
        let len = self.encode_into(input, &mut output).unwrap();
        output.truncate(len);
        unsafe { String::from_utf8_unchecked(output) }
    }

    pub fn default() -> &'static Self {
        &ENCODER
    }
}

const ENCODER: Encoder = Encoder::new(&ALPHABET);

/// Encodes `input` with the Bitcoin alphabet.
pub fn encode(input: impl AsRef<[u8]>) -> String {
    Encoder::default().encode(input)
}

pub fn encode_into(input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
    Encoder::default().encode_into(input, output)
}

/// Encodes `input` with a caller-supplied alphabet.
pub fn encode_with_alphabet(input: impl AsRef<[u8]>, alphabet: &Alphabet<58>) -> String {
    Encoder::new(alphabet).encode(input)
}

#[cfg(test)]
mod tests {
    use crate::FLICKR;

    #[test]
    fn encode() {
        assert_eq!(super::encode([]), "");
        assert_eq!(super::encode("a"), "2g");
        assert_eq!(super::encode("bbb"), "a3gV");
        assert_eq!(super::encode("ccc"), "aPEr");
        assert_eq!(super::encode("abcd"), "3VNr6P");
        assert_eq!(super::encode("simply a long string"), "2cFupjhnEsSn59qHXstmK2ffpLv2");
        assert_eq!(
            super::encode([
                0x00, 0xeb, 0x15, 0x23, 0x1d, 0xfc, 0xeb, 0x60, 0x92, 0x58, 0x86, 0xb6, 0x7d, 0x06, 0x52, 0x99, 0x92, 0x59, 0x15, 0xae,
                0xb1, 0x72, 0xc0, 0x66, 0x47,
            ]),
            "1NS17iag9jJgTHD1VXjvLCEnZuQ3rJDE9L"
        );
        assert_eq!(super::encode([0x51, 0x6b, 0x6f, 0xcd, 0x0f]), "ABnLTmg");
        assert_eq!(
            super::encode([0xbf, 0x4f, 0x89, 0x00, 0x1e, 0x67, 0x02, 0x74, 0xdd]),
            "3SEo3LWLoPntC"
        );
        assert_eq!(super::encode([0x57, 0x2e, 0x47, 0x94]), "3EFU7m");
        assert_eq!(
            super::encode([0xec, 0xac, 0x89, 0xca, 0xd9, 0x39, 0x23, 0xc0, 0x23, 0x21]),
            "EJDM8drfXA6uyA"
        );
        assert_eq!(super::encode([0x10, 0xc8, 0x51, 0x1e]), "Rt5zm");
    }

    #[test]
    fn encode_leading_zeros() {
        assert_eq!(super::encode([0x00]), "1");
        assert_eq!(super::encode([0x00, 0x00]), "11");
        assert_eq!(super::encode([0x00, 0x00, 0x01]), "112");
        assert_eq!(super::encode([0x00, 0xff]), "15Q");
        assert_eq!(
            super::encode([0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
            "1111111111"
        );
    }

    #[test]
    fn encode_with_alphabet() {
        assert_eq!(super::encode_with_alphabet("abcd", &FLICKR), "3unR6o");
        assert_eq!(super::encode_with_alphabet([0x51, 0x6b, 0x6f, 0xcd, 0x0f], &FLICKR), "abMksLF");
        assert_eq!(
            super::encode_with_alphabet("simply a long string", &FLICKR),
            "2BfUPJGMeSrM59QhwSTLj2EEPkV2"
        );
        assert_eq!(super::encode_with_alphabet([0x00, 0x00, 0x01], &FLICKR), "112");
    }

    #[test]
    fn encode_into_buffer() {
        let mut output = [0u8; 8];
        assert_eq!(super::encode_into("abcd", &mut output), Ok(6));
        assert_eq!(&output[..6], b"3VNr6P");
    }

    #[test]
    fn encode_into_too_small_buffer() {
        let mut output = [0u8; 4];
        assert_eq!(super::encode_into("abcd", &mut output), Err(super::Error::BufferTooSmall));
        let mut output = [0u8; 2];
        assert_eq!(super::encode_into([0x00, 0x00, 0x01], &mut output), Err(super::Error::BufferTooSmall));
    }
}
