use crate::alphabet::{self, Alphabet};
use std::{error, fmt};

use crate::ALPHABET;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    BufferTooSmall,
    InvalidCharacter { character: char, index: usize },
    NonAsciiCharacter { character: u8, index: usize },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BufferTooSmall => write!(f, "Output buffer too small"),
            Error::InvalidCharacter { character, index } => write!(f, "Invalid character '{}' at index {}", character, index),
            Error::NonAsciiCharacter { character, index } => write!(f, "Non-ascii character {:#02x} at index {}", character, index),
        }
    }
}

impl From<alphabet::DecodeError> for Error {
    fn from(error: alphabet::DecodeError) -> Self {
        match error {
            alphabet::DecodeError::InvalidCharacter { character, index } => Error::InvalidCharacter { character, index },
            alphabet::DecodeError::NonAsciiCharacter { character, index } => Error::NonAsciiCharacter { character, index },
        }
    }
}

pub struct Decoder<'a> {
    alphabet: &'a Alphabet<58>,
}

impl<'a> Decoder<'a> {
    pub const fn new(alphabet: &'a Alphabet<58>) -> Self {
        Self { alphabet }
    }

    /// Decodes `input` into `output`, returning the decoded length.
    ///
    /// Fails at the first input byte that is not part of the alphabet,
    /// without scanning further.
    pub fn decode_into(&self, input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
        let input = input.as_ref();
        let output = output.as_mut();
        let mut index = 0;

        for (position, &character) in input.iter().enumerate() {
            let mut carry = self.alphabet.decode(character, position)? as usize;
            for byte in &mut output[..index] {
                carry += (*byte as usize) * 58;
                *byte = (carry & 0xff) as u8;
                carry >>= 8;
            }
            while carry > 0 {
                *output.get_mut(index).ok_or(Error::BufferTooSmall)? = (carry & 0xff) as u8;
                index += 1;
                carry >>= 8;
            }
        }

        let zero = self.alphabet.encode(0);
        for _ in input.iter().take_while(|&&character| character == zero) {
            *output.get_mut(index).ok_or(Error::BufferTooSmall)? = 0;
            index += 1;
        }
        output[..index].reverse();
        Ok(index)
    }

    pub fn decode(&self, input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
        let mut output = vec![0u8; input.as_ref().len()];
        let len = self.decode_into(input, &mut output)?;
        output.truncate(len);
        Ok(output)
    }

    pub fn default() -> &'static Self {
        &DECODER
    }
}

const DECODER: Decoder = Decoder::new(&ALPHABET);

/// Decodes `input` with the Bitcoin alphabet.
pub fn decode(input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
    Decoder::default().decode(input)
}

pub fn decode_into(input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
    Decoder::default().decode_into(input, output)
}

/// Decodes `input` with a caller-supplied alphabet.
pub fn decode_with_alphabet(input: impl AsRef<[u8]>, alphabet: &Alphabet<58>) -> Result<Vec<u8>, Error> {
    Decoder::new(alphabet).decode(input)
}
