
//! Specialized text and binary input for the header of a compressed image.
//! Uses the error handling for this crate.

pub use ::std::io::{Read, Write};
use lebe::prelude::*;
use crate::error::{Error, Result, IoResult};


/// Peek a single byte without consuming it.
#[derive(Debug)]
pub struct PeekRead<T> {

    /// Cannot be exposed as it will not contain peeked values anymore.
    inner: T,

    peeked: Option<IoResult<u8>>,
}

impl<T: Read> PeekRead<T> {

    #[inline]
    pub fn new(inner: T) -> Self {
        Self { inner, peeked: None }
    }

    /// Read a single byte and return that without consuming it.
    /// The next `read` call will include that byte.
    #[inline]
    pub fn peek_u8(&mut self) -> &IoResult<u8> {
        let inner = &mut self.inner;
        self.peeked.get_or_insert_with(|| u8::read_from_little_endian(inner))
    }

    /// Skip a single byte if it equals the specified value.
    /// Returns whether the value was found.
    /// Consumes the peeked result if an error occurred.
    #[inline]
    pub fn skip_if_eq(&mut self, value: u8) -> IoResult<bool> {
        self.skip_if(|byte| byte == value)
    }

    /// Skip a single byte if it matches the predicate.
    /// Returns whether a byte was skipped.
    /// Consumes the peeked result if an error occurred.
    pub fn skip_if(&mut self, predicate: impl Fn(u8) -> bool) -> IoResult<bool> {
        match self.peek_u8() {
            Ok(peeked) if predicate(*peeked) => {
                self.peeked = None; // consume the byte
                Ok(true)
            },

            Ok(_) => Ok(false),

            // return the error otherwise.
            // we need to take() from self because io errors cannot be cloned.
            Err(_) => match self.peeked.take() {
                Some(Err(error)) => Err(error),
                _ => unreachable!("peeked value was an error"),
            }
        }
    }

    /// Skip bytes as long as they match the predicate.
    /// Returns the number of skipped bytes. Stops without error at the end of the stream.
    pub fn skip_while(&mut self, predicate: impl Fn(u8) -> bool) -> IoResult<usize> {
        let mut count = 0;

        loop {
            match self.skip_if(&predicate) {
                Ok(true) => count += 1,
                Ok(false) => return Ok(count),
                Err(error) if error.kind() == std::io::ErrorKind::UnexpectedEof => return Ok(count),
                Err(error) => return Err(error),
            }
        }
    }

    /// Read an optionally signed decimal integer, skipping whitespace in front of it.
    /// The first byte after the digits is not consumed.
    pub fn read_decimal(&mut self, name: &'static str) -> Result<i64> {
        self.skip_while(is_space)?;

        let is_negative = self.skip_if_eq(b'-')?;
        if !is_negative { self.skip_if_eq(b'+')?; }

        let mut value: i64 = 0;
        let mut digit_count = 0;

        loop {
            let digit = match self.peek_u8() {
                Ok(byte) if byte.is_ascii_digit() => i64::from(byte - b'0'),
                _ => break, // a read error is reported by the next caller
            };

            self.peeked = None;
            digit_count += 1;

            value = value.checked_mul(10).and_then(|value| value.checked_add(digit))
                .ok_or_else(|| Error::invalid(name))?;
        }

        if digit_count == 0 {
            return Err(Error::invalid(name));
        }

        Ok(if is_negative { -value } else { value })
    }
}


impl<T: Read> Read for PeekRead<T> {
    fn read(&mut self, target_buffer: &mut [u8]) -> IoResult<usize> {
        if target_buffer.is_empty() {
            return Ok(0)
        }

        match self.peeked.take() {
            None => self.inner.read(target_buffer),
            Some(peeked) => {
                target_buffer[0] = peeked?;

                // indexing [1..] is safe because an empty buffer already returned ok
                Ok(1 + self.inner.read(&mut target_buffer[1..])?)
            }
        }
    }
}


/// Whitespace as understood by the C locale, including vertical tab and form feed.
#[inline]
pub fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}
