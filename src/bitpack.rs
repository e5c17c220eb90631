
//! Insert and extract fixed-width integers at an arbitrary bit offset inside a 64 bit word.
//!
//! Bit `0` is the least significant bit. A field is described by its `width` in bits
//! and the index `lsb` of its least significant bit. Every operation requires
//! `width + lsb <= 64` and panics otherwise, as such a field cannot exist.

use bit_field::BitField;
use crate::error::{Error, Result};

/// Number of bits in the words handled by this module.
pub const WORD_BITS: u32 = 64;


/// Whether `value` can be stored in an unsigned field of `width` bits.
/// Only zero fits into a field of width zero.
#[inline]
pub fn fits_unsigned(value: u64, width: u32) -> bool {
    assert!(width <= WORD_BITS, "bit field width {} exceeds {} bits", width, WORD_BITS);

    if width == WORD_BITS { true }
    else { value >> width == 0 }
}

/// Whether `value` lies in `[-2^(width-1), 2^(width-1) - 1]`,
/// the range of a two's complement field of `width` bits.
/// Only zero fits into a field of width zero.
#[inline]
pub fn fits_signed(value: i64, width: u32) -> bool {
    assert!(width <= WORD_BITS, "bit field width {} exceeds {} bits", width, WORD_BITS);

    match width {
        0 => value == 0,
        WORD_BITS => true,
        _ => {
            let max = (1_i64 << (width - 1)) - 1;
            let min = -(1_i64 << (width - 1));
            (min ..= max).contains(&value)
        }
    }
}

/// Extract the unsigned field of `width` bits starting at bit `lsb`.
#[inline]
pub fn get_unsigned(word: u64, width: u32, lsb: u32) -> u64 {
    assert_field_inside_word(width, lsb);

    if width == 0 { 0 }
    else { word.get_bits(field_range(width, lsb)) }
}

/// Extract the field of `width` bits starting at bit `lsb`,
/// interpreting its most significant bit as the sign.
#[inline]
pub fn get_signed(word: u64, width: u32, lsb: u32) -> i64 {
    let field = get_unsigned(word, width, lsb);
    if width == 0 { return 0; }

    // move the sign bit to the top, then shift back arithmetically
    let unused_bits = WORD_BITS - width;
    ((field << unused_bits) as i64) >> unused_bits
}

/// Returns a copy of `word` with the unsigned field of `width` bits at `lsb` replaced by `value`.
/// Fails with `Error::Overflow` if `value` does not fit the field.
#[inline]
pub fn new_unsigned(word: u64, width: u32, lsb: u32, value: u64) -> Result<u64> {
    assert_field_inside_word(width, lsb);

    if !fits_unsigned(value, width) {
        return Err(Error::Overflow { value: i128::from(value), width });
    }

    if width == 0 { return Ok(word); }

    let mut word = word;
    word.set_bits(field_range(width, lsb), value);
    Ok(word)
}

/// Returns a copy of `word` with the signed field of `width` bits at `lsb` replaced by `value`,
/// stored in two's complement. Fails with `Error::Overflow` if `value` does not fit the field.
#[inline]
pub fn new_signed(word: u64, width: u32, lsb: u32, value: i64) -> Result<u64> {
    assert_field_inside_word(width, lsb);

    if !fits_signed(value, width) {
        return Err(Error::Overflow { value: i128::from(value), width });
    }

    if width == 0 { return Ok(word); }

    let mut word = word;
    word.set_bits(field_range(width, lsb), value as u64 & field_mask(width));
    Ok(word)
}


/// All bits of a field of the specified width, shifted to the least significant end.
#[inline]
fn field_mask(width: u32) -> u64 {
    if width == WORD_BITS { u64::MAX }
    else { (1_u64 << width) - 1 }
}

#[inline]
fn field_range(width: u32, lsb: u32) -> std::ops::Range<usize> {
    lsb as usize .. (lsb + width) as usize
}

#[inline]
fn assert_field_inside_word(width: u32, lsb: u32) {
    assert!(width <= WORD_BITS, "bit field width {} exceeds {} bits", width, WORD_BITS);

    assert!(
        width.checked_add(lsb).map_or(false, |end| end <= WORD_BITS),
        "bit field of width {} at bit {} does not fit into {} bits", width, lsb, WORD_BITS
    );
}
