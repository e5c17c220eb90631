
//! The bit layout of a codeword.
//!
//! ```text
//!  31          23 22   18 17   13 12    8 7    4 3    0
//! +--------------+-------+-------+-------+------+------+
//! |  a (9, u)    | b (5) | c (5) | d (5) |  pb  |  pr  |
//! +--------------+-------+-------+-------+------+------+
//! ```
//!
//! `b`, `c` and `d` are two's complement, all other fields are unsigned.

use crate::bitpack;
use crate::error::Result;
use crate::quantize::QuantizedBlock;

/// The packed form of one block.
pub type Codeword = u32;

/// Position and size of a field inside a codeword.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Field {

    /// Number of bits.
    pub width: u32,

    /// Index of the least significant bit.
    pub lsb: u32,
}

pub const A: Field = Field { width: 9, lsb: 23 };
pub const B: Field = Field { width: 5, lsb: 18 };
pub const C: Field = Field { width: 5, lsb: 13 };
pub const D: Field = Field { width: 5, lsb: 8 };
pub const PB_INDEX: Field = Field { width: 4, lsb: 4 };
pub const PR_INDEX: Field = Field { width: 4, lsb: 0 };

/// All fields, most significant first.
pub const LAYOUT: [Field; 6] = [A, B, C, D, PB_INDEX, PR_INDEX];


/// Insert the fields into an initially zero word, in the order `a, b, c, d, pb, pr`.
/// Fails with `Error::Overflow` if any field is out of range.
pub fn pack(block: &QuantizedBlock) -> Result<Codeword> {
    let mut word = 0_u64;

    word = bitpack::new_unsigned(word, A.width, A.lsb, block.a)?;
    word = bitpack::new_signed(word, B.width, B.lsb, block.b)?;
    word = bitpack::new_signed(word, C.width, C.lsb, block.c)?;
    word = bitpack::new_signed(word, D.width, D.lsb, block.d)?;
    word = bitpack::new_unsigned(word, PB_INDEX.width, PB_INDEX.lsb, block.pb_index)?;
    word = bitpack::new_unsigned(word, PR_INDEX.width, PR_INDEX.lsb, block.pr_index)?;

    debug_assert!(bitpack::fits_unsigned(word, Codeword::BITS), "layout exceeds the codeword");
    Ok(word as Codeword)
}

/// Extract all fields of a codeword.
pub fn unpack(codeword: Codeword) -> QuantizedBlock {
    let word = u64::from(codeword);

    QuantizedBlock {
        a: bitpack::get_unsigned(word, A.width, A.lsb),
        b: bitpack::get_signed(word, B.width, B.lsb),
        c: bitpack::get_signed(word, C.width, C.lsb),
        d: bitpack::get_signed(word, D.width, D.lsb),
        pb_index: bitpack::get_unsigned(word, PB_INDEX.width, PB_INDEX.lsb),
        pr_index: bitpack::get_unsigned(word, PR_INDEX.width, PR_INDEX.lsb),
    }
}
