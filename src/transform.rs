
//! Four point transform of the luma samples of a block.
//!
//! A Hadamard style transform: `a` is the mean brightness of the block,
//! `b`, `c` and `d` describe the vertical, horizontal, and diagonal change.
//! The inverse is exact in real arithmetic, only quantization loses information.

use crate::block::LumaBlock;


/// The decorrelated form of a block, with the chroma averages carried through unchanged.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Coefficients {

    /// Mean luma of the block, in `[0, 1]`.
    pub a: f32,

    /// Bottom row minus top row.
    pub b: f32,

    /// Right column minus left column.
    pub c: f32,

    /// Diagonal difference.
    pub d: f32,

    /// Mean blue difference of the block.
    pub pb: f32,

    /// Mean red difference of the block.
    pub pr: f32,
}

/// Transform the four luma samples `[y1, y2, y3, y4]` to the coefficients `[a, b, c, d]`.
#[inline]
pub fn forward([y1, y2, y3, y4]: [f32; 4]) -> [f32; 4] {
    [
        (y4 + y3 + y2 + y1) / 4.0,
        (y4 + y3 - y2 - y1) / 4.0,
        (y4 - y3 + y2 - y1) / 4.0,
        (y4 - y3 - y2 + y1) / 4.0,
    ]
}

/// Transform the coefficients `[a, b, c, d]` back to the four luma samples.
#[inline]
pub fn inverse([a, b, c, d]: [f32; 4]) -> [f32; 4] {
    [
        a - b - c + d,
        a - b + c - d,
        a + b - c - d,
        a + b + c + d,
    ]
}

impl Coefficients {

    /// Transform the luma of a block.
    pub fn from_block(block: &LumaBlock) -> Self {
        let [a, b, c, d] = forward(block.luma);
        Coefficients { a, b, c, d, pb: block.pb, pr: block.pr }
    }

    /// Reconstruct the luma of the block.
    pub fn to_block(&self) -> LumaBlock {
        LumaBlock {
            luma: inverse([self.a, self.b, self.c, self.d]),
            pb: self.pb, pr: self.pr,
        }
    }
}
