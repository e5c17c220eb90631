
//! Maps the coefficients of a block to small integers and back.
//!
//! Every value is clamped to its band first, so the quantized values
//! always fit the bit fields of a codeword.
//! Scaling and rounding happen in `f64`, restored values are stored as `f32`.

use crate::transform::Coefficients;

/// The mean brightness `a` is scaled by this factor.
pub const A_SCALE: f64 = 511.0;

/// The difference coefficients `b`, `c` and `d` are clamped to `[-DIFFERENCE_LIMIT, DIFFERENCE_LIMIT]`.
pub const DIFFERENCE_LIMIT: f64 = 0.3;

/// The difference coefficients are scaled by this factor.
pub const DIFFERENCE_SCALE: f64 = 50.0;

/// Chroma averages are clamped to `[CHROMA_MIN, CHROMA_MAX]`.
pub const CHROMA_MIN: f64 = -0.3;

/// Chroma averages are clamped to `[CHROMA_MIN, CHROMA_MAX]`.
pub const CHROMA_MAX: f64 = 0.3;

/// The largest chroma index. The chroma band is divided into this many steps.
pub const CHROMA_STEPS: u64 = 15;


/// The integer form of the coefficients of a block.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct QuantizedBlock {

    /// Mean brightness, in `[0, 511]`.
    pub a: u64,

    /// Vertical difference, in `[-15, 15]`.
    pub b: i64,

    /// Horizontal difference, in `[-15, 15]`.
    pub c: i64,

    /// Diagonal difference, in `[-15, 15]`.
    pub d: i64,

    /// Index of the mean blue difference, in `[0, 15]`.
    pub pb_index: u64,

    /// Index of the mean red difference, in `[0, 15]`.
    pub pr_index: u64,
}

impl QuantizedBlock {

    /// Quantize all six fields of the coefficients.
    pub fn from_coefficients(coefficients: &Coefficients) -> Self {
        QuantizedBlock {
            a: quantize_mean(coefficients.a),
            b: quantize_difference(coefficients.b),
            c: quantize_difference(coefficients.c),
            d: quantize_difference(coefficients.d),
            pb_index: index_of_chroma(coefficients.pb),
            pr_index: index_of_chroma(coefficients.pr),
        }
    }

    /// Approximately restore the coefficients.
    pub fn to_coefficients(&self) -> Coefficients {
        Coefficients {
            a: dequantize_mean(self.a),
            b: dequantize_difference(self.b),
            c: dequantize_difference(self.c),
            d: dequantize_difference(self.d),
            pb: chroma_of_index(self.pb_index),
            pr: chroma_of_index(self.pr_index),
        }
    }
}


/// Clamp to `[0, 1]` and scale to `[0, 511]`, rounding to the nearest integer.
#[inline]
pub fn quantize_mean(a: f32) -> u64 {
    (f64::from(clamp(a, 0.0, 1.0)) * A_SCALE).round() as u64
}

/// Inverse of `quantize_mean`, up to rounding.
#[inline]
pub fn dequantize_mean(a: u64) -> f32 {
    (a as f64 / A_SCALE) as f32
}

/// Clamp to `[-0.3, 0.3]` and scale to `[-15, 15]`, rounding to the nearest integer.
#[inline]
pub fn quantize_difference(coefficient: f32) -> i64 {
    (f64::from(clamp(coefficient, -DIFFERENCE_LIMIT, DIFFERENCE_LIMIT)) * DIFFERENCE_SCALE).round() as i64
}

/// Inverse of `quantize_difference`, up to rounding.
#[inline]
pub fn dequantize_difference(coefficient: i64) -> f32 {
    (coefficient as f64 / DIFFERENCE_SCALE) as f32
}

/// Clamp to `[-0.3, 0.3]` and map linearly to the nearest of the indices `[0, 15]`.
#[inline]
pub fn index_of_chroma(chroma: f32) -> u64 {
    let chroma = f64::from(clamp(chroma, CHROMA_MIN, CHROMA_MAX));
    let index = ((chroma - CHROMA_MIN) / (CHROMA_MAX - CHROMA_MIN) * CHROMA_STEPS as f64).round() as u64;
    index.min(CHROMA_STEPS)
}

/// The chroma value represented by an index. Indices above 15 are treated as 15.
#[inline]
pub fn chroma_of_index(index: u64) -> f32 {
    let index = index.min(CHROMA_STEPS);
    let fraction = index as f32 / CHROMA_STEPS as f32;
    (CHROMA_MIN + f64::from(fraction) * (CHROMA_MAX - CHROMA_MIN)) as f32
}

/// Compare in `f64`, replacing out of band values with the nearest `f32` bound.
#[inline]
fn clamp(value: f32, min: f64, max: f64) -> f32 {
    if f64::from(value) < min { min as f32 }
    else if f64::from(value) > max { max as f32 }
    else { value }
}
