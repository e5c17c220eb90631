
//! Lossy compression of 8 bit RGB images to a quarter of their raw size.
//!
//! Every 2 by 2 pixel block is stored as a single 32 bit codeword,
//! containing the quantized mean brightness, three brightness gradients,
//! and the averaged color of the block.
//!
//! Use `pipeline::compress_bytes` and `pipeline::decompress_bytes` to convert whole files,
//! or `pipeline::compress` and `pipeline::decompress` to work with pixels directly.

#![forbid(unsafe_code)]
#![forbid(
    clippy::all,
    clippy::restriction,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
)]

#![warn(missing_debug_implementations)]


pub mod error;
pub mod math;
pub mod io;
pub mod grid;
pub mod bitpack;

pub mod color;
pub mod block;
pub mod transform;
pub mod quantize;
pub mod codeword;

pub mod file;
pub mod raster;
pub mod pipeline;


/// Re-exports of the types needed for most conversions.
pub mod prelude {

    // main exports
    pub use crate::pipeline::{
        compress, decompress,
        compress_to, decompress_from,
        compress_bytes, decompress_bytes,
        Options,
    };

    // core data types
    pub use crate::grid::Grid;
    pub use crate::color::{Rgb, YPbPr};
    pub use crate::block::{BlockLayout, Blocks};
    pub use crate::codeword::Codeword;
    pub use crate::math::Vec2;

    // secondary modules
    pub use crate::error::{self, Error, Result};
    pub use crate::raster::{read_raster, write_raster};
    pub use crate::file::{read_compressed, write_compressed};
}
