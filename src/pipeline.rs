
//! Compress and decompress whole images.
//!
//! Each stage takes ownership of the previous representation,
//! so at most two representations of the image are alive at the same time.
//! Output is only written once the whole image has been converted,
//! so a failing conversion never leaves a partial file behind.

use crate::block::{self, Blocks, LumaBlock};
use crate::codeword::{self, Codeword};
use crate::color::{self, Rgb};
use crate::error::{Result, UnitResult};
use crate::file::{self, CODEWORD_BYTE_SIZE, MAGIC_LINE};
use crate::grid::Grid;
use crate::io::{Read, Write};
use crate::quantize::QuantizedBlock;
use crate::raster;
use crate::transform::Coefficients;


/// Controls how an image is converted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Options {

    /// Convert blocks on multiple threads.
    /// Has no effect without the `rayon` feature.
    /// The output is identical either way.
    pub parallel: bool,

    /// Reject compressed files containing unexpected bytes after the last codeword.
    pub pedantic: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options { parallel: cfg!(feature = "rayon"), pedantic: false }
    }
}

impl Options {

    /// Use a single thread and tolerate trailing bytes.
    pub fn sequential() -> Self {
        Options { parallel: false, pedantic: false }
    }

    /// Use a single thread.
    pub fn non_parallel(self) -> Self {
        Options { parallel: false, ..self }
    }

    /// Reject trailing bytes in compressed files.
    pub fn pedantic(self) -> Self {
        Options { pedantic: true, ..self }
    }
}


/// Convert the pixels to one codeword per 2 by 2 block.
/// An odd last column or row is removed first.
pub fn compress(pixels: Grid<Rgb>, options: Options) -> Result<Blocks<Codeword>> {
    let pixels = raster::trimmed_to_even(pixels)?;
    tracing::debug!(width = pixels.resolution().width(), height = pixels.resolution().height(), "compressing image");

    let pixels = color::rgb_to_ypbpr(pixels);
    tracing::debug!("converted to luma and chroma");

    let blocks = block::to_blocks(pixels, options.parallel)?;
    tracing::debug!(blocks = blocks.blocks.len(), "grouped pixels into blocks");

    let coefficients = transform_blocks(blocks, options.parallel);
    tracing::debug!("transformed luma");

    let codewords = pack_blocks(coefficients, options.parallel)?;
    tracing::debug!(codewords = codewords.blocks.len(), "packed codewords");

    Ok(codewords)
}

/// Reconstruct the pixels from the codewords of an image.
pub fn decompress(codewords: Blocks<Codeword>, options: Options) -> Grid<Rgb> {
    let resolution = codewords.layout.resolution();
    tracing::debug!(width = resolution.width(), height = resolution.height(), "decompressing image");

    let coefficients = unpack_blocks(codewords, options.parallel);
    tracing::debug!("unpacked codewords");

    let blocks = inverse_transform_blocks(coefficients, options.parallel);
    tracing::debug!("reconstructed luma");

    let pixels = block::from_blocks(blocks);
    tracing::debug!("distributed blocks to pixels");

    color::ypbpr_to_rgb(pixels)
}


/// Read a pixmap and write the compressed image.
/// Nothing is written if reading or converting fails.
pub fn compress_to(read: impl Read, mut write: impl Write, options: Options) -> UnitResult {
    let codewords = compress(raster::read_raster(read)?, options)?;

    let mut bytes = Vec::with_capacity(MAGIC_LINE.len() + 24 + codewords.blocks.len() * CODEWORD_BYTE_SIZE);
    file::write_compressed(&mut bytes, &codewords)?;

    write.write_all(&bytes)?;
    write.flush()?;
    Ok(())
}

/// Read a compressed image and write the reconstructed pixmap.
/// Nothing is written if reading or converting fails.
pub fn decompress_from(read: impl Read, mut write: impl Write, options: Options) -> UnitResult {
    let pixels = decompress(file::read_compressed(read, options.pedantic)?, options);

    let mut bytes = Vec::with_capacity(32 + pixels.as_slice().len() * 3);
    raster::write_raster(&mut bytes, &pixels)?;

    write.write_all(&bytes)?;
    write.flush()?;
    Ok(())
}

/// Compress a pixmap in memory.
pub fn compress_bytes(pixmap: &[u8], options: Options) -> Result<Vec<u8>> {
    let mut compressed = Vec::new();
    compress_to(pixmap, &mut compressed, options)?;
    Ok(compressed)
}

/// Decompress an image in memory, returning a binary pixmap.
pub fn decompress_bytes(compressed: &[u8], options: Options) -> Result<Vec<u8>> {
    let mut pixmap = Vec::new();
    decompress_from(compressed, &mut pixmap, options)?;
    Ok(pixmap)
}


fn transform_blocks(blocks: Blocks<LumaBlock>, parallel: bool) -> Blocks<Coefficients> {
    blocks.map(parallel, Coefficients::from_block)
}

fn pack_blocks(coefficients: Blocks<Coefficients>, parallel: bool) -> Result<Blocks<Codeword>> {
    coefficients.try_map(parallel, |coefficients| {
        codeword::pack(&QuantizedBlock::from_coefficients(coefficients))
    })
}

fn unpack_blocks(codewords: Blocks<Codeword>, parallel: bool) -> Blocks<Coefficients> {
    codewords.map(parallel, |&codeword| codeword::unpack(codeword).to_coefficients())
}

fn inverse_transform_blocks(coefficients: Blocks<Coefficients>, parallel: bool) -> Blocks<LumaBlock> {
    coefficients.map(parallel, Coefficients::to_block)
}
