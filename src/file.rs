
//! Reading and writing the compressed file format.
//!
//! A compressed file starts with the line `COMP40 Compressed image format 2`,
//! followed by a line containing the decimal width and height of the image.
//! All remaining bytes are the codewords, one per block in row-major block order,
//! each stored as four bytes with the most significant byte first.

use lebe::prelude::*;
use crate::block::{BlockLayout, Blocks};
use crate::codeword::Codeword;
use crate::error::{i64_to_usize, Error, Result, UnitResult};
use crate::io::{is_space, PeekRead, Read, Write};
use crate::math::Vec2;

/// The first line of every compressed file, including the line break.
pub const MAGIC_LINE: &[u8] = b"COMP40 Compressed image format 2\n";

/// The number of bytes of a single codeword.
pub const CODEWORD_BYTE_SIZE: usize = std::mem::size_of::<Codeword>();


/// Write the header and all codewords.
pub fn write_compressed(write: &mut impl Write, codewords: &Blocks<Codeword>) -> UnitResult {
    let resolution = codewords.layout.resolution();

    write.write_all(MAGIC_LINE)?;
    writeln!(write, "{} {}", resolution.width(), resolution.height())?;
    write.write_as_big_endian(codewords.blocks.as_slice())?;

    Ok(())
}

/// Read the header and exactly `width * height / 4` codewords.
///
/// Whitespace between the dimension line and the first codeword is skipped,
/// but only where the stream contains more bytes than the codewords require,
/// so a codeword starting with a whitespace byte is never mistaken for padding.
/// If `pedantic` is set, any other bytes after the last codeword are an error.
pub fn read_compressed(read: impl Read, pedantic: bool) -> Result<Blocks<Codeword>> {
    let mut read = PeekRead::new(read);
    let layout = read_header(&mut read)?;

    let mut bytes = Vec::new();
    read.read_to_end(&mut bytes)?;

    let body_byte_size = layout.block_count().checked_mul(CODEWORD_BYTE_SIZE)
        .ok_or_else(|| Error::invalid("image dimensions too large"))?;

    if bytes.len() < body_byte_size {
        return Err(Error::invalid("premature end of codeword stream"));
    }

    let excess = bytes.len() - body_byte_size;
    let padding = bytes[.. excess].iter().take_while(|&&byte| is_space(byte)).count();

    if pedantic && padding != excess {
        return Err(Error::invalid("unexpected bytes after the last codeword"));
    }

    let mut codewords = vec![0 as Codeword; layout.block_count()];
    let mut body = &bytes[padding .. padding + body_byte_size];
    body.read_from_big_endian_into(codewords.as_mut_slice())?;

    tracing::trace!(codewords = codewords.len(), skipped = padding, trailing = excess - padding, "read codeword stream");
    Ok(Blocks::new(layout, codewords))
}

/// Validate the magic line and parse the dimension line.
/// A single line break after the dimensions is consumed,
/// any other byte is left in the stream.
pub fn read_header<R: Read>(read: &mut PeekRead<R>) -> Result<BlockLayout> {
    let mut magic = [0_u8; MAGIC_LINE.len()];

    read.read_exact(&mut magic)
        .map_err(|_| Error::invalid("missing compressed image header"))?;

    if magic[..] != *MAGIC_LINE {
        return Err(Error::invalid("not a compressed image"));
    }

    let width = i64_to_usize(read.read_decimal("image width")?, "image width")?;
    let height = i64_to_usize(read.read_decimal("image height")?, "image height")?;

    width.checked_mul(height)
        .ok_or_else(|| Error::invalid("image dimensions too large"))?;

    read.skip_if_eq(b'\n')?;

    tracing::trace!(width, height, "read compressed image header");
    BlockLayout::new(Vec2(width, height))
}
