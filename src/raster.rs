
//! Reading and writing uncompressed images as portable pixmaps.
//! The pixmap details (header, denominator, plain or raw samples)
//! are left to the `image` crate, this module only converts to and from `Grid<Rgb>`.

use image::{DynamicImage, ExtendedColorType, ImageEncoder, ImageFormat};
use image::codecs::pnm::{PnmEncoder, PnmSubtype, SampleEncoding};
use crate::color::Rgb;
use crate::error::{Error, Result, UnitResult};
use crate::grid::Grid;
use crate::io::{Read, Write};
use crate::math::Vec2;


/// Read a complete color pixmap.
/// Pixmaps with 16 bit samples are reduced to 8 bits per channel.
/// Graymaps and bitmaps are not supported.
pub fn read_raster(mut read: impl Read) -> Result<Grid<Rgb>> {
    let mut bytes = Vec::new();
    read.read_to_end(&mut bytes)?;

    let buffer = match image::load_from_memory_with_format(&bytes, ImageFormat::Pnm)? {
        DynamicImage::ImageRgb8(buffer) => buffer,
        wide @ DynamicImage::ImageRgb16(_) => wide.to_rgb8(),
        _ => return Err(Error::unsupported("portable map without color channels")),
    };

    let resolution = Vec2(buffer.width() as usize, buffer.height() as usize);
    if resolution.area() == 0 {
        return Err(Error::invalid("image contains no pixels"));
    }

    let pixels = buffer.pixels()
        .map(|&image::Rgb([red, green, blue])| Rgb::new(red, green, blue))
        .collect();

    Ok(Grid::new(resolution, pixels))
}

/// Write the pixels as a binary color pixmap with 8 bits per channel.
pub fn write_raster(write: impl Write, pixels: &Grid<Rgb>) -> UnitResult {
    let size = pixels.resolution().to_u32()?;

    let bytes: Vec<u8> = pixels.as_slice().iter()
        .flat_map(|pixel| [pixel.red, pixel.green, pixel.blue])
        .collect();

    PnmEncoder::new(write)
        .with_subtype(PnmSubtype::Pixmap(SampleEncoding::Binary))
        .write_image(&bytes, size.width(), size.height(), ExtendedColorType::Rgb8)?;

    Ok(())
}

/// Drop the last column and the last row if they make a dimension odd.
/// Returns an error if no pixels remain.
pub fn trimmed_to_even(pixels: Grid<Rgb>) -> Result<Grid<Rgb>> {
    let resolution = pixels.resolution();
    if resolution.is_even() { return Ok(pixels); }

    let trimmed = resolution.round_down_to_even();
    if trimmed.area() == 0 {
        return Err(Error::invalid("image is too small to contain a single block"));
    }

    tracing::warn!(
        from = ?(resolution.width(), resolution.height()),
        to = ?(trimmed.width(), trimmed.height()),
        "trimming odd image dimensions"
    );

    Ok(Grid::from_fn(trimmed, |position| *pixels.get(position)))
}
