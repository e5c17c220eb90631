
//! Groups the pixels of an image into blocks of 2 by 2 pixels.
//! Each block keeps its four luma samples but only the average of its chroma.

use crate::color::YPbPr;
use crate::error::{Error, Result};
use crate::grid::Grid;
use crate::math::Vec2;

/// Width and height of a block in pixels.
pub const BLOCK_SIZE: usize = 2;

/// Number of pixels in a block.
pub const BLOCK_SAMPLE_COUNT: usize = BLOCK_SIZE * BLOCK_SIZE;


/// The arrangement of blocks in an image.
/// Can only be constructed for non-empty images with even width and height,
/// so every pixel belongs to exactly one block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BlockLayout {
    resolution: Vec2<usize>,
}

impl BlockLayout {

    /// Returns an error if the resolution is empty or either dimension is odd.
    pub fn new(resolution: impl Into<Vec2<usize>>) -> Result<Self> {
        let resolution = resolution.into();

        if resolution.area() == 0 {
            return Err(Error::invalid("image dimensions must not be zero"));
        }

        if !resolution.is_even() {
            return Err(Error::invalid("image dimensions must be even"));
        }

        Ok(BlockLayout { resolution })
    }

    /// The pixel resolution of the image.
    #[inline]
    pub fn resolution(self) -> Vec2<usize> { self.resolution }

    /// The number of blocks in each direction.
    #[inline]
    pub fn block_resolution(self) -> Vec2<usize> {
        self.resolution / Vec2(BLOCK_SIZE, BLOCK_SIZE)
    }

    /// The total number of blocks, which is also the number of codewords.
    #[inline]
    pub fn block_count(self) -> usize {
        self.block_resolution().area()
    }

    /// The pixel positions covered by the block with the specified row-major index,
    /// in the order top-left, top-right, bottom-left, bottom-right.
    #[inline]
    pub fn pixel_positions(self, block_index: usize) -> [Vec2<usize>; BLOCK_SAMPLE_COUNT] {
        let block_width = self.block_resolution().width();
        let x = (block_index % block_width) * BLOCK_SIZE;
        let y = (block_index / block_width) * BLOCK_SIZE;

        [ Vec2(x, y), Vec2(x + 1, y), Vec2(x, y + 1), Vec2(x + 1, y + 1) ]
    }

    /// The row-major index of the block containing the pixel,
    /// and the index of the pixel inside that block.
    #[inline]
    pub fn block_of_pixel(self, position: Vec2<usize>) -> (usize, usize) {
        let block = Vec2(position.x() / BLOCK_SIZE, position.y() / BLOCK_SIZE);
        let sample = (position.y() % BLOCK_SIZE) * BLOCK_SIZE + position.x() % BLOCK_SIZE;
        (block.flat_index_for_size(self.block_resolution()), sample)
    }
}


/// Four luma samples and the averaged chroma of a 2 by 2 pixel neighbourhood.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LumaBlock {

    /// Luma of the top-left, top-right, bottom-left, and bottom-right pixel.
    pub luma: [f32; BLOCK_SAMPLE_COUNT],

    /// Mean blue difference of the four pixels.
    pub pb: f32,

    /// Mean red difference of the four pixels.
    pub pr: f32,
}

impl LumaBlock {

    /// Keep each luma sample and average the chroma.
    pub fn from_pixels(pixels: [YPbPr; BLOCK_SAMPLE_COUNT]) -> Self {
        let [p1, p2, p3, p4] = pixels;

        LumaBlock {
            luma: [p1.y, p2.y, p3.y, p4.y],
            pb: (p1.pb + p2.pb + p3.pb + p4.pb) / BLOCK_SAMPLE_COUNT as f32,
            pr: (p1.pr + p2.pr + p3.pr + p4.pr) / BLOCK_SAMPLE_COUNT as f32,
        }
    }

    /// The reconstructed pixel at the index inside the block.
    /// All pixels of a block share the same chroma.
    #[inline]
    pub fn pixel(&self, sample_index: usize) -> YPbPr {
        YPbPr { y: self.luma[sample_index], pb: self.pb, pr: self.pr }
    }
}


/// One value per block of an image, in row-major block order.
#[derive(Clone, Debug, PartialEq)]
pub struct Blocks<T> {

    /// How the blocks are arranged in the image.
    pub layout: BlockLayout,

    /// Exactly `layout.block_count()` values.
    pub blocks: Vec<T>,
}

impl<T> Blocks<T> {

    /// Panics if the number of blocks does not match the layout.
    pub fn new(layout: BlockLayout, blocks: Vec<T>) -> Self {
        assert_eq!(layout.block_count(), blocks.len(), "expected {} blocks, but vector length is {}", layout.block_count(), blocks.len());
        Blocks { layout, blocks }
    }

    /// Convert each block independently of all others.
    /// Uses multiple threads if `parallel` is set and the `rayon` feature is enabled.
    /// The order of the blocks is always preserved.
    pub fn map<U: Send>(&self, parallel: bool, convert: impl Fn(&T) -> U + Sync + Send) -> Blocks<U> where T: Sync {
        let blocks = &self.blocks;
        Blocks::new(self.layout, map_indices(blocks.len(), parallel, |index| convert(&blocks[index])))
    }

    /// Like `map`, but aborts on the first error.
    pub fn try_map<U: Send>(&self, parallel: bool, convert: impl Fn(&T) -> Result<U> + Sync + Send) -> Result<Blocks<U>> where T: Sync {
        let blocks = &self.blocks;
        let results = map_indices(blocks.len(), parallel, |index| convert(&blocks[index]));
        Ok(Blocks::new(self.layout, results.into_iter().collect::<Result<Vec<U>>>()?))
    }
}


/// Split the image into blocks, averaging the chroma of each block.
/// Returns an error if the resolution cannot be divided into blocks.
pub fn to_blocks(pixels: Grid<YPbPr>, parallel: bool) -> Result<Blocks<LumaBlock>> {
    let layout = BlockLayout::new(pixels.resolution())?;
    let pixels = &pixels;

    let blocks = map_indices(layout.block_count(), parallel, |block_index| {
        LumaBlock::from_pixels(layout.pixel_positions(block_index).map(|position| *pixels.get(position)))
    });

    Ok(Blocks::new(layout, blocks))
}

/// Reassemble the image, writing the averaged chroma of a block to all of its pixels.
pub fn from_blocks(blocks: Blocks<LumaBlock>) -> Grid<YPbPr> {
    let layout = blocks.layout;

    Grid::from_fn(layout.resolution(), |position| {
        let (block_index, sample_index) = layout.block_of_pixel(position);
        blocks.blocks[block_index].pixel(sample_index)
    })
}


/// Compute one value per index, in index order.
fn map_indices<U: Send>(count: usize, parallel: bool, convert: impl Fn(usize) -> U + Sync + Send) -> Vec<U> {
    #[cfg(feature = "rayon")] {
        if parallel {
            use rayon::prelude::*;
            return (0 .. count).into_par_iter().map(convert).collect();
        }
    }

    #[cfg(not(feature = "rayon"))]
    let _ = parallel;

    (0 .. count).map(convert).collect()
}
