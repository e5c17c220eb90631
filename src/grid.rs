
//! Provides the predefined pixel storage.
//! Contains a simple flattened vector storage.

use crate::math::Vec2;

/// Store all pixels of an image in a single vector.
///
/// The flattened vector contains all rows one after another,
/// so the stride between two rows is the width of the grid.
///
/// Use `Grid.get(position)` to look at a specific pixel
/// and `Grid.rows()` to visit the pixels in row-major order.
#[derive(Eq, PartialEq, Clone)]
pub struct Grid<T> {
    resolution: Vec2<usize>,
    pixels: Vec<T>,
}

impl<T> Grid<T> {

    /// Create a new flattened pixel storage, checking the length of the provided pixels vector.
    /// Panics if the length does not match the resolution, or if the resolution is empty.
    pub fn new(resolution: impl Into<Vec2<usize>>, pixels: Vec<T>) -> Self {
        let resolution = resolution.into();
        assert!(resolution.area() > 0, "grid resolution {:?} contains no pixels", resolution);
        assert_eq!(resolution.area(), pixels.len(), "expected {} pixels, but vector length is {}", resolution.area(), pixels.len());
        Self { resolution, pixels }
    }

    /// Create a grid by calling the function once for each position, in row-major order.
    pub fn from_fn(resolution: impl Into<Vec2<usize>>, mut pixel: impl FnMut(Vec2<usize>) -> T) -> Self {
        let resolution = resolution.into();
        let mut pixels = Vec::with_capacity(resolution.area());

        for y in 0 .. resolution.height() {
            for x in 0 .. resolution.width() {
                pixels.push(pixel(Vec2(x, y)));
            }
        }

        Self::new(resolution, pixels)
    }

    /// The width and height of this grid.
    #[inline]
    pub fn resolution(&self) -> Vec2<usize> { self.resolution }

    /// Examine the pixel at the specified position.
    /// Panics for positions outside of the grid.
    #[inline]
    pub fn get(&self, position: Vec2<usize>) -> &T {
        &self.pixels[position.flat_index_for_size(self.resolution)]
    }

    /// Update the pixel at the specified position.
    /// Panics for positions outside of the grid.
    #[inline]
    pub fn set(&mut self, position: Vec2<usize>, pixel: T) {
        let index = position.flat_index_for_size(self.resolution);
        self.pixels[index] = pixel;
    }

    /// Iterate over all rows, from top to bottom.
    #[inline]
    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        self.pixels.chunks_exact(self.resolution.width())
    }

    /// All pixels in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[T] { &self.pixels }

    /// Convert each pixel, keeping the resolution.
    pub fn map<B>(&self, convert: impl FnMut(&T) -> B) -> Grid<B> {
        Grid { resolution: self.resolution, pixels: self.pixels.iter().map(convert).collect() }
    }
}

use std::fmt::*;
impl<T> Debug for Grid<T> {
    #[inline] fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "[{}; {}x{}]", std::any::type_name::<T>(), self.resolution.width(), self.resolution.height())
    }
}
