
//! Simple math utilities.

use std::convert::TryFrom;
use crate::error::{Error, Result};

/// Simple two-dimensional vector of any numerical type.
/// Supports only few mathematical operations
/// as this is used mainly as data struct.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Vec2<T> (pub T, pub T);

impl<T> Vec2<T> {

    /// Returns the horizontal component of this vector.
    #[inline] pub fn x(self) -> T where T: Copy { self.0 }

    /// Returns the vertical component of this vector.
    #[inline] pub fn y(self) -> T where T: Copy { self.1 }

    /// Returns the horizontal component of this vector, seen as a size.
    #[inline] pub fn width(self) -> T where T: Copy { self.0 }

    /// Returns the vertical component of this vector, seen as a size.
    #[inline] pub fn height(self) -> T where T: Copy { self.1 }

    /// Maps all components of this vector to a new type, yielding a vector of that new type.
    pub fn map<B>(self, map: impl Fn(T) -> B) -> Vec2<B> {
        Vec2(map(self.0), map(self.1))
    }

    /// Seeing this vector as a dimension or size (width and height),
    /// this returns the area that this dimensions contains (`width * height`).
    #[inline]
    pub fn area(self) -> T where T: std::ops::Mul<T, Output = T> {
        self.0 * self.1
    }
}

impl Vec2<usize> {

    /// Seeing `self` as a position inside a grid of the specified size,
    /// returns the index into the row-major storage of that grid.
    /// Panics for positions outside of the grid.
    #[inline]
    pub fn flat_index_for_size(self, resolution: Vec2<usize>) -> usize {
        assert!(
            self.x() < resolution.width() && self.y() < resolution.height(),
            "position {:?} is not inside the resolution {:?}", self, resolution
        );

        self.y() * resolution.width() + self.x()
    }

    /// Whether both width and height are divisible by two.
    #[inline]
    pub fn is_even(self) -> bool {
        self.0 % 2 == 0 && self.1 % 2 == 0
    }

    /// Round both components down to the closest even number.
    #[inline]
    pub fn round_down_to_even(self) -> Self {
        self.map(|value| value - value % 2)
    }

    /// Convert to a pair of `u32`, as used by the raster collaborator.
    pub fn to_u32(self) -> Result<Vec2<u32>> {
        let x = u32::try_from(self.0).map_err(|_| Error::unsupported("image width above u32"))?;
        let y = u32::try_from(self.1).map_err(|_| Error::unsupported("image height above u32"))?;
        Ok(Vec2(x, y))
    }
}

impl<T: std::ops::Div<T>> std::ops::Div<Vec2<T>> for Vec2<T> {
    type Output = Vec2<T::Output>;
    fn div(self, other: Vec2<T>) -> Self::Output {
        Vec2(self.0 / other.0, self.1 / other.1)
    }
}

impl<T> From<(T, T)> for Vec2<T> {
    fn from((x, y): (T, T)) -> Self { Vec2(x, y) }
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn flat_index_is_row_major(){
        let size = Vec2(4, 3);
        assert_eq!(Vec2(0, 0).flat_index_for_size(size), 0);
        assert_eq!(Vec2(3, 0).flat_index_for_size(size), 3);
        assert_eq!(Vec2(0, 1).flat_index_for_size(size), 4);
        assert_eq!(Vec2(3, 2).flat_index_for_size(size), 11);
    }

    #[test]
    #[should_panic]
    fn flat_index_outside_panics(){
        Vec2(4, 0).flat_index_for_size(Vec2(4, 3));
    }

    #[test]
    fn round_to_even(){
        assert_eq!(Vec2(5_usize, 7).round_down_to_even(), Vec2(4, 6));
        assert_eq!(Vec2(4_usize, 1).round_down_to_even(), Vec2(4, 0));
        assert!(Vec2(6_usize, 2).is_even());
        assert!(!Vec2(6_usize, 3).is_even());
    }
}
