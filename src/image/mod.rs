//! This module defines the image API: an array of sample values together
//! with the coordinate map that places its array indices in world space,
//! and ordered lists of such images.

pub mod list;
pub mod ndarray;

pub use self::list::ImageList;
pub use self::ndarray::ToNdArray;

use crate::error::{ImageError, Result};
use crate::reference::CoordinateMap;
use ::ndarray::{Array, ArrayD, Axis, Dimension};

/// An N-dimensional array of samples plus the coordinate map describing
/// how array indices relate to physical space.
///
/// The image owns its coordinate map; slicing or deriving images creates
/// new maps rather than sharing them.
#[derive(Debug, Clone, PartialEq)]
pub struct Image<T> {
    data: ArrayD<T>,
    coordmap: CoordinateMap,
}

impl<T> Image<T> {
    /// Validate and create a new image.
    ///
    /// # Errors
    ///
    /// - `ImageError::DimensionMismatch` if the coordinate map's input space
    /// does not have one axis per array dimension.
    pub fn new<D: Dimension>(data: Array<T, D>, coordmap: CoordinateMap) -> Result<Self> {
        if data.ndim() != coordmap.ndim_in() {
            return Err(ImageError::DimensionMismatch(
                data.ndim(),
                coordmap.ndim_in(),
            ));
        }
        Ok(Image {
            data: data.into_dyn(),
            coordmap,
        })
    }

    /// Create an image placed in world space by the identity map.
    pub fn from_array<D: Dimension>(data: Array<T, D>) -> Self {
        let coordmap = CoordinateMap::identity(data.ndim());
        Image {
            data: data.into_dyn(),
            coordmap,
        }
    }

    /// The shape of the sample array.
    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    /// The number of array dimensions.
    pub fn ndim(&self) -> usize {
        self.data.ndim()
    }

    /// The sample array.
    pub fn data(&self) -> &ArrayD<T> {
        &self.data
    }

    /// Mutable access to the samples. The shape cannot be changed from here,
    /// so the coordinate map remains valid.
    pub fn data_mut(&mut self) -> ::ndarray::ArrayViewMutD<T> {
        self.data.view_mut()
    }

    /// The coordinate map.
    pub fn coordmap(&self) -> &CoordinateMap {
        &self.coordmap
    }

    /// Move the sample array and coordinate map out of the image.
    pub fn into_parts(self) -> (ArrayD<T>, CoordinateMap) {
        (self.data, self.coordmap)
    }

    /// Create a new image with `f` applied to every sample, under the same
    /// coordinate map.
    pub fn map_values<U, F>(&self, f: F) -> Image<U>
    where
        F: FnMut(&T) -> U,
    {
        Image {
            data: self.data.map(f),
            coordmap: self.coordmap.clone(),
        }
    }
}

/// Interface for an image that can be sliced.
pub trait Sliceable {
    /// The type of the resulting slice.
    type Slice;

    /// Obtain a slice over a certain axis, yielding an image of N-1
    /// dimensions.
    fn get_slice(&self, axis: usize, index: usize) -> Result<Self::Slice>;
}

impl<T: Clone> Sliceable for Image<T> {
    type Slice = Image<T>;

    /// The slice keeps the output space of the parent; only the sliced input
    /// axis disappears from the coordinate map.
    ///
    /// # Errors
    ///
    /// - `ImageError::OutOfBounds` if the axis or the index along it is out
    /// of range.
    fn get_slice(&self, axis: usize, index: usize) -> Result<Image<T>> {
        if axis >= self.ndim() {
            return Err(ImageError::OutOfBounds(axis, self.ndim()));
        }
        let len = self.shape()[axis];
        if index >= len {
            return Err(ImageError::OutOfBounds(index, len));
        }
        let coordmap = self.coordmap.slice_input(axis, index)?;
        Ok(Image {
            data: self.data.index_axis(Axis(axis), index).to_owned(),
            coordmap,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{Image, Sliceable};
    use crate::error::ImageError;
    use crate::reference::{Affine, CoordinateMap};
    use ndarray::{Array, Array3, IxDyn};

    #[test]
    fn coordmap_must_match_rank() {
        let data = Array3::<f32>::zeros((2, 3, 4));
        let res = Image::new(data, CoordinateMap::identity(4));
        assert!(matches!(res, Err(ImageError::DimensionMismatch(3, 4))));
    }

    #[test]
    fn slice_image() {
        let data = Array::from_shape_fn(IxDyn(&[3, 4, 5]), |ix| (ix[0] * 100 + ix[1] * 10 + ix[2]) as i32);
        let cmap = CoordinateMap::from_affine(
            Affine::from_diagonal(&[2.0, 3.0, 4.0], &[0.0, 0.0, 0.0]).unwrap(),
            &["z", "y", "x"],
        )
        .unwrap();
        let image = Image::new(data, cmap).unwrap();

        let slice = image.get_slice(1, 2).unwrap();
        assert_eq!(slice.shape(), &[3, 5]);
        assert_eq!(slice.data()[[1, 3]], 123);
        assert_eq!(slice.coordmap().ndim_in(), 2);
        assert_eq!(slice.coordmap().ndim_out(), 3);
        assert_eq!(
            slice.coordmap().map_point(&[1.0, 3.0]).unwrap(),
            vec![2.0, 6.0, 12.0]
        );

        assert!(matches!(image.get_slice(3, 0), Err(ImageError::OutOfBounds(3, 3))));
        assert!(matches!(image.get_slice(0, 3), Err(ImageError::OutOfBounds(3, 3))));
    }

    #[test]
    fn map_values_keeps_coordmap() {
        let image = Image::from_array(Array3::<u8>::from_elem((2, 2, 2), 7));
        let doubled = image.map_values(|v| f32::from(*v) * 2.0);
        assert_eq!(doubled.coordmap(), image.coordmap());
        assert!(doubled.data().iter().all(|v| *v == 14.0));
    }
}
