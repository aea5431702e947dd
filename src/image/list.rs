//! Ordered sequences of images.
use crate::error::{ImageError, Result};
use crate::image::ndarray::{stack_images, ToNdArray};
use crate::image::{Image, Sliceable};
use ndarray::ArrayD;
use std::iter::FromIterator;
use std::ops::Index;
use std::slice;
use tracing::debug;

/// An ordered sequence of images.
///
/// The list is composed of images rather than being an array itself;
/// converting it to an array (through [`ToNdArray`]) stacks every image
/// along a new leading axis.
///
/// [`ToNdArray`]: ../ndarray/trait.ToNdArray.html
#[derive(Debug, Clone, PartialEq)]
pub struct ImageList<T> {
    images: Vec<Image<T>>,
}

impl<T> ImageList<T> {
    /// Create a list from a sequence of images.
    pub fn new(images: Vec<Image<T>>) -> Self {
        ImageList { images }
    }

    /// Number of images in the list.
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Whether the list holds no images.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Get the image at position `index`.
    pub fn get(&self, index: usize) -> Option<&Image<T>> {
        self.images.get(index)
    }

    /// Get mutable access to the image at position `index`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Image<T>> {
        self.images.get_mut(index)
    }

    /// Replace the image at position `index`, returning the previous one.
    ///
    /// # Errors
    ///
    /// - `ImageError::OutOfBounds` if `index` is past the end of the list.
    pub fn set(&mut self, index: usize, image: Image<T>) -> Result<Image<T>> {
        let len = self.len();
        let slot = self
            .images
            .get_mut(index)
            .ok_or(ImageError::OutOfBounds(index, len))?;
        Ok(std::mem::replace(slot, image))
    }

    /// Append an image to the end of the list.
    pub fn push(&mut self, image: Image<T>) {
        self.images.push(image);
    }

    /// Iterate over the images in order.
    pub fn iter(&self) -> slice::Iter<Image<T>> {
        self.images.iter()
    }

    /// The images as a slice.
    pub fn images(&self) -> &[Image<T>] {
        &self.images
    }

    /// Move the images out of the list.
    pub fn into_images(self) -> Vec<Image<T>> {
        self.images
    }
}

impl<T: Clone> ImageList<T> {
    /// Create a list from the items of an image along its first axis. Each
    /// item keeps the full output space of the parent image; see
    /// [`Sliceable::get_slice`].
    ///
    /// # Errors
    ///
    /// - `ImageError::DimensionMismatch` if the image is zero-dimensional.
    ///
    /// [`Sliceable::get_slice`]: ../trait.Sliceable.html#tymethod.get_slice
    pub fn from_frames_of(image: &Image<T>) -> Result<Self> {
        if image.ndim() == 0 {
            return Err(ImageError::DimensionMismatch(1, 0));
        }
        let n = image.shape()[0];
        debug!("Splitting image of shape {:?} into {} items", image.shape(), n);
        let images = (0..n)
            .map(|i| image.get_slice(0, i))
            .collect::<Result<Vec<_>>>()?;
        Ok(ImageList { images })
    }
}

impl<T> Default for ImageList<T> {
    fn default() -> Self {
        ImageList { images: Vec::new() }
    }
}

impl<T: Clone> ToNdArray<T> for ImageList<T> {
    fn to_ndarray(&self) -> Result<ArrayD<T>> {
        stack_images(&self.images)
    }
}

impl<T> Index<usize> for ImageList<T> {
    type Output = Image<T>;

    fn index(&self, index: usize) -> &Image<T> {
        &self.images[index]
    }
}

impl<T> From<Vec<Image<T>>> for ImageList<T> {
    fn from(images: Vec<Image<T>>) -> Self {
        ImageList { images }
    }
}

impl<T> FromIterator<Image<T>> for ImageList<T> {
    fn from_iter<I: IntoIterator<Item = Image<T>>>(iter: I) -> Self {
        ImageList {
            images: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for ImageList<T> {
    type Item = Image<T>;
    type IntoIter = std::vec::IntoIter<Image<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.images.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ImageList<T> {
    type Item = &'a Image<T>;
    type IntoIter = slice::Iter<'a, Image<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.images.iter()
    }
}
