//! Interfaces for turning images and image sequences into `ndarray` arrays.
//!
//! This module introduces the trait [`ToNdArray`], which is implemented for
//! images, image lists and plain arrays alike, so that code working on
//! sample values (such as the fMRI time series generator) can accept any of
//! them. Conversion of a single image is a copy of its data; conversion of a
//! list stacks every image along a new leading axis, which materializes the
//! whole sequence and is therefore considerably more expensive.
//!
//! [`ToNdArray`]: ./trait.ToNdArray.html
use crate::error::{ImageError, Result};
use crate::image::Image;
use ndarray::{ArrayBase, ArrayD, ArrayViewD, Axis, Data, Dimension};

/// Trait for values which can be converted to an ndarray with a dynamic
/// number of dimensions.
///
/// Please see the [module-level documentation](index.html) for more details.
pub trait ToNdArray<T> {
    /// Obtain an owned array of the sample values.
    fn to_ndarray(&self) -> Result<ArrayD<T>>;
}

impl<T: Clone> ToNdArray<T> for Image<T> {
    fn to_ndarray(&self) -> Result<ArrayD<T>> {
        Ok(self.data().clone())
    }
}

impl<A, S, D> ToNdArray<A> for ArrayBase<S, D>
where
    A: Clone,
    S: Data<Elem = A>,
    D: Dimension,
{
    fn to_ndarray(&self) -> Result<ArrayD<A>> {
        Ok(self.to_owned().into_dyn())
    }
}

/// Stack the data of all images along a new leading axis.
///
/// # Errors
///
/// - `ImageError::NoFrames` if there are no images.
/// - `ImageError::IncompatibleShape` if the images differ in shape.
pub(crate) fn stack_images<T: Clone>(images: &[Image<T>]) -> Result<ArrayD<T>> {
    if images.is_empty() {
        return Err(ImageError::NoFrames);
    }
    let views: Vec<ArrayViewD<T>> = images.iter().map(|im| im.data().view()).collect();
    Ok(ndarray::stack(Axis(0), &views)?)
}
