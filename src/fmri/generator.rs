//! Iteration over the time series of an fMRI data set.
use crate::error::{ImageError, Result};
use crate::image::ToNdArray;
use ndarray::{ArrayD, Axis};
use std::iter::FusedIterator;
use std::vec;

/// Iterator of `(item, series)` pairs, where `series` is the data sliced at
/// `item` along its second axis: every frame of one item (for instance one
/// slice of the volume) over time.
///
/// Created by [`fmri_generator`].
///
/// [`fmri_generator`]: ./fn.fmri_generator.html
#[derive(Debug, Clone)]
pub struct FmriGenerator<T> {
    data: ArrayD<T>,
    items: vec::IntoIter<usize>,
}

/// Create an iterator over `data[:, item]` for each of `items`, or for every
/// index along the second axis when `items` is `None`.
///
/// The data is converted to an array once, up front. For an
/// `FmriImageList`, this stacks every frame, which costs more than
/// converting an `Image` holding the same samples.
///
/// # Errors
///
/// - `ImageError::DimensionMismatch` if the data has fewer than two axes.
/// - `ImageError::OutOfBounds` if any item is past the end of the second
/// axis.
/// - Any error of converting the data to an array.
///
/// # Example
///
/// ```
/// # use neuroimaging::fmri_generator;
/// # use ndarray::Array4;
/// let data = Array4::<f32>::zeros((10, 5, 3, 3));
/// let items: Vec<usize> = fmri_generator(&data, None)?.map(|(i, _)| i).collect();
/// assert_eq!(items, vec![0, 1, 2, 3, 4]);
/// # Ok::<(), neuroimaging::ImageError>(())
/// ```
pub fn fmri_generator<T, D>(data: &D, items: Option<Vec<usize>>) -> Result<FmriGenerator<T>>
where
    T: Clone,
    D: ToNdArray<T> + ?Sized,
{
    let data = data.to_ndarray()?;
    if data.ndim() < 2 {
        return Err(ImageError::DimensionMismatch(2, data.ndim()));
    }
    let len = data.shape()[1];
    let items = match items {
        Some(items) => {
            if let Some(&bad) = items.iter().find(|&&i| i >= len) {
                return Err(ImageError::OutOfBounds(bad, len));
            }
            items
        }
        None => (0..len).collect(),
    };
    Ok(FmriGenerator {
        data,
        items: items.into_iter(),
    })
}

impl<T: Clone> Iterator for FmriGenerator<T> {
    type Item = (usize, ArrayD<T>);

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.items.next()?;
        Some((item, self.data.index_axis(Axis(1), item).to_owned()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.items.size_hint()
    }
}

impl<T: Clone> ExactSizeIterator for FmriGenerator<T> {}

impl<T: Clone> FusedIterator for FmriGenerator<T> {}
