//! The fMRI image list: a sequence of volumes with acquisition timing.
use crate::error::{ImageError, Result};
use crate::image::ndarray::{stack_images, ToNdArray};
use crate::image::{Image, ImageList};
use ndarray::ArrayD;
use std::ops::{Bound, Index, RangeBounds};
use std::slice;
use std::sync::Arc;
use tracing::debug;

/// A list of images forming an fMRI time series, one image per frame,
/// along with the timing of the acquisition.
///
/// The slice timing and the frame time override are shared, immutable
/// arrays: lists derived from this one (by selecting frames or through
/// [`empty_copy`]) refer to the same arrays instead of copying them.
///
/// # Example
///
/// ```
/// # use neuroimaging::{FmriImageList, Image};
/// # use ndarray::Array3;
/// let frames: Vec<_> = (0..5)
///     .map(|_| Image::from_array(Array3::<f32>::zeros((2, 4, 4))))
///     .collect();
/// let fmri = FmriImageList::new(frames, 2.0).with_slicetimes(vec![0.0, 1.0]);
/// assert_eq!(fmri.frametimes(), vec![0.0, 2.0, 4.0, 6.0, 8.0]);
///
/// let first = fmri.get_frame(0)?;
/// assert_eq!(first.shape(), &[2, 4, 4]);
///
/// let part = fmri.select_frames(1..3)?;
/// assert_eq!(part.len(), 2);
/// assert_eq!(part.tr(), 2.0);
/// # Ok::<(), neuroimaging::ImageError>(())
/// ```
///
/// [`empty_copy`]: #method.empty_copy
#[derive(Debug, Clone, PartialEq)]
pub struct FmriImageList<T> {
    frames: ImageList<T>,
    tr: f64,
    slicetimes: Option<Arc<[f64]>>,
    frametimes: Option<Arc<[f64]>>,
}

impl<T> FmriImageList<T> {
    /// Create a list from per-frame images and the repetition time, in
    /// seconds.
    pub fn new<L>(frames: L, tr: f64) -> Self
    where
        L: Into<ImageList<T>>,
    {
        FmriImageList {
            frames: frames.into(),
            tr,
            slicetimes: None,
            frametimes: None,
        }
    }

    /// Attach the acquisition offset of each slice within a frame.
    pub fn with_slicetimes<S>(mut self, slicetimes: S) -> Self
    where
        S: Into<Arc<[f64]>>,
    {
        self.slicetimes = Some(slicetimes.into());
        self
    }

    /// Override the frame times, for acquisitions which are not evenly
    /// sampled in time. The override is returned as is by [`frametimes`],
    /// whatever the repetition time and the number of frames.
    ///
    /// # Errors
    ///
    /// - `ImageError::InvalidFrameTimes` if the times ever decrease, or at
    /// the first time which is not a number.
    ///
    /// [`frametimes`]: #method.frametimes
    pub fn with_frametimes<F>(mut self, frametimes: F) -> Result<Self>
    where
        F: Into<Arc<[f64]>>,
    {
        let frametimes: Arc<[f64]> = frametimes.into();
        if let Some(position) = frametimes.iter().position(|t| t.is_nan()) {
            return Err(ImageError::InvalidFrameTimes(position));
        }
        if let Some(position) = frametimes.windows(2).position(|w| w[1] < w[0]) {
            return Err(ImageError::InvalidFrameTimes(position + 1));
        }
        self.frametimes = Some(frametimes);
        Ok(self)
    }

    /// The repetition time: time between frames, in seconds.
    pub fn tr(&self) -> f64 {
        self.tr
    }

    /// The slice acquisition offsets, if known.
    pub fn slicetimes(&self) -> Option<&[f64]> {
        self.slicetimes.as_deref()
    }

    /// The shared slice acquisition offsets, if known.
    pub fn shared_slicetimes(&self) -> Option<&Arc<[f64]>> {
        self.slicetimes.as_ref()
    }

    /// The explicit frame time override, if one was given.
    pub fn frametimes_override(&self) -> Option<&[f64]> {
        self.frametimes.as_deref()
    }

    /// The acquisition time of each frame: the override if there is one,
    /// `[0, TR, 2 TR, ..., (n - 1) TR]` otherwise.
    pub fn frametimes(&self) -> Vec<f64> {
        match &self.frametimes {
            Some(times) => times.to_vec(),
            None => (0..self.len()).map(|i| i as f64 * self.tr).collect(),
        }
    }

    /// Number of frames.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether there are no frames.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// The underlying image list.
    pub fn frames(&self) -> &ImageList<T> {
        &self.frames
    }

    /// Move the frames out, discarding the timing.
    pub fn into_frames(self) -> ImageList<T> {
        self.frames
    }

    /// Iterate over the frames in order.
    pub fn iter(&self) -> slice::Iter<Image<T>> {
        self.frames.iter()
    }

    /// Get the frame at position `index`.
    ///
    /// # Errors
    ///
    /// - `ImageError::OutOfBounds` if `index` is past the last frame.
    pub fn get_frame(&self, index: usize) -> Result<&Image<T>> {
        self.frames
            .get(index)
            .ok_or(ImageError::OutOfBounds(index, self.len()))
    }

    /// Replace the frame at position `index`, returning the previous one.
    pub fn set_frame(&mut self, index: usize, image: Image<T>) -> Result<Image<T>> {
        self.frames.set(index, image)
    }

    /// Append a frame.
    pub fn push_frame(&mut self, image: Image<T>) {
        self.frames.push(image);
    }

    /// A list with no frames and the same timing metadata, to be filled
    /// with frames derived from this one.
    pub fn empty_copy(&self) -> Self {
        FmriImageList {
            frames: ImageList::default(),
            tr: self.tr,
            slicetimes: self.slicetimes.clone(),
            frametimes: self.frametimes.clone(),
        }
    }

    /// Derive a list holding `frames`, carrying over the timing. The frame
    /// time override is narrowed with `pick` when it describes exactly the
    /// frames of this list; otherwise it is carried over untouched.
    fn derive<P>(&self, frames: ImageList<T>, pick: P) -> Self
    where
        P: FnOnce(&[f64]) -> Vec<f64>,
    {
        let frametimes = match &self.frametimes {
            Some(times) if times.len() == self.len() => {
                Some(Arc::<[f64]>::from(pick(&times[..])))
            }
            other => other.clone(),
        };
        FmriImageList {
            frames,
            tr: self.tr,
            slicetimes: self.slicetimes.clone(),
            frametimes,
        }
    }
}

impl<T: Clone> FmriImageList<T> {
    /// Create a list from the items of an image along its first axis, each
    /// frame keeping the parent's full output space.
    pub fn from_frames_of(image: &Image<T>, tr: f64) -> Result<Self> {
        Ok(FmriImageList::new(ImageList::from_frames_of(image)?, tr))
    }

    /// A new list restricted to the frames in `range`, with the same
    /// repetition time and slice timing. The slice timing is not re-sliced.
    ///
    /// Unlike slicing a Python list, a range reaching past the last frame is
    /// not clamped to the frames available: it is an error.
    ///
    /// # Errors
    ///
    /// - `ImageError::OutOfBounds` if the range reaches past the last frame
    /// or its start is past its end.
    pub fn select_frames<R>(&self, range: R) -> Result<Self>
    where
        R: RangeBounds<usize>,
    {
        let len = self.len();
        let start = match range.start_bound() {
            Bound::Included(&s) => s,
            Bound::Excluded(&s) => s.checked_add(1).ok_or(ImageError::OutOfBounds(s, len))?,
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&e) => e.checked_add(1).ok_or(ImageError::OutOfBounds(e, len))?,
            Bound::Excluded(&e) => e,
            Bound::Unbounded => len,
        };
        if end > len {
            return Err(ImageError::OutOfBounds(end, len));
        }
        if start > end {
            return Err(ImageError::OutOfBounds(start, end));
        }
        debug!("Selecting frames {}..{} of {}", start, end, len);
        let frames: ImageList<T> = self.frames.images()[start..end].iter().cloned().collect();
        Ok(self.derive(frames, |times| times[start..end].to_vec()))
    }

    /// A new list holding the frames at `indices`, in that order, with the
    /// same repetition time and slice timing.
    ///
    /// # Errors
    ///
    /// - `ImageError::OutOfBounds` if any index is past the last frame.
    pub fn take_frames(&self, indices: &[usize]) -> Result<Self> {
        let frames = indices
            .iter()
            .map(|&i| self.get_frame(i).map(Clone::clone))
            .collect::<Result<ImageList<T>>>()?;
        Ok(self.derive(frames, |times| indices.iter().map(|&i| times[i]).collect()))
    }
}

impl<T: Clone> ToNdArray<T> for FmriImageList<T> {
    /// Stack all frames into one array, frame axis first.
    fn to_ndarray(&self) -> Result<ArrayD<T>> {
        stack_images(self.frames.images())
    }
}

impl<T> Index<usize> for FmriImageList<T> {
    type Output = Image<T>;

    fn index(&self, index: usize) -> &Image<T> {
        &self.frames[index]
    }
}

impl<'a, T> IntoIterator for &'a FmriImageList<T> {
    type Item = &'a Image<T>;
    type IntoIter = slice::Iter<'a, Image<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::FmriImageList;
    use crate::error::ImageError;
    use crate::image::Image;
    use ndarray::Array3;
    use std::ops::Bound;
    use std::sync::Arc;

    fn frames(n: usize) -> Vec<Image<f32>> {
        (0..n)
            .map(|i| Image::from_array(Array3::from_elem((2, 3, 3), i as f32)))
            .collect()
    }

    #[test]
    fn frametimes_from_tr() {
        let fmri = FmriImageList::new(frames(5), 2.0);
        assert_eq!(fmri.frametimes(), vec![0.0, 2.0, 4.0, 6.0, 8.0]);
        assert!(FmriImageList::new(frames(0), 2.0).frametimes().is_empty());
    }

    #[test]
    fn frametimes_override() {
        let fmri = FmriImageList::new(frames(2), 2.0)
            .with_frametimes(vec![0.0, 1.5, 4.0])
            .unwrap();
        assert_eq!(fmri.frametimes(), vec![0.0, 1.5, 4.0]);

        let res = FmriImageList::new(frames(3), 2.0).with_frametimes(vec![0.0, 3.0, 1.0]);
        assert!(matches!(res, Err(ImageError::InvalidFrameTimes(2))));
    }

    #[test]
    fn frametimes_reject_nan() {
        let res = FmriImageList::new(frames(3), 2.0).with_frametimes(vec![0.0, f64::NAN, -5.0]);
        assert!(matches!(res, Err(ImageError::InvalidFrameTimes(1))));
        let res = FmriImageList::new(frames(1), 2.0).with_frametimes(vec![f64::NAN]);
        assert!(matches!(res, Err(ImageError::InvalidFrameTimes(0))));

        let fmri = FmriImageList::new(frames(2), 2.0)
            .with_frametimes(vec![0.0, f64::INFINITY])
            .unwrap();
        assert_eq!(fmri.frametimes_override(), Some(&[0.0, f64::INFINITY][..]));
        assert_eq!(FmriImageList::new(frames(2), 2.0).frametimes_override(), None);
    }

    #[test]
    fn selection_narrows_aligned_override() {
        let fmri = FmriImageList::new(frames(4), 2.0)
            .with_frametimes(vec![0.0, 1.0, 5.0, 9.0])
            .unwrap();
        let part = fmri.select_frames(1..=2).unwrap();
        assert_eq!(part.frametimes(), vec![1.0, 5.0]);
        let picked = fmri.take_frames(&[3, 0]).unwrap();
        assert_eq!(picked.frametimes(), vec![9.0, 0.0]);
        assert_eq!(picked[0].data()[[0, 0, 0]], 3.0);
    }

    #[test]
    fn selection_keeps_unaligned_override() {
        let fmri = FmriImageList::new(frames(4), 2.0)
            .with_frametimes(vec![0.0, 0.5])
            .unwrap();
        let part = fmri.select_frames(1..3).unwrap();
        assert_eq!(part.len(), 2);
        assert_eq!(part.frametimes(), vec![0.0, 0.5]);
        let picked = fmri.take_frames(&[3]).unwrap();
        assert_eq!(picked.frametimes_override(), Some(&[0.0, 0.5][..]));
    }

    #[test]
    fn selection_range_overflow() {
        let fmri = FmriImageList::new(frames(3), 2.0);
        assert!(matches!(
            fmri.select_frames(1..=usize::MAX),
            Err(ImageError::OutOfBounds(usize::MAX, 3))
        ));
        let excluded_start = (Bound::Excluded(usize::MAX), Bound::Unbounded);
        assert!(matches!(
            fmri.select_frames(excluded_start),
            Err(ImageError::OutOfBounds(usize::MAX, 3))
        ));
    }

    #[test]
    fn selection_bounds() {
        let fmri = FmriImageList::new(frames(4), 2.0);
        assert!(matches!(fmri.select_frames(2..5), Err(ImageError::OutOfBounds(5, 4))));
        assert!(matches!(fmri.take_frames(&[0, 4]), Err(ImageError::OutOfBounds(4, 4))));
        assert!(matches!(fmri.get_frame(4), Err(ImageError::OutOfBounds(4, 4))));
        assert_eq!(fmri.select_frames(..).unwrap().len(), 4);
        assert!(fmri.select_frames(4..).unwrap().is_empty());
    }

    #[test]
    fn metadata_is_shared() {
        let fmri = FmriImageList::new(frames(3), 2.5).with_slicetimes(vec![0.0, 0.5]);
        let empty = fmri.empty_copy();
        assert!(empty.is_empty());
        assert_eq!(empty.tr(), 2.5);
        assert!(Arc::ptr_eq(
            fmri.shared_slicetimes().unwrap(),
            empty.shared_slicetimes().unwrap()
        ));
    }

    #[test]
    fn set_and_push_frames() {
        let mut fmri = FmriImageList::new(frames(2), 1.0);
        let replacement = Image::from_array(Array3::from_elem((2, 3, 3), 9.0f32));
        let _ = fmri.set_frame(0, replacement).unwrap();
        assert_eq!(fmri[0].data()[[1, 1, 1]], 9.0);
        assert!(fmri.set_frame(2, frames(1).remove(0)).is_err());
        fmri.push_frame(frames(1).remove(0));
        assert_eq!(fmri.len(), 3);
        assert_eq!(fmri.frametimes(), vec![0.0, 1.0, 2.0]);

        assert_eq!(fmri.frames().len(), 3);
        let images = fmri.into_frames().into_images();
        assert_eq!(images.len(), 3);
        assert_eq!(images[0].data()[[0, 0, 0]], 9.0);
    }
}
