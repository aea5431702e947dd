//! Conversion of a single 4D image into an fMRI image list.
//!
//! The first axis of the image is taken to be time: each index along it
//! becomes one frame, and the first row and column of the affine transform
//! are taken to describe time alone. When the transform mixes the time axis
//! with the spatial ones, the frames still map their own voxels exactly but
//! lose the dependency of the spatial coordinates on time. By default this is
//! reported with a warning; [`FromImageOptions::strict_time_axis`] turns it
//! into an error.
//!
//! [`FromImageOptions::strict_time_axis`]: ./struct.FromImageOptions.html#method.strict_time_axis
use crate::error::{ImageError, Result};
use crate::fmri::list::FmriImageList;
use crate::image::{Image, Sliceable};
use crate::reference::{Affine, CoordinateMap};
use std::sync::Arc;
use tracing::{debug, warn};

/// Options for [`from_image_with_options`].
///
/// [`from_image_with_options`]: ./fn.from_image_with_options.html
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FromImageOptions {
    tr: Option<f64>,
    slicetimes: Option<Arc<[f64]>>,
    strict_time_axis: bool,
}

impl FromImageOptions {
    /// Default options: repetition time taken from the affine, no slice
    /// timing, warnings on a coupled time axis.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use this repetition time instead of the one in the affine.
    pub fn tr(mut self, tr: f64) -> Self {
        self.tr = Some(tr);
        self
    }

    /// Attach slice timing to the resulting list.
    pub fn slicetimes<S>(mut self, slicetimes: S) -> Self
    where
        S: Into<Arc<[f64]>>,
    {
        self.slicetimes = Some(slicetimes.into());
        self
    }

    /// Fail with `ImageError::CoupledTimeAxis` instead of warning when the
    /// time axis of the affine is not separable from the spatial axes.
    pub fn strict_time_axis(mut self, strict: bool) -> Self {
        self.strict_time_axis = strict;
        self
    }
}

/// Create an fMRI image list from a 4D image whose first axis is time.
///
/// `tr` defaults to the first diagonal entry of the affine transform.
///
/// An image with no samples along the time axis yields an empty list, which
/// cannot be stacked back into an array: its `to_ndarray` fails with
/// `ImageError::NoFrames` instead of giving an array of zero frames.
///
/// # Errors
///
/// - `ImageError::InvalidMapping` if the image's coordinate map is not
/// affine.
/// - `ImageError::DimensionMismatch` if the image has fewer than two axes.
pub fn from_image<T: Clone>(
    fourdimage: &Image<T>,
    tr: Option<f64>,
    slicetimes: Option<Arc<[f64]>>,
) -> Result<FmriImageList<T>> {
    let options = FromImageOptions {
        tr,
        slicetimes,
        strict_time_axis: false,
    };
    from_image_with_options(fourdimage, &options)
}

/// Create an fMRI image list from a 4D image whose first axis is time,
/// with the given options.
///
/// Each frame is the image sliced at one time index, under a coordinate map
/// whose transform has the time row and column removed. Its output space is
/// named `"world"` and holds the parent's axes without time.
///
/// # Errors
///
/// - `ImageError::InvalidMapping` if the image's coordinate map is not
/// affine.
/// - `ImageError::DimensionMismatch` if the image has fewer than two axes.
/// - `ImageError::CoupledTimeAxis` in strict mode, if the time axis of the
/// affine is not separable.
pub fn from_image_with_options<T: Clone>(
    fourdimage: &Image<T>,
    options: &FromImageOptions,
) -> Result<FmriImageList<T>> {
    let coordmap = fourdimage.coordmap();
    let affine = coordmap
        .mapping()
        .as_affine()
        .ok_or(ImageError::InvalidMapping)?;
    if fourdimage.ndim() < 2 {
        return Err(ImageError::DimensionMismatch(2, fourdimage.ndim()));
    }
    check_time_axis(affine, options.strict_time_axis)?;

    let output_coords = coordmap.output_coords().drop_axis(0)?.renamed("world");
    let nframes = fourdimage.shape()[0];
    debug!(
        "Converting image of shape {:?} into {} frames",
        fourdimage.shape(),
        nframes
    );

    let mut frames = Vec::with_capacity(nframes);
    for i in 0..nframes {
        let (data, frame_map) = fourdimage.get_slice(0, i)?.into_parts();
        let transform = frame_map
            .mapping()
            .as_affine()
            .ok_or(ImageError::InvalidMapping)?
            .drop_output_axis(0)?;
        let frame_map = CoordinateMap::new(
            transform,
            frame_map.input_coords().clone(),
            output_coords.clone(),
        )?;
        frames.push(Image::new(data, frame_map)?);
    }

    let tr = match options.tr {
        Some(tr) => tr,
        None => {
            let tr = affine.matrix()[(0, 0)];
            if !(tr.is_finite() && tr > 0.0) {
                warn!("Repetition time taken from the affine is {}", tr);
            }
            tr
        }
    };

    let fmri = FmriImageList::new(frames, tr);
    Ok(match &options.slicetimes {
        Some(slicetimes) => fmri.with_slicetimes(Arc::clone(slicetimes)),
        None => fmri,
    })
}

fn check_time_axis(affine: &Affine, strict: bool) -> Result<()> {
    if affine.is_separable(0) {
        return Ok(());
    }
    if strict {
        return Err(ImageError::CoupledTimeAxis);
    }
    warn!(
        "Time axis is not separable in affine {:?}; frame coordinate maps ignore the coupling",
        affine.matrix().as_slice()
    );
    Ok(())
}
