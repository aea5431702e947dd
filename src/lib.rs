//! Neuroimaging image model with fMRI time series support.
//!
//! Images pair an N-dimensional sample array with a coordinate map, which
//! relates array indices to positions in world space. An fMRI run is kept
//! as an [`FmriImageList`]: one image per frame plus the acquisition timing.
//!
//! # Example
//!
//! ```
//! use ndarray::{Array, IxDyn};
//! use neuroimaging::{fmri_generator, from_image, Affine, CoordinateMap, Image, ToNdArray};
//!
//! # fn run() -> neuroimaging::Result<()> {
//! // 6 frames of 2x4x4 voxels, sampled every 2 seconds
//! let data = Array::<f32, _>::zeros(IxDyn(&[6, 2, 4, 4]));
//! let affine = Affine::from_diagonal(&[2.0, 3.0, 2.0, 2.0], &[0.0, 0.0, 0.0, 0.0])?;
//! let coordmap = CoordinateMap::from_affine(affine, &["t", "z", "y", "x"])?;
//! let run = from_image(&Image::new(data, coordmap)?, None, None)?;
//!
//! assert_eq!(run.len(), 6);
//! assert_eq!(run.tr(), 2.0);
//! assert_eq!(run.to_ndarray()?.shape(), &[6, 2, 4, 4]);
//!
//! for (slice, series) in fmri_generator(&run, None)? {
//!     assert_eq!(series.shape(), &[6, 4, 4], "slice {}", slice);
//! }
//! # Ok(())
//! # }
//! # run().unwrap();
//! ```
//!
//! [`FmriImageList`]: ./fmri/list/struct.FmriImageList.html
#![deny(missing_debug_implementations)]
#![warn(missing_docs, unused_extern_crates, trivial_casts, unused_results)]

#[macro_use]
extern crate quick_error;
#[macro_use]
extern crate approx;

pub mod error;
pub mod fmri;
pub mod image;
pub mod reference;

pub use crate::error::{ImageError, Result};
pub use crate::fmri::{
    fmri_generator, from_image, from_image_with_options, FmriGenerator, FmriImageList,
    FromImageOptions,
};
pub use crate::image::{Image, ImageList, Sliceable, ToNdArray};
pub use crate::reference::{Affine, CoordinateMap, CoordinateSystem, FunctionMapping, Mapping};
