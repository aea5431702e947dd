//! fMRI specific structures: image lists holding one volume per frame with
//! the acquisition timing, their construction from a single 4D image, and
//! iteration over time series.

pub mod convert;
pub mod generator;
pub mod list;

pub use self::convert::{from_image, from_image_with_options, FromImageOptions};
pub use self::generator::{fmri_generator, FmriGenerator};
pub use self::list::FmriImageList;
