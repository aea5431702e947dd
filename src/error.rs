//! Types for error handling go here.
use ndarray::ShapeError;

quick_error! {
    /// Error type for all image, coordinate map and fMRI list operations.
    #[derive(Debug)]
    pub enum ImageError {
        /// The image's coordinate map is not backed by an affine mapping.
        InvalidMapping {
            display("Coordinate map must have an affine mapping")
        }
        /// The matrix cannot be used as a homogeneous affine transform.
        InvalidAffine(reason: &'static str) {
            display("Invalid affine transform: {}", reason)
        }
        /// The affine transform has no inverse.
        SingularAffine {
            display("Affine transform is not invertible")
        }
        /// Two dimensionalities which should agree do not.
        DimensionMismatch(expected: usize, got: usize) {
            display("Inconsistent dimensionality: expected {}, got {}", expected, got)
        }
        /// Arrays could not be combined or reshaped.
        IncompatibleShape(err: ShapeError) {
            from()
            source(err)
            display("Incompatible array shapes: {}", err)
        }
        /// Attempted to access an element past the end of a sequence or axis.
        OutOfBounds(index: usize, len: usize) {
            display("Index {} is out of bounds for length {}", index, len)
        }
        /// The image list has no frames to stack.
        NoFrames {
            display("Image list has no frames")
        }
        /// A coordinate system was given the same axis name twice.
        DuplicateAxis(name: String) {
            display("Duplicate axis name `{}`", name)
        }
        /// Explicit frame times decrease somewhere.
        InvalidFrameTimes(position: usize) {
            display("Frame times decrease at position {}", position)
        }
        /// The time axis of an affine is coupled with the spatial axes.
        CoupledTimeAxis {
            display("Time axis of the affine transform is coupled with spatial axes")
        }
    }
}

/// Alias type for results originating from this crate.
pub type Result<T> = ::std::result::Result<T, ImageError>;
