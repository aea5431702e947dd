//! Affine transforms in homogeneous coordinates.
use crate::error::{ImageError, Result};
use nalgebra::{DMatrix, DVector};
use std::convert::TryFrom;

/// Tolerance when checking the homogeneous row of an affine matrix.
const HOMOGENEOUS_EPSILON: f64 = 1e-12;

/// An affine transform from `ndim_in` input coordinates to `ndim_out`
/// output coordinates, kept as a `(ndim_out + 1) x (ndim_in + 1)` matrix.
///
/// The upper left block is the linear part, the last column (minus its last
/// entry) is the translation, and the last row is `[0, ..., 0, 1]`. Square
/// transforms are the common case; the rectangular form shows up while
/// slicing an image along one of its axes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "DMatrix<f64>", into = "DMatrix<f64>")
)]
pub struct Affine {
    matrix: DMatrix<f64>,
}

impl Affine {
    /// Validate and create a new affine from its homogeneous matrix.
    ///
    /// # Errors
    ///
    /// - `ImageError::InvalidAffine` if the matrix is empty or its last row
    /// is not `[0, ..., 0, 1]`.
    pub fn new(matrix: DMatrix<f64>) -> Result<Self> {
        if matrix.nrows() == 0 || matrix.ncols() == 0 {
            return Err(ImageError::InvalidAffine("empty matrix"));
        }
        let last = matrix.nrows() - 1;
        let ncols = matrix.ncols();
        for c in 0..ncols {
            let expected = if c == ncols - 1 { 1.0 } else { 0.0 };
            if !abs_diff_eq!(matrix[(last, c)], expected, epsilon = HOMOGENEOUS_EPSILON) {
                return Err(ImageError::InvalidAffine(
                    "last row must be [0, ..., 0, 1]",
                ));
            }
        }
        Ok(Affine { matrix })
    }

    /// The identity transform over `ndim` dimensions.
    pub fn identity(ndim: usize) -> Self {
        Affine {
            matrix: DMatrix::identity(ndim + 1, ndim + 1),
        }
    }

    /// Assemble an affine from its linear part and its translation.
    ///
    /// # Errors
    ///
    /// - `ImageError::DimensionMismatch` if the translation does not have one
    /// entry per row of `linear`.
    pub fn from_linear_and_translation(
        linear: &DMatrix<f64>,
        translation: &DVector<f64>,
    ) -> Result<Self> {
        if linear.nrows() != translation.len() {
            return Err(ImageError::DimensionMismatch(
                linear.nrows(),
                translation.len(),
            ));
        }
        let (rows, cols) = linear.shape();
        let mut matrix = DMatrix::zeros(rows + 1, cols + 1);
        matrix.view_mut((0, 0), (rows, cols)).copy_from(linear);
        matrix.view_mut((0, cols), (rows, 1)).copy_from(translation);
        matrix[(rows, cols)] = 1.0;
        Ok(Affine { matrix })
    }

    /// A scaling transform with one step per axis, followed by a
    /// translation to `origin`.
    ///
    /// # Errors
    ///
    /// - `ImageError::DimensionMismatch` if `steps` and `origin` differ in length.
    pub fn from_diagonal(steps: &[f64], origin: &[f64]) -> Result<Self> {
        if steps.len() != origin.len() {
            return Err(ImageError::DimensionMismatch(steps.len(), origin.len()));
        }
        let linear = DMatrix::from_diagonal(&DVector::from_column_slice(steps));
        Self::from_linear_and_translation(&linear, &DVector::from_column_slice(origin))
    }

    /// Number of input coordinates.
    pub fn ndim_in(&self) -> usize {
        self.matrix.ncols() - 1
    }

    /// Number of output coordinates.
    pub fn ndim_out(&self) -> usize {
        self.matrix.nrows() - 1
    }

    /// Whether the input and output spaces have the same dimensionality.
    pub fn is_square(&self) -> bool {
        self.matrix.is_square()
    }

    /// The full homogeneous matrix.
    pub fn matrix(&self) -> &DMatrix<f64> {
        &self.matrix
    }

    /// Move the homogeneous matrix out of the affine.
    pub fn into_matrix(self) -> DMatrix<f64> {
        self.matrix
    }

    /// The linear part of the transform.
    pub fn linear(&self) -> DMatrix<f64> {
        self.matrix
            .view((0, 0), (self.ndim_out(), self.ndim_in()))
            .into_owned()
    }

    /// The translation part of the transform.
    pub fn translation(&self) -> DVector<f64> {
        self.matrix
            .column(self.ndim_in())
            .rows(0, self.ndim_out())
            .into_owned()
    }

    /// Map a point from input to output coordinates.
    ///
    /// # Errors
    ///
    /// - `ImageError::DimensionMismatch` if the point does not have
    /// `ndim_in()` coordinates.
    pub fn map_point(&self, point: &[f64]) -> Result<Vec<f64>> {
        if point.len() != self.ndim_in() {
            return Err(ImageError::DimensionMismatch(self.ndim_in(), point.len()));
        }
        let homogeneous = DVector::from_iterator(
            point.len() + 1,
            point.iter().copied().chain(std::iter::once(1.0)),
        );
        let out = &self.matrix * homogeneous;
        Ok(out.iter().take(self.ndim_out()).copied().collect())
    }

    /// Compute the inverse transform.
    ///
    /// # Errors
    ///
    /// - `ImageError::DimensionMismatch` if the transform is not square.
    /// - `ImageError::SingularAffine` if the linear part is singular.
    pub fn inverse(&self) -> Result<Self> {
        if !self.is_square() {
            return Err(ImageError::DimensionMismatch(self.ndim_in(), self.ndim_out()));
        }
        self.matrix
            .clone()
            .try_inverse()
            .map(|matrix| Affine { matrix })
            .ok_or(ImageError::SingularAffine)
    }

    /// Fix input coordinate `axis` at `index`, removing it from the input
    /// space. The contribution of the fixed coordinate is folded into the
    /// translation, so the remaining coordinates map exactly as before.
    ///
    /// # Errors
    ///
    /// - `ImageError::OutOfBounds` if there is no such input axis.
    pub fn drop_input_axis(&self, axis: usize, index: f64) -> Result<Self> {
        if axis >= self.ndim_in() {
            return Err(ImageError::OutOfBounds(axis, self.ndim_in()));
        }
        let t = self.ndim_in();
        let mut matrix = self.matrix.clone();
        for r in 0..matrix.nrows() {
            let shift = matrix[(r, axis)] * index;
            matrix[(r, t)] += shift;
        }
        Ok(Affine {
            matrix: matrix.remove_column(axis),
        })
    }

    /// Remove output coordinate `axis` from the output space.
    ///
    /// # Errors
    ///
    /// - `ImageError::OutOfBounds` if there is no such output axis.
    pub fn drop_output_axis(&self, axis: usize) -> Result<Self> {
        if axis >= self.ndim_out() {
            return Err(ImageError::OutOfBounds(axis, self.ndim_out()));
        }
        Ok(Affine {
            matrix: self.matrix.clone().remove_row(axis),
        })
    }

    /// Whether `axis` is separable: the output coordinate `axis` depends only
    /// on input coordinate `axis` and vice versa. Only meaningful for square
    /// transforms; rectangular ones are never separable.
    pub fn is_separable(&self, axis: usize) -> bool {
        if !self.is_square() || axis >= self.ndim_in() {
            return false;
        }
        let n = self.ndim_in();
        (0..n)
            .filter(|&k| k != axis)
            .all(|k| self.matrix[(axis, k)] == 0.0 && self.matrix[(k, axis)] == 0.0)
    }
}

impl TryFrom<DMatrix<f64>> for Affine {
    type Error = crate::error::ImageError;

    fn try_from(matrix: DMatrix<f64>) -> Result<Self> {
        Affine::new(matrix)
    }
}

impl From<Affine> for DMatrix<f64> {
    fn from(affine: Affine) -> Self {
        affine.matrix
    }
}

#[cfg(test)]
mod tests {
    use super::Affine;
    use crate::error::ImageError;
    use nalgebra::{DMatrix, DVector};

    #[test]
    #[rustfmt::skip]
    fn bad_homogeneous_row() {
        let m = DMatrix::from_row_slice(3, 3, &[
            1.0, 0.0, 0.0,
            0.0, 1.0, 0.0,
            0.0, 0.5, 1.0,
        ]);
        assert!(matches!(Affine::new(m), Err(ImageError::InvalidAffine(_))));
        assert!(Affine::new(DMatrix::zeros(0, 0)).is_err());
    }

    #[test]
    fn diagonal_maps_points() {
        let a = Affine::from_diagonal(&[2.0, 3.0, 4.0], &[-10.0, 0.0, 5.0]).unwrap();
        assert_eq!(a.ndim_in(), 3);
        assert_eq!(a.ndim_out(), 3);
        assert_eq!(a.map_point(&[1.0, 1.0, 1.0]).unwrap(), vec![-8.0, 3.0, 9.0]);
        assert_eq!(a.translation(), DVector::from_column_slice(&[-10.0, 0.0, 5.0]));
        assert!(a.map_point(&[1.0, 1.0]).is_err());
    }

    #[test]
    fn inverse_round_trip() {
        let a = Affine::from_diagonal(&[2.0, 0.5], &[1.0, -1.0]).unwrap();
        let inv = a.inverse().unwrap();
        let p = a.map_point(&[3.0, 4.0]).unwrap();
        let back = inv.map_point(&p).unwrap();
        assert_abs_diff_eq!(back[0], 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(back[1], 4.0, epsilon = 1e-12);

        let singular = Affine::from_diagonal(&[0.0, 1.0], &[0.0, 0.0]).unwrap();
        assert!(matches!(singular.inverse(), Err(ImageError::SingularAffine)));
    }

    #[test]
    fn into_matrix_gives_homogeneous_form() {
        let a = Affine::from_diagonal(&[2.0, 3.0], &[1.0, -1.0]).unwrap();
        let m = a.clone().into_matrix();
        assert_eq!(m.shape(), (3, 3));
        assert_eq!(&m, a.matrix());
        assert_eq!(m.row(2).iter().cloned().collect::<Vec<_>>(), vec![0.0, 0.0, 1.0]);
        assert_eq!(Affine::new(m).unwrap(), a);
    }

    #[test]
    #[rustfmt::skip]
    fn drop_axes() {
        let a = Affine::new(DMatrix::from_row_slice(4, 4, &[
            2.0, 0.0, 0.0, 1.0,
            0.5, 3.0, 0.0, 2.0,
            0.0, 0.0, 4.0, 3.0,
            0.0, 0.0, 0.0, 1.0,
        ])).unwrap();
        let sliced = a.drop_input_axis(0, 2.0).unwrap();
        assert_eq!(sliced.ndim_in(), 2);
        assert_eq!(sliced.ndim_out(), 3);
        assert!(!sliced.is_square());
        assert_eq!(
            sliced.map_point(&[1.0, 1.0]).unwrap(),
            a.map_point(&[2.0, 1.0, 1.0]).unwrap()
        );

        let trimmed = sliced.drop_output_axis(0).unwrap();
        assert!(trimmed.is_square());
        assert_eq!(trimmed.map_point(&[1.0, 1.0]).unwrap(), vec![5.0, 7.0]);
        assert!(a.drop_output_axis(3).is_err());
        assert!(a.drop_input_axis(3, 0.0).is_err());
    }

    #[test]
    #[rustfmt::skip]
    fn separable_axes() {
        let a = Affine::new(DMatrix::from_row_slice(3, 3, &[
            2.0, 0.0, 0.0,
            0.1, 1.0, 0.0,
            0.0, 0.0, 1.0,
        ])).unwrap();
        assert!(!a.is_separable(0));
        assert!(!a.is_separable(1));
        assert!(Affine::identity(3).is_separable(0));
    }
}
