//! The transforms held by coordinate maps.
use crate::error::{ImageError, Result};
use crate::reference::affine::Affine;
use std::fmt;
use std::sync::Arc;

/// Signature of the function behind a [`FunctionMapping`].
///
/// [`FunctionMapping`]: ./struct.FunctionMapping.html
pub type MappingFn = dyn Fn(&[f64]) -> Vec<f64> + Send + Sync;

/// A mapping given by an arbitrary function of the input coordinates.
///
/// Cloning is cheap: clones share the same function.
#[derive(Clone)]
pub struct FunctionMapping {
    ndim_in: usize,
    ndim_out: usize,
    func: Arc<MappingFn>,
}

impl FunctionMapping {
    /// Wrap a function taking `ndim_in` coordinates and producing `ndim_out`.
    pub fn new<F>(ndim_in: usize, ndim_out: usize, func: F) -> Self
    where
        F: Fn(&[f64]) -> Vec<f64> + Send + Sync + 'static,
    {
        FunctionMapping {
            ndim_in,
            ndim_out,
            func: Arc::new(func),
        }
    }

    /// Number of input coordinates.
    pub fn ndim_in(&self) -> usize {
        self.ndim_in
    }

    /// Number of output coordinates.
    pub fn ndim_out(&self) -> usize {
        self.ndim_out
    }

    /// Apply the function to one point.
    ///
    /// # Errors
    ///
    /// - `ImageError::DimensionMismatch` if the point, or the function's
    /// output, has the wrong number of coordinates.
    pub fn map_point(&self, point: &[f64]) -> Result<Vec<f64>> {
        if point.len() != self.ndim_in {
            return Err(ImageError::DimensionMismatch(self.ndim_in, point.len()));
        }
        let out = (self.func)(point);
        if out.len() != self.ndim_out {
            return Err(ImageError::DimensionMismatch(self.ndim_out, out.len()));
        }
        Ok(out)
    }

    /// Fix input coordinate `axis` at `index`.
    ///
    /// # Errors
    ///
    /// - `ImageError::OutOfBounds` if there is no such input axis.
    pub fn slice_input(&self, axis: usize, index: f64) -> Result<Self> {
        if axis >= self.ndim_in {
            return Err(ImageError::OutOfBounds(axis, self.ndim_in));
        }
        let func = Arc::clone(&self.func);
        Ok(FunctionMapping::new(
            self.ndim_in - 1,
            self.ndim_out,
            move |point: &[f64]| {
                let mut full = Vec::with_capacity(point.len() + 1);
                full.extend_from_slice(&point[..axis]);
                full.push(index);
                full.extend_from_slice(&point[axis..]);
                func(&full)
            },
        ))
    }
}

impl fmt::Debug for FunctionMapping {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("FunctionMapping")
            .field("ndim_in", &self.ndim_in)
            .field("ndim_out", &self.ndim_out)
            .finish()
    }
}

impl PartialEq for FunctionMapping {
    /// Two function mappings are equal only if they share the same function.
    fn eq(&self, other: &Self) -> bool {
        self.ndim_in == other.ndim_in
            && self.ndim_out == other.ndim_out
            && Arc::ptr_eq(&self.func, &other.func)
    }
}

/// A transform from input to output coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum Mapping {
    /// Matrix transform in homogeneous coordinates.
    Affine(Affine),
    /// Any other transform.
    Function(FunctionMapping),
}

impl Mapping {
    /// Number of input coordinates.
    pub fn ndim_in(&self) -> usize {
        match self {
            Mapping::Affine(a) => a.ndim_in(),
            Mapping::Function(f) => f.ndim_in(),
        }
    }

    /// Number of output coordinates.
    pub fn ndim_out(&self) -> usize {
        match self {
            Mapping::Affine(a) => a.ndim_out(),
            Mapping::Function(f) => f.ndim_out(),
        }
    }

    /// Map a point from input to output coordinates.
    pub fn map_point(&self, point: &[f64]) -> Result<Vec<f64>> {
        match self {
            Mapping::Affine(a) => a.map_point(point),
            Mapping::Function(f) => f.map_point(point),
        }
    }

    /// Retrieve the affine transform, if this is an affine mapping.
    pub fn as_affine(&self) -> Option<&Affine> {
        match self {
            Mapping::Affine(a) => Some(a),
            Mapping::Function(_) => None,
        }
    }

    /// Fix input coordinate `axis` at `index`, yielding a mapping of one
    /// fewer input dimension with the same output space.
    pub fn slice_input(&self, axis: usize, index: f64) -> Result<Mapping> {
        match self {
            Mapping::Affine(a) => a.drop_input_axis(axis, index).map(Mapping::Affine),
            Mapping::Function(f) => f.slice_input(axis, index).map(Mapping::Function),
        }
    }
}

impl From<Affine> for Mapping {
    fn from(affine: Affine) -> Self {
        Mapping::Affine(affine)
    }
}

impl From<FunctionMapping> for Mapping {
    fn from(func: FunctionMapping) -> Self {
        Mapping::Function(func)
    }
}
