//! Coordinate maps: a mapping between two coordinate systems.
use crate::error::{ImageError, Result};
use crate::reference::affine::Affine;
use crate::reference::coordinate_system::CoordinateSystem;
use crate::reference::mapping::Mapping;

/// Association between an input (array index) coordinate system and an
/// output (world) coordinate system through a [`Mapping`].
///
/// [`Mapping`]: ../mapping/enum.Mapping.html
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateMap {
    mapping: Mapping,
    input_coords: CoordinateSystem,
    output_coords: CoordinateSystem,
}

impl CoordinateMap {
    /// Validate and create a new coordinate map.
    ///
    /// # Errors
    ///
    /// - `ImageError::DimensionMismatch` if the mapping's input or output
    /// dimensionality does not match the respective coordinate system.
    pub fn new<M>(
        mapping: M,
        input_coords: CoordinateSystem,
        output_coords: CoordinateSystem,
    ) -> Result<Self>
    where
        M: Into<Mapping>,
    {
        let mapping = mapping.into();
        if mapping.ndim_in() != input_coords.ndim() {
            return Err(ImageError::DimensionMismatch(
                input_coords.ndim(),
                mapping.ndim_in(),
            ));
        }
        if mapping.ndim_out() != output_coords.ndim() {
            return Err(ImageError::DimensionMismatch(
                output_coords.ndim(),
                mapping.ndim_out(),
            ));
        }
        Ok(CoordinateMap {
            mapping,
            input_coords,
            output_coords,
        })
    }

    /// Create an affine coordinate map from a voxel system to a world
    /// system with the given axis names.
    pub fn from_affine<A: AsRef<str>>(affine: Affine, world_axes: &[A]) -> Result<Self> {
        let input = CoordinateSystem::voxel(affine.ndim_in());
        let output = CoordinateSystem::new("world", world_axes)?;
        CoordinateMap::new(affine, input, output)
    }

    /// The identity map from voxel indices onto a world space of the same
    /// axis names.
    pub fn identity(ndim: usize) -> Self {
        let input = CoordinateSystem::voxel(ndim);
        let output = input.renamed("world");
        CoordinateMap {
            mapping: Mapping::Affine(Affine::identity(ndim)),
            input_coords: input,
            output_coords: output,
        }
    }

    /// The underlying mapping.
    pub fn mapping(&self) -> &Mapping {
        &self.mapping
    }

    /// The input coordinate system.
    pub fn input_coords(&self) -> &CoordinateSystem {
        &self.input_coords
    }

    /// The output coordinate system.
    pub fn output_coords(&self) -> &CoordinateSystem {
        &self.output_coords
    }

    /// Number of input dimensions.
    pub fn ndim_in(&self) -> usize {
        self.input_coords.ndim()
    }

    /// Number of output dimensions.
    pub fn ndim_out(&self) -> usize {
        self.output_coords.ndim()
    }

    /// Map a point of input coordinates to output coordinates.
    pub fn map_point(&self, point: &[f64]) -> Result<Vec<f64>> {
        self.mapping.map_point(point)
    }

    /// The map going from output to input coordinates.
    ///
    /// # Errors
    ///
    /// - `ImageError::InvalidMapping` if the mapping is not affine.
    /// - Any error of [`Affine::inverse`].
    ///
    /// [`Affine::inverse`]: ../affine/struct.Affine.html#method.inverse
    pub fn inverse(&self) -> Result<Self> {
        let affine = self.mapping.as_affine().ok_or(ImageError::InvalidMapping)?;
        Ok(CoordinateMap {
            mapping: Mapping::Affine(affine.inverse()?),
            input_coords: self.output_coords.clone(),
            output_coords: self.input_coords.clone(),
        })
    }

    /// Fix input axis `axis` at `index`: the result has one fewer input
    /// dimension and the same output space.
    pub fn slice_input(&self, axis: usize, index: usize) -> Result<Self> {
        let mapping = self.mapping.slice_input(axis, index as f64)?;
        let input_coords = self.input_coords.drop_axis(axis)?;
        CoordinateMap::new(mapping, input_coords, self.output_coords.clone())
    }

    /// Move the parts out of the coordinate map.
    pub fn into_parts(self) -> (Mapping, CoordinateSystem, CoordinateSystem) {
        (self.mapping, self.input_coords, self.output_coords)
    }
}
