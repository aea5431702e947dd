//! Named, ordered sets of axes.
use crate::error::{ImageError, Result};

/// Axis names given to voxel coordinate systems, fastest varying last.
const VOXEL_AXIS_NAMES: [&str; 7] = ["i", "j", "k", "l", "m", "n", "o"];

/// A coordinate system: a name and an ordered set of uniquely named axes.
///
/// The same type describes both sides of a coordinate map, the input
/// (voxel, or array index) space and the output (world) space.
///
/// # Example
///
/// ```
/// # use neuroimaging::CoordinateSystem;
/// let world = CoordinateSystem::new("world", &["t", "z", "y", "x"])?;
/// assert_eq!(world.ndim(), 4);
/// assert_eq!(world.index_of("y"), Some(2));
/// let spatial = world.drop_axis(0)?;
/// assert_eq!(spatial.axes(), &["z", "y", "x"]);
/// # Ok::<(), neuroimaging::ImageError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoordinateSystem {
    name: String,
    axes: Vec<String>,
}

impl CoordinateSystem {
    /// Create a new coordinate system.
    ///
    /// # Errors
    ///
    /// - `ImageError::DuplicateAxis` if two axes share a name.
    pub fn new<N, A>(name: N, axes: &[A]) -> Result<Self>
    where
        N: Into<String>,
        A: AsRef<str>,
    {
        let mut out: Vec<String> = Vec::with_capacity(axes.len());
        for axis in axes {
            let axis = axis.as_ref();
            if out.iter().any(|a| a == axis) {
                return Err(ImageError::DuplicateAxis(axis.to_owned()));
            }
            out.push(axis.to_owned());
        }
        Ok(CoordinateSystem {
            name: name.into(),
            axes: out,
        })
    }

    /// Create a voxel coordinate system of `ndim` axes named `i, j, k, ...`.
    /// Past the seventh axis, names continue as `axis7, axis8, ...`.
    pub fn voxel(ndim: usize) -> Self {
        let axes = (0..ndim)
            .map(|d| match VOXEL_AXIS_NAMES.get(d) {
                Some(name) => (*name).to_owned(),
                None => format!("axis{}", d),
            })
            .collect();
        CoordinateSystem {
            name: "voxel".to_owned(),
            axes,
        }
    }

    /// The name of this coordinate system.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The ordered axis names.
    pub fn axes(&self) -> &[String] {
        &self.axes
    }

    /// Number of axes.
    pub fn ndim(&self) -> usize {
        self.axes.len()
    }

    /// Position of the axis with the given name, if any.
    pub fn index_of(&self, axis: &str) -> Option<usize> {
        self.axes.iter().position(|a| a == axis)
    }

    /// Obtain a copy of this system without the axis at position `axis`.
    ///
    /// # Errors
    ///
    /// - `ImageError::OutOfBounds` if there is no such axis.
    pub fn drop_axis(&self, axis: usize) -> Result<Self> {
        if axis >= self.ndim() {
            return Err(ImageError::OutOfBounds(axis, self.ndim()));
        }
        let mut axes = self.axes.clone();
        let _ = axes.remove(axis);
        Ok(CoordinateSystem {
            name: self.name.clone(),
            axes,
        })
    }

    /// Obtain a copy of this system under another name.
    pub fn renamed<N: Into<String>>(&self, name: N) -> Self {
        CoordinateSystem {
            name: name.into(),
            axes: self.axes.clone(),
        }
    }
}
