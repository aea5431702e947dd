use ndarray::{Array, IxDyn};
use neuroimaging::{Affine, CoordinateMap, Image};

/// World axis names of the synthetic functional images.
pub const WORLD_AXES: [&str; 4] = ["t", "z", "y", "x"];

/// Known affine of the synthetic functional images: `tr` seconds per frame,
/// 3 mm slices and 2 mm in-plane voxels.
#[rustfmt::skip]
pub fn functional_affine(tr: f64) -> Affine {
    Affine::from_diagonal(
        &[tr, 3.0, 2.0, 2.0],
        &[0.0, -30.0, -20.0, -20.0],
    ).unwrap()
}

/// A synthetic functional image of the given 4D shape, time first, where
/// each sample encodes its own position as `t * 1000 + z * 100 + y * 10 + x`.
pub fn functional_image(shape: [usize; 4], tr: f64) -> Image<f64> {
    let data = Array::from_shape_fn(IxDyn(&shape), |ix| {
        (ix[0] * 1000 + ix[1] * 100 + ix[2] * 10 + ix[3]) as f64
    });
    let coordmap = CoordinateMap::from_affine(functional_affine(tr), &WORLD_AXES).unwrap();
    Image::new(data, coordmap).unwrap()
}

/// A single 3D volume filled with `value`.
#[allow(dead_code)]
pub fn volume(shape: [usize; 3], value: f64) -> Image<f64> {
    Image::from_array(Array::from_elem(IxDyn(&shape), value))
}
