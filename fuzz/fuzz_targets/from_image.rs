#![no_main]
use libfuzzer_sys::fuzz_target;
use nalgebra::DMatrix;
use ndarray::{Array, IxDyn};
use neuroimaging::{
    from_image_with_options, fmri_generator, Affine, CoordinateMap, FromImageOptions, Image,
    ToNdArray,
};

fuzz_target!(|data: &[u8]| {
    if data.len() < 4 {
        return;
    }
    let shape: Vec<usize> = data[..4].iter().map(|b| usize::from(b % 5)).collect();
    let rest = &data[4..];

    let mut matrix = DMatrix::<f64>::identity(5, 5);
    for (i, b) in rest.iter().take(20).enumerate() {
        matrix[(i / 5, i % 5)] = f64::from(*b) - 128.0;
    }
    let affine = match Affine::new(matrix) {
        Ok(affine) => affine,
        Err(_) => return,
    };
    let coordmap = match CoordinateMap::from_affine(affine, &["t", "z", "y", "x"]) {
        Ok(coordmap) => coordmap,
        Err(_) => return,
    };
    let n: usize = shape.iter().product();
    let values = Array::from_shape_vec(IxDyn(&shape), (0..n).map(|v| v as f32).collect());
    let image = match values.map(|v| Image::new(v, coordmap)) {
        Ok(Ok(image)) => image,
        _ => return,
    };

    let strict = rest.get(20).map(|b| b & 1 == 1).unwrap_or(false);
    let options = FromImageOptions::new().strict_time_axis(strict);
    if let Ok(fmri) = from_image_with_options(&image, &options) {
        assert_eq!(fmri.len(), shape[0]);
        if let Ok(stacked) = fmri.to_ndarray() {
            assert_eq!(&stacked, image.data());
        }
        if let Ok(series) = fmri_generator(&fmri, None) {
            assert_eq!(series.len(), shape[1]);
        }
    }
});
