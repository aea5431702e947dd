//! An application for summarizing a synthetic fMRI run: frame timing, the
//! world position of the volume origin, and the mean signal of each slice.

extern crate ndarray;
extern crate neuroimaging;
extern crate tracing_subscriber;

use ndarray::{Array, IxDyn};
use neuroimaging::{
    fmri_generator, from_image_with_options, Affine, CoordinateMap, FromImageOptions, Image,
};
use std::env;

fn main() {
    tracing_subscriber::fmt::init();

    let mut args = env::args().skip(1);
    let nframes: usize = args
        .next()
        .map(|a| a.parse().expect("Number of frames must be an integer"))
        .unwrap_or(8);

    // a slow drift over time on top of a gradient along the slices
    let data = Array::from_shape_fn(IxDyn(&[nframes, 4, 8, 8]), |ix| {
        100.0 + ix[0] as f64 * 0.5 + ix[1] as f64 * 10.0
    });
    let affine = Affine::from_diagonal(&[2.0, 3.0, 2.5, 2.5], &[0.0, -6.0, -10.0, -10.0])
        .expect("Failed to build affine");
    let coordmap = CoordinateMap::from_affine(affine, &["t", "z", "y", "x"])
        .expect("Failed to build coordinate map");
    let image = Image::new(data, coordmap).expect("Failed to build image");

    let options = FromImageOptions::new().slicetimes(vec![0.0, 0.5, 1.0, 1.5]);
    let run = from_image_with_options(&image, &options).expect("Failed to convert image");

    println!("frames: {}", run.len());
    println!("TR: {}", run.tr());
    println!("frame times: {:?}", run.frametimes());
    println!("slice times: {:?}", run.slicetimes().unwrap_or(&[]));

    let first = run.get_frame(0).expect("No frames");
    let origin = first
        .coordmap()
        .map_point(&[0.0, 0.0, 0.0])
        .expect("Failed to map origin");
    println!("voxel origin in world space: {:?}", origin);

    for (slice, series) in fmri_generator(&run, None).expect("Failed to iterate time series") {
        println!("slice {}: mean signal {:.2}", slice, series.mean().unwrap_or(0.0));
    }
}
