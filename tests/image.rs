extern crate ndarray;
extern crate neuroimaging;
#[macro_use]
extern crate pretty_assertions;

use ndarray::Axis;
use neuroimaging::{FmriImageList, Image, ImageError, ImageList, Sliceable, ToNdArray};

mod util;

use util::functional_image;

#[test]
fn list_from_items_keeps_world_space() {
    let image = functional_image([3, 2, 4, 4], 2.0);
    let list = ImageList::from_frames_of(&image).unwrap();
    assert_eq!(list.len(), 3);

    // items are not trimmed: time stays in the output space
    let item = &list[2];
    assert_eq!(item.coordmap().ndim_in(), 3);
    assert_eq!(item.coordmap().output_coords().axes(), &["t", "z", "y", "x"]);
    assert_eq!(
        item.coordmap().map_point(&[0.0, 0.0, 0.0]).unwrap(),
        vec![4.0, -30.0, -20.0, -20.0]
    );
    assert_eq!(&list.to_ndarray().unwrap(), image.data());
}

#[test]
fn fmri_list_from_items() {
    let image = functional_image([5, 2, 2, 2], 2.0);
    let fmri = FmriImageList::from_frames_of(&image, 2.0).unwrap();
    assert_eq!(fmri.len(), 5);
    assert_eq!(fmri.frametimes(), vec![0.0, 2.0, 4.0, 6.0, 8.0]);
    assert_eq!(fmri[3], image.get_slice(0, 3).unwrap());
}

#[test]
fn slice_along_inner_axis() {
    let image = functional_image([3, 2, 4, 4], 2.0);
    let slice = image.get_slice(2, 1).unwrap();
    assert_eq!(slice.shape(), &[3, 2, 4]);
    assert_eq!(slice.data(), &image.data().index_axis(Axis(2), 1));
    assert_eq!(slice.coordmap().input_coords().axes(), &["i", "j", "l"]);

    match image.get_slice(2, 4) {
        Err(ImageError::OutOfBounds(4, 4)) => {}
        other => panic!("unexpected result {:?}", other),
    }
}

#[test]
fn zero_dimensional_image_has_no_items() {
    let scalar = Image::from_array(ndarray::arr0(1.0f64));
    match ImageList::from_frames_of(&scalar) {
        Err(ImageError::DimensionMismatch(1, 0)) => {}
        other => panic!("unexpected result {:?}", other),
    }
}
