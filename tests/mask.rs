use image::{GrayImage, RgbImage, Rgb, Luma};

use hog::Rect;
use hog::image::mask::{mask_from_non_zero, mask_from_non_zero_rgb, crop_mask, find_bounding_boxes, prune_small_boxes, bounding_box_of, find_bounding_box, MASK_ON};

fn two_blobs() -> GrayImage {
    let mut mask = GrayImage::new(20, 10);
    for y in 1..4 {
        for x in 2..6 {
            mask.put_pixel(x, y, Luma([7]));
        }
    }
    // diagonal neighbours belong to the same region
    mask.put_pixel(12, 6, Luma([1]));
    mask.put_pixel(13, 7, Luma([1]));
    mask
}

#[test]
fn regions_are_boxed_in_scan_order() {
    let boxes = find_bounding_boxes(&two_blobs());
    assert_eq!(boxes, vec![Rect::new(2, 1, 4, 3), Rect::new(12, 6, 2, 2)]);
}

#[test]
fn small_regions_are_pruned() {
    let boxes = find_bounding_boxes(&two_blobs());
    assert_eq!(prune_small_boxes(&boxes, 5), vec![Rect::new(2, 1, 4, 3)]);
    assert_eq!(find_bounding_box(&two_blobs(), 5), Rect::new(2, 1, 4, 3));
}

#[test]
fn union_of_regions() {
    assert_eq!(find_bounding_box(&two_blobs(), 0), Rect::new(2, 1, 12, 7));
    assert!(bounding_box_of(&Vec::new()).is_empty());
    assert!(find_bounding_box(&GrayImage::new(5, 5), 0).is_empty());
}

#[test]
fn non_zero_pixels_become_mask() {
    let mask = mask_from_non_zero(&two_blobs());
    assert_eq!(mask.get_pixel(2, 1)[0], MASK_ON);
    assert_eq!(mask.get_pixel(13, 7)[0], MASK_ON);
    assert_eq!(mask.get_pixel(0, 0)[0], 0);

    let mut rgb = RgbImage::new(3, 1);
    rgb.put_pixel(1, 0, Rgb([0, 0, 3]));
    let mask = mask_from_non_zero_rgb(&rgb);
    assert_eq!(mask.get_pixel(0, 0)[0], 0);
    assert_eq!(mask.get_pixel(1, 0)[0], MASK_ON);
}

#[test]
fn crop_is_clipped() {
    let cropped = crop_mask(&two_blobs(), &Rect::new(10, 5, 30, 30));
    assert_eq!(cropped.dimensions(), (10, 5));
    assert_eq!(cropped.get_pixel(2, 1)[0], 1);
}
