#![allow(dead_code)]
use image::{GrayImage, Luma};

/// Left half dark, right half bright. The edge runs between columns width/2-1 and width/2.
pub fn vertical_step(width: u32, height: u32, dark: u8, bright: u8) -> GrayImage {
    GrayImage::from_fn(width, height, |x, _| if x < width/2 { Luma([dark]) } else { Luma([bright]) })
}

/// Top half dark, bottom half bright.
pub fn horizontal_step(width: u32, height: u32, dark: u8, bright: u8) -> GrayImage {
    GrayImage::from_fn(width, height, |_, y| if y < height/2 { Luma([dark]) } else { Luma([bright]) })
}

pub fn constant(width: u32, height: u32, value: u8) -> GrayImage {
    GrayImage::from_pixel(width, height, Luma([value]))
}

/// Mask that is on inside columns [x_start, x_end).
pub fn column_mask(width: u32, height: u32, x_start: u32, x_end: u32) -> GrayImage {
    GrayImage::from_fn(width, height, |x, _| if x >= x_start && x < x_end { Luma([255]) } else { Luma([0]) })
}
