extern crate image as image_rs;

use std::collections::VecDeque;
use image_rs::{GrayImage, RgbImage, Luma, imageops};

use crate::features::geometry::rect::Rect;

pub const MASK_ON: u8 = 255;

/// Flags every pixel with a non-zero value.
pub fn mask_from_non_zero(image: &GrayImage) -> GrayImage {
    GrayImage::from_fn(image.width(), image.height(), |x, y| {
        match image.get_pixel(x, y)[0] {
            0 => Luma([0]),
            _ => Luma([MASK_ON])
        }
    })
}

/// Flags every pixel that is not pure black.
pub fn mask_from_non_zero_rgb(image: &RgbImage) -> GrayImage {
    GrayImage::from_fn(image.width(), image.height(), |x, y| {
        match image.get_pixel(x, y).0 {
            [0, 0, 0] => Luma([0]),
            _ => Luma([MASK_ON])
        }
    })
}

pub fn crop_mask(mask: &GrayImage, rect: &Rect) -> GrayImage {
    let clipped = rect.clip(mask.width() as usize, mask.height() as usize);
    imageops::crop_imm(mask, clipped.x as u32, clipped.y as u32, clipped.width as u32, clipped.height as u32).to_image()
}

/// Bounding boxes of the 8-connected regions of non-zero pixels, in scan order of their first pixel.
pub fn find_bounding_boxes(mask: &GrayImage) -> Vec<Rect> {
    let width = mask.width() as usize;
    let height = mask.height() as usize;
    let mut visited = vec![false; width*height];
    let mut boxes = Vec::<Rect>::new();
    let mut queue = VecDeque::<(usize,usize)>::new();

    for y in 0..height {
        for x in 0..width {
            let idx = y*width + x;
            if visited[idx] || mask.get_pixel(x as u32, y as u32)[0] == 0 {
                continue;
            }

            visited[idx] = true;
            queue.push_back((x,y));
            let (mut x_min, mut y_min, mut x_max, mut y_max) = (x, y, x, y);

            while let Some((cx, cy)) = queue.pop_front() {
                x_min = x_min.min(cx);
                x_max = x_max.max(cx);
                y_min = y_min.min(cy);
                y_max = y_max.max(cy);

                for ny in cy.saturating_sub(1)..=(cy+1).min(height-1) {
                    for nx in cx.saturating_sub(1)..=(cx+1).min(width-1) {
                        let n_idx = ny*width + nx;
                        if !visited[n_idx] && mask.get_pixel(nx as u32, ny as u32)[0] != 0 {
                            visited[n_idx] = true;
                            queue.push_back((nx,ny));
                        }
                    }
                }
            }

            boxes.push(Rect::new(x_min, y_min, x_max - x_min + 1, y_max - y_min + 1));
        }
    }

    boxes
}

pub fn prune_small_boxes(boxes: &Vec<Rect>, min_area: usize) -> Vec<Rect> {
    boxes.iter().filter(|b| b.area() >= min_area).cloned().collect::<Vec<Rect>>()
}

/// Union of all boxes, or an empty rect when there are none.
pub fn bounding_box_of(boxes: &Vec<Rect>) -> Rect {
    boxes.iter().fold(Rect::default(), |acc, b| acc.union(b))
}

/// Box around every non-zero region of at least min_area pixels.
pub fn find_bounding_box(mask: &GrayImage, min_area: usize) -> Rect {
    bounding_box_of(&prune_small_boxes(&find_bounding_boxes(mask), min_area))
}
