extern crate image as image_rs;

use image_rs::{RgbImage, Rgb, DynamicImage, imageops::FilterType};

use crate::{float,Float};
use crate::image::Image;
use crate::image::image_encoding::ImageEncoding;
use crate::descriptor::{hog_descriptor::HogDescriptor,hog_cell::CellBins,cell_rectangles::HogCellRectangles};
use crate::features::geometry::{point::Point,rect::Rect,line::line_bresenham};

pub mod font;
pub mod plot;

pub const PURE_GREEN: Rgb<u8> = Rgb([0, 255, 0]);
pub const DEFAULT_RENDER_WIDTH: u32 = 400;
pub const DEFAULT_RENDER_HEIGHT: u32 = 400;

/// Draws every cell of the descriptor over the whole of out_image: the cell outline, the cell sum as a label
/// and, for cells with evidence, a stroke along the edge orientation of the strongest bin.
pub fn render_hog(hog_desc: &HogDescriptor, out_image: &mut RgbImage) -> () {
    let hog_rects = HogCellRectangles::for_image_size(hog_desc, out_image.width() as usize, out_image.height() as usize);
    let angle_step = float::consts::PI / hog_desc.cell_num_bins() as Float;

    for r in 0..hog_rects.num_rows() {
        for c in 0..hog_rects.num_cols() {
            let cur_rect = hog_rects.rect(r,c);
            let cur_cell = hog_desc.cell(r,c);

            draw_rect_outline(out_image, cur_rect, PURE_GREEN);
            let label = format!("{:03.1}", cur_cell.sum());
            font::draw_text(out_image, &label, cur_rect.x as isize + 3, cur_rect.bottom() as isize - 3, PURE_GREEN);

            if cur_cell.is_zero() {
                continue;
            }

            let xc = cur_rect.x as Float + cur_rect.width as Float / 2.0;
            let yc = cur_rect.y as Float + cur_rect.height as Float / 2.0;

            // bins hold gradient directions, the stroke follows the edge perpendicular to them
            let max_idx = cur_cell.max_bin_index();
            let angle = float::consts::FRAC_PI_2 + max_idx as Float * angle_step;

            let radius = cur_rect.height as Float * 0.9 / 2.0;
            let line_halflength = cur_cell.bin(max_idx) * radius;

            let start = Point::new((xc - line_halflength*angle.cos()).round() as isize, (yc - line_halflength*angle.sin()).round() as isize);
            let end = Point::new((xc + line_halflength*angle.cos()).round() as isize, (yc + line_halflength*angle.sin()).round() as isize);
            draw_line(out_image, &start, &end, PURE_GREEN);
        }
    }
}

/// Scales background into out_image and renders the descriptor on top. An empty out_image is replaced by one
/// of the default render size.
pub fn render_hog_over(background: &DynamicImage, hog_desc: &HogDescriptor, out_image: &mut RgbImage) -> () {
    if out_image.width() < 1 || out_image.height() < 1 {
        *out_image = RgbImage::new(DEFAULT_RENDER_WIDTH, DEFAULT_RENDER_HEIGHT);
    }

    if background.width() > 0 && background.height() > 0 {
        *out_image = background.resize_exact(out_image.width(), out_image.height(), FilterType::Lanczos3).to_rgb8();
    }

    render_hog(hog_desc, out_image);
}

pub fn draw_rect_outline(image: &mut RgbImage, rect: &Rect, color: Rgb<u8>) -> () {
    if rect.is_empty() {
        return;
    }
    let left = rect.x as isize;
    let top = rect.y as isize;
    let right = rect.right() as isize - 1;
    let bottom = rect.bottom() as isize - 1;

    for x in left..=right {
        put_pixel_clipped(image, x, top, color);
        put_pixel_clipped(image, x, bottom, color);
    }
    for y in top..=bottom {
        put_pixel_clipped(image, left, y, color);
        put_pixel_clipped(image, right, y, color);
    }
}

pub fn draw_line(image: &mut RgbImage, start: &Point<isize>, end: &Point<isize>, color: Rgb<u8>) -> () {
    for p in line_bresenham(start, end).points {
        put_pixel_clipped(image, p.x, p.y, color);
    }
}

pub fn put_pixel_clipped(image: &mut RgbImage, x: isize, y: isize, color: Rgb<u8>) -> () {
    if x < 0 || y < 0 || x >= image.width() as isize || y >= image.height() as isize {
        return;
    }
    image.put_pixel(x as u32, y as u32, color);
}

/// Bar chart of the bins of one cell, bars scaled relative to the largest bin.
pub fn display_histogram<C: CellBins>(cell: &C, width_scaling: usize, height: usize) -> Image {

    let bin_len = cell.num_bins();
    let width = width_scaling*bin_len;
    let mut image = Image::zeros(width, height, ImageEncoding::U8);
    if bin_len == 0 {
        return image;
    }
    let max_val = cell.bin(cell.max_bin_index());
    if max_val <= 0.0 {
        return image;
    }

    let max_height = height as Float*0.8;

    for i in 0..bin_len {
        let scale = cell.bin(i)/max_val;
        let bin_height = (max_height*scale) as usize;
        for w in 0..width_scaling {
            let x = i*width_scaling+w;
            for y in 0..bin_height {
                image.buffer[(height-1-y,x)] = 255.0;
            }
        }
    }

    image
}
