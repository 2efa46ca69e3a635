extern crate image as image_rs;
extern crate nalgebra as na;

use image_rs::GrayImage;
use log::{debug,trace,warn};
use na::DMatrix;

use crate::Float;
use crate::error::HogError;
use crate::image::{Image,IntensitySource,image_encoding::ImageEncoding};
use crate::features::geometry::rect::Rect;
use crate::descriptor::{
    hog_descriptor::HogDescriptor,
    hog_cell::CellBins,
    cell_rectangles::HogCellRectangles,
    histogram::Histogram,
    hog_parameters::GradientParameters,
    gradient::{gradient_field,fold_to_180_degrees,GradientField}};

pub const ORIENTATION_RANGE: Float = 180.0;

/// Computes HoG descriptors from an image and a per pixel validity mask.
///
/// The calculator keeps its intermediate buffers between calls so they can be inspected and reused.
/// They are overwritten by every call, so one calculator must not be shared across threads without a lock.
#[derive(Debug,Clone)]
pub struct HogCalculator {
    parameters: GradientParameters,
    gray_image: Image,
    gradients: GradientField,
    pixels_to_use: DMatrix<bool>,
    cell_rects: HogCellRectangles,
    histogram: Histogram
}

impl Default for HogCalculator {
    fn default() -> HogCalculator {
        HogCalculator::new()
    }
}

impl HogCalculator {

    pub fn new() -> HogCalculator {
        HogCalculator::with_parameters(GradientParameters::default())
    }

    pub fn with_parameters(parameters: GradientParameters) -> HogCalculator {
        HogCalculator {
            parameters,
            gray_image: Image::zeros(0, 0, ImageEncoding::F64),
            gradients: GradientField::empty(),
            pixels_to_use: DMatrix::<bool>::from_element(0,0,false),
            cell_rects: HogCellRectangles::default(),
            histogram: Histogram::new(0, ORIENTATION_RANGE)
        }
    }

    pub fn parameters(&self) -> &GradientParameters {
        &self.parameters
    }

    /// Folded [0,180) orientation of the last call.
    pub fn orientation(&self) -> &DMatrix<Float> {
        &self.gradients.orientation
    }

    /// Pixels that passed both the mask and the gradient check in the last call.
    pub fn eligible_pixels(&self) -> &DMatrix<bool> {
        &self.pixels_to_use
    }

    pub fn cell_rectangles(&self) -> &HogCellRectangles {
        &self.cell_rects
    }

    /// Fills hog_desc with the histogram of gradients of image, counting only pixels where mask is non-zero.
    ///
    /// Empty images or masks zero the descriptor. Invalid gradient parameters and an image encoding that cannot
    /// be reduced to intensity are reported as errors and leave the descriptor untouched.
    pub fn calc_hog<S: IntensitySource + ?Sized>(&mut self, image: &S, mask: &GrayImage, hog_desc: &mut HogDescriptor) -> Result<(), HogError> {
        self.parameters.validate().map_err(|e| {
            warn!("HogCalculator rejected its gradient parameters: {}", e);
            e
        })?;

        let (width, height) = image.dimensions();
        let (mask_width, mask_height) = (mask.width() as usize, mask.height() as usize);
        if width < 1 || height < 1 || mask_width < 1 || mask_height < 1 {
            hog_desc.zero();
            return Ok(());
        }

        if (width, height) != (mask_width, mask_height) {
            warn!("HogCalculator passed a {}x{} mask for a {}x{} image", mask_width, mask_height, width, height);
            hog_desc.zero();
            return Err(HogError::DimensionMismatch{image_width: width, image_height: height, mask_width, mask_height});
        }

        self.gray_image = image.to_intensity().map_err(|e| {
            warn!("HogCalculator cannot compute gradients: {}", e);
            e
        })?;

        self.gradients = gradient_field(&self.gray_image, &self.parameters);
        fold_to_180_degrees(&mut self.gradients.orientation);

        let valid = &self.gradients.valid;
        self.pixels_to_use = DMatrix::<bool>::from_fn(height, width, |y, x| {
            valid[(y,x)] && mask.get_pixel(x as u32, y as u32)[0] != 0
        });

        self.cell_rects = HogCellRectangles::for_descriptor(hog_desc, Rect::from_size(width, height));
        self.histogram.reset(hog_desc.cell_num_bins());

        debug!("HoG of {}x{} image into {}x{}x{} cells, {} eligible pixels", width, height,
            hog_desc.num_rows(), hog_desc.num_cols(), hog_desc.cell_num_bins(),
            self.pixels_to_use.iter().filter(|&&p| p).count());

        for r in 0..self.cell_rects.num_rows() {
            for c in 0..self.cell_rects.num_cols() {
                self.weighted_histogram_hog_cell(hog_desc, r, c);
            }
        }

        Ok(())
    }

    fn weighted_histogram_hog_cell(&mut self, hog_desc: &mut HogDescriptor, row: usize, col: usize) -> () {
        let mut hog_cell = hog_desc.cell_mut(row, col);
        let roi = *self.cell_rects.rect(row, col);

        if roi.is_empty() {
            hog_cell.zero();
            return;
        }

        self.histogram.reset(hog_cell.num_bins());
        let mut num_ok_pixels = 0usize;
        for y in roi.y..roi.bottom() {
            for x in roi.x..roi.right() {
                if !self.pixels_to_use[(y,x)] {
                    continue;
                }
                num_ok_pixels += 1;
                self.histogram.add_measurement(self.gradients.orientation[(y,x)], 1.0);
            }
        }

        if num_ok_pixels < 1 {
            hog_cell.zero();
            return;
        }

        let ok_pixels_weighting_factor = num_ok_pixels as Float / roi.area() as Float;

        hog_cell.load_from(&self.histogram.bins[..]);
        hog_cell.normalize();
        hog_cell.scale(ok_pixels_weighting_factor);

        trace!("HoG cell ({},{}) {:?}: {} eligible pixels, max bin {}", row, col, roi, num_ok_pixels, hog_cell.max_bin_index());
    }
}
