extern crate image as image_rs;
extern crate nalgebra as na;

use image_rs::{GrayImage, RgbImage, DynamicImage, Pixel, Luma};
use image_rs::flat::NormalForm;
use na::DMatrix;

use crate::Float;
use crate::error::HogError;
use crate::features::geometry::rect::Rect;
use self::image_encoding::ImageEncoding;


pub mod image_encoding;
pub mod filter;
pub mod mask;

/// Single channel intensity image. Row index is y, column index is x.
#[derive(Debug,Clone)]
pub struct Image {
    pub buffer: DMatrix<Float>,
    pub original_encoding: ImageEncoding
}

/// Anything that can be reduced to a single channel float intensity image.
pub trait IntensitySource {
    /// (width, height)
    fn dimensions(&self) -> (usize, usize);
    fn to_intensity(&self) -> Result<Image, HogError>;
}

impl Image {

    pub fn width(&self) -> usize {
        self.buffer.ncols()
    }

    pub fn height(&self) -> usize {
        self.buffer.nrows()
    }

    pub fn size(&self) -> usize {
        self.buffer.ncols()*self.buffer.nrows()
    }

    pub fn zeros(width: usize, height: usize, image_encoding: ImageEncoding) -> Image {
        let buffer = DMatrix::<Float>::zeros(height,width);
        Image{ buffer, original_encoding: image_encoding}
    }

    pub fn from_matrix(matrix: &DMatrix<Float>, original_encoding: ImageEncoding, normalize: bool) -> Image {
        let mut buffer = matrix.clone();

        if normalize {
            let max = buffer.amax();
            if max > 0.0 {
                buffer /= max;
            }
        }

        Image{ buffer, original_encoding}
    }

    pub fn from_gray_image(image: &GrayImage , normalize: bool, invert_y : bool) -> Image {
        let mut buffer = Image::image8_to_matrix(image, invert_y);

        if normalize {
            let max = buffer.amax();
            if max > 0.0 {
                buffer /= max;
            }
        }

        Image{ buffer, original_encoding: ImageEncoding::U8}
    }

    /// Converts to 8 bit luminance first, with the same fixed point weights as the usual BGR2GRAY conversion.
    pub fn from_rgb_image(image: &RgbImage, invert_y: bool) -> Image {
        let (width, height) = image.dimensions();
        let mut vec_column_major: Vec<Float> = Vec::with_capacity((width * height) as usize);
        for x in 0..width {
            for y in 0..height {
                let pixel = match invert_y {
                    true => image.get_pixel(x, height - 1 - y),
                    false => image.get_pixel(x, y)
                };
                let channels = pixel.channels();
                vec_column_major.push(rgb_to_gray(channels[0], channels[1], channels[2]) as Float);
            }
        }
        let buffer = DMatrix::<Float>::from_vec(height as usize, width as usize, vec_column_major);
        Image{ buffer, original_encoding: ImageEncoding::RGB8}
    }

    pub fn from_dynamic_image(image: &DynamicImage) -> Result<Image, HogError> {
        match image {
            DynamicImage::ImageLuma8(gray) => Ok(Image::from_gray_image(gray, false, false)),
            DynamicImage::ImageRgb8(rgb) => Ok(Image::from_rgb_image(rgb, false)),
            DynamicImage::ImageRgba8(_) => Ok(Image::from_rgb_image(&image.to_rgb8(), false)),
            other => Err(HogError::UnsupportedEncoding(format!("{:?}", other.color())))
        }
    }

    pub fn to_image(&self) -> GrayImage {
        Image::matrix_to_image(&self.buffer, self.original_encoding)
    }

    /// Copies out the part of the image covered by rect. The rect is clipped to the image.
    pub fn crop(&self, rect: &Rect) -> Image {
        let clipped = rect.clip(self.width(), self.height());
        let buffer = self.buffer.view((clipped.y, clipped.x), (clipped.height, clipped.width)).into_owned();
        Image{ buffer, original_encoding: self.original_encoding}
    }

    fn image8_to_matrix(gray_image: &GrayImage, invert_y: bool) -> DMatrix<Float> {
        debug_assert!(gray_image.sample_layout().is_normal(NormalForm::RowMajorPacked));

        let (width, height) = gray_image.dimensions();
        let size = (width * height) as usize;
        let mut vec_column_major: Vec<Float> = Vec::with_capacity(size);
        for x in 0..width {
            for y in 0..height {
                let pixel = match invert_y {
                    true =>  gray_image.get_pixel(x, height - 1 - y),
                    false => gray_image.get_pixel(x, y)
                };
                let pixel_value = pixel.channels()[0];
                vec_column_major.push(pixel_value as Float);
            }
        }
        DMatrix::<Float>::from_vec(height as usize, width as usize, vec_column_major)
    }

    fn matrix_to_image(matrix: &DMatrix<Float>,  encoding: ImageEncoding) -> GrayImage {
        let (rows, cols) = matrix.shape();

        let mut gray_image = GrayImage::new(cols as u32, rows as u32);
        if rows == 0 || cols == 0 {
            return gray_image;
        }
        let max = matrix.max();
        let min = matrix.min();
        for c in 0..cols {
            for r in 0..rows {
                let val = *matrix.index((r, c));
                let pixel_value =  encoding.normalize_to_gray(max,min,val);
                gray_image.put_pixel(c as u32, r as u32, Luma([pixel_value]));
            }
        }
        gray_image
    }
}

pub fn rgb_to_gray(r: u8, g: u8, b: u8) -> u8 {
    const R_WEIGHT: u32 = 4899;
    const G_WEIGHT: u32 = 9617;
    const B_WEIGHT: u32 = 1868;
    const SHIFT: u32 = 14;
    ((r as u32 * R_WEIGHT + g as u32 * G_WEIGHT + b as u32 * B_WEIGHT + (1 << (SHIFT - 1))) >> SHIFT) as u8
}

impl IntensitySource for Image {
    fn dimensions(&self) -> (usize, usize) {
        (self.width(), self.height())
    }

    fn to_intensity(&self) -> Result<Image, HogError> {
        Ok(self.clone())
    }
}

impl IntensitySource for GrayImage {
    fn dimensions(&self) -> (usize, usize) {
        (self.width() as usize, self.height() as usize)
    }

    fn to_intensity(&self) -> Result<Image, HogError> {
        Ok(Image::from_gray_image(self, false, false))
    }
}

impl IntensitySource for RgbImage {
    fn dimensions(&self) -> (usize, usize) {
        (self.width() as usize, self.height() as usize)
    }

    fn to_intensity(&self) -> Result<Image, HogError> {
        Ok(Image::from_rgb_image(self, false))
    }
}

impl IntensitySource for DynamicImage {
    fn dimensions(&self) -> (usize, usize) {
        (self.width() as usize, self.height() as usize)
    }

    fn to_intensity(&self) -> Result<Image, HogError> {
        Image::from_dynamic_image(self)
    }
}
