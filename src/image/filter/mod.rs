extern crate nalgebra as na;

use na::DMatrix;
use crate::image::Image;
use crate::{Float, GradientDirection};
use self::{kernel::Kernel,sobel_kernel::SobelKernel};

pub mod kernel;
pub mod sobel_kernel;

#[derive(Debug,Copy,Clone,PartialEq)]
pub enum Extremum {
    Min,
    Max
}

/// Correlates every row (HORIZINTAL) or column (VERTICAL) with the kernel. Samples outside the image replicate the border.
pub fn filter_1d_convolution(source: &Image, filter_direction: GradientDirection, filter_kernel: &dyn Kernel) -> Image {
    let kernel = filter_kernel.kernel();
    let step = filter_kernel.step();
    let kernel_radius_signed = filter_kernel.radius() as isize;

    let buffer = &source.buffer;
    let width = buffer.ncols();
    let height = buffer.nrows();
    let mut target = Image::zeros(width, height, source.original_encoding);

    for y in 0..height {
        for x in 0..width {
            let mut acc = 0.0;
            for kenel_idx in (-kernel_radius_signed..kernel_radius_signed+1).step_by(step) {
                let sample_value = match filter_direction {
                    GradientDirection::HORIZINTAL => {
                        let sample_idx = clamp_index((x as isize)+kenel_idx, width);
                        buffer[(y,sample_idx)]
                    },
                    GradientDirection::VERTICAL => {
                        let sample_idx = clamp_index((y as isize)+kenel_idx, height);
                        buffer[(sample_idx,x)]
                    }
                };

                let kenel_value = kernel[(0,(kenel_idx + kernel_radius_signed) as usize)];
                acc += sample_value*kenel_value;
            }

            target.buffer[(y,x)] = acc/filter_kernel.normalizing_constant();
        }
    }

    target
}

/// Unnormalized Sobel derivatives (dx, dy) for the given aperture size.
pub fn sobel_gradients(source: &Image, aperture_size: usize) -> (DMatrix<Float>, DMatrix<Float>) {
    let derivative = SobelKernel::derivative(aperture_size);
    let smoothing = SobelKernel::smoothing(aperture_size);

    let dx_hor = filter_1d_convolution(source, GradientDirection::HORIZINTAL, &derivative);
    let dx = filter_1d_convolution(&dx_hor, GradientDirection::VERTICAL, &smoothing);

    let dy_vert = filter_1d_convolution(source, GradientDirection::VERTICAL, &derivative);
    let dy = filter_1d_convolution(&dy_vert, GradientDirection::HORIZINTAL, &smoothing);

    (dx.buffer, dy.buffer)
}

/// Minimum (erosion) or maximum (dilation) over the (2*radius+1) square window around every pixel. Borders are replicated.
pub fn extremum_filter(source: &DMatrix<Float>, radius: usize, extremum: Extremum) -> DMatrix<Float> {
    let (height, width) = source.shape();
    if radius == 0 || width == 0 || height == 0 {
        return source.clone();
    }
    let radius_signed = radius as isize;
    let pick = |a: Float, b: Float| match extremum {
        Extremum::Min => a.min(b),
        Extremum::Max => a.max(b)
    };

    let mut horizontal = DMatrix::<Float>::zeros(height, width);
    for y in 0..height {
        for x in 0..width {
            let mut acc = source[(y,x)];
            for offset in -radius_signed..=radius_signed {
                acc = pick(acc, source[(y,clamp_index(x as isize + offset, width))]);
            }
            horizontal[(y,x)] = acc;
        }
    }

    let mut target = DMatrix::<Float>::zeros(height, width);
    for y in 0..height {
        for x in 0..width {
            let mut acc = horizontal[(y,x)];
            for offset in -radius_signed..=radius_signed {
                acc = pick(acc, horizontal[(clamp_index(y as isize + offset, height),x)]);
            }
            target[(y,x)] = acc;
        }
    }

    target
}

fn clamp_index(idx: isize, len: usize) -> usize {
    match idx {
        i if i < 0 => 0,
        i if i >= len as isize => len - 1,
        i => i as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::image_encoding::ImageEncoding;

    fn ramp(width: usize, height: usize) -> Image {
        let matrix = DMatrix::<Float>::from_fn(height, width, |_, c| 10.0 * c as Float);
        Image::from_matrix(&matrix, ImageEncoding::F64, false)
    }

    #[test]
    fn sobel_on_horizontal_ramp() {
        let (dx, dy) = sobel_gradients(&ramp(5, 4), 3);
        // interior: (1+2+1) * (10 - (-10))
        assert_eq!(dx[(1,2)], 80.0);
        // replicated border halves the central difference
        assert_eq!(dx[(1,0)], 40.0);
        assert!(dy.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn extremum_filter_replicates_border() {
        let m = DMatrix::<Float>::from_row_slice(1, 4, &[3.0, 1.0, 4.0, 1.5]);
        let lo = extremum_filter(&m, 1, Extremum::Min);
        let hi = extremum_filter(&m, 1, Extremum::Max);
        assert_eq!(lo.as_slice(), &[1.0, 1.0, 1.0, 1.5]);
        assert_eq!(hi.as_slice(), &[3.0, 4.0, 4.0, 4.0]);
    }
}
