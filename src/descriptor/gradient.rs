extern crate nalgebra as na;

use na::DMatrix;
use crate::{float,Float};
use crate::image::Image;
use crate::image::filter::{sobel_gradients,extremum_filter,Extremum};
use crate::descriptor::hog_parameters::GradientParameters;

/// Per pixel gradient direction in degrees over [0,360) and whether it is well defined.
#[derive(Debug,Clone)]
pub struct GradientField {
    pub orientation: DMatrix<Float>,
    pub valid: DMatrix<bool>
}

impl GradientField {
    pub fn empty() -> GradientField {
        GradientField {
            orientation: DMatrix::<Float>::zeros(0,0),
            valid: DMatrix::<bool>::from_element(0,0,false)
        }
    }
}

/// Sobel orientation of every pixel. A pixel is only valid when its derivatives are not both negligible and
/// the intensity range of its aperture neighbourhood lies within the configured deltas.
/// Invalid pixels get orientation 0.
pub fn gradient_field(intensity: &Image, parameters: &GradientParameters) -> GradientField {
    let (height, width) = intensity.buffer.shape();
    let (dx, dy) = sobel_gradients(intensity, parameters.aperture_size);
    let epsilon = parameters.gradient_epsilon();
    let (min_delta, max_delta) = parameters.delta_range();

    let radius = (parameters.aperture_size - 1)/2;
    let lo = extremum_filter(&intensity.buffer, radius, Extremum::Min);
    let hi = extremum_filter(&intensity.buffer, radius, Extremum::Max);

    let mut orientation = DMatrix::<Float>::zeros(height, width);
    let mut valid = DMatrix::<bool>::from_element(height, width, false);

    for x in 0..width {
        for y in 0..height {
            let grad_x = dx[(y,x)];
            let grad_y = dy[(y,x)];
            let flat = grad_x.abs() < epsilon && grad_y.abs() < epsilon;
            let delta = hi[(y,x)] - lo[(y,x)];
            if flat || delta < min_delta || delta > max_delta {
                continue;
            }
            orientation[(y,x)] = degrees_360(grad_x, grad_y);
            valid[(y,x)] = true;
        }
    }

    GradientField{orientation, valid}
}

/// Direction of (grad_x, grad_y) in degrees over [0,360). The y axis points down the image rows.
pub fn degrees_360(grad_x: Float, grad_y: Float) -> Float {
    let degrees = grad_y.atan2(grad_x)*180.0/float::consts::PI;
    let wrapped = match degrees {
        d if d < 0.0 => d + 360.0,
        d => d
    };
    match wrapped {
        d if d >= 360.0 => 0.0,
        d => d
    }
}

/// Drops the polarity of a direction: values of 180 and above are moved down by 180.
pub fn fold_to_180_degrees(orientation: &mut DMatrix<Float>) -> () {
    for deg in orientation.iter_mut() {
        if *deg >= 180.0 {
            *deg -= 180.0;
        }
    }
}
