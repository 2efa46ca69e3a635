use std::fmt;
use serde::{Serialize, Deserialize};

use crate::Float;
use crate::error::HogError;
use crate::descriptor::hog_descriptor::{DEFAULT_NUM_ROWS,DEFAULT_NUM_COLS,DEFAULT_CELL_NUM_BINS};

pub const DEFAULT_MIN_DELTA: Float = 1.0;
pub const DEFAULT_MAX_DELTA: Float = 10000.0;
pub const DEFAULT_APERTURE_SIZE: usize = 3;
pub const MAX_APERTURE_SIZE: usize = 7;

/// Constants of the gradient operator. A pixel only has a usable orientation when the intensity range of its
/// aperture neighbourhood lies within [min_delta, max_delta].
#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
#[serde(default)]
pub struct GradientParameters {
    pub min_delta: Float,
    pub max_delta: Float,
    pub aperture_size: usize
}

impl Default for GradientParameters {
    fn default() -> GradientParameters {
        GradientParameters {
            min_delta: DEFAULT_MIN_DELTA,
            max_delta: DEFAULT_MAX_DELTA,
            aperture_size: DEFAULT_APERTURE_SIZE
        }
    }
}

impl GradientParameters {
    pub fn validate(&self) -> Result<(), HogError> {
        if self.aperture_size % 2 == 0 || self.aperture_size > MAX_APERTURE_SIZE {
            return Err(HogError::Parameters(format!("aperture size must be 1, 3, 5 or 7, got {}", self.aperture_size)));
        }
        if self.min_delta < 0.0 || self.max_delta < 0.0 {
            return Err(HogError::Parameters(format!("gradient deltas must be non-negative, got [{}, {}]", self.min_delta, self.max_delta)));
        }
        Ok(())
    }

    /// Below this per-axis derivative magnitude the orientation is undefined.
    pub fn gradient_epsilon(&self) -> Float {
        1e-4*(self.aperture_size*self.aperture_size) as Float
    }

    /// (min, max), whichever order they were given in.
    pub fn delta_range(&self) -> (Float, Float) {
        (self.min_delta.min(self.max_delta), self.min_delta.max(self.max_delta))
    }
}

#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
#[serde(default)]
pub struct HogParameters {
    pub rows: usize,
    pub cols: usize,
    pub bins: usize,
    pub gradient: GradientParameters
}

impl Default for HogParameters {
    fn default() -> HogParameters {
        HogParameters {
            rows: DEFAULT_NUM_ROWS,
            cols: DEFAULT_NUM_COLS,
            bins: DEFAULT_CELL_NUM_BINS,
            gradient: GradientParameters::default()
        }
    }
}

impl HogParameters {
    pub fn validate(&self) -> Result<(), HogError> {
        if self.rows == 0 || self.cols == 0 || self.bins == 0 {
            return Err(HogError::Parameters(format!("grid shape must be positive, got {}x{}x{}", self.rows, self.cols, self.bins)));
        }
        self.gradient.validate()
    }
}

impl fmt::Display for HogParameters {

    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "r_{}_c_{}_b_{}_a_{}_d_{}_{}", self.rows, self.cols, self.bins, self.gradient.aperture_size, self.gradient.min_delta, self.gradient.max_delta)
    }

}
