extern crate nalgebra as na;
extern crate image as image_rs;

use std::path::Path;
use std::fs::File;
use std::io::BufReader;

use crate::descriptor::hog_parameters::HogParameters;
use crate::error::HogError;

pub mod error;
pub mod image;
pub mod features;
pub mod descriptor;
pub mod visualize;

macro_rules! define_float {
    ($f:tt) => {
        pub use std::$f as float;
        pub type Float = $f;
    }
}

define_float!(f64);

pub use crate::descriptor::{hog_cell::{HogCell,HogCellMut,CellBins},hog_descriptor::HogDescriptor,cell_rectangles::HogCellRectangles,hog_calculator::HogCalculator};
pub use crate::features::geometry::rect::Rect;

#[repr(u8)]
#[derive(Debug,Copy,Clone,PartialEq)]
pub enum GradientDirection {
    HORIZINTAL,
    VERTICAL
}

/// Reads HoG parameters from a yaml file. Fields missing in the file take their default values.
pub fn load_hog_parameters(path: &Path) -> Result<HogParameters, HogError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let parameters: HogParameters = serde_yaml::from_reader(reader)?;
    parameters.validate()?;
    Ok(parameters)
}
