pub mod hog_cell;
pub mod hog_descriptor;
pub mod cell_rectangles;
pub mod histogram;
pub mod gradient;
pub mod hog_parameters;
pub mod hog_calculator;
