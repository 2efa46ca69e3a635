use std::fs;

use hog::load_hog_parameters;
use hog::error::HogError;
use hog::descriptor::hog_parameters::{HogParameters, GradientParameters, DEFAULT_MAX_DELTA};

fn write_temp(name: &str, contents: &str) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(format!("hog_parameters_{}_{}.yaml", name, std::process::id()));
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn missing_fields_take_defaults() {
    let path = write_temp("partial", "rows: 4\ngradient:\n  min_delta: 2.5\n");
    let parameters = load_hog_parameters(&path).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(parameters.rows, 4);
    assert_eq!(parameters.cols, 8);
    assert_eq!(parameters.bins, 8);
    assert_eq!(parameters.gradient.min_delta, 2.5);
    assert_eq!(parameters.gradient.max_delta, DEFAULT_MAX_DELTA);
    assert_eq!(parameters.gradient.aperture_size, 3);
}

#[test]
fn even_aperture_is_rejected() {
    let path = write_temp("aperture", "gradient:\n  aperture_size: 4\n");
    let result = load_hog_parameters(&path);
    fs::remove_file(&path).unwrap();
    assert!(matches!(result, Err(HogError::Parameters(_))));
}

#[test]
fn missing_file_is_io_error() {
    let result = load_hog_parameters(&std::env::temp_dir().join("hog_parameters_does_not_exist.yaml"));
    assert!(matches!(result, Err(HogError::Io(_))));
}

#[test]
fn display_names_output_files() {
    assert_eq!(HogParameters::default().to_string(), "r_8_c_8_b_8_a_3_d_1_10000");
}

#[test]
fn gradient_constants() {
    let parameters = GradientParameters { min_delta: 50.0, max_delta: 5.0, aperture_size: 5 };
    assert_eq!(parameters.delta_range(), (5.0, 50.0));
    assert!((parameters.gradient_epsilon() - 25e-4).abs() < 1e-15);
    assert!(parameters.validate().is_ok());
    assert!(GradientParameters { aperture_size: 9, ..parameters }.validate().is_err());
    assert!(HogParameters { rows: 0, ..HogParameters::default() }.validate().is_err());
}
