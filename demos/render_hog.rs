extern crate image as image_rs;
extern crate hog;

use std::env;
use std::path::Path;
use color_eyre::eyre::{Result,eyre};
use log::info;

use hog::{HogCalculator,HogDescriptor,load_hog_parameters};
use hog::descriptor::hog_parameters::HogParameters;
use hog::image::{Image,mask::{mask_from_non_zero_rgb,find_bounding_box,crop_mask}};
use hog::visualize::{render_hog_over,plot::draw_descriptor_graph};

// usage: render_hog <image> [parameters.yaml]
fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::init();

    let args = env::args().collect::<Vec<String>>();
    let image_path = args.get(1).ok_or_else(|| eyre!("usage: render_hog <image> [parameters.yaml]"))?;
    let parameters = match args.get(2) {
        Some(conf) => load_hog_parameters(Path::new(conf))?,
        None => HogParameters::default()
    };
    let image_out_folder = "output";

    let in_image = image_rs::open(Path::new(image_path))?.to_rgb8();

    // every non-black pixel is relevant, the region of interest is the box around them
    let image_mask = mask_from_non_zero_rgb(&in_image);
    let roi_box = find_bounding_box(&image_mask, 0);
    info!("region of interest {:?}", roi_box);

    let roi_image = Image::from_rgb_image(&in_image, false).crop(&roi_box);
    let roi_mask = crop_mask(&image_mask, &roi_box);

    let mut hog_desc = HogDescriptor::new(parameters.rows, parameters.cols, parameters.bins);
    let mut hog_calc = HogCalculator::with_parameters(parameters.gradient);
    hog_calc.calc_hog(&roi_image, &roi_mask, &mut hog_desc)?;

    let background = image_rs::DynamicImage::ImageLuma8(roi_image.to_image());
    let mut out_image = image_rs::RgbImage::new(0, 0);
    render_hog_over(&background, &hog_desc, &mut out_image);

    std::fs::create_dir_all(image_out_folder)?;
    out_image.save(format!("{}/hog_{}.png", image_out_folder, parameters))?;
    draw_descriptor_graph(&hog_desc, image_out_folder, &format!("hog_graph_{}.png", parameters))?;
    println!("{}", serde_yaml::to_string(&hog_desc)?);

    Ok(())
}
