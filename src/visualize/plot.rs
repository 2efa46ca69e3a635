extern crate plotters;

use plotters::prelude::*;

use std::fmt::Display;

use crate::{float,Float};
use crate::error::HogError;
use crate::descriptor::{hog_descriptor::HogDescriptor,hog_cell::CellBins};

fn plot_error<E: Display>(e: E) -> HogError {
    HogError::Plot(e.to_string())
}

fn get_min_max(data: &[Float]) -> (Float,Float) {

    let mut min = float::MAX;
    let mut max = float::MIN;

    for &v in data {
        if v < min {
            min = v;
        }

        if v > max {
            max = v;
        }
    }

    if data.is_empty() {
        min = 0.0;
        max = 0.0;
    }

    if(max-min) < 1e-5 {
        max = min + 1e-5;
    }

    (min,max)
}

/// Plots the flat descriptor, bins of consecutive cells side by side, into output_folder/file_name.
pub fn draw_descriptor_graph(hog_desc: &HogDescriptor, output_folder: &str, file_name: &str) -> Result<(), HogError> {
    let data = hog_desc.as_slice();
    let (min,max) = get_min_max(data);

    let path = format!("{}/{}",output_folder,file_name);
    let root = BitMapBackend::new(&path, (1024, 768)).into_drawing_area();
    root.fill(&WHITE).map_err(plot_error)?;

    let caption = format!("HoG {}x{}x{}", hog_desc.num_rows(), hog_desc.num_cols(), hog_desc.cell_num_bins());
    let mut chart = ChartBuilder::on(&root)
        .set_label_area_size(LabelAreaPosition::Left, 60)
        .set_label_area_size(LabelAreaPosition::Bottom, 60)
        .caption(caption, ("sans-serif", 40))
        .build_cartesian_2d(0..data.len().max(2) - 1, min..max).map_err(plot_error)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_desc("bin")
        .y_desc("weight")
        .draw().map_err(plot_error)?;

    chart.draw_series(
        LineSeries::new(
            (0..).zip(data.iter()).map(|(x, y)| (x, *y)),
            &RED.mix(0.6),
        )
    ).map_err(plot_error)?;

    // dominant bin of every cell with evidence
    let bins = hog_desc.cell_num_bins();
    chart.draw_series(
        hog_desc.cells().enumerate().filter(|(_, cell)| !cell.is_zero()).map(|(i, cell)| {
            Circle::new((i*bins + cell.max_bin_index(), cell.bin(cell.max_bin_index())), 3, GREEN.filled())
        })
    ).map_err(plot_error)?;

    root.present().map_err(plot_error)?;
    Ok(())
}
