use log::warn;
use serde::{Serialize, Deserialize};

use crate::Float;
use crate::descriptor::hog_cell::{HogCell,HogCellMut};

pub const DEFAULT_NUM_ROWS: usize = 8;
pub const DEFAULT_NUM_COLS: usize = 8;
pub const DEFAULT_CELL_NUM_BINS: usize = 8;

/// Grid of num_rows x num_cols orientation histograms with cell_num_bins bins each.
/// Cell (r,c) occupies data[(r*num_cols+c)*cell_num_bins..][..cell_num_bins].
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
#[serde(from = "DescriptorData")]
pub struct HogDescriptor {
    num_rows: usize,
    num_cols: usize,
    cell_num_bins: usize,
    data: Vec<Float>
}

#[derive(Deserialize)]
struct DescriptorData {
    num_rows: usize,
    num_cols: usize,
    cell_num_bins: usize,
    data: Vec<Float>
}

impl From<DescriptorData> for HogDescriptor {
    fn from(raw: DescriptorData) -> HogDescriptor {
        HogDescriptor::from_data(raw.num_rows, raw.num_cols, raw.cell_num_bins, raw.data)
    }
}

impl Default for HogDescriptor {
    fn default() -> HogDescriptor {
        HogDescriptor::new(DEFAULT_NUM_ROWS, DEFAULT_NUM_COLS, DEFAULT_CELL_NUM_BINS)
    }
}

impl HogDescriptor {

    pub fn new(num_rows: usize, num_cols: usize, cell_num_bins: usize) -> HogDescriptor {
        HogDescriptor {
            num_rows,
            num_cols,
            cell_num_bins,
            data: vec![0.0; num_rows*num_cols*cell_num_bins]
        }
    }

    /// Takes ownership of existing histogram data. Data of the wrong length is discarded with a warning and
    /// the descriptor is zero filled instead.
    pub fn from_data(num_rows: usize, num_cols: usize, cell_num_bins: usize, data: Vec<Float>) -> HogDescriptor {
        let expected = num_rows*num_cols*cell_num_bins;
        if data.len() != expected {
            warn!("HogDescriptor {}x{}x{} passed an incompatible data vector of length {}, expected {}", num_rows, num_cols, cell_num_bins, data.len(), expected);
            return HogDescriptor::new(num_rows, num_cols, cell_num_bins);
        }
        HogDescriptor{num_rows, num_cols, cell_num_bins, data}
    }

    pub fn from_slice(num_rows: usize, num_cols: usize, cell_num_bins: usize, data: &[Float]) -> HogDescriptor {
        HogDescriptor::from_data(num_rows, num_cols, cell_num_bins, data.to_vec())
    }

    pub fn num_rows(&self) -> usize { self.num_rows }
    pub fn num_cols(&self) -> usize { self.num_cols }
    pub fn num_cells(&self) -> usize { self.num_rows*self.num_cols }
    pub fn cell_num_bins(&self) -> usize { self.cell_num_bins }
    pub fn data_store_size(&self) -> usize { self.num_cells()*self.cell_num_bins }

    pub fn as_slice(&self) -> &[Float] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<Float> {
        self.data
    }

    pub fn zero(&mut self) -> () {
        for v in self.data.iter_mut() {
            *v = 0.0;
        }
    }

    /// Replaces the storage with zeros when the shape changes. Does nothing otherwise.
    pub fn reshape(&mut self, num_rows: usize, num_cols: usize, cell_num_bins: usize) -> () {
        if self.has_shape(num_rows, num_cols, cell_num_bins) {
            return;
        }
        *self = HogDescriptor::new(num_rows, num_cols, cell_num_bins);
    }

    /// Assignment: adopts the shape of other and deep copies its storage.
    pub fn copy_from(&mut self, other: &HogDescriptor) -> () {
        self.num_rows = other.num_rows;
        self.num_cols = other.num_cols;
        self.cell_num_bins = other.cell_num_bins;
        self.data.clear();
        self.data.extend_from_slice(&other.data);
    }

    pub fn has_shape(&self, num_rows: usize, num_cols: usize, cell_num_bins: usize) -> bool {
        self.num_rows == num_rows && self.num_cols == num_cols && self.cell_num_bins == cell_num_bins
    }

    pub fn cell(&self, row: usize, col: usize) -> HogCell<'_> {
        let start = self.cell_offset(row, col);
        HogCell::new(&self.data[start..start+self.cell_num_bins])
    }

    pub fn cell_mut(&mut self, row: usize, col: usize) -> HogCellMut<'_> {
        let start = self.cell_offset(row, col);
        let end = start+self.cell_num_bins;
        HogCellMut::new(&mut self.data[start..end])
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = HogCell<'_>> + '_ {
        let bins = self.cell_num_bins;
        (0..self.num_cells()).map(move |i| HogCell::new(&self.data[i*bins..(i+1)*bins]))
    }

    fn cell_offset(&self, row: usize, col: usize) -> usize {
        assert!(row < self.num_rows && col < self.num_cols, "HoG cell ({},{}) out of range for a {}x{} descriptor", row, col, self.num_rows, self.num_cols);
        (row*self.num_cols + col)*self.cell_num_bins
    }
}
