use std::ops::MulAssign;
use crate::Float;

/// Sums below this are treated as a cell without any gradient evidence.
pub const NOISE_FLOOR: Float = 1e-8;

/// Read access shared by both cell views.
pub trait CellBins {
    fn bins(&self) -> &[Float];

    fn num_bins(&self) -> usize {
        self.bins().len()
    }

    fn bin(&self, bin_no: usize) -> Float {
        self.bins()[bin_no]
    }

    fn sum(&self) -> Float {
        self.bins().iter().sum()
    }

    fn is_zero(&self) -> bool {
        self.sum() < NOISE_FLOOR
    }

    /// Index of the largest bin. Ties go to the lowest index, an empty cell yields 0.
    fn max_bin_index(&self) -> usize {
        let bins = self.bins();
        if bins.is_empty() {
            return 0;
        }

        let mut max_idx = 0;
        let mut max = bins[0];
        for (i, &v) in bins.iter().enumerate().skip(1) {
            if v > max {
                max_idx = i;
                max = v;
            }
        }
        max_idx
    }
}

/// Read only histogram of one descriptor cell. Borrows the descriptor storage.
#[derive(Debug,Clone,Copy)]
pub struct HogCell<'a> {
    bins: &'a [Float]
}

impl<'a> HogCell<'a> {
    pub fn new(bins: &'a [Float]) -> HogCell<'a> {
        HogCell{bins}
    }

    pub fn iter(&self) -> std::slice::Iter<'a, Float> {
        self.bins.iter()
    }
}

impl<'a> CellBins for HogCell<'a> {
    fn bins(&self) -> &[Float] {
        self.bins
    }
}

/// Mutable histogram of one descriptor cell. The bin count is that of the borrowed slice and never changes.
#[derive(Debug)]
pub struct HogCellMut<'a> {
    bins: &'a mut [Float]
}

impl<'a> HogCellMut<'a> {
    pub fn new(bins: &'a mut [Float]) -> HogCellMut<'a> {
        HogCellMut{bins}
    }

    pub fn as_cell(&self) -> HogCell<'_> {
        HogCell::new(&self.bins[..])
    }

    pub fn bin_mut(&mut self, bin_no: usize) -> &mut Float {
        &mut self.bins[bin_no]
    }

    pub fn zero(&mut self) -> () {
        for v in self.bins.iter_mut() {
            *v = 0.0;
        }
    }

    pub fn scale(&mut self, k: Float) -> () {
        for v in self.bins.iter_mut() {
            *v *= k;
        }
    }

    /// L1 normalization. Cells below the noise floor are zeroed instead.
    pub fn normalize(&mut self) -> () {
        let sum = self.sum();
        if sum < NOISE_FLOOR {
            self.zero();
        } else {
            self.scale(1.0/sum);
        }
    }

    /// Overwrites the bins. The source must hold exactly num_bins values.
    pub fn load_from<T: Copy + Into<Float>>(&mut self, bin_data: &[T]) -> () {
        assert_eq!(bin_data.len(), self.bins.len(), "cell has {} bins but was given {} values", self.bins.len(), bin_data.len());
        for (target, &source) in self.bins.iter_mut().zip(bin_data.iter()) {
            *target = source.into();
        }
    }
}

impl<'a> CellBins for HogCellMut<'a> {
    fn bins(&self) -> &[Float] {
        &self.bins[..]
    }
}

impl<'a> MulAssign<Float> for HogCellMut<'a> {
    fn mul_assign(&mut self, k: Float) {
        self.scale(k);
    }
}
