use crate::Float;


/// Uniform histogram over [0, range). Measurements outside the range are ignored.
#[derive(Debug,Clone)]
pub struct Histogram {
    pub range: Float,
    pub bins: Vec<Float>
}

impl Histogram {

    pub fn new(bin_len: usize, range: Float) -> Histogram {
        Histogram{
            range,
            bins: vec![0.0;bin_len]
        }
    }

    /// Zeroes the bins and adjusts their count.
    pub fn reset(&mut self, bin_len: usize) -> () {
        self.bins.clear();
        self.bins.resize(bin_len, 0.0);
    }

    pub fn bin_range(&self) -> Float {
        self.range/(self.bins.len() as Float)
    }

    pub fn value_to_index(&self, value: Float) -> Option<usize> {
        if self.bins.is_empty() || !(value >= 0.0 && value < self.range) {
            return None;
        }
        let index = (value/self.bin_range()).floor() as usize;
        Some(index.min(self.bins.len()-1))
    }

    /// Returns false when the value fell outside the histogram.
    pub fn add_measurement(&mut self, value: Float, weight: Float) -> bool {
        match self.value_to_index(value) {
            Some(index) => {
                self.bins[index] += weight;
                true
            },
            None => false
        }
    }
}
