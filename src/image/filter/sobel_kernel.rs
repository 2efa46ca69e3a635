extern crate nalgebra as na;

use na::DMatrix;
use crate::Float;
use super::kernel::Kernel;

/// One separable factor of a Sobel operator. The derivative factor runs along the
/// differentiation axis, the smoothing factor across it.
pub struct SobelKernel {
    kernel: DMatrix<Float>
}

impl SobelKernel {

    pub fn derivative(aperture_size: usize) -> SobelKernel {
        let coefficients = match aperture_size {
            1 => vec![-1.0,0.0,1.0],
            k => binomial_kernel(k, 1)
        };
        SobelKernel {
            kernel: DMatrix::from_vec(1,coefficients.len(),coefficients)
        }
    }

    pub fn smoothing(aperture_size: usize) -> SobelKernel {
        let coefficients = match aperture_size {
            1 => vec![1.0],
            k => binomial_kernel(k, 0)
        };
        SobelKernel {
            kernel: DMatrix::from_vec(1,coefficients.len(),coefficients)
        }
    }
}

impl Kernel for SobelKernel {
    fn kernel(&self) -> &DMatrix<Float> {
        &self.kernel
    }

    fn step(&self) -> usize {
        1
    }

    fn normalizing_constant(&self) -> Float {
        1.0
    }
}

/// Builds the length `size` kernel of derivative `order` by repeated summing (smoothing)
/// followed by repeated differencing of the unit impulse.
fn binomial_kernel(size: usize, order: usize) -> Vec<Float> {
    assert!(size > order, "kernel of size {} cannot carry a derivative of order {}", size, order);
    let mut kernel = vec![0i64; size+1];
    kernel[0] = 1;

    for _ in 0..(size - order - 1) {
        let mut old = kernel[0];
        for j in 1..=size {
            let new = kernel[j] + kernel[j-1];
            kernel[j-1] = old;
            old = new;
        }
    }

    for _ in 0..order {
        let mut old = -kernel[0];
        for j in 1..=size {
            let new = kernel[j-1] - kernel[j];
            kernel[j-1] = old;
            old = new;
        }
    }

    kernel.truncate(size);
    kernel.into_iter().map(|v| v as Float).collect()
}
